//! # spark-immediate
//!
//! Immediate-mode terminal UI core for Rust.
//!
//! ## Architecture
//!
//! Every iteration of the host's loop declares the whole UI from scratch.
//! Nothing about a widget survives the frame; only focus, scroll and the
//! pending input bytes carry over.
//!
//! ```text
//! bytes → InputDecoder → navigate → widget declarations
//!       → layout_widgets → compose → serialize → one write
//! ```
//!
//! Focus ids are assigned to buttons in declaration order, and the same
//! order drives layout, so navigation and highlighting always agree.
//!
//! ## Modules
//!
//! - [`types`] - Cells, render lines, focus ids
//! - [`input`] - Raw byte decoding into key events
//! - [`widget`] - Per-frame widget list
//! - [`navigation`] - Focus movement and activation
//! - [`layout`] - Wrapping, button blocks, horizontal groups
//! - [`renderer`] - Border, scroll-to-focus, escape-code output
//! - [`backend`] - Terminal and in-memory backends
//! - [`context`] - The frame state machine and host API

pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod renderer;
pub mod types;
pub mod widget;

// Re-export commonly used items
pub use types::*;

pub use backend::{Backend, TestBackend};
#[cfg(unix)]
pub use backend::TerminalBackend;

#[cfg(unix)]
pub use context::run;
pub use context::{run_with, FrameContext, RunState, Ui};

pub use config::Config;
pub use error::{Error, Result};

pub use input::{decode_utf8, ByteSource, InputDecoder, InputEvent, Key};

pub use layout::{
    button_block, char_width, content_width, layout_widgets, pack_blocks, str_width, wrap_text,
    Block,
};

pub use navigation::{navigate, NavState};

pub use renderer::{adjust_scroll, compose, serialize, OutputBuffer, ScreenBuffer};

pub use widget::{Widget, WidgetList};
