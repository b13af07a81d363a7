//! Keyboard input.
//!
//! Raw bytes come from a [`ByteSource`] and are turned into one
//! [`InputEvent`] per frame by the [`InputDecoder`].

pub mod decoder;

use std::io;
use std::time::Duration;

pub use decoder::{decode_utf8, utf8_sequence_len, InputDecoder};

// =============================================================================
// Types
// =============================================================================

/// Key kinds recognized by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Key {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Tab,
    Esc,
    CtrlC,
    Backspace,
    /// Printable character, payload in [`InputEvent::ch`].
    Rune,
}

/// A single decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputEvent {
    pub key: Key,
    /// Set only when `key` is [`Key::Rune`].
    pub ch: Option<char>,
}

impl InputEvent {
    /// The empty event used on timeouts and skipped reads.
    pub const NONE: Self = Self {
        key: Key::None,
        ch: None,
    };

    #[inline]
    pub const fn key(key: Key) -> Self {
        Self { key, ch: None }
    }

    #[inline]
    pub const fn rune(ch: char) -> Self {
        Self {
            key: Key::Rune,
            ch: Some(ch),
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.key == Key::None
    }
}

// =============================================================================
// Byte Source
// =============================================================================

/// A blocking-with-timeout source of raw input bytes.
pub trait ByteSource {
    /// Wait up to `timeout` for input. Returns `true` when bytes are ready.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Read whatever is available into `buf`.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }
}
