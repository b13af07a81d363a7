//! Error types for the frame loop.

use std::io;
use thiserror::Error;

/// Errors surfaced to the host.
///
/// Input read failures never show up here; the decoder turns them into
/// empty events.
#[derive(Error, Debug)]
pub enum Error {
    /// Raw mode could not be enabled. Fatal, raised before the loop starts.
    #[error("failed to enable raw mode: {0}")]
    RawMode(#[source] io::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for frame loop operations
pub type Result<T> = std::result::Result<T, Error>;
