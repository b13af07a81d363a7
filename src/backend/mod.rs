//! Terminal backends.
//!
//! The frame loop only talks to the OS through the [`Backend`] trait:
//! raw mode, the alternate screen, cursor visibility, terminal size, the
//! bounded input poll and the final byte write.
//!
//! - [`TerminalBackend`] - the real terminal (crossterm + libc, unix only)
//! - [`TestBackend`] - in-memory backend with scripted input

#[cfg(unix)]
mod terminal;

#[cfg(unix)]
pub use terminal::TerminalBackend;
pub use test::TestBackend;

use std::io;

use crate::input::ByteSource;

/// OS-facing primitives consumed by the frame loop.
pub trait Backend: ByteSource {
    fn enable_raw_mode(&mut self) -> io::Result<()>;
    fn disable_raw_mode(&mut self) -> io::Result<()>;
    fn enter_alt_screen(&mut self) -> io::Result<()>;
    fn exit_alt_screen(&mut self) -> io::Result<()>;
    fn hide_cursor(&mut self) -> io::Result<()>;
    fn show_cursor(&mut self) -> io::Result<()>;
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Terminal size as (columns, rows).
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Write a complete frame (or control sequence) in one go.
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl<B: Backend + ?Sized> Backend for &mut B {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        (**self).enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        (**self).disable_raw_mode()
    }

    fn enter_alt_screen(&mut self) -> io::Result<()> {
        (**self).enter_alt_screen()
    }

    fn exit_alt_screen(&mut self) -> io::Result<()> {
        (**self).exit_alt_screen()
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        (**self).hide_cursor()
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        (**self).show_cursor()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        (**self).clear_screen()
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        (**self).size()
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_bytes(bytes)
    }
}
