//! The real terminal.
//!
//! Raw mode and size queries go through crossterm. Input bytes are read
//! straight from the stdin file descriptor with `poll(2)` / `read(2)` so the
//! decoder sees the raw stream, and no bytes end up stranded in a userspace
//! buffer that `poll` cannot see.

use std::io::{self, Write};
use std::time::Duration;

use crate::input::ByteSource;
use crate::renderer::ansi;

use super::Backend;

/// Backend bound to the process's stdin / stdout.
#[derive(Debug, Default)]
pub struct TerminalBackend {
    raw: bool,
}

impl TerminalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&mut self, f: impl FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        f(&mut stdout)?;
        stdout.flush()
    }
}

impl ByteSource for TerminalBackend {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        let mut fds = libc::pollfd {
            fd: libc::STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };
        let millis = timeout.as_millis().min(libc::c_int::MAX as u128) as libc::c_int;

        // SAFETY: `fds` is a valid pollfd and the count matches.
        let rc = unsafe { libc::poll(&mut fds, 1, millis) };
        if rc < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(false);
            }
            return Err(err);
        }
        Ok(rc > 0)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // SAFETY: the pointer and length describe a valid writable slice.
        let n = unsafe { libc::read(libc::STDIN_FILENO, buf.as_mut_ptr().cast(), buf.len()) };
        if n < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(n as usize)
    }
}

impl Backend for TerminalBackend {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        if self.raw {
            return Ok(());
        }
        crossterm::terminal::enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        if !self.raw {
            return Ok(());
        }
        crossterm::terminal::disable_raw_mode()?;
        self.raw = false;
        Ok(())
    }

    fn enter_alt_screen(&mut self) -> io::Result<()> {
        self.emit(|w| ansi::enter_alt_screen(w))
    }

    fn exit_alt_screen(&mut self) -> io::Result<()> {
        self.emit(|w| {
            ansi::reset(w)?;
            ansi::exit_alt_screen(w)
        })
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.emit(|w| ansi::cursor_hide(w))
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.emit(|w| ansi::cursor_show(w))
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.emit(|w| ansi::clear_screen(w))
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.emit(|w| w.write_all(bytes))
    }
}
