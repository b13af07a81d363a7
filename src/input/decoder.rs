//! Raw byte decoder.
//!
//! Turns a byte stream arriving in arbitrary chunks into discrete key
//! events, one per call:
//! - `ESC [ A/B/C/D` arrow keys (always three bytes)
//! - Multi-byte UTF-8 characters (2-4 bytes)
//! - Control keys and printable ASCII (one byte)
//!
//! Bytes are only read from the source once the pending buffer is fully
//! drained. A UTF-8 sequence whose continuation bytes have not arrived yet
//! loses its lead byte instead of waiting for the next read.

use std::time::Duration;

use super::{ByteSource, InputEvent, Key};
use crate::config::DEFAULT_READ_CHUNK;

// =============================================================================
// Decoder
// =============================================================================

/// Stateful decoder holding bytes that have been read but not yet decoded.
#[derive(Debug)]
pub struct InputDecoder {
    buf: Vec<u8>,
    read_chunk: usize,
}

impl InputDecoder {
    pub fn new() -> Self {
        Self::with_read_chunk(DEFAULT_READ_CHUNK)
    }

    /// Decoder reading at most `read_chunk` bytes per refill.
    pub fn with_read_chunk(read_chunk: usize) -> Self {
        Self {
            buf: Vec::with_capacity(64),
            read_chunk: read_chunk.max(1),
        }
    }

    /// Bytes buffered but not yet decoded.
    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.buf.is_empty()
    }

    /// Number of buffered bytes.
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.buf.len()
    }

    /// Append bytes directly, bypassing the source.
    pub fn feed(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Produce exactly one event.
    ///
    /// With an empty buffer this waits on `source` for at most `timeout`.
    /// Timeouts, read errors and zero-length reads all yield
    /// [`InputEvent::NONE`].
    pub fn next_event<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
        timeout: Duration,
    ) -> InputEvent {
        if self.buf.is_empty() && !self.refill(source, timeout) {
            return InputEvent::NONE;
        }

        let event = self.decode_one();
        if !event.is_none() {
            tracing::trace!(?event, pending = self.buf.len(), "decoded input");
        }
        event
    }

    fn refill<S: ByteSource + ?Sized>(&mut self, source: &mut S, timeout: Duration) -> bool {
        match source.poll(timeout) {
            Ok(true) => {}
            Ok(false) => return false,
            Err(e) => {
                tracing::debug!(error = %e, "input poll failed");
                return false;
            }
        }

        let mut chunk = vec![0u8; self.read_chunk];
        match source.read(&mut chunk) {
            Ok(0) => false,
            Ok(n) => {
                self.buf.extend_from_slice(&chunk[..n]);
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "input read failed");
                false
            }
        }
    }

    /// Decode one event from the front of the buffer.
    fn decode_one(&mut self) -> InputEvent {
        let Some(&first) = self.buf.first() else {
            return InputEvent::NONE;
        };

        // ESC [ X
        if first == 0x1B && self.buf.len() >= 3 && self.buf[1] == b'[' {
            let event = match self.buf[2] {
                b'A' => InputEvent::key(Key::Up),
                b'B' => InputEvent::key(Key::Down),
                b'C' => InputEvent::key(Key::Right),
                b'D' => InputEvent::key(Key::Left),
                _ => InputEvent::NONE,
            };
            self.consume(3);
            return event;
        }

        // UTF-8 multi-byte
        if first >= 0xC0 {
            let Some(len) = utf8_sequence_len(first) else {
                // 0xF8..=0xFF never starts a sequence.
                self.consume(1);
                return InputEvent::NONE;
            };
            if self.buf.len() < len {
                // Continuation bytes not here yet: drop the lead byte.
                self.consume(1);
                return InputEvent::NONE;
            }
            let event = match decode_utf8(&self.buf[..len]) {
                Some((ch, _)) => InputEvent::rune(ch),
                None => InputEvent::NONE,
            };
            self.consume(len);
            return event;
        }

        self.consume(1);
        match first {
            0x03 => InputEvent::key(Key::CtrlC),
            0x0D | 0x0A => InputEvent::key(Key::Enter),
            0x20 => InputEvent::key(Key::Space),
            0x09 => InputEvent::key(Key::Tab),
            0x1B => InputEvent::key(Key::Esc),
            0x7F | 0x08 => InputEvent::key(Key::Backspace),
            0x21..=0x7E => InputEvent::rune(first as char),
            _ => InputEvent::NONE,
        }
    }

    #[inline]
    fn consume(&mut self, n: usize) {
        self.buf.drain(..n.min(self.buf.len()));
    }
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// UTF-8 Helpers
// =============================================================================

/// Sequence length announced by a UTF-8 lead byte.
///
/// Returns `None` for continuation bytes (`0x80..=0xBF`) and for bytes that
/// are never valid in UTF-8 (`0xF8..=0xFF`).
#[inline]
pub fn utf8_sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0x80..=0xBF => None,
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        0xF8..=0xFF => None,
    }
}

/// Smallest code point that needs a `len`-byte sequence.
#[inline]
fn min_code_point(len: usize) -> u32 {
    match len {
        1 => 0,
        2 => 0x80,
        3 => 0x800,
        _ => 0x1_0000,
    }
}

/// Decode the character at the front of `bytes`.
///
/// Returns the character and the number of bytes it occupies, or `None`
/// when the sequence is truncated, starts with a byte that cannot lead,
/// is an overlong form (e.g. `C0 80` for NUL), or does not encode a valid
/// scalar value. Continuation bytes are masked, not validated.
pub fn decode_utf8(bytes: &[u8]) -> Option<(char, usize)> {
    let &lead = bytes.first()?;
    let len = utf8_sequence_len(lead)?;
    if bytes.len() < len {
        return None;
    }

    let tail = |i: usize| (bytes[i] & 0x3F) as u32;
    let cp = match len {
        1 => lead as u32,
        2 => ((lead & 0x1F) as u32) << 6 | tail(1),
        3 => ((lead & 0x0F) as u32) << 12 | tail(1) << 6 | tail(2),
        _ => ((lead & 0x07) as u32) << 18 | tail(1) << 12 | tail(2) << 6 | tail(3),
    };

    if cp < min_code_point(len) {
        return None;
    }
    char::from_u32(cp).map(|ch| (ch, len))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io;

    /// Source replaying scripted chunks, one per read.
    struct ChunkSource {
        chunks: VecDeque<Vec<u8>>,
        polls: usize,
    }

    impl ChunkSource {
        fn new(chunks: &[&[u8]]) -> Self {
            Self {
                chunks: chunks.iter().map(|c| c.to_vec()).collect(),
                polls: 0,
            }
        }
    }

    impl ByteSource for ChunkSource {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            self.polls += 1;
            Ok(!self.chunks.is_empty())
        }

        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let chunk = self.chunks.pop_front().unwrap_or_default();
            let n = chunk.len().min(buf.len());
            buf[..n].copy_from_slice(&chunk[..n]);
            Ok(n)
        }
    }

    struct FailingSource;

    impl ByteSource for FailingSource {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(true)
        }

        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    fn decode_all(data: &[u8]) -> Vec<InputEvent> {
        let mut decoder = InputDecoder::new();
        decoder.feed(data);
        let mut source = ChunkSource::new(&[]);
        let mut events = Vec::new();
        while decoder.has_pending() {
            events.push(decoder.next_event(&mut source, Duration::ZERO));
        }
        events
    }

    #[test]
    fn test_timeout_yields_none() {
        let mut decoder = InputDecoder::new();
        let mut source = ChunkSource::new(&[]);
        assert_eq!(decoder.next_event(&mut source, Duration::ZERO), InputEvent::NONE);
        assert_eq!(source.polls, 1);
        assert!(!decoder.has_pending());
    }

    #[test]
    fn test_read_error_yields_none() {
        let mut decoder = InputDecoder::new();
        assert_eq!(decoder.next_event(&mut FailingSource, Duration::ZERO), InputEvent::NONE);
    }

    #[test]
    fn test_zero_length_read_yields_none() {
        let mut decoder = InputDecoder::new();
        let mut source = ChunkSource::new(&[b""]);
        assert_eq!(decoder.next_event(&mut source, Duration::ZERO), InputEvent::NONE);
    }

    #[test]
    fn test_control_keys() {
        let events = decode_all(b"\x03\r\n \t\x7f\x08");
        let keys: Vec<Key> = events.iter().map(|e| e.key).collect();
        assert_eq!(
            keys,
            vec![
                Key::CtrlC,
                Key::Enter,
                Key::Enter,
                Key::Space,
                Key::Tab,
                Key::Backspace,
                Key::Backspace,
            ]
        );
    }

    #[test]
    fn test_printable_ascii() {
        let events = decode_all(b"a~");
        assert_eq!(events, vec![InputEvent::rune('a'), InputEvent::rune('~')]);
    }

    #[test]
    fn test_unmapped_control_is_none() {
        assert_eq!(decode_all(b"\x01"), vec![InputEvent::NONE]);
    }

    #[test]
    fn test_arrow_keys() {
        let events = decode_all(b"\x1b[A\x1b[B\x1b[C\x1b[D");
        let keys: Vec<Key> = events.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![Key::Up, Key::Down, Key::Right, Key::Left]);
    }

    #[test]
    fn test_unknown_csi_consumes_three_bytes() {
        let mut decoder = InputDecoder::new();
        decoder.feed(b"\x1b[Zx");
        let mut source = ChunkSource::new(&[]);
        assert_eq!(decoder.next_event(&mut source, Duration::ZERO), InputEvent::NONE);
        assert_eq!(decoder.pending_len(), 1);
        assert_eq!(decoder.next_event(&mut source, Duration::ZERO), InputEvent::rune('x'));
    }

    #[test]
    fn test_lone_escape() {
        assert_eq!(decode_all(b"\x1b"), vec![InputEvent::key(Key::Esc)]);
    }

    #[test]
    fn test_escape_without_full_sequence() {
        let events = decode_all(b"\x1b[");
        assert_eq!(events, vec![InputEvent::key(Key::Esc), InputEvent::rune('[')]);
    }

    #[test]
    fn test_multibyte_utf8() {
        let events = decode_all("é中😀".as_bytes());
        assert_eq!(
            events,
            vec![InputEvent::rune('é'), InputEvent::rune('中'), InputEvent::rune('😀')]
        );
    }

    #[test]
    fn test_truncated_utf8_drops_lead_byte() {
        let bytes = "中".as_bytes();
        let mut decoder = InputDecoder::new();
        let mut source = ChunkSource::new(&[&bytes[..2], &bytes[2..]]);

        // Lead byte discarded, continuation byte decodes to nothing.
        assert_eq!(decoder.next_event(&mut source, Duration::ZERO), InputEvent::NONE);
        assert_eq!(decoder.pending_len(), 1);
        assert_eq!(decoder.next_event(&mut source, Duration::ZERO), InputEvent::NONE);
        assert!(!decoder.has_pending());
        // Remaining byte from the second read is a stray continuation.
        assert_eq!(decoder.next_event(&mut source, Duration::ZERO), InputEvent::NONE);
        assert!(!decoder.has_pending());
    }

    #[test]
    fn test_invalid_lead_bytes_are_not_runes() {
        let events = decode_all(&[0xF8, 0x81, 0x81, 0x81]);
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| *e == InputEvent::NONE));

        let events = decode_all(&[0xFF, b'a']);
        assert_eq!(events, vec![InputEvent::NONE, InputEvent::rune('a')]);
    }

    #[test]
    fn test_overlong_nul_is_not_a_rune() {
        let events = decode_all(&[0xC0, 0x80]);
        assert_eq!(events, vec![InputEvent::NONE]);
        assert!(!events.contains(&InputEvent::rune('\0')));
    }

    #[test]
    fn test_refill_only_when_drained() {
        let mut decoder = InputDecoder::new();
        let mut source = ChunkSource::new(&[b"ab", b"c"]);
        assert_eq!(decoder.next_event(&mut source, Duration::ZERO), InputEvent::rune('a'));
        assert_eq!(source.polls, 1);
        assert_eq!(decoder.next_event(&mut source, Duration::ZERO), InputEvent::rune('b'));
        assert_eq!(source.polls, 1);
        assert_eq!(decoder.next_event(&mut source, Duration::ZERO), InputEvent::rune('c'));
        assert_eq!(source.polls, 2);
    }

    #[test]
    fn test_read_chunk_limits_refill() {
        let mut decoder = InputDecoder::with_read_chunk(2);
        let mut source = ChunkSource::new(&[b"abcd"]);
        decoder.next_event(&mut source, Duration::ZERO);
        assert_eq!(decoder.pending_len(), 1);
    }

    #[test]
    fn test_decode_utf8_helper() {
        assert_eq!(decode_utf8(b"A"), Some(('A', 1)));
        assert_eq!(decode_utf8("ß".as_bytes()), Some(('ß', 2)));
        assert_eq!(decode_utf8(&[0x80]), None);
        assert_eq!(decode_utf8(&[0xE4, 0xB8]), None);
        assert_eq!(decode_utf8(&[]), None);
        // Surrogate range is not a valid char.
        assert_eq!(decode_utf8(&[0xED, 0xA0, 0x80]), None);
        // Overlong forms.
        assert_eq!(decode_utf8(&[0xC0, 0x80]), None);
        assert_eq!(decode_utf8(&[0xC1, 0x81]), None);
        assert_eq!(decode_utf8(&[0xE0, 0x80, 0x80]), None);
        assert_eq!(decode_utf8(&[0xF0, 0x80, 0x80, 0x80]), None);
        assert_eq!(decode_utf8(&[0xF8, 0x81, 0x81, 0x81]), None);
    }

    #[test]
    fn test_sequence_len() {
        assert_eq!(utf8_sequence_len(b'a'), Some(1));
        assert_eq!(utf8_sequence_len(0x80), None);
        assert_eq!(utf8_sequence_len(0xC3), Some(2));
        assert_eq!(utf8_sequence_len(0xE4), Some(3));
        assert_eq!(utf8_sequence_len(0xF0), Some(4));
        assert_eq!(utf8_sequence_len(0xF7), Some(4));
        assert_eq!(utf8_sequence_len(0xF8), None);
        assert_eq!(utf8_sequence_len(0xFF), None);
    }
}
