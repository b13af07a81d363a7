//! Runtime configuration.

use std::time::Duration;

/// Default poll interval (20 Hz).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Size assumed when the terminal cannot be queried.
pub const DEFAULT_FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Default dash count for [`Ui::separation`](crate::Ui::separation).
pub const DEFAULT_SEPARATOR_LENGTH: usize = 14;

/// Bytes requested from the input source per read.
pub const DEFAULT_READ_CHUNK: usize = 16;

/// Configuration for the frame loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Upper bound on how long one frame waits for input.
    ///
    /// Bounds the idle frame rate. Input is processed as soon as it
    /// arrives; the interval only limits how long an idle frame blocks.
    pub frame_interval: Duration,

    /// Terminal size used when the backend reports a failure or a zero size.
    pub fallback_size: (u16, u16),

    /// Dash count used by `separation(None)`.
    pub separator_length: usize,

    /// Buffer size of a single raw read.
    pub read_chunk: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval: DEFAULT_FRAME_INTERVAL,
            fallback_size: DEFAULT_FALLBACK_SIZE,
            separator_length: DEFAULT_SEPARATOR_LENGTH,
            read_chunk: DEFAULT_READ_CHUNK,
        }
    }
}

impl Config {
    /// Defaults, overridden by `SPARK_FRAME_MS` and `SPARK_SEPARATOR_LEN`.
    ///
    /// Unparseable or zero values are ignored.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(ms) = lookup("SPARK_FRAME_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
            if ms > 0 {
                self.frame_interval = Duration::from_millis(ms);
            }
        }
        if let Some(len) = lookup("SPARK_SEPARATOR_LEN").and_then(|v| v.trim().parse::<usize>().ok()) {
            if len > 0 {
                self.separator_length = len;
            }
        }
        self
    }

    /// Replace zero dimensions with the fallback size.
    pub fn sanitize_size(&self, size: (u16, u16)) -> (u16, u16) {
        if size.0 == 0 || size.1 == 0 {
            self.fallback_size
        } else {
            size
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
