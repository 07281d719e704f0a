//! Stepwise construction of a [`Logger`] before it touches the file.

use super::Logger;
use crate::fmt::{Clock, MIN_BUFFER_SIZE, Prefixes, SystemClock, TimeFormat, clamp_size};

/// Collects settings; [`LoggerBuilder::build`] produces an uninitialized logger.
pub struct LoggerBuilder {
    buffer_size: usize,
    time_format: TimeFormat,
    clock: Box<dyn Clock>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// 1024 byte buffer, 24-hour time, system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer_size: MIN_BUFFER_SIZE,
            time_format: TimeFormat::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Raised to 1024 if smaller.
    #[must_use]
    pub const fn buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = clamp_size(size);
        self
    }

    #[must_use]
    pub const fn time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }

    #[must_use]
    pub const fn use_24_hour_time(mut self, use_24_hour: bool) -> Self {
        self.time_format = TimeFormat::from_24_hour(use_24_hour);
        self
    }

    /// Tests pin the clock to get deterministic lines.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            file: None,
            buffer: None,
            buffer_size: self.buffer_size,
            initialized: false,
            prefixes: Prefixes::default(),
            time_format: self.time_format,
            clock: self.clock,
        }
    }
}
