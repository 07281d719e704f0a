//! The logger state machine: initialize, emit, reconfigure, close.
//!
//! A `Logger` owns its target path, formatting buffer, prefix table and time
//! style. Every entry is rendered into the buffer, appended to the file in one
//! write, and the buffer is cleared again.

mod builder;
mod from_config;
mod shared;

pub use builder::LoggerBuilder;
pub use shared::SharedLogger;

use crate::Error;
use crate::fmt::{
    self, Clock, LineBuffer, Prefixes, TimeFormat, clamp_size, format_date, format_time,
};
use crate::internal;
use crate::level::Level;
use crate::output::LogFile;
use std::path::Path;

/// Single-file line logger.
///
/// Methods that change state take `&mut self`; wrap the logger in a
/// [`SharedLogger`] to log from several threads.
pub struct Logger {
    file: Option<LogFile>,
    buffer: Option<LineBuffer>,
    buffer_size: usize,
    initialized: bool,
    prefixes: Prefixes,
    time_format: TimeFormat,
    clock: Box<dyn Clock>,
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("file", &self.file)
            .field("buffer_size", &self.buffer_size)
            .field("buffer_allocated", &self.buffer.is_some())
            .field("initialized", &self.initialized)
            .field("prefixes", &self.prefixes)
            .field("time_format", &self.time_format)
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Starts (or restarts) the log file.
    ///
    /// The file is created or truncated and receives `initial_text` verbatim,
    /// or a `# Log started: <date> <time>` banner when none is given. The path
    /// is only taken from `filename` while the logger is not yet initialized;
    /// later calls keep the stored path and just rewrite the file. `prefixes`
    /// replaces the prefix table on success, `None` restores the defaults.
    ///
    /// # Errors
    /// - `Error::MissingPath` without a filename and no stored path
    /// - `Error::Io` when the file cannot be created
    /// - `Error::ShortWrite` when the content only partly reached the file
    /// - `Error::BufferOverflow` when the banner does not fit the buffer
    pub fn initialize(
        &mut self,
        filename: Option<&Path>,
        prefixes: Option<Prefixes>,
        initial_text: Option<&str>,
    ) -> Result<(), Error> {
        let filename = filename.filter(|p| !p.as_os_str().is_empty());
        if filename.is_none() && self.file.is_none() {
            internal::warn("LOGGER", "Initialize called without a log file path");
            return Err(Error::MissingPath);
        }

        if self.buffer.is_none() {
            internal::debug(
                "LOGGER",
                &format!("Allocating {} byte buffer", self.buffer_size),
            );
            self.buffer = Some(LineBuffer::new(self.buffer_size));
        }

        if !self.initialized
            && let Some(path) = filename
        {
            self.file = Some(LogFile::new(path));
        }

        let result = self.write_initial(initial_text);
        self.initialized = result.is_ok();

        match result {
            Ok(()) => {
                self.prefixes = prefixes.unwrap_or_default();
                if let Some(file) = &self.file {
                    internal::info(
                        "LOGGER",
                        &format!("Log started at {}", file.path().display()),
                    );
                }
                Ok(())
            }
            Err(e) => {
                internal::error("LOGGER", &format!("Initialize failed: {e}"));
                Err(e)
            }
        }
    }

    /// Truncating write of the start content.
    fn write_initial(&mut self, initial_text: Option<&str>) -> Result<(), Error> {
        let banner_stamp = initial_text
            .is_none()
            .then(|| (self.current_date(), self.current_time()));

        let Self { file, buffer, .. } = self;
        let file = file.as_ref().ok_or(Error::MissingPath)?;
        let buf = buffer.as_mut().ok_or(Error::Closed)?;
        buf.clear();

        let (written, expected) = if let Some((date, time)) = banner_stamp {
            fmt::render_banner(buf, &date, &time)?;
            let expected = buf.len();
            let written = file.truncate(buf.as_bytes());
            buf.clear();
            (written?, expected)
        } else {
            let text = initial_text.unwrap_or_default();
            (file.truncate(text.as_bytes())?, text.len())
        };

        if written == expected {
            Ok(())
        } else {
            Err(Error::ShortWrite { written, expected })
        }
    }

    /// Releases the formatting buffer. The path and the initialized flag stay,
    /// so `print_raw` keeps working and `initialize` can restart the log.
    pub fn close(&mut self) {
        if self.buffer.take().is_some() {
            internal::debug("LOGGER", "Buffer released");
        }
    }

    /// Appends `[HH:MM:SS] text`.
    ///
    /// Returns bytes written, 0 if the file could not be opened.
    ///
    /// # Errors
    /// `NotInitialized`, `InvalidArgument` for empty text, `Closed` after
    /// `close`, `BufferOverflow` if the line exceeds the buffer.
    pub fn emit_plain(&mut self, text: &str) -> Result<usize, Error> {
        self.check_ready(text)?;
        let time = self.current_time();
        self.write_entry(|buf, _| fmt::render_plain(buf, &time, text))
    }

    /// Appends `[HH:MM:SS][PREFIX] text` using the prefix for `level`.
    ///
    /// # Errors
    /// As [`Logger::emit_plain`]. `Level::Print` and `Level::None` have no
    /// prefix and are rejected with `InvalidArgument`.
    pub fn emit_leveled(&mut self, level: Level, text: &str) -> Result<usize, Error> {
        self.check_ready(text)?;
        if level.prefix_index().is_none() {
            return Err(Error::InvalidArgument("level has no prefix"));
        }
        let time = self.current_time();
        self.write_entry(|buf, prefixes| {
            let prefix = prefixes.get(level).unwrap_or_default();
            fmt::render_leveled(buf, &time, prefix, text)
        })
    }

    /// Debug entry.
    ///
    /// # Errors
    /// See [`Logger::emit_leveled`].
    pub fn debug(&mut self, text: &str) -> Result<usize, Error> {
        self.emit_leveled(Level::Debug, text)
    }

    /// Error entry.
    ///
    /// # Errors
    /// See [`Logger::emit_leveled`].
    pub fn error(&mut self, text: &str) -> Result<usize, Error> {
        self.emit_leveled(Level::Error, text)
    }

    /// Information entry.
    ///
    /// # Errors
    /// See [`Logger::emit_leveled`].
    pub fn info(&mut self, text: &str) -> Result<usize, Error> {
        self.emit_leveled(Level::Information, text)
    }

    /// Warning entry.
    ///
    /// # Errors
    /// See [`Logger::emit_leveled`].
    pub fn warning(&mut self, text: &str) -> Result<usize, Error> {
        self.emit_leveled(Level::Warning, text)
    }

    /// Appends a formatted entry. Usually called through [`emit!`](crate::emit).
    ///
    /// - leveled severities: `[HH:MM:SS][PREFIX] ` + text, newline ensured
    /// - `Level::None`: `[HH:MM:SS] ` + text, newline ensured
    /// - `Level::Print`: text only, written as-is
    ///
    /// Header and text go out in one write; the count covers both. An empty
    /// `Print` entry writes nothing.
    ///
    /// # Errors
    /// `NotInitialized`, `Closed`, or `BufferOverflow` (nothing is written).
    pub fn emit_formatted(
        &mut self,
        level: Level,
        args: std::fmt::Arguments<'_>,
    ) -> Result<usize, Error> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        let time = (level != Level::Print).then(|| self.current_time());
        self.write_entry(|buf, prefixes| {
            if let Some(time) = &time {
                fmt::render_header(buf, time, prefixes.get(level))?;
                buf.push_fmt(args)?;
                buf.ensure_newline()
            } else {
                buf.push_fmt(args)
            }
        })
    }

    /// Appends `text` verbatim: no timestamp, no newline. Does not need the
    /// buffer, so it still works after `close`.
    ///
    /// # Errors
    /// `NotInitialized` or `InvalidArgument` for empty text.
    pub fn print_raw(&mut self, text: &str) -> Result<usize, Error> {
        self.check_ready(text)?;
        let file = self.file.as_ref().ok_or(Error::NotInitialized)?;
        Ok(file.append(text.as_bytes()))
    }

    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Sets the buffer capacity (at least 1024) and returns the previous one.
    /// An allocated buffer is resized right away.
    pub fn set_buffer_size(&mut self, size: usize) -> usize {
        let old = self.buffer_size;
        self.buffer_size = clamp_size(size);
        if let Some(buf) = &mut self.buffer {
            buf.resize(self.buffer_size);
        }
        internal::debug(
            "LOGGER",
            &format!("Buffer size {old} -> {}", self.buffer_size),
        );
        old
    }

    #[must_use]
    pub const fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    /// `None` restores the default table.
    pub fn set_prefixes(&mut self, prefixes: Option<Prefixes>) {
        self.prefixes = prefixes.unwrap_or_default();
    }

    pub const fn set_use_24_hour_time(&mut self, use_24_hour: bool) {
        self.time_format = TimeFormat::from_24_hour(use_24_hour);
    }

    #[must_use]
    pub const fn uses_24_hour_time(&self) -> bool {
        self.time_format.is_24_hour()
    }

    #[must_use]
    pub const fn time_format(&self) -> TimeFormat {
        self.time_format
    }

    /// `HH:MM:SS`, or `HH:MM:SS AM|PM` in 12-hour mode.
    #[must_use]
    pub fn current_time(&self) -> String {
        format_time(self.clock.now(), self.time_format)
    }

    /// `MM/DD/YYYY`.
    #[must_use]
    pub fn current_date(&self) -> String {
        format_date(self.clock.now())
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_ref().map(LogFile::path)
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub const fn is_buffer_allocated(&self) -> bool {
        self.buffer.is_some()
    }

    fn check_ready(&self, text: &str) -> Result<(), Error> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        if text.is_empty() {
            return Err(Error::InvalidArgument("empty text"));
        }
        Ok(())
    }

    /// Renders into the buffer and appends the result. The buffer is empty
    /// again afterwards, whether rendering succeeded or not.
    fn write_entry(
        &mut self,
        render: impl FnOnce(&mut LineBuffer, &Prefixes) -> Result<(), Error>,
    ) -> Result<usize, Error> {
        let Self {
            file,
            buffer,
            prefixes,
            ..
        } = self;
        let file = file.as_ref().ok_or(Error::NotInitialized)?;
        let buf = buffer.as_mut().ok_or(Error::Closed)?;
        buf.clear();

        let rendered = render(buf, prefixes);
        let written = rendered.map(|()| {
            if buf.is_empty() {
                0
            } else {
                file.append(buf.as_bytes())
            }
        });
        buf.clear();

        if let Err(e) = &written {
            internal::warn("LOGGER", &format!("Entry dropped: {e}"));
        }
        written
    }
}
