//! Thread-safe handle around a [`Logger`].

use super::Logger;
use crate::Error;
use crate::fmt::Prefixes;
use crate::level::Level;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle; every clone logs through the same logger, one call at a
/// time.
#[derive(Debug, Clone, Default)]
pub struct SharedLogger {
    inner: Arc<Mutex<Logger>>,
}

impl From<Logger> for SharedLogger {
    fn from(logger: Logger) -> Self {
        Self::new(logger)
    }
}

impl SharedLogger {
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(logger)),
        }
    }

    /// A panic while holding the lock can't leave the logger half-updated,
    /// so a poisoned lock is taken over as-is.
    fn lock(&self) -> MutexGuard<'_, Logger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access, for several calls that must not interleave.
    pub fn with<R>(&self, f: impl FnOnce(&mut Logger) -> R) -> R {
        f(&mut self.lock())
    }

    /// # Errors
    /// See [`Logger::initialize`].
    pub fn initialize(
        &self,
        filename: Option<&Path>,
        prefixes: Option<Prefixes>,
        initial_text: Option<&str>,
    ) -> Result<(), Error> {
        self.lock().initialize(filename, prefixes, initial_text)
    }

    pub fn close(&self) {
        self.lock().close();
    }

    /// # Errors
    /// See [`Logger::emit_plain`].
    pub fn emit_plain(&self, text: &str) -> Result<usize, Error> {
        self.lock().emit_plain(text)
    }

    /// # Errors
    /// See [`Logger::emit_leveled`].
    pub fn emit_leveled(&self, level: Level, text: &str) -> Result<usize, Error> {
        self.lock().emit_leveled(level, text)
    }

    /// # Errors
    /// See [`Logger::emit_leveled`].
    pub fn debug(&self, text: &str) -> Result<usize, Error> {
        self.emit_leveled(Level::Debug, text)
    }

    /// # Errors
    /// See [`Logger::emit_leveled`].
    pub fn error(&self, text: &str) -> Result<usize, Error> {
        self.emit_leveled(Level::Error, text)
    }

    /// # Errors
    /// See [`Logger::emit_leveled`].
    pub fn info(&self, text: &str) -> Result<usize, Error> {
        self.emit_leveled(Level::Information, text)
    }

    /// # Errors
    /// See [`Logger::emit_leveled`].
    pub fn warning(&self, text: &str) -> Result<usize, Error> {
        self.emit_leveled(Level::Warning, text)
    }

    /// # Errors
    /// See [`Logger::emit_formatted`].
    pub fn emit_formatted(
        &self,
        level: Level,
        args: std::fmt::Arguments<'_>,
    ) -> Result<usize, Error> {
        self.lock().emit_formatted(level, args)
    }

    /// # Errors
    /// See [`Logger::print_raw`].
    pub fn print_raw(&self, text: &str) -> Result<usize, Error> {
        self.lock().print_raw(text)
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.lock().buffer_size()
    }

    pub fn set_buffer_size(&self, size: usize) -> usize {
        self.lock().set_buffer_size(size)
    }

    /// Copy of the current table.
    #[must_use]
    pub fn prefixes(&self) -> Prefixes {
        self.lock().prefixes().clone()
    }

    pub fn set_prefixes(&self, prefixes: Option<Prefixes>) {
        self.lock().set_prefixes(prefixes);
    }

    pub fn set_use_24_hour_time(&self, use_24_hour: bool) {
        self.lock().set_use_24_hour_time(use_24_hour);
    }

    #[must_use]
    pub fn uses_24_hour_time(&self) -> bool {
        self.lock().uses_24_hour_time()
    }

    #[must_use]
    pub fn current_time(&self) -> String {
        self.lock().current_time()
    }

    #[must_use]
    pub fn current_date(&self) -> String {
        self.lock().current_date()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.lock().is_initialized()
    }
}
