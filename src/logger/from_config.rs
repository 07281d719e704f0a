//! Logger construction from a loaded [`Config`].

use super::{Logger, LoggerBuilder};
use crate::Error;
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Builds an uninitialized logger with the configured buffer size and time
    /// style. Also starts the diagnostics log when enabled.
    ///
    /// The configured prefixes only take effect through `initialize`; use
    /// [`Logger::init_from_config`] to apply them.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        internal::init_with_config(&config.diagnostics);

        LoggerBuilder::new()
            .buffer_size(config.logger.buffer_size)
            .time_format(config.logger.time_format)
            .build()
    }

    /// Like [`Logger::from_config`], then initializes against the configured
    /// file with the configured prefixes and initial text.
    ///
    /// # Errors
    /// `Error::MissingPath` when `logger.file` is unset,
    /// `Error::InvalidPrefixCount` for a prefix list that isn't four long,
    /// plus anything [`Logger::initialize`] returns.
    pub fn init_from_config(config: &Config) -> Result<Self, Error> {
        let prefixes = config.prefixes()?;
        let path = config.log_file().ok_or(Error::MissingPath)?;
        let mut logger = Self::from_config(config);
        internal::debug(
            "LOGGER",
            &format!("Initializing from config: {}", path.display()),
        );
        logger.initialize(
            Some(path.as_path()),
            prefixes,
            config.logger.initial_text.as_deref(),
        )?;
        Ok(logger)
    }

    /// Loads the default config file and initializes from it.
    ///
    /// # Errors
    /// Config loading errors and those of [`Logger::init_from_config`].
    pub fn load() -> Result<Self, Error> {
        Self::init_from_config(&Config::load()?)
    }
}
