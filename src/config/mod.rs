//! TOML configuration loading.
//!
//! Struct definitions live in `structs`; this module only finds and reads the
//! file.

mod structs;

pub use structs::{DiagnosticsConfig, LoggerConfig};

use crate::fmt::Prefixes;
use crate::internal;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file still yields a usable config: every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logger: LoggerConfig,
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Reads `<config dir>/linelog/linelog.toml`. A missing file gives defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        internal::debug("CONFIG", &format!("Loading config from {}", path.display()));
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Fails when the platform has no config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "linelog")
            .map(|dirs| dirs.config_dir().join("linelog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Log file path with `~` expanded.
    #[must_use]
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logger
            .file
            .as_deref()
            .filter(|f| !f.is_empty())
            .map(expand_path)
    }

    /// Configured prefix table, if any.
    ///
    /// # Errors
    /// `Error::InvalidPrefixCount` unless exactly four prefixes are listed.
    pub fn prefixes(&self) -> Result<Option<Prefixes>, crate::Error> {
        self.logger
            .prefixes
            .clone()
            .map(Prefixes::try_from)
            .transpose()
    }
}

/// Tilde expansion shared by the log and diagnostics paths.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
