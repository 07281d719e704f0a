//! Configuration struct definitions.

use crate::fmt::{MIN_BUFFER_SIZE, TimeFormat};
use serde::Deserialize;

/// `[logger]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Target log file. `~` is expanded.
    pub file: Option<String>,
    /// Formatting buffer capacity; values under 1024 are raised.
    pub buffer_size: usize,
    /// `"24h"` or `"12h"`.
    pub time_format: TimeFormat,
    /// Exactly four entries: debug, error, info, warning.
    pub prefixes: Option<Vec<String>>,
    /// Written instead of the start banner.
    pub initial_text: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file: None,
            buffer_size: MIN_BUFFER_SIZE,
            time_format: TimeFormat::default(),
            prefixes: None,
            initial_text: None,
        }
    }
}

/// `[diagnostics]` section: where linelog reports its own problems.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub enabled: bool,
    /// Diagnostics file. `~` is expanded.
    pub file: String,
    /// Also record debug-level chatter (buffer allocation, resizes, truncation).
    pub verbose: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        let file = directories::ProjectDirs::from("", "", "linelog").map_or_else(
            || "linelog-diagnostics.log".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("diagnostics.log")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            enabled: false,
            file,
            verbose: false,
        }
    }
}
