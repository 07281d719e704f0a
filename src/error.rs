//! Unified error type for all linelog operations.

/// Error type for linelog operations.
#[derive(Debug)]
pub enum Error {
    /// An emit or print call was made before a successful `initialize`.
    NotInitialized,
    /// Empty text passed to an emit or print call, or a level the call cannot render.
    InvalidArgument(&'static str),
    /// The formatting buffer was released by `close` and the logger was not re-initialized.
    Closed,
    /// `initialize` got no filename and no earlier one is stored.
    MissingPath,
    /// The initial write did not reach the file in full.
    ShortWrite { written: usize, expected: usize },
    /// Formatted output does not fit the formatting buffer.
    BufferOverflow { needed: usize, capacity: usize },
    /// A prefix table must have exactly four entries.
    InvalidPrefixCount(usize),
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "logger not initialized"),
            Self::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            Self::Closed => write!(f, "logger buffer released by close"),
            Self::MissingPath => write!(f, "no log file path given"),
            Self::ShortWrite { written, expected } => {
                write!(f, "short write: {written} of {expected} bytes")
            }
            Self::BufferOverflow { needed, capacity } => {
                write!(f, "buffer overflow: need {needed}, capacity {capacity}")
            }
            Self::InvalidPrefixCount(n) => write!(f, "expected 4 prefixes, got {n}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
