//! Severity prefix table.

use crate::level::Level;

/// Prefixes used when no table is supplied, indexed by `Level::prefix_index`.
pub const DEFAULT_PREFIXES: [&str; 4] = ["[DEBUG]", "[ERROR]", "[INFO]", "[WARNING]"];

/// Four owned prefix strings, one per leveled severity.
///
/// Tables are copied in, so the caller's strings can be dropped right after
/// handing them over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefixes([String; 4]);

impl Default for Prefixes {
    fn default() -> Self {
        Self::from(DEFAULT_PREFIXES)
    }
}

impl Prefixes {
    #[must_use]
    pub fn new(debug: &str, error: &str, info: &str, warning: &str) -> Self {
        Self::from([debug, error, info, warning])
    }

    /// Prefix for `level`, or `None` for the unprefixed levels.
    #[must_use]
    pub fn get(&self, level: Level) -> Option<&str> {
        level.prefix_index().map(|i| self.0[i].as_str())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0.iter().zip(DEFAULT_PREFIXES).all(|(a, b)| a == b)
    }
}

impl<S: AsRef<str>> From<[S; 4]> for Prefixes {
    fn from(values: [S; 4]) -> Self {
        Self(values.map(|s| s.as_ref().to_string()))
    }
}

impl TryFrom<Vec<String>> for Prefixes {
    type Error = crate::Error;

    fn try_from(values: Vec<String>) -> Result<Self, Self::Error> {
        let len = values.len();
        let table: [String; 4] = values
            .try_into()
            .map_err(|_| crate::Error::InvalidPrefixCount(len))?;
        Ok(Self(table))
    }
}
