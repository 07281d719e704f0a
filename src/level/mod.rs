//! Severity levels that pick the prefix and the layout of a log entry.

/// Discriminants match the C header so FFI callers can pass them straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Development-time diagnostics.
    Debug = 0,
    /// Failures the caller should look at.
    Error = 1,
    /// Normal operational milestones.
    Information = 2,
    /// Non-fatal anomalies.
    Warning = 3,
    /// Raw output: no timestamp, no prefix, no forced newline.
    Print = 4,
    /// Timestamp only, no severity prefix.
    None = 99,
}

impl Level {
    /// Slot in the prefix table. `Print` and `None` never carry a prefix.
    #[must_use]
    pub const fn prefix_index(self) -> Option<usize> {
        match self {
            Self::Debug => Some(0),
            Self::Error => Some(1),
            Self::Information => Some(2),
            Self::Warning => Some(3),
            Self::Print | Self::None => None,
        }
    }

    /// The four levels backed by a prefix, in table order.
    #[must_use]
    pub const fn leveled() -> [Self; 4] {
        [Self::Debug, Self::Error, Self::Information, Self::Warning]
    }

    /// Maps a C-side level constant back to the enum. Unknown values yield `None`.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Debug),
            1 => Some(Self::Error),
            2 => Some(Self::Information),
            3 => Some(Self::Warning),
            4 => Some(Self::Print),
            99 => Some(Self::None),
            _ => Option::None,
        }
    }
}
