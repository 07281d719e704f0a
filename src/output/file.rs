//! Truncating and appending writes to the target path.

use crate::internal;

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Target log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates or empties the file, then writes `bytes`.
    ///
    /// Returns how many bytes reached the file, which may be fewer than
    /// `bytes.len()` if the write stopped early.
    ///
    /// # Errors
    /// I/O error when the file cannot be created.
    pub fn truncate(&self, bytes: &[u8]) -> Result<usize, crate::Error> {
        internal::debug("FILE", &format!("Truncating {}", self.path.display()));
        let mut file = File::create(&self.path)?;
        Ok(write_counted(&mut file, bytes))
    }

    /// Appends `bytes`, creating the file if needed.
    ///
    /// An open failure is not an error here: it is reported to the diagnostics
    /// log and the call returns 0.
    #[must_use]
    pub fn append(&self, bytes: &[u8]) -> usize {
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            Ok(mut file) => write_counted(&mut file, bytes),
            Err(e) => {
                internal::warn(
                    "FILE",
                    &format!("Failed to open {}: {e}", self.path.display()),
                );
                0
            }
        }
    }
}

/// Writes until done or until the sink fails, returning the count that made it.
fn write_counted(sink: &mut impl Write, bytes: &[u8]) -> usize {
    let mut written = 0;
    while written < bytes.len() {
        match sink.write(&bytes[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => {
                internal::error("FILE", &format!("Write failed after {written} bytes: {e}"));
                break;
            }
        }
    }
    written
}
