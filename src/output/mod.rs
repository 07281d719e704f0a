//! The log file is the only destination. Each write opens the path, writes and
//! closes it again, so nothing stays open between calls.

mod file;

pub use file::LogFile;
