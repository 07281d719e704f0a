// Forbid unsafe code except when the C bindings are enabled
#![cfg_attr(not(feature = "ffi"), forbid(unsafe_code))]

//! `linelog` - timestamped line logging to a single file.
//!
//! Every entry is rendered into a bounded buffer and appended to the log file
//! with one open/write/close, so lines are on disk when the call returns.
//!
//! # Example
//!
//! ```no_run
//! use linelog::{Level, Logger, emit};
//! use std::path::Path;
//!
//! let mut logger = Logger::default();
//! logger.initialize(Some(Path::new("app.log")), None, None)?;
//!
//! logger.info("Application started")?;
//! logger.warning("Cache miss")?;
//! emit!(logger, Level::Debug, "took {} ms", 12)?;
//! logger.print_raw("raw tail\n")?;
//!
//! logger.close();
//! # Ok::<(), linelog::Error>(())
//! ```
//!
//! # Features
//!
//! - `ffi`: C-ABI bindings over a process-wide logger

pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use config::Config;
pub use error::Error;
pub use fmt::{Clock, FixedClock, Prefixes, SystemClock, TimeFormat};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, SharedLogger};
pub use output::LogFile;
