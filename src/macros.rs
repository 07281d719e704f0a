//! `format!`-style entry point for formatted entries.

/// Formats the arguments and hands them to `emit_formatted` on a [`Logger`]
/// or [`SharedLogger`].
///
/// ```no_run
/// use linelog::{Level, Logger, emit};
/// use std::path::Path;
///
/// let mut logger = Logger::default();
/// logger.initialize(Some(Path::new("app.log")), None, None).unwrap();
/// emit!(logger, Level::Warning, "disk {}% full", 93).unwrap();
/// emit!(logger, Level::Print, "no stamp, no newline").unwrap();
/// ```
///
/// [`Logger`]: crate::Logger
/// [`SharedLogger`]: crate::SharedLogger
#[macro_export]
macro_rules! emit {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.emit_formatted($level, ::std::format_args!($($arg)+))
    };
}
