//! Line layouts, split by concern: the clock and time styles, the prefix table,
//! and the bounded buffer lines are rendered into.
//!
//! Every layout writes into a [`LineBuffer`] so that no entry can grow past the
//! configured capacity.

mod buffer;
mod prefix;
mod time;

pub use buffer::{LineBuffer, MIN_BUFFER_SIZE, clamp_size};
pub use prefix::{DEFAULT_PREFIXES, Prefixes};
pub use time::{Clock, FixedClock, SystemClock, TimeFormat, format_date, format_time};

use crate::Error;

/// `# Log started: MM/DD/YYYY HH:MM:SS\n`
///
/// # Errors
/// `Error::BufferOverflow` if the banner doesn't fit.
pub fn render_banner(buf: &mut LineBuffer, date: &str, time: &str) -> Result<(), Error> {
    buf.push_fmt(format_args!("# Log started: {date} {time}\n"))
}

/// `[HH:MM:SS] text\n`
///
/// # Errors
/// `Error::BufferOverflow` if the line doesn't fit.
pub fn render_plain(buf: &mut LineBuffer, time: &str, text: &str) -> Result<(), Error> {
    buf.push_fmt(format_args!("[{time}] {text}\n"))
}

/// `[HH:MM:SS][PREFIX] text\n`. The prefix carries its own brackets.
///
/// # Errors
/// `Error::BufferOverflow` if the line doesn't fit.
pub fn render_leveled(
    buf: &mut LineBuffer,
    time: &str,
    prefix: &str,
    text: &str,
) -> Result<(), Error> {
    buf.push_fmt(format_args!("[{time}]{prefix} {text}\n"))
}

/// Header in front of a formatted entry: `[HH:MM:SS][PREFIX] ` or, without a
/// prefix, `[HH:MM:SS] `.
///
/// # Errors
/// `Error::BufferOverflow` if the header doesn't fit.
pub fn render_header(buf: &mut LineBuffer, time: &str, prefix: Option<&str>) -> Result<(), Error> {
    match prefix {
        Some(prefix) => buf.push_fmt(format_args!("[{time}]{prefix} ")),
        None => buf.push_fmt(format_args!("[{time}] ")),
    }
}
