//! C-ABI bindings over one process-wide logger, for C and C++ callers that
//! want the classic `init` / `log` / `close` procedural interface.
//!
//! Emit functions return the number of bytes written, or -1 on failure; the
//! reason is available through `linelog_get_last_error`. Formatting stays on
//! the C side (`snprintf` then `linelog_format`).

#![allow(unsafe_code)]

use std::ffi::{CStr, c_char, c_int};
use std::path::Path;
use std::ptr;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use crate::Error;
use crate::fmt::Prefixes;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;

/// Level constants, matching the `Level` discriminants.
pub const LINELOG_LEVEL_DEBUG: c_int = 0;
pub const LINELOG_LEVEL_ERROR: c_int = 1;
pub const LINELOG_LEVEL_INFO: c_int = 2;
pub const LINELOG_LEVEL_WARNING: c_int = 3;
pub const LINELOG_LEVEL_PRINT: c_int = 4;
pub const LINELOG_LEVEL_NONE: c_int = 99;

struct FfiState {
    logger: Logger,
    last_error: Option<String>,
}

static STATE: LazyLock<Mutex<FfiState>> = LazyLock::new(|| {
    Mutex::new(FfiState {
        logger: Logger::default(),
        last_error: None,
    })
});

fn state() -> MutexGuard<'static, FfiState> {
    STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// `NULL` maps to `None`.
///
/// # Safety
/// `ptr` must be `NULL` or a valid null-terminated string.
unsafe fn opt_str<'a>(ptr: *const c_char) -> Result<Option<&'a str>, Error> {
    if ptr.is_null() {
        return Ok(None);
    }
    // SAFETY: ptr is non-null and caller guarantees null termination
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map(Some)
        .map_err(|_| Error::InvalidArgument("string is not valid UTF-8"))
}

/// `NULL` maps to `None` (default table); otherwise reads exactly four strings.
///
/// # Safety
/// `prefixes` must be `NULL` or point to four valid null-terminated strings.
unsafe fn opt_prefixes(prefixes: *const *const c_char) -> Result<Option<Prefixes>, Error> {
    if prefixes.is_null() {
        return Ok(None);
    }
    let mut table = Vec::with_capacity(4);
    for i in 0..4 {
        // SAFETY: caller guarantees an array of four pointers
        let entry = unsafe { *prefixes.add(i) };
        // SAFETY: each entry is a valid string pointer or NULL
        let text = unsafe { opt_str(entry) }?.ok_or(Error::InvalidArgument("prefix is NULL"))?;
        table.push(text.to_string());
    }
    Prefixes::try_from(table).map(Some)
}

/// Records the failure reason and turns the result into a C count.
fn to_count(state: &mut FfiState, result: Result<usize, Error>) -> c_int {
    match result {
        Ok(n) => {
            state.last_error = None;
            c_int::try_from(n).unwrap_or(c_int::MAX)
        }
        Err(e) => {
            state.last_error = Some(e.to_string());
            -1
        }
    }
}

/// Shared body of the text-taking emit functions.
///
/// # Safety
/// `text` must be `NULL` or a valid null-terminated string.
unsafe fn emit_text(
    text: *const c_char,
    emit: impl FnOnce(&mut Logger, &str) -> Result<usize, Error>,
) -> c_int {
    // SAFETY: forwarded caller guarantee
    let text = unsafe { opt_str(text) };
    let mut state = state();
    let result = text.and_then(|t| {
        let t = t.ok_or(Error::InvalidArgument("text is NULL"))?;
        emit(&mut state.logger, t)
    });
    to_count(&mut state, result)
}

/// Copies `s` plus a terminating zero into a caller-owned buffer.
///
/// # Safety
/// `buffer` must be writable for `len` bytes.
unsafe fn copy_out(s: &str, buffer: *mut c_char, len: usize) -> c_int {
    if buffer.is_null() || len == 0 {
        return -1;
    }
    let bytes = s.as_bytes();
    if bytes.len() >= len {
        return -1;
    }
    // SAFETY: buffer has at least len bytes and bytes.len() < len
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), buffer.cast::<u8>(), bytes.len());
        *buffer.add(bytes.len()) = 0;
    }
    c_int::try_from(bytes.len()).unwrap_or(-1)
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Starts the log file (truncating it). Returns 1 on success, 0 on failure.
///
/// # Safety
/// - `filename` and `initial_text` must be `NULL` or valid null-terminated UTF-8
/// - `prefixes` must be `NULL` or point to four valid null-terminated strings
///
/// The strings are copied; the caller may free them afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_init(
    filename: *const c_char,
    prefixes: *const *const c_char,
    initial_text: *const c_char,
) -> c_int {
    // SAFETY: forwarded caller guarantees
    let args = unsafe { (opt_str(filename), opt_prefixes(prefixes), opt_str(initial_text)) };
    let mut state = state();

    let result = match args {
        (Ok(filename), Ok(prefixes), Ok(initial_text)) => {
            state
                .logger
                .initialize(filename.map(Path::new), prefixes, initial_text)
        }
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => Err(e),
    };

    match result {
        Ok(()) => {
            internal::debug("FFI", "Logger initialized");
            state.last_error = None;
            1
        }
        Err(e) => {
            state.last_error = Some(e.to_string());
            0
        }
    }
}

/// Releases the formatting buffer. Safe to call repeatedly.
#[unsafe(no_mangle)]
pub extern "C" fn linelog_close() {
    state().logger.close();
}

// ============================================================================
// Logging
// ============================================================================

/// `[HH:MM:SS] text`
///
/// # Safety
/// `text` must be `NULL` or a valid null-terminated UTF-8 string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_plain(text: *const c_char) -> c_int {
    // SAFETY: forwarded caller guarantee
    unsafe { emit_text(text, Logger::emit_plain) }
}

/// `[HH:MM:SS][DEBUG] text`
///
/// # Safety
/// See `linelog_plain`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_debug(text: *const c_char) -> c_int {
    // SAFETY: forwarded caller guarantee
    unsafe { emit_text(text, Logger::debug) }
}

/// `[HH:MM:SS][ERROR] text`
///
/// # Safety
/// See `linelog_plain`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_error(text: *const c_char) -> c_int {
    // SAFETY: forwarded caller guarantee
    unsafe { emit_text(text, Logger::error) }
}

/// `[HH:MM:SS][INFO] text`
///
/// # Safety
/// See `linelog_plain`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_info(text: *const c_char) -> c_int {
    // SAFETY: forwarded caller guarantee
    unsafe { emit_text(text, Logger::info) }
}

/// `[HH:MM:SS][WARNING] text`
///
/// # Safety
/// See `linelog_plain`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_warning(text: *const c_char) -> c_int {
    // SAFETY: forwarded caller guarantee
    unsafe { emit_text(text, Logger::warning) }
}

/// Formatted entry for any level constant. Unknown levels write nothing and
/// return 0.
///
/// # Safety
/// See `linelog_plain`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_format(level: c_int, text: *const c_char) -> c_int {
    let Some(level) = Level::from_code(level) else {
        return 0;
    };
    // SAFETY: forwarded caller guarantee
    unsafe {
        emit_text(text, |logger, text| {
            logger.emit_formatted(level, format_args!("{text}"))
        })
    }
}

/// Appends `text` verbatim.
///
/// # Safety
/// See `linelog_plain`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_print(text: *const c_char) -> c_int {
    // SAFETY: forwarded caller guarantee
    unsafe { emit_text(text, Logger::print_raw) }
}

// ============================================================================
// Settings
// ============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn linelog_get_buffer_size() -> c_int {
    c_int::try_from(state().logger.buffer_size()).unwrap_or(c_int::MAX)
}

/// Returns the previous size. Negative or small sizes become 1024.
#[unsafe(no_mangle)]
pub extern "C" fn linelog_set_buffer_size(size: c_int) -> c_int {
    let size = usize::try_from(size).unwrap_or(0);
    let old = state().logger.set_buffer_size(size);
    c_int::try_from(old).unwrap_or(c_int::MAX)
}

/// Copies prefix `index` (0..=3) into `buffer`. Returns its length or -1.
///
/// # Safety
/// `buffer` must be writable for `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_get_prefix(
    index: c_int,
    buffer: *mut c_char,
    len: usize,
) -> c_int {
    let state = state();
    let Some(prefix) = usize::try_from(index)
        .ok()
        .and_then(|i| state.logger.prefixes().as_slice().get(i))
    else {
        return -1;
    };
    // SAFETY: forwarded caller guarantee
    unsafe { copy_out(prefix, buffer, len) }
}

/// Replaces the prefix table; `NULL` restores the defaults. Returns 0, or -1
/// if an entry is `NULL` or not UTF-8 (the table is left unchanged).
///
/// # Safety
/// `prefixes` must be `NULL` or point to four valid null-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_set_prefixes(prefixes: *const *const c_char) -> c_int {
    // SAFETY: forwarded caller guarantee
    let prefixes = unsafe { opt_prefixes(prefixes) };
    let mut state = state();
    match prefixes {
        Ok(prefixes) => {
            state.logger.set_prefixes(prefixes);
            0
        }
        Err(e) => {
            state.last_error = Some(e.to_string());
            -1
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn linelog_get_use_24hr_time() -> c_int {
    c_int::from(state().logger.uses_24_hour_time())
}

/// Non-zero selects 24-hour time, zero selects 12-hour time with AM/PM.
#[unsafe(no_mangle)]
pub extern "C" fn linelog_set_use_24hr_time(use_24hr: c_int) {
    state().logger.set_use_24_hour_time(use_24hr != 0);
}

/// Copies the current time into `buffer`. Returns its length or -1.
///
/// # Safety
/// `buffer` must be writable for `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_time(buffer: *mut c_char, len: usize) -> c_int {
    let time = state().logger.current_time();
    // SAFETY: forwarded caller guarantee
    unsafe { copy_out(&time, buffer, len) }
}

/// Copies the current date into `buffer`. Returns its length or -1.
///
/// # Safety
/// `buffer` must be writable for `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_date(buffer: *mut c_char, len: usize) -> c_int {
    let date = state().logger.current_date();
    // SAFETY: forwarded caller guarantee
    unsafe { copy_out(&date, buffer, len) }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Copies the reason for the last failed call into `buffer`.
///
/// # Safety
/// `buffer` must be writable for `len` bytes.
///
/// # Returns
/// - Length of error message on success
/// - 0 if no error
/// - -1 on invalid arguments
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_get_last_error(buffer: *mut c_char, len: usize) -> c_int {
    if buffer.is_null() || len == 0 {
        return -1;
    }
    let state = state();
    match &state.last_error {
        // SAFETY: forwarded caller guarantee
        Some(msg) => unsafe { copy_out(msg, buffer, len) },
        None => {
            // SAFETY: buffer is non-null and has at least 1 byte
            unsafe { *buffer = 0 };
            0
        }
    }
}
