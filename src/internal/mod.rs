//! linelog's own diagnostics log, written with a `Logger` of its own.
//!
//! `OnceLock` keeps the first configuration; later init calls are no-ops.
//! Messages logged before init, or while the diagnostics logger is already
//! busy (including a failure inside its own write), are dropped.

use crate::config::{DiagnosticsConfig, expand_path};
use crate::level::Level;
use crate::logger::Logger;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};

static INTERNAL_LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Starts diagnostics from the `[diagnostics]` config section. Does nothing
/// when the section is disabled.
pub fn init_with_config(config: &DiagnosticsConfig) {
    if !config.enabled {
        return;
    }
    init(&expand_path(&config.file), config.verbose);
}

/// Starts diagnostics at `path`. `verbose` also records debug messages.
pub fn init(path: &Path, verbose: bool) {
    if INTERNAL_LOGGER.get().is_some() {
        return;
    }
    VERBOSE.store(verbose, Ordering::Relaxed);
    INTERNAL_LOGGER.get_or_init(|| Mutex::new(build_internal_logger(path)));
    debug("INTERNAL", "Diagnostics logger ready");
}

/// A logger that fails to start stays uninitialized, which turns every later
/// diagnostic into a no-op.
fn build_internal_logger(path: &Path) -> Logger {
    let mut logger = Logger::builder().build();
    let _ = logger.initialize(Some(path), None, None);
    logger
}

fn log(level: Level, scope: &str, msg: &str) {
    if let Some(lock) = INTERNAL_LOGGER.get()
        && let Ok(mut logger) = lock.try_lock()
    {
        let _ = logger.emit_leveled(level, &format!("{scope}: {msg}"));
    }
}

/// Recorded only in verbose mode.
pub fn debug(scope: &str, msg: &str) {
    if VERBOSE.load(Ordering::Relaxed) {
        log(Level::Debug, scope, msg);
    }
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Information, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
