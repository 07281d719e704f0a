//! Tests for the logger lifecycle and entry layouts.

use linelog::fmt::DEFAULT_PREFIXES;
use linelog::{Error, FixedClock, Level, Logger, Prefixes, emit};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TIME: &str = "14:05:07";
const BANNER: &str = "# Log started: 03/09/2024 14:05:07\n";

fn clock() -> FixedClock {
    FixedClock::at(2024, 3, 9, 14, 5, 7).unwrap()
}

fn logger() -> Logger {
    Logger::builder().clock(clock()).build()
}

fn started(tmp: &TempDir) -> (Logger, PathBuf) {
    let path = tmp.path().join("app.log");
    let mut logger = logger();
    logger.initialize(Some(path.as_path()), None, None).unwrap();
    (logger, path)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn initialize_writes_banner() {
    let tmp = TempDir::new().unwrap();
    let (logger, path) = started(&tmp);
    assert!(logger.is_initialized());
    assert!(logger.is_buffer_allocated());
    assert_eq!(logger.file_path(), Some(path.as_path()));
    assert_eq!(read(&path), BANNER);
}

#[test]
fn initialize_with_system_clock_banner_shape() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sys.log");
    let mut logger = Logger::default();
    logger.initialize(Some(path.as_path()), None, None).unwrap();

    let content = read(&path);
    let rest = content.strip_prefix("# Log started: ").unwrap();
    let (date, time) = rest.trim_end().split_once(' ').unwrap();
    assert_eq!(date.len(), 10);
    assert_eq!(time.len(), 8);
    assert!(content.ends_with('\n'));
}

#[test]
fn initialize_with_initial_text_verbatim() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.log");
    let mut logger = logger();
    logger.initialize(Some(path.as_path()), None, Some("X")).unwrap();
    assert_eq!(read(&path), "X");
}

#[test]
fn initialize_truncates_existing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.log");
    fs::write(&path, "old content\nmore\n").unwrap();
    let mut logger = logger();
    logger.initialize(Some(path.as_path()), None, None).unwrap();
    assert_eq!(read(&path), BANNER);
}

#[test]
fn initialize_without_path_fails() {
    let mut logger = logger();
    assert!(matches!(
        logger.initialize(None, None, None),
        Err(Error::MissingPath)
    ));
    assert!(matches!(
        logger.initialize(Some(Path::new("")), None, None),
        Err(Error::MissingPath)
    ));
    assert!(!logger.is_initialized());
}

#[test]
fn initialize_into_missing_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nope").join("app.log");
    let mut logger = logger();
    assert!(matches!(
        logger.initialize(Some(path.as_path()), None, None),
        Err(Error::Io(_))
    ));
    assert!(!logger.is_initialized());
}

#[test]
fn reinitialize_keeps_path_and_truncates() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    logger.info("before").unwrap();

    let other = tmp.path().join("other.log");
    logger.initialize(Some(other.as_path()), None, Some("again\n")).unwrap();

    assert_eq!(logger.file_path(), Some(path.as_path()));
    assert_eq!(read(&path), "again\n");
    assert!(!other.exists());
}

#[test]
fn reinitialize_without_filename_reuses_path() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    logger.close();
    logger.initialize(None, None, Some("restart\n")).unwrap();
    assert!(logger.is_buffer_allocated());
    assert_eq!(read(&path), "restart\n");
}

#[test]
fn emit_before_initialize_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.log");
    let mut logger = logger();

    assert!(matches!(logger.emit_plain("x"), Err(Error::NotInitialized)));
    assert!(matches!(logger.debug("x"), Err(Error::NotInitialized)));
    assert!(matches!(logger.print_raw("x"), Err(Error::NotInitialized)));
    assert!(matches!(
        emit!(logger, Level::Warning, "x {}", 1),
        Err(Error::NotInitialized)
    ));
    assert!(!path.exists());
}

#[test]
fn empty_text_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    assert!(matches!(
        logger.emit_plain(""),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(logger.warning(""), Err(Error::InvalidArgument(_))));
    assert!(matches!(
        logger.print_raw(""),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(read(&path), BANNER);
}

#[test]
fn plain_entry_layout() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    let line = format!("[{TIME}] hello\n");
    assert_eq!(logger.emit_plain("hello").unwrap(), line.len());
    assert_eq!(read(&path), format!("{BANNER}{line}"));
}

#[test]
fn leveled_entries_use_prefixes() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    let mut expected = BANNER.to_string();

    for (level, prefix) in Level::leveled().into_iter().zip(DEFAULT_PREFIXES) {
        let before = fs::metadata(&path).unwrap().len();
        let line = format!("[{TIME}]{prefix} msg\n");
        let written = logger.emit_leveled(level, "msg").unwrap();
        assert_eq!(written, line.len());
        let after = fs::metadata(&path).unwrap().len();
        assert_eq!(after, before + line.len() as u64);
        expected.push_str(&line);
    }

    assert_eq!(read(&path), expected);
}

#[test]
fn leveled_wrappers_match_levels() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    logger.debug("d").unwrap();
    logger.error("e").unwrap();
    logger.info("i").unwrap();
    logger.warning("w").unwrap();

    let body = read(&path);
    let lines: Vec<&str> = body.lines().skip(1).collect();
    assert_eq!(
        lines,
        vec![
            "[14:05:07][DEBUG] d",
            "[14:05:07][ERROR] e",
            "[14:05:07][INFO] i",
            "[14:05:07][WARNING] w",
        ]
    );
}

#[test]
fn leveled_rejects_unprefixed_levels() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, _) = started(&tmp);
    assert!(matches!(
        logger.emit_leveled(Level::Print, "x"),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        logger.emit_leveled(Level::None, "x"),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn formatted_leveled_adds_newline_once() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);

    let written = emit!(logger, Level::Error, "code {}", 7).unwrap();
    assert_eq!(written, "[14:05:07][ERROR] code 7\n".len());
    emit!(logger, Level::Information, "done\n").unwrap();

    assert_eq!(
        read(&path),
        format!("{BANNER}[14:05:07][ERROR] code 7\n[14:05:07][INFO] done\n")
    );
}

#[test]
fn formatted_none_has_time_only() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    emit!(logger, Level::None, "{}-{}", "a", "b").unwrap();
    assert_eq!(read(&path), format!("{BANNER}[14:05:07] a-b\n"));
}

#[test]
fn formatted_print_is_verbatim() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    assert_eq!(emit!(logger, Level::Print, "part {}", 1).unwrap(), 6);
    emit!(logger, Level::Print, " part {}\n", 2).unwrap();
    assert_eq!(read(&path), format!("{BANNER}part 1 part 2\n"));
}

#[test]
fn formatted_print_empty_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    assert_eq!(emit!(logger, Level::Print, "{}", "").unwrap(), 0);
    assert_eq!(read(&path), BANNER);
}

#[test]
fn formatted_overflow_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    let big = "z".repeat(2000);

    let err = emit!(logger, Level::Debug, "{big}").unwrap_err();
    assert!(matches!(err, Error::BufferOverflow { capacity: 1024, .. }));
    assert_eq!(read(&path), BANNER);

    logger.set_buffer_size(4096);
    emit!(logger, Level::Debug, "{big}").unwrap();
    assert!(read(&path).ends_with(&format!("{big}\n")));
}

#[test]
fn plain_overflow_is_reported() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, _) = started(&tmp);
    let big = "q".repeat(1100);
    assert!(matches!(
        logger.emit_plain(&big),
        Err(Error::BufferOverflow { .. })
    ));
}

#[test]
fn print_raw_appends_exactly() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    assert_eq!(logger.print_raw("abc").unwrap(), 3);
    assert_eq!(read(&path), format!("{BANNER}abc"));
}

#[test]
fn close_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let mut logger = logger();
    logger.close();
    logger.close();

    let path = tmp.path().join("app.log");
    logger.initialize(Some(path.as_path()), None, None).unwrap();
    logger.close();
    logger.close();
    assert!(!logger.is_buffer_allocated());
    assert!(logger.is_initialized());
}

#[test]
fn emit_after_close_reports_closed() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    logger.close();

    assert!(matches!(logger.info("x"), Err(Error::Closed)));
    assert!(matches!(
        emit!(logger, Level::Print, "x"),
        Err(Error::Closed)
    ));
    assert_eq!(logger.print_raw("still works").unwrap(), 11);
    assert_eq!(read(&path), format!("{BANNER}still works"));
}

#[test]
fn buffer_size_is_clamped() {
    let mut logger = logger();
    assert_eq!(logger.buffer_size(), 1024);
    assert_eq!(logger.set_buffer_size(500), 1024);
    assert_eq!(logger.buffer_size(), 1024);
    assert_eq!(logger.set_buffer_size(8192), 1024);
    assert_eq!(logger.set_buffer_size(0), 8192);
    assert_eq!(logger.buffer_size(), 1024);
}

#[test]
fn builder_buffer_size_used_on_initialize() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.log");
    let mut logger = Logger::builder().clock(clock()).buffer_size(3000).build();
    logger.initialize(Some(path.as_path()), None, None).unwrap();
    emit!(logger, Level::Print, "{}", "k".repeat(2500)).unwrap();
}

#[test]
fn set_prefixes_none_restores_defaults() {
    let mut logger = logger();
    logger.set_prefixes(Some(Prefixes::new("A", "B", "C", "D")));
    assert_eq!(logger.prefixes().get(Level::Error), Some("B"));
    logger.set_prefixes(None);
    assert_eq!(logger.prefixes(), &Prefixes::default());
}

#[test]
fn initialize_installs_custom_prefixes() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.log");
    let mut logger = logger();
    let table = Prefixes::from(["<d>", "<e>", "<i>", "<w>"]);
    logger.initialize(Some(path.as_path()), Some(table), None).unwrap();
    logger.warning("careful").unwrap();
    assert!(read(&path).ends_with("[14:05:07]<w> careful\n"));
}

#[test]
fn initialize_without_prefixes_resets_table() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.log");
    let mut logger = logger();
    logger.set_prefixes(Some(Prefixes::new("A", "B", "C", "D")));
    logger.initialize(Some(path.as_path()), None, None).unwrap();
    assert!(logger.prefixes().is_default());
}

#[test]
fn twelve_hour_time() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    assert!(logger.uses_24_hour_time());
    logger.set_use_24_hour_time(false);
    assert!(!logger.uses_24_hour_time());
    assert_eq!(logger.current_time(), "02:05:07 PM");
    logger.emit_plain("pm").unwrap();
    assert!(read(&path).ends_with("[02:05:07 PM] pm\n"));
}

#[test]
fn noon_and_midnight_in_twelve_hour_time() {
    let noon = Logger::builder()
        .clock(FixedClock::at(2024, 1, 1, 12, 0, 0).unwrap())
        .use_24_hour_time(false)
        .build();
    assert_eq!(noon.current_time(), "12:00:00 PM");

    let midnight = Logger::builder()
        .clock(FixedClock::at(2024, 1, 1, 0, 0, 0).unwrap())
        .use_24_hour_time(false)
        .build();
    assert_eq!(midnight.current_time(), "12:00:00 AM");
    assert_eq!(midnight.current_date(), "01/01/2024");
}

#[test]
fn entries_keep_write_order() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    for i in 0..50 {
        logger.info(&format!("entry {i}")).unwrap();
    }

    let body = read(&path);
    let lines: Vec<&str> = body.lines().skip(1).collect();
    assert_eq!(lines.len(), 50);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("[14:05:07][INFO] entry {i}"));
    }
}

#[test]
fn append_survives_external_truncation() {
    let tmp = TempDir::new().unwrap();
    let (mut logger, path) = started(&tmp);
    fs::write(&path, "").unwrap();
    logger.emit_plain("after").unwrap();
    assert_eq!(read(&path), "[14:05:07] after\n");
}

#[test]
fn append_to_removed_directory_returns_zero() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("logs");
    fs::create_dir(&dir).unwrap();
    let path = dir.join("app.log");
    let mut logger = logger();
    logger.initialize(Some(path.as_path()), None, None).unwrap();

    fs::remove_dir_all(&dir).unwrap();
    assert_eq!(logger.info("lost").unwrap(), 0);
    assert_eq!(logger.print_raw("lost").unwrap(), 0);
}
