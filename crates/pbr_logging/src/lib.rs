//! Categorized, leveled logging for the pbr tools.
//!
//! A [`Logger`] is created by the application and registered with [`set_logger`], after which the `log_*!` macros can be used from anywhere.

use core::{
    fmt::{Display, Arguments, Write as _},
    sync::atomic::{AtomicU8, self},
    time::Duration,
};
use std::{
    io::{self, Write},
    time::Instant,
};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};
use pbr_base::EnumFromIndexT;
use pbr_common_macros::{EnumCount, EnumFromIndex, EnumFromName};

static LOGGER : RwLock<Option<&'static Logger>> = RwLock::new(None);

static PROCESS_START : Lazy<Instant> = Lazy::new(Instant::now);

/// Register the global logger used by the logging macros
pub fn set_logger(logger: &'static Logger) {
    // Make sure timestamps are relative to (at latest) the moment logging gets set up
    Lazy::force(&PROCESS_START);
    *LOGGER.write() = Some(logger);
}

/// Get the global logger
///
/// # Panics
///
/// Panics if no logger was registered with [`set_logger`]
pub fn get_logger() -> &'static Logger {
    match *LOGGER.read() {
        Some(logger) => logger,
        None => panic!("Logger was not set"),
    }
}

/// Try to get the global logger, returns `None` if no logger was registered
pub fn try_get_logger() -> Option<&'static Logger> {
    *LOGGER.read()
}

/// Logging level
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, EnumCount, EnumFromIndex, EnumFromName)]
pub enum LogLevel {
    /// Severe error: will probably result in a crash
    #[parse_name("severe")]
    Severe,
    /// Error: may not result in a crash
    #[parse_name("error")]
    Error,
    /// Warning: While not as bad as an error, it may result to something like a precision issue
    #[parse_name("warning")]
    Warning,
    /// General info
    #[parse_name("info")]
    Info,
    /// Verbose info
    #[parse_name("verbose")]
    Verbose,
    /// Debug info (includes verbose info)
    #[parse_name("debug")]
    Debug,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Severe  => f.write_str("\x1B[1m\x1B[41m\x1B[30m[SEVERE ]\x1B[0m"),
            LogLevel::Error   => f.write_str(               "\x1B[91m[ERROR  ]\x1B[0m"),
            LogLevel::Warning => f.write_str(               "\x1B[93m[WARNING]\x1B[0m"),
            LogLevel::Info    => f.write_str(               "\x1B[37m[INFO   ]\x1B[0m"),
            LogLevel::Verbose => f.write_str(               "\x1B[90m[VERBOSE]\x1B[0m"),
            LogLevel::Debug   => f.write_str(               "\x1B[94m[DEBUG  ]\x1B[0m"),
        }
    }
}

/// Log category
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogCategory {
    category     : &'static str,
    sub_category : Option<&'static str>
}

impl LogCategory {
    pub const fn new(name: &'static str) -> Self {
        Self { category: name, sub_category: None }
    }

    pub const fn new_with_sub(name: &'static str, sub_name: &'static str) -> Self {
        Self { category: name, sub_category: Some(sub_name) }
    }
}

impl Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.sub_category {
            Some(sub) => write!(f, "{}({sub})", self.category),
            None => f.write_str(self.category),
        }
    }
}

/// Time since the process started logging
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct TimeStamp(Duration);

impl TimeStamp {
    /// Get the current timestamp
    pub fn now() -> Self {
        Self(PROCESS_START.elapsed())
    }

    /// Get the elapsed time the timestamp represents
    pub const fn elapsed(self) -> Duration {
        self.0
    }
}

impl Display for TimeStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:>6}.{:03}]", self.0.as_secs(), self.0.subsec_millis())
    }
}

/// Additional info about where the log occured
pub struct LogLocation {
    file : &'static str,
    line : u32,
    func : &'static str,
    time : TimeStamp,
}

impl LogLocation {
    /// Creates a new log location
    pub const fn new(file: &'static str, line: u32, func: &'static str, time: TimeStamp) -> Self {
        Self { file, line, func, time }
    }

    /// Get the file name where the log occured
    pub const fn file(&self) -> &str {
        self.file
    }

    /// Get the line where the log occurred
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Get the function where the log occurred
    pub const fn function(&self) -> &str {
        self.func
    }

    /// Get the timestamp when the log occurred
    pub const fn timestamp(&self) -> TimeStamp {
        self.time
    }
}

struct LogLocationFormatter<'a> {
    loc   : &'a LogLocation,
    level : LogLevel
}

impl<'a> LogLocationFormatter<'a> {
    fn new(loc: &'a LogLocation, level: LogLevel) -> Self {
        Self { loc, level }
    }
}

impl<'a> Display for LogLocationFormatter<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level {
            LogLevel::Severe |
            LogLevel::Error  |
            LogLevel::Debug => write!(f, " ({}:{}: {})", self.loc.file(), self.loc.line(), self.loc.function()),
            LogLevel::Warning |
            LogLevel::Info    |
            LogLevel::Verbose => Ok(()),
        }
    }
}

pub fn get_func_name<F>(_: F) -> &'static str {
    core::any::type_name::<F>()
}

#[macro_export]
macro_rules! log_location {
    () => {
        $crate::LogLocation::new(file!(), line!(), "", $crate::TimeStamp::now())
    };
    ($func: expr) => {
        $crate::LogLocation::new(file!(), line!(), $crate::get_func_name($func), $crate::TimeStamp::now())
    };
}

/// A writer the logger can forward its output to
pub type LogWriter = Box<dyn Write + Send>;

pub struct LoggerState {
    writers:        [Option<LogWriter>; Self::MAX_WRITERS],
    cache:          String,
    always_flush:   bool,
    log_to_console: bool,
}

impl LoggerState {
    const MAX_WRITERS: usize = 8;
    const CACHE_FLUSH_LIMIT: usize = 4 * 1024;

    pub const fn new() -> Self {
        // `Option<Box<dyn Write>>` is not `Copy`, so the array needs to be spelled out
        let writers = [
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        ];

        Self {
            writers,
            cache: String::new(),
            always_flush: false,
            log_to_console: true,
        }
    }

    fn write_message(&mut self, message: &str) {
        self.cache.push_str(message);
        self.flush_when_needed();
    }

    fn format_message(&mut self, fmt_args: Arguments) {
        _ = self.cache.write_fmt(fmt_args);
    }

    fn flush_when_needed(&mut self) {
        if self.always_flush || self.cache.len() > Self::CACHE_FLUSH_LIMIT {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if self.cache.is_empty() {
            return;
        }

        if self.log_to_console {
            let mut stdout = io::stdout().lock();
            _ = stdout.write_all(self.cache.as_bytes());
            _ = stdout.flush();
        }

        for writer in self.writers.iter_mut().flatten() {
            _ = writer.write_all(self.cache.as_bytes());
            _ = writer.flush();
        }
        self.cache.clear();
    }
}

/// Logger
///
/// Supports up to 8 writers, e.g. terminal, file, external tool, etc
pub struct Logger {
    state: Mutex<LoggerState>,
    max_log_level: AtomicU8,
}

impl Logger {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(LoggerState::new()),
            max_log_level: AtomicU8::new(LogLevel::Debug as u8),
        }
    }

    /// Set the maximum log level (severe == lowest, debug == highest)
    pub fn set_max_level(&self, level: LogLevel) {
        self.max_log_level.store(level as u8, atomic::Ordering::Relaxed)
    }

    /// Get the maximum log level
    pub fn max_level(&self) -> LogLevel {
        LogLevel::from_idx_or(self.max_log_level.load(atomic::Ordering::Relaxed) as usize, LogLevel::Debug)
    }

    /// Check if a message at the given level would be logged
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.max_log_level.load(atomic::Ordering::Relaxed)
    }

    /// Set whether the logger should flush after each write
    pub fn set_always_flush(&self, always_flush: bool) {
        self.state.lock().always_flush = always_flush;
    }

    /// Set whether the logger should log it's output to console
    pub fn set_log_to_console(&self, log_to_console: bool) {
        let mut state = self.state.lock();

        // Flush first, so everything logged before keeps the old console setting
        state.flush();
        state.log_to_console = log_to_console;
    }

    /// Add a writer.
    ///
    /// Returns `Ok(index)` if space was available. This index can be used to remove the writer later on.
    ///
    /// Otherwise returns an `Err` with the provided writer
    pub fn add_writer(&self, writer: LogWriter) -> Result<usize, LogWriter> {
        let mut state = self.state.lock();

        let empty = state.writers.iter_mut().enumerate().find(|val| val.1.is_none());
        match empty {
            Some((id, slot)) => {
                *slot = Some(writer);
                Ok(id)
            },
            None => Err(writer),
        }
    }

    /// Remove a writer from the logger
    pub fn remove_writer(&self, index: usize) -> Option<LogWriter> {
        let mut state = self.state.lock();
        state.flush();
        state.writers.get_mut(index).and_then(Option::take)
    }

    /// Log a message
    pub fn log(&self, category: LogCategory, level: LogLevel, loc: LogLocation, text: &str) {
        self.log_fmt(category, level, loc, format_args!("{text}"));
    }

    /// Log a formatted message
    pub fn log_fmt(&self, category: LogCategory, level: LogLevel, loc: LogLocation, format: Arguments) {
        if self.is_enabled(level) {
            let loc_formatter = LogLocationFormatter::new(&loc, level);
            let timestamp = loc.timestamp();
            let mut state = self.state.lock();
            state.format_message(format_args!("\x1B[38m{timestamp}\x1B[0m {level} [{category}]{loc_formatter}: "));
            state.format_message(format);
            state.write_message("\n");
        }
    }

    pub fn flush(&self) {
        self.state.lock().flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}

#[macro_export]
macro_rules! log {
    ($category:expr, $level:expr, $func:expr, $text:expr) => {
        $crate::get_logger().log_fmt($category, $level, $crate::log_location!($func), format_args!($text));
    };
    ($category:expr, $level:expr, $func:expr, $format:expr, $($arg:expr),*) => {
        $crate::get_logger().log_fmt($category, $level, $crate::log_location!($func), format_args!($format, $($arg),*));
    };
}

#[macro_export]
macro_rules! log_severe {
    ($category:expr, $func:expr, $text:expr) => {
        $crate::get_logger().log_fmt($category, $crate::LogLevel::Severe, $crate::log_location!($func), format_args!($text));
    };
    ($category:expr, $func:expr, $format:expr, $($arg:expr),*) => {
        $crate::get_logger().log_fmt($category, $crate::LogLevel::Severe, $crate::log_location!($func), format_args!($format, $($arg),*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($category:expr, $func:expr, $text:expr) => {
        $crate::get_logger().log_fmt($category, $crate::LogLevel::Error, $crate::log_location!($func), format_args!($text));
    };
    ($category:expr, $func:expr, $format:expr, $($arg:expr),*) => {
        $crate::get_logger().log_fmt($category, $crate::LogLevel::Error, $crate::log_location!($func), format_args!($format, $($arg),*));
    };
}

#[macro_export]
macro_rules! log_warning {
    ($category:expr, $text:expr) => {
        $crate::get_logger().log_fmt($category, $crate::LogLevel::Warning, $crate::log_location!(), format_args!($text));
    };
    ($category:expr, $format:expr, $($arg:expr),*) => {
        $crate::get_logger().log_fmt($category, $crate::LogLevel::Warning, $crate::log_location!(), format_args!($format, $($arg),*));
    };
}

#[macro_export]
macro_rules! log_info {
    ($category:expr, $text:expr) => {
        $crate::get_logger().log_fmt($category, $crate::LogLevel::Info, $crate::log_location!(), format_args!($text));
    };
    ($category:expr, $format:expr, $($arg:expr),*) => {
        $crate::get_logger().log_fmt($category, $crate::LogLevel::Info, $crate::log_location!(), format_args!($format, $($arg),*));
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($category:expr, $text:expr) => {
        $crate::get_logger().log_fmt($category, $crate::LogLevel::Verbose, $crate::log_location!(), format_args!($text));
    };
    ($category:expr, $format:expr, $($arg:expr),*) => {
        $crate::get_logger().log_fmt($category, $crate::LogLevel::Verbose, $crate::log_location!(), format_args!($format, $($arg),*));
    };
}

#[macro_export]
macro_rules! log_debug {
    ($category:expr, $func:expr, $text:expr) => {
        $crate::get_logger().log_fmt($category, $crate::LogLevel::Debug, $crate::log_location!($func), format_args!($text));
    };
    ($category:expr, $func:expr, $format:expr, $($arg:expr),*) => {
        $crate::get_logger().log_fmt($category, $crate::LogLevel::Debug, $crate::log_location!($func), format_args!($format, $($arg),*));
    };
}

#[cfg(test)]
mod tests {
    use std::{io::{self, Write}, sync::Arc};
    use parking_lot::Mutex;
    use pbr_base::{EnumCountT, EnumFromNameT};
    use super::*;

    /// Writer that shares its output, so the test can inspect it after handing it to the logger
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    const CAT : LogCategory = LogCategory::new_with_sub("Test", "Sub");

    fn quiet_logger() -> (Logger, SharedBuffer) {
        let logger = Logger::new();
        logger.set_log_to_console(false);
        let buffer = SharedBuffer::default();
        assert_eq!(logger.add_writer(Box::new(buffer.clone())).ok(), Some(0));
        (logger, buffer)
    }

    #[test]
    fn level_names() {
        assert_eq!(LogLevel::COUNT, 6);
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("Warning"), None);
    }

    #[test]
    fn category_display() {
        assert_eq!(CAT.to_string(), "Test(Sub)");
        assert_eq!(LogCategory::new("Main").to_string(), "Main");
    }

    #[test]
    fn writes_are_cached_until_flush() {
        let (logger, buffer) = quiet_logger();

        logger.log(CAT, LogLevel::Info, log_location!(), "cached");
        assert!(buffer.contents().is_empty());

        logger.flush();
        let contents = buffer.contents();
        assert!(contents.contains("[Test(Sub)]"), "{contents}");
        assert!(contents.contains("cached\n"), "{contents}");
    }

    #[test]
    fn always_flush_and_max_level() {
        let (logger, buffer) = quiet_logger();
        logger.set_always_flush(true);
        logger.set_max_level(LogLevel::Warning);
        assert_eq!(logger.max_level(), LogLevel::Warning);

        logger.log_fmt(CAT, LogLevel::Info, log_location!(), format_args!("filtered {}", 1));
        assert!(buffer.contents().is_empty());

        logger.log_fmt(CAT, LogLevel::Error, log_location!(quiet_logger), format_args!("kept {}", 2));
        let contents = buffer.contents();
        assert!(contents.contains("kept 2"), "{contents}");
        assert!(contents.contains("quiet_logger"), "{contents}");
    }

    #[test]
    fn writer_slots() {
        let logger = Logger::new();
        logger.set_log_to_console(false);
        for i in 0..LoggerState::MAX_WRITERS {
            assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(i));
        }
        assert!(logger.add_writer(Box::new(io::sink())).is_err());

        assert!(logger.remove_writer(3).is_some());
        assert!(logger.remove_writer(3).is_none());
        assert!(logger.remove_writer(42).is_none());
        assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(3));
    }
}
