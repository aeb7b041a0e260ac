use pbr_base::EnumFromNameT;
use pbr_logging::{log_error, log_warning, LogLevel};

use crate::LOG_CAT;

/// Name of the optional settings file, looked up in the working directory
pub const SETTINGS_FILE : &str = "pbr.toml";

/// Application settings
#[derive(Clone, PartialEq, Debug)]
pub struct Settings {
    /// Maximum level of messages that get logged
    pub log_level      : LogLevel,
    /// Flush the log after every message
    pub always_flush   : bool,
    /// Mirror the log to stdout
    pub log_to_console : bool,
    /// File the log is written to, if any
    pub log_file       : Option<String>,
}

impl Settings {
    /// Load the settings from the content of a toml file, keys that are not present keep their default value
    pub fn load(toml: &str) -> Option<Settings> {
        let toml = match toml.parse::<toml::Table>() {
            Ok(toml) => toml,
            Err(err) => {
                log_error!(LOG_CAT, Self::load, "Failed to parse '{}', err: {}", SETTINGS_FILE, err);
                return None;
            }
        };
        let mut settings = Settings::default();

        if let Some(toml::Value::Table(logging)) = toml.get("logging") {
            if let Some(toml::Value::String(level)) = logging.get("level") {
                settings.log_level = match LogLevel::parse(level) {
                    Some(level) => level,
                    None => {
                        log_error!(LOG_CAT, Self::load, "Unknown log level '{}'", level);
                        return None;
                    }
                };
            }
            if let Some(toml::Value::Boolean(always_flush)) = logging.get("always-flush") {
                settings.always_flush = *always_flush;
            }
            if let Some(toml::Value::Boolean(log_to_console)) = logging.get("log-to-console") {
                settings.log_to_console = *log_to_console;
            }
            match logging.get("file") {
                Some(toml::Value::String(file)) => settings.log_file = Some(file.clone()),
                Some(_) => {
                    log_warning!(LOG_CAT, "'logging.file' should be a string, ignoring it");
                },
                None => (),
            }
        }

        Some(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            always_flush: true,
            log_to_console: true,
            log_file: None,
        }
    }
}
