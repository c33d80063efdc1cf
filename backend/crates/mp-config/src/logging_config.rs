use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored stdout output (ignored when logging to a file)
    pub colored: bool,
    /// Log file name inside `dir`; None logs to stdout
    pub file: Option<String>,
    /// Log directory, relative to the config directory
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(file) = &self.file
            && (file.trim().is_empty() || file.contains(".."))
        {
            return Err(ConfigError::logging(format!(
                "logging.file must be a plain file name, got '{}'",
                file
            )));
        }

        if self.dir.contains("..") {
            return Err(ConfigError::logging("logging.dir cannot contain '..'"));
        }

        Ok(())
    }
}
