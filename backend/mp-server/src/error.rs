use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] mp_config::ConfigError),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
