use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Document serialization error: {source} {location}")]
    Serialization {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid collection name '{name}' {location}")]
    InvalidCollection {
        name: String,
        location: ErrorLocation,
    },

    #[error("Corrupt document {id} in {collection}: {message} {location}")]
    CorruptDocument {
        collection: String,
        id: String,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The underlying failure text, without the source location suffix
    pub fn detail(&self) -> String {
        match self {
            DbError::Unavailable { message, .. } => message.clone(),
            DbError::Sqlx { source, .. } => source.to_string(),
            DbError::Serialization { source, .. } => source.to_string(),
            DbError::InvalidCollection { name, .. } => {
                format!("Invalid collection name '{}'", name)
            }
            DbError::CorruptDocument {
                collection,
                id,
                message,
                ..
            } => format!("Corrupt document {} in {}: {}", id, collection, message),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
