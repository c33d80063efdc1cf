use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_MAX_CONNECTIONS,
    MAX_DATABASE_MAX_CONNECTIONS, MIN_DATABASE_MAX_CONNECTIONS,
};

use serde::Deserialize;

/// Document store connection settings.
///
/// The store is only used when both `url` and `name` are set; otherwise the
/// service runs without a database.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: None,
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// `(url, name)` when both are present and non-empty
    pub fn connection(&self) -> Option<(&str, &str)> {
        match (self.url.as_deref(), self.name.as_deref()) {
            (Some(url), Some(name)) if !url.is_empty() && !name.is_empty() => Some((url, name)),
            _ => None,
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_connections < MIN_DATABASE_MAX_CONNECTIONS
            || self.max_connections > MAX_DATABASE_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }
}
