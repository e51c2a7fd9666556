use crate::error::ConfigError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;

/// Log levels accepted in `LOG_LEVEL`.
pub const LOG_LEVELS: [&str; 4] = ["DEBUG", "INFO", "WARNING", "ERROR"];

/// The root configuration structure for the rate calculator service.
///
/// Field names mirror the environment variables they are read from, lowercased.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// The address the HTTP server binds to.
    pub host: String,
    /// The port the HTTP server binds to.
    pub port: u16,
    /// Enables debug logging and per-request timing.
    pub debug: bool,
    /// Base log level. When unset, `INFO` (or `DEBUG` in debug mode).
    pub log_level: Option<String>,

    pub db_hostname: String,
    pub db_port: u16,
    pub db_database: String,
    pub db_username: String,
    pub db_password: String,
    /// Upper bound of pooled connections.
    pub db_max_connections: u32,
    /// Seconds to wait for a free pooled connection before failing the query.
    pub db_acquire_timeout_secs: u64,
    /// A full connection string. Takes precedence over the `db_*` parts.
    pub database_url: Option<String>,
}

/// Returns a builder pre-loaded with the service defaults.
pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = config::Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8080_i64)?
        .set_default("debug", false)?
        .set_default("db_hostname", "127.0.0.1")?
        .set_default("db_port", 5400_i64)?
        .set_default("db_database", "postgres")?
        .set_default("db_username", "postgres")?
        .set_default("db_password", "ratestask")?
        .set_default("db_max_connections", 10_i64)?
        .set_default("db_acquire_timeout_secs", 5_i64)?;
    Ok(builder)
}

impl Settings {
    /// Checks values that deserialization alone cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.log_level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "log_level must be one of {}, got {level}",
                    LOG_LEVELS.join(", ")
                )));
            }
        }
        if self.db_max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "db_max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The level logging should start at, taking debug mode into account.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            self.log_level.as_deref().unwrap_or("INFO")
        }
    }

    /// The PostgreSQL connection string for the pool.
    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.db_username, self.db_password, self.db_hostname, self.db_port, self.db_database
            ),
        }
    }

    /// The `host:port` pair the server listens on.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
