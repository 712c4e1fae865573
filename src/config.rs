//! Process configuration.
//!
//! Values come from the environment, after an optional `.env` file has been
//! loaded. Unset variables fall back to defaults suited to a local run.

use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub store: StoreKind,
    pub database_host: String,
    pub database_user: String,
    pub database_password: Option<String>,
    pub database_name: String,
    pub cors: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

const DEFAULT_LISTEN_ADDR: &str = "[::]:8000";

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!(error = %err, "ignoring unreadable .env file");
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr.parse::<SocketAddr>().map_err(|err| ConfigError::InvalidValue {
            key: "LISTEN_ADDR",
            value: raw_addr.clone(),
            reason: err.to_string(),
        })?;

        let store = match lookup("NOTES_STORE").as_deref() {
            None | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "NOTES_STORE",
                    value: other.to_string(),
                    reason: "expected `postgres` or `memory`".to_string(),
                })
            }
        };

        let cors = match lookup("CORS_PERMISSIVE").as_deref() {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "CORS_PERMISSIVE",
                    value: other.to_string(),
                    reason: "expected `true` or `false`".to_string(),
                })
            }
        };

        Ok(Self {
            listen_addr,
            store,
            database_host: lookup("DATABASE_HOST").unwrap_or_else(|| "localhost".to_string()),
            database_user: lookup("DATABASE_USER").unwrap_or_else(|| "postgres".to_string()),
            database_password: lookup("DATABASE_PASSWORD"),
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "notes".to_string()),
            cors,
        })
    }

    /// Connection settings for `PostgresConnectionManager`. Values are set
    /// field by field, so they need no quoting.
    pub fn database_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.database_host)
            .user(&self.database_user)
            .dbname(&self.database_name);
        if let Some(password) = &self.database_password {
            config.password(password);
        }
        config
    }
}
