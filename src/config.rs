//! Runtime settings read from the environment (after `.env` is loaded by the binary).

use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/crm";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CUSTOMER_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::UnknownStorage(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Only origin allowed to call the customer routes cross-origin.
    pub customer_allowed_origin: HeaderValue,
    pub storage: StorageBackend,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind.parse().map_err(|_| ConfigError::InvalidValue {
            key: "BIND_ADDR",
            value: bind.clone(),
        })?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: "DATABASE_MAX_CONNECTIONS",
                    value: v,
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let origin =
            lookup("CUSTOMER_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_CUSTOMER_ORIGIN.into());
        let customer_allowed_origin =
            HeaderValue::from_str(origin.trim()).map_err(|_| ConfigError::InvalidValue {
                key: "CUSTOMER_ALLOWED_ORIGIN",
                value: origin.clone(),
            })?;

        let storage = match lookup("STORAGE") {
            Some(v) => v.parse()?,
            None => StorageBackend::Postgres,
        };

        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            customer_allowed_origin,
            storage,
        })
    }
}
