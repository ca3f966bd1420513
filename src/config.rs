// src/config.rs

use std::{env, net::SocketAddr};

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub server_addr: SocketAddr,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    pub log_dir: String,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let server_addr = parse_var("SERVER_ADDR", "0.0.0.0:3000")?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", "5")?;

        Ok(Self {
            database_url,
            rust_log,
            server_addr,
            cors_allowed_origins,
            log_dir,
            db_max_connections,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

/// Splits a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
