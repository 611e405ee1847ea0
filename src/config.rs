use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "DocAssist";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BIND: &str = "127.0.0.1:8001";
pub const DATABASE_FILE: &str = "docassist.db";

/// Fallback tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "docassist=info,docassist_lib=info,tower_http=info"
}

/// Get the application data directory
/// ~/DocAssist/, or ./DocAssist when no home directory can be determined.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

pub fn default_database_path() -> PathBuf {
    app_data_dir().join(DATABASE_FILE)
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid bind address in {var}: {value}")]
    InvalidBind { var: &'static str, value: String },

    #[error("Invalid boolean in {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
}

/// Allowed CORS origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }
}

/// Runtime configuration of the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub db_path: PathBuf,
    pub cors_origins: CorsOrigins,
    /// Seed sample data at startup when the store is empty.
    pub seed_on_start: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset or blank values take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("DOCASSIST_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBind {
                var: "DOCASSIST_BIND",
                value: bind_raw.clone(),
            })?;

        let db_path = get("DOCASSIST_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let cors_origins = CorsOrigins::parse(&get("CORS_ORIGINS").unwrap_or_default());

        let seed_on_start = match get("DOCASSIST_SEED") {
            None => false,
            Some(v) => parse_bool(&v).ok_or(ConfigError::InvalidBool {
                var: "DOCASSIST_SEED",
                value: v.clone(),
            })?,
        };

        Ok(Self {
            bind,
            db_path,
            cors_origins,
            seed_on_start,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
