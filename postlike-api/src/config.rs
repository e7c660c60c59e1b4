use crate::identity::DEFAULT_IDENTITY_HEADER;
use axum::http::HeaderName;
use postlike_errors::AppError;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,
    pub identity_header: HeaderName,
    pub request_timeout: Duration,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| AppError::InvalidConfig("DATABASE_URL must be set".to_string()))?;

        let server_addr = lookup("SERVER_ADDR")
            .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::InvalidConfig(format!("SERVER_ADDR: {}", e)))?;

        let identity_header = lookup("IDENTITY_HEADER")
            .unwrap_or_else(|| DEFAULT_IDENTITY_HEADER.to_string())
            .parse::<HeaderName>()
            .map_err(|e| AppError::InvalidConfig(format!("IDENTITY_HEADER: {}", e)))?;

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| AppError::InvalidConfig(format!("REQUEST_TIMEOUT_SECS: {}", e)))?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("1") | Some("true") => true,
            Some("0") | Some("false") => false,
            Some(other) => {
                return Err(AppError::InvalidConfig(format!(
                    "RUN_MIGRATIONS: expected true or false, got {}",
                    other
                )))
            }
        };

        Ok(Self {
            database_url,
            server_addr,
            identity_header,
            request_timeout,
            run_migrations,
        })
    }
}
