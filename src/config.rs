/*
 * Responsibility
 * - Read environment variables (.env is honoured via dotenvy)
 * - Validate values up front; a bad value fails startup instead of a request
 */
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // The Functions host tells a custom handler which port to listen on.
        let port = match std::env::var("FUNCTIONS_CUSTOMHANDLER_PORT") {
            Ok(v) => parse_or(Some(v), "FUNCTIONS_CUSTOMHANDLER_PORT", 3000u16)?,
            Err(_) => parse_or(std::env::var("PORT").ok(), "PORT", 3000u16)?,
        };

        let cors_allowed_origins =
            split_origins(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let request_timeout_seconds = parse_or(
            std::env::var("REQUEST_TIMEOUT_SECONDS").ok(),
            "REQUEST_TIMEOUT_SECONDS",
            30u64,
        )?;

        let body_limit_bytes = parse_or(
            std::env::var("REQUEST_BODY_LIMIT_BYTES").ok(),
            "REQUEST_BODY_LIMIT_BYTES",
            1024 * 1024,
        )?;

        Ok(Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            app_env: AppEnv::from_env(),
            cors_allowed_origins,
            request_timeout: Duration::from_secs(request_timeout_seconds),
            body_limit_bytes,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid(key)),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
