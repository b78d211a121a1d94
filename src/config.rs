use std::env;

use epias_client::{Credentials, DEFAULT_API_URL, DEFAULT_AUTH_URL};
use thiserror::Error;

use crate::domain::solver_factory::SolverType;

pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_JSON_LIMIT: usize = 2 * 1024 * 1024; // 2 MB

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("unknown solver '{given}', available: {available}")]
    UnknownSolver { given: String, available: String },
}

/// Market-data settings; present only when credentials are configured.
#[derive(Debug, Clone)]
pub struct EpiasConfig {
    pub credentials: Credentials,
    pub auth_url: String,
    pub api_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub json_limit: usize,
    pub solver: SolverType,
    pub epias: Option<EpiasConfig>,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    /// Read settings from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`; unparsable numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = non_empty("PORT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let json_limit = non_empty("JSON_PAYLOAD_LIMIT")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_JSON_LIMIT);

        let solver = match non_empty("SOLVER") {
            None => SolverType::default(),
            Some(name) => SolverType::from_str(&name).ok_or_else(|| ConfigError::UnknownSolver {
                given: name.clone(),
                available: SolverType::available().join(", "),
            })?,
        };

        let epias = match (non_empty("EPIAS_USERNAME"), non_empty("EPIAS_PASSWORD")) {
            (Some(username), Some(password)) => Some(EpiasConfig {
                credentials: Credentials::new(username, password),
                auth_url: non_empty("EPIAS_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
                api_url: non_empty("EPIAS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            port,
            json_limit,
            solver,
            epias,
            sentry_dsn: non_empty("SENTRY_DSN"),
        })
    }
}
