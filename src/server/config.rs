use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
/// Top of every hour.
const DEFAULT_SWEEP_SCHEDULE: &str = "0 0 * * * *";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub bind_address: SocketAddr,

    /// Cron expression (with seconds) for the expiry sweep.
    pub sweep_schedule: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = optional_var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS);
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            jwt_secret: required_var("JWT_SECRET")?,
            bind_address,
            sweep_schedule: optional_var("SWEEP_SCHEDULE", DEFAULT_SWEEP_SCHEDULE),
            cors_origins: optional_var("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
