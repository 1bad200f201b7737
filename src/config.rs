use std::env;
use std::time::Duration;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: Option<String>,
    pub mongodb_database: String,
    pub mongodb_connect_timeout: Duration,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // A missing URI is reported per request, not at startup
        let mongodb_uri = env::var("MONGODB_URI")
            .ok()
            .filter(|uri| !uri.trim().is_empty());

        let mongodb_database = env::var("MONGODB_DATABASE")
            .unwrap_or_else(|_| "test_db".to_string());

        let connect_timeout_ms = env::var("MONGODB_CONNECT_TIMEOUT_MS")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u64>()
            .context("MONGODB_CONNECT_TIMEOUT_MS must be a number of milliseconds")?;

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            mongodb_uri,
            mongodb_database,
            mongodb_connect_timeout: Duration::from_millis(connect_timeout_ms),
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        if self.mongodb_uri.is_some() {
            tracing::info!("  MongoDB URI: configured");
        } else {
            tracing::warn!("  MongoDB URI: not set (MONGODB_URI), database endpoints will fail");
        }
        tracing::info!("  MongoDB database: {}", self.mongodb_database);
        tracing::info!("  MongoDB connect timeout: {}ms", self.mongodb_connect_timeout.as_millis());
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
