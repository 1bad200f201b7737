use crate::config::Config;
use crate::db::ConnectionManager;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub connections: Arc<ConnectionManager>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            connections: Arc::new(ConnectionManager::from_config(&config)),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state(mongodb_uri: Option<&str>, database: &str) -> AppState {
    AppState::new(Config {
        mongodb_uri: mongodb_uri.map(str::to_string),
        mongodb_database: database.to_string(),
        mongodb_connect_timeout: std::time::Duration::from_millis(300),
        service_port: 3000,
        service_host: "0.0.0.0".to_string(),
    })
}
