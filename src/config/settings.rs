//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_MONGO_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub mongo_url: String,
    /// Explicit database name; falls back to the one embedded in `mongo_url`
    pub mongo_database: Option<String>,
    pub server_host: String,
    pub server_port: u16,
}

// The URL may embed credentials
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("mongo_url", &"[REDACTED]")
            .field("mongo_database", &self.mongo_database)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongo_url: DEFAULT_MONGO_URL.to_string(),
            mongo_database: None,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            mongo_url: env::var("MONGO_URL").unwrap_or_else(|_| DEFAULT_MONGO_URL.to_string()),
            mongo_database: env::var("MONGO_DATABASE").ok().filter(|name| !name.is_empty()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mongo_url, DEFAULT_MONGO_URL);
        assert!(config.mongo_database.is_none());
        assert_eq!(config.server_addr(), "0.0.0.0:5050");
    }

    #[test]
    fn test_debug_redacts_mongo_url() {
        let config = Config {
            mongo_url: "mongodb://admin:hunter2@db:27017/app".to_string(),
            ..Config::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
