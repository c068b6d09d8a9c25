//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the storage slot files
    pub data_dir: PathBuf,
    /// Address to bind the API server to
    pub host: String,
    /// Server port
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            data_dir: env::var("POLYPULSE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
        })
    }

    /// Config for tests; nothing is read from the environment.
    pub fn test_default() -> Self {
        Self {
            data_dir: PathBuf::from("test-data"),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
        }
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-wide, so every case lives in one test.
    #[test]
    fn test_config_from_env() {
        env::set_var("POLYPULSE_DATA_DIR", "/tmp/polypulse-test");
        env::set_var("PORT", "9090");
        env::remove_var("HOST");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.data_dir, PathBuf::from("/tmp/polypulse-test"));
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.bind_address(), "127.0.0.1:9090");

        env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));

        env::remove_var("PORT");
        env::remove_var("POLYPULSE_DATA_DIR");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }
}
