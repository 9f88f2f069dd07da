use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use tasklist_config as vars;
use tasklist_core::{default_database_path, DEFAULT_HOST, DEFAULT_PORT};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub database_path: PathBuf,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var(vars::PORT) {
            Ok(port_str) => parse_port(&port_str)?,
            Err(_) => DEFAULT_PORT,
        };

        let host = env::var(vars::HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let database_path = env::var(vars::DATABASE_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_database_path());

        let cors_origin = env::var(vars::CORS_ORIGIN).unwrap_or_else(|_| "*".to_string());

        Ok(Config {
            port,
            host,
            database_path,
            cors_origin,
        })
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(
        mut self,
        port: Option<u16>,
        database: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(port) = port {
            if port == 0 {
                return Err(ConfigError::PortOutOfRange(port));
            }
            self.port = port;
        }
        if let Some(database) = database {
            self.database_path = database;
        }
        Ok(self)
    }
}

fn parse_port(port_str: &str) -> Result<u16, ConfigError> {
    let port = port_str.trim().parse::<u16>()?;

    // Validate port is in valid range
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }

    Ok(port)
}
