//! Server configuration, read from the environment after `.env` is loaded.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const HOST_VAR: &str = "CLINIC_HOST";
pub const PORT_VAR: &str = "CLINIC_PORT";
pub const DOCTORS_FILE_VAR: &str = "CLINIC_DOCTORS_FILE";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// CSV seed for the doctor directory; the built-in doctors are used when unset.
    pub doctors_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            doctors_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                var: PORT_VAR,
                value: port,
            })?;
        }

        config.doctors_file = lookup(DOCTORS_FILE_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}
