use crate::errors::ConfigError;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mongo_uri: String,
    pub db_name: String,
}

impl Config {
    /// Loads `.env` from the working directory, then reads the process
    /// environment. A missing `.env` file is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv()?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let raw_port = require("PORT")?;
        let port = raw_port
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or(ConfigError::InvalidPort(raw_port))?;

        Ok(Self {
            port,
            mongo_uri: require("MONGO_URI")?,
            db_name: require("DB")?,
        })
    }
}
