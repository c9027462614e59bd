use std::collections::HashMap;
use std::env;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

pub const VARIABLES: [&str; 4] = ["DATABASE_URL", "HOST", "PORT", "DB_POOL_SIZE"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_pool_size: u32,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Only the variables listed in [`VARIABLES`] are looked at, so unrelated
    /// entries that are not valid unicode do not matter.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut vars = HashMap::new();
        for name in VARIABLES {
            match env::var(name) {
                Ok(value) => {
                    vars.insert(name.to_string(), value);
                }
                Err(env::VarError::NotPresent) => {}
                Err(env::VarError::NotUnicode(raw)) => {
                    return Err(ConfigError::Invalid {
                        name,
                        value: raw.to_string_lossy().into_owned(),
                    })
                }
            }
        }
        Self::from_vars(&vars)
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_url = vars
            .get("DATABASE_URL")
            .cloned()
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = vars
            .get("HOST")
            .cloned()
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(vars, "PORT", 8080)?;
        let db_pool_size = parse_or(vars, "DB_POOL_SIZE", 10)?;

        Ok(Config {
            database_url,
            host,
            port,
            db_pool_size,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    vars: &HashMap<String, String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match vars.get(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            name,
            value: value.clone(),
        }),
        None => Ok(default),
    }
}
