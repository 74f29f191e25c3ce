use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5555";

pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first so values from `.env` are visible here.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "LISTEN_ADDR".to_string(),
                value: listen_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            listen_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.listen_addr, "127.0.0.1:5555".parse().unwrap());
    }

    #[test]
    fn reads_supplied_values() {
        let config = Config::from_lookup(|name| match name {
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            "LISTEN_ADDR" => Some("0.0.0.0:8080".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.listen_addr.port(), 8080);
    }

    #[test]
    fn rejects_unparsable_listen_addr() {
        let result = Config::from_lookup(|name| {
            (name == "LISTEN_ADDR").then(|| "not-an-address".to_string())
        });

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "LISTEN_ADDR"
        ));
    }
}
