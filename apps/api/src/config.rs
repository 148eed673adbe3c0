use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_MONGODB_DATABASE: &str = "contacts";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Which repository backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Mongo,
    Memory,
}

/// Runtime configuration, read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub host: IpAddr,
    pub port: u16,
    pub store: StoreKind,
}

impl Config {
    /// Reads configuration from process environment variables
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongodb_uri = lookup("MONGODB_URI").unwrap_or_else(|| {
            tracing::warn!("MONGODB_URI not set, using default");
            DEFAULT_MONGODB_URI.to_string()
        });

        let mongodb_database =
            lookup("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_MONGODB_DATABASE.to_string());

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host.parse().map_err(|_| ConfigError::InvalidValue {
            key: "HOST",
            value: host.clone(),
        })?;

        let port: u16 = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: value.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let store = match lookup("CONTACTS_STORE").as_deref() {
            None | Some("mongo") => StoreKind::Mongo,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "CONTACTS_STORE",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            mongodb_uri,
            mongodb_database,
            host,
            port,
            store,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.mongodb_database, "contacts");
        assert_eq!(config.store, StoreKind::Mongo);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("MONGODB_URI", "mongodb://db:27017"),
            ("MONGODB_DATABASE", "crm"),
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("CONTACTS_STORE", "memory"),
        ]))
        .unwrap();

        assert_eq!(config.mongodb_uri, "mongodb://db:27017");
        assert_eq!(config.mongodb_database, "crm");
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.listen_addr(), "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "eighty")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "PORT", .. })
        ));
    }

    #[test]
    fn test_unknown_store_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("CONTACTS_STORE", "postgres")]));

        assert!(result.is_err());
    }
}
