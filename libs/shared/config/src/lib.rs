use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017";
pub const DEFAULT_DATABASE_NAME: &str = "appoint";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub database_name: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| {
                    warn!("MONGODB_URI not set, using {}", DEFAULT_MONGODB_URI);
                    defaults.mongodb_uri.clone()
                }),
            database_name: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| {
                    warn!("MONGODB_DATABASE not set, using {}", DEFAULT_DATABASE_NAME);
                    defaults.database_name.clone()
                }),
            host: match env::var("HOST") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("HOST={} is not an IP address, using {}", raw, defaults.host);
                    defaults.host
                }),
                Err(_) => defaults.host,
            },
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("PORT={} is not a valid port, using {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }),
                Err(_) => DEFAULT_PORT,
            },
        };

        if !config.is_configured() {
            warn!("Application not fully configured - database settings are empty");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.mongodb_uri.is_empty() && !self.database_name.is_empty()
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_mongodb() {
        let config = AppConfig::default();
        assert!(config.is_configured());
        assert_eq!(config.database_name, "appoint");
        assert_eq!(config.bind_address().port(), 5000);
    }

    #[test]
    fn empty_database_name_is_not_configured() {
        let config = AppConfig {
            database_name: String::new(),
            ..AppConfig::default()
        };
        assert!(!config.is_configured());
    }
}
