//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "METRO_BIND_ADDR";

/// Environment variable holding the preference file path.
pub const PREFS_PATH_VAR: &str = "METRO_PREFS_PATH";

/// Errors reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("{var} is empty")]
    Empty { var: &'static str },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// JSON file holding favourites, recent searches and settings.
    pub prefs_path: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the process environment, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr =
                value
                    .trim()
                    .parse()
                    .map_err(|source| ConfigError::InvalidBindAddr {
                        var: BIND_ADDR_VAR,
                        value: value.clone(),
                        source,
                    })?;
        }

        if let Some(value) = lookup(PREFS_PATH_VAR) {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty {
                    var: PREFS_PATH_VAR,
                });
            }
            config.prefs_path = PathBuf::from(value);
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            prefs_path: PathBuf::from("metro_prefs.json"),
        }
    }
}
