//! HTTP server configuration.
//!
//! Settings come from an optional TOML file, then `HOST` / `PORT` environment
//! variables override whatever the file says. With no file and no variables the
//! server listens on `0.0.0.0:8080`.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "RECEIPT_PROCESSOR_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Listener and middleware settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
    /// Attach a permissive CORS layer
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: false,
        }
    }
}

impl ServerConfig {
    /// The address the listener binds to.
    ///
    /// # Errors
    /// Returns [`Error::Address`] if `host:port` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    /// Applies `HOST` / `PORT` style overrides on top of the file settings.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if `port` is not a valid port number.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> Result<Self> {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port.trim().parse().map_err(|e| Error::Config {
                message: format!("Invalid PORT value {port:?}: {e}"),
            })?;
        }
        Ok(self)
    }
}

/// Loads server configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`ServerConfig`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServerConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Resolves the effective configuration from the environment.
///
/// Looks for the file named by `RECEIPT_PROCESSOR_CONFIG`, then `./config.toml`,
/// then falls back to defaults; `HOST` and `PORT` are applied last.
///
/// # Errors
/// Returns an error if an explicitly named file is missing or any source holds an
/// invalid value.
pub fn load_server_config() -> Result<ServerConfig> {
    let config = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_config(PathBuf::from(path))?,
        Err(std::env::VarError::NotPresent) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            load_config(DEFAULT_CONFIG_FILE)?
        }
        Err(std::env::VarError::NotPresent) => {
            tracing::info!("No config file found, using default server settings.");
            ServerConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    config.with_overrides(std::env::var("HOST").ok(), std::env::var("PORT").ok())
}
