//! Service configuration types for Hospicare.
//!
//! `ServiceConfig` represents the `config.toml` that fixes the listen
//! address at process start. There is no runtime reconfiguration surface.

use serde::{Deserialize, Serialize};

/// Listen configuration for the HTTP server.
///
/// Loaded from `{data_dir}/config.toml`. All fields have defaults so an
/// absent file yields a runnable service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
