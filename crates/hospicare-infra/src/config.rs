//! Service configuration loader for Hospicare.
//!
//! Reads `config.toml` from the data directory (`~/.hospicare/` in
//! production) and deserializes it into [`ServiceConfig`]. Falls back to
//! defaults when the file is missing or malformed -- the service must come
//! up without any configuration on disk.

use std::path::{Path, PathBuf};

use hospicare_types::config::ServiceConfig;

/// Resolve the data directory: `HOSPICARE_DATA_DIR` env var, falling back
/// to `~/.hospicare`.
pub fn resolve_data_dir() -> PathBuf {
    match std::env::var("HOSPICARE_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hospicare")
        }
    }
}

/// Load service configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_service_config(data_dir: &Path) -> ServiceConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServiceConfig::default()
        }
    }
}
