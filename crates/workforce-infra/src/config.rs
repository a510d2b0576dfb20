//! Service configuration loader.
//!
//! Reads `workforce.toml` and deserializes it into [`ServiceConfig`]. The
//! default config path is optional; a path the operator named explicitly is
//! not.

use std::path::{Path, PathBuf};

use thiserror::Error;
use workforce_types::config::ServiceConfig;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "workforce.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load configuration from `path`.
///
/// - Missing file and `required == false`: returns [`ServiceConfig::default()`].
/// - Missing file and `required == true`: [`ConfigError::Read`].
/// - Unreadable or malformed file: always an error.
pub fn load_config(path: &Path, required: bool) -> Result<ServiceConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return Ok(ServiceConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
