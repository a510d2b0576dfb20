//! Service configuration types.
//!
//! `ServiceConfig` represents the optional `workforce.toml` that controls the
//! listen address, definition directories and handler mode.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the catalog service.
///
/// All fields have defaults; an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Root of the skill definition tree.
    #[serde(default = "default_skills_dir")]
    pub skills_dir: PathBuf,

    #[serde(default = "default_industries_dir")]
    pub industries_dir: PathBuf,

    #[serde(default = "default_checks_dir")]
    pub checks_dir: PathBuf,

    /// Serve the original echo handlers instead of shortcode lookup.
    ///
    /// `/skills/{shortcode}` then always returns the full catalog and
    /// `/industries/{shortcode}` and `/checks/{shortcode}` echo the shortcode
    /// as plain text.
    #[serde(default)]
    pub legacy_handlers: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_skills_dir() -> PathBuf {
    PathBuf::from("skills")
}

fn default_industries_dir() -> PathBuf {
    PathBuf::from("industries")
}

fn default_checks_dir() -> PathBuf {
    PathBuf::from("checks")
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            skills_dir: default_skills_dir(),
            industries_dir: default_industries_dir(),
            checks_dir: default_checks_dir(),
            legacy_handlers: false,
        }
    }
}

impl ServiceConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_default_values() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.skills_dir, PathBuf::from("skills"));
        assert!(!config.legacy_handlers);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_service_config_empty_toml_uses_defaults() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_service_config_partial_toml() {
        let config: ServiceConfig = toml::from_str(
            r#"
port = 9090
skills_dir = "/srv/workforce/skills"
legacy_handlers = true
"#,
        )
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.skills_dir, PathBuf::from("/srv/workforce/skills"));
        assert!(config.legacy_handlers);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.checks_dir, PathBuf::from("checks"));
    }
}
