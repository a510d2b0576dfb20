//! Application state shared by the CLI commands and the REST handlers.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use workforce_core::catalog::Catalog;
use workforce_infra::loader::load_catalog;
use workforce_types::config::ServiceConfig;

/// Immutable state handed to every request.
///
/// The catalog is fully loaded before the listener binds and is never
/// mutated afterwards, so cloning the `Arc` is all handlers need.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub legacy_handlers: bool,
    pub skills_dir: PathBuf,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &ServiceConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            legacy_handlers: config.legacy_handlers,
            skills_dir: config.skills_dir.clone(),
        }
    }

    /// Load every catalog from disk. Any definition error is fatal.
    pub fn init(config: &ServiceConfig) -> anyhow::Result<Self> {
        let catalog = load_catalog(config).with_context(|| {
            format!(
                "Failed to load catalog from {}",
                config.skills_dir.display()
            )
        })?;

        Ok(Self::new(catalog, config))
    }
}
