//! CLI command definitions for the `workforce` binary.
//!
//! Running `workforce` without a subcommand is the same as `workforce serve`.

pub mod catalog;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use workforce_types::config::ServiceConfig;

/// Serve the workforce skill, industry and check catalogs.
#[derive(Parser, Debug)]
#[command(name = "workforce", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file. Defaults to `workforce.toml` in the working directory.
    #[arg(short, long, global = true, env = "WORKFORCE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log filter directive derived from `--quiet` / `--json` / `-v`.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet || self.json => "error",
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the catalog and start the HTTP server.
    Serve(ServeArgs),

    /// Load the catalog and report what was found, without serving.
    Validate(CatalogArgs),

    /// Print the loaded skill catalog.
    #[command(alias = "ls")]
    List(CatalogArgs),
}

/// Where to load definitions from.
#[derive(Args, Debug, Default, Clone)]
pub struct CatalogArgs {
    /// Root of the skill definition tree.
    #[arg(long, env = "WORKFORCE_SKILLS_DIR")]
    pub skills_dir: Option<PathBuf>,
}

impl CatalogArgs {
    pub fn apply(&self, config: &mut ServiceConfig) {
        if let Some(dir) = &self.skills_dir {
            config.skills_dir = dir.clone();
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Host to bind to.
    #[arg(long, env = "WORKFORCE_HOST")]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, env = "WORKFORCE_PORT")]
    pub port: Option<u16>,

    /// Serve the original echo handlers instead of shortcode lookup.
    #[arg(long)]
    pub legacy_handlers: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl ServeArgs {
    /// Layer command-line overrides on top of the file configuration.
    pub fn apply(&self, config: &mut ServiceConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.legacy_handlers {
            config.legacy_handlers = true;
        }
        self.catalog.apply(config);
    }
}
