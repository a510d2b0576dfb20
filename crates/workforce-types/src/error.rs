use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which catalog collection an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Skill,
    Industry,
    Check,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skill => write!(f, "skill"),
            Self::Industry => write!(f, "industry"),
            Self::Check => write!(f, "check"),
        }
    }
}

/// Errors raised while loading definition files at startup.
///
/// Every variant is fatal: the catalog is loaded all-or-nothing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read definition {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse definition {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Errors from catalog lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("{kind} '{shortcode}' not found")]
    NotFound { kind: CatalogKind, shortcode: String },
}

/// Errors parsing an enumerated kind from its name or numeric code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseKindError {
    #[error("unknown {kind} '{value}'")]
    UnknownName { kind: &'static str, value: String },

    #[error("unknown {kind} code {code}")]
    UnknownCode { kind: &'static str, code: u64 },
}
