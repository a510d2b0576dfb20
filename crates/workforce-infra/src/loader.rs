//! Directory-based definition loading.
//!
//! Each regular file under the skills root holds one YAML skill definition:
//!
//! ```text
//! skills/
//!   trades/
//!     electrician.yaml   # name, shortcode, role
//!     plumber.yaml
//!   driver.yaml
//! ```
//!
//! Walking is lenient (unreadable entries are logged and skipped) while
//! reading and parsing are strict: the first bad file aborts the whole load,
//! so the service never starts with a partial catalog.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use workforce_core::catalog::Catalog;
use workforce_types::check::CheckKind;
use workforce_types::config::ServiceConfig;
use workforce_types::error::LoadError;
use workforce_types::industry::Industry;
use workforce_types::skill::Skill;

/// List every regular file under `root`, in file-name order.
///
/// Symlinks are followed. Walk errors (missing root, permission denied,
/// symlink loops) are logged and the offending entry is skipped.
pub fn collect_definition_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(
                    root = %root.display(),
                    error = %err,
                    "Skipping inaccessible entry while walking definitions"
                );
                continue;
            }
        };

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    files
}

/// Load every skill definition under `root`.
///
/// The result has one skill per file returned by [`collect_definition_files`],
/// in the same order.
pub fn load_skills(root: &Path) -> Result<Vec<Skill>, LoadError> {
    let files = collect_definition_files(root);
    let mut skills = Vec::with_capacity(files.len());

    for path in files {
        tracing::info!(path = %path.display(), "Importing skill definition");
        skills.push(read_definition(&path)?);
    }

    Ok(skills)
}

/// Load industry definitions.
///
/// Not populated yet: always returns an empty list.
pub fn load_industries(root: &Path) -> Result<Vec<Industry>, LoadError> {
    tracing::debug!(root = %root.display(), "Industry loading not implemented, catalog left empty");
    Ok(Vec::new())
}

/// Load check definitions.
///
/// Not populated yet: always returns an empty list.
pub fn load_checks(root: &Path) -> Result<Vec<CheckKind>, LoadError> {
    tracing::debug!(root = %root.display(), "Check loading not implemented, catalog left empty");
    Ok(Vec::new())
}

/// Run all loaders for `config` and assemble the catalog.
pub fn load_catalog(config: &ServiceConfig) -> Result<Catalog, LoadError> {
    let skills = load_skills(&config.skills_dir)?;
    let industries = load_industries(&config.industries_dir)?;
    let checks = load_checks(&config.checks_dir)?;

    tracing::info!(
        skills = skills.len(),
        industries = industries.len(),
        checks = checks.len(),
        "Catalog loaded"
    );

    let catalog = Catalog::new(skills, industries, checks);
    if catalog.is_empty() {
        tracing::warn!(
            skills_dir = %config.skills_dir.display(),
            "No definitions found, serving an empty catalog"
        );
    }

    Ok(catalog)
}

fn read_definition<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml_ng::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use workforce_types::skill::RoleKind;

    fn write_skill(dir: &Path, rel: &str, name: &str, shortcode: &str, role: &str) {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            path,
            format!("name: {name}\nshortcode: {shortcode}\nrole: {role}\n"),
        )
        .unwrap();
    }

    fn fixture_tree() -> TempDir {
        let tmp = TempDir::new().unwrap();
        write_skill(tmp.path(), "driver.yaml", "Driver", "drive", "generic");
        write_skill(tmp.path(), "trades/plumber.yaml", "Plumber", "plumb", "specific");
        write_skill(tmp.path(), "trades/electrician.yaml", "Electrician", "elec", "3");
        std::fs::create_dir_all(tmp.path().join("empty")).unwrap();
        tmp
    }

    #[test]
    fn collects_only_regular_files() {
        let tmp = fixture_tree();
        let files = collect_definition_files(tmp.path());
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.is_file()));
    }

    #[test]
    fn load_skills_one_per_file_in_walk_order() {
        let tmp = fixture_tree();
        let skills = load_skills(tmp.path()).unwrap();

        let codes: Vec<_> = skills.iter().map(|s| s.shortcode.as_str()).collect();
        assert_eq!(codes, vec!["drive", "elec", "plumb"]);
        assert_eq!(skills[1].role, RoleKind::Specific);
    }

    #[test]
    fn load_skills_is_deterministic() {
        let tmp = fixture_tree();
        let first = load_skills(tmp.path()).unwrap();
        let second = load_skills(tmp.path()).unwrap();

        let names = |skills: &[Skill]| -> Vec<(String, String, RoleKind)> {
            skills
                .iter()
                .map(|s| (s.name.clone(), s.shortcode.clone(), s.role))
                .collect()
        };
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn missing_root_yields_empty_catalog() {
        let tmp = TempDir::new().unwrap();
        let skills = load_skills(&tmp.path().join("does-not-exist")).unwrap();
        assert!(skills.is_empty());
    }

    #[test]
    fn malformed_yaml_is_fatal() {
        let tmp = fixture_tree();
        let bad = tmp.path().join("trades/broken.yaml");
        std::fs::write(&bad, "name: [unterminated\n").unwrap();

        let err = load_skills(tmp.path()).unwrap_err();
        assert!(matches!(&err, LoadError::Parse { path, .. } if path == &bad));
    }

    #[test]
    fn missing_required_field_is_fatal() {
        let tmp = fixture_tree();
        std::fs::write(tmp.path().join("nameless.yaml"), "shortcode: x\nrole: group\n").unwrap();

        let err = load_skills(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("nameless.yaml"));
    }

    #[test]
    fn placeholder_loaders_return_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(load_industries(tmp.path()).unwrap().is_empty());
        assert!(load_checks(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn load_catalog_uses_configured_dirs() {
        let tmp = fixture_tree();
        let config = ServiceConfig {
            skills_dir: tmp.path().to_path_buf(),
            ..ServiceConfig::default()
        };

        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.skills().len(), 3);
        assert!(catalog.industries().is_empty());
        assert!(catalog.checks().is_empty());
        assert_eq!(catalog.find_skill("plumb").unwrap().name, "Plumber");
    }

    #[test]
    fn load_catalog_missing_dirs_is_empty_not_error() {
        let tmp = TempDir::new().unwrap();
        let config = ServiceConfig {
            skills_dir: tmp.path().join("skills"),
            ..ServiceConfig::default()
        };

        let catalog = load_catalog(&config).unwrap();
        assert!(catalog.is_empty());
    }
}
