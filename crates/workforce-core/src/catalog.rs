//! Immutable in-memory catalog of skills, industries and checks.
//!
//! A [`Catalog`] is built once at startup from the loaded definitions and
//! then only read. Callers share it behind an `Arc`; since nothing mutates it
//! after construction, concurrent readers need no locking and always observe
//! the same snapshot.

use std::collections::HashSet;

use serde::Serialize;

use workforce_types::check::CheckKind;
use workforce_types::error::{CatalogKind, LookupError};
use workforce_types::industry::Industry;
use workforce_types::skill::Skill;

use crate::selector::Selector;

/// Result of resolving a [`Selector`] against one collection.
///
/// Serializes as a JSON array for `All` and as a single object for `One`.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Selection<'a, T> {
    All(&'a [T]),
    One(&'a T),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    skills: Vec<Skill>,
    industries: Vec<Industry>,
    checks: Vec<CheckKind>,
}

impl Catalog {
    /// Build a catalog from loaded definitions, preserving their order.
    ///
    /// Shortcode uniqueness is not enforced; duplicates are logged and the
    /// first entry wins on lookup.
    pub fn new(skills: Vec<Skill>, industries: Vec<Industry>, checks: Vec<CheckKind>) -> Self {
        warn_duplicates(CatalogKind::Skill, skills.iter().map(|s| s.shortcode.as_str()));
        warn_duplicates(
            CatalogKind::Industry,
            industries.iter().map(|i| i.shortcode.as_str()),
        );
        warn_duplicates(CatalogKind::Check, checks.iter().map(|c| c.shortcode()));

        Self {
            skills,
            industries,
            checks,
        }
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn industries(&self) -> &[Industry] {
        &self.industries
    }

    pub fn checks(&self) -> &[CheckKind] {
        &self.checks
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.industries.is_empty() && self.checks.is_empty()
    }

    /// Find a skill by exact shortcode.
    pub fn find_skill(&self, shortcode: &str) -> Result<&Skill, LookupError> {
        self.skills
            .iter()
            .find(|s| s.shortcode == shortcode)
            .ok_or_else(|| not_found(CatalogKind::Skill, shortcode))
    }

    /// Find an industry by exact shortcode.
    pub fn find_industry(&self, shortcode: &str) -> Result<&Industry, LookupError> {
        self.industries
            .iter()
            .find(|i| i.shortcode == shortcode)
            .ok_or_else(|| not_found(CatalogKind::Industry, shortcode))
    }

    /// Find a check by exact shortcode (`photo`, `legal`, ...).
    ///
    /// Only checks present in the catalog are found, not every [`CheckKind`].
    pub fn find_check(&self, shortcode: &str) -> Result<CheckKind, LookupError> {
        self.find_check_ref(shortcode).copied()
    }

    fn find_check_ref(&self, shortcode: &str) -> Result<&CheckKind, LookupError> {
        self.checks
            .iter()
            .find(|c| c.shortcode() == shortcode)
            .ok_or_else(|| not_found(CatalogKind::Check, shortcode))
    }

    pub fn select_skills(&self, selector: &Selector) -> Result<Selection<'_, Skill>, LookupError> {
        match selector {
            Selector::All => Ok(Selection::All(&self.skills)),
            Selector::One(code) => self.find_skill(code).map(Selection::One),
        }
    }

    pub fn select_industries(
        &self,
        selector: &Selector,
    ) -> Result<Selection<'_, Industry>, LookupError> {
        match selector {
            Selector::All => Ok(Selection::All(&self.industries)),
            Selector::One(code) => self.find_industry(code).map(Selection::One),
        }
    }

    pub fn select_checks(
        &self,
        selector: &Selector,
    ) -> Result<Selection<'_, CheckKind>, LookupError> {
        match selector {
            Selector::All => Ok(Selection::All(&self.checks)),
            Selector::One(code) => self.find_check_ref(code).map(Selection::One),
        }
    }
}

fn not_found(kind: CatalogKind, shortcode: &str) -> LookupError {
    LookupError::NotFound {
        kind,
        shortcode: shortcode.to_string(),
    }
}

fn warn_duplicates<'a>(kind: CatalogKind, shortcodes: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for code in shortcodes {
        if !seen.insert(code) {
            tracing::warn!(%kind, shortcode = %code, "Duplicate shortcode, first definition wins");
        }
    }
}
