//! Skill domain types.
//!
//! A skill is one occupational capability (e.g. "Electrician") identified by
//! a short, URL-safe shortcode. Skills are loaded from definition files at
//! startup and never change afterwards.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseKindError;
use crate::repr::KindRepr;

// ---------------------------------------------------------------------------
// RoleKind
// ---------------------------------------------------------------------------

/// How specific an occupational role is.
///
/// - `Group`: an occupational group, non-specific.
/// - `Generic`: a generic occupational role.
/// - `Specific`: a very specific occupational role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "KindRepr")]
pub enum RoleKind {
    Group,
    Generic,
    Specific,
}

impl RoleKind {
    /// Every role, in code order.
    pub const ALL: [RoleKind; 3] = [Self::Group, Self::Generic, Self::Specific];

    /// Numeric code used by older definition files (1-based).
    pub fn code(self) -> u8 {
        match self {
            Self::Group => 1,
            Self::Generic => 2,
            Self::Specific => 3,
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|r| u64::from(r.code()) == code)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Generic => "generic",
            Self::Specific => "specific",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKindError::UnknownName {
                kind: "role",
                value: s.to_string(),
            })
    }
}

impl TryFrom<KindRepr> for RoleKind {
    type Error = ParseKindError;

    fn try_from(repr: KindRepr) -> Result<Self, Self::Error> {
        match repr {
            KindRepr::Code(code) => {
                Self::from_code(code).ok_or(ParseKindError::UnknownCode { kind: "role", code })
            }
            KindRepr::Name(name) => name.parse(),
        }
    }
}

// ---------------------------------------------------------------------------
// Skill
// ---------------------------------------------------------------------------

/// A single skill definition.
///
/// Identity is the `shortcode`: two skills with the same shortcode compare
/// equal, hash the same and sort together regardless of `name` or `role`.
/// This keeps skills usable as map keys (see [`crate::industry::Industry`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub shortcode: String,
    pub role: RoleKind,
}

impl Skill {
    pub fn new(name: impl Into<String>, shortcode: impl Into<String>, role: RoleKind) -> Self {
        Self {
            name: name.into(),
            shortcode: shortcode.into(),
            role,
        }
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.shortcode == other.shortcode
    }
}

impl Eq for Skill {}

impl Hash for Skill {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shortcode.hash(state);
    }
}

impl PartialOrd for Skill {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Skill {
    fn cmp(&self, other: &Self) -> Ordering {
        self.shortcode.cmp(&other.shortcode)
    }
}

// Consistent with Eq/Ord/Hash above, so maps keyed by Skill can be queried
// with a bare shortcode.
impl Borrow<str> for Skill {
    fn borrow(&self) -> &str {
        &self.shortcode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn role_display_is_distinct_per_value() {
        let rendered: HashSet<String> = RoleKind::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(rendered.len(), 3);
        assert_eq!(RoleKind::Specific.to_string(), "specific");
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Group".parse::<RoleKind>().unwrap(), RoleKind::Group);
        assert_eq!(" GENERIC ".parse::<RoleKind>().unwrap(), RoleKind::Generic);
        assert!("manager".parse::<RoleKind>().is_err());
    }

    #[test]
    fn skill_deserializes_from_yaml_with_role_name() {
        let yaml = "name: Electrician\nshortcode: elec\nrole: specific\n";
        let skill: Skill = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(skill.name, "Electrician");
        assert_eq!(skill.shortcode, "elec");
        assert_eq!(skill.role, RoleKind::Specific);
    }

    #[test]
    fn skill_deserializes_from_yaml_with_role_code() {
        let yaml = "name: Trades\nshortcode: trades\nrole: 1\n";
        let skill: Skill = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(skill.role, RoleKind::Group);
    }

    #[test]
    fn skill_rejects_out_of_range_role_code() {
        let yaml = "name: Trades\nshortcode: trades\nrole: 0\n";
        assert!(serde_yaml_ng::from_str::<Skill>(yaml).is_err());
    }

    #[test]
    fn skill_requires_shortcode() {
        let yaml = "name: Electrician\nrole: specific\n";
        assert!(serde_yaml_ng::from_str::<Skill>(yaml).is_err());
    }

    #[test]
    fn skill_serializes_role_as_name() {
        let skill = Skill::new("Plumber", "plumb", RoleKind::Generic);
        let json = serde_json::to_value(&skill).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Plumber", "shortcode": "plumb", "role": "generic"})
        );
    }

    #[test]
    fn skill_identity_is_shortcode() {
        let a = Skill::new("Electrician", "elec", RoleKind::Specific);
        let b = Skill::new("Electrical work", "elec", RoleKind::Group);
        assert_eq!(a, b);

        let set: HashSet<Skill> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains("elec"));
    }
}
