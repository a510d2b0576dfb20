//! Industry domain types.
//!
//! An industry lists the skills it requires and, for each one, the check
//! used to verify it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::check::CheckKind;
use crate::skill::Skill;

/// An industry and its required skills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Industry {
    pub name: String,
    pub shortcode: String,
    /// Verification check per required skill, keyed by skill shortcode.
    #[serde(default, with = "tasks")]
    pub tasks: BTreeMap<Skill, CheckKind>,
}

impl Industry {
    pub fn new(name: impl Into<String>, shortcode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shortcode: shortcode.into(),
            tasks: BTreeMap::new(),
        }
    }

    /// Add a task, replacing the check of an existing task for the same skill.
    pub fn with_task(mut self, skill: Skill, check: CheckKind) -> Self {
        self.tasks.insert(skill, check);
        self
    }

    /// The check required for the skill with the given shortcode.
    pub fn check_for(&self, skill_shortcode: &str) -> Option<CheckKind> {
        self.tasks.get(skill_shortcode).copied()
    }
}

/// One `skill -> check` pair in its wire form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub skill: Skill,
    pub check: CheckKind,
}

/// Serde adapter for `tasks`.
///
/// JSON object keys must be strings, so the mapping travels as a sequence of
/// [`Task`] entries. Decoding rejects a second entry for the same skill.
mod tasks {
    use std::collections::BTreeMap;

    use serde::de::Error as _;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Task;
    use crate::check::CheckKind;
    use crate::skill::Skill;

    pub fn serialize<S>(tasks: &BTreeMap<Skill, CheckKind>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(tasks.len()))?;
        for (skill, check) in tasks {
            seq.serialize_element(&Task {
                skill: skill.clone(),
                check: *check,
            })?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<Skill, CheckKind>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Task>::deserialize(deserializer)?;
        let mut tasks = BTreeMap::new();
        for Task { skill, check } in entries {
            if tasks.contains_key(skill.shortcode.as_str()) {
                return Err(D::Error::custom(format!(
                    "duplicate task for skill '{}'",
                    skill.shortcode
                )));
            }
            tasks.insert(skill, check);
        }
        Ok(tasks)
    }
}
