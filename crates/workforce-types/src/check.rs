//! Verification check kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseKindError;
use crate::repr::KindRepr;

/// A method used to verify that a worker actually has a skill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "KindRepr")]
pub enum CheckKind {
    Api,
    Photo,
    Video,
    Location,
    Reviews,
    Legal,
}

impl CheckKind {
    /// Every check, in code order.
    pub const ALL: [CheckKind; 6] = [
        Self::Api,
        Self::Photo,
        Self::Video,
        Self::Location,
        Self::Reviews,
        Self::Legal,
    ];

    /// Numeric code (1-based).
    pub fn code(self) -> u8 {
        match self {
            Self::Api => 1,
            Self::Photo => 2,
            Self::Video => 3,
            Self::Location => 4,
            Self::Reviews => 5,
            Self::Legal => 6,
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| u64::from(c.code()) == code)
    }

    /// Lookup key used in URLs and on the wire.
    pub fn shortcode(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Location => "location",
            Self::Reviews => "reviews",
            Self::Legal => "legal",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Api => "API",
            Self::Photo => "Photo",
            Self::Video => "Video",
            Self::Location => "Location",
            Self::Reviews => "Reviews",
            Self::Legal => "Legal",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CheckKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.shortcode().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKindError::UnknownName {
                kind: "check",
                value: s.to_string(),
            })
    }
}

impl TryFrom<KindRepr> for CheckKind {
    type Error = ParseKindError;

    fn try_from(repr: KindRepr) -> Result<Self, Self::Error> {
        match repr {
            KindRepr::Code(code) => {
                Self::from_code(code).ok_or(ParseKindError::UnknownCode { kind: "check", code })
            }
            KindRepr::Name(name) => name.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_for_every_kind() {
        for kind in CheckKind::ALL {
            assert_eq!(CheckKind::from_code(u64::from(kind.code())), Some(kind));
        }
        assert_eq!(CheckKind::from_code(0), None);
        assert_eq!(CheckKind::from_code(7), None);
    }

    #[test]
    fn display_uses_per_value_names() {
        assert_eq!(CheckKind::Api.to_string(), "API");
        assert_eq!(CheckKind::Legal.to_string(), "Legal");
    }

    #[test]
    fn parses_shortcode_case_insensitively() {
        assert_eq!("PHOTO".parse::<CheckKind>().unwrap(), CheckKind::Photo);
        assert_eq!("api".parse::<CheckKind>().unwrap(), CheckKind::Api);
        let err = "fingerprint".parse::<CheckKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown check 'fingerprint'");
    }

    #[test]
    fn serializes_as_shortcode() {
        assert_eq!(
            serde_json::to_string(&CheckKind::Reviews).unwrap(),
            "\"reviews\""
        );
    }

    #[test]
    fn deserializes_from_code_or_name() {
        let by_code: CheckKind = serde_yaml_ng::from_str("4").unwrap();
        assert_eq!(by_code, CheckKind::Location);
        let by_name: CheckKind = serde_yaml_ng::from_str("video").unwrap();
        assert_eq!(by_name, CheckKind::Video);
    }
}
