//! Parsing of the `{shortcode}` path segment.

/// Wildcard segment selecting the whole collection.
pub const WILDCARD: &str = "*";

/// What a lookup request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// The full collection.
    All,
    /// A single entry by exact shortcode.
    One(String),
}

impl Selector {
    /// Parse a path segment. Empty or `*` selects everything; anything else
    /// is kept byte for byte.
    pub fn parse(segment: &str) -> Self {
        if segment.is_empty() || segment == WILDCARD {
            Self::All
        } else {
            Self::One(segment.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_wildcard_select_all() {
        assert_eq!(Selector::parse(""), Selector::All);
        assert_eq!(Selector::parse("*"), Selector::All);
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(Selector::parse("  "), Selector::One("  ".to_string()));
        assert_eq!(Selector::parse(" elec "), Selector::One(" elec ".to_string()));
        assert_eq!(Selector::parse(" *"), Selector::One(" *".to_string()));
    }

    #[test]
    fn anything_else_selects_one() {
        assert_eq!(Selector::parse("elec"), Selector::One("elec".to_string()));
        assert_eq!(Selector::parse("ELEC"), Selector::One("ELEC".to_string()));
    }
}
