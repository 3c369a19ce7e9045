//! The two ensemble identities and how a presented group is resolved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// One of the two ensembles a visitor can pick.
///
/// The lowercase literals `"yashika"` and `"ryuu"` are the canonical wire
/// form: they appear in routes, in the event data file, and in the
/// persisted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    #[default]
    Yashika,
    Ryuu,
}

impl Group {
    /// Canonical lowercase literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Yashika => "yashika",
            Group::Ryuu => "ryuu",
        }
    }

    /// Display name shown in headings.
    pub fn name(&self) -> &'static str {
        match self {
            Group::Yashika => "Yashika",
            Group::Ryuu => "Ryuu",
        }
    }

    /// Both groups, in selection-screen order.
    pub fn both() -> [Group; 2] {
        [Group::Yashika, Group::Ryuu]
    }

    /// Resolve which group to present.
    ///
    /// An explicit value (the route segment, or the `--group` flag) wins,
    /// then the stored navigation state, then the default. Call sites use
    /// this instead of reimplementing the fallback chain.
    pub fn resolve(explicit: Option<Group>, stored: Option<Group>) -> Group {
        explicit.or(stored).unwrap_or_default()
    }
}

impl FromStr for Group {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yashika" => Ok(Group::Yashika),
            "ryuu" => Ok(Group::Ryuu),
            other => Err(SiteError::UnknownGroup(other.to_string())),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- from_str ---

    #[test]
    fn parse_valid_literals() {
        assert_eq!("yashika".parse::<Group>().unwrap(), Group::Yashika);
        assert_eq!("ryuu".parse::<Group>().unwrap(), Group::Ryuu);
    }

    #[test]
    fn parse_rejects_unknown_literals() {
        assert!("blue".parse::<Group>().is_err());
        assert!("Yashika".parse::<Group>().is_err());
        assert!("".parse::<Group>().is_err());
    }

    #[test]
    fn round_trip_through_as_str() {
        for group in Group::both() {
            assert_eq!(group.as_str().parse::<Group>().unwrap(), group);
        }
    }

    // --- resolve ---

    #[test]
    fn resolve_prefers_explicit_value() {
        let group = Group::resolve(Some(Group::Ryuu), Some(Group::Yashika));
        assert_eq!(group, Group::Ryuu);
    }

    #[test]
    fn resolve_falls_back_to_stored_value() {
        let group = Group::resolve(None, Some(Group::Ryuu));
        assert_eq!(group, Group::Ryuu);
    }

    #[test]
    fn resolve_defaults_when_both_absent() {
        assert_eq!(Group::resolve(None, None), Group::Yashika);
    }

    // --- serde ---

    #[test]
    fn serializes_to_lowercase_literal() {
        assert_eq!(serde_json::to_string(&Group::Ryuu).unwrap(), "\"ryuu\"");
    }

    #[test]
    fn deserializes_from_lowercase_literal() {
        let group: Group = serde_json::from_str("\"yashika\"").unwrap();
        assert_eq!(group, Group::Yashika);
    }
}
