//! Upgrade identity and category value objects.
//!
//! Provides type safety for catalog references instead of passing raw
//! strings around the purchase path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Symbolic catalog key for an upgrade (e.g. `protection_racket`).
///
/// Keys are lowercase `snake_case` identifiers; anything else is rejected at
/// the parsing boundary so the catalog never holds malformed keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpgradeId(String);

impl UpgradeId {
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        let valid = !key.is_empty()
            && !key.starts_with('_')
            && !key.ends_with('_')
            && key
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid {
            return Err(DomainError::invalid_argument(format!(
                "upgrade key must be lowercase snake_case: {key:?}"
            )));
        }
        Ok(Self(key))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UpgradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UpgradeId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Catalog categories; every category must be represented in the builtin
/// catalog (variety invariant, enforced at catalog construction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeCategory {
    Economy,
    Defense,
    Logistics,
    Warfare,
    Influence,
    Identity,
}

impl UpgradeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Defense => "defense",
            Self::Logistics => "logistics",
            Self::Warfare => "warfare",
            Self::Influence => "influence",
            Self::Identity => "identity",
        }
    }

    /// Returns all categories the catalog must cover.
    pub fn all() -> [UpgradeCategory; 6] {
        [
            Self::Economy,
            Self::Defense,
            Self::Logistics,
            Self::Warfare,
            Self::Influence,
            Self::Identity,
        ]
    }
}

impl fmt::Display for UpgradeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UpgradeCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "economy" => Ok(Self::Economy),
            "defense" => Ok(Self::Defense),
            "logistics" => Ok(Self::Logistics),
            "warfare" => Ok(Self::Warfare),
            "influence" => Ok(Self::Influence),
            "identity" => Ok(Self::Identity),
            other => Err(DomainError::invalid_argument(format!(
                "unknown upgrade category: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_id_accepts_snake_case() {
        let id = UpgradeId::new("dead_drop_network").expect("valid key");
        assert_eq!(id.as_str(), "dead_drop_network");
    }

    #[test]
    fn test_upgrade_id_rejects_malformed_keys() {
        assert!(UpgradeId::new("").is_err());
        assert!(UpgradeId::new("Dead Drops").is_err());
        assert!(UpgradeId::new("_leading").is_err());
        assert!(UpgradeId::new("trailing_").is_err());
        assert!(UpgradeId::new("kebab-case").is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            UpgradeCategory::from_str("economy"),
            Ok(UpgradeCategory::Economy)
        );
        assert_eq!(
            UpgradeCategory::from_str("WARFARE"),
            Ok(UpgradeCategory::Warfare)
        );
        assert!(UpgradeCategory::from_str("fashion").is_err());
    }

    #[test]
    fn test_category_serde_snake_case() {
        let json = serde_json::to_string(&UpgradeCategory::Identity).expect("serialize");
        assert_eq!(json, "\"identity\"");
    }
}
