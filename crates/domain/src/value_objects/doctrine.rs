//! Doctrine identity and effect descriptor value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The three mutually exclusive specialization paths a gang can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoctrineId {
    Ledger,
    Ironwall,
    Nightfall,
}

impl DoctrineId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ledger => "ledger",
            Self::Ironwall => "ironwall",
            Self::Nightfall => "nightfall",
        }
    }

    /// Returns all registered doctrine paths.
    pub fn all() -> [DoctrineId; 3] {
        [Self::Ledger, Self::Ironwall, Self::Nightfall]
    }
}

impl fmt::Display for DoctrineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DoctrineId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ledger" => Ok(Self::Ledger),
            "ironwall" => Ok(Self::Ironwall),
            "nightfall" => Ok(Self::Nightfall),
            other => Err(DomainError::unknown_doctrine(other)),
        }
    }
}

/// Opaque effect descriptor attached to a doctrine.
///
/// The weights are consumed by the gameplay-effect collaborator; this core
/// only carries them. A weight of 1.0 is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoctrineBonuses {
    pub income_weight: f64,
    pub defense_weight: f64,
    pub stealth_weight: f64,
}

impl DoctrineBonuses {
    pub const NEUTRAL: DoctrineBonuses = DoctrineBonuses {
        income_weight: 1.0,
        defense_weight: 1.0,
        stealth_weight: 1.0,
    };
}

impl Default for DoctrineBonuses {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctrine_from_str() {
        assert_eq!(DoctrineId::from_str("ledger"), Ok(DoctrineId::Ledger));
        assert_eq!(DoctrineId::from_str("IRONWALL"), Ok(DoctrineId::Ironwall));
        assert_eq!(DoctrineId::from_str("nightfall"), Ok(DoctrineId::Nightfall));
        assert_eq!(
            DoctrineId::from_str("warpath"),
            Err(DomainError::unknown_doctrine("warpath"))
        );
    }

    #[test]
    fn test_doctrine_serde_snake_case() {
        let json = serde_json::to_string(&DoctrineId::Nightfall).expect("serialize");
        assert_eq!(json, "\"nightfall\"");
        let parsed: DoctrineId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, DoctrineId::Nightfall);
    }

    #[test]
    fn test_neutral_bonuses() {
        let b = DoctrineBonuses::default();
        assert_eq!(b, DoctrineBonuses::NEUTRAL);
        assert_eq!(b.income_weight, 1.0);
    }
}
