//! Progression domain events.
//!
//! Emitted by the facade after a committed mutation; consumed by the
//! gameplay-effect collaborator (recomputing bonuses) and by audit logging.

use serde::{Deserialize, Serialize};

use crate::ids::GangId;
use crate::value_objects::{DoctrineId, UpgradeId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProgressionEvent {
    XpGranted {
        gang_id: GangId,
        amount: u64,
        total_xp: u64,
        level_before: u32,
        level_after: u32,
    },
    XpReset {
        gang_id: GangId,
    },
    UpgradePurchased {
        gang_id: GangId,
        upgrade_id: UpgradeId,
        cost: u64,
    },
    DoctrineSelected {
        gang_id: GangId,
        doctrine_id: DoctrineId,
    },
    PremiumCreditsDebited {
        gang_id: GangId,
        amount: u64,
        balance: u64,
    },
    PremiumCreditsGranted {
        gang_id: GangId,
        amount: u64,
        balance: u64,
    },
}

impl ProgressionEvent {
    pub fn gang_id(&self) -> GangId {
        match self {
            Self::XpGranted { gang_id, .. }
            | Self::XpReset { gang_id }
            | Self::UpgradePurchased { gang_id, .. }
            | Self::DoctrineSelected { gang_id, .. }
            | Self::PremiumCreditsDebited { gang_id, .. }
            | Self::PremiumCreditsGranted { gang_id, .. } => *gang_id,
        }
    }

    /// Whether the event can change the level readout (for collaborators
    /// that only care about level-ups).
    pub fn affects_level(&self) -> bool {
        matches!(self, Self::XpGranted { .. } | Self::XpReset { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_tagging() {
        let event = ProgressionEvent::DoctrineSelected {
            gang_id: GangId::new(),
            doctrine_id: DoctrineId::Ironwall,
        };
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["event"], "doctrine_selected");
        assert_eq!(json["doctrine_id"], "ironwall");
    }

    #[test]
    fn test_affects_level() {
        let gang_id = GangId::new();
        assert!(ProgressionEvent::XpReset { gang_id }.affects_level());
        assert!(!ProgressionEvent::PremiumCreditsGranted {
            gang_id,
            amount: 1,
            balance: 1
        }
        .affects_level());
    }
}
