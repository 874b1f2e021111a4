//! Result types returned by the progression facade.

use serde::{Deserialize, Serialize};

use gangforge_domain::{DoctrineId, PremiumCreditAction, ProgressionEvent, UpgradeId};

/// Outcome of an XP grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpGrantOutcome {
    pub total_xp: u64,
    pub level_before: u32,
    pub level_after: u32,
    pub event: ProgressionEvent,
}

impl XpGrantOutcome {
    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}

/// Outcome of a committed upgrade purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradePurchaseOutcome {
    pub upgrade_id: UpgradeId,
    pub cost: u64,
    pub event: ProgressionEvent,
}

/// Outcome of a doctrine selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctrineOutcome {
    pub doctrine_id: DoctrineId,
    /// `false` when the doctrine was already active (no-op success).
    pub changed: bool,
    /// Present only when the selection changed state.
    pub event: Option<ProgressionEvent>,
}

/// Outcome of attempting to charge a premium-priced custom job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeOutcome {
    pub action: PremiumCreditAction,
    /// Present only when credits were actually debited.
    pub event: Option<ProgressionEvent>,
}
