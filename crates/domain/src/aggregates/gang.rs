//! Gang progression aggregate - per-gang XP, upgrades, doctrine, and
//! premium balance.
//!
//! # Invariants
//!
//! - `total_xp` is monotonically non-decreasing except on explicit admin
//!   reset
//! - the level is never stored: it is recomputed from `total_xp` through a
//!   [`LevelCurve`] at every observation point
//! - at most one doctrine is active (single `Option` field)
//! - `premium_credits` never underflows

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::curve::LevelCurve;
use crate::error::DomainError;
use crate::ids::GangId;
use crate::value_objects::{DoctrineId, UpgradeId};

/// Progression state for one gang.
///
/// Fields are private; all mutation goes through the methods below, and the
/// service facade serializes those per gang. Callers never write fields
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub struct GangProgression {
    id: GangId,
    total_xp: u64,
    owned_upgrades: BTreeSet<UpgradeId>,
    active_doctrine: Option<DoctrineId>,
    premium_credits: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl GangProgression {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create the state for a freshly founded gang: zero XP, no upgrades,
    /// no doctrine, the deployment's starting premium balance.
    pub fn founded(id: GangId, starting_premium_credits: u64) -> Self {
        let now = Utc::now();
        Self {
            id,
            total_xp: 0,
            owned_upgrades: BTreeSet::new(),
            active_doctrine: None,
            premium_credits: starting_premium_credits,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rehydrate a gang from its persisted snapshot.
    pub fn from_snapshot(snapshot: GangProgressionSnapshot) -> Self {
        Self {
            id: snapshot.id,
            total_xp: snapshot.total_xp,
            owned_upgrades: snapshot.owned_upgrades.into_iter().collect(),
            active_doctrine: snapshot.active_doctrine,
            premium_credits: snapshot.premium_credits,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> GangId {
        self.id
    }

    #[inline]
    pub fn total_xp(&self) -> u64 {
        self.total_xp
    }

    /// Derived level; always recomputed, never cached.
    #[inline]
    pub fn level(&self, curve: &LevelCurve) -> u32 {
        curve.level_for(self.total_xp)
    }

    #[inline]
    pub fn owned_upgrades(&self) -> &BTreeSet<UpgradeId> {
        &self.owned_upgrades
    }

    #[inline]
    pub fn owns_upgrade(&self, id: &UpgradeId) -> bool {
        self.owned_upgrades.contains(id)
    }

    #[inline]
    pub fn active_doctrine(&self) -> Option<DoctrineId> {
        self.active_doctrine
    }

    #[inline]
    pub fn premium_credits(&self) -> u64 {
        self.premium_credits
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Add earned XP. Saturates at the numeric ceiling rather than wrapping.
    pub fn grant_xp(&mut self, amount: u64) -> u64 {
        self.total_xp = self.total_xp.saturating_add(amount);
        self.touch();
        self.total_xp
    }

    /// Explicit admin reset, the only sanctioned decrease of `total_xp`.
    pub fn reset_xp(&mut self) {
        self.total_xp = 0;
        self.touch();
    }

    /// Record ownership of an upgrade. Idempotence is guarded upstream by
    /// the catalog's purchase validation.
    pub fn add_upgrade(&mut self, id: UpgradeId) {
        self.owned_upgrades.insert(id);
        self.touch();
    }

    /// Activate a doctrine, replacing any previous one. Returns `false` if
    /// the doctrine was already active (no-op re-selection).
    pub fn set_doctrine(&mut self, id: DoctrineId) -> bool {
        if self.active_doctrine == Some(id) {
            return false;
        }
        self.active_doctrine = Some(id);
        self.touch();
        true
    }

    /// Drop back to no specialization.
    pub fn clear_doctrine(&mut self) {
        if self.active_doctrine.take().is_some() {
            self.touch();
        }
    }

    /// Top up the premium balance (store purchases, admin grants).
    pub fn credit_premium(&mut self, amount: u64) -> u64 {
        self.premium_credits = self.premium_credits.saturating_add(amount);
        self.touch();
        self.premium_credits
    }

    /// Deduct a successful premium action's cost. Affordability is the
    /// caller's check; this only refuses underflow.
    pub fn debit_premium(&mut self, amount: u64) -> Result<u64, DomainError> {
        let remaining = self.premium_credits.checked_sub(amount).ok_or_else(|| {
            DomainError::invalid_argument(format!(
                "premium debit of {amount} exceeds balance {}",
                self.premium_credits
            ))
        })?;
        self.premium_credits = remaining;
        self.touch();
        Ok(self.premium_credits)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    /// Persistence / collaborator view of this gang, including the derived
    /// level.
    pub fn snapshot(&self, curve: &LevelCurve) -> GangProgressionSnapshot {
        GangProgressionSnapshot {
            id: self.id,
            total_xp: self.total_xp,
            level: self.level(curve),
            owned_upgrades: self.owned_upgrades.iter().cloned().collect(),
            active_doctrine: self.active_doctrine,
            premium_credits: self.premium_credits,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Serializable view of a gang's progression state.
///
/// `level` is derived data included for consumers; rehydration ignores it
/// and recomputes from `total_xp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GangProgressionSnapshot {
    pub id: GangId,
    pub total_xp: u64,
    pub level: u32,
    pub owned_upgrades: Vec<UpgradeId>,
    pub active_doctrine: Option<DoctrineId>,
    pub premium_credits: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gang() -> GangProgression {
        GangProgression::founded(GangId::new(), 100)
    }

    #[test]
    fn test_founded_gang_starts_clean() {
        let gang = gang();
        let curve = LevelCurve::default();
        assert_eq!(gang.total_xp(), 0);
        assert_eq!(gang.level(&curve), 1);
        assert!(gang.owned_upgrades().is_empty());
        assert_eq!(gang.active_doctrine(), None);
        assert_eq!(gang.premium_credits(), 100);
    }

    #[test]
    fn test_grant_xp_accumulates() {
        let mut gang = gang();
        gang.grant_xp(1500);
        assert_eq!(gang.grant_xp(1500), 3000);
        assert_eq!(gang.total_xp(), 3000);
    }

    #[test]
    fn test_level_tracks_curve() {
        let mut gang = gang();
        let curve = LevelCurve::default();
        let threshold = curve.xp_to_reach(3).expect("threshold");
        gang.grant_xp(threshold);
        assert_eq!(gang.level(&curve), 3);
    }

    #[test]
    fn test_reset_xp_zeroes_total() {
        let mut gang = gang();
        gang.grant_xp(50_000);
        gang.reset_xp();
        assert_eq!(gang.total_xp(), 0);
        assert_eq!(gang.level(&LevelCurve::default()), 1);
    }

    #[test]
    fn test_doctrine_reselect_is_noop() {
        let mut gang = gang();
        assert!(gang.set_doctrine(DoctrineId::Ledger));
        assert!(!gang.set_doctrine(DoctrineId::Ledger));
        assert_eq!(gang.active_doctrine(), Some(DoctrineId::Ledger));
    }

    #[test]
    fn test_doctrine_switch_replaces_previous() {
        let mut gang = gang();
        gang.set_doctrine(DoctrineId::Ledger);
        assert!(gang.set_doctrine(DoctrineId::Nightfall));
        assert_eq!(gang.active_doctrine(), Some(DoctrineId::Nightfall));
    }

    #[test]
    fn test_premium_debit_refuses_underflow() {
        let mut gang = gang();
        assert!(gang.debit_premium(101).is_err());
        assert_eq!(gang.debit_premium(100), Ok(0));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut gang = gang();
        let curve = LevelCurve::default();
        gang.grant_xp(10_000);
        gang.add_upgrade(UpgradeId::new("gang_colors").expect("key"));
        gang.set_doctrine(DoctrineId::Ironwall);

        let snapshot = gang.snapshot(&curve);
        assert_eq!(snapshot.level, gang.level(&curve));

        let restored = GangProgression::from_snapshot(snapshot);
        assert_eq!(restored, gang);
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let gang = gang();
        let snapshot = gang.snapshot(&LevelCurve::default());
        let json = serde_json::to_string(&snapshot).expect("serialize");
        let parsed: GangProgressionSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, snapshot);
    }
}
