//! Static upgrade catalog.
//!
//! The catalog is immutable configuration built once at process start and
//! passed by reference into the facade; there is no runtime mutation API.
//! Changing the catalog means shipping a new process generation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aggregates::GangProgression;
use crate::curve::LevelCurve;
use crate::error::DomainError;
use crate::value_objects::{UpgradeCategory, UpgradeId};

/// One purchasable, level-gated, category-tagged upgrade.
///
/// `cost` is denominated in ordinary gang funds; the actual deduction is the
/// funds collaborator's concern, invoked by the facade before ownership is
/// committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeDefinition {
    pub name: String,
    pub category: UpgradeCategory,
    pub cost: u64,
    pub min_level: u32,
}

/// Immutable registry of all purchasable upgrades.
///
/// # Invariants
///
/// - at least 10 entries
/// - at least one entry per [`UpgradeCategory`]
/// - every cost is positive
#[derive(Debug, Clone)]
pub struct UpgradeCatalog {
    entries: BTreeMap<UpgradeId, UpgradeDefinition>,
}

impl UpgradeCatalog {
    /// Build a validated catalog from explicit entries.
    pub fn new(
        entries: impl IntoIterator<Item = (UpgradeId, UpgradeDefinition)>,
    ) -> Result<Self, DomainError> {
        let entries: BTreeMap<_, _> = entries.into_iter().collect();
        if entries.len() < 10 {
            return Err(DomainError::invalid_argument(format!(
                "catalog needs at least 10 upgrades, got {}",
                entries.len()
            )));
        }
        for (id, def) in &entries {
            if def.cost == 0 {
                return Err(DomainError::invalid_argument(format!(
                    "upgrade {id} must have a positive cost"
                )));
            }
        }
        for category in UpgradeCategory::all() {
            if !entries.values().any(|def| def.category == category) {
                return Err(DomainError::invalid_argument(format!(
                    "catalog has no {category} upgrade"
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The shipped catalog: twelve upgrades spanning every category.
    pub fn builtin() -> Self {
        fn entry(
            key: &str,
            name: &str,
            category: UpgradeCategory,
            cost: u64,
            min_level: u32,
        ) -> (UpgradeId, UpgradeDefinition) {
            let id = UpgradeId::new(key).unwrap_or_else(|_| {
                // builtin keys are compile-time literals, all snake_case
                unreachable!("builtin upgrade key {key:?} is malformed")
            });
            (
                id,
                UpgradeDefinition {
                    name: name.to_string(),
                    category,
                    cost,
                    min_level,
                },
            )
        }

        let entries = [
            entry("protection_racket", "Protection Racket", UpgradeCategory::Economy, 5_000, 1),
            entry("counterfeit_press", "Counterfeit Press", UpgradeCategory::Economy, 18_000, 12),
            entry("fortified_safehouse", "Fortified Safehouse", UpgradeCategory::Defense, 9_000, 5),
            entry("riot_barricades", "Riot Barricades", UpgradeCategory::Defense, 22_000, 18),
            entry("smuggling_routes", "Smuggling Routes", UpgradeCategory::Logistics, 8_000, 6),
            entry("dead_drop_network", "Dead Drop Network", UpgradeCategory::Logistics, 15_000, 10),
            entry("armory_contacts", "Armory Contacts", UpgradeCategory::Warfare, 12_000, 8),
            entry("enforcer_training", "Enforcer Training", UpgradeCategory::Warfare, 26_000, 20),
            entry("street_informants", "Street Informants", UpgradeCategory::Influence, 6_000, 3),
            entry("city_hall_leverage", "City Hall Leverage", UpgradeCategory::Influence, 30_000, 24),
            entry("gang_colors", "Gang Colors", UpgradeCategory::Identity, 2_500, 1),
            entry("turf_murals", "Turf Murals", UpgradeCategory::Identity, 7_500, 7),
        ];

        match Self::new(entries) {
            Ok(catalog) => catalog,
            // the builtin table satisfies the invariants by construction
            Err(err) => unreachable!("builtin catalog invalid: {err}"),
        }
    }

    #[inline]
    pub fn get(&self, id: &UpgradeId) -> Option<&UpgradeDefinition> {
        self.entries.get(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UpgradeId, &UpgradeDefinition)> {
        self.entries.iter()
    }

    /// Validate a purchase without applying it.
    ///
    /// Failure order: unknown id, already owned, level gate. The returned
    /// definition lets the facade price the funds deduction.
    pub fn can_purchase<'a>(
        &'a self,
        gang: &GangProgression,
        curve: &LevelCurve,
        id: &UpgradeId,
    ) -> Result<&'a UpgradeDefinition, DomainError> {
        let def = self
            .entries
            .get(id)
            .ok_or_else(|| DomainError::unknown_upgrade(id.as_str()))?;
        if gang.owns_upgrade(id) {
            return Err(DomainError::already_owned(id.as_str()));
        }
        let level = gang.level(curve);
        if level < def.min_level {
            return Err(DomainError::level_too_low(def.min_level, level));
        }
        Ok(def)
    }

    /// Pure purchase transform: validates and returns the new state with the
    /// upgrade owned. The caller commits the result; fund deduction happens
    /// outside, inside the same critical section.
    pub fn apply_purchase(
        &self,
        gang: &GangProgression,
        curve: &LevelCurve,
        id: &UpgradeId,
    ) -> Result<GangProgression, DomainError> {
        self.can_purchase(gang, curve, id)?;
        let mut next = gang.clone();
        next.add_upgrade(id.clone());
        Ok(next)
    }
}

impl Default for UpgradeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::GangId;

    fn gang_at_level(curve: &LevelCurve, level: u32) -> GangProgression {
        let mut gang = GangProgression::founded(GangId::new(), 0);
        gang.grant_xp(curve.xp_to_reach(level).expect("threshold"));
        gang
    }

    fn id(key: &str) -> UpgradeId {
        UpgradeId::new(key).expect("valid key")
    }

    #[test]
    fn test_builtin_has_variety_and_depth() {
        let catalog = UpgradeCatalog::builtin();
        assert!(catalog.len() >= 10);
        for category in UpgradeCategory::all() {
            assert!(
                catalog.iter().any(|(_, def)| def.category == category),
                "missing {category} upgrade"
            );
        }
    }

    #[test]
    fn test_new_rejects_thin_catalog() {
        let thin = UpgradeCatalog::builtin()
            .iter()
            .take(5)
            .map(|(id, def)| (id.clone(), def.clone()))
            .collect::<Vec<_>>();
        assert!(UpgradeCatalog::new(thin).is_err());
    }

    #[test]
    fn test_unknown_upgrade_rejected() {
        let curve = LevelCurve::default();
        let catalog = UpgradeCatalog::builtin();
        let gang = gang_at_level(&curve, 5);
        assert_eq!(
            catalog.can_purchase(&gang, &curve, &id("golden_toilet")),
            Err(DomainError::unknown_upgrade("golden_toilet"))
        );
    }

    #[test]
    fn test_level_gate_enforced() {
        let curve = LevelCurve::default();
        let catalog = UpgradeCatalog::builtin();
        let gang = gang_at_level(&curve, 5);
        // dead_drop_network needs level 10
        assert_eq!(
            catalog.can_purchase(&gang, &curve, &id("dead_drop_network")),
            Err(DomainError::level_too_low(10, 5))
        );
    }

    #[test]
    fn test_purchase_adds_ownership() {
        let curve = LevelCurve::default();
        let catalog = UpgradeCatalog::builtin();
        let gang = gang_at_level(&curve, 5);
        let bought = catalog
            .apply_purchase(&gang, &curve, &id("gang_colors"))
            .expect("purchase");
        assert!(bought.owns_upgrade(&id("gang_colors")));
        // pure transform: the input state is untouched
        assert!(!gang.owns_upgrade(&id("gang_colors")));
    }

    #[test]
    fn test_double_purchase_is_already_owned() {
        let curve = LevelCurve::default();
        let catalog = UpgradeCatalog::builtin();
        let gang = gang_at_level(&curve, 5);
        let bought = catalog
            .apply_purchase(&gang, &curve, &id("gang_colors"))
            .expect("first purchase");
        assert_eq!(
            catalog.apply_purchase(&bought, &curve, &id("gang_colors")),
            Err(DomainError::already_owned("gang_colors"))
        );
    }
}
