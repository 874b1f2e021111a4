//! Doctrine registry and selection.
//!
//! Doctrines are mutually exclusive by construction: the aggregate holds a
//! single `Option<DoctrineId>`, so activating one path implicitly clears the
//! previous one. Consumers re-read `active_doctrine` rather than diffing
//! bonuses.

use serde::{Deserialize, Serialize};

use crate::aggregates::GangProgression;
use crate::value_objects::{DoctrineBonuses, DoctrineId};

/// Static description of one specialization path.
///
/// The bonus weights are an opaque descriptor for the gameplay-effect
/// collaborator; this core never computes effect magnitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctrineDefinition {
    pub id: DoctrineId,
    pub name: String,
    pub description: String,
    pub bonuses: DoctrineBonuses,
}

/// Immutable registry of the three doctrine paths.
///
/// Complete by construction: every [`DoctrineId`] has a definition. Unknown
/// doctrine names are rejected earlier, at the `DoctrineId::from_str`
/// parsing boundary.
#[derive(Debug, Clone)]
pub struct DoctrineRegistry {
    definitions: [DoctrineDefinition; 3],
}

/// Result of a doctrine selection transform.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctrineSelection {
    pub state: GangProgression,
    /// `false` when the doctrine was already active (idempotent no-op).
    pub changed: bool,
}

impl DoctrineRegistry {
    /// The shipped doctrine set.
    pub fn builtin() -> Self {
        Self {
            definitions: [
                DoctrineDefinition {
                    id: DoctrineId::Ledger,
                    name: "The Ledger".to_string(),
                    description: "Racketeering discipline: every favor is priced, every debt collected."
                        .to_string(),
                    bonuses: DoctrineBonuses {
                        income_weight: 1.25,
                        defense_weight: 1.0,
                        stealth_weight: 0.9,
                    },
                },
                DoctrineDefinition {
                    id: DoctrineId::Ironwall,
                    name: "The Ironwall".to_string(),
                    description: "Turf above all: hardened safehouses and members who hold the line."
                        .to_string(),
                    bonuses: DoctrineBonuses {
                        income_weight: 0.9,
                        defense_weight: 1.3,
                        stealth_weight: 0.95,
                    },
                },
                DoctrineDefinition {
                    id: DoctrineId::Nightfall,
                    name: "The Nightfall".to_string(),
                    description: "Move unseen: jobs done before anyone knows the crew was there."
                        .to_string(),
                    bonuses: DoctrineBonuses {
                        income_weight: 1.0,
                        defense_weight: 0.85,
                        stealth_weight: 1.35,
                    },
                },
            ],
        }
    }

    pub fn get(&self, id: DoctrineId) -> &DoctrineDefinition {
        match self
            .definitions
            .iter()
            .find(|def| def.id == id)
        {
            Some(def) => def,
            // the array covers every DoctrineId variant
            None => unreachable!("doctrine registry missing {id}"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DoctrineDefinition> {
        self.definitions.iter()
    }

    /// Pure selection transform.
    ///
    /// Any-to-any transitions are permitted; re-selecting the active
    /// doctrine succeeds without changing state. Exactly one doctrine is
    /// active afterwards.
    pub fn select(&self, gang: &GangProgression, id: DoctrineId) -> DoctrineSelection {
        let mut state = gang.clone();
        let changed = state.set_doctrine(id);
        DoctrineSelection { state, changed }
    }
}

impl Default for DoctrineRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
