//! Per-gang state registry.
//!
//! One authoritative [`GangProgression`] instance per gang ID. The per-gang
//! `tokio::sync::Mutex` is the exclusive-execution contract: a mutation
//! locks its gang and nothing else, so operations on different gangs run in
//! parallel while two mutations on the same gang are serialized.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use gangforge_domain::{GangId, GangProgression};

/// Registry of live gang progression states.
#[derive(Default)]
pub struct GangRegistry {
    gangs: DashMap<GangId, Arc<Mutex<GangProgression>>>,
}

impl GangRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gang's authoritative state. Replaces any previous entry
    /// for the same ID.
    pub fn insert(&self, state: GangProgression) -> Arc<Mutex<GangProgression>> {
        let gang_id = state.id();
        let handle = Arc::new(Mutex::new(state));
        self.gangs.insert(gang_id, Arc::clone(&handle));
        handle
    }

    /// Handle to a gang's state, if registered.
    pub fn get(&self, gang_id: GangId) -> Option<Arc<Mutex<GangProgression>>> {
        self.gangs.get(&gang_id).map(|entry| Arc::clone(&entry))
    }

    /// Remove a gang (disband). Returns the handle so a caller holding the
    /// lock can finish its critical section.
    pub fn remove(&self, gang_id: GangId) -> Option<Arc<Mutex<GangProgression>>> {
        self.gangs.remove(&gang_id).map(|(_, handle)| handle)
    }

    pub fn contains(&self, gang_id: GangId) -> bool {
        self.gangs.contains_key(&gang_id)
    }

    pub fn len(&self) -> usize {
        self.gangs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gangs.is_empty()
    }

    /// IDs of all registered gangs.
    pub fn gang_ids(&self) -> Vec<GangId> {
        self.gangs.iter().map(|entry| *entry.key()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_remove() {
        let registry = GangRegistry::new();
        let gang = GangProgression::founded(GangId::new(), 0);
        let gang_id = gang.id();

        registry.insert(gang);
        assert!(registry.contains(gang_id));
        assert!(registry.get(gang_id).is_some());

        registry.remove(gang_id);
        assert!(!registry.contains(gang_id));
        assert!(registry.get(gang_id).is_none());
    }

    #[tokio::test]
    async fn test_same_handle_shares_state() {
        let registry = GangRegistry::new();
        let gang = GangProgression::founded(GangId::new(), 0);
        let gang_id = gang.id();
        registry.insert(gang);

        {
            let handle = registry.get(gang_id).expect("registered");
            let mut state = handle.lock().await;
            state.grant_xp(500);
        }

        let handle = registry.get(gang_id).expect("registered");
        assert_eq!(handle.lock().await.total_xp(), 500);
    }
}
