//! In-memory gang store for development and testing.
//!
//! Keeps snapshots in a concurrent map; does not persist across restarts.
//! Suitable for tests and single-process deployments.

use async_trait::async_trait;
use dashmap::DashMap;

use gangforge_domain::{GangId, GangProgressionSnapshot};

use crate::infrastructure::ports::{GangStore, StoreError};

/// DashMap-backed [`GangStore`] implementation.
#[derive(Default)]
pub struct InMemoryGangStore {
    records: DashMap<GangId, GangProgressionSnapshot>,
}

impl InMemoryGangStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl GangStore for InMemoryGangStore {
    async fn load(&self, gang_id: GangId) -> Result<Option<GangProgressionSnapshot>, StoreError> {
        Ok(self.records.get(&gang_id).map(|entry| entry.clone()))
    }

    async fn save(&self, snapshot: &GangProgressionSnapshot) -> Result<(), StoreError> {
        self.records.insert(snapshot.id, snapshot.clone());
        Ok(())
    }

    async fn delete(&self, gang_id: GangId) -> Result<(), StoreError> {
        self.records.remove(&gang_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gangforge_domain::{GangProgression, LevelCurve};

    #[tokio::test]
    async fn test_save_load_delete() {
        let store = InMemoryGangStore::new();
        let curve = LevelCurve::default();
        let gang = GangProgression::founded(GangId::new(), 50);
        let snapshot = gang.snapshot(&curve);

        store.save(&snapshot).await.expect("save");
        let loaded = store.load(gang.id()).await.expect("load");
        assert_eq!(loaded, Some(snapshot));

        store.delete(gang.id()).await.expect("delete");
        assert_eq!(store.load(gang.id()).await.expect("load"), None);
    }

    #[tokio::test]
    async fn test_load_missing_is_none() {
        let store = InMemoryGangStore::new();
        assert_eq!(store.load(GangId::new()).await.expect("load"), None);
    }
}
