use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::database::seed;
use crate::models::ActivityMap;

/// Process-local activity registry. Cloning shares the same map.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityMap>>,
}

impl ActivityStore {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Store loaded with the school's default activities.
    pub fn seeded() -> Self {
        Self::new(seed::default_activities())
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, ActivityMap> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, ActivityMap> {
        self.inner.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_state() {
        let store = ActivityStore::seeded();
        let other = store.clone();

        other.write().await.remove("Chess Club");

        assert!(!store.read().await.contains_key("Chess Club"));
    }

    #[tokio::test]
    async fn default_store_is_empty() {
        let store = ActivityStore::default();
        assert!(store.read().await.is_empty());
    }
}
