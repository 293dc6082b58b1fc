//! Persists the query cache through the key-value store.

use super::{CacheSnapshot, QueryCache};
use crate::config::QueryPolicy;
use crate::db::KvRepository;
use crate::error::Result;
use crate::util::unix_millis_now;

/// Storage key of the persisted cache snapshot
pub const QUERY_CACHE_KEY: &str = "queryCache";

/// Saves and restores [`QueryCache`] snapshots.
pub struct CachePersister<R> {
    repo: R,
}

impl<R: KvRepository> CachePersister<R> {
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn persist(&self, cache: &QueryCache, policy: &QueryPolicy) -> Result<()> {
        let snapshot = cache.snapshot(unix_millis_now(), &policy.buster);
        let serialized = serde_json::to_string(&snapshot)?;
        self.repo.set(QUERY_CACHE_KEY, &serialized).await?;
        tracing::debug!(entries = cache.len(), "Persisted query cache");
        Ok(())
    }

    /// Load the persisted cache; a missing, expired or corrupt snapshot
    /// yields an empty cache.
    pub async fn restore(&self, policy: &QueryPolicy) -> Result<QueryCache> {
        let Some(raw) = self.repo.get(QUERY_CACHE_KEY).await? else {
            return Ok(QueryCache::new());
        };

        match serde_json::from_str::<CacheSnapshot>(&raw) {
            Ok(snapshot) => Ok(QueryCache::restore(
                snapshot,
                unix_millis_now(),
                policy.persist_max_age,
                &policy.buster,
            )),
            Err(error) => {
                tracing::warn!("Dropping corrupt persisted cache: {error}");
                self.repo.delete(QUERY_CACHE_KEY).await?;
                Ok(QueryCache::new())
            }
        }
    }

    pub async fn remove(&self) -> Result<()> {
        self.repo.delete(QUERY_CACHE_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::QueryKey;
    use crate::db::{Database, LibSqlKvRepository};

    #[tokio::test(flavor = "multi_thread")]
    async fn persist_then_restore_round_trips_entries() {
        let db = Database::open_in_memory().await.unwrap();
        let persister = CachePersister::new(LibSqlKvRepository::new(db.connection()));
        let policy = QueryPolicy::default();

        let mut cache = QueryCache::new();
        cache
            .insert(QueryKey::brands(), &vec!["Creed".to_string()], unix_millis_now())
            .unwrap();
        persister.persist(&cache, &policy).await.unwrap();

        let restored = persister.restore(&policy).await.unwrap();
        assert_eq!(
            restored.get_any::<Vec<String>>(&QueryKey::brands()),
            Some(vec!["Creed".to_string()])
        );

        persister.remove().await.unwrap();
        assert!(persister.restore(&policy).await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn corrupt_snapshot_is_dropped() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = LibSqlKvRepository::new(db.connection());
        repo.set(QUERY_CACHE_KEY, "{not json").await.unwrap();

        let persister = CachePersister::new(LibSqlKvRepository::new(db.connection()));
        let restored = persister.restore(&QueryPolicy::default()).await.unwrap();
        assert!(restored.is_empty());
        assert_eq!(repo.get(QUERY_CACHE_KEY).await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn changed_buster_discards_snapshot() {
        let db = Database::open_in_memory().await.unwrap();
        let persister = CachePersister::new(LibSqlKvRepository::new(db.connection()));

        let mut cache = QueryCache::new();
        cache.insert(QueryKey::brands(), &1, unix_millis_now()).unwrap();
        persister.persist(&cache, &QueryPolicy::default()).await.unwrap();

        let policy = QueryPolicy {
            buster: "schema-2".to_string(),
            ..QueryPolicy::default()
        };
        assert!(persister.restore(&policy).await.unwrap().is_empty());
    }
}
