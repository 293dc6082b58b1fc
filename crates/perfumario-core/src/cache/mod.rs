//! Query result cache.
//!
//! Results of catalog reads are stored as JSON under hierarchical keys such
//! as `perfumes/search/dior`. Mutations invalidate by key prefix, and the whole
//! cache can be snapshotted to local storage so the list survives restarts
//! and is available offline.

mod persister;

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Gender;

pub use persister::{CachePersister, QUERY_CACHE_KEY};

/// Hierarchical cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Every perfume query (lists, searches and filters)
    #[must_use]
    pub fn perfumes() -> Self {
        Self::new(["perfumes"])
    }

    /// The full perfume list
    #[must_use]
    pub fn perfume_list() -> Self {
        Self::new(["perfumes", "list"])
    }

    #[must_use]
    pub fn perfume_search(query: &str) -> Self {
        Self::new(["perfumes", "search", query])
    }

    #[must_use]
    pub fn perfume_filters(gender: Option<Gender>, brand_id: Option<&str>) -> Self {
        Self::new([
            "perfumes",
            "filters",
            gender.map_or("", Gender::as_str),
            brand_id.unwrap_or(""),
        ])
    }

    #[must_use]
    pub fn brands() -> Self {
        Self::new(["brands"])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// A cached query result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub key: QueryKey,
    pub data: serde_json::Value,
    /// Unix ms when the data was fetched
    pub fetched_at: i64,
    /// Marked stale by a mutation; data is kept for offline reads
    #[serde(default)]
    pub invalidated: bool,
}

impl CacheEntry {
    fn is_fresh(&self, stale_time: Duration, now_ms: i64) -> bool {
        !self.invalidated && now_ms.saturating_sub(self.fetched_at) < duration_ms(stale_time)
    }

    fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        match serde_json::from_value(self.data.clone()) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(key = %self.key, "Discarding undecodable cache entry: {error}");
                None
            }
        }
    }
}

/// Persisted form of a [`QueryCache`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    #[serde(default)]
    pub buster: String,
    pub persisted_at: i64,
    pub entries: Vec<CacheEntry>,
}

/// In-memory query cache
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: BTreeMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fresh result.
    pub fn insert<T: Serialize>(&mut self, key: QueryKey, data: &T, now_ms: i64) -> Result<()> {
        let entry = CacheEntry {
            key: key.clone(),
            data: serde_json::to_value(data)?,
            fetched_at: now_ms,
            invalidated: false,
        };
        self.entries.insert(key, entry);
        Ok(())
    }

    /// Data younger than `stale_time` that no mutation has invalidated.
    pub fn get_fresh<T: DeserializeOwned>(
        &self,
        key: &QueryKey,
        stale_time: Duration,
        now_ms: i64,
    ) -> Option<T> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(stale_time, now_ms))
            .and_then(CacheEntry::decode)
    }

    /// Cached data regardless of freshness.
    pub fn get_any<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        self.entries.get(key).and_then(CacheEntry::decode)
    }

    pub fn entry(&self, key: &QueryKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Mark every entry under `prefix` stale. Returns the number touched.
    pub fn invalidate(&mut self, prefix: &QueryKey) -> usize {
        let mut touched = 0;
        for entry in self.entries.values_mut() {
            if entry.key.starts_with(prefix) {
                entry.invalidated = true;
                touched += 1;
            }
        }
        tracing::debug!(%prefix, touched, "Invalidated cached queries");
        touched
    }

    /// Drop every entry under `prefix`. Returns the number removed.
    pub fn remove(&mut self, prefix: &QueryKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }

    /// Drop entries fetched more than `gc_time` ago.
    pub fn gc(&mut self, now_ms: i64, gc_time: Duration) -> usize {
        let max_age = duration_ms(gc_time);
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now_ms.saturating_sub(entry.fetched_at) <= max_age);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn snapshot(&self, now_ms: i64, buster: &str) -> CacheSnapshot {
        CacheSnapshot {
            buster: buster.to_string(),
            persisted_at: now_ms,
            entries: self.entries.values().cloned().collect(),
        }
    }

    /// Rebuild a cache from a snapshot.
    ///
    /// Snapshots with a different buster or older than `max_age` are
    /// discarded and yield an empty cache.
    #[must_use]
    pub fn restore(snapshot: CacheSnapshot, now_ms: i64, max_age: Duration, buster: &str) -> Self {
        if snapshot.buster != buster {
            tracing::info!("Discarding persisted cache: buster changed");
            return Self::default();
        }
        if now_ms.saturating_sub(snapshot.persisted_at) > duration_ms(max_age) {
            tracing::info!("Discarding persisted cache: older than max age");
            return Self::default();
        }

        let entries = snapshot
            .entries
            .into_iter()
            .map(|entry| (entry.key.clone(), entry))
            .collect();
        Self { entries }
    }
}

fn duration_ms(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}
