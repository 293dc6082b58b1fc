//! Inventory service shared by clients.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::CatalogApi;
use crate::brands::BrandDirectory;
use crate::cache::{QueryCache, QueryKey};
use crate::config::QueryPolicy;
use crate::error::{Error, Result};
use crate::export::InventoryReport;
use crate::models::{Brand, NewBrand, NewPerfume, Perfume, PerfumeUpdate};
use crate::search::{intersect_by_id, normalize_search_query, FilterOptions};
use crate::util::unix_millis_now;

/// Cached catalog reads and cache-invalidating mutations.
pub struct InventoryService<A> {
    api: A,
    policy: QueryPolicy,
    cache: QueryCache,
    brands: BrandDirectory,
    offline: bool,
}

impl<A: CatalogApi> InventoryService<A> {
    pub fn new(api: A, policy: QueryPolicy) -> Self {
        Self::with_cache(api, policy, QueryCache::new())
    }

    /// Start from a previously persisted cache.
    pub fn with_cache(api: A, policy: QueryPolicy, cache: QueryCache) -> Self {
        Self {
            api,
            policy,
            cache,
            brands: BrandDirectory::new(),
            offline: false,
        }
    }

    /// In offline mode reads are served from the cache only and mutations fail.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub const fn is_offline(&self) -> bool {
        self.offline
    }

    pub const fn policy(&self) -> &QueryPolicy {
        &self.policy
    }

    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut QueryCache {
        &mut self.cache
    }

    pub fn into_cache(self) -> QueryCache {
        self.cache
    }

    pub const fn brand_directory(&self) -> &BrandDirectory {
        &self.brands
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Drop cache entries older than the policy's gc time.
    pub fn collect_garbage(&mut self) -> usize {
        self.cache.gc(unix_millis_now(), self.policy.gc_time)
    }

    pub async fn list_perfumes(&mut self) -> Result<Vec<Perfume>> {
        let key = QueryKey::perfume_list();
        if let Some(hit) = self.lookup(&key, self.policy.stale_time)? {
            return Ok(hit);
        }
        let result = self.api.list_perfumes().await;
        self.store(key, result)
    }

    /// Remote search; queries shorter than two characters return nothing.
    pub async fn search_perfumes(&mut self, query: &str) -> Result<Vec<Perfume>> {
        let Some(query) = normalize_search_query(query) else {
            return Ok(Vec::new());
        };

        let key = QueryKey::perfume_search(&query);
        if let Some(hit) = self.lookup(&key, self.policy.search_stale_time)? {
            return Ok(hit);
        }
        let result = self.api.search_perfumes(&query).await;
        self.store(key, result)
    }

    /// Gender and brand filters; with both set the results are intersected.
    pub async fn filter_perfumes(&mut self, filters: &FilterOptions) -> Result<Vec<Perfume>> {
        if !filters.is_active() {
            return Ok(Vec::new());
        }

        let key = QueryKey::perfume_filters(filters.gender, filters.brand_id.as_deref());
        if let Some(hit) = self.lookup(&key, self.policy.filter_stale_time)? {
            return Ok(hit);
        }

        let result = match (filters.gender, filters.brand_id.as_deref()) {
            (Some(gender), None) => self.api.perfumes_by_gender(gender).await,
            (None, Some(brand_id)) => self.api.perfumes_by_brand(brand_id).await,
            (Some(gender), Some(brand_id)) => tokio::try_join!(
                self.api.perfumes_by_gender(gender),
                self.api.perfumes_by_brand(brand_id)
            )
            .map(|(by_gender, by_brand)| intersect_by_id(by_gender, &by_brand)),
            (None, None) => Ok(Vec::new()),
        };
        self.store(key, result)
    }

    /// Load brands and refresh the brand directory.
    pub async fn list_brands(&mut self) -> Result<Vec<Brand>> {
        self.brands.set_loading();

        let key = QueryKey::brands();
        let result = match self.lookup(&key, self.policy.brands_stale_time) {
            Ok(Some(hit)) => Ok(hit),
            Ok(None) => {
                let fetched = self.api.list_brands().await;
                self.store(key, fetched)
            }
            Err(error) => Err(error),
        };

        match &result {
            Ok(brands) => self.brands.set_brands(brands.clone()),
            Err(error) => self.brands.set_error(error.to_string()),
        }
        result
    }

    /// Perfumes paired with their display brand name.
    pub async fn perfumes_with_brand_names(&mut self) -> Result<Vec<(Perfume, String)>> {
        let perfumes = self.list_perfumes().await?;
        Ok(self.pair_brand_names(perfumes).await)
    }

    /// Pair perfumes with brand names.
    ///
    /// A brand load failure is logged and leaves the fallback labels in place.
    pub async fn pair_brand_names(&mut self, perfumes: Vec<Perfume>) -> Vec<(Perfume, String)> {
        self.load_brands_or_warn().await;
        perfumes
            .into_iter()
            .map(|perfume| {
                let brand = self.brands.brand_name(&perfume.brand_id).to_string();
                (perfume, brand)
            })
            .collect()
    }

    /// Build the grouped inventory report from the full list.
    ///
    /// Brands that cannot be loaded show up as the missing-brand label.
    pub async fn inventory_report(
        &mut self,
        generated_at: DateTime<Utc>,
    ) -> Result<InventoryReport> {
        self.load_brands_or_warn().await;
        let perfumes = self.list_perfumes().await?;
        Ok(InventoryReport::build(
            &perfumes,
            self.brands.names(),
            generated_at,
        ))
    }

    async fn load_brands_or_warn(&mut self) {
        if let Err(error) = self.list_brands().await {
            tracing::warn!("Could not load brands: {error}");
        }
    }

    /// Find a perfume by full id or unique id prefix.
    pub async fn resolve_perfume(&mut self, query: &str) -> Result<Perfume> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidInput("perfume id cannot be empty".to_string()));
        }

        let perfumes = self.list_perfumes().await?;
        if let Some(exact) = perfumes.iter().find(|perfume| perfume.id == query) {
            return Ok(exact.clone());
        }

        let mut matches = perfumes
            .into_iter()
            .filter(|perfume| perfume.id.starts_with(query));
        match (matches.next(), matches.next()) {
            (Some(perfume), None) => Ok(perfume),
            (None, _) => Err(Error::NotFound(format!("perfume '{query}'"))),
            (Some(_), Some(_)) => Err(Error::InvalidInput(format!(
                "perfume id prefix '{query}' is ambiguous"
            ))),
        }
    }

    pub async fn create_perfume(&mut self, perfume: &NewPerfume) -> Result<Perfume> {
        self.ensure_online("create perfume")?;
        let perfume = NewPerfume::new(
            &perfume.name,
            perfume.gender,
            &perfume.brand_id,
            perfume.stock,
        )?;
        let created = self.api.create_perfume(&perfume).await?;
        self.cache.invalidate(&QueryKey::perfumes());
        tracing::info!(id = %created.id, "Created perfume");
        Ok(created)
    }

    pub async fn update_perfume(&mut self, id: &str, update: PerfumeUpdate) -> Result<Perfume> {
        self.ensure_online("update perfume")?;
        let update = update.validated()?;
        let updated = self.api.update_perfume(id, &update).await?;
        self.cache.invalidate(&QueryKey::perfumes());
        tracing::info!(id, "Updated perfume");
        Ok(updated)
    }

    pub async fn delete_perfume(&mut self, id: &str) -> Result<()> {
        self.ensure_online("delete perfume")?;
        self.api.delete_perfume(id).await?;
        self.cache.invalidate(&QueryKey::perfumes());
        tracing::info!(id, "Deleted perfume");
        Ok(())
    }

    /// Apply a signed stock change to the current server value.
    pub async fn update_stock(&mut self, id: &str, change: i64) -> Result<Perfume> {
        self.ensure_online("update stock")?;
        let current = self.api.get_perfume(id).await?;
        let next = i64::from(current.stock) + change;
        if next < 0 {
            return Err(Error::InvalidInput(format!(
                "stock cannot go below zero (current {}, change {change})",
                current.stock
            )));
        }
        let stock = u32::try_from(next)
            .map_err(|_| Error::InvalidInput(format!("stock {next} is too large")))?;

        let updated = self
            .api
            .update_perfume(id, &PerfumeUpdate::stock(stock))
            .await?;
        self.cache.invalidate(&QueryKey::perfumes());
        tracing::info!(id, from = current.stock, to = stock, "Updated stock");
        Ok(updated)
    }

    pub async fn create_brand(&mut self, brand: &NewBrand) -> Result<Brand> {
        self.ensure_online("create brand")?;
        let brand = NewBrand::new(&brand.name)?;
        let created = self.api.create_brand(&brand).await?;
        self.invalidate_brands();
        tracing::info!(id = %created.id, "Created brand");
        Ok(created)
    }

    pub async fn delete_brand(&mut self, id: &str) -> Result<()> {
        self.ensure_online("delete brand")?;
        self.api.delete_brand(id).await?;
        self.invalidate_brands();
        tracing::info!(id, "Deleted brand");
        Ok(())
    }

    fn invalidate_brands(&mut self) {
        self.cache.invalidate(&QueryKey::brands());
        self.cache.invalidate(&QueryKey::perfumes());
    }

    fn ensure_online(&self, action: &str) -> Result<()> {
        if self.offline {
            return Err(Error::Offline(action.to_string()));
        }
        Ok(())
    }

    /// Fresh cached data, or in offline mode any cached data.
    ///
    /// `Ok(None)` means the caller should fetch.
    fn lookup<T: DeserializeOwned>(
        &self,
        key: &QueryKey,
        stale_time: Duration,
    ) -> Result<Option<T>> {
        if let Some(hit) = self.cache.get_fresh(key, stale_time, unix_millis_now()) {
            tracing::debug!(%key, "Cache hit");
            return Ok(Some(hit));
        }
        if self.offline {
            return self
                .cache
                .get_any(key)
                .map(Some)
                .ok_or_else(|| Error::Offline(key.to_string()));
        }
        Ok(None)
    }

    /// Cache a successful fetch; on failure fall back to stale data if any.
    fn store<T: Serialize + DeserializeOwned>(
        &mut self,
        key: QueryKey,
        result: Result<T>,
    ) -> Result<T> {
        match result {
            Ok(data) => {
                self.cache.insert(key, &data, unix_millis_now())?;
                Ok(data)
            }
            Err(error) => match self.cache.get_any(&key) {
                Some(stale) => {
                    tracing::warn!(%key, "Request failed, serving cached data: {error}");
                    Ok(stale)
                }
                None => Err(error),
            },
        }
    }
}
