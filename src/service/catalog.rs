// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog query facade
//!
//! Read operations over one fetched-and-normalized snapshot of the city
//! collection. The remote store cannot filter server-side, so country and
//! text filtering always happen here, after the fact.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::domain::normalize::normalize_city;
use crate::domain::{City, Country};
use crate::errors::{CatalogError, CatalogResult};
use crate::projection::{CountryIndex, ReviewStats};
use crate::store::{HttpRecordStore, RecordStore};

/// One normalized view of the collection, tagged with its fetch ticket
#[derive(Debug)]
pub(super) struct Snapshot {
    pub(super) cities: Vec<City>,
    pub(super) ticket: u64,
}

/// Catalog facade and mutation coordinator over a record store
///
/// Cheap to share behind an `Arc`; all methods take `&self`. The cached
/// snapshot is populated lazily on the first read, refreshed explicitly,
/// and kept in step by the mutation methods in `service::mutations`.
pub struct CatalogService<S> {
    pub(super) store: S,
    pub(super) cache: RwLock<Option<Snapshot>>,
    tickets: AtomicU64,
}

impl CatalogService<HttpRecordStore> {
    /// Build a service over the remote store described by `config`
    pub fn connect(config: StoreConfig) -> CatalogResult<Self> {
        Ok(Self::new(HttpRecordStore::new(config)?))
    }
}

impl<S: RecordStore> CatalogService<S> {
    /// Build a service over any record store
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: RwLock::new(None),
            tickets: AtomicU64::new(0),
        }
    }

    /// The underlying record store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Refetch and renormalize the snapshot
    ///
    /// Overlapping calls may complete out of order; each fetch takes a
    /// monotonic ticket before hitting the wire, and a response is dropped
    /// when a younger fetch already installed its snapshot. A consumer that
    /// navigated away and back can therefore refresh freely without a
    /// late response rewinding shared state.
    pub async fn refresh(&self) -> CatalogResult<()> {
        let ticket = self.next_ticket();
        let raw = self.store.list().await?;

        let cities: Vec<City> = raw
            .iter()
            .map(|(id, record)| normalize_city(id, record))
            .collect();

        info!(count = cities.len(), ticket, "normalized city snapshot");
        self.install(cities, ticket).await;
        Ok(())
    }

    /// Drop the cached snapshot; the next read refetches
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }

    /// List countries derived from the snapshot, sorted by name
    ///
    /// An empty collection yields an empty list, not an error.
    pub async fn list_countries(&self) -> CatalogResult<Vec<Country>> {
        Ok(self.country_index().await?.entries())
    }

    /// The full country index projection
    pub async fn country_index(&self) -> CatalogResult<CountryIndex> {
        let cities = self.cities_snapshot().await?;
        Ok(CountryIndex::build(&cities))
    }

    /// List cities, optionally filtered
    ///
    /// `country` is an exact match against the record's trimmed country
    /// string; case and whitespace variants are distinct (the documented
    /// grouping limitation). `query` matches case-insensitively against
    /// name and description. Order is the snapshot's stable order.
    pub async fn list_cities(
        &self,
        country: Option<&str>,
        query: Option<&str>,
    ) -> CatalogResult<Vec<City>> {
        let cities = self.cities_snapshot().await?;
        let query = query.map(str::to_lowercase).filter(|q| !q.is_empty());

        Ok(cities
            .into_iter()
            .filter(|city| country.is_none_or(|c| city.country == c))
            .filter(|city| {
                query.as_deref().is_none_or(|q| {
                    city.name.to_lowercase().contains(q)
                        || city.description.to_lowercase().contains(q)
                })
            })
            .collect())
    }

    /// Get one normalized city
    ///
    /// Served from the snapshot when one is loaded, so a detail view stays
    /// consistent with the list it was opened from; a cold lookup goes
    /// straight to the store. An absent id is `NotFound`, distinct from
    /// transport failures.
    pub async fn get_city(&self, id: &str) -> CatalogResult<City> {
        if let Some(snapshot) = self.cache.read().await.as_ref() {
            return snapshot
                .cities
                .iter()
                .find(|city| city.id == id)
                .cloned()
                .ok_or_else(|| CatalogError::NotFound { id: id.to_string() });
        }

        match self.store.get(id).await? {
            Some(record) => Ok(normalize_city(id, &record)),
            None => Err(CatalogError::NotFound { id: id.to_string() }),
        }
    }

    /// Computed review statistics for one city
    pub async fn review_stats(&self, id: &str) -> CatalogResult<ReviewStats> {
        let city = self.get_city(id).await?;
        Ok(ReviewStats::compute(&city.reviews))
    }

    // --- snapshot plumbing ---

    pub(super) fn next_ticket(&self) -> u64 {
        self.tickets.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install a fetched snapshot unless a younger one already landed
    pub(super) async fn install(&self, cities: Vec<City>, ticket: u64) {
        let mut guard = self.cache.write().await;
        match guard.as_ref() {
            Some(current) if current.ticket > ticket => {
                debug!(
                    stale = ticket,
                    current = current.ticket,
                    "ignoring stale snapshot response"
                );
            }
            _ => *guard = Some(Snapshot { cities, ticket }),
        }
    }

    /// The cached city list, fetching it first when absent
    pub(super) async fn cities_snapshot(&self) -> CatalogResult<Vec<City>> {
        let cached = self.cache.read().await.is_some();
        if !cached {
            self.refresh().await?;
        }

        let guard = self.cache.read().await;
        match guard.as_ref() {
            Some(snapshot) => Ok(snapshot.cities.clone()),
            // a concurrent invalidate() can empty the cache between the
            // refresh and this read; treat it as an empty view
            None => Ok(Vec::new()),
        }
    }

    /// Apply an edit to the cached copy of one city, if cached
    pub(super) async fn with_cached_city<F>(&self, id: &str, edit: F)
    where
        F: FnOnce(&mut City),
    {
        let mut guard = self.cache.write().await;
        if let Some(snapshot) = guard.as_mut() {
            if let Some(city) = snapshot.cities.iter_mut().find(|city| city.id == id) {
                edit(city);
            }
        }
    }
}
