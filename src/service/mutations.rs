// Copyright (c) 2025 - Cowboy AI, Inc.
//! Optimistic mutation coordinator
//!
//! Write operations over the catalog. Every method follows the same
//! confirm-then-mutate transaction:
//!
//! 1. Validate locally (typed `Validation` error before any network call)
//! 2. Issue the remote write and await confirmation
//! 3. Only then patch the cached snapshot to match
//!
//! A failed write returns its error with local state untouched; the caller
//! never sees a mutation that silently succeeded locally but not remotely.
//!
//! # Lost updates
//!
//! The store has no array-append primitive and no server-side locking, so
//! review edits are read-modify-write over the whole embedded `reviews`
//! sequence. Two concurrent writers that read the same snapshot will both
//! write full arrays, and the second confirmation silently discards the
//! first writer's change. That hazard is confined to
//! [`CatalogService::write_reviews_back`] and asserted by the test suite as
//! known behavior; a conditional-write upgrade would surface it as
//! `CatalogError::Conflict` instead.

use serde_json::json;
use tracing::{debug, info};

use crate::domain::normalize::normalize_city;
use crate::domain::{City, CityUpdate, NewCity, NewReview, PointOfInterest, Review};
use crate::errors::{CatalogError, CatalogResult};
use crate::store::RecordStore;

use super::catalog::CatalogService;

impl<S: RecordStore> CatalogService<S> {
    /// Create a city; the store mints and returns the id
    ///
    /// `NewCity` construction already validated the required fields. The
    /// local view gains the record only after the store confirms, carrying
    /// the store-assigned id; no unconfirmed record is ever inserted.
    pub async fn create_city(&self, city: NewCity) -> CatalogResult<String> {
        let record = serde_json::to_value(&city)?;
        let id = self.store.create(record.clone()).await?;

        info!(%id, name = %city.name, country = %city.country, "city created");

        let normalized = normalize_city(&id, &record);
        let mut guard = self.cache.write().await;
        if let Some(snapshot) = guard.as_mut() {
            snapshot.cities.push(normalized);
        }

        Ok(id)
    }

    /// Update the provided fields of a city, leaving the rest untouched
    ///
    /// Sent as a partial merge: fields absent from `update` are not
    /// cleared server-side. Updating an absent id is `NotFound` rather
    /// than letting the merge conjure a partial ghost record.
    pub async fn update_city(&self, id: &str, update: CityUpdate) -> CatalogResult<()> {
        if update.is_empty() {
            return Err(CatalogError::Validation(
                "update contains no fields".into(),
            ));
        }
        self.require_exists(id).await?;

        let fields = serde_json::to_value(&update)?;
        self.store.patch(id, fields).await?;
        debug!(%id, "city updated");

        self.with_cached_city(id, |city| apply_update(city, &update))
            .await;
        Ok(())
    }

    /// Replace a city wholesale
    pub async fn replace_city(&self, id: &str, city: NewCity) -> CatalogResult<()> {
        self.require_exists(id).await?;

        let record = serde_json::to_value(&city)?;
        self.store.put(id, record.clone()).await?;
        debug!(%id, "city replaced");

        let normalized = normalize_city(id, &record);
        self.with_cached_city(id, |cached| *cached = normalized)
            .await;
        Ok(())
    }

    /// Delete a city and, with it, its embedded reviews
    ///
    /// Irreversible. Idempotent at the store: deleting an absent id
    /// succeeds. The city's country disappears from the index when its
    /// last city goes.
    pub async fn delete_city(&self, id: &str) -> CatalogResult<()> {
        self.store.delete(id).await?;
        info!(%id, "city deleted");

        let mut guard = self.cache.write().await;
        if let Some(snapshot) = guard.as_mut() {
            snapshot.cities.retain(|city| city.id != id);
        }
        Ok(())
    }

    /// Add a review to a city, newest first
    ///
    /// Prepends to the current remote review list and writes the whole
    /// sequence back (see the module docs for the race this carries).
    /// Returns the updated list as confirmed.
    pub async fn add_review(&self, id: &str, review: NewReview) -> CatalogResult<Vec<Review>> {
        let mut reviews = self.fetch_reviews(id).await?;
        reviews.insert(0, review.into());

        self.write_reviews_back(id, &reviews).await?;
        Ok(reviews)
    }

    /// Delete a review by its position in the current sequence
    ///
    /// Reviews have no identity of their own, so position in the fetched
    /// sequence is the only address. An out-of-range index is rejected
    /// before any write.
    pub async fn delete_review(&self, id: &str, index: usize) -> CatalogResult<Vec<Review>> {
        let mut reviews = self.fetch_reviews(id).await?;

        if index >= reviews.len() {
            return Err(CatalogError::Validation(format!(
                "review index {index} out of range ({} reviews)",
                reviews.len()
            )));
        }

        reviews.remove(index);
        self.write_reviews_back(id, &reviews).await?;
        Ok(reviews)
    }

    /// Current remote review list for a city
    async fn fetch_reviews(&self, id: &str) -> CatalogResult<Vec<Review>> {
        match self.store.get(id).await? {
            Some(record) => Ok(normalize_city(id, &record).reviews),
            None => Err(CatalogError::NotFound { id: id.to_string() }),
        }
    }

    /// Write a city's entire review sequence back as one field update
    ///
    /// This is the single read-modify-write choke point for embedded
    /// reviews. The write is unconditional: a writer whose snapshot went
    /// stale between read and write silently discards the other writer's
    /// change (lost update). Kept in one place so a future conditional
    /// write only needs to change this function.
    async fn write_reviews_back(&self, id: &str, reviews: &[Review]) -> CatalogResult<()> {
        let payload = json!({ "reviews": reviews });
        self.store.patch(id, payload).await?;
        debug!(%id, count = reviews.len(), "review list written back");

        let confirmed = reviews.to_vec();
        self.with_cached_city(id, move |city| city.reviews = confirmed)
            .await;
        Ok(())
    }

    async fn require_exists(&self, id: &str) -> CatalogResult<()> {
        match self.store.get(id).await? {
            Some(_) => Ok(()),
            None => Err(CatalogError::NotFound { id: id.to_string() }),
        }
    }
}

/// Merge an update into a cached normalized city
///
/// Keeps the canonical invariants the normalizer guarantees: blank gallery
/// entries dropped, nameless POIs dropped, strings already trimmed by the
/// `CityUpdate` setters.
fn apply_update(city: &mut City, update: &CityUpdate) {
    if let Some(name) = &update.name {
        city.name = name.clone();
    }
    if let Some(country) = &update.country {
        city.country = country.clone();
    }
    if let Some(description) = &update.description {
        city.description = description.clone();
    }
    if let Some(main_image) = &update.main_image {
        city.main_image = main_image.clone();
    }
    if let Some(image) = &update.image {
        city.image = image.clone();
    }
    if let Some(images) = &update.images {
        city.images = images
            .iter()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect();
    }
    if let Some(pois) = &update.points_of_interest {
        city.points_of_interest = pois
            .iter()
            .map(|poi| PointOfInterest {
                name: poi.name.trim().to_string(),
                url: poi.url.trim().to_string(),
            })
            .filter(|poi| !poi.name.is_empty())
            .collect();
    }
    if let Some(rating) = update.average_rating {
        city.average_rating = Some(rating);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_update_keeps_canonical_invariants() {
        let mut city = normalize_city("c1", &json!({"name": "Madrid", "country": "Spain"}));

        let update = CityUpdate::default()
            .description("new text")
            .images(vec!["  ".into(), "https://a".into()])
            .points_of_interest(vec![
                PointOfInterest::named(" Prado "),
                PointOfInterest::named("  "),
            ]);

        apply_update(&mut city, &update);

        assert_eq!(city.description, "new text");
        assert_eq!(city.images, vec!["https://a"]);
        assert_eq!(city.points_of_interest.len(), 1);
        assert_eq!(city.points_of_interest[0].name, "Prado");
        // untouched fields survive
        assert_eq!(city.name, "Madrid");
    }
}
