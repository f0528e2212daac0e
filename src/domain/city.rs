// Copyright (c) 2025 - Cowboy AI, Inc.
//! Canonical city model and write payloads
//!
//! `City` is the normalized read-side shape: every field present, every
//! string trimmed, every sequence non-null. Raw remote records only become
//! `City` values through `domain::normalize`; nothing else in the crate
//! touches the loose remote shape.
//!
//! `NewCity`, `CityUpdate` and `NewReview` are the write-side payloads.
//! They validate at construction, so a malformed mutation is rejected
//! before any network call.

use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, CatalogResult};

/// A named sub-location of a city, optionally with an image URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Display name
    pub name: String,

    /// Image URL, empty when the POI has no image
    #[serde(default)]
    pub url: String,
}

impl PointOfInterest {
    /// Create a POI with a name and no image
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
        }
    }
}

/// A review embedded in a city record
///
/// Reviews have no identity of their own; they live and die with their
/// city and are addressed by position. `rating` is `None` when the stored
/// value did not coerce to a finite number; such reviews are retained for
/// display but excluded from statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer display name, may be empty ("Anonymous" is a display concern)
    #[serde(default)]
    pub user: String,

    /// Review text
    #[serde(default)]
    pub comment: String,

    /// Coerced rating, `None` when the stored value was not a finite number
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Canonical city record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Store-assigned opaque identifier, immutable
    pub id: String,

    /// City name
    pub name: String,

    /// Free-text country string; also the grouping key for the country index
    pub country: String,

    /// Description, empty when absent
    #[serde(default)]
    pub description: String,

    /// Preferred main image URL, empty when absent
    #[serde(default)]
    pub main_image: String,

    /// Legacy single image URL, empty when absent
    #[serde(default)]
    pub image: String,

    /// Gallery image URLs, blank entries already dropped
    #[serde(default)]
    pub images: Vec<String>,

    /// Points of interest in display order
    #[serde(default)]
    pub points_of_interest: Vec<PointOfInterest>,

    /// Reviews in display order (newest first by write policy)
    #[serde(default)]
    pub reviews: Vec<Review>,

    /// Author-supplied rating from creation time
    ///
    /// Distinct from the computed review mean; see `projection::ReviewStats`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

impl City {
    /// Google Maps search URL for this city
    pub fn maps_search_url(&self) -> String {
        let query = format!("{}, {}", self.name, self.country);
        format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(&query)
        )
    }
}

/// A country derived from the city collection
///
/// Never stored: entries appear and disappear as a side effect of city
/// creation and deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Exact (trimmed, case-preserving) country string
    pub name: String,

    /// Number of cities grouped under this string
    pub city_count: usize,
}

/// Payload for creating a city
///
/// # Invariants
/// - `name` is non-empty after trim
/// - `country` is non-empty after trim
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCity {
    /// City name, required
    pub name: String,

    /// Country string, required
    pub country: String,

    /// Description, sent even when empty
    pub description: String,

    /// Single image URL
    pub image: String,

    /// Gallery image URLs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    /// Points of interest; nameless entries are dropped at construction
    pub points_of_interest: Vec<PointOfInterest>,

    /// Author-supplied rating, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

impl NewCity {
    /// Create a city payload with the two required fields
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> CatalogResult<Self> {
        let name = name.into().trim().to_string();
        let country = country.into().trim().to_string();

        if name.is_empty() {
            return Err(CatalogError::Validation("city name is required".into()));
        }
        if country.is_empty() {
            return Err(CatalogError::Validation("country is required".into()));
        }

        Ok(Self {
            name,
            country,
            description: String::new(),
            image: String::new(),
            images: Vec::new(),
            points_of_interest: Vec::new(),
            average_rating: None,
        })
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into().trim().to_string();
        self
    }

    /// Set the single image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into().trim().to_string();
        self
    }

    /// Set the gallery, dropping blank entries
    pub fn with_images(mut self, urls: impl IntoIterator<Item = String>) -> Self {
        self.images = urls
            .into_iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();
        self
    }

    /// Set the points of interest, dropping entries without a name
    pub fn with_points_of_interest(
        mut self,
        pois: impl IntoIterator<Item = PointOfInterest>,
    ) -> Self {
        self.points_of_interest = pois
            .into_iter()
            .map(|poi| PointOfInterest {
                name: poi.name.trim().to_string(),
                url: poi.url.trim().to_string(),
            })
            .filter(|poi| !poi.name.is_empty())
            .collect();
        self
    }

    /// Set the author-supplied rating
    pub fn with_average_rating(mut self, rating: f64) -> Self {
        self.average_rating = Some(rating);
        self
    }
}

/// Partial update payload for a city
///
/// `None` fields are omitted from the serialized body, so the store's
/// partial-merge semantics leave them untouched server-side. An update with
/// every field `None` is rejected by the coordinator before the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New country string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New preferred main image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,

    /// New single image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// New gallery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    /// New points of interest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_of_interest: Option<Vec<PointOfInterest>>,

    /// New author-supplied rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

impl CityUpdate {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Set the name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into().trim().to_string());
        self
    }

    /// Set the country
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into().trim().to_string());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into().trim().to_string());
        self
    }

    /// Set the preferred main image URL
    pub fn main_image(mut self, url: impl Into<String>) -> Self {
        self.main_image = Some(url.into().trim().to_string());
        self
    }

    /// Set the single image URL
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into().trim().to_string());
        self
    }

    /// Set the gallery
    pub fn images(mut self, urls: Vec<String>) -> Self {
        self.images = Some(urls);
        self
    }

    /// Set the points of interest
    pub fn points_of_interest(mut self, pois: Vec<PointOfInterest>) -> Self {
        self.points_of_interest = Some(pois);
        self
    }

    /// Set the author-supplied rating
    pub fn average_rating(mut self, rating: f64) -> Self {
        self.average_rating = Some(rating);
        self
    }
}

/// Bounds for an incoming review rating
pub const RATING_MIN: f64 = 1.0;

/// Upper rating bound
pub const RATING_MAX: f64 = 5.0;

/// Input payload for adding a review
///
/// # Invariants
/// - `user` and `comment` are non-empty after trim
/// - `rating` is finite, clamped into `[RATING_MIN, RATING_MAX]`
///
/// The clamp is an input-boundary guarantee only; aggregation still
/// distrusts ratings it reads back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    user: String,
    comment: String,
    rating: f64,
}

impl NewReview {
    /// Create a validated review payload
    pub fn new(
        user: impl Into<String>,
        comment: impl Into<String>,
        rating: f64,
    ) -> CatalogResult<Self> {
        let user = user.into().trim().to_string();
        let comment = comment.into().trim().to_string();

        if user.is_empty() {
            return Err(CatalogError::Validation("review user is required".into()));
        }
        if comment.is_empty() {
            return Err(CatalogError::Validation(
                "review comment is required".into(),
            ));
        }
        if !rating.is_finite() {
            return Err(CatalogError::Validation(
                "review rating must be a finite number".into(),
            ));
        }

        Ok(Self {
            user,
            comment,
            rating: rating.clamp(RATING_MIN, RATING_MAX),
        })
    }

    /// Reviewer name
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Review text
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Clamped rating
    pub fn rating(&self) -> f64 {
        self.rating
    }
}

impl From<NewReview> for Review {
    fn from(value: NewReview) -> Self {
        Review {
            user: value.user,
            comment: value.comment,
            rating: Some(value.rating),
        }
    }
}
