// Copyright (c) 2025 - Cowboy AI, Inc.
//! Field normalization boundary
//!
//! The remote collection enforces no schema: records arrive with missing
//! fields, wrong types, and legacy spellings accumulated over the app's
//! history (`image` vs `mainImage`, `averagerating` vs `averageRating`,
//! bare-string points of interest). Every raw record crosses this boundary
//! exactly once and comes out as a canonical `City`; legacy names never
//! leak past it.
//!
//! Normalization is pure and total. Malformed input degrades to a
//! documented default, it never errors:
//! - non-string scalars become the empty string, strings are trimmed
//! - non-array sequences become empty, blank gallery entries are dropped
//! - bare-string POIs are lifted to `{name, url: ""}`, nameless ones dropped
//! - reviews keep their slot even with a broken rating (`rating: None`)

use serde_json::Value;

use super::city::{City, PointOfInterest, Review};

/// Coerce a raw JSON value to a finite f64
///
/// Numbers pass through when finite. Strings are trimmed and parsed.
/// Everything else (null, bool, array, object, empty or unparseable
/// string, NaN, infinities) yields `None` rather than a poisoned value.
pub fn coerce_finite(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

/// Trimmed string, or empty for anything that is not a string
fn norm_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

/// Gallery list: non-array becomes empty, blank entries are dropped
fn norm_images(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => {
                    let trimmed = s.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_string())
                }
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Points of interest, lifting the legacy bare-string shorthand
fn norm_points_of_interest(value: Option<&Value>) -> Vec<PointOfInterest> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(name) => {
                    let name = name.trim();
                    (!name.is_empty()).then(|| PointOfInterest::named(name))
                }
                Value::Object(fields) => {
                    let name = norm_string(fields.get("name"));
                    if name.is_empty() {
                        return None;
                    }
                    Some(PointOfInterest {
                        name,
                        url: norm_string(fields.get("url")),
                    })
                }
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Reviews: retained even when user/comment/rating are broken
///
/// Only entries that are not objects at all are dropped. A review whose
/// rating does not coerce keeps its slot with `rating: None`; the
/// aggregation layer excludes it from the mean while the count still
/// reflects it.
fn norm_reviews(value: Option<&Value>) -> Vec<Review> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(fields) => Some(Review {
                    user: norm_string(fields.get("user")),
                    comment: norm_string(fields.get("comment")),
                    rating: fields.get("rating").and_then(coerce_finite),
                }),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Normalize one raw record into a canonical `City`
///
/// `id` is the collection key; an `id` field inside the record body is
/// ignored. A record that is not even an object degrades to an empty city
/// carrying only the id.
pub fn normalize_city(id: &str, raw: &Value) -> City {
    let fields = match raw {
        Value::Object(fields) => fields,
        _ => {
            return City {
                id: id.to_string(),
                name: String::new(),
                country: String::new(),
                description: String::new(),
                main_image: String::new(),
                image: String::new(),
                images: Vec::new(),
                points_of_interest: Vec::new(),
                reviews: Vec::new(),
                average_rating: None,
            }
        }
    };

    // Legacy spelling fallback, resolved here and nowhere else
    let average_rating = fields
        .get("averageRating")
        .or_else(|| fields.get("averagerating"))
        .and_then(coerce_finite);

    City {
        id: id.to_string(),
        name: norm_string(fields.get("name")),
        country: norm_string(fields.get("country")),
        description: norm_string(fields.get("description")),
        main_image: norm_string(fields.get("mainImage")),
        image: norm_string(fields.get("image")),
        images: norm_images(fields.get("images")),
        points_of_interest: norm_points_of_interest(fields.get("pointsOfInterest")),
        reviews: norm_reviews(fields.get("reviews")),
        average_rating,
    }
}
