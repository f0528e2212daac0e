// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test fixtures for cityverse-catalog
#![allow(dead_code)] // each test binary uses its own subset
//!
//! Deterministic raw records exercising the shapes the remote store
//! actually produces: current records, legacy spellings, and plain
//! garbage. Fixtures are the only place raw records are constructed;
//! tests read them from here so every suite sees the same data.

use cityverse_catalog::{MemoryRecordStore, RawRecords};
use serde_json::{json, Value};

pub const MADRID_ID: &str = "c-madrid";
pub const LYON_ID: &str = "c-lyon";
pub const LEGACY_ID: &str = "c-legacy";
pub const BLANK_COUNTRY_ID: &str = "c-blank";

/// Well-formed current-shape record with two rated reviews (5 and 3)
pub fn madrid_raw() -> Value {
    json!({
        "name": "Madrid",
        "country": "Spain",
        "description": "Tapas, museums and long evenings.",
        "mainImage": "https://img/madrid-main.jpg",
        "image": "https://img/madrid.jpg",
        "images": ["https://img/madrid-1.jpg", "", "https://img/madrid-2.jpg"],
        "pointsOfInterest": [
            {"name": "Prado", "url": "https://img/prado.jpg"},
            {"name": "Retiro", "url": ""}
        ],
        "reviews": [
            {"user": "A", "comment": "Loved it", "rating": 5},
            {"user": "B", "comment": "Nice enough", "rating": 3}
        ],
        "averageRating": 4.5
    })
}

/// Record with no optional fields at all
pub fn lyon_raw() -> Value {
    json!({
        "name": "Lyon",
        "country": "France"
    })
}

/// Legacy-shape record: old rating spelling, bare-string POIs, garbage
/// review ratings, wrong-typed fields
pub fn legacy_raw() -> Value {
    json!({
        "name": "  Tokio ",
        "country": "Japan",
        "description": null,
        "image": "https://img/tokio.jpg",
        "images": "not-an-array",
        "pointsOfInterest": ["Shibuya", {"url": "https://img/nameless.jpg"}, 42],
        "reviews": [
            {"user": "C", "comment": "Great", "rating": "5"},
            {"user": "D", "comment": "??", "rating": "abc"},
            {"comment": "who wrote this", "rating": 0},
            {"user": "E", "comment": "negative", "rating": -1}
        ],
        "averagerating": "4.2"
    })
}

/// Record whose country normalizes to blank; excluded from the index
pub fn blank_country_raw() -> Value {
    json!({
        "name": "Nowhere",
        "country": "   "
    })
}

/// Case/whitespace country variants for the grouping-limitation tests
pub fn spain_variants() -> Vec<(String, Value)> {
    vec![
        (
            "v-exact".to_string(),
            json!({"name": "Sevilla", "country": "Spain"}),
        ),
        (
            "v-lower".to_string(),
            json!({"name": "Valencia", "country": "spain"}),
        ),
        (
            "v-padded".to_string(),
            json!({"name": "Bilbao", "country": " Spain "}),
        ),
    ]
}

/// The standard four-record collection used across suites
pub fn catalog_records() -> RawRecords {
    let mut records = RawRecords::new();
    records.insert(MADRID_ID.to_string(), madrid_raw());
    records.insert(LYON_ID.to_string(), lyon_raw());
    records.insert(LEGACY_ID.to_string(), legacy_raw());
    records.insert(BLANK_COUNTRY_ID.to_string(), blank_country_raw());
    records
}

/// A memory store seeded with the standard collection
pub fn seeded_store() -> MemoryRecordStore {
    MemoryRecordStore::seeded(catalog_records())
}
