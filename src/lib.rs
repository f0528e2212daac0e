//! Catalog aggregation and consistency layer for the CityVerse travel journal
//!
//! Derives a normalized, query-able catalog (countries with counts, cities
//! with resolved images, review statistics) from a loosely-typed remote
//! document collection, and keeps the client's local view consistent with
//! that store across concurrent edits.
//!
//! ```text
//! HttpRecordStore → normalize → {CountryIndex, ReviewStats, images} → CatalogService
//!                                                  mutations ↑
//! ```
//!
//! Rendering, routing, auth acquisition, and image uploading are external
//! collaborators; this crate starts at the wire and stops at normalized
//! values.

pub mod config;
pub mod domain;
pub mod errors;
pub mod image;
pub mod projection;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use config::StoreConfig;
pub use domain::{
    City, CityUpdate, Country, NewCity, NewReview, PointOfInterest, Review,
};
pub use errors::{CatalogError, CatalogResult};
pub use image::{resolve_main_image, MainImageState};
pub use projection::{CountryIndex, ReviewStats};
pub use service::CatalogService;
pub use store::{HttpRecordStore, MemoryRecordStore, RawRecords, RecordStore};
