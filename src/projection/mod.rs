// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure catalog projections
//!
//! Both projections here are pure functions over the normalized city
//! collection: same input, same output, no I/O. Nothing in this module
//! holds state; the only cached value in the crate is the normalized
//! snapshot owned by the catalog service, and these are re-derived from it
//! on every call. The remote store has no subscription primitive, so there
//! is no incremental update path to maintain.

mod country_index;
mod review_stats;

pub use country_index::CountryIndex;
pub use review_stats::ReviewStats;
