// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog service layer
//!
//! One service owns both sides of the catalog:
//!
//! - the read facade (`catalog`): list countries, list/filter cities, get a
//!   city, all served from one fetched-and-normalized snapshot
//! - the mutation coordinator (`mutations`): confirm-then-mutate writes
//!   that keep that snapshot consistent with the remote store
//!
//! # Consistency model
//!
//! ```text
//! reads:     store.list() → normalize → snapshot → projections
//! mutations: validate → remote write → await confirmation → patch snapshot
//! ```
//!
//! The snapshot changes only after a remote write confirms; a failed write
//! leaves local state untouched and surfaces a typed error. Overlapping
//! fetches are serialized by ticket so a slow, stale response can never
//! clobber a newer snapshot.

mod catalog;
mod mutations;

pub use catalog::CatalogService;
