// Copyright (c) 2025 - Cowboy AI, Inc.
//! Canonical domain model
//!
//! Value types for the catalog plus the single normalization boundary that
//! turns loose remote records into them.

mod city;
pub mod normalize;

pub use city::{
    City, CityUpdate, Country, NewCity, NewReview, PointOfInterest, Review, RATING_MAX,
    RATING_MIN,
};
