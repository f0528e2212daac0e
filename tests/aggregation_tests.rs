// Copyright (c) 2025 - Cowboy AI, Inc.
//! Aggregation engine tests over the shared fixtures

mod fixtures;

use cityverse_catalog::domain::normalize::normalize_city;
use cityverse_catalog::{City, CountryIndex, ReviewStats};
use pretty_assertions::assert_eq;

fn normalized_catalog() -> Vec<City> {
    fixtures::catalog_records()
        .iter()
        .map(|(id, raw)| normalize_city(id, raw))
        .collect()
}

#[test]
fn country_index_skips_blank_and_sorts() {
    let cities = normalized_catalog();
    let index = CountryIndex::build(&cities);
    let entries = index.entries();

    // the blank-country record is excluded entirely
    let names: Vec<&str> = entries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["France", "Japan", "Spain"]);
    assert_eq!(index.city_count("Spain"), Some(1));
    assert_eq!(index.city_count("   "), None);
}

#[test]
fn country_index_is_idempotent_across_runs() {
    let cities = normalized_catalog();

    let first = CountryIndex::build(&cities);
    let second = CountryIndex::build(&cities);

    assert_eq!(first, second);
    assert_eq!(first.entries(), second.entries());
}

#[test]
fn case_variants_group_separately() {
    let cities: Vec<City> = fixtures::spain_variants()
        .iter()
        .map(|(id, raw)| normalize_city(id, raw))
        .collect();

    let index = CountryIndex::build(&cities);

    // " Spain " was trimmed at normalization and counts with "Spain";
    // the lowercase variant stays its own group
    assert_eq!(index.city_count("Spain"), Some(2));
    assert_eq!(index.city_count("spain"), Some(1));
}

#[test]
fn review_stats_exclude_unusable_ratings_from_mean_only() {
    let city = normalize_city(fixtures::LEGACY_ID, &fixtures::legacy_raw());
    let stats = ReviewStats::compute(&city.reviews);

    // "5" coerces; "abc", 0 and -1 do not count toward the mean
    assert_eq!(stats.count, 4);
    assert_eq!(stats.mean, Some(5.0));
}

#[test]
fn review_stats_mean_over_valid_ratings() {
    let city = normalize_city(fixtures::MADRID_ID, &fixtures::madrid_raw());
    let stats = ReviewStats::compute(&city.reviews);

    assert_eq!(stats.count, 2);
    assert_eq!(stats.mean, Some(4.0));
}

#[test]
fn no_reviews_means_no_rating() {
    let city = normalize_city(fixtures::LYON_ID, &fixtures::lyon_raw());
    let stats = ReviewStats::compute(&city.reviews);

    assert_eq!(stats.count, 0);
    assert_eq!(stats.mean, None);
}

#[test]
fn empty_collection_yields_empty_index() {
    let index = CountryIndex::build(std::iter::empty());
    assert!(index.entries().is_empty());
}
