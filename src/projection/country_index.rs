// Copyright (c) 2025 - Cowboy AI, Inc.
//! Country index projection

use std::collections::BTreeMap;

use crate::domain::{City, Country};

/// Derived mapping from country name to city count
///
/// Countries are never stored; they exist only as this grouping of the
/// city collection. Records with a blank country string are excluded.
///
/// Grouping keys are the exact trimmed country strings: two records whose
/// countries differ only in case or interior whitespace form distinct
/// groups. Inherited behavior, kept deliberately; normalizing case here
/// would visibly regroup existing data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryIndex {
    // BTreeMap keeps entries in ordinal order, which is the emit order
    counts: BTreeMap<String, usize>,
}

impl CountryIndex {
    /// Build the index from a normalized city collection
    ///
    /// Idempotent: building twice from the same collection yields an
    /// identical index, order included.
    pub fn build<'a>(cities: impl IntoIterator<Item = &'a City>) -> Self {
        let mut counts = BTreeMap::new();

        for city in cities {
            if city.country.is_empty() {
                continue;
            }
            *counts.entry(city.country.clone()).or_insert(0) += 1;
        }

        Self { counts }
    }

    /// Number of distinct countries
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no city carried a usable country string
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// City count for an exact country string
    pub fn city_count(&self, country: &str) -> Option<usize> {
        self.counts.get(country).copied()
    }

    /// Entries sorted lexicographically by country name (ordinal)
    pub fn entries(&self) -> Vec<Country> {
        self.counts
            .iter()
            .map(|(name, count)| Country {
                name: name.clone(),
                city_count: *count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(id: &str, country: &str) -> City {
        City {
            id: id.into(),
            name: format!("city-{id}"),
            country: country.into(),
            description: String::new(),
            main_image: String::new(),
            image: String::new(),
            images: vec![],
            points_of_interest: vec![],
            reviews: vec![],
            average_rating: None,
        }
    }

    #[test]
    fn test_counts_and_ordinal_order() {
        let cities = vec![
            city("1", "Spain"),
            city("2", "Japan"),
            city("3", "Spain"),
            city("4", "Chile"),
        ];

        let index = CountryIndex::build(&cities);
        let entries = index.entries();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "Chile");
        assert_eq!(entries[1].name, "Japan");
        assert_eq!(entries[2].name, "Spain");
        assert_eq!(entries[2].city_count, 2);
    }

    #[test]
    fn test_blank_country_excluded() {
        let cities = vec![city("1", ""), city("2", "Peru")];
        let index = CountryIndex::build(&cities);

        assert_eq!(index.len(), 1);
        assert_eq!(index.city_count("Peru"), Some(1));
    }

    #[test]
    fn test_case_variants_are_distinct_groups() {
        let cities = vec![city("1", "Spain"), city("2", "spain")];
        let index = CountryIndex::build(&cities);

        assert_eq!(index.city_count("Spain"), Some(1));
        assert_eq!(index.city_count("spain"), Some(1));
    }

    #[test]
    fn test_build_is_idempotent() {
        let cities = vec![city("1", "Spain"), city("2", "Japan"), city("3", "spain")];

        let first = CountryIndex::build(&cities);
        let second = CountryIndex::build(&cities);

        assert_eq!(first, second);
        assert_eq!(first.entries(), second.entries());
    }

    #[test]
    fn test_empty_collection_yields_empty_index() {
        let index = CountryIndex::build(std::iter::empty());
        assert!(index.is_empty());
        assert!(index.entries().is_empty());
    }
}
