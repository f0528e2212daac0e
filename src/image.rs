// Copyright (c) 2025 - Cowboy AI, Inc.
//! Main image resolution
//!
//! Picks the image a consumer should display for a city, and tracks the
//! small per-view state machine around it: runtime load failures swap to
//! the placeholder exactly once, and gallery/POI selections re-point the
//! displayed image without being persisted.
//!
//! # States
//!
//! - Showing(url): a concrete URL is displayed
//! - Placeholder: the consumer substitutes its static placeholder asset
//!
//! # Inputs
//!
//! - `pick(url)`: Showing/Placeholder → Showing(url), blank urls ignored
//! - `on_load_error()`: Showing → Placeholder; Placeholder → Placeholder
//! - `reset(city)`: either state → the resolver's default for that city

use crate::domain::City;

/// Resolve the main image for a city
///
/// Ordered precedence, first non-empty wins: the `mainImage` field, then
/// the legacy `image` field, then the first non-blank gallery entry.
/// `None` is the no-image sentinel; consumers substitute their placeholder
/// asset and must never emit a broken reference.
pub fn resolve_main_image(city: &City) -> Option<&str> {
    if !city.main_image.is_empty() {
        return Some(&city.main_image);
    }
    if !city.image.is_empty() {
        return Some(&city.image);
    }
    // normalization already dropped blank entries, so first is best
    city.images.first().map(String::as_str)
}

/// Per-view displayed-image state
///
/// Owned by the consumer of one city view, seeded from the resolver, and
/// thrown away (or `reset`) when the city is fetched again. This is local
/// UI state; nothing here is written back to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainImageState {
    current: Option<String>,
}

impl MainImageState {
    /// Seed from the resolved default for a city
    pub fn seed(city: &City) -> Self {
        Self {
            current: resolve_main_image(city).map(str::to_string),
        }
    }

    /// URL currently displayed, `None` when the placeholder is showing
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Re-point the displayed image to a gallery or POI URL
    ///
    /// Blank input is ignored, matching the selection surfaces that only
    /// offer non-empty URLs.
    pub fn pick(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.current = Some(url.to_string());
        }
    }

    /// Record a load failure for the displayed image
    ///
    /// Swaps to the placeholder and reports `true` the first time; once the
    /// placeholder is showing, further failures are no-ops so a broken
    /// placeholder asset cannot loop.
    pub fn on_load_error(&mut self) -> bool {
        if self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Reset to the resolved default after the city is fetched again
    pub fn reset(&mut self, city: &City) {
        *self = Self::seed(city);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn city_with(main_image: &str, image: &str, images: &[&str]) -> City {
        City {
            id: "c1".into(),
            name: "Madrid".into(),
            country: "Spain".into(),
            description: String::new(),
            main_image: main_image.into(),
            image: image.into(),
            images: images.iter().map(|s| s.to_string()).collect(),
            points_of_interest: vec![],
            reviews: vec![],
            average_rating: None,
        }
    }

    #[test_case("A", "B", &["C"], Some("A") ; "mainImage wins")]
    #[test_case("", "B", &["C"], Some("B") ; "legacy image second")]
    #[test_case("", "", &["C"], Some("C") ; "first gallery entry third")]
    #[test_case("", "", &[], None ; "nothing resolves to the sentinel")]
    fn test_resolution_precedence(
        main_image: &str,
        image: &str,
        images: &[&str],
        expected: Option<&str>,
    ) {
        let city = city_with(main_image, image, images);
        assert_eq!(resolve_main_image(&city), expected);
    }

    #[test]
    fn test_seed_and_pick() {
        let city = city_with("", "B", &["C"]);
        let mut state = MainImageState::seed(&city);
        assert_eq!(state.current(), Some("B"));

        state.pick("C");
        assert_eq!(state.current(), Some("C"));

        // blank selection is ignored
        state.pick("   ");
        assert_eq!(state.current(), Some("C"));
    }

    #[test]
    fn test_load_error_swaps_exactly_once() {
        let city = city_with("A", "", &[]);
        let mut state = MainImageState::seed(&city);

        assert!(state.on_load_error());
        assert_eq!(state.current(), None);

        // placeholder failures must not loop
        assert!(!state.on_load_error());
        assert!(!state.on_load_error());
    }

    #[test]
    fn test_pick_recovers_from_placeholder() {
        let city = city_with("A", "", &[]);
        let mut state = MainImageState::seed(&city);

        state.on_load_error();
        state.pick("https://new");
        assert_eq!(state.current(), Some("https://new"));
        assert!(state.on_load_error());
    }

    #[test]
    fn test_reset_reseeds_from_resolver() {
        let city = city_with("A", "", &[]);
        let mut state = MainImageState::seed(&city);
        state.pick("https://other");

        state.reset(&city);
        assert_eq!(state.current(), Some("A"));
    }
}
