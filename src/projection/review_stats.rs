// Copyright (c) 2025 - Cowboy AI, Inc.
//! Review statistics projection

use serde::Serialize;

use crate::domain::Review;

/// Computed count and mean rating for one city's reviews
///
/// Always recomputed from the current review list, never persisted; the
/// author-supplied `averageRating` on the record is a different value and
/// is not consulted here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReviewStats {
    /// Total retained reviews, including those whose rating was unusable
    pub count: usize,

    /// Mean of the valid ratings, `None` when there is none
    ///
    /// `None` rather than 0.0: a city with only broken ratings has no
    /// rating, not a zero rating.
    pub mean: Option<f64>,
}

impl ReviewStats {
    /// Compute statistics over a normalized review list
    ///
    /// A rating counts toward the mean only when it is a finite number
    /// greater than zero. Zero and negative values are data-entry defects
    /// from the unvalidated store and are excluded; the review itself still
    /// counts toward `count`. The finiteness check repeats the normalizer's
    /// guarantee because stored data is never trusted at this layer.
    pub fn compute(reviews: &[Review]) -> Self {
        let mut sum = 0.0;
        let mut valid = 0usize;

        for review in reviews {
            if let Some(rating) = review.rating {
                if rating.is_finite() && rating > 0.0 {
                    sum += rating;
                    valid += 1;
                }
            }
        }

        Self {
            count: reviews.len(),
            mean: (valid > 0).then(|| sum / valid as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: Option<f64>) -> Review {
        Review {
            user: "u".into(),
            comment: "c".into(),
            rating,
        }
    }

    #[test]
    fn test_mean_over_valid_ratings() {
        let reviews = vec![review(Some(5.0)), review(Some(3.0))];
        let stats = ReviewStats::compute(&reviews);

        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, Some(4.0));
    }

    #[test]
    fn test_invalid_ratings_excluded_from_mean_but_counted() {
        let reviews = vec![
            review(Some(4.0)),
            review(None),
            review(Some(0.0)),
            review(Some(-1.0)),
        ];
        let stats = ReviewStats::compute(&reviews);

        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, Some(4.0));
    }

    #[test]
    fn test_no_valid_rating_yields_none_not_zero() {
        let reviews = vec![review(None), review(Some(0.0))];
        let stats = ReviewStats::compute(&reviews);

        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, None);
    }

    #[test]
    fn test_empty_reviews() {
        let stats = ReviewStats::compute(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, None);
    }
}
