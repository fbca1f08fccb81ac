//! Bounded review score.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The score is below zero or above the five-star maximum.
    #[error("rating must be between 0 and 5, got {score}")]
    OutOfRange {
        /// The rejected score.
        score: Decimal,
    },
}

/// A review score on the usual five-star scale.
///
/// Backed by [`Decimal`] rather than a float so ratings are totally
/// ordered, which the rating sort relies on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    /// Maximum score.
    pub const MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    /// Create a rating, rejecting scores outside `0..=5`.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] for negative scores or scores
    /// above five.
    pub fn new(score: Decimal) -> Result<Self, RatingError> {
        if score < Decimal::ZERO || score > Self::MAX {
            return Err(RatingError::OutOfRange { score });
        }
        Ok(Self(score))
    }

    /// Create a rating from tenths of a star (e.g. `45` is `4.5`).
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if the score exceeds five stars.
    pub fn from_tenths(tenths: u32) -> Result<Self, RatingError> {
        Self::new(Decimal::new(i64::from(tenths), 1))
    }

    /// The underlying score.
    #[must_use]
    pub const fn score(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = RatingError;

    fn try_from(score: Decimal) -> Result<Self, Self::Error> {
        Self::new(score)
    }
}

impl From<Rating> for Decimal {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
