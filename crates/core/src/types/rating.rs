//! Review rating on a five-star scale.

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("rating must be between {min} and {max} (got {value})", min = Rating::MIN, max = Rating::MAX)]
pub struct RatingError {
    /// The rejected value.
    pub value: i64,
}

/// Number of star indicators rendered for every review.
pub const STAR_COUNT: usize = 5;

/// A review rating in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    /// Lowest allowed rating.
    pub const MIN: u8 = 1;
    /// Highest allowed rating.
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError`] if `value` is out of range.
    pub fn new(value: i64) -> Result<Self, RatingError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(RatingError { value })
    }

    /// Create a rating, clamping any input into `1..=5`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        // The clamp keeps the value inside u8 range.
        Self(u8::try_from(clamped).unwrap_or(Self::MIN))
    }

    /// The numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Star indicators, `true` for filled.
    ///
    /// A rating of 3 yields three filled and two unfilled indicators.
    #[must_use]
    pub fn stars(self) -> [bool; STAR_COUNT] {
        let mut stars = [false; STAR_COUNT];
        for (index, star) in stars.iter_mut().enumerate() {
            *star = index < usize::from(self.0);
        }
        stars
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        Self::from(rating.0)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
