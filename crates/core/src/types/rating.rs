//! Personal rating type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a rating value is outside the valid range.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("rating must be between {min} and {max}, got {value}", min = Rating::MIN, max = Rating::MAX)]
pub struct RatingError {
    /// The rejected value.
    pub value: u8,
}

/// A personal movie rating on a 1-5 scale.
///
/// Construction is validated; a `Rating` always holds a value in `1..=5`.
///
/// ## Examples
///
/// ```
/// use marquee_core::Rating;
///
/// assert!(Rating::new(4).is_ok());
/// assert!(Rating::new(0).is_err());
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest allowed rating.
    pub const MIN: u8 = 1;
    /// Highest allowed rating.
    pub const MAX: u8 = 5;

    /// Create a rating, validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError`] if `value` is not in `1..=5`.
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(RatingError { value })
        }
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        for value in 1..=5 {
            assert!(Rating::new(value).is_ok());
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Rating::new(0), Err(RatingError { value: 0 }));
        assert_eq!(Rating::new(6), Err(RatingError { value: 6 }));
        assert_eq!(Rating::new(255), Err(RatingError { value: 255 }));
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let parsed: Result<Rating, _> = serde_json::from_str("0");
        assert!(parsed.is_err());

        let parsed: Rating = serde_json::from_str("3").unwrap();
        assert_eq!(parsed.as_u8(), 3);
    }

    #[test]
    fn test_serde_serializes_as_number() {
        let rating = Rating::new(5).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "5");
    }

    #[test]
    fn test_error_display() {
        let err = Rating::new(9).unwrap_err();
        assert_eq!(err.to_string(), "rating must be between 1 and 5, got 9");
    }
}
