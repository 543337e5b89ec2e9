//! # Car Number
//!
//! Validated vehicle identifier.
//!
//! A [`CarNumber`] is exactly [`CAR_NUMBER_LEN`] characters long and is not
//! blank. The value is kept verbatim: no trimming, no case folding.
//!
//! # Examples
//!
//! ```
//! use taxi_income::domain::value_objects::CarNumber;
//!
//! let car = CarNumber::new("AB12345").unwrap();
//! assert_eq!(car.as_str(), "AB12345");
//!
//! assert!(CarNumber::new("AB1234").is_err());
//! assert!(CarNumber::new("       ").is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Required length of a car number, in characters.
pub const CAR_NUMBER_LEN: usize = 7;

/// A vehicle identifier of exactly seven characters.
///
/// Length is counted in Unicode scalar values, so `"ÄB12345"` is seven
/// characters even though it is eight bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CarNumber(String);

impl CarNumber {
    /// Creates a new car number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the value is empty,
    /// whitespace only, or not exactly seven characters long.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "car_number",
                "must be a non-empty string of exactly 7 characters",
            ));
        }

        let len = value.chars().count();
        if len != CAR_NUMBER_LEN {
            return Err(DomainError::invalid_argument(
                "car_number",
                format!("must be exactly {CAR_NUMBER_LEN} characters, got {len}"),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the car number and returns the inner string.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CarNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CarNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CarNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CarNumber {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CarNumber> for String {
    fn from(car: CarNumber) -> Self {
        car.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn accepts_seven_characters() {
            let car = CarNumber::new("AB12345").unwrap();
            assert_eq!(car.as_str(), "AB12345");
        }

        #[test]
        fn keeps_value_verbatim() {
            let car = CarNumber::new("ab 12cd").unwrap();
            assert_eq!(car.as_str(), "ab 12cd");
        }

        #[test]
        fn counts_characters_not_bytes() {
            let car = CarNumber::new("ÄB12345").unwrap();
            assert_eq!(car.as_str().chars().count(), CAR_NUMBER_LEN);
        }

        #[test]
        fn rejects_empty() {
            let err = CarNumber::new("").unwrap_err();
            assert!(err.is_invalid_argument());
        }

        #[test]
        fn rejects_whitespace_only() {
            let err = CarNumber::new("       ").unwrap_err();
            assert!(err.is_invalid_argument());
        }

        #[test]
        fn rejects_too_short() {
            let err = CarNumber::new("AB1234").unwrap_err();
            assert!(err.is_invalid_argument());
            assert!(err.to_string().contains("got 6"));
        }

        #[test]
        fn rejects_too_long() {
            let err = CarNumber::new("AB123456").unwrap_err();
            assert!(err.is_invalid_argument());
            assert!(err.to_string().contains("got 8"));
        }
    }

    mod conversions {
        use super::*;

        #[test]
        fn display_matches_inner() {
            let car = CarNumber::new("CD23456").unwrap();
            assert_eq!(car.to_string(), "CD23456");
        }

        #[test]
        fn try_from_str() {
            assert!(CarNumber::try_from("EF34567").is_ok());
            assert!(CarNumber::try_from("EF").is_err());
        }

        #[test]
        fn into_string() {
            let s: String = CarNumber::new("EF34567").unwrap().into();
            assert_eq!(s, "EF34567");
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn serializes_as_plain_string() {
            let car = CarNumber::new("AB12345").unwrap();
            assert_eq!(serde_json::to_string(&car).unwrap(), "\"AB12345\"");
        }

        #[test]
        fn deserialize_validates() {
            let ok: CarNumber = serde_json::from_str("\"AB12345\"").unwrap();
            assert_eq!(ok.as_str(), "AB12345");
            assert!(serde_json::from_str::<CarNumber>("\"AB1\"").is_err());
        }
    }
}
