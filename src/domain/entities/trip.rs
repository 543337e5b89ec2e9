//! # Trip
//!
//! A single validated taxi fare.
//!
//! Construction validates both fields, so an invalid [`Trip`] can never be
//! observed. Deserialization goes through the same checks.
//!
//! # Examples
//!
//! ```
//! use taxi_income::domain::entities::Trip;
//! use rust_decimal::Decimal;
//!
//! let trip = Trip::new("AB12345", Decimal::new(1005, 1)).unwrap();
//! assert_eq!(trip.car_number().as_str(), "AB12345");
//! assert_eq!(trip.trip_cost(), Decimal::new(1005, 1));
//!
//! assert!(Trip::new("AB1234", Decimal::new(50, 0)).unwrap_err().is_invalid_argument());
//! assert!(Trip::new("AB12345", Decimal::ZERO).unwrap_err().is_out_of_range());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::CarNumber;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recorded taxi trip: which car drove it and what it cost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TripRecord")]
pub struct Trip {
    /// Vehicle that performed the trip.
    car_number: CarNumber,
    /// Fare charged, strictly positive.
    trip_cost: Decimal,
}

impl Trip {
    /// Creates a new trip.
    ///
    /// The car number is checked before the cost.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidArgument` if the car number is blank or not
    ///   exactly seven characters
    /// - `DomainError::OutOfRange` if the cost is zero or negative
    pub fn new(car_number: impl Into<String>, trip_cost: Decimal) -> DomainResult<Self> {
        let car_number = CarNumber::new(car_number)?;
        Self::with_car(car_number, trip_cost)
    }

    /// Creates a new trip for an already validated car number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if the cost is zero or negative.
    pub fn with_car(car_number: CarNumber, trip_cost: Decimal) -> DomainResult<Self> {
        if trip_cost <= Decimal::ZERO {
            return Err(DomainError::out_of_range(
                "trip_cost",
                trip_cost,
                "trip cost must be a positive decimal number",
            ));
        }

        Ok(Self {
            car_number,
            trip_cost,
        })
    }

    /// Returns the car number.
    #[inline]
    #[must_use]
    pub fn car_number(&self) -> &CarNumber {
        &self.car_number
    }

    /// Returns the trip cost.
    #[inline]
    #[must_use]
    pub const fn trip_cost(&self) -> Decimal {
        self.trip_cost
    }

    /// Splits the trip into its car number and cost.
    #[must_use]
    pub fn into_parts(self) -> (CarNumber, Decimal) {
        (self.car_number, self.trip_cost)
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.car_number, self.trip_cost)
    }
}

/// Unvalidated wire shape of a [`Trip`].
#[derive(Deserialize)]
struct TripRecord {
    car_number: String,
    trip_cost: Decimal,
}

impl TryFrom<TripRecord> for Trip {
    type Error = DomainError;

    fn try_from(record: TripRecord) -> Result<Self, Self::Error> {
        Self::new(record.car_number, record.trip_cost)
    }
}
