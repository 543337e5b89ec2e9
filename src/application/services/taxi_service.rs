//! # Taxi Service
//!
//! Records trips and aggregates income per car.
//!
//! [`TaxiService`] keeps trips in insertion order and groups them by exact
//! car number equality. Groups are reported in the order their car number
//! was first seen.
//!
//! # Examples
//!
//! ```
//! use taxi_income::application::services::TaxiService;
//! use taxi_income::domain::entities::Trip;
//! use rust_decimal::Decimal;
//!
//! let mut service = TaxiService::new();
//! service.add_trip(Trip::new("AB12345", Decimal::new(1005, 1)).unwrap());
//! service.add_trip(Trip::new("CD23456", Decimal::new(150, 0)).unwrap());
//! service.add_trip(Trip::new("AB12345", Decimal::new(120, 0)).unwrap());
//!
//! let incomes = service.calculate_total_income_by_car();
//! assert_eq!(incomes.len(), 2);
//! assert_eq!(incomes[0].car_number().as_str(), "AB12345");
//! assert_eq!(incomes[0].total(), Decimal::new(2205, 1));
//! ```

use crate::domain::entities::Trip;
use crate::domain::value_objects::CarNumber;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Total income of a single car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarIncome {
    /// Car the income belongs to.
    car_number: CarNumber,
    /// Sum of all trip costs for the car.
    total: Decimal,
    /// Number of trips that contributed to the total.
    trip_count: usize,
}

impl CarIncome {
    /// Starts a group from its first trip.
    fn first(trip: &Trip) -> Self {
        Self {
            car_number: trip.car_number().clone(),
            total: trip.trip_cost(),
            trip_count: 1,
        }
    }

    fn record(&mut self, cost: Decimal) {
        self.total = accumulate(self.total, cost, &self.car_number);
        self.trip_count += 1;
    }

    /// Returns the car number.
    #[inline]
    #[must_use]
    pub fn car_number(&self) -> &CarNumber {
        &self.car_number
    }

    /// Returns the summed income.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Returns the number of trips in the group.
    #[inline]
    #[must_use]
    pub const fn trip_count(&self) -> usize {
        self.trip_count
    }
}

impl From<CarIncome> for (CarNumber, Decimal) {
    fn from(income: CarIncome) -> Self {
        (income.car_number, income.total)
    }
}

impl fmt::Display for CarIncome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.car_number, self.total)
    }
}

/// Adds a cost to a running total, saturating at `Decimal::MAX`.
fn accumulate(total: Decimal, cost: Decimal, car_number: &CarNumber) -> Decimal {
    total.checked_add(cost).unwrap_or_else(|| {
        tracing::warn!(
            car_number = %car_number,
            total = %total,
            cost = %cost,
            "income total exceeds decimal range, saturating"
        );
        Decimal::MAX
    })
}

/// In-memory trip ledger with per-car income aggregation.
///
/// Not synchronized; see
/// [`SharedTaxiService`](crate::application::services::SharedTaxiService)
/// for a handle that can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxiService {
    trips: Vec<Trip>,
}

impl TaxiService {
    /// Creates an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self { trips: Vec::new() }
    }

    /// Appends a trip.
    pub fn add_trip(&mut self, trip: Trip) {
        tracing::debug!(
            car_number = %trip.car_number(),
            trip_cost = %trip.trip_cost(),
            "trip added"
        );
        self.trips.push(trip);
    }

    /// Groups trips by car number and sums their costs.
    ///
    /// One entry per distinct car number, ordered by first appearance.
    /// Returns an empty vector when no trips were added.
    #[must_use]
    pub fn calculate_total_income_by_car(&self) -> Vec<CarIncome> {
        let mut positions: HashMap<&CarNumber, usize> = HashMap::new();
        let mut incomes: Vec<CarIncome> = Vec::new();

        for trip in &self.trips {
            match positions.get(trip.car_number()) {
                Some(&idx) => {
                    if let Some(income) = incomes.get_mut(idx) {
                        income.record(trip.trip_cost());
                    }
                }
                None => {
                    positions.insert(trip.car_number(), incomes.len());
                    incomes.push(CarIncome::first(trip));
                }
            }
        }

        tracing::debug!(
            trips = self.trips.len(),
            cars = incomes.len(),
            "income aggregated by car"
        );
        incomes
    }

    /// Returns the total income for one car, or `None` if it has no trips.
    #[must_use]
    pub fn income_for(&self, car_number: &str) -> Option<Decimal> {
        self.trips
            .iter()
            .filter(|trip| trip.car_number().as_str() == car_number)
            .fold(None, |acc, trip| {
                Some(match acc {
                    Some(total) => accumulate(total, trip.trip_cost(), trip.car_number()),
                    None => trip.trip_cost(),
                })
            })
    }

    /// Returns the income across all cars.
    #[must_use]
    pub fn total_income(&self) -> Decimal {
        self.trips.iter().fold(Decimal::ZERO, |total, trip| {
            accumulate(total, trip.trip_cost(), trip.car_number())
        })
    }

    /// Returns the recorded trips in insertion order.
    #[inline]
    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Returns the number of recorded trips.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Returns true if no trips were recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

impl Extend<Trip> for TaxiService {
    fn extend<I: IntoIterator<Item = Trip>>(&mut self, iter: I) {
        for trip in iter {
            self.add_trip(trip);
        }
    }
}

impl FromIterator<Trip> for TaxiService {
    fn from_iter<I: IntoIterator<Item = Trip>>(iter: I) -> Self {
        let mut service = Self::new();
        service.extend(iter);
        service
    }
}
