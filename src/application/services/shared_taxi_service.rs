//! # Shared Taxi Service
//!
//! Thread-safe handle around a [`TaxiService`].
//!
//! Clones share the same ledger. Every operation takes the lock for its
//! whole duration, so an aggregation never observes a half-applied add.
//!
//! # Examples
//!
//! ```
//! use taxi_income::application::services::SharedTaxiService;
//! use taxi_income::domain::entities::Trip;
//! use rust_decimal::Decimal;
//! use std::thread;
//!
//! let shared = SharedTaxiService::new();
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let shared = shared.clone();
//!         thread::spawn(move || {
//!             shared.add_trip(Trip::new("AB12345", Decimal::ONE).unwrap());
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(shared.len(), 4);
//! ```

use crate::application::services::taxi_service::{CarIncome, TaxiService};
use crate::domain::entities::Trip;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, mutex-guarded [`TaxiService`].
#[derive(Debug, Clone, Default)]
pub struct SharedTaxiService {
    inner: Arc<Mutex<TaxiService>>,
}

impl SharedTaxiService {
    /// Creates an empty shared service.
    #[must_use]
    pub fn new() -> Self {
        Self::from_service(TaxiService::new())
    }

    /// Wraps an existing service.
    #[must_use]
    pub fn from_service(service: TaxiService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    /// Appends a trip.
    pub fn add_trip(&self, trip: Trip) {
        self.inner.lock().add_trip(trip);
    }

    /// Aggregates income per car under the lock.
    #[must_use]
    pub fn calculate_total_income_by_car(&self) -> Vec<CarIncome> {
        self.inner.lock().calculate_total_income_by_car()
    }

    /// Returns the number of recorded trips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if no trips were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns a copy of the current ledger.
    #[must_use]
    pub fn snapshot(&self) -> TaxiService {
        self.inner.lock().clone()
    }
}

impl From<TaxiService> for SharedTaxiService {
    fn from(service: TaxiService) -> Self {
        Self::from_service(service)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::thread;

    #[test]
    fn clones_share_state() {
        let a = SharedTaxiService::new();
        let b = a.clone();
        b.add_trip(Trip::new("AB12345", Decimal::TEN).unwrap());
        assert_eq!(a.len(), 1);
        assert!(!a.is_empty());
    }

    #[test]
    fn concurrent_adds_are_all_counted() {
        let shared = SharedTaxiService::new();
        let handles: Vec<_> = ["AB12345", "CD23456", "EF34567", "AB12345"]
            .into_iter()
            .map(|car| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        shared.add_trip(Trip::new(car, Decimal::ONE).unwrap());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 100);
        let mut totals: Vec<(String, Decimal)> = shared
            .calculate_total_income_by_car()
            .into_iter()
            .map(|income| (income.car_number().to_string(), income.total()))
            .collect();
        totals.sort();
        assert_eq!(
            totals,
            vec![
                ("AB12345".to_string(), Decimal::new(50, 0)),
                ("CD23456".to_string(), Decimal::new(25, 0)),
                ("EF34567".to_string(), Decimal::new(25, 0)),
            ]
        );
    }

    #[test]
    fn snapshot_is_detached() {
        let shared = SharedTaxiService::new();
        shared.add_trip(Trip::new("AB12345", Decimal::ONE).unwrap());
        let snapshot = shared.snapshot();
        shared.add_trip(Trip::new("AB12345", Decimal::ONE).unwrap());
        assert_eq!(snapshot.len(), 1);
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn from_existing_service() {
        let mut service = TaxiService::new();
        service.add_trip(Trip::new("CD23456", Decimal::TWO).unwrap());
        let shared = SharedTaxiService::from(service);
        let incomes = shared.calculate_total_income_by_car();
        assert_eq!(incomes[0].total(), Decimal::TWO);
    }
}
