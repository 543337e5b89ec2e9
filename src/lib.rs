//! # Taxi Income
//!
//! Records taxi trips and aggregates total income per vehicle.
//!
//! ## Layers
//!
//! - [`domain`]: Validated [`Trip`](domain::entities::Trip) fares, car
//!   numbers and currency formatting
//! - [`application`]: [`TaxiService`](application::services::TaxiService)
//!   aggregation and its thread-safe wrapper
//! - [`config`]: Environment-driven settings
//! - [`telemetry`]: `tracing` subscriber setup
//! - [`demo`]: The sample income report
//!
//! Costs are [`rust_decimal::Decimal`], so sums are exact.
//!
//! ## Example
//!
//! ```
//! use taxi_income::application::services::TaxiService;
//! use taxi_income::domain::entities::Trip;
//! use taxi_income::domain::value_objects::CurrencyFormat;
//! use rust_decimal::Decimal;
//!
//! let mut service = TaxiService::new();
//! service.add_trip(Trip::new("AB12345", Decimal::new(1005, 1)).unwrap());
//! service.add_trip(Trip::new("AB12345", Decimal::new(90, 0)).unwrap());
//!
//! let usd = CurrencyFormat::default();
//! for income in service.calculate_total_income_by_car() {
//!     assert_eq!(
//!         format!("{}: {}", income.car_number(), usd.format(income.total())),
//!         "AB12345: $190.50"
//!     );
//! }
//! ```

pub mod application;
pub mod config;
pub mod demo;
pub mod domain;
pub mod telemetry;
