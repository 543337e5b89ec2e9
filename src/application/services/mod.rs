//! # Application Services
//!
//! - [`TaxiService`]: Trip ledger with per-car income aggregation
//! - [`SharedTaxiService`]: Mutex-guarded handle for multi-threaded use

pub mod shared_taxi_service;
pub mod taxi_service;

pub use shared_taxi_service::SharedTaxiService;
pub use taxi_service::{CarIncome, TaxiService};
