//! # Income Report
//!
//! Builds the sample ledger and writes the per-car income report.
//!
//! # Examples
//!
//! ```
//! use taxi_income::demo;
//! use taxi_income::domain::value_objects::CurrencyFormat;
//!
//! let mut out = Vec::new();
//! demo::run(&CurrencyFormat::default(), &mut out).unwrap();
//! let report = String::from_utf8(out).unwrap();
//! assert_eq!(report, "AB12345: $310.50\nCD23456: $150.00\nEF34567: $200.00\n");
//! ```

use crate::application::services::{CarIncome, TaxiService};
use crate::domain::entities::Trip;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::CurrencyFormat;
use rust_decimal::Decimal;
use std::io::{self, Write};
use thiserror::Error;

/// Sample fares as `(car, mantissa, scale)`.
const SAMPLE_TRIPS: [(&str, i64, u32); 5] = [
    ("AB12345", 1005, 1),
    ("CD23456", 1500, 1),
    ("AB12345", 1200, 1),
    ("EF34567", 2000, 1),
    ("AB12345", 900, 1),
];

/// Error raised while producing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A trip failed validation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Builds the sample trips.
///
/// # Errors
///
/// Returns the first validation failure.
pub fn sample_trips() -> DomainResult<Vec<Trip>> {
    SAMPLE_TRIPS
        .iter()
        .map(|&(car, mantissa, scale)| Trip::new(car, Decimal::new(mantissa, scale)))
        .collect()
}

/// Builds a service holding the sample trips.
///
/// # Errors
///
/// Returns the first validation failure.
pub fn sample_service() -> DomainResult<TaxiService> {
    Ok(sample_trips()?.into_iter().collect())
}

/// Writes one `CAR: AMOUNT` line per income entry.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_report<W: Write>(
    incomes: &[CarIncome],
    format: &CurrencyFormat,
    out: &mut W,
) -> io::Result<()> {
    for income in incomes {
        writeln!(out, "{}: {}", income.car_number(), format.format(income.total()))?;
    }
    out.flush()
}

/// Runs the sample scenario and writes its report.
///
/// # Errors
///
/// - `ReportError::Domain` if a sample trip is invalid
/// - `ReportError::Io` if the writer fails
pub fn run<W: Write>(format: &CurrencyFormat, out: &mut W) -> Result<(), ReportError> {
    let service = sample_service()?;
    tracing::info!(trips = service.len(), "sample trips recorded");

    let incomes = service.calculate_total_income_by_car();
    write_report(&incomes, format, out)?;
    tracing::info!(cars = incomes.len(), "income report written");
    Ok(())
}
