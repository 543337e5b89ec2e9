//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`CarNumber`]: Seven-character vehicle identifier
//! - [`CurrencyFormat`]: Display settings for monetary amounts

pub mod car_number;
pub mod currency;

pub use car_number::{CAR_NUMBER_LEN, CarNumber};
pub use currency::CurrencyFormat;
