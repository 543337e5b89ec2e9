//! # Domain Layer
//!
//! Validated value objects and entities for taxi trip income.
//!
//! - [`entities`]: The [`Trip`](entities::Trip) fare record
//! - [`value_objects`]: Car numbers and currency formatting
//! - [`errors`]: Validation error taxonomy

pub mod entities;
pub mod errors;
pub mod value_objects;
