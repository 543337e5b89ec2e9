//! # Domain Entities
//!
//! - [`Trip`]: A single validated taxi fare

pub mod trip;

pub use trip::Trip;
