//! # Application Layer
//!
//! Services that operate on validated domain values.

pub mod services;
