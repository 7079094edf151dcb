//! Pure domain logic for the car catalog.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the API layer, and any future CLI tooling.

pub mod error;
pub mod price;
pub mod search;
pub mod types;
pub mod uploads;
