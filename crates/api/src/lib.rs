//! HTTP API for the car catalog.
//!
//! Exposed as a library so integration tests can build the exact router and
//! middleware stack that `main.rs` serves.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
