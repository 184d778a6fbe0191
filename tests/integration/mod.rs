//! Integration tests for lighter-campus
//!
//! Tests binding real listeners use a distinct port each, so they can run
//! in parallel.

pub mod assertions_test;
pub mod connection_test;
pub mod lifecycle_test;
pub mod registry_test;
