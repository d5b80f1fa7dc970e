//! PrimeGen-rs library: application logic for the prime generator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
