//! CoinChange-rs library: application logic for the `coinchange` binary.

pub mod app;
pub mod config;
pub mod errors;
