//! Workspace-level integration tests for CoinChange-rs.
//!
//! The tests themselves live under `tests/`; this crate has no public API.
