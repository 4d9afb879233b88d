//! # coinchange-core
//!
//! Core library for CoinChange-rs: a greedy coin selector and an exact
//! dynamic-programming solver with backtracking, plus frame iterators that
//! let a presenter replay both results step by step.

pub mod budget;
pub mod constants;
pub mod dp;
pub mod frames;
pub mod greedy;
pub mod progress;
pub mod registry;
pub mod solver;

// Re-exports
pub use constants::{exit_codes, DEFAULT_CELL_DELAY_MS, DEFAULT_COIN_DELAY_MS, DEFAULT_MAX_CELLS};
pub use dp::{dp_coin_change, Cell, DpResult, DpTable};
pub use frames::{CoinPickFrames, Frame, GreedyFrames, MatrixFrames};
pub use greedy::{greedy_coin_change, GreedyResult, GreedyStep};
pub use registry::{DefaultFactory, SolverFactory};
pub use solver::{CoinError, CoinSolver, DpSolver, GreedySolver, Solution};
