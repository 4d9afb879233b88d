//! # coinchange-orchestration
//!
//! Solver selection, timed execution, and result comparison.

pub mod interfaces;
pub mod orchestrator;
pub mod solver_selection;

pub use interfaces::{Comparison, ResultPresenter, SolveResult};
pub use orchestrator::{analyze_comparison, execute_solvers};
pub use solver_selection::get_solvers_to_run;
