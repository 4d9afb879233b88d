//! Solver selection logic.

use std::sync::Arc;

use coinchange_core::registry::SolverFactory;
use coinchange_core::solver::{CoinError, CoinSolver};

/// Get solvers to run based on algorithm selection.
pub fn get_solvers_to_run(
    algo: &str,
    factory: &dyn SolverFactory,
) -> Result<Vec<Arc<dyn CoinSolver>>, CoinError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
