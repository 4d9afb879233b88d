//! Solver factory and registry.

use std::sync::Arc;

use crate::solver::{CoinError, CoinSolver, DpSolver, GreedySolver};

/// Factory trait for looking up solvers by name.
pub trait SolverFactory: Send + Sync {
    /// Create a solver by name.
    fn get(&self, name: &str) -> Result<Arc<dyn CoinSolver>, CoinError>;

    /// List all available solver names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory over the built-in solvers.
///
/// The solvers hold no state, so each lookup builds a fresh one.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFactory;

impl DefaultFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SolverFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn CoinSolver>, CoinError> {
        match name {
            "greedy" => Ok(Arc::new(GreedySolver::new())),
            "dp" | "dynamic" => Ok(Arc::new(DpSolver::new())),
            _ => Err(CoinError::Config(format!("unknown solver: {name}"))),
        }
    }

    fn available(&self) -> Vec<&str> {
        vec!["greedy", "dp"]
    }
}
