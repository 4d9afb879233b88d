//! Solver trait, the shared error type and the two solver adapters.
//!
//! `greedy_coin_change` and `dp_coin_change` are the raw algorithms.
//! `CoinSolver` wraps them behind one interface so orchestration can run
//! either, both, or look them up by name.

use serde::{Deserialize, Serialize};

use crate::dp::{dp_coin_change, DpResult};
use crate::greedy::{greedy_coin_change, GreedyResult};

/// Error type for coin change computations and their inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoinError {
    /// A denomination of zero can never reduce the remaining amount.
    #[error("denominations must be strictly positive")]
    ZeroDenomination,

    /// Input text could not be turned into coins or an amount.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The DP table would exceed the configured cell budget.
    #[error("dp table needs {cells} cells, limit is {limit}")]
    TableTooLarge { cells: usize, limit: usize },

    /// Writing rendered output failed.
    #[error("output error: {0}")]
    Output(String),

    /// Rendering was cancelled.
    #[error("cancelled")]
    Cancelled,
}

/// Reject zero denominations.
pub(crate) fn ensure_positive(coins: &[usize]) -> Result<(), CoinError> {
    if coins.contains(&0) {
        Err(CoinError::ZeroDenomination)
    } else {
        Ok(())
    }
}

/// Output of any solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Solution {
    Greedy(GreedyResult),
    Dp(DpResult),
}

impl Solution {
    /// Coins chosen by the solver.
    #[must_use]
    pub fn coins(&self) -> &[usize] {
        match self {
            Solution::Greedy(g) => &g.result,
            Solution::Dp(d) => &d.coins_used,
        }
    }

    /// Number of coins chosen.
    #[must_use]
    pub fn count(&self) -> usize {
        self.coins().len()
    }

    /// Whether the chosen coins sum exactly to the target amount.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        match self {
            Solution::Greedy(g) => g.is_exact(),
            Solution::Dp(d) => d.is_feasible(),
        }
    }

    #[must_use]
    pub fn as_greedy(&self) -> Option<&GreedyResult> {
        match self {
            Solution::Greedy(g) => Some(g),
            Solution::Dp(_) => None,
        }
    }

    #[must_use]
    pub fn as_dp(&self) -> Option<&DpResult> {
        match self {
            Solution::Dp(d) => Some(d),
            Solution::Greedy(_) => None,
        }
    }
}

/// Common interface over the coin change algorithms.
pub trait CoinSolver: Send + Sync {
    /// Solve for `amount` using `coins` in the order the user gave them.
    fn solve(&self, coins: &[usize], amount: usize) -> Result<Solution, CoinError>;

    /// Display name of the algorithm.
    fn name(&self) -> &str;
}

/// Greedy selection over a descending copy of the denominations.
#[derive(Debug, Default)]
pub struct GreedySolver;

impl GreedySolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoinSolver for GreedySolver {
    fn solve(&self, coins: &[usize], amount: usize) -> Result<Solution, CoinError> {
        let mut sorted = coins.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        greedy_coin_change(&sorted, amount).map(Solution::Greedy)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

/// Dynamic programming over the denominations in input order.
#[derive(Debug, Default)]
pub struct DpSolver;

impl DpSolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoinSolver for DpSolver {
    fn solve(&self, coins: &[usize], amount: usize) -> Result<Solution, CoinError> {
        dp_coin_change(coins, amount).map(Solution::Dp)
    }

    fn name(&self) -> &str {
        "DynamicProgramming"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_solver_sorts_a_copy() {
        let coins = vec![1, 3, 4];
        let solution = GreedySolver::new().solve(&coins, 6).unwrap();
        assert_eq!(solution.coins(), &[4, 1, 1]);
        assert_eq!(coins, vec![1, 3, 4]);
    }

    #[test]
    fn dp_solver_keeps_input_order() {
        let solution = DpSolver::new().solve(&[4, 1, 3], 6).unwrap();
        let dp = solution.as_dp().unwrap();
        assert_eq!(dp.matrix.denominations(), &[4, 1, 3]);
        assert_eq!(solution.count(), 2);
    }

    #[test]
    fn solution_exactness() {
        let greedy = GreedySolver::new().solve(&[2], 3).unwrap();
        let dp = DpSolver::new().solve(&[2], 3).unwrap();
        assert!(!greedy.is_exact());
        assert!(!dp.is_exact());
        assert!(greedy.as_dp().is_none());
        assert!(dp.as_greedy().is_none());
    }

    #[test]
    fn solver_names() {
        assert_eq!(GreedySolver::new().name(), "Greedy");
        assert_eq!(DpSolver::new().name(), "DynamicProgramming");
    }

    #[test]
    fn coin_error_display() {
        assert_eq!(
            CoinError::ZeroDenomination.to_string(),
            "denominations must be strictly positive"
        );
        assert_eq!(
            CoinError::TableTooLarge {
                cells: 20,
                limit: 10
            }
            .to_string(),
            "dp table needs 20 cells, limit is 10"
        );
        assert_eq!(
            CoinError::InvalidInput("empty".into()).to_string(),
            "invalid input: empty"
        );
    }

    #[test]
    fn ensure_positive_checks_every_coin() {
        assert!(ensure_positive(&[]).is_ok());
        assert!(ensure_positive(&[1, 2, 3]).is_ok());
        assert!(ensure_positive(&[1, 0, 3]).is_err());
    }
}
