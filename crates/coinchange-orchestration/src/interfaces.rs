//! Orchestration interfaces.

use std::time::Duration;

use serde::Serialize;

use coinchange_core::solver::{CoinError, Solution};

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present one solver's outcome.
    fn present_result(&self, result: &SolveResult, amount: usize, details: bool);

    /// Present how greedy fared against DP.
    fn present_comparison(&self, comparison: &Comparison, results: &[SolveResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of running a single solver.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Solver name.
    pub algorithm: String,
    /// The solution or a structured error.
    pub outcome: Result<Solution, CoinError>,
    /// Wall time spent in the solver.
    pub duration: Duration,
}

/// Greedy measured against the DP optimum.
///
/// Disagreement is an expected property of non-canonical coin systems,
/// not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Comparison {
    /// Greedy or DP did not produce a solution to compare.
    Incomplete,
    /// Greedy found an optimal answer.
    Agree { coins: usize },
    /// Greedy reached the amount with more coins than necessary.
    GreedySuboptimal { greedy: usize, optimal: usize },
    /// Greedy stopped short although an exact answer exists.
    GreedyShortfall { remaining: usize, optimal: usize },
    /// No combination reaches the amount.
    BothInfeasible { remaining: usize },
}

impl Comparison {
    /// Whether greedy and DP tell a different story.
    #[must_use]
    pub fn diverged(&self) -> bool {
        matches!(
            self,
            Comparison::GreedySuboptimal { .. } | Comparison::GreedyShortfall { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinchange_core::solver::{CoinSolver, GreedySolver};

    #[test]
    fn solve_result_holds_outcome() {
        let result = SolveResult {
            algorithm: "Greedy".into(),
            outcome: GreedySolver::new().solve(&[1, 5], 7),
            duration: Duration::from_micros(3),
        };
        assert_eq!(result.outcome.unwrap().count(), 3);
    }

    #[test]
    fn divergence() {
        assert!(Comparison::GreedySuboptimal {
            greedy: 3,
            optimal: 2
        }
        .diverged());
        assert!(Comparison::GreedyShortfall {
            remaining: 1,
            optimal: 2
        }
        .diverged());
        assert!(!Comparison::Agree { coins: 6 }.diverged());
        assert!(!Comparison::BothInfeasible { remaining: 1 }.diverged());
        assert!(!Comparison::Incomplete.diverged());
    }
}
