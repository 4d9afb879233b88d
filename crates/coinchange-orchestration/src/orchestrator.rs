//! Run the selected solvers on one input and compare their answers.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use coinchange_core::solver::{CoinSolver, Solution};

use crate::interfaces::{Comparison, SolveResult};

/// Run each solver once, in order, on the same input.
///
/// Solvers are pure and independent; one failing does not stop the others.
pub fn execute_solvers(
    solvers: &[Arc<dyn CoinSolver>],
    coins: &[usize],
    amount: usize,
) -> Vec<SolveResult> {
    solvers
        .iter()
        .map(|solver| {
            let _span = info_span!("solve", algorithm = solver.name()).entered();
            let start = Instant::now();
            let outcome = solver.solve(coins, amount);
            let duration = start.elapsed();

            match &outcome {
                Ok(solution) => debug!(
                    coins = solution.count(),
                    exact = solution.is_exact(),
                    ?duration,
                    "solver finished"
                ),
                Err(e) => warn!(error = %e, "solver failed"),
            }

            SolveResult {
                algorithm: solver.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Compare greedy against DP when both produced a solution.
pub fn analyze_comparison(results: &[SolveResult]) -> Comparison {
    let solutions = results.iter().filter_map(|r| r.outcome.as_ref().ok());
    let mut greedy = None;
    let mut dp = None;
    for solution in solutions {
        match solution {
            Solution::Greedy(g) => greedy = Some(g),
            Solution::Dp(d) => dp = Some(d),
        }
    }

    let (Some(greedy), Some(dp)) = (greedy, dp) else {
        return Comparison::Incomplete;
    };

    let comparison = match (greedy.is_exact(), dp.is_feasible()) {
        (true, _) if greedy.total() == dp.total() => Comparison::Agree {
            coins: dp.total(),
        },
        (true, _) => Comparison::GreedySuboptimal {
            greedy: greedy.total(),
            optimal: dp.total(),
        },
        (false, true) => Comparison::GreedyShortfall {
            remaining: greedy.remaining(),
            optimal: dp.total(),
        },
        (false, false) => Comparison::BothInfeasible {
            remaining: greedy.remaining(),
        },
    };

    if comparison.diverged() {
        info!(?comparison, "greedy differs from the optimum");
    }
    comparison
}
