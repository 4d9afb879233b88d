//! Greedy coin selection.
//!
//! Repeatedly takes the largest denomination that still fits into the
//! remaining amount. Fast, but not optimal on non-canonical coin systems
//! and it may stop short of the target without reporting it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::solver::{ensure_positive, CoinError};

/// One coin emitted by the greedy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedyStep {
    /// The denomination that was taken.
    pub coin: usize,
    /// Amount left to cover after taking `coin`.
    pub remaining_amount: usize,
}

/// Outcome of a greedy run: the coins in pick order and the step log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedyResult {
    /// Coins used, largest first.
    pub result: Vec<usize>,
    /// One entry per coin in `result`, in the same order.
    pub steps: Vec<GreedyStep>,
    amount: usize,
}

impl GreedyResult {
    /// Target amount the selector was asked to cover.
    #[must_use]
    pub fn amount(&self) -> usize {
        self.amount
    }

    /// Number of coins taken.
    #[must_use]
    pub fn total(&self) -> usize {
        self.result.len()
    }

    /// Amount the selector could not cover (0 when it reached the target).
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps
            .last()
            .map_or(self.amount, |step| step.remaining_amount)
    }

    /// Whether the picked coins sum exactly to the target.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.remaining() == 0
    }
}

/// Greedy coin change over `coins_descending`.
///
/// The caller is expected to pass denominations in non-increasing order;
/// the order is not checked. A shortfall (no remaining denomination fits)
/// is not an error: `result` simply sums to less than `amount`.
///
/// # Errors
///
/// Returns [`CoinError::ZeroDenomination`] if any denomination is zero,
/// since the selection loop could never make progress with it.
///
/// # Example
/// ```
/// use coinchange_core::greedy::greedy_coin_change;
///
/// let greedy = greedy_coin_change(&[4, 3, 1], 6).unwrap();
/// assert_eq!(greedy.result, vec![4, 1, 1]);
/// ```
pub fn greedy_coin_change(
    coins_descending: &[usize],
    amount: usize,
) -> Result<GreedyResult, CoinError> {
    ensure_positive(coins_descending)?;

    let mut result = Vec::new();
    let mut steps = Vec::new();
    let mut remaining_amount = amount;

    for &coin in coins_descending {
        while remaining_amount >= coin {
            result.push(coin);
            remaining_amount -= coin;
            steps.push(GreedyStep {
                coin,
                remaining_amount,
            });
        }
    }

    debug!(
        amount,
        coins = result.len(),
        shortfall = remaining_amount,
        "greedy selection finished"
    );

    Ok(GreedyResult {
        result,
        steps,
        amount,
    })
}
