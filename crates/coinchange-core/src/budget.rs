//! DP table size estimation and the cell budget.

use std::mem::size_of;

use crate::dp::Cell;
use crate::solver::CoinError;

/// Size estimate for a DP table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEstimate {
    /// Number of cells, `(coins + 1) * (amount + 1)`.
    pub cells: usize,
    /// Approximate bytes held by the cells.
    pub bytes: usize,
}

impl TableEstimate {
    /// Estimate the table for `num_coins` denominations and `amount`.
    ///
    /// Saturates instead of overflowing, so absurd inputs still compare
    /// larger than any limit.
    #[must_use]
    pub fn estimate(num_coins: usize, amount: usize) -> Self {
        let cells = num_coins
            .saturating_add(1)
            .saturating_mul(amount.saturating_add(1));
        Self {
            cells,
            bytes: cells.saturating_mul(size_of::<Cell>()),
        }
    }

    /// `None` means unlimited.
    #[must_use]
    pub fn fits_in(&self, limit: Option<usize>) -> bool {
        limit.map_or(true, |l| self.cells <= l)
    }

    /// Turn the budget check into an error.
    pub fn check(&self, limit: Option<usize>) -> Result<(), CoinError> {
        match limit {
            Some(limit) if !self.fits_in(Some(limit)) => Err(CoinError::TableTooLarge {
                cells: self.cells,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

/// Parse a cell limit like "10M", "500K", "2G" or "12345".
///
/// Suffixes are decimal. An empty string or "0" means unlimited.
pub fn parse_cell_limit(s: &str) -> Result<Option<usize>, CoinError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix(['G', 'g']) {
        (n, 1_000_000_000)
    } else if let Some(n) = s.strip_suffix(['M', 'm']) {
        (n, 1_000_000)
    } else if let Some(n) = s.strip_suffix(['K', 'k']) {
        (n, 1_000)
    } else {
        (s, 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| CoinError::Config(format!("invalid cell limit {s:?}: {e}")))?;
    let limit = value
        .checked_mul(multiplier)
        .ok_or_else(|| CoinError::Config(format!("cell limit {s:?} overflows")))?;
    Ok((limit != 0).then_some(limit))
}
