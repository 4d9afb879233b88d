//! Exact coin change by dynamic programming.
//!
//! Builds the full `(coins + 1) x (amount + 1)` table of the unbounded
//! coin change recurrence:
//!
//!   T[i][0] = 0
//!   T[i][a] = T[i-1][a]                               if c_i > a
//!   T[i][a] = min(T[i-1][a], 1 + T[i][a - c_i])       otherwise
//!
//! then walks the table backwards to recover one optimal coin multiset.
//! Row 0 stands for "no coins available". Rows follow the caller's
//! denomination order, which does not need to be sorted.

use std::fmt;
use std::mem::size_of;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::budget::TableEstimate;
use crate::constants::INFINITY_SYMBOL;
use crate::solver::{ensure_positive, CoinError};

/// Largest table the cell storage can address, whatever the configured limit.
pub const MAX_TABLE_CELLS: usize = isize::MAX.unsigned_abs() / size_of::<Cell>();

/// A DP table cell: a finite coin count, or unreachable.
///
/// `Infinite` orders above every finite count, so `min` picks the
/// reachable side whenever there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<usize>", into = "Option<usize>")]
pub enum Cell {
    /// Minimum number of coins.
    Coins(usize),
    /// No combination reaches this amount.
    Infinite,
}

impl Cell {
    /// The cell one coin further away. Unreachable stays unreachable.
    #[must_use]
    pub fn plus_one(self) -> Self {
        match self {
            Cell::Coins(n) => Cell::Coins(n + 1),
            Cell::Infinite => Cell::Infinite,
        }
    }

    /// Finite coin count, if any.
    #[must_use]
    pub fn count(self) -> Option<usize> {
        match self {
            Cell::Coins(n) => Some(n),
            Cell::Infinite => None,
        }
    }

    #[must_use]
    pub fn is_infinite(self) -> bool {
        self == Cell::Infinite
    }
}

impl From<Option<usize>> for Cell {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Cell::Infinite, Cell::Coins)
    }
}

impl From<Cell> for Option<usize> {
    fn from(cell: Cell) -> Self {
        cell.count()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Coins(n) => write!(f, "{n}"),
            Cell::Infinite => f.write_str(INFINITY_SYMBOL),
        }
    }
}

/// Fully materialized DP table, stored row-major.
///
/// Deserialization refills the table from its denominations and rejects
/// any input whose cells differ, so a `DpTable` always has
/// `(denominations + 1) * cols` cells with `cols >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct DpTable {
    denominations: Vec<usize>,
    cols: usize,
    cells: Vec<Cell>,
}

/// Serialized form of [`DpTable`], not yet checked.
#[derive(Deserialize)]
struct RawTable {
    denominations: Vec<usize>,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawTable> for DpTable {
    type Error = CoinError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        let amount = raw
            .cols
            .checked_sub(1)
            .ok_or_else(|| CoinError::InvalidInput("dp table has no columns".into()))?;
        ensure_positive(&raw.denominations)?;
        let expected = raw
            .denominations
            .len()
            .checked_add(1)
            .and_then(|rows| rows.checked_mul(raw.cols));
        if expected != Some(raw.cells.len()) {
            return Err(CoinError::InvalidInput(format!(
                "dp table has {} cells, expected {} rows of {}",
                raw.cells.len(),
                raw.denominations.len() + 1,
                raw.cols
            )));
        }
        let table = build_table(&raw.denominations, amount)?;
        if table.cells != raw.cells {
            return Err(CoinError::InvalidInput(format!(
                "dp table cells do not match denominations {:?} up to {amount}",
                raw.denominations
            )));
        }
        Ok(table)
    }
}

impl DpTable {
    /// Allocate a table with every cell unreachable except column 0.
    fn new(denominations: &[usize], amount: usize) -> Result<Self, CoinError> {
        TableEstimate::estimate(denominations.len(), amount).check(Some(MAX_TABLE_CELLS))?;
        // Both fit: the saturating estimate above is at most MAX_TABLE_CELLS.
        let rows = denominations.len() + 1;
        let cols = amount + 1;
        let mut cells = vec![Cell::Infinite; rows * cols];
        for row in 0..rows {
            cells[row * cols] = Cell::Coins(0);
        }
        Ok(Self {
            denominations: denominations.to_vec(),
            cols,
            cells,
        })
    }

    /// Number of rows (`denominations + 1`).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.denominations.len() + 1
    }

    /// Number of columns (`amount + 1`).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Target amount of the last column.
    #[must_use]
    pub fn amount(&self) -> usize {
        self.cols - 1
    }

    /// Denominations in row order; row `i` uses the first `i` of them.
    #[must_use]
    pub fn denominations(&self) -> &[usize] {
        &self.denominations
    }

    /// Cell `[row][amount]`.
    #[must_use]
    pub fn get(&self, row: usize, amount: usize) -> Cell {
        self.cells[row * self.cols + amount]
    }

    fn set(&mut self, row: usize, amount: usize, value: Cell) {
        self.cells[row * self.cols + amount] = value;
    }

    /// All cells of one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Rows from "no coins" down to "all coins".
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Bottom-right cell: the optimum over all denominations.
    #[must_use]
    pub fn optimum(&self) -> Cell {
        self.get(self.rows() - 1, self.amount())
    }
}

/// Outcome of a DP run: one optimal coin multiset and the table behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpResult {
    /// Coins recovered by backtracking; empty when infeasible.
    pub coins_used: Vec<usize>,
    /// The table the coins were read from.
    pub matrix: DpTable,
}

impl DpResult {
    /// Whether the target amount is reachable at all.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        !self.matrix.optimum().is_infinite()
    }

    /// Number of coins used.
    #[must_use]
    pub fn total(&self) -> usize {
        self.coins_used.len()
    }
}

/// Fill the DP table for `coins` (in the given order) up to `amount`.
///
/// Time and space are `O(coins.len() * amount)`. Denominations must be
/// positive; [`dp_coin_change`] checks that before calling this.
///
/// # Errors
///
/// Returns [`CoinError::TableTooLarge`] if the table would exceed
/// [`MAX_TABLE_CELLS`].
pub fn build_table(coins: &[usize], amount: usize) -> Result<DpTable, CoinError> {
    let mut table = DpTable::new(coins, amount)?;

    for coin_index in 1..=coins.len() {
        let coin = coins[coin_index - 1];
        for current_amount in 1..=amount {
            let without = table.get(coin_index - 1, current_amount);
            let value = if coin > current_amount {
                without
            } else {
                // Same row on the right-hand side: the coin stays available.
                without.min(table.get(coin_index, current_amount - coin).plus_one())
            };
            table.set(coin_index, current_amount, value);
        }
        trace!(coin_index, coin, "dp row filled");
    }

    Ok(table)
}

/// Recover the coins behind the bottom-right cell of `table`.
///
/// Walks up from the bottom row: a cell that differs from the one above it
/// used the row's coin at least once, so the coin is taken and the walk
/// stays in the same row. Returns an empty vector when the amount is
/// unreachable.
#[must_use]
pub fn backtrack(table: &DpTable) -> Vec<usize> {
    let denominations = table.denominations();
    let mut coins_used = Vec::new();
    let mut remaining_amount = table.amount();
    let mut coin_index = denominations.len();

    while remaining_amount > 0 && coin_index > 0 {
        if table.get(coin_index, remaining_amount) != table.get(coin_index - 1, remaining_amount) {
            let coin = denominations[coin_index - 1];
            coins_used.push(coin);
            remaining_amount -= coin;
        } else {
            coin_index -= 1;
        }
    }

    coins_used
}

/// Exact coin change over `coins` in their original order.
///
/// An unreachable amount is not an error: `coins_used` comes back empty
/// and the bottom-right cell of `matrix` is [`Cell::Infinite`].
///
/// # Errors
///
/// Returns [`CoinError::ZeroDenomination`] if any denomination is zero,
/// or [`CoinError::TableTooLarge`] if the table cannot be allocated.
///
/// # Example
/// ```
/// use coinchange_core::dp::{dp_coin_change, Cell};
///
/// let dp = dp_coin_change(&[1, 3, 4], 6).unwrap();
/// assert_eq!(dp.coins_used, vec![3, 3]);
/// assert_eq!(dp.matrix.optimum(), Cell::Coins(2));
/// ```
pub fn dp_coin_change(coins: &[usize], amount: usize) -> Result<DpResult, CoinError> {
    ensure_positive(coins)?;

    let matrix = build_table(coins, amount)?;
    let coins_used = backtrack(&matrix);

    debug!(
        amount,
        denominations = coins.len(),
        optimum = %matrix.optimum(),
        coins = coins_used.len(),
        "dp table built"
    );

    Ok(DpResult { coins_used, matrix })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_ordering_puts_infinite_last() {
        assert!(Cell::Coins(usize::MAX) < Cell::Infinite);
        assert!(Cell::Coins(1) < Cell::Coins(2));
        assert_eq!(Cell::Coins(3).min(Cell::Infinite), Cell::Coins(3));
    }

    #[test]
    fn cell_plus_one() {
        assert_eq!(Cell::Coins(0).plus_one(), Cell::Coins(1));
        assert_eq!(Cell::Infinite.plus_one(), Cell::Infinite);
    }

    #[test]
    fn cell_display() {
        assert_eq!(Cell::Coins(12).to_string(), "12");
        assert_eq!(Cell::Infinite.to_string(), "\u{221e}");
    }

    #[test]
    fn cell_serializes_as_optional_number() {
        let json = serde_json::to_string(&[Cell::Coins(2), Cell::Infinite]).unwrap();
        assert_eq!(json, "[2,null]");
        let back: Vec<Cell> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Cell::Coins(2), Cell::Infinite]);
    }

    #[test]
    fn table_shape() {
        let dp = dp_coin_change(&[1, 5, 10, 25], 63).unwrap();
        assert_eq!(dp.matrix.rows(), 5);
        assert_eq!(dp.matrix.cols(), 64);
        assert_eq!(dp.matrix.amount(), 63);
        assert_eq!(dp.matrix.denominations(), &[1, 5, 10, 25]);
    }

    #[test]
    fn canonical_us_coins() {
        let dp = dp_coin_change(&[1, 5, 10, 25], 63).unwrap();
        assert_eq!(dp.coins_used, vec![25, 25, 10, 1, 1, 1]);
        assert_eq!(dp.matrix.optimum(), Cell::Coins(6));
    }

    #[test]
    fn non_canonical_finds_optimum() {
        let dp = dp_coin_change(&[1, 3, 4], 6).unwrap();
        assert_eq!(dp.total(), 2);
        assert_eq!(dp.coins_used.iter().sum::<usize>(), 6);
    }

    #[test]
    fn infeasible_amount() {
        let dp = dp_coin_change(&[2], 3).unwrap();
        assert!(dp.coins_used.is_empty());
        assert!(!dp.is_feasible());
        assert_eq!(dp.matrix.get(1, 3), Cell::Infinite);
        assert_eq!(dp.matrix.get(1, 2), Cell::Coins(1));
    }

    #[test]
    fn zero_amount() {
        let dp = dp_coin_change(&[3, 7], 0).unwrap();
        assert!(dp.coins_used.is_empty());
        assert!(dp.is_feasible());
        assert_eq!(dp.matrix.cols(), 1);
        assert_eq!(dp.matrix.optimum(), Cell::Coins(0));
    }

    #[test]
    fn empty_denominations_are_infeasible() {
        let dp = dp_coin_change(&[], 4).unwrap();
        assert_eq!(dp.matrix.rows(), 1);
        assert_eq!(dp.matrix.get(0, 0), Cell::Coins(0));
        assert!(dp.matrix.row(0)[1..].iter().all(|c| c.is_infinite()));
        assert!(dp.coins_used.is_empty());
    }

    #[test]
    fn row_zero_is_no_coins() {
        let dp = dp_coin_change(&[1, 2], 3).unwrap();
        assert_eq!(
            dp.matrix.row(0),
            &[Cell::Coins(0), Cell::Infinite, Cell::Infinite, Cell::Infinite]
        );
        assert_eq!(
            dp.matrix.row(1),
            &[Cell::Coins(0), Cell::Coins(1), Cell::Coins(2), Cell::Coins(3)]
        );
        assert_eq!(
            dp.matrix.row(2),
            &[Cell::Coins(0), Cell::Coins(1), Cell::Coins(1), Cell::Coins(2)]
        );
    }

    #[test]
    fn column_zero_is_zero() {
        let dp = dp_coin_change(&[7, 2, 9], 20).unwrap();
        for row in 0..dp.matrix.rows() {
            assert_eq!(dp.matrix.get(row, 0), Cell::Coins(0));
        }
    }

    #[test]
    fn rows_never_get_worse() {
        let dp = dp_coin_change(&[6, 4, 1, 9], 30).unwrap();
        for row in 1..dp.matrix.rows() {
            for a in 0..dp.matrix.cols() {
                assert!(dp.matrix.get(row, a) <= dp.matrix.get(row - 1, a));
            }
        }
    }

    #[test]
    fn unsorted_denominations_reuse_coins() {
        let dp = dp_coin_change(&[10, 1, 6], 18).unwrap();
        assert_eq!(dp.total(), 3);
        assert_eq!(dp.coins_used, vec![6, 6, 6]);
    }

    #[test]
    fn duplicates_do_not_change_optimum() {
        let plain = dp_coin_change(&[1, 5], 12).unwrap();
        let dup = dp_coin_change(&[1, 5, 5], 12).unwrap();
        assert_eq!(plain.matrix.optimum(), dup.matrix.optimum());
    }

    #[test]
    fn iter_rows_matches_row() {
        let dp = dp_coin_change(&[2, 3], 5).unwrap();
        let rows: Vec<&[Cell]> = dp.matrix.iter_rows().collect();
        assert_eq!(rows.len(), dp.matrix.rows());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(*row, dp.matrix.row(i));
        }
    }

    #[test]
    fn backtrack_on_prebuilt_table() {
        let table = build_table(&[2, 5], 9).unwrap();
        let coins = backtrack(&table);
        assert_eq!(coins.iter().sum::<usize>(), 9);
        assert_eq!(Cell::Coins(coins.len()), table.optimum());
    }

    #[test]
    fn backtrack_starts_from_the_table_amount() {
        let table = build_table(&[1, 2], 3).unwrap();
        assert_eq!(backtrack(&table), vec![2, 1]);
    }

    #[test]
    fn huge_amount_is_refused_before_allocating() {
        assert!(matches!(
            build_table(&[1], usize::MAX),
            Err(CoinError::TableTooLarge { limit: MAX_TABLE_CELLS, .. })
        ));
        assert!(matches!(
            dp_coin_change(&[1, 2], usize::MAX / 2),
            Err(CoinError::TableTooLarge { .. })
        ));
    }

    #[test]
    fn table_survives_json() {
        let table = build_table(&[1, 3, 4], 6).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let back: DpTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
        assert_eq!(back.optimum(), Cell::Coins(2));
    }

    #[test]
    fn malformed_tables_are_rejected() {
        for json in [
            r#"{"denominations":[],"cols":0,"cells":[]}"#,
            r#"{"denominations":[1,2],"cols":4,"cells":[null]}"#,
            r#"{"denominations":[0],"cols":1,"cells":[0,0]}"#,
            r#"{"denominations":[2],"cols":2,"cells":[0,null,0,0]}"#,
        ] {
            assert!(serde_json::from_str::<DpTable>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn malformed_result_is_rejected() {
        let json = r#"{"coins_used":[],"matrix":{"denominations":[1],"cols":3,"cells":[0]}}"#;
        assert!(serde_json::from_str::<DpResult>(json).is_err());
    }

    #[test]
    fn zero_coin_row_copies_the_row_above() {
        let table = build_table(&[1, 0], 4).unwrap();
        assert_eq!(table.row(2), table.row(1));
        assert_eq!(backtrack(&table), vec![1, 1, 1, 1]);
    }

    #[test]
    fn zero_denomination_rejected() {
        assert!(matches!(
            dp_coin_change(&[0, 1], 5),
            Err(CoinError::ZeroDenomination)
        ));
    }
}
