//! Display frames for progressive rendering.
//!
//! Each iterator walks an already-computed result and yields one visual
//! unit per `next()`: a table cell, a greedy step or a picked coin. The
//! cadence is up to the consumer; nothing here knows about time.

use std::iter::Enumerate;
use std::slice;

use crate::dp::{Cell, DpResult, DpTable};
use crate::greedy::{GreedyResult, GreedyStep};

/// One visual unit of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// A DP table cell being revealed.
    MatrixCell { row: usize, col: usize, value: Cell },
    /// A row of the greedy step table (1-based `step`).
    GreedyStep {
        step: usize,
        coin: usize,
        remaining: usize,
    },
    /// Backtracking has not picked anything yet.
    PickStart { remaining: usize },
    /// A coin picked during backtracking (1-based `step`).
    CoinPicked {
        step: usize,
        coin: usize,
        remaining: usize,
    },
}

/// Row-major walk over every DP table cell, row 0 first.
///
/// # Example
/// ```
/// use coinchange_core::dp::dp_coin_change;
/// use coinchange_core::frames::MatrixFrames;
///
/// let dp = dp_coin_change(&[2], 3).unwrap();
/// assert_eq!(MatrixFrames::new(&dp.matrix).len(), 8);
/// ```
pub struct MatrixFrames<'a> {
    table: &'a DpTable,
    next: usize,
}

impl<'a> MatrixFrames<'a> {
    #[must_use]
    pub fn new(table: &'a DpTable) -> Self {
        Self { table, next: 0 }
    }

    fn total(&self) -> usize {
        self.table.rows() * self.table.cols()
    }
}

impl Iterator for MatrixFrames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total() {
            return None;
        }
        let row = self.next / self.table.cols();
        let col = self.next % self.table.cols();
        self.next += 1;
        Some(Frame::MatrixCell {
            row,
            col,
            value: self.table.get(row, col),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for MatrixFrames<'_> {}

/// Greedy step log as 1-based table rows.
pub struct GreedyFrames<'a> {
    steps: Enumerate<slice::Iter<'a, GreedyStep>>,
}

impl<'a> GreedyFrames<'a> {
    #[must_use]
    pub fn new(result: &'a GreedyResult) -> Self {
        Self {
            steps: result.steps.iter().enumerate(),
        }
    }
}

impl Iterator for GreedyFrames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        self.steps.next().map(|(i, step)| Frame::GreedyStep {
            step: i + 1,
            coin: step.coin,
            remaining: step.remaining_amount,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for GreedyFrames<'_> {}

/// Backtracking replay: the starting amount, then one frame per coin.
pub struct CoinPickFrames<'a> {
    coins: &'a [usize],
    remaining: usize,
    started: bool,
    index: usize,
}

impl<'a> CoinPickFrames<'a> {
    #[must_use]
    pub fn new(result: &'a DpResult) -> Self {
        Self {
            coins: &result.coins_used,
            remaining: result.matrix.amount(),
            started: false,
            index: 0,
        }
    }
}

impl Iterator for CoinPickFrames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(Frame::PickStart {
                remaining: self.remaining,
            });
        }
        let coin = *self.coins.get(self.index)?;
        self.index += 1;
        self.remaining = self.remaining.saturating_sub(coin);
        Some(Frame::CoinPicked {
            step: self.index,
            coin,
            remaining: self.remaining,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.coins.len() - self.index + usize::from(!self.started);
        (left, Some(left))
    }
}

impl ExactSizeIterator for CoinPickFrames<'_> {}
