//! CLI result presenter.

use std::io::{self, Write};

use coinchange_core::dp::DpResult;
use coinchange_core::frames::{CoinPickFrames, Frame, GreedyFrames, MatrixFrames};
use coinchange_core::greedy::GreedyResult;
use coinchange_core::solver::{CoinError, Solution};
use coinchange_orchestration::interfaces::{Comparison, ResultPresenter, SolveResult};

use crate::animation::{Cadence, Player};
use crate::output::{
    describe_comparison, format_coins, format_duration, render_dp_matrix, render_greedy_table,
    MatrixLayout,
};
use crate::ui::{highlight_coin, print_error, print_header, print_success, print_warning};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Replay a solver's result frame by frame.
    ///
    /// Greedy replays its step log; DP fills the table cell by cell and
    /// then replays the backtracking. Quiet mode and failed solvers draw
    /// nothing.
    pub fn animate(
        &self,
        result: &SolveResult,
        player: &Player,
        cadence: Cadence,
    ) -> Result<(), CoinError> {
        if self.quiet {
            return Ok(());
        }
        match &result.outcome {
            Ok(Solution::Greedy(greedy)) => animate_greedy(greedy, &player.with_delay(cadence.coin)),
            Ok(Solution::Dp(dp)) => {
                animate_matrix(dp, &player.with_delay(cadence.cell))?;
                animate_coin_picking(dp, &player.with_delay(cadence.coin))
            }
            Err(_) => Ok(()),
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &SolveResult, amount: usize, details: bool) {
        let solution = match &result.outcome {
            Ok(solution) => solution,
            Err(e) => {
                self.present_error(&format!("{}: {e}", result.algorithm));
                return;
            }
        };

        if self.quiet {
            let coins: Vec<String> = solution.coins().iter().map(ToString::to_string).collect();
            println!("{}", coins.join(" "));
            return;
        }

        print_header(&result.algorithm);
        println!("{}", format_coins(solution.coins()));
        if self.verbose {
            println!("Duration: {}", format_duration(result.duration));
        }

        match solution {
            Solution::Greedy(greedy) => {
                if !greedy.is_exact() {
                    print_warning(&format!(
                        "Remaining amount {} cannot be covered by any denomination",
                        greedy.remaining()
                    ));
                }
                if details {
                    print!("{}", render_greedy_table(greedy));
                }
            }
            Solution::Dp(dp) => {
                if !dp.is_feasible() {
                    print_warning(&format!("Amount {amount} cannot be formed with these coins"));
                }
                if details {
                    print!("{}", render_dp_matrix(&dp.matrix));
                }
            }
        }
    }

    fn present_comparison(&self, comparison: &Comparison, results: &[SolveResult]) {
        if self.quiet || *comparison == Comparison::Incomplete {
            return;
        }

        println!();
        if comparison.diverged() {
            print_warning(&describe_comparison(comparison));
        } else {
            print_success(&describe_comparison(comparison));
        }

        if self.verbose {
            for result in results {
                let status = if result.outcome.is_err() {
                    "ERROR"
                } else {
                    "OK"
                };
                println!(
                    "  {:<20} {:>10} [{}]",
                    result.algorithm,
                    format_duration(result.duration),
                    status,
                );
            }
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

fn animate_greedy(greedy: &GreedyResult, player: &Player) -> Result<(), CoinError> {
    println!("Greedy steps:");
    player.play(GreedyFrames::new(greedy), |frame| {
        if let Frame::GreedyStep {
            step,
            coin,
            remaining,
        } = *frame
        {
            let mut out = io::stdout();
            writeln!(
                out,
                "  Step {step}: {} Remaining Amount: {remaining}",
                highlight_coin(coin)
            )?;
            out.flush()?;
        }
        Ok(())
    })?;
    Ok(())
}

fn animate_matrix(dp: &DpResult, player: &Player) -> Result<(), CoinError> {
    let layout = MatrixLayout::new(&dp.matrix);
    let last_col = dp.matrix.amount();
    println!("DP table:");
    println!("{}", layout.header(last_col));
    player.play(MatrixFrames::new(&dp.matrix), |frame| {
        if let Frame::MatrixCell { row, col, value } = *frame {
            let mut out = io::stdout();
            if col == 0 {
                write!(out, "{}", layout.row_label(row))?;
            }
            write!(out, "{}", layout.cell(value))?;
            if col == last_col {
                writeln!(out)?;
            }
            out.flush()?;
        }
        Ok(())
    })?;
    Ok(())
}

fn animate_coin_picking(dp: &DpResult, player: &Player) -> Result<(), CoinError> {
    println!("Coin picking:");
    player.play(CoinPickFrames::new(dp), |frame| {
        let mut out = io::stdout();
        match *frame {
            Frame::PickStart { remaining } => {
                writeln!(out, "  Remaining Amount: {remaining}")?;
            }
            Frame::CoinPicked {
                coin, remaining, ..
            } => {
                writeln!(out, "  {} Remaining Amount: {remaining}", highlight_coin(coin))?;
            }
            _ => {}
        }
        out.flush()
    })?;
    Ok(())
}
