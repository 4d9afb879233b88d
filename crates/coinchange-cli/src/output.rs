//! Text rendering of results and the JSON report.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use coinchange_core::dp::{Cell, DpResult, DpTable};
use coinchange_core::frames::{Frame, GreedyFrames};
use coinchange_core::greedy::GreedyResult;
use coinchange_orchestration::interfaces::{Comparison, SolveResult};

/// Label of the top-left matrix corner.
pub const MATRIX_CORNER: &str = "Coins \\ Amounts";

/// Label of row 0 of the matrix.
pub const NO_COIN_LABEL: &str = "No Coin";

/// `"Coins used: 4, 1, 1 (Total: 3)"`.
#[must_use]
pub fn format_coins(coins: &[usize]) -> String {
    let list = coins
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Coins used: {list} (Total: {})", coins.len())
}

/// Greedy step log as a three-column table.
#[must_use]
pub fn render_greedy_table(result: &GreedyResult) -> String {
    const HEADERS: [&str; 3] = ["Step", "Coin Used", "Remaining Amount"];

    let rows: Vec<[String; 3]> = GreedyFrames::new(result)
        .filter_map(|frame| match frame {
            Frame::GreedyStep {
                step,
                coin,
                remaining,
            } => Some([step.to_string(), coin.to_string(), remaining.to_string()]),
            _ => None,
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<w0$} | {:<w1$} | {:<w2$}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    );
    let _ = writeln!(
        out,
        "{}-+-{}-+-{}",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    );
    for row in &rows {
        let _ = writeln!(
            out,
            "{:>w0$} | {:>w1$} | {:>w2$}",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        );
    }
    out
}

/// Column widths and labels for drawing a DP table, whole or cell by cell.
#[derive(Debug, Clone)]
pub struct MatrixLayout {
    labels: Vec<String>,
    label_width: usize,
    col_width: usize,
}

impl MatrixLayout {
    /// Size the layout so every header, label and cell of `table` fits.
    #[must_use]
    pub fn new(table: &DpTable) -> Self {
        let labels: Vec<String> = std::iter::once(NO_COIN_LABEL.to_string())
            .chain(table.denominations().iter().map(ToString::to_string))
            .collect();
        let label_width = labels
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(MATRIX_CORNER.chars().count()))
            .max()
            .unwrap_or(0);
        let widest_cell = table
            .iter_rows()
            .flat_map(|row| row.iter().map(|c| c.to_string().chars().count()))
            .max()
            .unwrap_or(1);
        let col_width = widest_cell.max(table.amount().to_string().len());
        Self {
            labels,
            label_width,
            col_width,
        }
    }

    /// Header line: the corner label followed by every amount.
    #[must_use]
    pub fn header(&self, amount: usize) -> String {
        let mut line = format!("{:<w$}", MATRIX_CORNER, w = self.label_width);
        for a in 0..=amount {
            let _ = write!(line, " {:>w$}", a, w = self.col_width);
        }
        line
    }

    /// Left-hand label of `row`, padded.
    #[must_use]
    pub fn row_label(&self, row: usize) -> String {
        format!("{:<w$}", self.labels[row], w = self.label_width)
    }

    /// One cell, with its leading separator.
    #[must_use]
    pub fn cell(&self, value: Cell) -> String {
        format!(" {:>w$}", value.to_string(), w = self.col_width)
    }
}

/// Whole DP table, header first, one line per row.
#[must_use]
pub fn render_dp_matrix(table: &DpTable) -> String {
    let layout = MatrixLayout::new(table);
    let mut out = layout.header(table.amount());
    out.push('\n');
    for (i, row) in table.iter_rows().enumerate() {
        out.push_str(&layout.row_label(i));
        for &value in row {
            out.push_str(&layout.cell(value));
        }
        out.push('\n');
    }
    out
}

/// One-line description of a comparison verdict.
#[must_use]
pub fn describe_comparison(comparison: &Comparison) -> String {
    match *comparison {
        Comparison::Incomplete => "Only one algorithm produced a result.".to_string(),
        Comparison::Agree { coins } => {
            format!("Greedy is optimal here: both use {coins} coin(s).")
        }
        Comparison::GreedySuboptimal { greedy, optimal } => format!(
            "Greedy used {greedy} coins; the optimum is {optimal}."
        ),
        Comparison::GreedyShortfall { remaining, optimal } => format!(
            "Greedy got stuck with {remaining} left; an exact {optimal}-coin answer exists."
        ),
        Comparison::BothInfeasible { remaining } => format!(
            "No combination reaches the amount (greedy stopped {remaining} short)."
        ),
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// DP section of the JSON report, with the table as nested rows.
#[derive(Debug, Serialize)]
pub struct DpReport<'a> {
    pub coins_used: &'a [usize],
    pub optimum: Cell,
    pub matrix: Vec<&'a [Cell]>,
}

impl<'a> From<&'a DpResult> for DpReport<'a> {
    fn from(dp: &'a DpResult) -> Self {
        Self {
            coins_used: &dp.coins_used,
            optimum: dp.matrix.optimum(),
            matrix: dp.matrix.iter_rows().collect(),
        }
    }
}

/// Everything computed for one input, as written by `--output`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub coins: &'a [usize],
    pub amount: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greedy: Option<&'a GreedyResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp: Option<DpReport<'a>>,
    pub comparison: Comparison,
}

impl<'a> Report<'a> {
    /// Collect the successful outcomes of `results`.
    #[must_use]
    pub fn new(
        coins: &'a [usize],
        amount: usize,
        results: &'a [SolveResult],
        comparison: Comparison,
    ) -> Self {
        let solutions = || results.iter().filter_map(|r| r.outcome.as_ref().ok());
        Self {
            coins,
            amount,
            greedy: solutions().find_map(|s| s.as_greedy()),
            dp: solutions().find_map(|s| s.as_dp()).map(DpReport::from),
            comparison,
        }
    }
}

/// Write the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report(path: &Path, report: &Report<'_>) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(&mut file, report)?;
    writeln!(file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinchange_core::dp::dp_coin_change;
    use coinchange_core::greedy::greedy_coin_change;
    use coinchange_core::solver::{CoinSolver, DpSolver, GreedySolver};

    #[test]
    fn format_coins_like_the_form() {
        assert_eq!(
            format_coins(&[25, 25, 10, 1, 1, 1]),
            "Coins used: 25, 25, 10, 1, 1, 1 (Total: 6)"
        );
        assert_eq!(format_coins(&[]), "Coins used:  (Total: 0)");
    }

    #[test]
    fn greedy_table_rows() {
        let greedy = greedy_coin_change(&[4, 3, 1], 6).unwrap();
        let table = render_greedy_table(&greedy);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Step | Coin Used | Remaining Amount"));
        assert!(lines[2].contains('4'));
        assert!(lines[2].trim_end().ends_with('2'));
        assert!(lines[4].trim_end().ends_with('0'));
    }

    #[test]
    fn greedy_table_empty_has_header_only() {
        let greedy = greedy_coin_change(&[5], 0).unwrap();
        assert_eq!(render_greedy_table(&greedy).lines().count(), 2);
    }

    #[test]
    fn dp_matrix_layout() {
        let dp = dp_coin_change(&[2], 3).unwrap();
        let rendered = render_dp_matrix(&dp.matrix);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(MATRIX_CORNER));
        assert!(lines[1].starts_with(NO_COIN_LABEL));
        assert!(lines[2].starts_with('2'));
        let last: Vec<&str> = lines[2].split_whitespace().collect();
        assert_eq!(last, vec!["2", "0", "\u{221e}", "1", "\u{221e}"]);
    }

    #[test]
    fn dp_matrix_lines_align() {
        let dp = dp_coin_change(&[1, 5, 10], 12).unwrap();
        let rendered = render_dp_matrix(&dp.matrix);
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn describe_every_verdict() {
        assert!(describe_comparison(&Comparison::Agree { coins: 6 }).contains("optimal"));
        assert!(describe_comparison(&Comparison::GreedySuboptimal {
            greedy: 3,
            optimal: 2
        })
        .contains("optimum is 2"));
        assert!(describe_comparison(&Comparison::GreedyShortfall {
            remaining: 3,
            optimal: 2
        })
        .contains("3 left"));
        assert!(
            describe_comparison(&Comparison::BothInfeasible { remaining: 1 })
                .contains("No combination")
        );
        assert!(describe_comparison(&Comparison::Incomplete).contains("one algorithm"));
    }

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert!(format_duration(Duration::from_secs(90)).contains('m'));
    }

    #[test]
    fn report_round_trips_through_file() {
        let coins = vec![2];
        let results = vec![
            SolveResult {
                algorithm: "Greedy".into(),
                outcome: GreedySolver::new().solve(&coins, 3),
                duration: Duration::ZERO,
            },
            SolveResult {
                algorithm: "DynamicProgramming".into(),
                outcome: DpSolver::new().solve(&coins, 3),
                duration: Duration::ZERO,
            },
        ];
        let report = Report::new(
            &coins,
            3,
            &results,
            Comparison::BothInfeasible { remaining: 1 },
        );

        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        write_report(&path, &report).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["amount"], 3);
        assert_eq!(json["greedy"]["result"], serde_json::json!([2]));
        assert_eq!(json["dp"]["coins_used"], serde_json::json!([]));
        assert!(json["dp"]["optimum"].is_null());
        assert_eq!(json["dp"]["matrix"][1], serde_json::json!([0, null, 1, null]));
        assert_eq!(json["comparison"]["verdict"], "both_infeasible");
    }

    #[test]
    fn report_skips_missing_solvers() {
        let coins = vec![1];
        let results = vec![SolveResult {
            algorithm: "Greedy".into(),
            outcome: GreedySolver::new().solve(&coins, 2),
            duration: Duration::ZERO,
        }];
        let report = Report::new(&coins, 2, &results, Comparison::Incomplete);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("dp").is_none());
        assert!(json.get("greedy").is_some());
    }
}
