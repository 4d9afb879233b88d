//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use coinchange_cli::animation::Cadence;
use coinchange_core::solver::CoinError;

/// CoinChange-rs: compare greedy and dynamic-programming coin change.
#[derive(Parser, Debug)]
#[command(name = "coinchange", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Coin denominations, e.g. "1, 5, 10, 25".
    #[arg(short, long, env = "COINCHANGE_COINS")]
    pub coins: Option<String>,

    /// Target amount.
    #[arg(short, long, env = "COINCHANGE_AMOUNT")]
    pub amount: Option<String>,

    /// Algorithm to use: greedy, dp, or all.
    #[arg(long, default_value = "all", env = "COINCHANGE_ALGO")]
    pub algo: String,

    /// Replay the results step by step.
    #[arg(long)]
    pub animate: bool,

    /// Delay per DP table cell when animating (e.g. "800ms", "1s").
    #[arg(long, default_value = "800ms")]
    pub cell_delay: String,

    /// Delay per greedy step or picked coin when animating.
    #[arg(long, default_value = "1s")]
    pub coin_delay: String,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show the greedy step table and the DP matrix.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only print the coins).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write a JSON report to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Largest DP table to build, in cells (e.g. "10M", "0" for no limit).
    #[arg(long, default_value = "10M")]
    pub max_cells: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Animation cadence from the two delay flags.
    pub fn cadence(&self) -> Result<Cadence, CoinError> {
        Ok(Cadence {
            cell: parse_delay("cell-delay", &self.cell_delay)?,
            coin: parse_delay("coin-delay", &self.coin_delay)?,
        })
    }
}

fn parse_delay(flag: &str, value: &str) -> Result<Duration, CoinError> {
    parse_duration(value)
        .ok_or_else(|| CoinError::Config(format!("--{flag}: cannot parse {value:?} as a duration")))
}

/// Parse a duration string like "800ms", "1s", "2m".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n * 60))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_millis(n))
    }
}
