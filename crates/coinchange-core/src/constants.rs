//! Constants shared by the solvers, the presenter and the binary.

/// Delay between two matrix cells when animating the DP table fill.
pub const DEFAULT_CELL_DELAY_MS: u64 = 800;

/// Delay between two picked coins when animating the backtracking.
pub const DEFAULT_COIN_DELAY_MS: u64 = 1000;

/// Default upper bound on DP table cells (`(coins + 1) * (amount + 1)`).
pub const DEFAULT_MAX_CELLS: usize = 10_000_000;

/// Symbol rendered for an unreachable DP cell.
pub const INFINITY_SYMBOL: &str = "\u{221e}";

/// Exit codes for the `coinchange` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or unparseable input.
    pub const ERROR_CONFIG: i32 = 4;
    /// The DP table would exceed the configured cell limit.
    pub const ERROR_TABLE_TOO_LARGE: i32 = 5;
    /// Animation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
