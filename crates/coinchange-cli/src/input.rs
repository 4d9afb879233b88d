//! Parsing of free-text user input into denominations and an amount.
//!
//! Tokens that do not parse as a positive integer are dropped from the
//! coin list with a warning. Zero and negative coins are dropped too: the
//! solvers need strictly positive denominations.

use tracing::warn;

use coinchange_core::solver::CoinError;

/// Parse a list of denominations such as `"1, 5, 10, 25"`.
///
/// Commas and whitespace both separate tokens. Duplicates are kept and the
/// input order is preserved.
pub fn parse_coins(input: &str) -> Result<Vec<usize>, CoinError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoinError::InvalidInput(
            "no coin denominations given".into(),
        ));
    }

    let mut coins = Vec::new();
    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.parse::<usize>() {
            Ok(0) => warn!(token, "ignoring zero denomination"),
            Ok(coin) => coins.push(coin),
            Err(_) => warn!(token, "ignoring denomination that is not a positive integer"),
        }
    }

    if coins.is_empty() {
        return Err(CoinError::InvalidInput(format!(
            "no valid coin denominations in {input:?}"
        )));
    }
    Ok(coins)
}

/// Parse a non-negative target amount.
pub fn parse_amount(input: &str) -> Result<usize, CoinError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoinError::InvalidInput("no target amount given".into()));
    }
    input
        .parse()
        .map_err(|_| CoinError::InvalidInput(format!("amount {input:?} is not a non-negative integer")))
}
