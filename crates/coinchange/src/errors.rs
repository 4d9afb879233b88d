//! Error handling and exit codes.

use coinchange_core::constants::exit_codes;
use coinchange_core::solver::CoinError;

/// Map a coin change error to the process exit code.
pub fn handle_error(err: &CoinError) -> i32 {
    match err {
        CoinError::ZeroDenomination | CoinError::InvalidInput(_) | CoinError::Config(_) => {
            exit_codes::ERROR_CONFIG
        }
        CoinError::TableTooLarge { .. } => exit_codes::ERROR_TABLE_TOO_LARGE,
        CoinError::Cancelled => exit_codes::ERROR_CANCELED,
        CoinError::Output(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error; non-domain errors are generic.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CoinError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
