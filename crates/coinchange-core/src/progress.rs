//! Cooperative cancellation for the rendering side.
//!
//! Solvers always run to completion; the token only stops whoever is
//! ticking through frames of an already-computed result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::solver::CoinError;

/// Cancellation token shared between a tick source and its controller.
///
/// # Example
/// ```
/// use coinchange_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Checkpoint for frame loops.
    pub fn check_cancelled(&self) -> Result<(), CoinError> {
        if self.is_cancelled() {
            Err(CoinError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
