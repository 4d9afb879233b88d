//! Timed playback of display frames.
//!
//! The player is the tick source: it hands one frame at a time to a draw
//! callback and waits `delay` between frames. Cancelling the token stops
//! playback; the result being replayed is unaffected.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use coinchange_core::constants::{DEFAULT_CELL_DELAY_MS, DEFAULT_COIN_DELAY_MS};
use coinchange_core::frames::Frame;
use coinchange_core::progress::CancellationToken;
use coinchange_core::solver::CoinError;

/// Longest single sleep between cancellation checks.
const CANCEL_POLL: Duration = Duration::from_millis(50);

/// Tick lengths for the two kinds of animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    /// Per DP table cell.
    pub cell: Duration,
    /// Per greedy step or picked coin.
    pub coin: Duration,
}

impl Cadence {
    /// No waiting at all.
    pub const INSTANT: Self = Self {
        cell: Duration::ZERO,
        coin: Duration::ZERO,
    };
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            cell: Duration::from_millis(DEFAULT_CELL_DELAY_MS),
            coin: Duration::from_millis(DEFAULT_COIN_DELAY_MS),
        }
    }
}

/// Plays frame iterators at a fixed cadence.
pub struct Player {
    cancel: CancellationToken,
    delay: Duration,
    show_progress: bool,
}

impl Player {
    #[must_use]
    pub fn new(cancel: CancellationToken, delay: Duration) -> Self {
        Self {
            cancel,
            delay,
            show_progress: false,
        }
    }

    /// Draw an indicatif bar on stderr while playing.
    #[must_use]
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Same player, different cadence.
    #[must_use]
    pub fn with_delay(&self, delay: Duration) -> Self {
        Self {
            cancel: self.cancel.clone(),
            delay,
            show_progress: self.show_progress,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Feed every frame to `draw`, waiting between frames.
    ///
    /// Returns the number of frames drawn.
    ///
    /// # Errors
    ///
    /// `CoinError::Cancelled` once the token is cancelled, or
    /// `CoinError::Output` wrapping a failed write from `draw`.
    pub fn play<I, F>(&self, frames: I, mut draw: F) -> Result<usize, CoinError>
    where
        I: ExactSizeIterator<Item = Frame>,
        F: FnMut(&Frame) -> io::Result<()>,
    {
        let bar = self.progress_bar(frames.len() as u64);
        let mut drawn = 0;

        for frame in frames {
            self.cancel.check_cancelled()?;
            if drawn > 0 {
                self.wait()?;
            }
            bar.suspend(|| draw(&frame))
                .map_err(|e| CoinError::Output(e.to_string()))?;
            bar.inc(1);
            drawn += 1;
        }

        bar.finish_and_clear();
        debug!(frames = drawn, "playback finished");
        Ok(drawn)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress || self.delay.is_zero() {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} frames") {
            bar.set_style(style.progress_chars("=> "));
        }
        bar
    }

    /// Sleep for `delay`, waking up regularly to honour cancellation.
    fn wait(&self) -> Result<(), CoinError> {
        let deadline = Instant::now() + self.delay;
        loop {
            self.cancel.check_cancelled()?;
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return Ok(());
            }
            thread::sleep(left.min(CANCEL_POLL));
        }
    }
}
