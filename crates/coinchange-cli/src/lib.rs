//! # coinchange-cli
//!
//! The terminal presenter: parses user input, renders the greedy step
//! table and the DP matrix, replays both at a timed cadence, and writes
//! JSON reports.

pub mod animation;
pub mod completion;
pub mod input;
pub mod output;
pub mod presenter;
pub mod ui;

pub use animation::{Cadence, Player};
pub use presenter::CLIResultPresenter;
