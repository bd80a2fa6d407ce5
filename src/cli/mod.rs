//! Run orchestration, kept apart from argument parsing in `main.rs`

pub mod orchestration;

pub use orchestration::{collect_warnings, RunOptions, RunOutcome, Tracker};
