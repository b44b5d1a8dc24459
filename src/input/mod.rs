//! Input adapters for the explorer.
//!
//! These receive input from the command line or a window and translate it
//! into configuration and per-tick input snapshots.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
