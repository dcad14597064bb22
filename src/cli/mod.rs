//! Command-line harness over JSON graph files.

pub mod commands;
