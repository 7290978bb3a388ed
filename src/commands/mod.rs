//! Subcommand implementations

pub mod completions;
pub mod play;
pub mod print;
pub mod show;
