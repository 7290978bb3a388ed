use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::MAX_DELAY_MS;
use crate::display::OutputFormat;
use crate::tree::LabelMarkup;

/// Puzzle Path Tree - inspect sliding-puzzle solution paths as a tree
#[derive(Parser, Debug)]
#[command(name = "puzzle-path-tree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH", env = "PUZZLE_PATH_TREE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse a path in an interactive tree view
    Show(ShowArgs),

    /// Print a path as a tree or JSON
    Print(PrintArgs),

    /// Replay a path as a console animation
    Play(PlayArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Path file (JSON or text, `-` for stdin); omit for the example path
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Start with only the root expanded
    #[arg(long)]
    pub collapsed: bool,
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Path file (JSON or text, `-` for stdin); omit for the example path
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
    pub format: OutputFormat,

    /// Label markup (overrides the config file)
    #[arg(short, long, value_enum)]
    pub markup: Option<LabelMarkup>,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path file (JSON or text, `-` for stdin); omit for the example path
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Delay between frames, 1-60000 (overrides the config file)
    #[arg(
        short,
        long,
        value_name = "MS",
        value_parser = clap::value_parser!(u64).range(1..=MAX_DELAY_MS)
    )]
    pub delay_ms: Option<u64>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
