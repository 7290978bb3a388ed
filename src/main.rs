use anyhow::Result;
use clap::Parser;

use puzzle_path_tree::cli::{Cli, Command, ShowArgs};
use puzzle_path_tree::commands;
use puzzle_path_tree::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command.unwrap_or(Command::Show(ShowArgs::default())) {
        Command::Show(args) => {
            tracing::info!(?args, "Starting tree view");
            commands::show::run(args, &config)?;
        }
        Command::Print(args) => {
            tracing::info!(?args, "Starting print");
            commands::print::run(args, &config)?;
        }
        Command::Play(args) => {
            tracing::info!(?args, "Starting playback");
            commands::play::run(args, &config)?;
        }
        Command::Completions(args) => {
            commands::completions::run(args);
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("puzzle_path_tree={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
