//! Play command implementation

use std::time::Duration;

use crate::cli::PlayArgs;
use crate::config::Config;
use crate::display::animate;
use crate::error::Result;
use crate::input::{load_path, InputSource};

/// Run the play command
pub fn run(args: PlayArgs, config: &Config) -> Result<()> {
    // Both sources are range-checked: the flag by clap, the config by validate().
    let delay_ms = args.delay_ms.unwrap_or(config.play.delay_ms);

    let path = load_path(&InputSource::from_arg(args.input.as_deref()))?;

    if path.is_empty() {
        println!("Nothing to play: the path is empty");
        return Ok(());
    }

    tracing::info!(states = path.len(), delay_ms, "Playing path");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    animate(&mut out, &path, Duration::from_millis(delay_ms))
}
