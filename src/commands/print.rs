//! Print command implementation

use std::io::Write;

use crate::cli::PrintArgs;
use crate::config::Config;
use crate::display::{DisplayHost, TextHost};
use crate::error::Result;
use crate::input::{load_path, InputSource};

/// Run the print command, writing to stdout
pub fn run(args: PrintArgs, config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    run_to(args, config, stdout.lock())
}

/// Run the print command against any writer
pub fn run_to<W: Write>(args: PrintArgs, config: &Config, out: W) -> Result<()> {
    let path = load_path(&InputSource::from_arg(args.input.as_deref()))?;

    let markup = args.markup.unwrap_or(config.display.label_markup);
    let tree = config.renderer().with_markup(markup).render(&path);

    tracing::info!(states = path.len(), format = ?args.format, "Printing tree");
    TextHost::new(out, args.format).show(&tree)
}
