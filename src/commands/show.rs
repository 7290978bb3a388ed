//! Show command implementation

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::display::DisplayHost;
use crate::error::Result;
use crate::input::{load_path, InputSource};
use crate::tree::LabelMarkup;
use crate::tui::TerminalHost;

/// Run the show command
pub fn run(args: ShowArgs, config: &Config) -> Result<()> {
    let path = load_path(&InputSource::from_arg(args.input.as_deref()))?;

    // The terminal draws line breaks itself, so labels stay plain here.
    let tree = config.renderer().with_markup(LabelMarkup::Plain).render(&path);

    let mut tui_config = config.tui.clone();
    if args.collapsed {
        tui_config.expand_all = false;
    }

    tracing::info!(states = path.len(), "Opening tree view");
    TerminalHost::new(tui_config).show(&tree)
}
