//! Interactive terminal view of a path tree.

pub mod app;
pub mod event;
pub mod ui;

pub use app::App;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::TuiConfig;
use crate::display::DisplayHost;
use crate::error::{PathTreeError, Result};
use crate::tree::PathTree;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Shows a tree in the terminal until the user quits.
pub struct TerminalHost {
    config: TuiConfig,
}

impl TerminalHost {
    pub fn new(config: TuiConfig) -> Self {
        Self { config }
    }
}

impl DisplayHost for TerminalHost {
    fn show(&mut self, tree: &PathTree) -> Result<()> {
        run(tree, &self.config)
    }
}

/// Run the TUI event loop over `tree`.
///
/// The terminal is restored before returning, also when the loop fails.
pub fn run(tree: &PathTree, config: &TuiConfig) -> Result<()> {
    install_panic_hook();

    let mut terminal = setup_terminal(&config.title).map_err(PathTreeError::Terminal)?;
    tracing::debug!(nodes = tree.len(), "Terminal ready");

    let app = App::new(tree, config);
    let result = event_loop(&mut terminal, app, Duration::from_millis(config.tick_rate_ms));
    let restored = restore_terminal(&mut terminal);

    result.map_err(PathTreeError::Terminal)?;
    restored.map_err(PathTreeError::Terminal)
}

fn event_loop(terminal: &mut Term, mut app: App<'_>, tick_rate: Duration) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(&app, frame))?;
        event::handle_events(&mut app, tick_rate)?;
    }
    Ok(())
}

fn setup_terminal(title: &str) -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(title))?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// Leave raw mode before the default hook prints the panic message.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        hook(info);
    }));
}
