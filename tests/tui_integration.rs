//! Integration tests for the TUI module.
//!
//! These tests exercise the TUI with simulated input, verifying correct
//! behavior without requiring an actual terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use puzzle_path_tree::board::{example_path, BoardState};
use puzzle_path_tree::config::TuiConfig;
use puzzle_path_tree::tui::app::Mode;
use puzzle_path_tree::tui::event::handle_key_event;
use puzzle_path_tree::tui::ui::render;
use puzzle_path_tree::tui::App;
use puzzle_path_tree::PathTreeRenderer;
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Render the app to a string, one line per terminal row.
fn render_to_string(app: &App<'_>, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal.draw(|frame| render(app, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut output = String::new();

    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            output.push_str(buffer[(x, y)].symbol());
        }
        output.push('\n');
    }

    output
}

#[test]
fn test_walk_down_the_whole_chain() {
    let tree = PathTreeRenderer::new().render(&example_path());
    let mut app = App::new(&tree, &TuiConfig::default());

    for expected in 1..=7 {
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected, expected);
    }

    // Stays on the last state
    handle_key_event(&mut app, key(KeyCode::Down));
    assert_eq!(app.selected, 7);
    assert!(app.tree.node(app.selected).unwrap().is_leaf());
}

#[test]
fn test_collapse_then_reveal_one_level_at_a_time() {
    let tree = PathTreeRenderer::new().render(&example_path());
    let mut app = App::new(&tree, &TuiConfig::default());

    handle_key_event(&mut app, key_char('c'));
    assert_eq!(app.visible_entries.len(), 1);

    for level in 1..=7 {
        handle_key_event(&mut app, key(KeyCode::Right));
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.visible_entries.len(), level + 1);
        assert_eq!(app.selected, level);
    }

    // The leaf cannot expand further
    handle_key_event(&mut app, key(KeyCode::Right));
    assert_eq!(app.visible_entries.len(), 8);
}

#[test]
fn test_left_walks_back_to_root() {
    let tree = PathTreeRenderer::new().render(&example_path());
    let mut app = App::new(&tree, &TuiConfig::default());
    app.selected = 7;

    // leaf: jump to parent
    handle_key_event(&mut app, key(KeyCode::Left));
    assert_eq!(app.selected, 6);

    // expanded: collapse in place
    handle_key_event(&mut app, key_char('h'));
    assert_eq!(app.selected, 6);
    assert_eq!(app.visible_entries.len(), 7);
}

#[test]
fn test_single_state_tree() {
    let state: BoardState = [[1, 2, 3], [4, 0, 5], [6, 7, 8]].into();
    let tree = PathTreeRenderer::new().render(&[state]);
    let app = App::new(&tree, &TuiConfig::default());

    assert_eq!(app.visible_entries.len(), 2);
    let output = render_to_string(&app, 60, 16);
    assert!(output.contains("1 state "));
    assert!(output.contains("#1 1 2 3"));
}

#[test]
fn test_custom_title_and_root_label() {
    let tree = PathTreeRenderer::new()
        .with_root_label("Inicio")
        .render(&example_path());
    let config = TuiConfig {
        title: "Arbol".to_string(),
        show_step_numbers: false,
        ..TuiConfig::default()
    };
    let app = App::new(&tree, &config);

    let output = render_to_string(&app, 80, 24);
    assert!(output.contains(" Arbol "));
    assert!(output.contains("▼ Inicio"));
    assert!(!output.contains("#1"));
}

#[test]
fn test_help_overlay_via_keys() {
    let tree = PathTreeRenderer::new().render(&example_path());
    let mut app = App::new(&tree, &TuiConfig::default());

    handle_key_event(&mut app, key_char('?'));
    assert_eq!(app.mode, Mode::Help);
    assert!(render_to_string(&app, 80, 30).contains("Collapse all"));

    handle_key_event(&mut app, key_char('q'));
    assert_eq!(app.mode, Mode::Normal);
    assert!(!app.should_quit);

    handle_key_event(&mut app, key_char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_status_message_replaces_hints() {
    let tree = PathTreeRenderer::new().render(&example_path());
    let mut app = App::new(&tree, &TuiConfig::default());

    handle_key_event(&mut app, key_char('c'));
    let output = render_to_string(&app, 80, 24);
    assert!(output.contains("Collapsed all"));
    assert!(!output.contains("[q] Quit"));

    // moving clears it
    handle_key_event(&mut app, key(KeyCode::Down));
    let output = render_to_string(&app, 80, 24);
    assert!(output.contains("[q] Quit"));
}
