//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, Mode, VisibleEntry};
use crate::board::BLANK;
use crate::display::MAX_INDENT_DEPTH;

/// Render the entire UI.
pub fn render(app: &App<'_>, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Tree view
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_tree_area(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    if app.mode == Mode::Help {
        render_help_overlay(frame);
    }
}

fn render_header(app: &App<'_>, frame: &mut Frame, area: Rect) {
    let states = app.tree.state_count();
    let position = app
        .selected_entry()
        .map(|e| e.index)
        .unwrap_or_default();

    let header_text = format!(
        " {} {}  │  step {}/{}",
        states,
        if states == 1 { "state" } else { "states" },
        position,
        states
    );

    let block = Block::default()
        .title(format!(" {} ", app.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(header_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_tree_area(app: &App<'_>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let heights: Vec<usize> = app
        .visible_entries
        .iter()
        .map(|entry| entry_height(app, entry))
        .collect();
    let total_rows: usize = heights.iter().sum();
    let selected_top: usize = heights.iter().take(app.selected).sum();
    let selected_height = heights.get(app.selected).copied().unwrap_or(1);
    let visible_height = inner_area.height as usize;

    let scroll_offset =
        calculate_scroll_offset(selected_top, selected_height, visible_height, total_rows);

    // Only build lines for entries that intersect the viewport.
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    let mut row = 0;
    for (i, (entry, height)) in app.visible_entries.iter().zip(&heights).enumerate() {
        if row >= scroll_offset + visible_height {
            break;
        }
        if row + height > scroll_offset {
            let skip = scroll_offset.saturating_sub(row);
            lines.extend(entry_lines(app, entry, i == app.selected).into_iter().skip(skip));
        }
        row += height;
    }
    lines.truncate(visible_height);

    frame.render_widget(Paragraph::new(lines), inner_area);
}

fn entry_height(app: &App<'_>, entry: &VisibleEntry) -> usize {
    app.node(entry)
        .map(|node| node.label().split('\n').count())
        .unwrap_or(1)
}

/// First row of the selected entry, kept `padding` rows from the top when
/// the tree is taller than the viewport.
fn calculate_scroll_offset(
    selected_top: usize,
    selected_height: usize,
    visible_height: usize,
    total_rows: usize,
) -> usize {
    if total_rows <= visible_height {
        return 0;
    }

    let padding = if selected_height + 3 <= visible_height {
        3.min(visible_height / 4)
    } else {
        0
    };

    selected_top
        .saturating_sub(padding)
        .min(total_rows - visible_height)
}

fn entry_lines(app: &App<'_>, entry: &VisibleEntry, is_selected: bool) -> Vec<Line<'static>> {
    let Some(node) = app.node(entry) else {
        return Vec::new();
    };

    let indent = "  ".repeat(entry.depth.min(MAX_INDENT_DEPTH));
    let icon = if !entry.has_children {
        "  "
    } else if entry.is_expanded {
        "▼ "
    } else {
        "► "
    };

    let step = if app.show_step_numbers && !node.is_root() {
        format!("#{} ", node.index())
    } else {
        String::new()
    };
    let continuation = " ".repeat(indent.chars().count() + icon.chars().count() + step.len());

    let label_style = if node.is_root() {
        Style::default().fg(Color::Blue).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let blank_style = Style::default().fg(Color::Black).bg(Color::Yellow);
    let step_style = Style::default().fg(Color::DarkGray);

    let highlight = app.highlight_blank && !node.is_root();
    let blank = BLANK.to_string();

    node.label()
        .split('\n')
        .enumerate()
        .map(|(i, text)| {
            let mut spans = if i == 0 {
                vec![
                    Span::styled(format!("{}{}", indent, icon), label_style),
                    Span::styled(step.clone(), step_style),
                ]
            } else {
                vec![Span::raw(continuation.clone())]
            };

            if highlight {
                for (j, token) in text.split(' ').enumerate() {
                    if j > 0 {
                        spans.push(Span::styled(" ", label_style));
                    }
                    let style = if token == blank { blank_style } else { label_style };
                    spans.push(Span::styled(token.to_string(), style));
                }
            } else {
                spans.push(Span::styled(text.to_string(), label_style));
            }

            let line = Line::from(spans);
            if is_selected {
                line.style(Style::default().bg(Color::DarkGray))
            } else {
                line
            }
        })
        .collect()
}

fn render_footer(app: &App<'_>, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal => "[↑↓] Navigate  [←→] Collapse/Expand  [e/c] All  [?] Help  [q] Quit",
        Mode::Help => "[Esc] Close",
    };

    let text = app.status_message.as_deref().unwrap_or(hints);

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let help_width = 50u16.min(area.width.saturating_sub(8));
    let help_height = 19u16.min(area.height.saturating_sub(4));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 NAVIGATION
 ─────────────────────────────────
 ↑/k        Move up
 ↓/j        Move down
 →/l/Enter  Expand state
 ←/h/Bksp   Collapse / Go to parent
 Space      Toggle expand/collapse
 g / G      Go to top / bottom

 VIEW
 ─────────────────────────────────
 e          Expand all
 c          Collapse all
 ?          Toggle this help
 q/Esc      Quit
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{example_path, BoardState};
    use crate::config::TuiConfig;
    use crate::tree::render as render_tree;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
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
    fn test_render_does_not_panic() {
        let tree = render_tree(&[]);
        let app = App::new(&tree, &TuiConfig::default());
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let output = buffer_text(&terminal);
        assert!(output.contains("Start"));
        assert!(output.contains("0 states"));
    }

    #[test]
    fn test_render_shows_first_states() {
        let tree = render_tree(&example_path());
        let app = App::new(&tree, &TuiConfig::default());
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let output = buffer_text(&terminal);
        assert!(output.contains("Puzzle Solution Tree"));
        assert!(output.contains("▼ Start"));
        assert!(output.contains("#1 1 2 3"));
        assert!(output.contains("4 0 5"));
    }

    #[test]
    fn test_render_collapsed_marker() {
        let tree = render_tree(&example_path());
        let config = TuiConfig {
            expand_all: false,
            ..TuiConfig::default()
        };
        let app = App::new(&tree, &config);
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let output = buffer_text(&terminal);
        assert!(output.contains("► #1 1 2 3"));
        assert!(!output.contains("#2"));
    }

    #[test]
    fn test_render_scrolls_to_selection() {
        let tree = render_tree(&example_path());
        let mut app = App::new(&tree, &TuiConfig::default());
        app.select_last();

        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let output = buffer_text(&terminal);
        assert!(output.contains("#7 1 0 3"));
        assert!(!output.contains("Start"));
    }

    #[test]
    fn test_entry_height_counts_trailing_empty_row() {
        let ragged: BoardState = vec![vec![1, 2, 3], vec![4, 0], vec![]].into();
        let tree = render_tree(&[ragged]);
        let app = App::new(&tree, &TuiConfig::default());

        assert_eq!(entry_height(&app, &app.visible_entries[1]), 3);
        assert_eq!(entry_lines(&app, &app.visible_entries[1], false).len(), 3);
    }

    #[test]
    fn test_deep_entries_indent_is_capped() {
        let state: BoardState = [[1, 0]].into();
        let tree = render_tree(&vec![state; 100]);
        let mut app = App::new(&tree, &TuiConfig::default());
        app.select_last();

        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let output = buffer_text(&terminal);
        let indent = "  ".repeat(MAX_INDENT_DEPTH);
        assert!(output.contains(&format!("│{}  #100 1 0", indent)));
    }

    #[test]
    fn test_render_help_overlay() {
        let tree = render_tree(&example_path());
        let mut app = App::new(&tree, &TuiConfig::default());
        app.mode = Mode::Help;

        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_text(&terminal).contains("NAVIGATION"));
    }

    #[test]
    fn test_calculate_scroll_offset() {
        // Fits: no scroll
        assert_eq!(calculate_scroll_offset(10, 3, 30, 25), 0);

        // At the top
        assert_eq!(calculate_scroll_offset(0, 3, 10, 100), 0);
        assert_eq!(calculate_scroll_offset(2, 3, 10, 100), 0);

        // In the middle, padded
        assert_eq!(calculate_scroll_offset(50, 3, 10, 100), 48);

        // At the bottom
        assert_eq!(calculate_scroll_offset(97, 3, 10, 100), 90);

        // Entry taller than the padding allows
        assert_eq!(calculate_scroll_offset(40, 9, 10, 100), 40);
    }
}
