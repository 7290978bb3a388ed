use serde::{Deserialize, Serialize};

use crate::board::BoardState;

/// How a board label marks its line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LabelMarkup {
    /// Rows joined with `\n`.
    #[default]
    Plain,
    /// Rows joined with `<br>` and wrapped in `<html>` tags.
    Html,
}

/// Render one board as a node label.
pub fn format_label(state: &BoardState, markup: LabelMarkup) -> String {
    match markup {
        LabelMarkup::Plain => state.to_string(),
        LabelMarkup::Html => {
            let rows: Vec<String> = state.row_strings().collect();
            format!("<html>{}</html>", rows.join("<br>"))
        }
    }
}
