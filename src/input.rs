//! Loading board paths from files or stdin.
//!
//! Two formats are accepted:
//!
//! - JSON: an array of grids, `[[[1,2,3],[4,0,5],[6,7,8]], ...]`
//! - Text: one row per line, values separated by whitespace, states separated
//!   by blank lines. Lines starting with `#` are ignored.

use std::io::Read;
use std::path::Path;

use crate::board::{example_path, BoardState};
use crate::error::{InputError, Result};

/// Where a path comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource<'a> {
    /// The built-in example path.
    Example,
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(&'a Path),
}

impl<'a> InputSource<'a> {
    /// Map an optional CLI argument to a source; `-` means stdin.
    pub fn from_arg(arg: Option<&'a Path>) -> Self {
        match arg {
            None => InputSource::Example,
            Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(path),
        }
    }
}

/// Load a path from `source`.
pub fn load_path(source: &InputSource<'_>) -> Result<Vec<BoardState>> {
    let (name, content, json_hint) = match source {
        InputSource::Example => return Ok(example_path()),
        InputSource::Stdin => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|source| InputError::Read {
                    source_name: "<stdin>".into(),
                    source,
                })?;
            ("<stdin>".to_string(), content, false)
        }
        InputSource::File(path) => {
            let content =
                std::fs::read_to_string(path).map_err(|source| InputError::Read {
                    source_name: path.display().to_string(),
                    source,
                })?;
            let is_json = path
                .extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
            (path.display().to_string(), content, is_json)
        }
    };

    let path = if json_hint || looks_like_json(&content) {
        parse_json(&content)?
    } else {
        parse_text(&content)?
    };

    tracing::info!(source = %name, states = path.len(), "Loaded board path");
    Ok(path)
}

fn looks_like_json(content: &str) -> bool {
    content.trim_start().starts_with('[')
}

/// Parse a JSON array of grids.
pub fn parse_json(content: &str) -> std::result::Result<Vec<BoardState>, InputError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse the blank-line separated text format.
pub fn parse_text(content: &str) -> std::result::Result<Vec<BoardState>, InputError> {
    let mut path = Vec::new();
    let mut rows: Vec<Vec<u32>> = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.starts_with('#') {
            continue;
        }

        if line.is_empty() {
            if !rows.is_empty() {
                path.push(BoardState::new(std::mem::take(&mut rows)));
            }
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<u32>().map_err(|_| InputError::InvalidTile {
                    line: index + 1,
                    token: token.to_string(),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    if !rows.is_empty() {
        path.push(BoardState::new(rows));
    }

    Ok(path)
}
