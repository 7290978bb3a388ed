use std::io::Write;

use super::{DisplayHost, MAX_INDENT_DEPTH};
use crate::error::{PathTreeError, Result};
use crate::tree::{NodeRef, PathTree};

/// Output format for printed trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented tree with box-drawing connectors
    #[default]
    Tree,
    /// Flat JSON node list
    Json,
}

/// Writes a tree to any writer.
pub struct TextHost<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> TextHost<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplayHost for TextHost<W> {
    fn show(&mut self, tree: &PathTree) -> Result<()> {
        match self.format {
            OutputFormat::Tree => self
                .out
                .write_all(format_tree(tree).as_bytes())
                .map_err(PathTreeError::Output)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, &tree.to_flat())
                    .map_err(PathTreeError::Encode)?;
                writeln!(self.out).map_err(PathTreeError::Output)?;
            }
        }
        self.out.flush().map_err(PathTreeError::Output)
    }
}

/// Format a tree with `├──`/`└──` connectors.
///
/// Extra lines of a multi-line label are aligned under its first line.
/// Below [`MAX_INDENT_DEPTH`] children keep their parent's indentation.
pub fn format_tree(tree: &PathTree) -> String {
    let mut output = String::new();
    let mut stack: Vec<(NodeRef<'_>, String, bool)> = vec![(tree.root(), String::new(), true)];

    while let Some((node, prefix, is_last)) = stack.pop() {
        let (connector, continuation) = if node.is_root() {
            ("", String::new())
        } else if is_last {
            ("└── ", format!("{}    ", prefix))
        } else {
            ("├── ", format!("{}│   ", prefix))
        };

        let mut lines = node.label().split('\n');
        output.push_str(&format!(
            "{}{}{}\n",
            prefix,
            connector,
            lines.next().unwrap_or_default()
        ));
        for line in lines {
            output.push_str(&format!("{}{}\n", continuation, line));
        }

        let child_prefix = if node.depth() < MAX_INDENT_DEPTH {
            continuation
        } else {
            prefix
        };
        let children: Vec<_> = node.children().collect();
        let count = children.len();
        for (i, child) in children.into_iter().enumerate().rev() {
            stack.push((child, child_prefix.clone(), i + 1 == count));
        }
    }

    output
}
