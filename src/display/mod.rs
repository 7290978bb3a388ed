//! Display hosts: everything that presents a rendered [`PathTree`].
//!
//! Rendering itself lives in [`crate::tree`] and never touches a terminal;
//! the hosts here own all output and terminal setup.

mod animation;
mod text;

pub use animation::{animate, render_frame};
pub use text::{format_tree, OutputFormat, TextHost};

use crate::error::Result;
use crate::tree::PathTree;

/// Deepest level that still gets its own indentation step.
///
/// A path's depth equals its length, so nodes below this level are drawn at
/// the same indentation as their parent to keep output linear in path length.
pub const MAX_INDENT_DEPTH: usize = 8;

/// Something that can present a rendered path tree.
pub trait DisplayHost {
    fn show(&mut self, tree: &PathTree) -> Result<()>;
}
