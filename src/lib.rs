//! Puzzle Path Tree - inspect sliding-puzzle solution paths as a tree
//!
//! This crate provides functionality for:
//! - Rendering a path of board states as a linear tree
//! - Browsing that tree in an interactive terminal view
//! - Printing it as text or JSON, or replaying it as a console animation

pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod tree;
pub mod tui;

// Re-export commonly used types
pub use board::BoardState;
pub use config::Config;
pub use error::{PathTreeError, Result};
pub use tree::{render, PathTree, PathTreeRenderer, TreeNode};
