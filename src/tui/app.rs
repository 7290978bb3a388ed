//! Application state for the TUI.

use std::collections::HashSet;

use crate::config::TuiConfig;
use crate::tree::{NodeRef, PathTree};

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Help overlay mode.
    Help,
}

/// A visible node in the flattened tree view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleEntry {
    /// Node index in the tree (0 = root).
    pub index: usize,
    /// Depth in the tree (0 = root).
    pub depth: usize,
    /// Whether the node has a child.
    pub has_children: bool,
    /// Whether this node is expanded.
    pub is_expanded: bool,
}

/// Main application state for the TUI.
pub struct App<'a> {
    /// Tree being inspected.
    pub tree: &'a PathTree,

    /// Title shown in the header.
    pub title: String,

    /// Flattened visible entries (for rendering).
    pub visible_entries: Vec<VisibleEntry>,

    /// Currently selected index in visible_entries.
    pub selected: usize,

    /// Indices of expanded nodes.
    pub expanded: HashSet<usize>,

    /// Current UI mode.
    pub mode: Mode,

    /// Prefix state labels with their step number.
    pub show_step_numbers: bool,

    /// Highlight the blank tile in labels.
    pub highlight_blank: bool,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App for `tree`, expanded according to `config`.
    pub fn new(tree: &'a PathTree, config: &TuiConfig) -> Self {
        let mut app = Self {
            tree,
            title: config.title.clone(),
            visible_entries: Vec::new(),
            selected: 0,
            expanded: HashSet::new(),
            mode: Mode::Normal,
            show_step_numbers: config.show_step_numbers,
            highlight_blank: config.highlight_blank,
            should_quit: false,
            status_message: None,
        };

        if config.expand_all {
            app.expand_all();
            app.status_message = None;
        } else {
            app.expanded.insert(0);
            app.rebuild_visible_entries();
        }

        app
    }

    /// Get the currently selected entry, if any.
    pub fn selected_entry(&self) -> Option<&VisibleEntry> {
        self.visible_entries.get(self.selected)
    }

    /// Node behind a visible entry.
    pub fn node(&self, entry: &VisibleEntry) -> Option<NodeRef<'a>> {
        self.tree.node(entry.index)
    }

    /// Recompute the visible entries by walking down from the root until a
    /// collapsed node is reached.
    pub fn rebuild_visible_entries(&mut self) {
        self.visible_entries.clear();

        let mut current = Some(self.tree.root());
        while let Some(node) = current {
            let is_expanded = self.expanded.contains(&node.index());
            self.visible_entries.push(VisibleEntry {
                index: node.index(),
                depth: node.depth(),
                has_children: !node.is_leaf(),
                is_expanded,
            });
            current = if is_expanded { node.child() } else { None };
        }

        if self.selected >= self.visible_entries.len() {
            self.selected = self.visible_entries.len().saturating_sub(1);
        }
    }

    /// Move the selection by `delta`, clamped to the visible entries.
    pub fn move_selection(&mut self, delta: isize) {
        if self.visible_entries.is_empty() {
            return;
        }
        let last = self.visible_entries.len() - 1;
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, last as isize) as usize;
        self.status_message = None;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_entries.len().saturating_sub(1);
    }

    pub fn expand_selected(&mut self) {
        let Some(entry) = self.selected_entry().copied() else {
            return;
        };
        if entry.has_children && !entry.is_expanded {
            self.expanded.insert(entry.index);
            self.rebuild_visible_entries();
        }
    }

    /// Collapse the selected node, or move to its parent if it is already
    /// collapsed or a leaf.
    pub fn collapse_selected(&mut self) {
        let Some(entry) = self.selected_entry().copied() else {
            return;
        };
        if entry.has_children && entry.is_expanded {
            self.expanded.remove(&entry.index);
            self.rebuild_visible_entries();
        } else if let Some(parent) = self.node(&entry).and_then(|n| n.parent()) {
            if let Some(pos) = self
                .visible_entries
                .iter()
                .position(|e| e.index == parent.index())
            {
                self.selected = pos;
            }
        }
    }

    pub fn toggle_selected(&mut self) {
        match self.selected_entry() {
            Some(entry) if entry.is_expanded => self.collapse_selected(),
            Some(_) => self.expand_selected(),
            None => {}
        }
    }

    pub fn expand_all(&mut self) {
        self.expanded = self
            .tree
            .iter()
            .filter(|node| !node.is_leaf())
            .map(|node| node.index())
            .collect();
        self.rebuild_visible_entries();
        self.status_message = Some(format!("Expanded {} states", self.tree.state_count()));
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.selected = 0;
        self.rebuild_visible_entries();
        self.status_message = Some("Collapsed all".to_string());
    }
}
