//! Turns a board path into a linear tree.
//!
//! The tree is stored as a flat list of labels: index 0 is the root and each
//! index `i` has index `i + 1` as its only child. [`NodeRef`] walks that list
//! as if it were a tree so displays never need real node allocations.

use serde::Serialize;

use super::label::{format_label, LabelMarkup};
use super::node::TreeNode;
use crate::board::BoardState;

/// Default label of the root node.
pub const DEFAULT_ROOT_LABEL: &str = "Start";

/// A rendered path: a root label followed by one label per board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTree {
    labels: Vec<String>,
}

impl PathTree {
    /// The root node. Always present, even for an empty path.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            index: 0,
        }
    }

    /// Node at `index`, where the root is 0 and state `i` is `i + 1`.
    pub fn node(&self, index: usize) -> Option<NodeRef<'_>> {
        (index < self.labels.len()).then_some(NodeRef { tree: self, index })
    }

    /// Number of nodes, root included, so never 0.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Number of board states in the chain.
    pub fn state_count(&self) -> usize {
        self.labels.len() - 1
    }

    /// True when the path had no states and the root stands alone.
    pub fn has_no_states(&self) -> bool {
        self.state_count() == 0
    }

    /// Iterate from the root down the chain.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.labels.len()).map(move |index| NodeRef { tree: self, index })
    }

    /// Materialize the chain as owned [`TreeNode`]s, built bottom-up.
    pub fn to_node(&self) -> TreeNode {
        let mut labels = self.labels.iter().rev();
        // labels always holds the root
        let mut node = TreeNode::leaf(labels.next().cloned().unwrap_or_default());
        for label in labels {
            node = TreeNode::with_child(label.clone(), node);
        }
        node
    }

    /// Flat encoding of the tree with parent and child links.
    pub fn to_flat(&self) -> FlatTree<'_> {
        FlatTree {
            nodes: self
                .iter()
                .map(|node| FlatNode {
                    id: node.index(),
                    label: node.label(),
                    parent: node.parent().map(|p| p.index()),
                    children: node.children().map(|c| c.index()).collect(),
                })
                .collect(),
        }
    }
}

/// Borrowed view of one node of a [`PathTree`].
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a PathTree,
    index: usize,
}

impl<'a> NodeRef<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> &'a str {
        &self.tree.labels[self.index]
    }

    /// Distance from the root. In a chain this equals the index.
    pub fn depth(&self) -> usize {
        self.index
    }

    pub fn is_root(&self) -> bool {
        self.index == 0
    }

    pub fn child(&self) -> Option<NodeRef<'a>> {
        self.tree.node(self.index + 1)
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> {
        self.child().into_iter()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.index.checked_sub(1).and_then(|i| self.tree.node(i))
    }

    pub fn is_leaf(&self) -> bool {
        self.child().is_none()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

/// Serializable node list produced by [`PathTree::to_flat`].
#[derive(Debug, Serialize)]
pub struct FlatTree<'a> {
    pub nodes: Vec<FlatNode<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FlatNode<'a> {
    pub id: usize,
    pub label: &'a str,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// Builds [`PathTree`]s from board paths.
#[derive(Debug, Clone)]
pub struct PathTreeRenderer {
    root_label: String,
    markup: LabelMarkup,
}

impl Default for PathTreeRenderer {
    fn default() -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            markup: LabelMarkup::default(),
        }
    }
}

impl PathTreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    pub fn with_markup(mut self, markup: LabelMarkup) -> Self {
        self.markup = markup;
        self
    }

    /// Render `path` as a root followed by one node per state, in order.
    ///
    /// States are formatted as given; nothing is validated, reordered or
    /// dropped.
    pub fn render(&self, path: &[BoardState]) -> PathTree {
        let mut labels = Vec::with_capacity(path.len() + 1);
        labels.push(self.root_label.clone());
        for state in path {
            labels.push(format_label(state, self.markup));
        }

        tracing::debug!(nodes = labels.len(), markup = ?self.markup, "Rendered path tree");

        PathTree { labels }
    }
}

/// Render with the default root label and plain labels.
pub fn render(path: &[BoardState]) -> PathTree {
    PathTreeRenderer::default().render(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::example_path;

    fn two_states() -> Vec<BoardState> {
        vec![
            [[1, 2, 3], [4, 0, 5], [6, 7, 8]].into(),
            [[1, 2, 3], [4, 7, 5], [6, 0, 8]].into(),
        ]
    }

    #[test]
    fn test_empty_path_is_single_root() {
        let tree = render(&[]);
        assert_eq!(tree.len(), 1);
        assert!(tree.has_no_states());
        assert_eq!(tree.root().label(), DEFAULT_ROOT_LABEL);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().children().count(), 0);
    }

    #[test]
    fn test_single_state_is_two_nodes() {
        let tree = render(&two_states()[..1]);
        assert_eq!(tree.len(), 2);
        let leaf = tree.root().child().unwrap();
        assert!(leaf.is_leaf());
        assert_eq!(leaf.label(), "1 2 3\n4 0 5\n6 7 8");
    }

    #[test]
    fn test_two_state_example() {
        let tree = render(&two_states());
        let root = tree.root();
        assert_eq!(root.label(), "Start");

        let first = root.child().unwrap();
        assert_eq!(first.label(), "1 2 3\n4 0 5\n6 7 8");

        let second = first.child().unwrap();
        assert_eq!(second.label(), "1 2 3\n4 7 5\n6 0 8");
        assert!(second.child().is_none());
    }

    #[test]
    fn test_chain_of_n_plus_one() {
        let path = example_path();
        let tree = render(&path);
        assert_eq!(tree.len(), path.len() + 1);
        for node in tree.iter() {
            assert!(node.children().count() <= 1);
            assert_eq!(node.depth(), node.index());
        }
    }

    #[test]
    fn test_order_preserved_with_duplicates() {
        let a: BoardState = [[0, 1], [2, 3]].into();
        let b: BoardState = [[1, 0], [2, 3]].into();
        let path = vec![a.clone(), b.clone(), a.clone(), a.clone()];
        let tree = render(&path);

        let labels: Vec<&str> = tree.iter().skip(1).map(|n| n.label()).collect();
        assert_eq!(labels, vec!["0 1\n2 3", "1 0\n2 3", "0 1\n2 3", "0 1\n2 3"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let path = example_path();
        let renderer = PathTreeRenderer::new();
        assert_eq!(renderer.render(&path), renderer.render(&path));
        assert_eq!(renderer.render(&path).to_node(), renderer.render(&path).to_node());
    }

    #[test]
    fn test_render_does_not_touch_input() {
        let path = example_path();
        let before = path.clone();
        let _ = render(&path);
        assert_eq!(path, before);
    }

    #[test]
    fn test_ragged_state_passes_through() {
        let path = vec![BoardState::new(vec![vec![1, 2, 3], vec![4, 0], vec![]])];
        let tree = render(&path);
        assert_eq!(tree.node(1).unwrap().label(), "1 2 3\n4 0\n");
    }

    #[test]
    fn test_custom_root_and_markup() {
        let tree = PathTreeRenderer::new()
            .with_root_label("Inicio")
            .with_markup(LabelMarkup::Html)
            .render(&two_states());
        assert_eq!(tree.root().label(), "Inicio");
        assert_eq!(
            tree.node(2).unwrap().label(),
            "<html>1 2 3<br>4 7 5<br>6 0 8</html>"
        );
    }

    #[test]
    fn test_parent_links() {
        let tree = render(&two_states());
        assert!(tree.root().parent().is_none());
        let second = tree.node(2).unwrap();
        assert_eq!(second.parent().unwrap(), tree.node(1).unwrap());
        assert!(tree.node(3).is_none());
    }

    #[test]
    fn test_to_node_matches_chain() {
        let tree = render(&two_states());
        let node = tree.to_node();
        assert_eq!(node.node_count(), 3);
        assert_eq!(node.max_fan_out(), 1);
        assert_eq!(
            node.labels(),
            vec!["Start", "1 2 3\n4 0 5\n6 7 8", "1 2 3\n4 7 5\n6 0 8"]
        );

        let empty = render(&[]).to_node();
        assert_eq!(empty, TreeNode::leaf("Start"));
    }

    #[test]
    fn test_long_path_renders() {
        let state: BoardState = [[1, 2, 3], [4, 0, 5], [6, 7, 8]].into();
        let path = vec![state; 100_000];
        let tree = render(&path);
        assert_eq!(tree.len(), 100_001);
        assert_eq!(tree.to_node().node_count(), 100_001);
    }

    #[test]
    fn test_flat_encoding() {
        let tree = render(&two_states());
        let flat = tree.to_flat();
        assert_eq!(flat.nodes.len(), 3);
        assert_eq!(flat.nodes[0].parent, None);
        assert_eq!(flat.nodes[0].children, vec![1]);
        assert_eq!(flat.nodes[2].parent, Some(1));
        assert!(flat.nodes[2].children.is_empty());
    }
}
