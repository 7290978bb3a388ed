use serde::Serialize;

/// An owned tree node: a label and its ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(label: impl Into<String>, child: TreeNode) -> Self {
        Self {
            label: label.into(),
            children: vec![child],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, counted without recursion.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Maximum number of children held by any node in this subtree.
    pub fn max_fan_out(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            max = max.max(node.children.len());
            stack.extend(node.children.iter());
        }
        max
    }

    /// Labels in depth-first pre-order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            labels.push(node.label.as_str());
            stack.extend(node.children.iter().rev());
        }
        labels
    }
}

// Long chains would otherwise drop recursively, one frame per level.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
