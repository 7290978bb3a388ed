//! Path-to-tree rendering.

mod label;
mod node;
mod renderer;

pub use label::{format_label, LabelMarkup};
pub use node::TreeNode;
pub use renderer::{
    render, FlatNode, FlatTree, NodeRef, PathTree, PathTreeRenderer, DEFAULT_ROOT_LABEL,
};
