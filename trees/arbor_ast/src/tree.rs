//! The unbalanced binary tree built directly from parser output.

/// A single node of the unbalanced binary tree.
///
/// Each node exclusively owns its children; dropping a node drops its
/// whole subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    /// The node's value as written in the source string.
    pub value: i64,
    /// The first child encountered in the source, if any.
    pub left: Option<Box<TreeNode>>,
    /// The second child encountered in the source, if any.
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Creates a node with no children.
    pub fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// An ordinary (unbalanced) binary tree.
///
/// The shape is exactly what the source string described; nothing is
/// sorted or rebalanced here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryTree {
    root: Option<Box<TreeNode>>,
}

impl BinaryTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree from an already-built root link.
    pub fn from_root(root: Option<Box<TreeNode>>) -> Self {
        Self { root }
    }

    /// The root node, if the tree is non-empty.
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        fn count(link: &Option<Box<TreeNode>>) -> usize {
            link.as_ref()
                .map_or(0, |n| 1 + count(&n.left) + count(&n.right))
        }
        count(&self.root)
    }

    /// The height of the tree: 0 for empty, 1 for a single node.
    pub fn height(&self) -> usize {
        fn depth(link: &Option<Box<TreeNode>>) -> usize {
            link.as_ref()
                .map_or(0, |n| 1 + depth(&n.left).max(depth(&n.right)))
        }
        depth(&self.root)
    }

    /// Pre-order depth-first traversal: node, then left subtree, then
    /// right subtree.
    ///
    /// This yields values in the exact left-to-right order they appeared
    /// in the source string, and is the feed used to populate the AVL
    /// tree.
    pub fn depth_first(&self) -> Vec<i64> {
        fn walk(link: &Option<Box<TreeNode>>, out: &mut Vec<i64>) {
            if let Some(node) = link {
                out.push(node.value);
                walk(&node.left, out);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len());
        walk(&self.root, &mut out);
        out
    }
}
