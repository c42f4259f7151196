//! AVL tree implementation: nodes, rotations, and iterative traversals.

use std::collections::VecDeque;

use log::trace;

type Link = Option<Box<AvlNode>>;

/// A node of the AVL tree.
///
/// `height` is cached: 1 for a leaf, and `1 + max(children)` otherwise.
/// An absent link counts as height 0.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AvlNode {
    value: i64,
    height: u32,
    left: Link,
    right: Link,
}

impl AvlNode {
    fn new(value: i64) -> Box<Self> {
        Box::new(Self {
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }
}

fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Right rotation around `node`; the caller replaces its link with the
/// returned subtree root. Child height is refreshed before the new root's.
fn rotate_right(mut node: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut root) = node.left.take() else {
        return node;
    };
    trace!("rotate_right at {}", node.value);
    node.left = root.right.take();
    node.update_height();
    root.right = Some(node);
    root.update_height();
    root
}

/// Mirror image of [`rotate_right`].
fn rotate_left(mut node: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut root) = node.right.take() else {
        return node;
    };
    trace!("rotate_left at {}", node.value);
    node.right = root.left.take();
    node.update_height();
    root.left = Some(node);
    root.update_height();
    root
}

/// Refreshes `node`'s height and applies whichever of the four rotation
/// cases its balance factor calls for. Covers both the insertion case
/// (at most one rotation site per call chain) and the deletion case
/// (possibly one rotation per ancestor level).
fn rebalance(mut node: Box<AvlNode>) -> Box<AvlNode> {
    node.update_height();
    let bf = node.balance_factor();

    if bf > 1 {
        // Left-right case: straighten the left child first.
        if node.left.as_ref().map_or(0, |n| n.balance_factor()) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if bf < -1 {
        // Right-left case, mirrored.
        if node.right.as_ref().map_or(0, |n| n.balance_factor()) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

fn insert_link(link: Link, value: i64) -> (Box<AvlNode>, bool) {
    let Some(mut node) = link else {
        return (AvlNode::new(value), true);
    };

    let inserted = if value < node.value {
        let (child, inserted) = insert_link(node.left.take(), value);
        node.left = Some(child);
        inserted
    } else if value > node.value {
        let (child, inserted) = insert_link(node.right.take(), value);
        node.right = Some(child);
        inserted
    } else {
        // Duplicate: the tree is left untouched.
        false
    };

    if inserted {
        (rebalance(node), true)
    } else {
        (node, false)
    }
}

fn min_value(mut node: &AvlNode) -> i64 {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node.value
}

fn remove_link(link: Link, value: i64) -> (Link, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };

    let removed;
    if value < node.value {
        let (child, r) = remove_link(node.left.take(), value);
        node.left = child;
        removed = r;
    } else if value > node.value {
        let (child, r) = remove_link(node.right.take(), value);
        node.right = child;
        removed = r;
    } else {
        match (node.left.take(), node.right.take()) {
            (None, None) => return (None, true),
            (Some(only), None) | (None, Some(only)) => return (Some(only), true),
            (Some(left), Some(right)) => {
                // Copy the in-order successor's value into this node, then
                // delete that value from the right subtree. Only the value
                // moves; the successor node's identity and children stay
                // where they are until the recursive removal reaches them.
                node.left = Some(left);
                node.value = min_value(&right);
                let (child, _) = remove_link(Some(right), node.value);
                node.right = child;
                removed = true;
            }
        }
    }

    if removed {
        (Some(rebalance(node)), true)
    } else {
        (Some(node), false)
    }
}

/// A self-balancing binary search tree over unique `i64` values.
///
/// # Examples
///
/// ```
/// use arbor_avl::AvlTree;
///
/// let tree: AvlTree = [1, 2, 3].into_iter().collect();
/// assert_eq!(tree.breadth_first(), vec![2, 1, 3]);
/// assert!(tree.contains(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvlTree {
    root: Link,
    len: usize,
}

impl AvlTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The height of the tree: 0 for empty, 1 for a single node.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts a value, rebalancing as needed.
    ///
    /// Returns `false` if the value was already present; duplicates leave
    /// the tree unchanged.
    pub fn insert(&mut self, value: i64) -> bool {
        let (root, inserted) = insert_link(self.root.take(), value);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a value, rebalancing every ancestor as needed.
    ///
    /// Returns `false` if the value was not present. A node with two
    /// children is removed by overwriting its value with the in-order
    /// successor (the minimum of its right subtree) and deleting that
    /// value from the right subtree.
    pub fn remove(&mut self, value: i64) -> bool {
        let (root, removed) = remove_link(self.root.take(), value);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Whether the tree contains `value`. Iterative BST descent with no
    /// side effects.
    pub fn contains(&self, value: i64) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if value == node.value {
                return true;
            }
            current = if value < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    /// Inserts every value from the iterator, ignoring duplicates.
    pub fn extend<I: IntoIterator<Item = i64>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }

    /// Level order, using a FIFO queue; left child visited before right.
    pub fn breadth_first(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&AvlNode> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push(node.value);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        out
    }

    /// Pre-order (node, left, right), iterative: right child is pushed
    /// before left so left pops first.
    pub fn pre_order(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&AvlNode> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node.value);
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
        out
    }

    /// In-order (left, node, right) via the classic left-spine stack walk.
    /// Output is strictly ascending, which is what certifies the BST
    /// property.
    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&AvlNode> = Vec::new();
        let mut current = self.root.as_deref();
        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                out.push(node.value);
                current = node.right.as_deref();
            }
        }
        out
    }

    /// Post-order (left, right, node) with the two-stack technique: the
    /// first stack pops nodes pushing children left-then-right, the second
    /// stack reverses that into post-order.
    pub fn post_order(&self) -> Vec<i64> {
        let mut first: Vec<&AvlNode> = self.root.as_deref().into_iter().collect();
        let mut second: Vec<&AvlNode> = Vec::with_capacity(self.len);
        while let Some(node) = first.pop() {
            second.push(node);
            if let Some(left) = node.left.as_deref() {
                first.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                first.push(right);
            }
        }
        second.iter().rev().map(|node| node.value).collect()
    }

    /// Diagnostic: whether every node's cached height is consistent and
    /// its balance factor lies in `[-1, 1]`.
    pub fn is_balanced(&self) -> bool {
        fn check(link: &Link) -> Option<u32> {
            let Some(node) = link else { return Some(0) };
            let left = check(&node.left)?;
            let right = check(&node.right)?;
            let expected = 1 + left.max(right);
            let bf = left as i32 - right as i32;
            if node.height == expected && bf.abs() <= 1 {
                Some(expected)
            } else {
                None
            }
        }
        check(&self.root).is_some()
    }
}

impl FromIterator<i64> for AvlTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
