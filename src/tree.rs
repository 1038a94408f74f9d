//! Generic binary tree
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Child links
//! are owning in the sense that a node is reachable from exactly one parent
//! slot; the parent link is a plain index used to walk back to the root.

use crate::error::{DTreeError, Result};

/// Index of a node within its tree
pub type NodeId = usize;

/// A node of a [`Tree`]
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    data: T,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T> TreeNode<T> {
    /// Payload of the node
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Parent node, `None` at the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Left child
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// A binary tree with a single root
///
/// Nodes can be added but never removed or re-parented, so the structure is
/// always acyclic.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    nodes: Vec<TreeNode<T>>,
}

impl<T> Tree<T> {
    const ROOT: NodeId = 0;

    /// Creates a tree consisting of a root holding `data`
    pub fn new(data: T) -> Self {
        Self {
            nodes: vec![TreeNode {
                data,
                parent: None,
                left: None,
                right: None,
            }],
        }
    }

    /// The root node
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Returns a node
    pub fn node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.nodes.get(id)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attaches a new left child to `parent`
    ///
    /// # Errors
    /// Returns an error if `parent` does not exist or already has a left child
    pub fn add_left(&mut self, parent: NodeId, data: T) -> Result<NodeId> {
        self.attach(parent, Side::Left, data)
    }

    /// Attaches a new right child to `parent`
    ///
    /// # Errors
    /// Returns an error if `parent` does not exist or already has a right child
    pub fn add_right(&mut self, parent: NodeId, data: T) -> Result<NodeId> {
        self.attach(parent, Side::Right, data)
    }

    fn attach(&mut self, parent: NodeId, side: Side, data: T) -> Result<NodeId> {
        let id = self.nodes.len();
        let node = self
            .nodes
            .get_mut(parent)
            .ok_or_else(|| DTreeError::InvalidArgument(format!("no node {}", parent)))?;
        let slot = match side {
            Side::Left => &mut node.left,
            Side::Right => &mut node.right,
        };
        if slot.is_some() {
            return Err(DTreeError::InvalidArgument(format!(
                "node {} already has a {:?} child",
                parent, side
            )));
        }
        *slot = Some(id);
        self.nodes.push(TreeNode {
            data,
            parent: Some(parent),
            left: None,
            right: None,
        });
        Ok(id)
    }

    /// Depth of a node: 0 at the root, one more than the parent otherwise
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut node = self.nodes.get(id)?;
        let mut depth = 0;
        while let Some(parent) = node.parent {
            node = &self.nodes[parent];
            depth += 1;
        }
        Some(depth)
    }

    /// Leaves (nodes without children), left to right
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_leaf() {
                leaves.push(id);
                continue;
            }
            // right first so the left subtree is visited first
            stack.extend(node.right);
            stack.extend(node.left);
        }
        leaves
    }

    /// Returns true if every leaf sits at the same depth
    pub fn is_complete(&self) -> bool {
        let mut depths = self.leaves().into_iter().filter_map(|id| self.depth(id));
        match depths.next() {
            Some(first) => depths.all(|d| d == first),
            None => true,
        }
    }
}
