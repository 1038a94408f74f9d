//! Decision tree classifier
//!
//! A [`DecisionTree`] is a [`Tree`] whose nodes are either leaves carrying a
//! label or splits carrying a feature and a threshold. Numeric values go left
//! when `value <= threshold`; categorical values go left when they equal the
//! threshold. Everything else goes right.

use log::debug;
use std::fmt::{self, Write};

use crate::error::{DTreeError, Result};
use crate::feature::Feature;
use crate::tree::{NodeId, Tree};
use crate::value::{DataPoint, Value};

/// Payload of a decision tree node
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionNode {
    /// Terminal node
    Leaf {
        /// Predicted class
        label: String,
    },
    /// Branching node with exactly two children
    Split {
        /// Feature tested at this node
        feature: Feature,
        /// Numeric boundary or category to match
        threshold: Value,
    },
}

impl DecisionNode {
    /// Creates a leaf
    pub fn leaf(label: impl Into<String>) -> Self {
        DecisionNode::Leaf {
            label: label.into(),
        }
    }

    /// Creates a split
    pub fn split(feature: Feature, threshold: impl Into<Value>) -> Self {
        DecisionNode::Split {
            feature,
            threshold: threshold.into(),
        }
    }

    /// Returns true for leaves
    pub fn is_leaf(&self) -> bool {
        matches!(self, DecisionNode::Leaf { .. })
    }
}

/// A binary decision tree
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    tree: Tree<DecisionNode>,
}

impl DecisionTree {
    /// Creates a tree with the given root
    pub fn new(root: DecisionNode) -> Self {
        Self {
            tree: Tree::new(root),
        }
    }

    /// The underlying tree structure
    pub fn tree(&self) -> &Tree<DecisionNode> {
        &self.tree
    }

    /// The root node
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Attaches both children of the split node `parent`
    ///
    /// # Errors
    /// Returns an error if `parent` is not a split or already has children
    pub fn split(&mut self, parent: NodeId, left: DecisionNode, right: DecisionNode) -> Result<(NodeId, NodeId)> {
        let node = self
            .tree
            .node(parent)
            .ok_or_else(|| DTreeError::InvalidArgument(format!("no node {}", parent)))?;
        if node.data().is_leaf() {
            return Err(DTreeError::InvalidArgument(format!(
                "node {} is a leaf and cannot have children",
                parent
            )));
        }
        if !node.is_leaf() {
            return Err(DTreeError::InvalidArgument(format!(
                "node {} already has children",
                parent
            )));
        }
        let left = self.tree.add_left(parent, left)?;
        let right = self.tree.add_right(parent, right)?;
        Ok((left, right))
    }

    /// Checks that leaves have no children and splits have exactly two
    pub fn validate(&self) -> Result<()> {
        for id in 0..self.tree.len() {
            let Some(node) = self.tree.node(id) else {
                continue;
            };
            match node.data() {
                DecisionNode::Leaf { .. } if !node.is_leaf() => {
                    return Err(DTreeError::MalformedTree(format!("leaf {} has children", id)));
                }
                DecisionNode::Split { .. } if node.left().is_none() || node.right().is_none() => {
                    return Err(DTreeError::MalformedTree(format!(
                        "split {} is missing a child",
                        id
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Predicts the label of a data point
    ///
    /// # Errors
    /// - `MissingFeature` if the point lacks a feature tested on its path
    /// - `InvalidFeatureValue` if a tested value is outside its feature's domain
    /// - `ThresholdMismatch` if a numeric value meets a categorical threshold
    /// - `MalformedTree` if the path hits a split without the needed child
    pub fn predict(&self, point: &DataPoint) -> Result<&str> {
        let mut id = self.tree.root();
        loop {
            let node = self
                .tree
                .node(id)
                .ok_or_else(|| DTreeError::MalformedTree(format!("dangling node {}", id)))?;
            let (feature, threshold) = match node.data() {
                DecisionNode::Leaf { label } => return Ok(label.as_str()),
                DecisionNode::Split { feature, threshold } => (feature, threshold),
            };

            let value = point
                .get(feature.name())
                .ok_or_else(|| DTreeError::MissingFeature(feature.name().to_string()))?;
            if !feature.validate_value(value) {
                return Err(DTreeError::InvalidFeatureValue {
                    feature: feature.name().to_string(),
                    value: value.to_string(),
                });
            }

            let go_left = match (value, threshold) {
                (Value::Numeric(x), Value::Numeric(t)) => x <= t,
                (Value::Numeric(_), Value::Categorical(_)) => {
                    return Err(DTreeError::ThresholdMismatch {
                        feature: feature.name().to_string(),
                        value: value.to_string(),
                        threshold: threshold.to_string(),
                    });
                }
                (Value::Categorical(_), _) => value == threshold,
            };

            let next = if go_left { node.left() } else { node.right() };
            id = next.ok_or_else(|| {
                DTreeError::MalformedTree(format!(
                    "split {} has no {} child",
                    id,
                    if go_left { "left" } else { "right" }
                ))
            })?;
        }
    }

    /// Fraction of `dataset` whose prediction matches the label at the same
    /// position
    ///
    /// # Errors
    /// Fails if the lengths differ, if the dataset is empty, or if any
    /// prediction fails
    pub fn accuracy<S: AsRef<str>>(&self, dataset: &[DataPoint], labels: &[S]) -> Result<f64> {
        if dataset.len() != labels.len() {
            return Err(DTreeError::LengthMismatch {
                data: dataset.len(),
                labels: labels.len(),
            });
        }
        if dataset.is_empty() {
            return Err(DTreeError::EmptyDataset);
        }

        let mut correct = 0usize;
        for (point, label) in dataset.iter().zip(labels) {
            if self.predict(point)? == label.as_ref() {
                correct += 1;
            }
        }
        debug!("accuracy: {}/{} correct", correct, dataset.len());
        Ok(correct as f64 / dataset.len() as f64)
    }

    /// Text rendering of the tree, one line per leaf or branch
    pub fn visualize(&self) -> String {
        let mut out = String::new();
        // writing to a String cannot fail
        let _ = self.write_tree(&mut out);
        out
    }

    fn write_tree<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut stack = vec![Frame::Node(self.tree.root())];
        while let Some(frame) = stack.pop() {
            let id = match frame {
                Frame::Text(depth, text) => {
                    writeln!(out, "{}{}", "  ".repeat(depth), text)?;
                    continue;
                }
                Frame::Node(id) => id,
            };
            let Some(node) = self.tree.node(id) else {
                continue;
            };
            let depth = self.tree.depth(id).unwrap_or(0);
            let indent = "  ".repeat(depth);
            match node.data() {
                DecisionNode::Leaf { label } => writeln!(out, "{}Label: {}", indent, label)?,
                DecisionNode::Split { feature, threshold } => {
                    writeln!(out, "{}If {} <= {} :", indent, feature.name(), threshold)?;
                    // pushed in reverse so the left subtree is printed first
                    stack.extend(node.right().map(Frame::Node));
                    stack.push(Frame::Text(
                        depth,
                        format!("If {} > {} :", feature.name(), threshold),
                    ));
                    stack.extend(node.left().map(Frame::Node));
                }
            }
        }
        Ok(())
    }
}

enum Frame {
    Node(NodeId),
    Text(usize, String),
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f)
    }
}
