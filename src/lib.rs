//! # sat-dtree
//!
//! SAT encodings for learning binary decision trees.
//!
//! Fitting a decision tree to a labeled dataset is expressed as a boolean
//! satisfiability problem: every choice of split feature at a branching node and
//! every routing decision of a data point through that node becomes a CNF
//! variable, and clauses force exactly one feature per node and routing that is
//! consistent with the chosen feature's value order. The crate also provides a
//! decision tree structure that classifies points and measures its own accuracy.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sat_dtree::encoding::Encoder;
//! use sat_dtree::solver::{Options, Solver};
//!
//! let mut encoder = Encoder::new();
//! let cnf = encoder.choose_one_feature_at_branching(&[1, 2, 3], &[1, 2])?;
//!
//! let solver = Solver::new(Options::default());
//! let solution = solver.solve(&cnf)?;
//!
//! if solution.is_sat() {
//!     println!("SAT");
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2024_compatibility)]

/// Scalar values and named data points
pub mod value;

/// Features and their value domains
pub mod feature;

/// Labeled datasets in row/column form
pub mod dataset;

/// CNF formula representation
pub mod cnf;

/// Decision tree learning constraints as CNF
pub mod encoding;

/// SAT solver backends
pub mod engine;

/// Main solver API
pub mod solver;

/// Generic binary tree with parent back-references
pub mod tree;

/// Decision tree classifier
pub mod decision_tree;

/// Error types
pub mod error {
    //! Error types for sat-dtree

    use thiserror::Error;

    /// Errors that can occur while encoding, solving or classifying
    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum DTreeError {
        /// A data point lacks a feature the tree splits on
        #[error("missing feature: {0}")]
        MissingFeature(String),

        /// Traversal reached a node that cannot be descended or evaluated
        #[error("malformed tree: {0}")]
        MalformedTree(String),

        /// Data points and labels are not positionally aligned
        #[error("length mismatch: {data} data points but {labels} labels")]
        LengthMismatch {
            /// Number of data points
            data: usize,
            /// Number of labels
            labels: usize,
        },

        /// An operation that divides by the dataset size got no data
        #[error("empty dataset")]
        EmptyDataset,

        /// A value lies outside the domain of its feature
        #[error("value {value} is not in the domain of feature {feature}")]
        InvalidFeatureValue {
            /// Feature name
            feature: String,
            /// Offending value
            value: String,
        },

        /// A numeric value was compared against a categorical threshold
        #[error("cannot compare value {value} of feature {feature} with threshold {threshold}")]
        ThresholdMismatch {
            /// Feature name
            feature: String,
            /// Value found in the data point
            value: String,
            /// Threshold stored in the tree
            threshold: String,
        },

        /// A dataset row has no value for a feature column
        #[error("row {row} has no column {column}")]
        MissingColumn {
            /// Row index
            row: usize,
            /// Column (feature) index
            column: usize,
        },

        /// Capacity exceeded during encoding
        #[error("capacity exceeded: {0}")]
        CapacityExceeded(String),

        /// Invalid argument
        #[error("invalid argument: {0}")]
        InvalidArgument(String),

        /// The SAT backend reported a failure
        #[error("solver error: {0}")]
        Solver(String),
    }

    /// Result type for sat-dtree operations
    pub type Result<T> = std::result::Result<T, DTreeError>;
}

// Re-export commonly used types
pub use error::{DTreeError, Result};
