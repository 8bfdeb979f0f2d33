//! Defines the error type shared by every component of this crate.
use thiserror::Error;

use std::io;

/// A shorthand for `Result<T, TreeError>`.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors returned while building, pruning, or evaluating a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A value that cannot be interpreted under the schema,
    /// e.g., a non-integer value of a numeric attribute.
    #[error("malformed value `{value}` for attribute `{attribute}`")]
    MalformedInput {
        /// Name of the attribute.
        attribute: String,
        /// The offending value.
        value: String,
    },

    /// An instance reached a decision node
    /// whose outgoing edges do not contain its value.
    #[error("unseen value `{value}` for attribute `{attribute}`")]
    UnseenCategory {
        /// Name of the attribute tested at the node.
        attribute: String,
        /// The value that has no matching edge.
        value: String,
    },

    /// An operation that needs at least one instance got none.
    #[error("the data set is empty")]
    EmptyDataSet,

    /// The number of predictions differs from the number of instances.
    #[error(
        "the number of predictions ({got}) is inconsistent \
         with the number of instances ({expected})"
    )]
    InconsistentPredictionCount {
        /// Number of instances.
        expected: usize,
        /// Number of predictions.
        got: usize,
    },

    /// A row does not have one value per schema attribute.
    #[error("row {row} has {got} values, but the schema has {expected}")]
    ArityMismatch {
        /// Index of the row.
        row: usize,
        /// Number of attributes in the schema.
        expected: usize,
        /// Number of values in the row.
        got: usize,
    },

    /// A row carries a label that is neither of the two label tokens.
    #[error("row {row} has unknown label `{label}`")]
    UnknownLabel {
        /// Index of the row.
        row: usize,
        /// The offending label.
        label: String,
    },

    /// A numeric attribute was partitioned
    /// before its threshold was computed.
    #[error("no threshold has been computed for attribute `{attribute}`")]
    MissingThreshold {
        /// Name of the attribute.
        attribute: String,
    },

    /// A deserialized tree disagrees with its own schema,
    /// e.g., a node tests an attribute the schema does not have.
    #[error("malformed tree: {reason}")]
    MalformedTree {
        /// What is wrong with the tree.
        reason: String,
    },

    /// Failed to (de)serialize a tree or a schema.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to write a file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl TreeError {
    /// Attaches the index of the offending row
    /// to an error raised for a single instance.
    pub(crate) fn at_row(self, row: usize) -> Self {
        match self {
            Self::ArityMismatch { expected, got, .. } => {
                Self::ArityMismatch { row, expected, got }
            },
            Self::UnknownLabel { label, .. } => {
                Self::UnknownLabel { row, label }
            },
            other => other,
        }
    }
}
