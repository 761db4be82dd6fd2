//! Flowsheet invariant errors.

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Violations of the flowsheet invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two nodes share an id.
    #[error("Duplicate node id '{id}'")]
    DuplicateNodeId { id: String },

    /// An edge refers to a node that doesn't exist.
    #[error("Edge '{edge}' refers to non-existent node '{node}'")]
    InvalidNodeRef { edge: String, node: String },

    /// Two edges connect the same (source, target) pair.
    #[error("Duplicate edge from '{source_id}' to '{target_id}'")]
    DuplicateEdge {
        source_id: String,
        target_id: String,
    },

    /// A node has an empty id or type.
    #[error("Node at position {position} has an empty {what}")]
    IncompleteNode {
        position: usize,
        what: &'static str,
    },
}

