use std::io;

use thiserror::Error;

use crate::graph::VertexId;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph construction, mutation, traversal and ingestion.
///
/// None of the graph operations partially mutate state before failing:
/// ids are validated up front, so an `Err` leaves the graph as it was.
/// The one exception is ingestion, which keeps the edges it added before
/// the offending pair.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex id outside `[1, len]`.
    #[error("vertex {vertex} out of bounds for graph with {len} vertices")]
    OutOfBounds { vertex: i64, len: usize },

    /// Transpose target does not have the same vertex set as the source.
    #[error("vertex count mismatch: expected {expected}, found {found}")]
    VertexCountMismatch { expected: usize, found: usize },

    /// Edge list text could not be turned into vertex pairs.
    #[error("malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GraphError {
    pub(crate) fn out_of_bounds(vertex: VertexId, len: usize) -> Self {
        GraphError::OutOfBounds {
            vertex: i64::from(vertex),
            len,
        }
    }

    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        GraphError::MalformedInput {
            line,
            message: message.into(),
        }
    }
}
