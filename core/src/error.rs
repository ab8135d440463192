use thiserror::Error;

use crate::graph::VertexId;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors surfaced by graph operations.
///
/// A search that exhausts its frontier without reaching the destination is
/// not an error — those operations return `Ok(None)` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id was referenced that was never added to the graph.
    ///
    /// Raised eagerly by `add_edge` and `get_neighbors` on an unknown source
    /// vertex, and lazily by traversal when it expands an edge target that
    /// was never registered.
    #[error("unknown vertex: {0}")]
    MissingVertex(VertexId),
}
