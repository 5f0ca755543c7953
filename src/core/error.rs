use std::io;

use thiserror::Error;

/// The error encountered when constructing a graph from an external source.
///
/// Any of these aborts the construction. Note that passing an out-of-range
/// vertex id directly to [`Graph::add_edge`](crate::graph::Graph::add_edge)
/// is a contract violation of the caller and panics instead, because it
/// cannot originate from input data once the loader has validated it.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// The source could not be read.
    #[error("reading graph source failed: {0}")]
    Io(#[from] io::Error),

    /// The source is not a valid graph document.
    #[error("malformed graph document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// An edge in the document references a vertex id outside the declared
    /// range.
    #[error("edge ({from}, {to}) references a vertex out of range (vertex count: {vertices})")]
    EdgeOutOfBounds {
        /// Source vertex id of the offending edge.
        from: usize,
        /// Target vertex id of the offending edge.
        to: usize,
        /// Vertex count declared by the document.
        vertices: usize,
    },
}
