//! Loading graphs from JSON documents.
//!
//! The expected document shape is
//!
//! ```json
//! {
//!     "vertices": 3,
//!     "edges": [
//!         { "from": 0, "to": 1, "weight": 1 },
//!         { "from": 1, "to": 2, "weight": 2 }
//!     ]
//! }
//! ```
//!
//! Edges are added in document order. An unreadable source, invalid JSON or
//! an edge referencing a vertex id outside `[0, vertices)` aborts the
//! construction with a [`ConstructionError`].

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use log::debug;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{core::ConstructionError, graph::Graph};

#[derive(Debug, Deserialize)]
struct GraphDocument<W> {
    vertices: usize,
    edges: Vec<EdgeDocument<W>>,
}

#[derive(Debug, Deserialize)]
struct EdgeDocument<W> {
    from: usize,
    to: usize,
    weight: W,
}

impl<W: DeserializeOwned> Graph<W> {
    /// Builds a graph from a JSON document string.
    pub fn from_json_str(source: &str) -> Result<Self, ConstructionError> {
        Self::from_document(serde_json::from_str(source)?)
    }

    /// Builds a graph from a reader yielding a JSON document.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConstructionError> {
        Self::from_document(serde_json::from_reader(reader)?)
    }

    /// Builds a graph from a JSON document file.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ConstructionError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    fn from_document(document: GraphDocument<W>) -> Result<Self, ConstructionError> {
        let mut graph = Graph::new(document.vertices);

        for edge in document.edges {
            // Validate here so that a malformed document surfaces as an error
            // instead of tripping the `add_edge` index contract.
            if edge.from >= document.vertices || edge.to >= document.vertices {
                return Err(ConstructionError::EdgeOutOfBounds {
                    from: edge.from,
                    to: edge.to,
                    vertices: document.vertices,
                });
            }

            graph.add_edge(edge.from, edge.to, edge.weight);
        }

        debug!(
            "loaded graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn load_basic() {
        let graph = Graph::<i32>::from_json_str(
            r#"{
                "vertices": 3,
                "edges": [
                    { "from": 0, "to": 1, "weight": 1 },
                    { "from": 1, "to": 2, "weight": 2 },
                    { "from": 0, "to": 2, "weight": 5 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(0).len(), 2);
    }

    #[test]
    fn load_no_edges() {
        let graph = Graph::<i32>::from_json_str(r#"{ "vertices": 4, "edges": [] }"#).unwrap();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn load_float_weights() {
        let graph = Graph::<f64>::from_json_str(
            r#"{ "vertices": 2, "edges": [{ "from": 0, "to": 1, "weight": 2.5 }] }"#,
        )
        .unwrap();

        assert_eq!(graph.neighbors(0)[0].weight, 2.5);
    }

    #[test]
    fn missing_field_is_malformed() {
        let result = Graph::<i32>::from_json_str(r#"{ "vertices": 2 }"#);

        assert_matches!(result, Err(ConstructionError::Malformed(_)));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let result = Graph::<i32>::from_json_str("not json");

        assert_matches!(result, Err(ConstructionError::Malformed(_)));
    }

    #[test]
    fn edge_out_of_bounds() {
        let result = Graph::<i32>::from_json_str(
            r#"{ "vertices": 2, "edges": [{ "from": 0, "to": 2, "weight": 1 }] }"#,
        );

        assert_matches!(
            result,
            Err(ConstructionError::EdgeOutOfBounds {
                from: 0,
                to: 2,
                vertices: 2
            })
        );
    }

    #[test]
    fn load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "vertices": 2, "edges": [{ "from": 0, "to": 1, "weight": 7 }] }"#)
            .unwrap();

        let graph = Graph::<u32>::from_json_path(file.path()).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.neighbors(0)[0].weight, 7);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Graph::<i32>::from_json_path("definitely/not/a/file.json");

        assert_matches!(result, Err(ConstructionError::Io(_)));
    }
}
