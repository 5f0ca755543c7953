//! Exporting graphs to the Graphviz [DOT] format.
//!
//! The produced description lists one `from -> to [label=weight];` line per
//! edge, grouped by source vertex, and is otherwise inert — rendering it is
//! the job of an external tool such as `dot`.
//!
//! [DOT]: https://graphviz.org/doc/info/lang.html

use std::{
    fmt::Display,
    io::{self, Cursor, Write},
};

use crate::graph::Graph;

/// Serialization of a graph into an external textual format.
pub trait Export<G> {
    /// Writes the textual representation of the graph into the given output.
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Exporter to the Graphviz DOT format.
///
/// # Examples
///
/// ```
/// use grafo::{export::Dot, Graph};
///
/// let mut graph = Graph::new(2);
/// graph.add_edge(0, 1, 3);
///
/// assert_eq!(Dot::default().to_string(&graph), "digraph G {\n  0 -> 1 [label=3];\n}\n");
/// ```
pub struct Dot {
    name: String,
}

impl Dot {
    /// Creates an exporter with the given graph name, defaulting to `G`.
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
        }
    }

    /// Renders the graph into a string.
    pub fn to_string<W: Display>(&self, graph: &Graph<W>) -> String {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<W: Display> Export<Graph<W>> for Dot {
    fn export<Wr: Write>(&self, graph: &Graph<W>, out: &mut Wr) -> io::Result<()> {
        out.write_all(b"digraph ")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for (from, to, weight) in graph.edges() {
            out.write_all(format!("  {from} -> {to} [label={weight}];\n").as_bytes())?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let graph = Graph::<i32>::new(3);

        assert_eq!(Dot::default().to_string(&graph), "digraph G {\n}\n");
    }

    #[test]
    fn edges_grouped_by_source() {
        let mut graph = Graph::new(3);

        graph.add_edge(1, 2, 2);
        graph.add_edge(0, 1, 1);
        graph.add_edge(0, 2, 5);

        assert_eq!(
            Dot::default().to_string(&graph),
            "digraph G {\n  0 -> 1 [label=1];\n  0 -> 2 [label=5];\n  1 -> 2 [label=2];\n}\n"
        );
    }

    #[test]
    fn custom_name() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 1.5);

        let dot = Dot::new(Some(String::from("network")));

        assert_eq!(
            dot.to_string(&graph),
            "digraph network {\n  0 -> 1 [label=1.5];\n}\n"
        );
    }
}
