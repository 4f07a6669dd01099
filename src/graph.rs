//! Undirected weighted graphs stored as an edge list plus per-vertex incidence lists.
//!
//! Vertices are identified internally by a 0-based index. The textual format and
//! [`Graph::vertex`] use 1-based vertex names.

use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::fs;
use std::hash::Hash;
use std::io::{BufRead, Read};
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;
use num_traits::PrimInt;
use crate::error::GraphError;

/// Numeric edge weight. Any primitive integer type qualifies.
pub trait Weight: PrimInt + FromStr + Display + Debug + Hash {}

impl<W: PrimInt + FromStr + Display + Debug + Hash> Weight for W {}

/// An undirected edge. `name` is unique within a graph and breaks ties between equal weights.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub(crate) weight: W,
    pub(crate) name: usize,
}

impl<W: Weight> Edge<W> {
    pub fn from_vertex(&self) -> usize {
        self.from
    }

    pub fn to_vertex(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn name(&self) -> usize {
        self.name
    }

    /// The endpoint opposite `v`.
    pub fn other_end(&self, v: usize) -> usize {
        if self.from == v { self.to } else { self.from }
    }
}

impl<W: Weight> Ord for Edge<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
            .then(self.name.cmp(&other.name))
            .then(self.from.cmp(&other.from))
            .then(self.to.cmp(&other.to))
    }
}

impl<W: Weight> PartialOrd for Edge<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Display for Edge<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.from + 1, self.to + 1)
    }
}

/// An undirected graph with a fixed number of vertices.
#[derive(Clone, Debug)]
pub struct Graph<W> {
    n: usize,
    edges: Vec<Edge<W>>,
    incidence: Vec<Vec<usize>>,
}

impl<W: Weight> Graph<W> {

    /// Creates a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Graph { n, edges: Vec::new(), incidence: vec![Vec::new(); n] }
    }

    /// Adds an undirected edge between the 0-based vertices `from` and `to`.
    ///
    /// # Panics
    /// * If either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W, name: usize) {
        assert!(from < self.n && to < self.n,
                "edge ({from},{to}) does not fit a graph of {} vertices", self.n);
        let id = self.edges.len();
        self.edges.push(Edge { from, to, weight, name });
        self.incidence[from].push(id);
        if to != from {
            self.incidence[to].push(id);
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> Range<usize> {
        0..self.n
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Edges with `v` as one of their endpoints.
    pub fn incident(&self, v: usize) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.incidence[v].iter().map(move |&id| &self.edges[id])
    }

    /// Looks up a vertex by its 1-based name.
    pub fn vertex(&self, name: usize) -> Option<usize> {
        if name >= 1 && name <= self.n { Some(name - 1) } else { None }
    }

    /// Reads a graph description: the vertex count `n` and edge count `m`, then `m` triples
    /// `u v w` with 1-based endpoints. Tokens may be separated by any whitespace. Edges are
    /// named 1 to `m` in input order.
    pub fn read_from<R: BufRead>(mut reader: R) -> Result<Self, GraphError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)
            .map_err(|err| GraphError::Io(format!("{err}")))?;
        contents.parse()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|err| GraphError::Io(format!("{}: {err}", path.as_ref().display())))?;
        contents.parse()
    }
}

impl<W: Weight> FromStr for Graph<W> {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let n: usize = next_token(&mut tokens, "vertex count")?;
        let m: usize = next_token(&mut tokens, "edge count")?;

        let mut graph = Graph::new(n);
        for name in 1..=m {
            let u: usize = next_token(&mut tokens, &format!("first endpoint of edge {name}"))?;
            let v: usize = next_token(&mut tokens, &format!("second endpoint of edge {name}"))?;
            let w: W = next_token(&mut tokens, &format!("weight of edge {name}"))?;
            let (from, to) = match (graph.vertex(u), graph.vertex(v)) {
                (Some(from), Some(to)) => (from, to),
                _ => return Err(GraphError::VertexOutOfRange(format!(
                    "edge {name} joins {u} and {v}, but vertices are numbered 1 to {n}"))),
            };
            graph.add_edge(from, to, w, name);
        }
        Ok(graph)
    }
}

fn next_token<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str
) -> Result<T, GraphError> {
    let token = tokens.next()
        .ok_or_else(|| GraphError::Parse(format!("expected {what}, but the input ended")))?;
    token.parse()
        .map_err(|_| GraphError::Parse(format!("cannot read {what} from '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_graph() {
        let graph: Graph<i64> = "3 2\n1 2 4\n2 3 -1\n".parse().unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 2);
        let second = &graph.edges()[1];
        assert_eq!((second.from_vertex(), second.to_vertex()), (1, 2));
        assert_eq!(second.weight(), -1);
        assert_eq!(second.name(), 2);
        assert_eq!(graph.incident(1).count(), 2);
        assert_eq!(graph.incident(0).count(), 1);
    }

    #[test]
    fn parse_is_whitespace_agnostic() {
        let graph: Graph<i32> = "  2\t1 1\n\n2   7".parse().unwrap();
        assert_eq!(graph.edges()[0].weight(), 7);
    }

    #[test]
    fn parse_reader() {
        let input = "2 1\n1 2 3\n".as_bytes();
        let graph: Graph<u32> = Graph::read_from(input).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn truncated_input() {
        let result: Result<Graph<i32>, _> = "3 2\n1 2 4\n2 3".parse();
        assert!(matches!(result, Err(GraphError::Parse(..))));
    }

    #[test]
    fn unparsable_weight() {
        let result: Result<Graph<i32>, _> = "2 1\n1 2 heavy".parse();
        assert!(matches!(result, Err(GraphError::Parse(..))));
    }

    #[test]
    fn endpoint_out_of_range() {
        let result: Result<Graph<i32>, _> = "2 1\n1 3 5".parse();
        assert!(matches!(result, Err(GraphError::VertexOutOfRange(..))));
        let result: Result<Graph<i32>, _> = "2 1\n0 1 5".parse();
        assert!(matches!(result, Err(GraphError::VertexOutOfRange(..))));
    }

    #[test]
    fn missing_file() {
        let result: Result<Graph<i32>, _> = Graph::from_file("no/such/graph.txt");
        assert!(matches!(result, Err(GraphError::Io(..))));
    }

    #[test]
    fn other_end_and_lookup() {
        let mut graph: Graph<i32> = Graph::new(4);
        graph.add_edge(0, 3, 2, 1);
        let edge = &graph.edges()[0];
        assert_eq!(edge.other_end(0), 3);
        assert_eq!(edge.other_end(3), 0);
        assert_eq!(graph.vertex(4), Some(3));
        assert_eq!(graph.vertex(0), None);
        assert_eq!(graph.vertex(5), None);
        assert_eq!(edge.to_string(), "(1,4)");
    }

    #[test]
    fn edges_order_by_weight_then_name() {
        let mut graph: Graph<i32> = Graph::new(3);
        graph.add_edge(0, 1, 5, 2);
        graph.add_edge(1, 2, 5, 1);
        graph.add_edge(0, 2, 4, 3);
        let edges = graph.edges();
        assert!(edges[2] < edges[1]);
        assert!(edges[1] < edges[0]);
    }
}
