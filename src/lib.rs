//! Minimum spanning trees of weighted undirected graphs in Rust, computed with either Borůvka's
//! or Prim's algorithm. Generic over primitive integer edge weights.
//!
//! The two algorithms take different routes to the same tree:
//!  1. Borůvka's algorithm starts from a forest of isolated vertices. Each round labels the
//!     connected components of the forest, picks the cheapest edge leaving every component, and
//!     adds all of those edges at once. The number of components at least halves every round;
//!  2. Prim's algorithm grows one tree from a source vertex, always attaching the frontier vertex
//!     reachable by the cheapest edge. Frontier vertices live in an [`IndexedHeap`], so when a
//!     cheaper edge to a queued vertex is found its priority is lowered in place with
//!     [`IndexedHeap::decrease_key`] instead of being searched for.
//!
//! Ties between equal edge weights are broken by edge name, which makes the minimum spanning tree
//! unique and both algorithms agree on it.
//!
//! # Examples
//! ```
//!use mst::{Graph, Mst};
//!
//!let graph: Graph<i64> = "5 5\n1 2 1\n2 3 2\n3 4 3\n4 5 4\n5 1 5\n".parse().unwrap();
//!let mst = Mst::default(&graph);
//!let boruvka = mst.boruvka().unwrap();
//!let source = graph.vertex(1).unwrap();
//!let prim = mst.prim(source).unwrap();
//!assert_eq!(boruvka.total_weight, 10);
//!assert_eq!(prim.total_weight, 10);
//! ```

use std::collections::HashSet;
use crate::data_wrappers::{MstVertex, VertexRef, VisitState};

pub use crate::algorithm::Algorithm;
pub use crate::data_wrappers::MstResult;
pub use crate::error::{GraphError, HeapError, MstError};
pub use crate::graph::{Edge, Graph, Weight};
pub use crate::heap::{BinaryHeap, HeapIndex, IndexedHeap, Placement, Tracked, Untracked};
pub use crate::params::{MstParams, ParamBuilder};
pub use crate::timer::Timer;

mod algorithm;
mod data_wrappers;
mod error;
mod graph;
mod heap;
mod params;
mod timer;

/// Minimum spanning tree engine over a borrowed graph.
pub struct Mst<'a, W> {
    graph: &'a Graph<W>,
    params: MstParams,
}

impl<'a, W: Weight> Mst<'a, W> {

    /// Creates an engine using a custom parameter configuration.
    ///
    /// # Parameters
    /// * `graph` - a reference to the graph. It should be connected; see [`Mst::boruvka`] and
    ///             [`Mst::prim`] for what happens otherwise.
    /// * `params` - the parameter configuration.
    ///
    /// # Examples
    /// ```
    ///use mst::{Algorithm, Graph, Mst, MstParams};
    ///
    ///let graph: Graph<i32> = "3 3\n1 2 7\n2 3 1\n1 3 2\n".parse().unwrap();
    ///let params = MstParams::builder()
    ///    .algorithm(Algorithm::Boruvka)
    ///    .build();
    ///let result = Mst::new(&graph, params).run().unwrap();
    ///assert_eq!(result.total_weight, 3);
    /// ```
    pub fn new(graph: &'a Graph<W>, params: MstParams) -> Self {
        Mst { graph, params }
    }

    /// Creates an engine using the default parameters: Prim's algorithm from vertex 1.
    pub fn default(graph: &'a Graph<W>) -> Self {
        Mst::new(graph, MstParams::default())
    }

    /// Runs the configured algorithm. Prim starts from the configured source vertex.
    pub fn run(&self) -> Result<MstResult<W>, MstError> {
        match self.params.algorithm {
            Algorithm::Boruvka => self.boruvka(),
            Algorithm::Prim => {
                let name = self.params.source;
                let source = self.graph.vertex(name).ok_or_else(|| MstError::UnknownVertex(
                    format!("source {name} is not in a graph of {} vertices", self.graph.len())))?;
                self.prim(source)
            }
        }
    }

    /// Computes the minimum spanning tree with Borůvka's algorithm.
    ///
    /// # Returns
    /// * The tree weight and edges. An error is returned if the graph has no vertices, or if it
    ///   is disconnected: once a round finds no edge between the remaining components the
    ///   computation stops with [`MstError::Disconnected`].
    pub fn boruvka(&self) -> Result<MstResult<W>, MstError> {
        self.validate_graph()?;
        let mut records = self.decorate();
        let mut forest = Graph::new(self.graph.len());
        let mut wmst = W::zero();

        let mut count = self.count_and_label(&forest, &mut records);
        while count > 1 {
            let added = self.add_safe_edges(&mut forest, &records, count, &mut wmst)?;
            if added == 0 {
                return Err(MstError::Disconnected(format!(
                    "{count} components remain with no edge between them")));
            }
            count = self.count_and_label(&forest, &mut records);
        }

        Ok(MstResult { algorithm: Algorithm::Boruvka, total_weight: wmst, edges: forest.edges().to_vec() })
    }

    /// Computes the minimum spanning tree with Prim's algorithm, growing it from the vertex at
    /// 0-based index `source` (see [`Graph::vertex`] to look one up by name).
    ///
    /// # Returns
    /// * The tree weight and edges in the order they joined the tree. An error is returned if the
    ///   graph has no vertices, if `source` is not a vertex, or if some vertex cannot be reached
    ///   from `source`.
    pub fn prim(&self, source: usize) -> Result<MstResult<W>, MstError> {
        self.validate_graph()?;
        if source >= self.graph.len() {
            return Err(MstError::UnknownVertex(format!(
                "index {source} is not in a graph of {} vertices", self.graph.len())));
        }

        let records: Vec<VertexRef<W>> = self.decorate().into_iter().map(VertexRef::new).collect();
        {
            let mut s = records[source].borrow_mut();
            s.d = Some(W::zero());
            s.seen = true;
        }

        let mut queue: IndexedHeap<VertexRef<W>> = IndexedHeap::with_capacity(self.graph.len());
        for record in &records {
            queue.insert(record.clone());
        }

        let mut wmst = W::zero();
        let mut mst = Vec::with_capacity(self.graph.len() - 1);
        while !queue.is_empty() {
            let u = queue.extract_min()?;
            let (vertex, d) = {
                let mut u = u.borrow_mut();
                u.seen = true;
                if u.vertex != source && u.parent.is_none() {
                    return Err(MstError::Disconnected(format!(
                        "{} of {} vertices cannot be reached from vertex {}",
                        queue.len() + 1, self.graph.len(), source + 1)));
                }
                if let Some(edge) = u.incoming_edge.take() {
                    mst.push(edge);
                }
                (u.vertex, u.d)
            };
            // Only the source and vertices with a parent get this far, and both have a distance
            if let Some(d) = d {
                wmst = add_weight(wmst, d)?;
            }

            for edge in self.graph.incident(vertex) {
                let v = edge.other_end(vertex);
                let improved = {
                    let mut neighbour = records[v].borrow_mut();
                    if !neighbour.seen && neighbour.d.map_or(true, |d| edge.weight < d) {
                        neighbour.d = Some(edge.weight);
                        neighbour.parent = Some(vertex);
                        neighbour.incoming_edge = Some(edge.clone());
                        true
                    } else {
                        false
                    }
                };
                if improved {
                    queue.decrease_key(&records[v]);
                }
            }
        }

        Ok(MstResult { algorithm: Algorithm::Prim, total_weight: wmst, edges: mst })
    }

    /// The number of connected components of the graph.
    pub fn count_components(&self) -> usize {
        let mut records = self.decorate();
        self.count_and_label(self.graph, &mut records)
    }

    /// The connected component of each vertex, numbered from 1 in order of each component's
    /// lowest vertex.
    pub fn component_labels(&self) -> Vec<usize> {
        let mut records = self.decorate();
        self.count_and_label(self.graph, &mut records);
        records.iter().map(|record| record.component).collect()
    }

    fn validate_graph(&self) -> Result<(), MstError> {
        if self.graph.is_empty() {
            return Err(MstError::EmptyGraph);
        }
        Ok(())
    }

    fn decorate(&self) -> Vec<MstVertex<W>> {
        self.graph.vertices().map(MstVertex::new).collect()
    }

    fn count_and_label(&self, forest: &Graph<W>, records: &mut [MstVertex<W>]) -> usize {
        records.iter_mut().for_each(|record| record.state = VisitState::Unvisited);
        let mut count = 0;
        for v in forest.vertices() {
            if records[v].state == VisitState::Unvisited {
                count += 1;
                self.label(forest, v, count, records);
            }
        }
        count
    }

    /// Flood fill with an explicit stack, so depth is not bounded by the call stack
    fn label(&self, forest: &Graph<W>, v: usize, component: usize, records: &mut [MstVertex<W>]) {
        let mut bag = vec![v];
        while let Some(u) = bag.pop() {
            let record = &mut records[u];
            if record.state == VisitState::Unvisited {
                record.state = VisitState::InProgress;
                record.component = component;
                bag.extend(forest.incident(u).map(|edge| edge.other_end(u)));
            }
        }
    }

    fn add_safe_edges(
        &self,
        forest: &mut Graph<W>,
        records: &[MstVertex<W>],
        count: usize,
        wmst: &mut W
    ) -> Result<usize, MstError> {
        let mut safe: Vec<Option<&Edge<W>>> = vec![None; count + 1];
        for edge in self.graph.edges() {
            let u_comp = records[edge.from].component;
            let v_comp = records[edge.to].component;
            if u_comp == v_comp {
                continue;
            }
            for comp in [u_comp, v_comp] {
                if safe[comp].map_or(true, |current| edge < current) {
                    safe[comp] = Some(edge);
                }
            }
        }

        // An edge can be the cheapest for both of its components
        let mut added: HashSet<&Edge<W>> = HashSet::new();
        for edge in safe.into_iter().flatten() {
            if added.insert(edge) {
                forest.add_edge(edge.from, edge.to, edge.weight, edge.name);
                *wmst = add_weight(*wmst, edge.weight)?;
            }
        }
        Ok(added.len())
    }
}

fn add_weight<W: Weight>(total: W, weight: W) -> Result<W, MstError> {
    total.checked_add(&weight).ok_or_else(|| MstError::WeightOverflow(format!(
        "adding {weight} to a running total of {total}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle_graph() -> Graph<i64> {
        "5 5\n1 2 1\n2 3 2\n3 4 3\n4 5 4\n5 1 5\n".parse().unwrap()
    }

    fn edge_names<W: Weight>(result: &MstResult<W>) -> Vec<usize> {
        let mut names: Vec<usize> = result.edges.iter().map(|edge| edge.name()).collect();
        names.sort();
        names
    }

    #[test]
    fn boruvka_cycle() {
        let graph = cycle_graph();
        let result = Mst::default(&graph).boruvka().unwrap();
        assert_eq!(result.algorithm, Algorithm::Boruvka);
        assert_eq!(result.total_weight, 10);
        assert_eq!(edge_names(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn prim_cycle() {
        let graph = cycle_graph();
        let result = Mst::default(&graph).prim(0).unwrap();
        assert_eq!(result.algorithm, Algorithm::Prim);
        assert_eq!(result.total_weight, 10);
        assert_eq!(edge_names(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn prim_records_edges_in_join_order() {
        let graph = cycle_graph();
        let result = Mst::default(&graph).prim(2).unwrap();
        let names: Vec<usize> = result.edges.iter().map(|edge| edge.name()).collect();
        assert_eq!(names, vec![2, 1, 3, 4]);
    }

    #[test]
    fn prim_source_does_not_change_weight() {
        let graph = cycle_graph();
        let mst = Mst::default(&graph);
        for source in graph.vertices() {
            assert_eq!(mst.prim(source).unwrap().total_weight, 10);
        }
    }

    #[test]
    fn run_dispatches_on_params() {
        let graph = cycle_graph();
        let params = MstParams::builder().algorithm(Algorithm::Boruvka).build();
        let result = Mst::new(&graph, params).run().unwrap();
        assert_eq!(result.algorithm, Algorithm::Boruvka);

        let params = MstParams::builder().source(3).build();
        let result = Mst::new(&graph, params).run().unwrap();
        assert_eq!(result.algorithm, Algorithm::Prim);
        assert_eq!(result.total_weight, 10);
    }

    #[test]
    fn single_vertex() {
        let graph: Graph<i32> = Graph::new(1);
        let mst = Mst::default(&graph);
        assert_eq!(mst.boruvka().unwrap().total_weight, 0);
        let result = mst.prim(0).unwrap();
        assert_eq!(result.total_weight, 0);
        assert!(result.edges.is_empty());
    }

    #[test]
    fn empty_graph() {
        let graph: Graph<i32> = Graph::new(0);
        let mst = Mst::default(&graph);
        assert!(matches!(mst.boruvka(), Err(MstError::EmptyGraph)));
        assert!(matches!(mst.prim(0), Err(MstError::EmptyGraph)));
    }

    #[test]
    fn unknown_source() {
        let graph = cycle_graph();
        let mst = Mst::default(&graph);
        assert!(matches!(mst.prim(5), Err(MstError::UnknownVertex(..))));
        let params = MstParams::builder().source(6).build();
        assert!(matches!(Mst::new(&graph, params).run(), Err(MstError::UnknownVertex(..))));
    }

    #[test]
    fn disconnected_graph() {
        let graph: Graph<i32> = "4 2\n1 2 1\n3 4 1\n".parse().unwrap();
        let mst = Mst::default(&graph);
        assert!(matches!(mst.boruvka(), Err(MstError::Disconnected(..))));
        assert!(matches!(mst.prim(0), Err(MstError::Disconnected(..))));
    }

    #[test]
    fn largest_weight_edge_still_connects() {
        let graph: Graph<i64> = "2 1\n1 2 9223372036854775807\n".parse().unwrap();
        let mst = Mst::default(&graph);
        let boruvka = mst.boruvka().unwrap();
        for source in graph.vertices() {
            let prim = mst.prim(source).unwrap();
            assert_eq!(prim.total_weight, i64::MAX);
            assert_eq!(edge_names(&prim), vec![1]);
        }
        assert_eq!(boruvka.total_weight, i64::MAX);

        let graph: Graph<i64> = "3 2\n1 2 9223372036854775807\n2 3 -5\n".parse().unwrap();
        let mst = Mst::default(&graph);
        assert_eq!(mst.boruvka().unwrap().total_weight, i64::MAX - 5);
        assert_eq!(mst.prim(0).unwrap().total_weight, i64::MAX - 5);
        assert_eq!(mst.prim(2).unwrap().total_weight, i64::MAX - 5);
    }

    #[test]
    fn total_weight_overflow_is_an_error() {
        let graph: Graph<i32> = "3 2\n1 2 2000000000\n2 3 2000000000\n".parse().unwrap();
        let mst = Mst::default(&graph);
        assert!(matches!(mst.boruvka(), Err(MstError::WeightOverflow(..))));
        assert!(matches!(mst.prim(0), Err(MstError::WeightOverflow(..))));

        let graph: Graph<i32> = "3 2\n1 2 -2000000000\n2 3 -2000000000\n".parse().unwrap();
        let mst = Mst::default(&graph);
        assert!(matches!(mst.boruvka(), Err(MstError::WeightOverflow(..))));
        assert!(matches!(mst.prim(2), Err(MstError::WeightOverflow(..))));
    }

    #[test]
    fn component_counting() {
        let graph: Graph<i32> = "7 4\n1 2 1\n2 3 1\n4 5 1\n6 6 2\n".parse().unwrap();
        let mst = Mst::default(&graph);
        assert_eq!(mst.count_components(), 4);
        let labels = mst.component_labels();
        assert_eq!(labels, vec![1, 1, 1, 2, 2, 3, 4]);
        assert_eq!(labels.iter().max(), Some(&4));
    }

    #[test]
    fn edgeless_graph_has_one_component_per_vertex() {
        let graph: Graph<i32> = Graph::new(6);
        assert_eq!(Mst::default(&graph).count_components(), 6);
    }

    #[test]
    fn ties_are_broken_consistently() {
        // Every edge weighs the same, so only the name decides
        let graph: Graph<i32> = "4 6\n1 2 1\n2 3 1\n3 4 1\n4 1 1\n1 3 1\n2 4 1\n".parse().unwrap();
        let mst = Mst::default(&graph);
        let boruvka = mst.boruvka().unwrap();
        let prim = mst.prim(0).unwrap();
        assert_eq!(boruvka.total_weight, 3);
        assert_eq!(prim.total_weight, 3);
        assert_eq!(boruvka.edges.len(), 3);
        assert_eq!(prim.edges.len(), 3);
    }

    #[test]
    fn negative_weights_parallel_edges_and_loops() {
        let graph: Graph<i32> = "3 5\n1 2 4\n1 2 -2\n2 3 3\n3 3 -9\n1 3 5\n".parse().unwrap();
        let mst = Mst::default(&graph);
        let boruvka = mst.boruvka().unwrap();
        let prim = mst.prim(0).unwrap();
        assert_eq!(boruvka.total_weight, 1);
        assert_eq!(prim.total_weight, 1);
        assert_eq!(edge_names(&boruvka), vec![2, 3]);
        assert_eq!(edge_names(&prim), vec![2, 3]);
    }

    #[test]
    fn both_algorithms_share_no_state() {
        let graph = cycle_graph();
        let mst = Mst::default(&graph);
        let first = mst.prim(0).unwrap();
        let _ = mst.boruvka().unwrap();
        let second = mst.prim(0).unwrap();
        assert_eq!(first, second);
    }
}
