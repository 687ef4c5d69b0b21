//! Undirected graph data structure over adjacency lists
//!
//! Vertices are caller-supplied identifiers kept in insertion order. Each
//! registered vertex owns a neighbor list in edge-insertion order, and every
//! edge is recorded on both endpoints.
//!
//! `Graph` has no internal synchronization. Mutation takes `&mut self`, so
//! sharing a graph across threads needs an external lock.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;

use crate::error::{Error, Result};

/// Capabilities a vertex identifier needs: equality, hashing, cloning into
/// neighbor lists, and a `Debug` rendering for error messages.
pub trait VertexId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexId for T {}

/// An undirected graph keyed by caller-supplied vertex identifiers
#[derive(Debug, Clone)]
pub struct Graph<V: VertexId> {
    /// Registered vertices in insertion order
    vertices: Vec<V>,
    /// Neighbor lists in edge-insertion order
    adjacency: HashMap<V, Vec<V>>,
}

impl<V: VertexId> Graph<V> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Register a vertex with an empty neighbor list
    ///
    /// Returns `false` if the vertex was already registered. In that case the
    /// graph is left untouched: existing edges are kept and the vertex is not
    /// listed twice.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            debug!(vertex = ?vertex, "vertex already registered");
            return false;
        }

        debug!(vertex = ?vertex, "adding vertex");
        self.adjacency.insert(vertex.clone(), Vec::new());
        self.vertices.push(vertex);
        true
    }

    /// Add an undirected edge between two registered vertices
    ///
    /// `b` is appended to `a`'s neighbor list and `a` to `b`'s. Duplicate edges
    /// are recorded again, and a self-loop leaves two self-references in the
    /// vertex's list.
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`] if either endpoint is unregistered. No
    /// neighbor list is modified in that case.
    pub fn add_edge(&mut self, a: &V, b: &V) -> Result<()> {
        self.ensure_vertex(a)?;
        self.ensure_vertex(b)?;

        debug!(a = ?a, b = ?b, "adding edge");
        self.neighbors_mut(a)?.push(b.clone());
        self.neighbors_mut(b)?.push(a.clone());
        Ok(())
    }

    /// Check whether a vertex has been registered
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Get the number of registered vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges added, counting duplicates and self-loops once each
    pub fn edge_count(&self) -> usize {
        // Every edge contributes exactly two neighbor entries, self-loops included.
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Get a vertex's neighbors in edge-insertion order
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`] if the vertex is unregistered.
    pub fn neighbors(&self, vertex: &V) -> Result<&[V]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::vertex_not_found(vertex))
    }

    /// Export into a petgraph undirected graph
    ///
    /// Node indices follow vertex insertion order, so the vertex at position
    /// `i` of [`Graph::vertices`] becomes `NodeIndex::new(i)`. Every recorded
    /// edge is exported, duplicates and self-loops included.
    pub fn to_petgraph(&self) -> UnGraph<V, ()> {
        let mut exported = UnGraph::with_capacity(self.vertex_count(), self.edge_count());
        let index_of: HashMap<&V, NodeIndex> = self
            .vertices
            .iter()
            .map(|v| (v, exported.add_node(v.clone())))
            .collect();

        for (position, vertex) in self.vertices.iter().enumerate() {
            let from = NodeIndex::new(position);
            let mut self_refs = 0usize;
            for neighbor in self.neighbors_or_empty(vertex) {
                let Some(&to) = index_of.get(neighbor) else {
                    continue;
                };
                if to == from {
                    // A self-loop leaves two entries in the same list.
                    self_refs += 1;
                    if self_refs % 2 == 0 {
                        exported.add_edge(from, to, ());
                    }
                } else if from < to {
                    exported.add_edge(from, to, ());
                }
            }
        }

        exported
    }

    /// Neighbor list lookup for vertices already known to be registered
    pub(crate) fn neighbors_or_empty(&self, vertex: &V) -> &[V] {
        self.adjacency.get(vertex).map_or(&[][..], Vec::as_slice)
    }

    pub(crate) fn ensure_vertex(&self, vertex: &V) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::vertex_not_found(vertex))
        }
    }

    fn neighbors_mut(&mut self, vertex: &V) -> Result<&mut Vec<V>> {
        self.adjacency
            .get_mut(vertex)
            .ok_or_else(|| Error::vertex_not_found(vertex))
    }
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(vertices: &[u32]) -> Graph<u32> {
        let mut graph = Graph::new();
        for &v in vertices {
            graph.add_vertex(v);
        }
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: Graph<u32> = Graph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_vertex_preserves_insertion_order() {
        let graph = graph_with(&[3, 1, 2]);
        let order: Vec<u32> = graph.vertices().copied().collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert!(graph.neighbors(&1).unwrap().is_empty());
    }

    #[test]
    fn test_re_adding_vertex_keeps_edges() {
        let mut graph = graph_with(&[1, 2]);
        graph.add_edge(&1, &2).unwrap();

        assert!(!graph.add_vertex(1));
        assert_eq!(graph.neighbors(&1).unwrap(), &[2]);
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = graph_with(&[1, 2, 3]);
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&1, &3).unwrap();

        assert_eq!(graph.neighbors(&1).unwrap(), &[2, 3]);
        assert_eq!(graph.neighbors(&2).unwrap(), &[1]);
        assert_eq!(graph.neighbors(&3).unwrap(), &[1]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_with_missing_endpoint_mutates_nothing() {
        let mut graph = graph_with(&[1]);

        let err = graph.add_edge(&1, &9).unwrap_err();
        assert_eq!(err, Error::VertexNotFound("9".to_string()));
        assert!(graph.neighbors(&1).unwrap().is_empty());

        let err = graph.add_edge(&9, &1).unwrap_err();
        assert_eq!(err, Error::VertexNotFound("9".to_string()));
        assert!(graph.neighbors(&1).unwrap().is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_self_loop_records_two_references() {
        let mut graph = graph_with(&[7]);
        graph.add_edge(&7, &7).unwrap();

        assert_eq!(graph.neighbors(&7).unwrap(), &[7, 7]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mut graph = graph_with(&[1, 2]);
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&2, &1).unwrap();

        assert_eq!(graph.neighbors(&1).unwrap(), &[2, 2]);
        assert_eq!(graph.neighbors(&2).unwrap(), &[1, 1]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_neighbors_of_unknown_vertex() {
        let graph = graph_with(&[1]);
        assert!(matches!(graph.neighbors(&2), Err(Error::VertexNotFound(_))));
        assert!(!graph.contains_vertex(&2));
    }

    #[test]
    fn test_string_identifiers() {
        let mut graph = Graph::new();
        graph.add_vertex("a".to_string());
        graph.add_vertex("b".to_string());
        graph.add_edge(&"a".to_string(), &"b".to_string()).unwrap();

        assert_eq!(graph.neighbors(&"b".to_string()).unwrap(), &["a".to_string()]);
    }

    #[test]
    fn test_to_petgraph_preserves_vertices_and_edges() {
        let mut graph = graph_with(&[10, 20, 30]);
        graph.add_edge(&10, &20).unwrap();
        graph.add_edge(&10, &20).unwrap();
        graph.add_edge(&30, &30).unwrap();

        let exported = graph.to_petgraph();

        assert_eq!(exported.node_count(), 3);
        assert_eq!(exported.edge_count(), 3);
        assert_eq!(exported[NodeIndex::new(0)], 10);
        assert_eq!(exported[NodeIndex::new(2)], 30);
        let endpoints: Vec<(usize, usize)> = exported
            .raw_edges()
            .iter()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        assert_eq!(endpoints, vec![(0, 1), (0, 1), (2, 2)]);
    }
}
