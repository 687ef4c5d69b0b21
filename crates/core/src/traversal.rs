//! Traversal queries over [`Graph`]
//!
//! All depth-first queries share one explicit-stack walker. Each stack frame
//! holds a vertex and the position of the next neighbor to try, which gives
//! the same pre-order as a recursive walk without tying depth to the call
//! stack. Neighbors are always tried in edge-insertion order, so every query
//! is deterministic.
//!
//! - [`Graph::dfs`] - depth-first pre-order from a start vertex
//! - [`Graph::bfs`] - breadth-first order from a start vertex
//! - [`Graph::has_path`] - reachability between two vertices
//! - [`Graph::connected_components`] - partition of all vertices

use std::collections::{HashSet, VecDeque};
use std::convert::Infallible;
use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::{Graph, VertexId};

impl<V: VertexId> Graph<V> {
    /// Depth-first traversal from `start`
    ///
    /// Returns every vertex reachable from `start` exactly once, in visitation
    /// order. Vertices outside `start`'s component are never visited.
    ///
    /// # Errors
    /// Returns [`crate::Error::VertexNotFound`] if `start` is unregistered.
    pub fn dfs(&self, start: &V) -> Result<Vec<V>> {
        self.ensure_vertex(start)?;
        debug!(start = ?start, "starting depth-first traversal");

        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.walk_all(start, &mut visited, |vertex| order.push(vertex.clone()));

        debug!(visited = order.len(), "depth-first traversal complete");
        Ok(order)
    }

    /// Breadth-first traversal from `start`
    ///
    /// Vertices are marked visited when enqueued, so a vertex shared by several
    /// frontier members is queued only once. The result is in dequeue order.
    ///
    /// # Errors
    /// Returns [`crate::Error::VertexNotFound`] if `start` is unregistered.
    pub fn bfs(&self, start: &V) -> Result<Vec<V>> {
        self.ensure_vertex(start)?;
        debug!(start = ?start, "starting breadth-first traversal");

        let mut visited: HashSet<&V> = HashSet::new();
        let mut queue: VecDeque<&V> = VecDeque::new();
        let mut order = Vec::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            trace!(vertex = ?vertex, "visiting");
            order.push(vertex.clone());

            for neighbor in self.neighbors_or_empty(vertex) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        debug!(visited = order.len(), "breadth-first traversal complete");
        Ok(order)
    }

    /// Check whether `to` is reachable from `from`
    ///
    /// A vertex always reaches itself. The search stops as soon as `to` is
    /// visited.
    ///
    /// # Errors
    /// Returns [`crate::Error::VertexNotFound`] if either vertex is unregistered.
    pub fn has_path(&self, from: &V, to: &V) -> Result<bool> {
        self.ensure_vertex(from)?;
        self.ensure_vertex(to)?;

        let (found, explored) = self.search_path(from, to);
        debug!(from = ?from, to = ?to, found, explored, "path query complete");
        Ok(found)
    }

    /// Depth-first search for `to`, returning whether it was found and how
    /// many vertices were visited before the search stopped
    fn search_path(&self, from: &V, to: &V) -> (bool, usize) {
        let mut visited = HashSet::new();
        let found = self
            .walk_depth_first(from, &mut visited, |vertex| {
                if vertex == to {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .is_break();
        (found, visited.len())
    }

    /// Partition all vertices into connected components
    ///
    /// Components appear in the order their first vertex was added, and each
    /// component lists its vertices in depth-first order from that vertex.
    /// Isolated vertices form singleton components.
    pub fn connected_components(&self) -> Vec<Vec<V>> {
        let mut visited = HashSet::new();
        let mut components = Vec::new();

        for root in self.vertices() {
            if visited.contains(root) {
                continue;
            }

            let mut component = Vec::new();
            self.walk_all(root, &mut visited, |vertex| component.push(vertex.clone()));
            components.push(component);
        }

        debug!(components = components.len(), "connected components computed");
        components
    }

    /// Visit everything reachable from `start` that is not yet in `visited`
    fn walk_all<'g>(
        &'g self,
        start: &'g V,
        visited: &mut HashSet<&'g V>,
        mut visit: impl FnMut(&'g V),
    ) {
        let flow = self.walk_depth_first(start, visited, |vertex| {
            visit(vertex);
            ControlFlow::<Infallible>::Continue(())
        });
        match flow {
            ControlFlow::Continue(()) => {}
            ControlFlow::Break(never) => match never {},
        }
    }

    /// Depth-first pre-order walk from `start`, skipping vertices in `visited`
    ///
    /// `visit` is called once per newly visited vertex. Returning
    /// `ControlFlow::Break` stops the walk immediately and is passed back to
    /// the caller.
    fn walk_depth_first<'g, B>(
        &'g self,
        start: &'g V,
        visited: &mut HashSet<&'g V>,
        mut visit: impl FnMut(&'g V) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        if !visited.insert(start) {
            return ControlFlow::Continue(());
        }
        trace!(vertex = ?start, "visiting");
        if let flow @ ControlFlow::Break(_) = visit(start) {
            return flow;
        }

        let mut stack: Vec<(&'g V, usize)> = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let (vertex, position) = *frame;
            let Some(next) = self.neighbors_or_empty(vertex).get(position) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if visited.insert(next) {
                trace!(vertex = ?next, "visiting");
                if let flow @ ControlFlow::Break(_) = visit(next) {
                    return flow;
                }
                stack.push((next, 0));
            }
        }

        ControlFlow::Continue(())
    }
}
