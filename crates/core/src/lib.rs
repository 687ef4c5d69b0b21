//! Graph Walker Core Library
//!
//! An undirected graph over an adjacency-list representation, with
//! depth-first and breadth-first traversal, path existence, and
//! connected-component enumeration.
//!
//! # Example
//!
//! ```
//! use graph_walker_core::Graph;
//!
//! # fn main() -> Result<(), graph_walker_core::Error> {
//! let mut graph = Graph::new();
//! for v in 1..=5 {
//!     graph.add_vertex(v);
//! }
//! for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 5)] {
//!     graph.add_edge(&a, &b)?;
//! }
//!
//! assert_eq!(graph.dfs(&1)?, vec![1, 2, 3, 4, 5]);
//! assert_eq!(graph.bfs(&1)?, vec![1, 2, 3, 4, 5]);
//! assert!(graph.has_path(&1, &5)?);
//! assert_eq!(graph.connected_components(), vec![vec![1, 2, 3, 4, 5]]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod traversal;

// Re-export commonly used types
pub use error::{Error, Result};
pub use graph::{Graph, VertexId};
