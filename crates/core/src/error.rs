//! Error types for graph operations.

use thiserror::Error;

/// The error type for graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation referenced a vertex that was never added.
    ///
    /// Holds the `Debug` rendering of the identifier so the error stays
    /// independent of the graph's vertex type.
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),
}

impl Error {
    pub(crate) fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::VertexNotFound(format!("{vertex:?}"))
    }
}

/// A specialized Result type for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_not_found_message() {
        let err = Error::vertex_not_found(&42);
        assert_eq!(err, Error::VertexNotFound("42".to_string()));
        assert_eq!(err.to_string(), "Vertex not found: 42");
    }

    #[test]
    fn test_string_ids_are_quoted() {
        let err = Error::vertex_not_found(&"a");
        assert_eq!(err.to_string(), "Vertex not found: \"a\"");
    }
}
