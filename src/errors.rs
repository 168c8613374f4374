//! Input errors

/// All the ways a query can be rejected before any ray is traced.
///
/// Numerically degenerate or open meshes are *not* errors: they only produce
/// advisory warnings (see [`crate::inside::Diagnostics`]).
#[derive(Debug, thiserror::Error)]
pub enum InsideError {
    /// (FaceIndexOutOfRange) A face references a vertex that does not exist
    #[error("(FaceIndexOutOfRange) Face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    FaceIndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    /// (OutputTooSmall) The output buffer cannot hold one value per grid point
    #[error("(OutputTooSmall) Output buffer holds {actual} values, the grid needs {required}")]
    OutputTooSmall { required: usize, actual: usize },
    /// Error bubbled up while reading mesh data
    #[error("std::io::Error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = InsideError::FaceIndexOutOfRange {
            face: 3,
            index: 9,
            vertex_count: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("Face 3"));
        assert!(msg.contains("vertex 9"));

        let err = InsideError::OutputTooSmall {
            required: 27,
            actual: 8,
        };
        assert!(err.to_string().contains("27"));
    }
}
