//! Error types for subdivision and equalization.

use thiserror::Error;

/// Errors that can occur while densifying a mesh.
#[derive(Debug, Error)]
pub enum SubdivideError {
    /// Mesh has no vertices.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// Mesh has no triangles; a subdivision pass cannot add vertices and the
    /// target count would never be reached.
    #[error("mesh has no triangles to subdivide")]
    NoTriangles,

    /// The next pass would exceed the configured vertex limit.
    #[error(
        "subdivision would exceed vertex limit ({current} -> {projected} vertices, max {max})"
    )]
    WouldExceedLimit {
        /// Current vertex count.
        current: usize,
        /// Projected vertex count after the next pass.
        projected: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Result type for subdivision operations.
pub type SubdivideResult<T> = std::result::Result<T, SubdivideError>;
