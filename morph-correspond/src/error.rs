//! Error types for correspondence building.

use thiserror::Error;

/// Errors that can occur while pairing vertices.
#[derive(Debug, Error)]
pub enum CorrespondError {
    /// The old mesh has no vertices.
    #[error("old mesh has no vertices")]
    EmptyOldMesh,

    /// The new mesh has no vertices.
    #[error("new mesh has no vertices")]
    EmptyNewMesh,
}

/// Result type for correspondence operations.
pub type CorrespondResult<T> = std::result::Result<T, CorrespondError>;
