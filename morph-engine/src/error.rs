//! Error types for morph setup.

use morph_correspond::CorrespondError;
use morph_subdivide::SubdivideError;
use thiserror::Error;

/// Errors that can abort morph-engine construction.
///
/// All of these are unrecoverable at the point of detection: the inputs are
/// static assets, so construction fails before the engine reaches its ready
/// state rather than leaving a partially-built correspondence behind. A
/// successfully constructed engine has no per-step failure path.
#[derive(Debug, Error)]
pub enum MorphError {
    /// The old mesh has an empty vertex array.
    #[error("old mesh has no vertices")]
    DegenerateOldMesh,

    /// The new mesh has an empty vertex array.
    #[error("new mesh has no vertices")]
    DegenerateNewMesh,

    /// Equalization failed (zero-triangle mesh, vertex limit, ...).
    #[error(transparent)]
    Subdivide(#[from] SubdivideError),

    /// Correspondence construction failed.
    #[error(transparent)]
    Correspond(#[from] CorrespondError),
}

/// Result type for morph setup.
pub type MorphResult<T> = std::result::Result<T, MorphError>;
