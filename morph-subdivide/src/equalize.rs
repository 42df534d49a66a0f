//! Vertex-count equalization between two meshes.

use morph_types::TriMesh;
use tracing::debug;

use crate::error::SubdivideResult;
use crate::params::SubdivideParams;
use crate::similar::{are_similar, DEFAULT_TOLERANCE};
use crate::subdivide::subdivide_to_count;

/// Parameters for [`equalize`].
#[derive(Debug, Clone)]
pub struct EqualizeParams {
    /// Vertex-count tolerance under which no subdivision runs.
    pub tolerance: usize,

    /// Subdivision configuration used when the counts differ.
    pub subdivide: SubdivideParams,
}

impl Default for EqualizeParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            subdivide: SubdivideParams::default(),
        }
    }
}

impl EqualizeParams {
    /// Parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vertex-count tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: usize) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the subdivision configuration.
    #[must_use]
    pub fn with_subdivide(mut self, subdivide: SubdivideParams) -> Self {
        self.subdivide = subdivide;
        self
    }
}

/// Which input [`equalize`] replaced with a subdivided copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqualizedSide {
    /// The first input was subdivided.
    A,
    /// The second input was subdivided.
    B,
}

/// Outcome of [`equalize`].
#[derive(Debug, Clone)]
pub struct EqualizeOutcome {
    /// First mesh, subdivided if it was the smaller one.
    pub a: TriMesh,

    /// Second mesh, subdivided if it was the smaller one.
    pub b: TriMesh,

    /// Which side was subdivided, if any.
    pub subdivided: Option<EqualizedSide>,

    /// Subdivision passes run on the smaller side.
    pub passes: u32,
}

/// Bring two meshes' vertex counts close enough for pairing.
///
/// When the counts are within `params.tolerance` both inputs are returned
/// unchanged. Otherwise the mesh with strictly fewer vertices is subdivided
/// until its count reaches the other's, and the returned pair carries the
/// replacement. One-shot initialization step: callers that swap meshes
/// afterwards must equalize (and re-pair) again.
///
/// # Errors
///
/// Returns an error when subdivision is required but the smaller mesh has no
/// vertices or no triangles, or when the configured vertex limit would be
/// exceeded.
///
/// # Examples
///
/// ```
/// use morph_types::{Point3, TriMesh};
/// use morph_subdivide::{equalize, EqualizeParams, EqualizedSide};
///
/// let small = TriMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
/// let large = TriMesh::from_parts(vec![Point3::origin(); 20], vec![[0, 1, 2]]);
///
/// let outcome = equalize(&small, &large, &EqualizeParams::new())?;
/// assert_eq!(outcome.subdivided, Some(EqualizedSide::A));
/// assert!(outcome.a.vertex_count() >= large.vertex_count());
/// # Ok::<(), morph_subdivide::SubdivideError>(())
/// ```
pub fn equalize(
    a: &TriMesh,
    b: &TriMesh,
    params: &EqualizeParams,
) -> SubdivideResult<EqualizeOutcome> {
    if are_similar(a, b, params.tolerance) {
        debug!(
            "vertex counts {} and {} within tolerance {}, skipping subdivision",
            a.vertex_count(),
            b.vertex_count(),
            params.tolerance
        );
        return Ok(EqualizeOutcome {
            a: a.clone(),
            b: b.clone(),
            subdivided: None,
            passes: 0,
        });
    }

    if a.vertex_count() < b.vertex_count() {
        let report = subdivide_to_count(a, b.vertex_count(), &params.subdivide)?;
        debug!("equalized first mesh: {report}");
        Ok(EqualizeOutcome {
            a: report.mesh,
            b: b.clone(),
            subdivided: Some(EqualizedSide::A),
            passes: report.passes,
        })
    } else {
        let report = subdivide_to_count(b, a.vertex_count(), &params.subdivide)?;
        debug!("equalized second mesh: {report}");
        Ok(EqualizeOutcome {
            a: a.clone(),
            b: report.mesh,
            subdivided: Some(EqualizedSide::B),
            passes: report.passes,
        })
    }
}
