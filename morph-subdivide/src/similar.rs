//! Vertex-count similarity check.

use morph_types::TriMesh;

/// Default vertex-count tolerance.
pub const DEFAULT_TOLERANCE: usize = 5;

/// Whether two meshes have approximately the same number of vertices.
///
/// True iff the absolute difference of the vertex counts is within
/// `tolerance`. Equalization skips subdivision entirely when this holds.
///
/// # Examples
///
/// ```
/// use morph_types::{Point3, TriMesh};
/// use morph_subdivide::{are_similar, DEFAULT_TOLERANCE};
///
/// let a = TriMesh::from_parts(vec![Point3::origin(); 10], vec![]);
/// let b = TriMesh::from_parts(vec![Point3::origin(); 13], vec![]);
///
/// assert!(are_similar(&a, &b, DEFAULT_TOLERANCE));
/// assert!(!are_similar(&a, &b, 2));
/// ```
#[must_use]
pub fn are_similar(a: &TriMesh, b: &TriMesh, tolerance: usize) -> bool {
    a.vertex_count().abs_diff(b.vertex_count()) <= tolerance
}
