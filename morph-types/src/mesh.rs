//! Indexed triangle mesh.

use crate::{vertex_normals, Aabb};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single texture coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Uv {
    /// Horizontal coordinate.
    pub u: f32,
    /// Vertical coordinate.
    pub v: f32,
}

impl Uv {
    /// Create a texture coordinate.
    #[inline]
    #[must_use]
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

/// An indexed triangle mesh.
///
/// Positions and triangles are the required core; normals and up to three UV
/// channels are optional arrays parallel to `positions`. The bounding box is
/// a stored field: operations that rewrite the vertex buffer every frame copy
/// the bounds from another mesh and leave them untouched, so `bounds` must
/// not be silently derived from `positions` on read.
///
/// # Invariant
///
/// Every index in `triangles` is `< positions.len()`. The mesh types do not
/// enforce this on mutation; [`TriMesh::triangle_indices_valid`] checks it.
///
/// # Example
///
/// ```
/// use morph_types::{TriMesh, Point3};
///
/// let mesh = TriMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert!(mesh.triangle_indices_valid());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriMesh {
    /// Vertex positions. Their count defines the mesh's vertex count.
    pub positions: Vec<Point3<f64>>,

    /// Triangles as index triples into `positions`.
    pub triangles: Vec<[u32; 3]>,

    /// Per-vertex unit normals, parallel to `positions`.
    pub normals: Option<Vec<Vector3<f64>>>,

    /// Primary UV channel, parallel to `positions`.
    pub uv0: Option<Vec<Uv>>,

    /// Secondary UV channel.
    pub uv1: Option<Vec<Uv>>,

    /// Tertiary UV channel.
    pub uv2: Option<Vec<Uv>>,

    /// Stored bounding box.
    pub bounds: Aabb,

    /// Upload hint for renderers: set on meshes whose vertex buffer is
    /// rewritten every frame.
    pub dynamic: bool,
}

impl TriMesh {
    /// Create an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from positions and triangles, computing its bounds.
    ///
    /// Normals and UV channels start out unset.
    #[must_use]
    pub fn from_parts(positions: Vec<Point3<f64>>, triangles: Vec<[u32; 3]>) -> Self {
        let bounds = Aabb::from_points(positions.iter());
        Self {
            positions,
            triangles,
            normals: None,
            uv0: None,
            uv1: None,
            uv2: None,
            bounds,
            dynamic: false,
        }
    }

    /// Create a mesh with pre-allocated position and triangle capacity.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            ..Self::default()
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh has no renderable geometry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.triangles.is_empty()
    }

    /// Check the index invariant: every triangle index is in bounds.
    #[must_use]
    pub fn triangle_indices_valid(&self) -> bool {
        let n = self.positions.len();
        self.triangles
            .iter()
            .all(|tri| tri.iter().all(|&i| (i as usize) < n))
    }

    /// Recompute `bounds` from the current positions.
    pub fn recompute_bounds(&mut self) {
        self.bounds = Aabb::from_points(self.positions.iter());
    }

    /// Recompute per-vertex normals from the current positions and triangles.
    pub fn recompute_normals(&mut self) {
        self.normals = Some(vertex_normals(&self.positions, &self.triangles));
    }

    /// Mark the mesh as frequently re-uploaded.
    pub fn mark_dynamic(&mut self) {
        self.dynamic = true;
    }

    /// Copy triangles, UV channels, and bounds from `donor`.
    ///
    /// Positions and normals are left alone; this is the topology-donor
    /// snapshot taken when a morph output mesh is set up.
    pub fn adopt_topology(&mut self, donor: &Self) {
        self.triangles = donor.triangles.clone();
        self.uv0 = donor.uv0.clone();
        self.uv1 = donor.uv1.clone();
        self.uv2 = donor.uv2.clone();
        self.bounds = donor.bounds;
    }
}
