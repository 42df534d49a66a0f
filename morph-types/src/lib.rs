//! Core mesh types for the morphing pipeline.
//!
//! This crate provides the data model shared by every other crate in the
//! workspace:
//!
//! - [`TriMesh`] - An indexed triangle mesh with optional normals and UV channels
//! - [`Aabb`] - Axis-aligned bounding box, stored per mesh
//! - [`Uv`] - A single texture coordinate
//!
//! # Design
//!
//! A [`TriMesh`] is a plain struct-of-arrays: positions, index triples, and
//! per-vertex attribute arrays that run parallel to the positions. The bounds
//! are a stored field rather than a derived value so that a mesh whose vertex
//! buffer is rewritten every frame can keep the bounds it inherited from
//! another mesh.
//!
//! # Example
//!
//! ```
//! use morph_types::{TriMesh, Point3};
//!
//! let mesh = TriMesh::from_parts(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//!
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.triangle_count(), 1);
//! assert!(!mesh.bounds.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod mesh;
mod normals;

pub use bounds::Aabb;
pub use mesh::{TriMesh, Uv};
pub use normals::vertex_normals;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
