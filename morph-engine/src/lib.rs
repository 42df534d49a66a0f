//! Per-frame mesh interpolation between two source meshes.
//!
//! This crate ties the workspace together: given an "old" and a "new" mesh
//! with possibly unrelated topology, it produces a single output mesh whose
//! vertices slide between the two as a scalar blend value moves from 0 to 1.
//!
//! Setup (once):
//!
//! 1. Optionally equalize vertex counts by subdividing the smaller mesh
//!    ([`morph_subdivide`]).
//! 2. Pair every driving-mesh vertex with its nearest counterpart
//!    ([`morph_correspond`]).
//! 3. Snapshot triangles, UV channels, and bounds from the driving mesh into
//!    the output.
//!
//! Per frame: [`MorphEngine::step`] interpolates every pair, replaces the
//! output's vertex buffer, and recomputes its normals. The output is owned
//! by the engine and handed to the renderer by reference; the engine must
//! finish a step before the mesh is read for that frame.
//!
//! # Examples
//!
//! ```
//! use morph_types::{Point3, TriMesh};
//! use morph_engine::{MorphConfig, MorphEngine};
//!
//! let old = TriMesh::from_parts(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//! let new = TriMesh::from_parts(
//!     vec![
//!         Point3::new(0.0, 0.0, 2.0),
//!         Point3::new(1.0, 0.0, 2.0),
//!         Point3::new(0.0, 1.0, 2.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//!
//! let config = MorphConfig::new(old, new).with_equalize(true);
//! let mut engine = MorphEngine::new(config)?;
//!
//! engine.step(0.5);
//! let mesh = engine.mesh();
//! assert_eq!(mesh.vertex_count(), 3);
//! assert!((mesh.positions[0].z - 1.0).abs() < 1e-12);
//! # Ok::<(), morph_engine::MorphError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod config;
mod engine;
mod error;
mod material;
mod summary;

pub use config::MorphConfig;
pub use engine::{MorphEngine, MorphState};
pub use error::{MorphError, MorphResult};
pub use material::{Material, TextureHandle};
pub use summary::{MeshSide, SetupSummary};

// Re-export the pairing types; hosts need Direction for configuration and
// see Correspondence through the engine's accessor.
pub use morph_correspond::{Correspondence, Direction, VertexPair};
