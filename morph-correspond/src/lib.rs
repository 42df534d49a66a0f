//! Nearest-neighbor vertex correspondence between two meshes.
//!
//! Morphing two meshes with unrelated topology needs a fixed mapping from
//! the vertices of one mesh to positions on the other. This crate builds
//! that mapping: for every vertex of a *driving* mesh it finds the nearest
//! vertex of the other mesh and records the pair.
//!
//! - [`Direction`] - selects which mesh drives (and donates topology)
//! - [`VertexPair`] / [`Correspondence`] - the pairing and its per-pair lerp
//! - [`build_correspondence`] - kd-tree accelerated construction
//!
//! # Examples
//!
//! ```
//! use morph_types::{Point3, TriMesh};
//! use morph_correspond::{build_correspondence, Direction};
//!
//! let old = TriMesh::from_parts(
//!     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
//!     vec![],
//! );
//! let new = TriMesh::from_parts(
//!     vec![Point3::new(0.0, 0.0, 2.0), Point3::new(1.0, 0.0, 2.0)],
//!     vec![],
//! );
//!
//! let corr = build_correspondence(&old, &new, Direction::OldDrives)?;
//!
//! // Halfway through the morph every vertex sits at z == 1.
//! let mut buffer = Vec::new();
//! corr.lerp_into(0.5, &mut buffer);
//! assert!(buffer.iter().all(|p| (p.z - 1.0).abs() < 1e-12));
//! # Ok::<(), morph_correspond::CorrespondError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod build;
mod error;
mod pairs;

pub use build::build_correspondence;
pub use error::{CorrespondError, CorrespondResult};
pub use pairs::{Correspondence, Direction, VertexPair};
