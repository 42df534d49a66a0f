//! Mesh densification for topology-independent morphing.
//!
//! Before two meshes with very different vertex counts can be paired
//! vertex-to-vertex, the sparser one needs more vertices. This crate
//! provides:
//!
//! - [`subdivide_once`] / [`subdivide_to_count`] - uniform 1-to-4 triangle
//!   splitting (plus a Loop smoothing alternative) until a target vertex
//!   count is reached
//! - [`are_similar`] - the vertex-count similarity check that decides whether
//!   subdivision is needed at all
//! - [`equalize`] - the driver that subdivides the smaller of two meshes up
//!   to the larger one's count
//!
//! # Examples
//!
//! ```
//! use morph_types::{Point3, TriMesh};
//! use morph_subdivide::{subdivide_to_count, SubdivideParams};
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
//! // Each Split4 pass turns V vertices and T triangles into V + 3T and 4T.
//! let report = subdivide_to_count(&mesh, 50, &SubdivideParams::split4())?;
//! assert!(report.final_vertices >= 50);
//! # Ok::<(), morph_subdivide::SubdivideError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod equalize;
mod error;
mod params;
mod result;
mod similar;
mod subdivide;

pub use equalize::{equalize, EqualizeOutcome, EqualizeParams, EqualizedSide};
pub use error::{SubdivideError, SubdivideResult};
pub use params::{SubdivideParams, SubdivisionScheme};
pub use result::SubdivisionReport;
pub use similar::{are_similar, DEFAULT_TOLERANCE};
pub use subdivide::{subdivide_once, subdivide_to_count};
