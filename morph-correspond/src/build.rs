//! Nearest-neighbor correspondence construction.

// Mesh indices are u32/u64 across the kd-tree boundary
#![allow(clippy::cast_possible_truncation)]

use kiddo::{KdTree, SquaredEuclidean};
use morph_types::{Point3, TriMesh};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{CorrespondError, CorrespondResult};
use crate::pairs::{Correspondence, Direction, VertexPair};

/// Above this many driving vertices the lookups run in parallel.
const PARALLEL_THRESHOLD: usize = 1024;

/// Pair every driving-mesh vertex with its nearest counterpart.
///
/// For each vertex of the driving mesh (selected by `direction`), in vertex
/// order, the nearest vertex of the other mesh by Euclidean distance is
/// looked up through a kd-tree and the two positions become a
/// [`VertexPair`]. The result has exactly one pair per driving vertex.
///
/// This runs once per mesh pair at setup, not per frame; cost is
/// `O(n log m)` in the two vertex counts. On exact distance ties the tree
/// picks one of the equally-near vertices without further guarantees.
///
/// # Errors
///
/// Returns an error if either mesh has no vertices.
///
/// # Examples
///
/// ```
/// use morph_types::{Point3, TriMesh};
/// use morph_correspond::{build_correspondence, Direction};
///
/// let old = TriMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
/// // The same triangle, two units up the Z axis.
/// let new = TriMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 2.0),
///         Point3::new(1.0, 0.0, 2.0),
///         Point3::new(0.0, 1.0, 2.0),
///     ],
///     vec![[0, 1, 2]],
/// );
///
/// let corr = build_correspondence(&old, &new, Direction::OldDrives)?;
/// assert_eq!(corr.len(), old.vertex_count());
/// assert_eq!(corr.pairs()[1].new, Point3::new(1.0, 0.0, 2.0));
/// # Ok::<(), morph_correspond::CorrespondError>(())
/// ```
pub fn build_correspondence(
    old: &TriMesh,
    new: &TriMesh,
    direction: Direction,
) -> CorrespondResult<Correspondence> {
    if old.positions.is_empty() {
        return Err(CorrespondError::EmptyOldMesh);
    }
    if new.positions.is_empty() {
        return Err(CorrespondError::EmptyNewMesh);
    }

    let pairs = match direction {
        Direction::OldDrives => {
            let nearest = nearest_in(&old.positions, &new.positions);
            old.positions
                .iter()
                .zip(nearest)
                .map(|(&o, n)| VertexPair::new(o, n))
                .collect()
        }
        Direction::NewDrives => {
            let nearest = nearest_in(&new.positions, &old.positions);
            new.positions
                .iter()
                .zip(nearest)
                .map(|(&n, o)| VertexPair::new(o, n))
                .collect()
        }
    };

    let corr = Correspondence::from_pairs(pairs, direction);
    debug!(
        "built correspondence: {} pairs, direction {:?}",
        corr.len(),
        direction
    );
    Ok(corr)
}

/// For each query point, the nearest point of `other`, in query order.
fn nearest_in(queries: &[Point3<f64>], other: &[Point3<f64>]) -> Vec<Point3<f64>> {
    let tree = build_kdtree(other);
    let lookup = |p: &Point3<f64>| {
        let nearest = tree.nearest_one::<SquaredEuclidean>(&[p.x, p.y, p.z]);
        other[nearest.item as usize]
    };

    if queries.len() > PARALLEL_THRESHOLD {
        queries.par_iter().map(lookup).collect()
    } else {
        queries.iter().map(lookup).collect()
    }
}

fn build_kdtree(points: &[Point3<f64>]) -> KdTree<f64, 3> {
    let mut tree: KdTree<f64, 3> = KdTree::new();
    for (i, p) in points.iter().enumerate() {
        tree.add(&[p.x, p.y, p.z], i as u64);
    }
    tree
}
