//! Subdivision passes.

// Index arithmetic between usize buffers and u32 mesh indices
#![allow(clippy::cast_possible_truncation)]

use hashbrown::{HashMap, HashSet};
use morph_types::{Point3, TriMesh, Vector3};
use tracing::debug;

use crate::error::{SubdivideError, SubdivideResult};
use crate::params::{SubdivideParams, SubdivisionScheme};
use crate::result::SubdivisionReport;

/// Apply a single subdivision pass.
///
/// Under [`SubdivisionScheme::Split4`] every triangle `(v0, v1, v2)` appends
/// its own midpoints `m01, m12, m20` and is replaced by the four children
/// `(v0, m01, m20)`, `(m01, v1, m12)`, `(m20, m01, m12)`, `(m12, m20, v2)`.
/// Midpoints are *not* shared across edges: coincident duplicates on shared
/// edges are part of the contract, giving exactly
/// `vertex_count + 3 * triangle_count` vertices and `4 * triangle_count`
/// triangles.
///
/// The output carries positions and triangles only; UV channels are not
/// propagated. Bounds and normals are recomputed.
///
/// # Errors
///
/// Returns an error if the mesh has no vertices or no triangles.
///
/// # Examples
///
/// ```
/// use morph_types::{Point3, TriMesh};
/// use morph_subdivide::{subdivide_once, SubdivideParams};
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
/// let dense = subdivide_once(&mesh, &SubdivideParams::split4())?;
/// assert_eq!(dense.vertex_count(), 6);
/// assert_eq!(dense.triangle_count(), 4);
/// # Ok::<(), morph_subdivide::SubdivideError>(())
/// ```
pub fn subdivide_once(mesh: &TriMesh, params: &SubdivideParams) -> SubdivideResult<TriMesh> {
    if mesh.positions.is_empty() {
        return Err(SubdivideError::EmptyMesh);
    }
    if mesh.triangles.is_empty() {
        return Err(SubdivideError::NoTriangles);
    }

    let mut out = match params.scheme {
        SubdivisionScheme::Split4 => split4_once(mesh),
        SubdivisionScheme::Loop => loop_once(mesh, params.preserve_boundaries),
    };
    out.recompute_normals();
    Ok(out)
}

/// Subdivide until the vertex count reaches `target_vertex_count`.
///
/// Runs zero passes when the mesh already has enough vertices. Terminates
/// because every pass strictly increases the vertex count for a mesh with at
/// least one triangle.
///
/// # Errors
///
/// Returns an error if the mesh has no vertices, has no triangles (a pass
/// would add nothing and the loop would never finish), or if the next pass
/// would grow past `params.max_vertices`.
pub fn subdivide_to_count(
    mesh: &TriMesh,
    target_vertex_count: usize,
    params: &SubdivideParams,
) -> SubdivideResult<SubdivisionReport> {
    if mesh.positions.is_empty() {
        return Err(SubdivideError::EmptyMesh);
    }
    if mesh.triangles.is_empty() {
        return Err(SubdivideError::NoTriangles);
    }

    let original_vertices = mesh.vertex_count();
    let original_triangles = mesh.triangle_count();

    let mut current = mesh.clone();
    let mut passes = 0u32;

    while current.vertex_count() < target_vertex_count {
        // V + 3T is exact for Split4 and an upper bound for Loop.
        let projected = current.vertex_count() + current.triangle_count() * 3;
        if projected > params.max_vertices {
            return Err(SubdivideError::WouldExceedLimit {
                current: current.vertex_count(),
                projected,
                max: params.max_vertices,
            });
        }

        current = subdivide_once(&current, params)?;
        passes += 1;
        debug!(
            "subdivision pass {}: {} vertices, {} triangles (target {})",
            passes,
            current.vertex_count(),
            current.triangle_count(),
            target_vertex_count
        );
    }

    Ok(SubdivisionReport {
        original_vertices,
        final_vertices: current.vertex_count(),
        original_triangles,
        final_triangles: current.triangle_count(),
        mesh: current,
        passes,
        scheme: params.scheme,
    })
}

/// Corner + center split without midpoint sharing.
fn split4_once(mesh: &TriMesh) -> TriMesh {
    let old = &mesh.positions;
    let mut positions = Vec::with_capacity(old.len() + mesh.triangles.len() * 3);
    positions.extend_from_slice(old);
    let mut triangles = Vec::with_capacity(mesh.triangles.len() * 4);

    for &[i0, i1, i2] in &mesh.triangles {
        let v0 = old[i0 as usize];
        let v1 = old[i1 as usize];
        let v2 = old[i2 as usize];

        let base = positions.len() as u32;
        let (m01, m12, m20) = (base, base + 1, base + 2);
        positions.push(midpoint(&v0, &v1));
        positions.push(midpoint(&v1, &v2));
        positions.push(midpoint(&v2, &v0));

        triangles.push([i0, m01, m20]);
        triangles.push([m01, i1, m12]);
        triangles.push([m20, m01, m12]);
        triangles.push([m12, m20, i2]);
    }

    TriMesh::from_parts(positions, triangles)
}

/// Loop-style smoothing pass with shared edge midpoints.
fn loop_once(mesh: &TriMesh, preserve_boundaries: bool) -> TriMesh {
    let boundary = boundary_edges(&mesh.triangles);
    let neighbors = vertex_neighbors(&mesh.triangles, mesh.positions.len());

    let mut positions = Vec::with_capacity(mesh.positions.len() * 4);
    for (vi, p) in mesh.positions.iter().enumerate() {
        let vi = vi as u32;
        let on_boundary = boundary.iter().any(|&(a, b)| a == vi || b == vi);

        let new_pos = if on_boundary && preserve_boundaries {
            boundary_rule(vi, &mesh.positions, &boundary)
        } else if neighbors[vi as usize].is_empty() {
            *p
        } else {
            interior_rule(p, &neighbors[vi as usize], &mesh.positions)
        };
        positions.push(new_pos);
    }

    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
    let mut triangles = Vec::with_capacity(mesh.triangles.len() * 4);

    for &[v0, v1, v2] in &mesh.triangles {
        let m01 = shared_midpoint(v0, v1, &mesh.positions, &mut positions, &mut midpoints);
        let m12 = shared_midpoint(v1, v2, &mesh.positions, &mut positions, &mut midpoints);
        let m20 = shared_midpoint(v2, v0, &mesh.positions, &mut positions, &mut midpoints);

        triangles.push([v0, m01, m20]);
        triangles.push([v1, m12, m01]);
        triangles.push([v2, m20, m12]);
        triangles.push([m01, m12, m20]);
    }

    TriMesh::from_parts(positions, triangles)
}

fn midpoint(a: &Point3<f64>, b: &Point3<f64>) -> Point3<f64> {
    Point3::from((a.coords + b.coords) * 0.5)
}

/// Edge key with the smaller index first.
const fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Midpoint vertex shared between the triangles on one edge.
fn shared_midpoint(
    a: u32,
    b: u32,
    original: &[Point3<f64>],
    positions: &mut Vec<Point3<f64>>,
    midpoints: &mut HashMap<(u32, u32), u32>,
) -> u32 {
    let key = edge_key(a, b);
    if let Some(&idx) = midpoints.get(&key) {
        return idx;
    }

    let idx = positions.len() as u32;
    positions.push(midpoint(&original[a as usize], &original[b as usize]));
    midpoints.insert(key, idx);
    idx
}

/// Edges with exactly one adjacent triangle.
fn boundary_edges(triangles: &[[u32; 3]]) -> HashSet<(u32, u32)> {
    let mut counts: HashMap<(u32, u32), u32> = HashMap::new();
    for tri in triangles {
        for i in 0..3 {
            let key = edge_key(tri[i], tri[(i + 1) % 3]);
            *counts.entry(key).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .filter(|&(_, count)| count == 1)
        .map(|(edge, _)| edge)
        .collect()
}

fn vertex_neighbors(triangles: &[[u32; 3]], vertex_count: usize) -> Vec<Vec<u32>> {
    let mut sets: Vec<HashSet<u32>> = vec![HashSet::new(); vertex_count];
    for tri in triangles {
        for (i, &vi) in tri.iter().enumerate() {
            for (j, &vj) in tri.iter().enumerate() {
                if i != j {
                    sets[vi as usize].insert(vj);
                }
            }
        }
    }
    sets.into_iter().map(|s| s.into_iter().collect()).collect()
}

/// Loop boundary rule: `3/4 v + 1/8 (n1 + n2)` for the two boundary neighbors.
fn boundary_rule(
    v: u32,
    positions: &[Point3<f64>],
    boundary: &HashSet<(u32, u32)>,
) -> Point3<f64> {
    let mut neighbors = Vec::new();
    for &(a, b) in boundary {
        if a == v {
            neighbors.push(b);
        } else if b == v {
            neighbors.push(a);
        }
    }

    let p = &positions[v as usize];
    if neighbors.len() == 2 {
        let n1 = &positions[neighbors[0] as usize];
        let n2 = &positions[neighbors[1] as usize];
        Point3::from(p.coords * 0.75 + (n1.coords + n2.coords) * 0.125)
    } else {
        *p
    }
}

/// Loop interior rule with the standard beta coefficient.
#[allow(clippy::cast_precision_loss)]
fn interior_rule(p: &Point3<f64>, neighbors: &[u32], positions: &[Point3<f64>]) -> Point3<f64> {
    let n = neighbors.len();
    let beta = if n == 3 {
        3.0 / 16.0
    } else {
        3.0 / (8.0 * n as f64)
    };
    let alpha = 1.0 - n as f64 * beta;

    let mut sum = coord_sum(neighbors, positions);
    sum *= beta;
    Point3::from(p.coords * alpha + sum)
}

fn coord_sum(indices: &[u32], positions: &[Point3<f64>]) -> Vector3<f64> {
    let mut sum = Vector3::zeros();
    for &i in indices {
        sum += positions[i as usize].coords;
    }
    sum
}
