//! Vertex normal recomputation.

use nalgebra::{Point3, Vector3};

/// Compute per-vertex normals from positions and a triangle list.
///
/// Each triangle's unit face normal (right-hand rule on the winding order)
/// is accumulated onto its three vertices, and the per-vertex sums are
/// normalized. Degenerate triangles contribute nothing; vertices with no
/// incident non-degenerate triangle get `+Z`.
///
/// Triangle indices must be in bounds for `positions`.
#[must_use]
pub fn vertex_normals(positions: &[Point3<f64>], triangles: &[[u32; 3]]) -> Vec<Vector3<f64>> {
    let mut normals: Vec<Vector3<f64>> = vec![Vector3::zeros(); positions.len()];

    for tri in triangles {
        let v0 = &positions[tri[0] as usize];
        let v1 = &positions[tri[1] as usize];
        let v2 = &positions[tri[2] as usize];

        let face_normal = (v1 - v0).cross(&(v2 - v0));
        let len = face_normal.norm();
        if len < 1e-12 {
            continue;
        }
        let face_normal = face_normal / len;

        for &idx in tri {
            normals[idx as usize] += face_normal;
        }
    }

    for normal in &mut normals {
        let len = normal.norm();
        if len > 1e-12 {
            *normal /= len;
        } else {
            *normal = Vector3::z();
        }
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn flat_triangle_points_up() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let normals = vertex_normals(&positions, &[[0, 1, 2]]);

        assert_eq!(normals.len(), 3);
        for n in &normals {
            assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn reversed_winding_flips_normal() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let normals = vertex_normals(&positions, &[[0, 2, 1]]);
        assert_relative_eq!(normals[0].z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn isolated_vertex_falls_back_to_z() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(9.0, 9.0, 9.0),
        ];
        let normals = vertex_normals(&positions, &[[0, 1, 2]]);
        assert_eq!(normals[3], Vector3::z());
    }

    #[test]
    fn degenerate_triangle_ignored() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ];
        let normals = vertex_normals(&positions, &[[0, 1, 2]]);
        for n in &normals {
            assert_eq!(*n, Vector3::z());
        }
    }

    #[test]
    fn shared_vertex_averages_faces() {
        // Two faces meeting at a right angle along the X axis.
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, -1.0),
        ];
        let normals = vertex_normals(&positions, &[[0, 1, 2], [0, 1, 3]]);

        // Shared edge vertices see both +Z and +Y face normals.
        let n = normals[0];
        assert_relative_eq!(n.y, n.z, epsilon = 1e-12);
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
    }
}
