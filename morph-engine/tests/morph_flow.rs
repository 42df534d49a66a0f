//! End-to-end morphing scenarios.

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use morph_engine::{Direction, MeshSide, MorphConfig, MorphEngine, MorphError};
use morph_subdivide::SubdivideError;
use morph_types::{Point3, TriMesh, Uv};

fn triangle_at(z: f64) -> TriMesh {
    TriMesh::from_parts(
        vec![
            Point3::new(0.0, 0.0, z),
            Point3::new(1.0, 0.0, z),
            Point3::new(0.0, 1.0, z),
        ],
        vec![[0, 1, 2]],
    )
}

/// A rows x cols grid in the XY plane, triangulated cell by cell.
fn grid_mesh(rows: u32, cols: u32, z: f64) -> TriMesh {
    let mut positions = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            positions.push(Point3::new(f64::from(c), f64::from(r), z));
        }
    }

    let mut triangles = Vec::new();
    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let i = r * cols + c;
            triangles.push([i, i + 1, i + cols]);
            triangles.push([i + 1, i + cols + 1, i + cols]);
        }
    }

    TriMesh::from_parts(positions, triangles)
}

#[test]
fn translated_triangle_meets_in_the_middle() {
    // Two identical triangles two units apart on Z: similarity holds, no
    // subdivision runs, and every old vertex pairs with its twin.
    let old = triangle_at(0.0);
    let new = triangle_at(2.0);

    let config = MorphConfig::new(old.clone(), new).with_equalize(true);
    let mut engine = MorphEngine::new(config).unwrap();
    assert_eq!(engine.summary().equalized, None);

    engine.step(0.5);
    let mesh = engine.mesh();
    assert_eq!(mesh.positions[0], Point3::new(0.0, 0.0, 1.0));
    assert_eq!(mesh.positions[1], Point3::new(1.0, 0.0, 1.0));
    assert_eq!(mesh.positions[2], Point3::new(0.0, 1.0, 1.0));
    assert_eq!(mesh.triangles, old.triangles);
}

#[test]
fn step_zero_reproduces_the_old_side_exactly() {
    let old = triangle_at(0.0);
    let mut engine =
        MorphEngine::new(MorphConfig::new(old.clone(), triangle_at(2.0))).unwrap();

    engine.step(0.0);
    assert_eq!(engine.mesh().positions, old.positions);
}

#[test]
fn step_one_reproduces_the_new_side() {
    let new = triangle_at(2.0);
    let mut engine =
        MorphEngine::new(MorphConfig::new(triangle_at(0.0), new.clone())).unwrap();

    engine.step(1.0);
    for (got, want) in engine.mesh().positions.iter().zip(new.positions.iter()) {
        assert_relative_eq!(got.z, want.z, epsilon = 1e-12);
        assert_relative_eq!(got.x, want.x, epsilon = 1e-12);
    }
}

#[test]
fn step_is_idempotent() {
    let mut engine =
        MorphEngine::new(MorphConfig::new(triangle_at(0.0), triangle_at(2.0))).unwrap();

    engine.step(0.3);
    let first = engine.mesh().positions.clone();
    let first_normals = engine.mesh().normals.clone();

    engine.step(0.3);
    assert_eq!(engine.mesh().positions, first);
    assert_eq!(engine.mesh().normals, first_normals);
}

#[test]
fn output_topology_is_frozen() {
    let old = triangle_at(0.0);
    let mut engine =
        MorphEngine::new(MorphConfig::new(old.clone(), grid_mesh(3, 3, 2.0))).unwrap();

    let triangles = engine.mesh().triangles.clone();
    let bounds = engine.mesh().bounds;

    for blend in [0.0, 0.3, 0.7, 1.0, 1.5] {
        engine.step(blend);
        assert_eq!(engine.mesh().positions.len(), old.vertex_count());
        assert_eq!(engine.mesh().triangles, triangles);
        assert_eq!(engine.mesh().bounds, bounds);
        assert!(engine.mesh().triangle_indices_valid());
    }
}

#[test]
fn donor_uvs_and_bounds_come_from_the_driving_mesh() {
    let mut old = triangle_at(0.0);
    old.uv0 = Some(vec![Uv::new(0.0, 0.0), Uv::new(1.0, 0.0), Uv::new(0.0, 1.0)]);
    let old_bounds = old.bounds;

    let mut engine =
        MorphEngine::new(MorphConfig::new(old, triangle_at(2.0))).unwrap();
    engine.step(1.0);

    // Even fully morphed to the new side, topology data is the old mesh's.
    assert_eq!(engine.mesh().uv0.as_ref().map(Vec::len), Some(3));
    assert_eq!(engine.mesh().bounds, old_bounds);
}

#[test]
fn new_drives_uses_new_topology_and_count() {
    let old = triangle_at(0.0);
    let new = grid_mesh(3, 4, 2.0); // 12 vertices

    let config = MorphConfig::new(old.clone(), new.clone())
        .with_direction(Direction::NewDrives);
    let mut engine = MorphEngine::new(config).unwrap();

    assert_eq!(engine.mesh().vertex_count(), 12);
    assert_eq!(engine.mesh().triangles, new.triangles);

    // Blend 1 lands on the driving (new) mesh's own positions.
    engine.step(1.0);
    for (got, want) in engine.mesh().positions.iter().zip(new.positions.iter()) {
        assert_relative_eq!(got.x, want.x, epsilon = 1e-12);
        assert_relative_eq!(got.y, want.y, epsilon = 1e-12);
        assert_relative_eq!(got.z, want.z, epsilon = 1e-12);
    }
    // Blend 0 lands every vertex on some old-mesh position.
    engine.step(0.0);
    for p in &engine.mesh().positions {
        assert!(old.positions.iter().any(|o| (o - p).norm() < 1e-12));
    }
}

#[test]
fn unbalanced_meshes_are_equalized_before_pairing() {
    let old = triangle_at(0.0); // 3 vertices
    let new = grid_mesh(10, 20, 2.0); // 200 vertices

    let config = MorphConfig::new(old, new)
        .with_equalize(true)
        .with_direction(Direction::OldDrives);
    let engine = MorphEngine::new(config).unwrap();

    let summary = engine.summary();
    assert_eq!(summary.equalized, Some(MeshSide::Old));
    assert!(summary.subdivision_passes > 0);
    // The subdivided old mesh drives, so the output is at least as dense as
    // the new mesh.
    assert!(engine.mesh().vertex_count() >= 200);
    assert!(engine.mesh().triangle_indices_valid());
}

#[test]
fn materials_blend_with_textures_pinned_to_old() {
    use morph_engine::{Material, TextureHandle};

    let old_mat = Material::new()
        .with_float("gloss", 0.0)
        .with_texture("albedo", TextureHandle(7));
    let new_mat = Material::new()
        .with_float("gloss", 1.0)
        .with_texture("albedo", TextureHandle(8));

    let config = MorphConfig::new(triangle_at(0.0), triangle_at(2.0))
        .with_materials(old_mat, new_mat);
    let mut engine = MorphEngine::new(config).unwrap();

    engine.step(0.5);
    let material = engine.material().unwrap();
    assert_relative_eq!(*material.floats.get("gloss").unwrap(), 0.5);
    assert_eq!(material.textures.get("albedo"), Some(&TextureHandle(7)));
}

#[test]
fn degenerate_inputs_abort_setup() {
    let result = MorphEngine::new(MorphConfig::new(TriMesh::new(), triangle_at(0.0)));
    assert!(matches!(result, Err(MorphError::DegenerateOldMesh)));

    // A point cloud without triangles cannot be equalized upward.
    let points_only = TriMesh::from_parts(vec![Point3::origin(); 2], vec![]);
    let config = MorphConfig::new(points_only, grid_mesh(5, 5, 0.0)).with_equalize(true);
    let result = MorphEngine::new(config);
    assert!(matches!(
        result,
        Err(MorphError::Subdivide(SubdivideError::NoTriangles))
    ));
}

#[test]
fn out_of_range_blend_extrapolates() {
    let mut engine =
        MorphEngine::new(MorphConfig::new(triangle_at(0.0), triangle_at(2.0))).unwrap();

    engine.step(2.0);
    assert_relative_eq!(engine.mesh().positions[0].z, 4.0, epsilon = 1e-12);

    engine.step(-0.5);
    assert_relative_eq!(engine.mesh().positions[0].z, -1.0, epsilon = 1e-12);
}
