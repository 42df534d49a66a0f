//! Morph configuration.

use morph_correspond::Direction;
use morph_subdivide::{SubdivisionScheme, DEFAULT_TOLERANCE};
use morph_types::TriMesh;

use crate::error::{MorphError, MorphResult};
use crate::material::Material;

/// Configuration for a [`MorphEngine`](crate::MorphEngine).
///
/// Set once and validated eagerly at engine construction; nothing here is
/// re-checked at runtime. Both meshes are required by construction;
/// materials are optional and only enable the cosmetic blended material
/// when both are present.
#[derive(Debug, Clone)]
pub struct MorphConfig {
    /// The morph source at blend 0.
    pub old_mesh: TriMesh,

    /// The morph target at blend 1.
    pub new_mesh: TriMesh,

    /// Material shown at blend 0.
    pub old_material: Option<Material>,

    /// Material shown at blend 1.
    pub new_material: Option<Material>,

    /// Blend value applied by the setup step.
    pub initial_blend: f64,

    /// Run vertex-count equalization before pairing.
    pub equalize: bool,

    /// Which mesh drives the pairing and donates topology.
    pub direction: Direction,

    /// Vertex-count tolerance for the equalization similarity check.
    pub tolerance: usize,

    /// Subdivision scheme used by equalization.
    pub scheme: SubdivisionScheme,
}

impl MorphConfig {
    /// Configuration with defaults: no materials, blend 0, no equalization,
    /// old mesh driving, tolerance 5, Split4 subdivision.
    #[must_use]
    pub fn new(old_mesh: TriMesh, new_mesh: TriMesh) -> Self {
        Self {
            old_mesh,
            new_mesh,
            old_material: None,
            new_material: None,
            initial_blend: 0.0,
            equalize: false,
            direction: Direction::default(),
            tolerance: DEFAULT_TOLERANCE,
            scheme: SubdivisionScheme::default(),
        }
    }

    /// Set both source materials.
    #[must_use]
    pub fn with_materials(mut self, old: Material, new: Material) -> Self {
        self.old_material = Some(old);
        self.new_material = Some(new);
        self
    }

    /// Set the blend value applied at setup.
    #[must_use]
    pub const fn with_initial_blend(mut self, blend: f64) -> Self {
        self.initial_blend = blend;
        self
    }

    /// Enable or disable vertex-count equalization.
    #[must_use]
    pub const fn with_equalize(mut self, equalize: bool) -> Self {
        self.equalize = equalize;
        self
    }

    /// Set the pairing direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the similarity tolerance used by equalization.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: usize) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the subdivision scheme used by equalization.
    #[must_use]
    pub const fn with_scheme(mut self, scheme: SubdivisionScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Reject degenerate inputs before any setup work runs.
    pub(crate) fn validate(&self) -> MorphResult<()> {
        if self.old_mesh.positions.is_empty() {
            return Err(MorphError::DegenerateOldMesh);
        }
        if self.new_mesh.positions.is_empty() {
            return Err(MorphError::DegenerateNewMesh);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_types::Point3;

    fn triangle() -> TriMesh {
        TriMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn defaults() {
        let config = MorphConfig::new(triangle(), triangle());
        assert!(!config.equalize);
        assert_eq!(config.direction, Direction::OldDrives);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert!(config.old_material.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_chain() {
        let config = MorphConfig::new(triangle(), triangle())
            .with_initial_blend(0.5)
            .with_equalize(true)
            .with_direction(Direction::NewDrives)
            .with_tolerance(10)
            .with_scheme(SubdivisionScheme::Loop);

        assert!((config.initial_blend - 0.5).abs() < f64::EPSILON);
        assert!(config.equalize);
        assert_eq!(config.direction, Direction::NewDrives);
        assert_eq!(config.tolerance, 10);
        assert_eq!(config.scheme, SubdivisionScheme::Loop);
    }

    #[test]
    fn empty_meshes_fail_validation() {
        let config = MorphConfig::new(TriMesh::new(), triangle());
        assert!(matches!(
            config.validate(),
            Err(MorphError::DegenerateOldMesh)
        ));

        let config = MorphConfig::new(triangle(), TriMesh::new());
        assert!(matches!(
            config.validate(),
            Err(MorphError::DegenerateNewMesh)
        ));
    }
}
