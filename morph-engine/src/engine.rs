//! The morph engine.

use morph_correspond::{build_correspondence, Correspondence, Direction};
use morph_subdivide::{equalize, EqualizeParams, EqualizedSide, SubdivideParams};
use morph_types::TriMesh;
use tracing::debug;

use crate::config::MorphConfig;
use crate::error::MorphResult;
use crate::material::Material;
use crate::summary::{MeshSide, SetupSummary};

/// Steady states of a constructed engine.
///
/// There is no uninitialized state: [`MorphEngine::new`] either returns a
/// ready engine or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphState {
    /// Steps recompute the output mesh.
    Deforming,
    /// Steps are ignored; the output keeps its last computed buffers.
    Paused,
}

/// Interpolates between two meshes, driven by a scalar blend value.
///
/// Construction does all the expensive one-shot work: optional vertex-count
/// equalization, nearest-neighbor correspondence, and the topology snapshot
/// from the donor mesh into the output. After that, [`step`](Self::step)
/// only rewrites the output's vertex buffer and normals; triangles, UV
/// channels, and bounds stay exactly as donated.
///
/// Equalization and correspondence building may be arbitrarily expensive
/// (they are quadratic-ish in vertex count); hosts that care about frame
/// pacing should construct the engine during a loading phase.
///
/// # Example
///
/// ```
/// use morph_types::{Point3, TriMesh};
/// use morph_engine::{MorphConfig, MorphEngine};
///
/// let old = TriMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
/// let new = TriMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 2.0),
///         Point3::new(1.0, 0.0, 2.0),
///         Point3::new(0.0, 1.0, 2.0),
///     ],
///     vec![[0, 1, 2]],
/// );
///
/// let mut engine = MorphEngine::new(MorphConfig::new(old, new))?;
/// engine.step(0.5);
///
/// assert!(engine.mesh().positions.iter().all(|p| (p.z - 1.0).abs() < 1e-12));
/// # Ok::<(), morph_engine::MorphError>(())
/// ```
#[derive(Debug)]
pub struct MorphEngine {
    correspondence: Correspondence,
    output: TriMesh,
    old_material: Option<Material>,
    new_material: Option<Material>,
    material: Option<Material>,
    blend: f64,
    active: bool,
    summary: SetupSummary,
}

impl MorphEngine {
    /// Build an engine from an eagerly-validated configuration.
    ///
    /// Runs equalization (when enabled), builds the correspondence, snapshots
    /// the donor's triangles/UVs/bounds into the output mesh, marks the
    /// output for frequent re-upload, and applies one step at the configured
    /// initial blend so the output is complete from the first read.
    ///
    /// # Errors
    ///
    /// Fails before reaching the ready state on empty vertex arrays, on a
    /// zero-triangle mesh that equalization would need to subdivide, or when
    /// subdivision would exceed its vertex limit.
    pub fn new(config: MorphConfig) -> MorphResult<Self> {
        config.validate()?;

        let MorphConfig {
            old_mesh,
            new_mesh,
            old_material,
            new_material,
            initial_blend,
            equalize: run_equalize,
            direction,
            tolerance,
            scheme,
        } = config;

        let (old_mesh, new_mesh, equalized, passes) = if run_equalize {
            let params = EqualizeParams::new()
                .with_tolerance(tolerance)
                .with_subdivide(SubdivideParams::new().with_scheme(scheme));
            let outcome = equalize(&old_mesh, &new_mesh, &params)?;
            let side = outcome.subdivided.map(|s| match s {
                EqualizedSide::A => MeshSide::Old,
                EqualizedSide::B => MeshSide::New,
            });
            (outcome.a, outcome.b, side, outcome.passes)
        } else {
            (old_mesh, new_mesh, None, 0)
        };

        let correspondence = build_correspondence(&old_mesh, &new_mesh, direction)?;

        let donor = match direction {
            Direction::OldDrives => &old_mesh,
            Direction::NewDrives => &new_mesh,
        };

        let mut output = TriMesh::with_capacity(correspondence.len(), donor.triangle_count());
        output.adopt_topology(donor);
        output.mark_dynamic();

        let summary = SetupSummary {
            direction,
            pair_count: correspondence.len(),
            equalized,
            subdivision_passes: passes,
            donor_vertices: donor.vertex_count(),
            donor_triangles: donor.triangle_count(),
        };
        debug!("{summary}");

        let mut engine = Self {
            correspondence,
            output,
            old_material,
            new_material,
            material: None,
            blend: initial_blend,
            active: true,
            summary,
        };
        engine.apply(initial_blend);
        Ok(engine)
    }

    /// Apply one morph step at `blend`.
    ///
    /// Replaces the output's vertex buffer with the interpolated positions
    /// (its length always equals the correspondence length), recomputes
    /// normals against the frozen triangle list, and re-derives the blended
    /// material. `blend` is not clamped: values outside `[0, 1]`
    /// extrapolate past the source meshes.
    ///
    /// Ignored while paused.
    pub fn step(&mut self, blend: f64) {
        if !self.active {
            return;
        }
        self.apply(blend);
    }

    /// Per-frame entry point re-applying the stored blend value.
    ///
    /// Hosts that feed the blend from external state (a UI slider, say) call
    /// [`set_blend`](Self::set_blend) when it changes and `tick` once per
    /// frame. Ignored while paused.
    pub fn tick(&mut self) {
        if self.active {
            self.apply(self.blend);
        }
    }

    fn apply(&mut self, blend: f64) {
        self.blend = blend;

        let mut positions = std::mem::take(&mut self.output.positions);
        self.correspondence.lerp_into(blend, &mut positions);
        self.output.positions = positions;
        self.output.recompute_normals();

        if let (Some(old), Some(new)) = (&self.old_material, &self.new_material) {
            self.material = Some(Material::lerp(old, new, blend));
        }
    }

    /// Store a new blend value without stepping.
    pub fn set_blend(&mut self, blend: f64) {
        self.blend = blend;
    }

    /// The last stored blend value.
    #[must_use]
    pub const fn blend(&self) -> f64 {
        self.blend
    }

    /// Switch between [`MorphState::Deforming`] and [`MorphState::Paused`].
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> MorphState {
        if self.active {
            MorphState::Deforming
        } else {
            MorphState::Paused
        }
    }

    /// The interpolated output mesh.
    #[must_use]
    pub const fn mesh(&self) -> &TriMesh {
        &self.output
    }

    /// The blended material, present once both source materials are
    /// configured.
    #[must_use]
    pub const fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    /// The fixed vertex pairing built at setup.
    #[must_use]
    pub const fn correspondence(&self) -> &Correspondence {
        &self.correspondence
    }

    /// What setup did.
    #[must_use]
    pub const fn summary(&self) -> &SetupSummary {
        &self.summary
    }
}
