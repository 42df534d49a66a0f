//! Result type for subdivision runs.

use morph_types::TriMesh;

use crate::params::SubdivisionScheme;

/// Outcome of [`subdivide_to_count`](crate::subdivide_to_count).
#[derive(Debug, Clone)]
pub struct SubdivisionReport {
    /// The densified mesh.
    pub mesh: TriMesh,

    /// Vertex count before any pass.
    pub original_vertices: usize,

    /// Vertex count after the final pass.
    pub final_vertices: usize,

    /// Triangle count before any pass.
    pub original_triangles: usize,

    /// Triangle count after the final pass.
    pub final_triangles: usize,

    /// Number of passes performed.
    pub passes: u32,

    /// Scheme used by every pass.
    pub scheme: SubdivisionScheme,
}

impl SubdivisionReport {
    /// Vertex multiplication factor.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn vertex_ratio(&self) -> f64 {
        if self.original_vertices == 0 {
            1.0
        } else {
            self.final_vertices as f64 / self.original_vertices as f64
        }
    }

    /// Whether any pass ran.
    #[must_use]
    pub const fn was_subdivided(&self) -> bool {
        self.passes > 0
    }
}

impl std::fmt::Display for SubdivisionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} subdivision: {} -> {} vertices ({:.1}x), {} passes",
            self.scheme,
            self.original_vertices,
            self.final_vertices,
            self.vertex_ratio(),
            self.passes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(passes: u32) -> SubdivisionReport {
        SubdivisionReport {
            mesh: TriMesh::new(),
            original_vertices: 10,
            final_vertices: 40,
            original_triangles: 10,
            final_triangles: 40,
            passes,
            scheme: SubdivisionScheme::Split4,
        }
    }

    #[test]
    fn vertex_ratio() {
        assert!((report(1).vertex_ratio() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn was_subdivided() {
        assert!(!report(0).was_subdivided());
        assert!(report(1).was_subdivided());
    }

    #[test]
    fn display_mentions_counts() {
        let text = format!("{}", report(1));
        assert!(text.contains("10 -> 40"));
        assert!(text.contains("Split4"));
    }
}
