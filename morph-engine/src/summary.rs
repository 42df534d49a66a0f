//! Setup summary.

use morph_correspond::Direction;

/// Which source mesh equalization subdivided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshSide {
    /// The old mesh was the smaller one.
    Old,
    /// The new mesh was the smaller one.
    New,
}

/// What engine setup did, for logging and diagnostics.
#[derive(Debug, Clone)]
pub struct SetupSummary {
    /// Pairing direction.
    pub direction: Direction,

    /// Number of vertex pairs (== output vertex count).
    pub pair_count: usize,

    /// Which mesh was subdivided by equalization, if any.
    pub equalized: Option<MeshSide>,

    /// Subdivision passes run by equalization.
    pub subdivision_passes: u32,

    /// Vertex count of the topology donor after equalization.
    pub donor_vertices: usize,

    /// Triangle count of the topology donor after equalization.
    pub donor_triangles: usize,
}

impl std::fmt::Display for SetupSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "morph setup: {} pairs ({:?}), donor {} vertices / {} triangles",
            self.pair_count, self.direction, self.donor_vertices, self.donor_triangles
        )?;
        match self.equalized {
            Some(MeshSide::Old) => {
                write!(f, ", old mesh subdivided in {} passes", self.subdivision_passes)
            }
            Some(MeshSide::New) => {
                write!(f, ", new mesh subdivided in {} passes", self.subdivision_passes)
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_equalization() {
        let summary = SetupSummary {
            direction: Direction::OldDrives,
            pair_count: 3,
            equalized: None,
            subdivision_passes: 0,
            donor_vertices: 3,
            donor_triangles: 1,
        };
        let text = format!("{summary}");
        assert!(text.contains("3 pairs"));
        assert!(!text.contains("subdivided"));
    }

    #[test]
    fn display_with_equalization() {
        let summary = SetupSummary {
            direction: Direction::NewDrives,
            pair_count: 640,
            equalized: Some(MeshSide::Old),
            subdivision_passes: 3,
            donor_vertices: 640,
            donor_triangles: 640,
        };
        let text = format!("{summary}");
        assert!(text.contains("old mesh subdivided in 3 passes"));
    }
}
