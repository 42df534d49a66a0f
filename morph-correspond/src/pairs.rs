//! Vertex pairs and the correspondence they form.

use morph_types::Point3;

/// Which mesh drives the pairing.
///
/// The driving mesh determines the correspondence length (one pair per
/// driving vertex, in vertex order) and is also the topology donor for the
/// interpolated output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// One pair per old-mesh vertex; old topology is reused.
    #[default]
    OldDrives,
    /// One pair per new-mesh vertex; new topology is reused.
    NewDrives,
}

/// A position from the old mesh paired with one from the new mesh.
///
/// Pairs carry no identity beyond their two positions; several pairs may
/// reference geometrically identical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexPair {
    /// Position on the old mesh.
    pub old: Point3<f64>,
    /// Position on the new mesh.
    pub new: Point3<f64>,
}

impl VertexPair {
    /// Create a pair.
    #[inline]
    #[must_use]
    pub const fn new(old: Point3<f64>, new: Point3<f64>) -> Self {
        Self { old, new }
    }

    /// Interpolate between the two positions: `old + (new - old) * blend`.
    ///
    /// `blend` is not clamped; values outside `[0, 1]` extrapolate.
    #[inline]
    #[must_use]
    pub fn lerp(&self, blend: f64) -> Point3<f64> {
        self.old + (self.new - self.old) * blend
    }
}

/// An ordered sequence of vertex pairs, one per driving-mesh vertex.
///
/// Built once per mesh pair and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Correspondence {
    pairs: Vec<VertexPair>,
    direction: Direction,
}

impl Correspondence {
    /// Wrap an already-ordered pair list.
    #[must_use]
    pub const fn from_pairs(pairs: Vec<VertexPair>, direction: Direction) -> Self {
        Self { pairs, direction }
    }

    /// Number of pairs (== driving mesh vertex count).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The pairing direction this correspondence was built with.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The ordered pairs.
    #[inline]
    #[must_use]
    pub fn pairs(&self) -> &[VertexPair] {
        &self.pairs
    }

    /// Interpolate every pair into `out`, replacing its contents.
    ///
    /// After the call `out.len() == self.len()`, always; the output order is
    /// the pair order.
    pub fn lerp_into(&self, blend: f64, out: &mut Vec<Point3<f64>>) {
        out.clear();
        out.reserve(self.pairs.len());
        out.extend(self.pairs.iter().map(|pair| pair.lerp(blend)));
    }
}
