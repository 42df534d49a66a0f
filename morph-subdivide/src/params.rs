//! Subdivision configuration.

/// Subdivision scheme applied by each pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubdivisionScheme {
    /// Fixed 1-to-4 corner + center split. Each triangle appends its own
    /// three edge midpoints, so shared edges produce duplicate coincident
    /// vertices and the vertex count grows by exactly `3 * triangle_count`.
    #[default]
    Split4,

    /// Loop-style smoothing subdivision. Edge midpoints are shared between
    /// neighboring triangles and original vertices are repositioned, trading
    /// the exact count growth of [`Self::Split4`] for a smoother surface.
    Loop,
}

impl SubdivisionScheme {
    /// Whether this scheme moves existing vertices.
    #[must_use]
    pub const fn is_smoothing(&self) -> bool {
        matches!(self, Self::Loop)
    }
}

/// Parameters for subdivision passes.
#[derive(Debug, Clone)]
pub struct SubdivideParams {
    /// Scheme applied by each pass.
    pub scheme: SubdivisionScheme,

    /// Vertex limit; a pass that would grow past this fails instead.
    pub max_vertices: usize,

    /// Keep boundary vertices in place under the smoothing scheme.
    pub preserve_boundaries: bool,
}

impl Default for SubdivideParams {
    fn default() -> Self {
        Self {
            scheme: SubdivisionScheme::default(),
            max_vertices: 10_000_000,
            preserve_boundaries: true,
        }
    }
}

impl SubdivideParams {
    /// Parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for the corner + center split.
    #[must_use]
    pub fn split4() -> Self {
        Self::default()
    }

    /// Parameters for Loop smoothing subdivision.
    #[must_use]
    pub fn loop_smoothing() -> Self {
        Self {
            scheme: SubdivisionScheme::Loop,
            ..Self::default()
        }
    }

    /// Set the scheme.
    #[must_use]
    pub const fn with_scheme(mut self, scheme: SubdivisionScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the vertex limit.
    #[must_use]
    pub const fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Set boundary preservation for the smoothing scheme.
    #[must_use]
    pub const fn with_preserve_boundaries(mut self, preserve: bool) -> Self {
        self.preserve_boundaries = preserve;
        self
    }
}
