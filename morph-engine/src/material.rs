//! Blended material derivation.
//!
//! Cosmetic companion to the geometric morph: scalar and color properties
//! interpolate at the same blend value as the vertices, while textures are
//! never interpolated.

use hashbrown::HashMap;

/// Opaque handle to a texture owned by the host's asset system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// A material as a bag of named properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    /// Scalar properties (glossiness, metallic, ...).
    pub floats: HashMap<String, f32>,

    /// RGBA color properties.
    pub colors: HashMap<String, [f32; 4]>,

    /// Texture slots, assigned by name.
    pub textures: HashMap<String, TextureHandle>,
}

impl Material {
    /// Create an empty material.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar property.
    #[must_use]
    pub fn with_float(mut self, name: impl Into<String>, value: f32) -> Self {
        self.floats.insert(name.into(), value);
        self
    }

    /// Add a color property.
    #[must_use]
    pub fn with_color(mut self, name: impl Into<String>, value: [f32; 4]) -> Self {
        self.colors.insert(name.into(), value);
        self
    }

    /// Assign a texture slot.
    #[must_use]
    pub fn with_texture(mut self, slot: impl Into<String>, handle: TextureHandle) -> Self {
        self.textures.insert(slot.into(), handle);
        self
    }

    /// Assign a texture slot on an existing material.
    pub fn set_texture(&mut self, slot: impl Into<String>, handle: TextureHandle) {
        self.textures.insert(slot.into(), handle);
    }

    /// Interpolate scalar and color properties between two materials.
    ///
    /// Properties present on only one side are carried through unchanged.
    /// Texture slots are not interpolated: the result always takes `a`'s
    /// texture table, so the morph shows the old material's textures at
    /// every blend value. `blend` is not clamped.
    #[must_use]
    pub fn lerp(a: &Self, b: &Self, blend: f64) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let t = blend as f32;

        Self {
            floats: lerp_table(&a.floats, &b.floats, |x, y| x + (y - x) * t),
            colors: lerp_table(&a.colors, &b.colors, |x, y| {
                [
                    x[0] + (y[0] - x[0]) * t,
                    x[1] + (y[1] - x[1]) * t,
                    x[2] + (y[2] - x[2]) * t,
                    x[3] + (y[3] - x[3]) * t,
                ]
            }),
            textures: a.textures.clone(),
        }
    }
}

/// Interpolate two keyed tables over the union of their keys.
fn lerp_table<V: Copy>(
    a: &HashMap<String, V>,
    b: &HashMap<String, V>,
    lerp: impl Fn(V, V) -> V,
) -> HashMap<String, V> {
    let mut out = HashMap::with_capacity(a.len().max(b.len()));
    for (key, &va) in a {
        match b.get(key) {
            Some(&vb) => out.insert(key.clone(), lerp(va, vb)),
            None => out.insert(key.clone(), va),
        };
    }
    for (key, &vb) in b {
        if !a.contains_key(key) {
            out.insert(key.clone(), vb);
        }
    }
    out
}
