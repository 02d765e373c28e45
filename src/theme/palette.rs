use crate::foundation::{
    color::Color,
    core::DEFAULT_MAX_LAYERS,
    error::{DioramaError, DioramaResult},
};

/// Surface-to-deep gradient shared by every scene unless a scene brings its own.
pub const DEFAULT_PALETTE: [Color; 11] = [
    Color::rgb(0xe8, 0xf6, 0xf3),
    Color::rgb(0xc5, 0xeb, 0xe4),
    Color::rgb(0x9f, 0xdc, 0xcf),
    Color::rgb(0x76, 0xc9, 0xb8),
    Color::rgb(0x52, 0xb3, 0xa2),
    Color::rgb(0x3a, 0x9a, 0x8e),
    Color::rgb(0x2d, 0x7f, 0x7a),
    Color::rgb(0x23, 0x65, 0x66),
    Color::rgb(0x1b, 0x4d, 0x52),
    Color::rgb(0x14, 0x37, 0x3d),
    Color::rgb(0x0d, 0x24, 0x2a),
];

/// Ordered, non-empty color sequence: index 0 is the surface, the last entry the deepest layer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette; an empty color list is rejected.
    pub fn new(colors: Vec<Color>) -> DioramaResult<Self> {
        if colors.is_empty() {
            return Err(DioramaError::validation("palette must contain at least one color"));
        }
        Ok(Self { colors })
    }

    /// Colors from surface to deep.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = DioramaError;

    fn try_from(colors: Vec<Color>) -> DioramaResult<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(p: Palette) -> Self {
        p.colors
    }
}

/// Color for a 1-based theme layer.
///
/// Any layer that does not address a palette stop (zero, negative, or past the deepest stop)
/// resolves to the surface color.
pub fn resolve_color(theme_layer: i32, palette: &Palette) -> Color {
    let idx = i64::from(theme_layer) - 1;
    let idx = if idx < 0 || idx >= palette.colors.len() as i64 {
        0
    } else {
        idx as usize
    };
    palette.colors[idx]
}

/// Stacking order for a theme layer: shallower layers always sit above deeper ones.
pub fn z_index_for(theme_layer: i32, max_layers: i32) -> i32 {
    max_layers
        .saturating_add(1)
        .saturating_sub(theme_layer)
}

/// [`z_index_for`] on the default eleven-layer scale.
pub fn default_z_index_for(theme_layer: i32) -> i32 {
    z_index_for(theme_layer, DEFAULT_MAX_LAYERS)
}

#[cfg(test)]
#[path = "../../tests/unit/theme/palette.rs"]
mod tests;
