use crate::{
    foundation::{
        color::Color,
        core::{BezPath, Point, Rect, Size, fmt_num},
        style::Style,
    },
    shape::clip::{ClipRegion, PATH_TOLERANCE, SceneShape, ShapeKind, clip_region},
};

/// Default cutout shrink relative to the scene's rendered extent.
pub const DEFAULT_FRAME_INSET: f64 = 0.02;
/// Largest accepted inset; anything above it would visibly crop scene content.
pub const MAX_FRAME_INSET: f64 = 0.1;

const MASK_ID: &str = "diorama-frame-mask";

/// Overlay frame configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSpec {
    /// Fraction of the scene's extent the cutout is shrunk by, in `(0, MAX_FRAME_INSET]`.
    #[serde(default = "default_inset")]
    pub inset: f64,
    /// Opaque frame color; normally the page background.
    #[serde(default = "default_frame_color")]
    pub color: Color,
}

fn default_inset() -> f64 {
    DEFAULT_FRAME_INSET
}

fn default_frame_color() -> Color {
    Color::rgb(0xff, 0xff, 0xff)
}

impl Default for FrameSpec {
    fn default() -> Self {
        Self {
            inset: default_inset(),
            color: default_frame_color(),
        }
    }
}

impl FrameSpec {
    /// The inset actually applied; out-of-range values use [`DEFAULT_FRAME_INSET`].
    pub fn effective_inset(&self) -> f64 {
        if self.inset.is_finite() && self.inset > 0.0 && self.inset <= MAX_FRAME_INSET {
            self.inset
        } else {
            tracing::debug!(inset = self.inset, "frame inset out of range; using default");
            DEFAULT_FRAME_INSET
        }
    }
}

/// Mask pair for the overlay frame: opaque everywhere in `outer` except inside `cutout`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameMask {
    /// The whole frame canvas.
    pub outer: Rect,
    /// Region through which the scene shows.
    pub cutout: ClipRegion,
}

impl FrameMask {
    /// Whether the frame paints over `p`.
    pub fn frame_covers(&self, p: Point) -> bool {
        self.outer.contains(p) && !self.cutout.contains(p)
    }

    /// Frame region as one path; fill it with the even-odd rule.
    pub fn to_path(&self) -> BezPath {
        use kurbo::Shape as _;

        let mut path = self.outer.to_path(PATH_TOLERANCE);
        path.extend(self.cutout.to_path().elements().iter().copied());
        path
    }

    /// Standalone SVG painting a `color` rectangle through this mask.
    pub fn to_svg(&self, color: Color) -> String {
        let w = fmt_num(self.outer.width());
        let h = fmt_num(self.outer.height());
        let visible = ClipRegion::Rect(self.outer).to_svg_element("white");
        let hidden = self.cutout.to_svg_element("black");
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{x} {y} {w} {h}" aria-hidden="true">"#,
                r#"<defs><mask id="{id}">{visible}{hidden}</mask></defs>"#,
                r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{color}" mask="url(#{id})"/>"#,
                "</svg>"
            ),
            x = fmt_num(self.outer.x0),
            y = fmt_num(self.outer.y0),
            w = w,
            h = h,
            id = MASK_ID,
            visible = visible,
            hidden = hidden,
            color = color.to_hex(),
        )
    }
}

/// Concentric mask for a frame canvas of `outer_size` around a cutout sized from `inner_size`.
pub fn frame_mask(kind: ShapeKind, outer_size: Size, inner_size: Size) -> FrameMask {
    let outer = ClipRegion::full(outer_size).bounds();
    let local = clip_region(kind, inner_size);
    let cutout = local.translated(outer.center() - local.center());
    FrameMask { outer, cutout }
}

/// Mask for `shape`, with the cutout shrunk by the frame inset so the frame overlaps the scene's
/// outermost boundary (and the shadow that bleeds past it).
pub fn frame_for_scene(shape: &SceneShape, spec: &FrameSpec) -> FrameMask {
    let inset = spec.effective_inset();
    let mut mask = frame_mask(shape.kind, shape.outer_size, shape.inner_size);
    mask.cutout = mask.cutout.scaled(1.0 - inset).translated(shape.offset);
    mask
}

/// Style for the frame element: above every scene layer and transparent to pointer input.
pub fn frame_style(top_scene_z_index: i32) -> Style {
    Style::new()
        .with("position", "absolute")
        .with("inset", "0")
        .with("z-index", top_scene_z_index.saturating_add(1).to_string())
        .with("pointer-events", "none")
}

#[cfg(test)]
#[path = "../../tests/unit/shape/frame.rs"]
mod tests;
