use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Circle, Point, Rect, Size, Vec2, fmt_num};

/// Path flattening tolerance for curve output, in user units.
pub(crate) const PATH_TOLERANCE: f64 = 0.1;

/// Outline of a scene container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Inscribed circle.
    #[default]
    Circle,
    /// Full rectangle.
    Rectangle,
}

/// Scene outline plus the frame canvas around it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneShape {
    /// Outline kind.
    pub kind: ShapeKind,
    /// Frame canvas size.
    pub outer_size: Size,
    /// Rendered size of the scene itself.
    pub inner_size: Size,
    /// Scene center relative to the canvas center.
    #[serde(default)]
    pub offset: Vec2,
}

impl SceneShape {
    /// A concentric shape with no offset.
    pub fn new(kind: ShapeKind, outer_size: Size, inner_size: Size) -> Self {
        Self {
            kind,
            outer_size,
            inner_size,
            offset: Vec2::ZERO,
        }
    }
}

/// Clip geometry in the coordinate space of the element it applies to.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipRegion {
    /// Circle clip.
    Circle {
        /// Center point.
        center: Point,
        /// Radius.
        radius: f64,
    },
    /// Rectangular clip.
    Rect(Rect),
}

impl ClipRegion {
    /// Centered circle whose radius is half the shorter side of `size`.
    pub fn inscribed_circle(size: Size) -> Self {
        let size = sanitize(size);
        Self::Circle {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            radius: size.width.min(size.height) / 2.0,
        }
    }

    /// The whole of `size`.
    pub fn full(size: Size) -> Self {
        Self::Rect(Rect::from_origin_size(Point::ZERO, sanitize(size)))
    }

    /// Axis-aligned bounds.
    pub fn bounds(&self) -> Rect {
        match *self {
            Self::Circle { center, radius } => Circle::new(center, radius).bounding_box(),
            Self::Rect(r) => r,
        }
    }

    /// Width and height of [`ClipRegion::bounds`].
    pub fn extent(&self) -> Size {
        self.bounds().size()
    }

    /// Center of the region.
    pub fn center(&self) -> Point {
        match *self {
            Self::Circle { center, .. } => center,
            Self::Rect(r) => r.center(),
        }
    }

    /// Whether `p` falls inside the region.
    pub fn contains(&self, p: Point) -> bool {
        match *self {
            Self::Circle { center, radius } => (p - center).hypot() < radius,
            Self::Rect(r) => r.contains(p),
        }
    }

    /// Same kind of region, scaled about its center.
    pub fn scaled(&self, factor: f64) -> Self {
        match *self {
            Self::Circle { center, radius } => Self::Circle {
                center,
                radius: radius * factor,
            },
            Self::Rect(r) => Self::Rect(Rect::from_center_size(r.center(), r.size() * factor)),
        }
    }

    /// Same region moved by `delta`.
    pub fn translated(&self, delta: Vec2) -> Self {
        match *self {
            Self::Circle { center, radius } => Self::Circle {
                center: center + delta,
                radius,
            },
            Self::Rect(r) => Self::Rect(r + delta),
        }
    }

    /// CSS `clip-path` value.
    pub fn to_css(&self) -> String {
        match *self {
            Self::Circle { center, radius } => format!(
                "circle({}px at {}px {}px)",
                fmt_num(radius),
                fmt_num(center.x),
                fmt_num(center.y)
            ),
            Self::Rect(r) => format!(
                "polygon({x0}px {y0}px, {x1}px {y0}px, {x1}px {y1}px, {x0}px {y1}px)",
                x0 = fmt_num(r.x0),
                y0 = fmt_num(r.y0),
                x1 = fmt_num(r.x1),
                y1 = fmt_num(r.y1)
            ),
        }
    }

    /// SVG element for this region with the given `fill`.
    pub fn to_svg_element(&self, fill: &str) -> String {
        match *self {
            Self::Circle { center, radius } => format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}"/>"#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(radius)
            ),
            Self::Rect(r) => format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"/>"#,
                fmt_num(r.x0),
                fmt_num(r.y0),
                fmt_num(r.width()),
                fmt_num(r.height())
            ),
        }
    }

    /// Outline as a Bezier path.
    pub fn to_path(&self) -> BezPath {
        match *self {
            Self::Circle { center, radius } => Circle::new(center, radius).to_path(PATH_TOLERANCE),
            Self::Rect(r) => r.to_path(PATH_TOLERANCE),
        }
    }
}

/// Clip for a scene container of `size`.
///
/// Circles are inscribed (shorter side governs); rectangles keep the full bounds.
pub fn clip_region(kind: ShapeKind, size: Size) -> ClipRegion {
    match kind {
        ShapeKind::Circle => ClipRegion::inscribed_circle(size),
        ShapeKind::Rectangle => ClipRegion::full(size),
    }
}

fn sanitize(size: Size) -> Size {
    fn dim(v: f64) -> f64 {
        if v.is_finite() { v.max(0.0) } else { 0.0 }
    }
    Size::new(dim(size.width), dim(size.height))
}

#[cfg(test)]
#[path = "../../tests/unit/shape/clip.rs"]
mod tests;
