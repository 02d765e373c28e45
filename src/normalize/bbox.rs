use std::{fmt, str::FromStr};

use kurbo::Shape as _;

use crate::foundation::{
    core::{BezPath, Point, Rect, fmt_num},
    error::{DioramaError, DioramaResult},
};

/// Default padding on each side, as a fraction of the content extent.
pub const DEFAULT_PADDING_RATIO: f64 = 0.01;

/// Padding for content with no extent at all (a single point), in user units.
pub const POINT_PADDING: f64 = 1.0;

/// An SVG coordinate window (`viewBox`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ViewBox {
    /// Minimum x.
    pub x: f64,
    /// Minimum y.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl ViewBox {
    /// Window as a rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.width),
            fmt_num(self.height)
        )
    }
}

impl FromStr for ViewBox {
    type Err = DioramaError;

    fn from_str(s: &str) -> DioramaResult<Self> {
        let nums: Vec<f64> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .map(|p| {
                p.parse::<f64>()
                    .map_err(|_| DioramaError::asset(format!("invalid viewBox number \"{p}\"")))
            })
            .collect::<DioramaResult<_>>()?;
        match nums.as_slice() {
            [x, y, width, height] => Ok(Self {
                x: *x,
                y: *y,
                width: *width,
                height: *height,
            }),
            _ => Err(DioramaError::asset(format!(
                "viewBox must have four numbers (got \"{s}\")"
            ))),
        }
    }
}

/// Bounds of one SVG path `d` string.
///
/// A path of bare move-tos is bounded by its points; empty or malformed data is an error.
pub fn path_bounds(d: &str) -> DioramaResult<Rect> {
    let d = d.trim();
    if d.is_empty() {
        return Err(DioramaError::asset("path data is empty"));
    }
    if !d.starts_with(['M', 'm']) {
        return Err(DioramaError::asset("path data must start with a move-to"));
    }
    let path = BezPath::from_svg(d)
        .map_err(|e| DioramaError::asset(format!("invalid path data: {e}")))?;
    if path.elements().is_empty() {
        return Err(DioramaError::asset("path data is empty"));
    }

    let bb = if path.segments().next().is_some() {
        path.bounding_box()
    } else {
        let mut pts = path.elements().iter().filter_map(|el| match el {
            kurbo::PathEl::MoveTo(p) => Some(*p),
            _ => None,
        });
        let first = pts.next().unwrap_or(Point::ZERO);
        pts.fold(Rect::from_points(first, first), |r, p| r.union_pt(p))
    };

    if [bb.x0, bb.y0, bb.x1, bb.y1].iter().all(|v| v.is_finite()) {
        Ok(bb)
    } else {
        Err(DioramaError::asset("path bounds are not finite"))
    }
}

/// Running min/max over path bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundsAccumulator {
    bounds: Option<Rect>,
    count: usize,
}

impl BoundsAccumulator {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in one path's bounds.
    pub fn add(&mut self, r: Rect) {
        self.bounds = Some(match self.bounds {
            Some(acc) => Rect::new(
                acc.x0.min(r.x0),
                acc.y0.min(r.y0),
                acc.x1.max(r.x1),
                acc.y1.max(r.y1),
            ),
            None => r,
        });
        self.count += 1;
    }

    /// Number of bounds folded in.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Combined bounds, `None` when nothing was added.
    pub fn finish(self) -> Option<Rect> {
        self.bounds
    }
}

/// Coordinate window for `bounds` with proportional padding on every side.
///
/// Width and height grow by twice the padding; the origin is clamped at zero. An axis with no
/// extent borrows the other axis's extent, and a single point gets [`POINT_PADDING`].
pub fn padded_view_box(bounds: Rect, padding_ratio: f64) -> ViewBox {
    let ratio = if padding_ratio.is_finite() && padding_ratio >= 0.0 {
        padding_ratio
    } else {
        DEFAULT_PADDING_RATIO
    };

    let w = bounds.width().abs();
    let h = bounds.height().abs();
    let pad = |own: f64, other: f64| {
        if own > 0.0 {
            own * ratio
        } else if other > 0.0 {
            other * ratio
        } else {
            POINT_PADDING
        }
    };
    let pad_x = pad(w, h);
    let pad_y = pad(h, w);

    ViewBox {
        x: (bounds.min_x() - pad_x).max(0.0),
        y: (bounds.min_y() - pad_y).max(0.0),
        width: w + 2.0 * pad_x,
        height: h + 2.0 * pad_y,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/bbox.rs"]
mod tests;
