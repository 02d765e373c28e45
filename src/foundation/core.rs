pub use kurbo::{BezPath, Circle, Point, Rect, Size, Vec2};

/// Default depth of the shared theme scale.
pub const DEFAULT_MAX_LAYERS: i32 = 11;

/// Format a CSS/SVG number: at most three decimals, no trailing zeros, no `-0`.
pub fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    let s = format!("{rounded:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_owned()
}
