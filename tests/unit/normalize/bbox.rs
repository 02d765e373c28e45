use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn line_and_curve_bounds() {
    let r = path_bounds("M0,0 L10,0 L10,10 L0,10 Z").unwrap();
    assert_eq!(r, Rect::new(0.0, 0.0, 10.0, 10.0));

    // Quadratic peak at y = 5, not at the control point (y = 10).
    let r = path_bounds("M0 0 Q5 10 10 0").unwrap();
    assert!(close(r.y1, 5.0));
    assert!(close(r.x1, 10.0));
}

#[test]
fn relative_commands_are_resolved() {
    let r = path_bounds("m5 5 l10 0 l0 10 z").unwrap();
    assert_eq!(r, Rect::new(5.0, 5.0, 15.0, 15.0));
}

#[test]
fn bad_and_empty_paths_are_errors() {
    assert!(path_bounds("M0 0 L").is_err());
    assert!(path_bounds("hello").is_err());
    assert!(path_bounds("L10 10").is_err());
    assert!(path_bounds("   ").is_err());
}

#[test]
fn lone_move_is_a_point() {
    let r = path_bounds("M3 4").unwrap();
    assert_eq!(r, Rect::new(3.0, 4.0, 3.0, 4.0));
}

#[test]
fn accumulator_reduces_min_max() {
    let mut acc = BoundsAccumulator::new();
    assert!(acc.finish().is_none());
    acc.add(Rect::new(0.0, 0.0, 10.0, 10.0));
    acc.add(Rect::new(5.0, 5.0, 20.0, 20.0));
    assert_eq!(acc.count(), 2);
    assert_eq!(acc.finish(), Some(Rect::new(0.0, 0.0, 20.0, 20.0)));
}

#[test]
fn padding_is_proportional_with_non_negative_origin() {
    let vb = padded_view_box(Rect::new(0.0, 0.0, 20.0, 20.0), DEFAULT_PADDING_RATIO);
    assert!(close(vb.width, 20.4));
    assert!(close(vb.height, 20.4));
    assert_eq!(vb.x, 0.0);
    assert_eq!(vb.y, 0.0);
    assert_eq!(vb.to_string(), "0 0 20.4 20.4");

    let vb = padded_view_box(Rect::new(100.0, 50.0, 300.0, 150.0), 0.01);
    assert!(close(vb.x, 98.0));
    assert!(close(vb.y, 49.0));
    assert!(close(vb.width, 204.0));
    assert!(close(vb.height, 102.0));
}

#[test]
fn degenerate_boxes_get_usable_padding() {
    // Horizontal line: y padding borrows x extent.
    let vb = padded_view_box(Rect::new(0.0, 5.0, 100.0, 5.0), 0.01);
    assert!(close(vb.height, 2.0));
    assert!(close(vb.y, 4.0));

    // Single point.
    let vb = padded_view_box(Rect::new(3.0, 4.0, 3.0, 4.0), 0.01);
    assert!(close(vb.width, 2.0 * POINT_PADDING));
    assert!(close(vb.x, 2.0));
    assert!(vb.width > 0.0 && vb.height > 0.0);
}

#[test]
fn invalid_ratio_uses_default() {
    let a = padded_view_box(Rect::new(0.0, 0.0, 50.0, 50.0), f64::NAN);
    let b = padded_view_box(Rect::new(0.0, 0.0, 50.0, 50.0), -1.0);
    let c = padded_view_box(Rect::new(0.0, 0.0, 50.0, 50.0), DEFAULT_PADDING_RATIO);
    assert_eq!(a, c);
    assert_eq!(b, c);
}

#[test]
fn view_box_parses() {
    let vb: ViewBox = "0, 0 20.4 10".parse().unwrap();
    assert_eq!(vb.width, 20.4);
    assert!("0 0 1".parse::<ViewBox>().is_err());
    assert!("a b c d".parse::<ViewBox>().is_err());
}
