use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));

    let c: Color = serde_json::from_value(json!("0000FF80")).unwrap();
    assert_eq!(c, Color::rgba(0, 0, 255, 128));
}

#[test]
fn rejects_bad_hex() {
    assert!(serde_json::from_value::<Color>(json!("#fff")).is_err());
    assert!(serde_json::from_value::<Color>(json!("#gg0000")).is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 1.0, "g": 0.5, "b": 0.0})).unwrap();
    assert_eq!(c, Color::rgb(255, 128, 0));

    let c: Color = serde_json::from_value(json!([0.0, 0.0, 1.0, 0.0])).unwrap();
    assert_eq!(c, Color::rgba(0, 0, 255, 0));
}

#[test]
fn parses_hsla_object() {
    let c: Color = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));
}

#[test]
fn serializes_as_hex() {
    assert_eq!(
        serde_json::to_value(Color::rgb(0x12, 0xab, 0x00)).unwrap(),
        json!("#12ab00")
    );
    assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
}
