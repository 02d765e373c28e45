use super::*;

const TWO_PATHS: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- exported -->
<svg xmlns="http://www.w3.org/2000/svg" width="64" viewBox="0 0 100 100" height="64">
  <g><path id="hull" d="M0 0 L10 10"/></g>
  <path d="M5 5 L20 20" fill="#123"/>
  <path id="bare"/>
</svg>
"##;

#[test]
fn collects_paths_in_document_order() {
    let src = SvgSource::parse(TWO_PATHS).unwrap();
    let paths = src.paths();
    assert_eq!(paths.len(), 3);
    assert_eq!(paths[0].label(), "#hull");
    assert_eq!(paths[1].label(), "path[1]");
    assert_eq!(paths[1].d.as_deref(), Some("M5 5 L20 20"));
    assert_eq!(paths[2].d, None);
}

#[test]
fn reads_declared_view_box() {
    let src = SvgSource::parse(TWO_PATHS).unwrap();
    let vb = src.view_box().unwrap();
    assert_eq!(vb.width, 100.0);
}

#[test]
fn replaces_existing_view_box_only() {
    let src = SvgSource::parse(TWO_PATHS).unwrap();
    let vb = ViewBox {
        x: 0.0,
        y: 0.0,
        width: 20.4,
        height: 20.4,
    };
    let out = src.with_view_box(&vb).unwrap();
    assert_eq!(
        out,
        TWO_PATHS.replace(r#"viewBox="0 0 100 100""#, r#"viewBox="0 0 20.4 20.4""#)
    );
}

#[test]
fn inserts_missing_view_box_after_element_name() {
    let text = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M1 1 L2 2"/></svg>"#;
    let src = SvgSource::parse(text).unwrap();
    let vb = ViewBox {
        x: 1.0,
        y: 2.0,
        width: 3.0,
        height: 4.0,
    };
    let out = src.with_view_box(&vb).unwrap();
    assert_eq!(
        out,
        r#"<svg viewBox="1 2 3 4" xmlns="http://www.w3.org/2000/svg"><path d="M1 1 L2 2"/></svg>"#
    );
}

#[test]
fn keeps_single_quotes_and_entities_around_replaced_value() {
    let text = "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 9 9' aria-label='a &amp; b'/>";
    let src = SvgSource::parse(text).unwrap();
    let vb = ViewBox {
        x: 0.0,
        y: 0.0,
        width: 5.0,
        height: 5.0,
    };
    let out = src.with_view_box(&vb).unwrap();
    assert_eq!(
        out,
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 5 5' aria-label='a &amp; b'/>"
    );
}

#[test]
fn inserts_into_self_closing_root() {
    let text = r#"<svg/>"#;
    let src = SvgSource::parse(text).unwrap();
    let vb = ViewBox {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };
    assert_eq!(src.with_view_box(&vb).unwrap(), r#"<svg viewBox="0 0 1 1"/>"#);
}

#[test]
fn rejects_non_svg_and_malformed_documents() {
    assert!(SvgSource::parse("<html></html>").is_err());
    assert!(SvgSource::parse("<svg>").is_err());
    assert!(SvgSource::parse("").is_err());
}
