use super::*;

fn three() -> Palette {
    Palette::new(vec![
        Color::rgb(1, 1, 1),
        Color::rgb(2, 2, 2),
        Color::rgb(3, 3, 3),
    ])
    .unwrap()
}

#[test]
fn empty_palette_is_rejected() {
    assert!(Palette::new(vec![]).is_err());
    assert!(serde_json::from_str::<Palette>("[]").is_err());
}

#[test]
fn palette_round_trips_as_hex_list() {
    let p: Palette = serde_json::from_str(r##"["#010101", "#020202"]"##).unwrap();
    assert_eq!(p.len(), 2);
    assert_eq!(
        serde_json::to_string(&p).unwrap(),
        r##"["#010101","#020202"]"##
    );
}

#[test]
fn resolve_color_is_one_based() {
    let p = three();
    assert_eq!(resolve_color(1, &p), Color::rgb(1, 1, 1));
    assert_eq!(resolve_color(3, &p), Color::rgb(3, 3, 3));
}

#[test]
fn resolve_color_out_of_range_falls_back_to_surface() {
    let p = three();
    for n in [0, -1, -100, 4, 1000, i32::MIN, i32::MAX] {
        assert_eq!(resolve_color(n, &p), Color::rgb(1, 1, 1), "layer {n}");
    }
}

#[test]
fn resolve_color_always_returns_a_palette_member() {
    let p = Palette::default();
    for n in -20..40 {
        assert!(p.colors().contains(&resolve_color(n, &p)));
    }
}

#[test]
fn z_index_is_inverse_of_depth() {
    for max in [1, 5, DEFAULT_MAX_LAYERS, 30] {
        for n in 1..=max {
            assert_eq!(z_index_for(n, max) + n, max + 1);
        }
        for n in 1..max {
            assert!(z_index_for(n, max) > z_index_for(n + 1, max));
        }
    }
}

#[test]
fn default_scale_has_eleven_layers() {
    assert_eq!(default_z_index_for(1), 11);
    assert_eq!(default_z_index_for(11), 1);
    assert_eq!(Palette::default().len(), 11);
}
