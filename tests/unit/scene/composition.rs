use super::*;

const REEF: &str = r##"{
    "name": "reef",
    "shape": {
        "kind": "circle",
        "outer_size": {"width": 420, "height": 420},
        "inner_size": {"width": 400, "height": 400}
    },
    "mapping": {"1": 2, "2": 4},
    "frame": {"color": "#faf7f0"},
    "layers": [
        {"id": "sea", "layer": 3, "animation": {"kind": "scroll", "duration": 80}},
        {"id": "rocks", "layer": 2, "filter": "drop-shadow(0 4px 6px #0004)"},
        {"id": "kelp", "layer": 1, "animation": {"kind": "rotation", "duration": null}}
    ],
    "entities": [
        {
            "id": "fish",
            "layer": 2,
            "size": {"1": 12, "2": 8},
            "top": 40,
            "left": {"3": 10},
            "animation": {"kind": "custom", "keyframes": "swim"}
        }
    ]
}"##;

fn reef() -> Scene {
    Scene::from_reader(REEF.as_bytes()).unwrap()
}

#[test]
fn parses_and_validates() {
    let scene = reef();
    scene.validate().unwrap();
    assert_eq!(scene.def().layers.len(), 3);
    assert_eq!(scene.def().entities[0].base.layer, 2);
}

#[test]
fn layers_resolve_through_scene_mapping() {
    let out = reef().compose();

    let sea = &out.layers[0];
    assert_eq!(sea.id.as_deref(), Some("sea"));
    assert_eq!(sea.theme.theme_layer, 3);
    assert_eq!(sea.theme.z_index, 9);
    assert_eq!(
        sea.style.get("animation"),
        Some("diorama-scroll-left 80s linear infinite")
    );

    let rocks = &out.layers[1];
    assert_eq!(rocks.theme.theme_layer, 4);
    assert_eq!(rocks.style.get("filter"), Some("drop-shadow(0 4px 6px #0004)"));
    assert_eq!(
        rocks.style.get("color"),
        Some(crate::theme::palette::DEFAULT_PALETTE[3].to_hex().as_str())
    );

    let kelp = &out.layers[2];
    assert_eq!(kelp.theme.theme_layer, 2);
    assert_eq!(kelp.style.get("animation"), None);
}

#[test]
fn entity_sizes_and_offsets_resolve_per_layer() {
    let out = reef().compose();
    let fish = &out.entities[0];
    assert_eq!(fish.style.get("width"), Some("8%"));
    assert_eq!(fish.style.get("top"), Some("40%"));
    assert_eq!(fish.style.get("left"), None);
    assert_eq!(fish.style.get("animation-name"), Some("swim"));
    assert_eq!(fish.theme.theme_layer, 4);
}

#[test]
fn frame_sits_above_every_layer() {
    let out = reef().compose();
    let top = out
        .layers
        .iter()
        .chain(out.entities.iter())
        .map(ComposedLayer::effective_z_index)
        .max()
        .unwrap();
    assert_eq!(out.frame.style.get("z-index"), Some((top + 1).to_string().as_str()));
    assert_eq!(out.frame.style.get("pointer-events"), Some("none"));
    assert!(out.frame.svg.contains("#faf7f0"));
}

#[test]
fn container_is_clipped_to_inscribed_circle() {
    let out = reef().compose();
    assert_eq!(out.container.get("clip-path"), Some("circle(200px at 200px 200px)"));
    assert_eq!(out.container.get("width"), Some("400px"));
    let ClipRegion::Circle { radius, .. } = out.frame.mask.cutout else {
        panic!("expected circle cutout");
    };
    assert!(radius < 200.0);
}

#[test]
fn layer_mapping_overrides_scene_mapping() {
    let mut def = reef().def().clone();
    def.layers[0].mapping = Some([(3, 7)].into_iter().collect());
    let out = Scene::from_def(def).compose();
    assert_eq!(out.layers[0].theme.theme_layer, 7);
    assert_eq!(out.layers[1].theme.theme_layer, 4);
}

#[test]
fn empty_scene_still_gets_frame() {
    let scene = Scene::from_reader(
        br#"{"shape": {"kind": "rectangle", "outer_size": {"width": 10, "height": 10}, "inner_size": {"width": 8, "height": 8}}}"#
            .as_slice(),
    )
    .unwrap();
    let out = scene.compose();
    assert!(out.layers.is_empty());
    assert_eq!(out.frame.style.get("z-index"), Some("12"));
}

#[test]
fn validation_rejects_bad_geometry_and_depth() {
    let mut def = reef().def().clone();
    def.shape.inner_size = Size::new(0.0, 10.0);
    assert!(Scene::from_def(def).validate().is_err());

    let mut def = reef().def().clone();
    def.max_layers = Some(0);
    assert!(Scene::from_def(def).validate().is_err());
}

#[test]
fn bad_json_is_a_serde_error() {
    let err = Scene::from_reader(b"{".as_slice()).unwrap_err();
    assert!(matches!(err, DioramaError::Serde(_)));
    let err = Scene::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, DioramaError::Validation(_)));
}

#[test]
fn composed_scene_serializes() {
    let v = serde_json::to_value(reef().compose()).unwrap();
    assert_eq!(v["layers"][0]["theme_layer"], 3);
    assert_eq!(v["layers"][0]["style"]["z-index"], "9");
    assert_eq!(v["entities"][0]["id"], "fish");
}

#[test]
fn frame_stays_above_z_index_set_by_custom_style() {
    let mut def = reef().def().clone();
    def.layers[1].animation = Some(crate::animation::descriptor::AnimationDescriptor::custom_style(
        Style::new().with("z-index", "99"),
    ));
    let out = Scene::from_def(def).compose();
    assert_eq!(out.layers[1].style.get("z-index"), Some("99"));
    assert_eq!(out.layers[1].effective_z_index(), 99);
    assert_eq!(out.frame.style.get("z-index"), Some("100"));
}
