use std::collections::BTreeSet;

use super::*;
use crate::animation::{
    descriptor::AnimationDirection,
    keyframes::{ROTATE_CLOCKWISE, ROTATE_COUNTER_CLOCKWISE, SCROLL_LEFT},
};

#[test]
fn none_is_empty() {
    assert!(interpret(&AnimationDescriptor::none()).is_empty());
    let with_timing = AnimationDescriptor {
        duration: Some(10.0),
        ..AnimationDescriptor::none()
    };
    assert!(interpret(&with_timing).is_empty());
}

#[test]
fn rotation_defaults_to_counter_clockwise_linear_infinite() {
    let style = interpret(&AnimationDescriptor::rotation(60.0));
    assert_eq!(
        style.get("animation"),
        Some("diorama-rotate-ccw 60s linear infinite")
    );
    assert_eq!(style.len(), 1);
}

#[test]
fn rotation_clockwise_selects_other_keyframes() {
    let cw = resolve(&AnimationDescriptor::rotation(5.0).with_direction(AnimationDirection::Clockwise));
    let ccw = resolve(&AnimationDescriptor::rotation(5.0));
    let ResolvedAnimation::Timed { keyframes: a, .. } = cw else {
        panic!("expected timed");
    };
    let ResolvedAnimation::Timed { keyframes: b, .. } = ccw else {
        panic!("expected timed");
    };
    assert_eq!(a, ROTATE_CLOCKWISE);
    assert_eq!(b, ROTATE_COUNTER_CLOCKWISE);
}

#[test]
fn scroll_directions_are_distinct_and_default_left() {
    let dirs = [
        AnimationDirection::Left,
        AnimationDirection::Right,
        AnimationDirection::Up,
        AnimationDirection::Down,
    ];
    let names: BTreeSet<String> = dirs
        .iter()
        .map(|d| {
            interpret(&AnimationDescriptor::scroll(30.0).with_direction(*d))
                .get("animation")
                .unwrap()
                .to_owned()
        })
        .collect();
    assert_eq!(names.len(), 4);

    let default = interpret(&AnimationDescriptor::scroll(30.0));
    assert!(default.get("animation").unwrap().starts_with(SCROLL_LEFT));
}

#[test]
fn mismatched_direction_falls_back_to_kind_default() {
    let style = interpret(&AnimationDescriptor::rotation(8.0).with_direction(AnimationDirection::Up));
    assert!(
        style
            .get("animation")
            .unwrap()
            .starts_with(ROTATE_COUNTER_CLOCKWISE)
    );
    let style =
        interpret(&AnimationDescriptor::scroll(8.0).with_direction(AnimationDirection::Clockwise));
    assert!(style.get("animation").unwrap().starts_with(SCROLL_LEFT));
}

#[test]
fn missing_duration_disables_timed_kinds() {
    for kind in [AnimationKind::Rotation, AnimationKind::Scroll] {
        let desc = AnimationDescriptor {
            kind,
            ..AnimationDescriptor::default()
        };
        assert!(interpret(&desc).is_empty());
        assert!(resolve(&desc).is_disabled());
    }

    let json: AnimationDescriptor =
        serde_json::from_str(r#"{"kind": "rotation", "duration": null}"#).unwrap();
    assert!(interpret(&json).is_empty());

    for bad in [0.0, -4.0, f64::NAN, f64::INFINITY] {
        assert!(interpret(&AnimationDescriptor::scroll(bad)).is_empty());
    }
}

#[test]
fn custom_style_passes_through_verbatim() {
    let style = Style::new()
        .with("animation", "wobble 3s ease-in-out infinite alternate")
        .with("will-change", "transform");
    let desc = AnimationDescriptor {
        keyframes: Some("ignored".to_owned()),
        ..AnimationDescriptor::custom_style(style.clone())
    };
    assert_eq!(interpret(&desc), style);
}

#[test]
fn custom_keyframes_emit_reference_without_timing() {
    let desc = AnimationDescriptor {
        duration: Some(9.0),
        ..AnimationDescriptor::custom_keyframes("bob")
    };
    let style = interpret(&desc);
    assert_eq!(style, Style::new().with("animation-name", "bob"));

    let empty = AnimationDescriptor {
        kind: AnimationKind::Custom,
        ..AnimationDescriptor::default()
    };
    assert!(interpret(&empty).is_empty());
}

#[test]
fn delay_timing_and_origin_are_emitted() {
    let desc = AnimationDescriptor::rotation(12.5)
        .with_direction(AnimationDirection::Clockwise)
        .with_delay(-3.0)
        .with_timing(TimingFunction::EaseInOut)
        .with_transform_origin("50% 100%");
    let style = interpret(&desc);
    assert_eq!(
        style.get("animation"),
        Some("diorama-rotate-cw 12.5s ease-in-out infinite")
    );
    assert_eq!(style.get("animation-delay"), Some("-3s"));
    assert_eq!(style.get("transform-origin"), Some("50% 100%"));
}

#[test]
fn parses_descriptor_json() {
    let desc: AnimationDescriptor = serde_json::from_str(
        r#"{
            "kind": "scroll",
            "duration": 40,
            "direction": "up",
            "timing_function": {"cubic-bezier": [0.4, 0.0, 0.2, 1.0]}
        }"#,
    )
    .unwrap();
    assert_eq!(
        interpret(&desc).get("animation"),
        Some("diorama-scroll-up 40s cubic-bezier(0.4, 0, 0.2, 1) infinite")
    );
}

#[test]
fn durations_that_would_print_as_zero_are_disabled() {
    assert!(interpret(&AnimationDescriptor::rotation(0.0004)).is_empty());
    assert!(interpret(&AnimationDescriptor::rotation(0.0009)).is_empty());

    let style = interpret(&AnimationDescriptor::rotation(MIN_DURATION_SECS));
    assert_eq!(
        style.get("animation"),
        Some("diorama-rotate-ccw 0.001s linear infinite")
    );
}
