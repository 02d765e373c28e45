//! Built-in keyframe catalog.
//!
//! Every keyframe name the interpreter emits for `rotation`/`scroll` descriptors is defined here,
//! so hosts can install one stylesheet and rely on the names resolving.

use crate::animation::descriptor::AnimationDirection;

/// Rotation sense.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    /// Positive angles.
    Clockwise,
    /// Negative angles.
    #[default]
    CounterClockwise,
}

impl RotationDirection {
    /// Rotation sense for a descriptor direction; scroll directions and absence give the default.
    pub fn resolve(direction: Option<AnimationDirection>) -> Self {
        match direction {
            Some(AnimationDirection::Clockwise) => Self::Clockwise,
            Some(AnimationDirection::CounterClockwise) => Self::CounterClockwise,
            Some(other) => {
                tracing::debug!(?other, "direction does not apply to rotation; using default");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Keyframe name implementing this rotation.
    pub fn keyframes(self) -> &'static str {
        match self {
            Self::Clockwise => ROTATE_CLOCKWISE,
            Self::CounterClockwise => ROTATE_COUNTER_CLOCKWISE,
        }
    }
}

/// Scroll heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Content moves toward the left edge.
    #[default]
    Left,
    /// Content moves toward the right edge.
    Right,
    /// Content moves toward the top edge.
    Up,
    /// Content moves toward the bottom edge.
    Down,
}

impl ScrollDirection {
    /// Scroll heading for a descriptor direction; rotation directions and absence give the default.
    pub fn resolve(direction: Option<AnimationDirection>) -> Self {
        match direction {
            Some(AnimationDirection::Left) => Self::Left,
            Some(AnimationDirection::Right) => Self::Right,
            Some(AnimationDirection::Up) => Self::Up,
            Some(AnimationDirection::Down) => Self::Down,
            Some(other) => {
                tracing::debug!(?other, "direction does not apply to scroll; using default");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Keyframe name implementing this scroll.
    pub fn keyframes(self) -> &'static str {
        match self {
            Self::Left => SCROLL_LEFT,
            Self::Right => SCROLL_RIGHT,
            Self::Up => SCROLL_UP,
            Self::Down => SCROLL_DOWN,
        }
    }
}

/// Clockwise full turn.
pub const ROTATE_CLOCKWISE: &str = "diorama-rotate-cw";
/// Counter-clockwise full turn.
pub const ROTATE_COUNTER_CLOCKWISE: &str = "diorama-rotate-ccw";
/// Leftward strip scroll.
pub const SCROLL_LEFT: &str = "diorama-scroll-left";
/// Rightward strip scroll.
pub const SCROLL_RIGHT: &str = "diorama-scroll-right";
/// Upward strip scroll.
pub const SCROLL_UP: &str = "diorama-scroll-up";
/// Downward strip scroll.
pub const SCROLL_DOWN: &str = "diorama-scroll-down";

/// A two-stop transform keyframe definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyframeSet {
    /// Keyframe name referenced from `animation`.
    pub name: &'static str,
    /// Transform at the start of the cycle.
    pub from: &'static str,
    /// Transform at the end of the cycle.
    pub to: &'static str,
}

impl KeyframeSet {
    /// `@keyframes` rule for this set.
    pub fn to_css(&self) -> String {
        format!(
            "@keyframes {} {{\n  from {{ transform: {}; }}\n  to {{ transform: {}; }}\n}}\n",
            self.name, self.from, self.to
        )
    }
}

// Scroll strips hold two copies of their artwork side by side, so shifting by half the strip
// lands on a frame identical to the start.
const BUILTIN: [KeyframeSet; 6] = [
    KeyframeSet {
        name: ROTATE_CLOCKWISE,
        from: "rotate(0deg)",
        to: "rotate(360deg)",
    },
    KeyframeSet {
        name: ROTATE_COUNTER_CLOCKWISE,
        from: "rotate(0deg)",
        to: "rotate(-360deg)",
    },
    KeyframeSet {
        name: SCROLL_LEFT,
        from: "translateX(0)",
        to: "translateX(-50%)",
    },
    KeyframeSet {
        name: SCROLL_RIGHT,
        from: "translateX(-50%)",
        to: "translateX(0)",
    },
    KeyframeSet {
        name: SCROLL_UP,
        from: "translateY(0)",
        to: "translateY(-50%)",
    },
    KeyframeSet {
        name: SCROLL_DOWN,
        from: "translateY(-50%)",
        to: "translateY(0)",
    },
];

/// All built-in keyframe sets.
pub fn builtin_keyframes() -> &'static [KeyframeSet] {
    &BUILTIN
}

/// Look up a built-in keyframe set by name.
pub fn find_keyframes(name: &str) -> Option<&'static KeyframeSet> {
    BUILTIN.iter().find(|k| k.name == name)
}

/// Stylesheet defining every built-in keyframe set.
pub fn keyframes_css() -> String {
    BUILTIN
        .iter()
        .map(KeyframeSet::to_css)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
