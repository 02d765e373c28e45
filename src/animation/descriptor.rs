use crate::foundation::{core::fmt_num, style::Style};

/// Declarative animation kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    /// Continuous spin about `transform_origin`.
    Rotation,
    /// Continuous translation of a seamlessly tiled strip.
    Scroll,
    /// No motion.
    #[default]
    None,
    /// Caller-supplied keyframes or style.
    Custom,
}

/// Direction as written in a descriptor.
///
/// Rotation and scroll share one field; a direction that does not belong to the descriptor's
/// kind is ignored in favor of the kind's default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationDirection {
    /// Rotation, clockwise.
    #[serde(alias = "cw")]
    Clockwise,
    /// Rotation, counter-clockwise.
    #[serde(alias = "ccw", alias = "counterclockwise")]
    CounterClockwise,
    /// Scroll toward the left edge.
    Left,
    /// Scroll toward the right edge.
    Right,
    /// Scroll toward the top edge.
    Up,
    /// Scroll toward the bottom edge.
    Down,
}

/// CSS timing function applied across one animation cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingFunction {
    /// Constant speed.
    #[default]
    Linear,
    /// CSS `ease`.
    Ease,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// Explicit bezier control points `[x1, y1, x2, y2]`.
    CubicBezier([f64; 4]),
    /// Stepped progression with `n` jumps.
    Steps(u32),
}

impl TimingFunction {
    /// CSS value for `animation-timing-function`.
    pub fn to_css(self) -> String {
        match self {
            Self::Linear => "linear".to_owned(),
            Self::Ease => "ease".to_owned(),
            Self::EaseIn => "ease-in".to_owned(),
            Self::EaseOut => "ease-out".to_owned(),
            Self::EaseInOut => "ease-in-out".to_owned(),
            Self::CubicBezier([x1, y1, x2, y2]) => format!(
                "cubic-bezier({}, {}, {}, {})",
                fmt_num(x1.clamp(0.0, 1.0)),
                fmt_num(y1),
                fmt_num(x2.clamp(0.0, 1.0)),
                fmt_num(y2)
            ),
            Self::Steps(n) => format!("steps({})", n.max(1)),
        }
    }
}

/// Plain configuration describing a layer's ambient motion.
///
/// Durations and delays are in seconds.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationDescriptor {
    /// What kind of motion to apply.
    pub kind: AnimationKind,
    /// Cycle length; absent disables `rotation`/`scroll`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Start offset; negative values start mid-cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Motion direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<AnimationDirection>,
    /// Timing function; linear when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing_function: Option<TimingFunction>,
    /// Keyframe name for `custom` descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyframes: Option<String>,
    /// Verbatim style for `custom` descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    /// CSS `transform-origin` for timed animations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_origin: Option<String>,
}

impl AnimationDescriptor {
    /// A descriptor with no motion.
    pub fn none() -> Self {
        Self::default()
    }

    /// Counter-clockwise rotation over `duration_secs`.
    pub fn rotation(duration_secs: f64) -> Self {
        Self {
            kind: AnimationKind::Rotation,
            duration: Some(duration_secs),
            ..Self::default()
        }
    }

    /// Leftward scroll over `duration_secs`.
    pub fn scroll(duration_secs: f64) -> Self {
        Self {
            kind: AnimationKind::Scroll,
            duration: Some(duration_secs),
            ..Self::default()
        }
    }

    /// Reference to externally defined keyframes; timing stays with the keyframes' owner.
    pub fn custom_keyframes(name: impl Into<String>) -> Self {
        Self {
            kind: AnimationKind::Custom,
            keyframes: Some(name.into()),
            ..Self::default()
        }
    }

    /// Verbatim style escape hatch.
    pub fn custom_style(style: Style) -> Self {
        Self {
            kind: AnimationKind::Custom,
            style: Some(style),
            ..Self::default()
        }
    }

    /// Set the direction.
    pub fn with_direction(mut self, direction: AnimationDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Set the start delay in seconds.
    pub fn with_delay(mut self, delay_secs: f64) -> Self {
        self.delay = Some(delay_secs);
        self
    }

    /// Set the timing function.
    pub fn with_timing(mut self, timing: TimingFunction) -> Self {
        self.timing_function = Some(timing);
        self
    }

    /// Set the transform origin.
    pub fn with_transform_origin(mut self, origin: impl Into<String>) -> Self {
        self.transform_origin = Some(origin.into());
        self
    }
}
