use crate::{
    animation::{
        descriptor::{AnimationDescriptor, AnimationKind, TimingFunction},
        keyframes::{RotationDirection, ScrollDirection},
    },
    foundation::{core::fmt_num, style::Style},
};

/// Shortest cycle that survives formatting to millisecond precision; anything shorter would be
/// written as `0s`.
pub const MIN_DURATION_SECS: f64 = 0.001;

/// An animation descriptor after every default has been applied.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedAnimation {
    /// Nothing to apply: `none`, a timed kind without a usable duration, or an empty `custom`.
    Disabled,
    /// Caller style applied as-is.
    Passthrough(Style),
    /// Named keyframes whose timing is owned by their definition.
    Reference(String),
    /// Built-in keyframes on an infinite loop.
    Timed {
        /// Keyframe name.
        keyframes: &'static str,
        /// Cycle length in seconds.
        duration_secs: f64,
        /// Start offset in seconds.
        delay_secs: Option<f64>,
        /// Timing function.
        timing: TimingFunction,
        /// CSS transform origin.
        transform_origin: Option<String>,
    },
}

/// Apply the descriptor defaults in one place.
///
/// - `rotation`/`scroll` without a finite duration of at least [`MIN_DURATION_SECS`] are disabled.
/// - Rotation defaults to counter-clockwise, scroll to left, timing to linear.
/// - `custom` prefers an explicit style over a keyframe reference.
pub fn resolve(desc: &AnimationDescriptor) -> ResolvedAnimation {
    let keyframes = match desc.kind {
        AnimationKind::None => return ResolvedAnimation::Disabled,
        AnimationKind::Custom => {
            if let Some(style) = &desc.style {
                return ResolvedAnimation::Passthrough(style.clone());
            }
            return match &desc.keyframes {
                Some(name) if !name.trim().is_empty() => {
                    ResolvedAnimation::Reference(name.trim().to_owned())
                }
                _ => ResolvedAnimation::Disabled,
            };
        }
        AnimationKind::Rotation => RotationDirection::resolve(desc.direction).keyframes(),
        AnimationKind::Scroll => ScrollDirection::resolve(desc.direction).keyframes(),
    };

    let Some(duration_secs) = desc
        .duration
        .filter(|d| d.is_finite() && *d >= MIN_DURATION_SECS)
    else {
        tracing::debug!(kind = ?desc.kind, "animation has no usable duration; disabled");
        return ResolvedAnimation::Disabled;
    };

    ResolvedAnimation::Timed {
        keyframes,
        duration_secs,
        delay_secs: desc.delay.filter(|d| d.is_finite()),
        timing: desc.timing_function.unwrap_or_default(),
        transform_origin: desc.transform_origin.clone(),
    }
}

impl ResolvedAnimation {
    /// CSS declarations for the host renderer.
    pub fn to_style(&self) -> Style {
        match self {
            Self::Disabled => Style::new(),
            Self::Passthrough(style) => style.clone(),
            Self::Reference(name) => Style::new().with("animation-name", name.as_str()),
            Self::Timed {
                keyframes,
                duration_secs,
                delay_secs,
                timing,
                transform_origin,
            } => {
                let mut style = Style::new().with(
                    "animation",
                    format!(
                        "{keyframes} {}s {} infinite",
                        fmt_num(*duration_secs),
                        timing.to_css()
                    ),
                );
                if let Some(delay) = delay_secs {
                    style.set("animation-delay", format!("{}s", fmt_num(*delay)));
                }
                if let Some(origin) = transform_origin {
                    style.set("transform-origin", origin.as_str());
                }
                style
            }
        }
    }

    /// `true` when nothing will be applied.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

/// Convert a descriptor into the animation style to apply (possibly empty).
pub fn interpret(desc: &AnimationDescriptor) -> Style {
    resolve(desc).to_style()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpret.rs"]
mod tests;
