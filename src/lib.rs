//! Diorama is a layered scene composition engine.
//!
//! A scene is a stack of flat illustration layers placed inside a clipped shape (circle or
//! rectangle) and framed by a decorative overlay. Every layer's color and stacking order come
//! from a shared depth palette, so independently authored scenes read as one coherent theme.
//!
//! # Pipeline overview
//!
//! 1. **Theme**: scene-local layer number -> theme layer -> palette color and z-index
//!    ([`map_layer`], [`resolve_color`], [`z_index_for`], [`ThemeResolver`])
//! 2. **Animate**: [`AnimationDescriptor`] -> style declarations ([`interpret`])
//! 3. **Shape**: clip geometry for the scene and the overlay frame ([`clip_region`],
//!    [`frame_for_scene`])
//! 4. **Compose**: [`Scene::compose`] ties the above into a [`ComposedScene`]
//!
//! Separately, the asset normalizer ([`normalize_dir`]) rewrites each SVG illustration's
//! `viewBox` to tightly fit its drawn paths.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total composition**: theme and animation lookups never fail; out-of-range input falls back
//!   to a documented default.
//! - **No IO in composition**: only loading scene files and normalizing assets touch the disk.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod normalize;
mod scene;
mod shape;
mod theme;

pub use animation::descriptor::{
    AnimationDescriptor, AnimationDirection, AnimationKind, TimingFunction,
};
pub use animation::interpret::{
    MIN_DURATION_SECS, ResolvedAnimation, interpret, resolve as resolve_animation,
};
pub use animation::keyframes::{
    KeyframeSet, ROTATE_CLOCKWISE, ROTATE_COUNTER_CLOCKWISE, RotationDirection, SCROLL_DOWN,
    SCROLL_LEFT, SCROLL_RIGHT, SCROLL_UP, ScrollDirection, builtin_keyframes, find_keyframes,
    keyframes_css,
};
pub use foundation::color::Color;
pub use foundation::core::{
    BezPath, Circle, DEFAULT_MAX_LAYERS, Point, Rect, Size, Vec2, fmt_num,
};
pub use foundation::error::{DioramaError, DioramaResult};
pub use foundation::style::Style;
pub use normalize::batch::{
    BatchReport, FileOutcome, FileReport, NormalizeOpts, NormalizeWarning, NormalizedSvg,
    collect_files, normalize_dir, normalize_file, normalize_files, normalize_svg_text,
};
pub use normalize::bbox::{
    BoundsAccumulator, DEFAULT_PADDING_RATIO, POINT_PADDING, ViewBox, padded_view_box,
    path_bounds,
};
pub use normalize::svg::{PathData, SvgSource};
pub use scene::composition::{ComposedFrame, ComposedLayer, ComposedScene, Scene};
pub use scene::model::{EntityDescriptor, LayerDescriptor, PerLayer, SceneDef};
pub use shape::clip::{ClipRegion, SceneShape, ShapeKind, clip_region};
pub use shape::frame::{
    DEFAULT_FRAME_INSET, FrameMask, FrameSpec, MAX_FRAME_INSET, frame_for_scene, frame_mask,
    frame_style,
};
pub use theme::mapping::{LayerThemeMapping, map_layer};
pub use theme::palette::{
    DEFAULT_PALETTE, Palette, default_z_index_for, resolve_color, z_index_for,
};
pub use theme::resolver::{LayerTheme, ThemeResolver};
