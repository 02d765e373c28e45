use std::collections::BTreeMap;

use crate::{
    animation::descriptor::AnimationDescriptor,
    shape::{clip::SceneShape, frame::FrameSpec},
    theme::{
        mapping::{LayerThemeMapping, deserialize_layer_keyed},
        palette::Palette,
    },
};

/// A value given once for every layer, or per local layer number.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PerLayer<T> {
    /// Same value regardless of layer.
    Uniform(T),
    /// Value keyed by local layer number; missing layers get nothing.
    ByLayer(#[serde(deserialize_with = "deserialize_layer_keyed")] BTreeMap<i32, T>),
}

impl<T: Clone> PerLayer<T> {
    /// Value for `local_layer`, if defined.
    pub fn resolve(&self, local_layer: i32) -> Option<T> {
        match self {
            Self::Uniform(v) => Some(v.clone()),
            Self::ByLayer(table) => table.get(&local_layer).cloned(),
        }
    }
}

/// One illustration layer of a scene.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerDescriptor {
    /// Optional host-side identifier, echoed back in computed output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Scene-local layer number (1 = front).
    pub layer: i32,
    /// Layer-specific mapping; the scene mapping applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<LayerThemeMapping>,
    /// Ambient motion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationDescriptor>,
    /// CSS `filter` value (typically a drop shadow).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Theme depth for z-index; the scene value applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_layers: Option<i32>,
}

/// A free-standing element (creature, prop) placed on one of the scene's layers.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntityDescriptor {
    /// Depth placement and motion.
    #[serde(flatten)]
    pub base: LayerDescriptor,
    /// Width as a percentage of the scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<PerLayer<f64>>,
    /// Vertical offset as a percentage of the scene height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<PerLayer<f64>>,
    /// Horizontal offset as a percentage of the scene width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<PerLayer<f64>>,
}

/// JSON-facing scene definition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDef {
    /// Human-readable scene name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Outline and frame canvas.
    pub shape: SceneShape,
    /// Depth palette.
    #[serde(default)]
    pub palette: Palette,
    /// Scene-wide local-to-theme mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<LayerThemeMapping>,
    /// Scene-wide theme depth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_layers: Option<i32>,
    /// Overlay frame.
    #[serde(default)]
    pub frame: FrameSpec,
    /// Illustration layers, back to front or in any order.
    #[serde(default)]
    pub layers: Vec<LayerDescriptor>,
    /// Entities placed on layers.
    #[serde(default)]
    pub entities: Vec<EntityDescriptor>,
}
