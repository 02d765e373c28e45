use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::interpret::interpret,
    foundation::{
        core::{DEFAULT_MAX_LAYERS, Size, fmt_num},
        error::{DioramaError, DioramaResult},
        style::Style,
    },
    scene::model::{EntityDescriptor, LayerDescriptor, SceneDef},
    shape::{
        clip::{ClipRegion, clip_region},
        frame::{FrameMask, frame_for_scene, frame_style},
    },
    theme::resolver::{LayerTheme, ThemeResolver},
};

/// A loaded scene definition.
///
/// Construction only parses; call [`Scene::validate`] before composing untrusted input.
#[derive(Debug, Clone)]
pub struct Scene {
    def: SceneDef,
}

/// Computed output for one layer or entity.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ComposedLayer {
    /// Host-side identifier from the descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Depth placement.
    #[serde(flatten)]
    pub theme: LayerTheme,
    /// Every declaration to apply to the element.
    pub style: Style,
}

/// Computed overlay frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ComposedFrame {
    /// Mask geometry.
    pub mask: FrameMask,
    /// Element style (stacking, pointer behavior).
    pub style: Style,
    /// Ready-to-inline SVG for the frame.
    pub svg: String,
}

/// Everything a host renderer needs to draw the scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ComposedScene {
    /// Scene name, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Clip geometry for the scene container.
    pub clip: ClipRegion,
    /// Scene container style.
    pub container: Style,
    /// Layers in descriptor order.
    pub layers: Vec<ComposedLayer>,
    /// Entities in descriptor order.
    pub entities: Vec<ComposedLayer>,
    /// Overlay frame.
    pub frame: ComposedFrame,
}

impl ComposedLayer {
    /// Stacking order the host will apply: a `z-index` declaration in the final style (a custom
    /// animation style may set one) wins over the theme value.
    pub fn effective_z_index(&self) -> i32 {
        self.style
            .get("z-index")
            .and_then(|z| z.trim().parse().ok())
            .unwrap_or(self.theme.z_index)
    }
}

impl Scene {
    /// Parse a scene definition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DioramaResult<Self> {
        let def: SceneDef = serde_json::from_reader(r)
            .map_err(|e| DioramaError::serde(format!("parse scene JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a scene definition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DioramaResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DioramaError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Wrap an in-memory definition.
    pub fn from_def(def: SceneDef) -> Self {
        Self { def }
    }

    /// The underlying definition.
    pub fn def(&self) -> &SceneDef {
        &self.def
    }

    /// Reject structurally unusable definitions.
    ///
    /// Only geometry and depth scales are checked; descriptor gaps are left to the per-component
    /// fallbacks.
    pub fn validate(&self) -> DioramaResult<()> {
        let shape = &self.def.shape;
        check_size("shape.outer_size", shape.outer_size)?;
        check_size("shape.inner_size", shape.inner_size)?;
        if !(shape.offset.x.is_finite() && shape.offset.y.is_finite()) {
            return Err(DioramaError::validation("shape.offset must be finite"));
        }

        let depths = std::iter::once(self.def.max_layers)
            .chain(self.def.layers.iter().map(|l| l.max_layers))
            .chain(self.def.entities.iter().map(|e| e.base.max_layers));
        for max in depths.flatten() {
            if max < 1 {
                return Err(DioramaError::validation(format!(
                    "max_layers must be >= 1 (got {max})"
                )));
            }
        }
        Ok(())
    }

    /// Compute every style output for the scene.
    #[tracing::instrument(skip(self), fields(scene = self.def.name.as_deref().unwrap_or("")))]
    pub fn compose(&self) -> ComposedScene {
        let def = &self.def;
        let mut resolver = ThemeResolver::new(def.palette.clone());

        let layers: Vec<ComposedLayer> = def
            .layers
            .iter()
            .map(|l| self.compose_layer(&mut resolver, l))
            .collect();
        let entities: Vec<ComposedLayer> = def
            .entities
            .iter()
            .map(|e| self.compose_entity(&mut resolver, e))
            .collect();

        let top_z = layers
            .iter()
            .chain(entities.iter())
            .map(ComposedLayer::effective_z_index)
            .max()
            .unwrap_or_else(|| def.max_layers.unwrap_or(DEFAULT_MAX_LAYERS));

        let clip = clip_region(def.shape.kind, def.shape.inner_size);
        let container = Style::new()
            .with("position", "relative")
            .with("width", px(def.shape.inner_size.width))
            .with("height", px(def.shape.inner_size.height))
            .with("clip-path", clip.to_css());

        let mask = frame_for_scene(&def.shape, &def.frame);
        let frame = ComposedFrame {
            svg: mask.to_svg(def.frame.color),
            style: frame_style(top_z),
            mask,
        };

        tracing::debug!(
            layers = layers.len(),
            entities = entities.len(),
            distinct = resolver.cached_len(),
            "composed scene"
        );

        ComposedScene {
            name: def.name.clone(),
            clip,
            container,
            layers,
            entities,
            frame,
        }
    }

    fn compose_layer(&self, resolver: &mut ThemeResolver, desc: &LayerDescriptor) -> ComposedLayer {
        let mapping = desc.mapping.as_ref().or(self.def.mapping.as_ref());
        let max_layers = desc.max_layers.or(self.def.max_layers);
        let theme = resolver.resolve(desc.layer, mapping, max_layers);

        let mut style = Style::new()
            .with("position", "absolute")
            .with("color", theme.color.to_hex())
            .with("z-index", theme.z_index.to_string());
        if let Some(filter) = &desc.filter {
            style.set("filter", filter.as_str());
        }
        if let Some(anim) = &desc.animation {
            style.merge(&interpret(anim));
        }

        ComposedLayer {
            id: desc.id.clone(),
            theme,
            style,
        }
    }

    fn compose_entity(
        &self,
        resolver: &mut ThemeResolver,
        desc: &EntityDescriptor,
    ) -> ComposedLayer {
        let mut out = self.compose_layer(resolver, &desc.base);
        let local = desc.base.layer;

        let pct = |v: Option<f64>| v.filter(|v| v.is_finite()).map(|v| format!("{}%", fmt_num(v)));
        if let Some(w) = pct(desc.size.as_ref().and_then(|s| s.resolve(local))) {
            out.style.set("width", w);
        }
        if let Some(top) = pct(desc.top.as_ref().and_then(|s| s.resolve(local))) {
            out.style.set("top", top);
        }
        if let Some(left) = pct(desc.left.as_ref().and_then(|s| s.resolve(local))) {
            out.style.set("left", left);
        }
        out
    }
}

fn check_size(what: &str, size: Size) -> DioramaResult<()> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(size.width) && ok(size.height) {
        Ok(())
    } else {
        Err(DioramaError::validation(format!(
            "{what} must have positive finite width/height (got {}x{})",
            size.width, size.height
        )))
    }
}

fn px(v: f64) -> String {
    format!("{}px", fmt_num(v))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composition.rs"]
mod tests;
