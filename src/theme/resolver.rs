use std::collections::HashMap;

use crate::{
    foundation::{color::Color, core::DEFAULT_MAX_LAYERS},
    theme::{
        mapping::{LayerThemeMapping, map_layer},
        palette::{Palette, resolve_color, z_index_for},
    },
};

/// Resolved depth placement of one layer or entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LayerTheme {
    /// Scene-local layer number as supplied.
    pub local_layer: i32,
    /// Shared theme layer after mapping.
    pub theme_layer: i32,
    /// Palette color for the theme layer.
    pub color: Color,
    /// Stacking order for the theme layer.
    pub z_index: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct LayerKey {
    local_layer: i32,
    mapping: Option<LayerThemeMapping>,
    max_layers: i32,
}

/// Memoized mapper + color/z-index resolution over one palette.
///
/// The cache is keyed on `(local layer, mapping entries, max layers)`; results never go stale
/// because the palette is fixed for the resolver's lifetime.
#[derive(Debug, Default)]
pub struct ThemeResolver {
    palette: Palette,
    cache: HashMap<LayerKey, LayerTheme>,
    hits: u64,
}

impl ThemeResolver {
    /// Resolver over `palette`.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            cache: HashMap::new(),
            hits: 0,
        }
    }

    /// Palette used for color lookups.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Resolve a local layer to its theme layer, color and z-index.
    ///
    /// `max_layers` defaults to the eleven-layer scale.
    pub fn resolve(
        &mut self,
        local_layer: i32,
        mapping: Option<&LayerThemeMapping>,
        max_layers: Option<i32>,
    ) -> LayerTheme {
        let max_layers = max_layers.unwrap_or(DEFAULT_MAX_LAYERS);
        let key = LayerKey {
            local_layer,
            mapping: mapping.cloned(),
            max_layers,
        };

        if let Some(hit) = self.cache.get(&key) {
            self.hits += 1;
            return *hit;
        }

        let theme_layer = map_layer(local_layer, mapping);
        let out = LayerTheme {
            local_layer,
            theme_layer,
            color: resolve_color(theme_layer, &self.palette),
            z_index: z_index_for(theme_layer, max_layers),
        };
        self.cache.insert(key, out);
        out
    }

    /// Number of distinct configurations resolved so far.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Number of lookups answered from the cache.
    pub fn cache_hits(&self) -> u64 {
        self.hits
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/resolver.rs"]
mod tests;
