use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer, de};

/// Scene-local layer number -> shared theme layer number.
///
/// Layers without an entry keep their own number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct LayerThemeMapping(BTreeMap<i32, i32>);

impl<'de> Deserialize<'de> for LayerThemeMapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_layer_keyed(deserializer).map(Self)
    }
}

impl LayerThemeMapping {
    /// An empty (identity) mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, local_layer: i32, theme_layer: i32) -> Option<i32> {
        self.0.insert(local_layer, theme_layer)
    }

    /// Explicit entry for `local_layer`, if any.
    pub fn get(&self, local_layer: i32) -> Option<i32> {
        self.0.get(&local_layer).copied()
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the identity mapping.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(i32, i32)> for LayerThemeMapping {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Theme layer for a local layer; identity when no mapping or no entry exists.
pub fn map_layer(local_layer: i32, mapping: Option<&LayerThemeMapping>) -> i32 {
    mapping
        .and_then(|m| m.get(local_layer))
        .unwrap_or(local_layer)
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct LayerKey(i32);

impl<'de> Deserialize<'de> for LayerKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;

        impl de::Visitor<'_> for KeyVisitor {
            type Value = LayerKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a layer number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LayerKey, E> {
                v.trim()
                    .parse::<i32>()
                    .map(LayerKey)
                    .map_err(|_| E::custom(format!("invalid layer number \"{v}\"")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<LayerKey, E> {
                i32::try_from(v)
                    .map(LayerKey)
                    .map_err(|_| E::custom(format!("layer number {v} out of range")))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<LayerKey, E> {
                i32::try_from(v)
                    .map(LayerKey)
                    .map_err(|_| E::custom(format!("layer number {v} out of range")))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

/// Deserialize a table keyed by layer number.
///
/// JSON object keys are strings; they are parsed here rather than by the map so tables also
/// load when buffered through untagged or flattened containers.
pub(crate) fn deserialize_layer_keyed<'de, D, T>(
    deserializer: D,
) -> Result<BTreeMap<i32, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw = BTreeMap::<LayerKey, T>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k.0, v)).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/theme/mapping.rs"]
mod tests;
