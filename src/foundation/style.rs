use std::collections::BTreeMap;

/// A set of CSS declarations (`property -> value`) handed to the host renderer.
///
/// Properties are kept sorted so serialized output is stable. An empty style is the
/// "nothing to apply" outcome for disabled animations and similar configuration gaps.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    /// An empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property` to `value`, replacing any previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// Builder-style [`Style::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Look up a property value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// `true` when no declarations are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Merge `other` into `self`; `other` wins on conflicts.
    pub fn merge(&mut self, other: &Style) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Iterate declarations in property order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as an inline CSS declaration block (`a: b; c: d;`).
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (k, v) in &self.0 {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(k);
            out.push_str(": ");
            out.push_str(v);
            out.push(';');
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for Style
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
