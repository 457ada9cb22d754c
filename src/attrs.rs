use std::fmt::Write;

use indexmap::IndexMap;
use maud::{Escaper, Markup, PreEscaped};

/// The attributes of a single HTML element, in the order they are written out.
///
/// An attribute whose value is the empty string counts as absent: it is kept in the
/// bag (so later merges land in the same position) but never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attrs(IndexMap<String, String>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Sets `name`, keeping its current position if it is already present
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let _ = self.0.insert(name.into(), value.into());
    }

    /// True when `name` is missing or set to the empty string
    pub fn is_empty_value(&self, name: &str) -> bool {
        self.get(name).map_or(true, str::is_empty)
    }

    /// Overlays `other` on top of these attributes. Colliding names are overwritten in
    /// place, new names are appended.
    pub fn merge(&mut self, other: impl Into<Attrs>) {
        for (name, value) in other.into().0 {
            self.set(name, value);
        }
    }

    /// The same attributes with `other` overlaid
    pub fn merged(mut self, other: impl Into<Attrs>) -> Self {
        self.merge(other);
        self
    }

    /// The attributes that will actually be written out
    pub fn non_empty(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn write_to(&self, buffer: &mut String) {
        for (name, value) in self.non_empty() {
            buffer.push(' ');
            buffer.push_str(name);
            buffer.push_str("=\"");
            // Writing into a String can't fail
            let _ = Escaper::new(buffer).write_str(value);
            buffer.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attrs {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl From<IndexMap<String, String>> for Attrs {
    fn from(map: IndexMap<String, String>) -> Self {
        Self(map)
    }
}

/// Writes a self closing element such as `<img src="..."/>`
pub fn void_element(name: &str, attrs: &Attrs) -> Markup {
    let mut buffer = String::new();
    buffer.push('<');
    buffer.push_str(name);
    attrs.write_to(&mut buffer);
    buffer.push_str("/>");
    PreEscaped(buffer)
}

/// Writes `<name ...>content</name>`. `content` is trusted markup and is not escaped.
pub fn element(name: &str, attrs: &Attrs, content: &Markup) -> Markup {
    let mut buffer = String::new();
    buffer.push('<');
    buffer.push_str(name);
    attrs.write_to(&mut buffer);
    buffer.push('>');
    buffer.push_str(&content.0);
    buffer.push_str("</");
    buffer.push_str(name);
    buffer.push('>');
    PreEscaped(buffer)
}
