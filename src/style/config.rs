use indexmap::IndexMap;
use serde::Serialize;

use crate::error::FigureResult;
use crate::render::Color;

/// One configuration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
    Pair(f64, f64),
    ColorCycle(Vec<Color>),
}

impl StyleValue {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<(f64, f64)> for StyleValue {
    fn from((first, second): (f64, f64)) -> Self {
        Self::Pair(first, second)
    }
}

/// Caller-owned plotting configuration: dotted keys (`font.size`,
/// `savefig.dpi`, ...) mapped to values, in insertion order.
///
/// Every "apply" helper in this crate mutates a `StyleConfig` the caller
/// passes in; figures and export options read from one. Nothing is global.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleConfig {
    entries: IndexMap<String, StyleValue>,
}

impl StyleConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, keeping its original position when it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(StyleValue::as_f64)
    }

    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(StyleValue::as_bool)
    }

    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_str)
    }

    #[must_use]
    pub fn get_pair(&self, key: &str) -> Option<(f64, f64)> {
        match self.get(key) {
            Some(StyleValue::Pair(first, second)) => Some((*first, *second)),
            _ => None,
        }
    }

    #[must_use]
    pub fn color_cycle(&self) -> Option<&[Color]> {
        match self.get("axes.prop_cycle") {
            Some(StyleValue::ColorCycle(colors)) => Some(colors),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.entries.shift_remove(key)
    }

    /// Overlays every entry of `other`; last writer wins per key.
    pub fn update(&mut self, other: &StyleConfig) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn to_json_pretty(&self) -> FigureResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.set(key, value);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::{StyleConfig, StyleValue};

    #[test]
    fn update_overrides_in_place_and_appends_new_keys() {
        let mut base = StyleConfig::new()
            .with("font.size", 8_i64)
            .with("lines.linewidth", 1.5);
        let delta = StyleConfig::new()
            .with("font.size", 7_i64)
            .with("savefig.dpi", 600_i64);

        base.update(&delta);

        let keys: Vec<_> = base.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["font.size", "lines.linewidth", "savefig.dpi"]);
        assert_eq!(base.get("font.size"), Some(&StyleValue::Int(7)));
    }

    #[test]
    fn numeric_getter_widens_ints() {
        let config = StyleConfig::new().with("savefig.dpi", 300_i64);
        assert_eq!(config.get_f64("savefig.dpi"), Some(300.0));
        assert_eq!(config.get_bool("savefig.dpi"), None);
    }
}
