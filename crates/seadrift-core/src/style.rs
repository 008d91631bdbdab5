//! Named style properties and the sink they are written to.
//!
//! The ambient components never touch the renderer directly; they publish
//! values under well-known property names and the renderer reads them back.
//! [`StyleMap`] is the in-memory document root; tests use it to observe
//! component output without any terminal.

use std::collections::BTreeMap;
use std::fmt;

use crate::Hsl;

/// A value writable to a named style property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    /// A palette color, formatted `hsl(H S% L%)`.
    Color(Hsl),
    /// A unitless scalar, formatted with four decimal places.
    Scalar(f64),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(hsl) => write!(f, "{hsl}"),
            Self::Scalar(value) => write!(f, "{value:.4}"),
        }
    }
}

/// Destination for named style properties.
pub trait StyleSink {
    /// Set `name` to `value`, replacing any previous value.
    fn set_property(&mut self, name: &str, value: StyleValue);
}

/// In-memory style sink backing the renderer.
#[derive(Debug, Default)]
pub struct StyleMap {
    properties: BTreeMap<String, StyleValue>,
}

impl StyleMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Option<StyleValue> {
        self.properties.get(name).copied()
    }

    /// Look up a color property; `None` if absent or not a color.
    pub fn color(&self, name: &str) -> Option<Hsl> {
        match self.get(name) {
            Some(StyleValue::Color(hsl)) => Some(hsl),
            _ => None,
        }
    }

    /// Look up a scalar property; `None` if absent or not a scalar.
    pub fn scalar(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(StyleValue::Scalar(value)) => Some(value),
            _ => None,
        }
    }
}

impl StyleSink for StyleMap {
    fn set_property(&mut self, name: &str, value: StyleValue) {
        self.properties.insert(name.to_owned(), value);
    }
}
