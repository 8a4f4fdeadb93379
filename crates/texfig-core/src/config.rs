// File: crates/texfig-core/src/config.rs
// Summary: Figure options (all make-figure parameters) with defaults and JSON loading.

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cycle::{LineStyle, Rgb};
use crate::error::Result;
use crate::types::{FracRect, DEFAULT_DPI, DEFAULT_FONT_SIZE};

/// Everything needed to build a [`crate::Figure`].
///
/// Missing JSON fields take the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// `"pt"`, `"cm"` or `"in"`; required when a width or height is given.
    pub unit: Option<String>,
    pub serif: bool,
    pub font_size: f64,
    /// German number format (decimal comma) on axis tick labels.
    pub de: bool,
    /// Keep the backend's default axes placement for a single axes.
    pub default_axes: bool,
    /// Explicit `[left, bottom, width, height]` for a single axes.
    pub other_axes: Option<FracRect>,
    pub metadata: Metadata,
    pub num_subplots_x: usize,
    pub num_subplots_y: usize,
    pub width_ratios: Option<Vec<f64>>,
    pub height_ratios: Option<Vec<f64>>,
    pub sharex: bool,
    pub sharey: bool,
    pub tight_layout: bool,
    pub set_lines: bool,
    pub colors: Option<Vec<Rgb>>,
    pub linestyles: Option<Vec<LineStyle>>,
    pub dpi: f64,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            unit: None,
            serif: true,
            font_size: DEFAULT_FONT_SIZE,
            de: false,
            default_axes: false,
            other_axes: None,
            metadata: Metadata::default(),
            num_subplots_x: 1,
            num_subplots_y: 1,
            width_ratios: None,
            height_ratios: None,
            sharex: false,
            sharey: false,
            tight_layout: false,
            set_lines: true,
            colors: None,
            linestyles: None,
            dpi: DEFAULT_DPI,
        }
    }
}

impl FigureOptions {
    /// Options for a `width x height` figure in `unit`.
    pub fn sized(width: f64, height: f64, unit: &str) -> Self {
        Self { width: Some(width), height: Some(height), unit: Some(unit.to_string()), ..Self::default() }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn is_single_axes(&self) -> bool {
        self.num_subplots_x == 1 && self.num_subplots_y == 1
    }
}

/// PDF info entries, kept in the order they were inserted or written in the file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata(Vec<(String, String)>);

impl Metadata {
    /// Set `key`; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let (key, value) = (key.into(), value.into());
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Metadata::default();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MetadataVisitor;

        impl<'de> Visitor<'de> for MetadataVisitor {
            type Value = Metadata;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of metadata strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Metadata, A::Error> {
                let mut out = Metadata::default();
                while let Some((k, v)) = map.next_entry::<String, String>()? {
                    out.insert(k, v);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(MetadataVisitor)
    }
}
