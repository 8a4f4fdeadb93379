// File: crates/texfig-core/src/cycle.rs
// Summary: Line colours, dash styles and the zipped colour/line-style property cycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::error::{FigureError, Result};

/// Opaque RGB colour; parses matplotlib single-letter codes, common names and `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(255, self.r, self.g, self.b)
    }

    pub fn with_alpha(self, a: u8) -> skia::Color {
        skia::Color::from_argb(a, self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self> {
        let named = match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Some(Rgb::new(255, 0, 0)),
            "g" => Some(Rgb::new(0, 128, 0)),
            "green" => Some(Rgb::new(0, 128, 0)),
            "b" | "blue" => Some(Rgb::new(0, 0, 255)),
            "c" | "cyan" => Some(Rgb::new(0, 255, 255)),
            "m" | "magenta" => Some(Rgb::new(255, 0, 255)),
            "y" | "yellow" => Some(Rgb::new(255, 255, 0)),
            "k" | "black" => Some(Rgb::BLACK),
            "w" | "white" => Some(Rgb::WHITE),
            "orange" => Some(Rgb::new(255, 165, 0)),
            "gray" | "grey" => Some(Rgb::new(128, 128, 128)),
            "purple" => Some(Rgb::new(128, 0, 128)),
            "brown" => Some(Rgb::new(165, 42, 42)),
            _ => None,
        };
        if let Some(c) = named {
            return Ok(c);
        }
        let hex = s.trim().strip_prefix('#').ok_or_else(|| FigureError::InvalidStyle(s.to_string()))?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(FigureError::InvalidStyle(s.to_string()));
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| FigureError::InvalidStyle(s.to_string()));
        Ok(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = FigureError;
    fn try_from(s: String) -> Result<Self> { s.parse() }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self { c.to_string() }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Line dash style. Dash lengths are in multiples of the line width.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineStyleRepr", into = "LineStyleRepr")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
    /// `(offset, (on, off, on, off, ...))`
    Custom { offset: f64, pattern: Vec<f64> },
}

impl LineStyle {
    /// (offset, on/off pattern) in line-width units; `None` for solid lines.
    pub fn dash_pattern(&self) -> Option<(f64, Vec<f64>)> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some((0.0, vec![3.7, 1.6])),
            LineStyle::Dotted => Some((0.0, vec![1.0, 1.65])),
            LineStyle::DashDot => Some((0.0, vec![6.4, 1.6, 1.0, 1.6])),
            LineStyle::Custom { offset, pattern } => {
                if pattern.is_empty() || pattern.iter().all(|v| *v <= 0.0) {
                    None
                } else {
                    Some((*offset, pattern.clone()))
                }
            }
        }
    }

    /// Skia path effect for this style at `line_width_px`.
    pub fn path_effect(&self, line_width_px: f32) -> Option<skia::PathEffect> {
        let (offset, pattern) = self.dash_pattern()?;
        let scale = line_width_px.max(1.0);
        let mut intervals: Vec<f32> = pattern.iter().map(|v| (*v as f32 * scale).max(0.1)).collect();
        // skia wants an even number of intervals
        if intervals.len() % 2 == 1 {
            intervals.extend_from_within(..);
        }
        skia::PathEffect::dash(&intervals, offset as f32 * scale)
    }
}

impl FromStr for LineStyle {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "-" | "solid" => Ok(LineStyle::Solid),
            "--" | "dashed" => Ok(LineStyle::Dashed),
            ":" | "dotted" => Ok(LineStyle::Dotted),
            "-." | "dashdot" => Ok(LineStyle::DashDot),
            other => Err(FigureError::InvalidStyle(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LineStyleRepr {
    Name(String),
    Dash(f64, Vec<f64>),
}

impl TryFrom<LineStyleRepr> for LineStyle {
    type Error = FigureError;
    fn try_from(r: LineStyleRepr) -> Result<Self> {
        match r {
            LineStyleRepr::Name(s) => s.parse(),
            LineStyleRepr::Dash(offset, pattern) => Ok(LineStyle::Custom { offset, pattern }),
        }
    }
}

impl From<LineStyle> for LineStyleRepr {
    fn from(l: LineStyle) -> Self {
        match l {
            LineStyle::Solid => LineStyleRepr::Name("-".into()),
            LineStyle::Dashed => LineStyleRepr::Name("--".into()),
            LineStyle::Dotted => LineStyleRepr::Name(":".into()),
            LineStyle::DashDot => LineStyleRepr::Name("-.".into()),
            LineStyle::Custom { offset, pattern } => LineStyleRepr::Dash(offset, pattern),
        }
    }
}

/// `r, b, g, orange, k, cyan`
pub fn default_colors() -> Vec<Rgb> {
    ["r", "b", "g", "orange", "k", "cyan"].iter().filter_map(|c| c.parse().ok()).collect()
}

/// `-`, `--`, `:`, `-.`, loosely dotted, dash-dot-dotted.
pub fn default_linestyles() -> Vec<LineStyle> {
    vec![
        LineStyle::Solid,
        LineStyle::Dashed,
        LineStyle::Dotted,
        LineStyle::DashDot,
        LineStyle::Custom { offset: 0.0, pattern: vec![1.0, 4.5] },
        LineStyle::Custom { offset: 0.0, pattern: vec![3.0, 1.0, 1.0, 1.0, 1.0, 1.0] },
    ]
}

/// Colour cycle of the plain backend (tab10), all solid.
fn backend_colors() -> Vec<Rgb> {
    ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf"]
        .iter()
        .filter_map(|c| c.parse().ok())
        .collect()
}

/// Colour and line style advanced together for each new line.
#[derive(Clone, Debug, PartialEq)]
pub struct PropCycle {
    entries: Vec<(Rgb, LineStyle)>,
}

impl PropCycle {
    /// Zip colours with line styles, truncating both to the shorter list.
    /// `None` or an empty list selects the default list.
    pub fn zipped(colors: Option<Vec<Rgb>>, linestyles: Option<Vec<LineStyle>>) -> Self {
        let colors = colors.filter(|c| !c.is_empty()).unwrap_or_else(default_colors);
        let lines = linestyles.filter(|l| !l.is_empty()).unwrap_or_else(default_linestyles);
        if colors.len() != lines.len() {
            log::warn!(
                "{} colors and {} line styles; cycling over the first {}",
                colors.len(),
                lines.len(),
                colors.len().min(lines.len())
            );
        }
        Self { entries: colors.into_iter().zip(lines).collect() }
    }

    /// Zipped default colours and line styles.
    pub fn publication() -> Self {
        Self::zipped(None, None)
    }

    /// Cycle used when line styling is switched off.
    pub fn backend_default() -> Self {
        Self { entries: backend_colors().into_iter().map(|c| (c, LineStyle::Solid)).collect() }
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Style of the `i`-th line, wrapping around.
    pub fn nth(&self, i: usize) -> (Rgb, LineStyle) {
        if self.entries.is_empty() {
            return (Rgb::BLACK, LineStyle::Solid);
        }
        self.entries[i % self.entries.len()].clone()
    }

    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn linestyles(&self) -> impl Iterator<Item = &LineStyle> + '_ {
        self.entries.iter().map(|(_, l)| l)
    }
}

impl Default for PropCycle {
    fn default() -> Self { Self::publication() }
}
