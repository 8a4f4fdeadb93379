// File: crates/texfig-core/src/size.rs
// Summary: Figure size computation: golden-mean completion and pt/cm/in to inch conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FigureError, Result};
use crate::types::{CM_TO_INCHES, GOLDEN_MEAN, POINT_TO_INCHES};

/// Length unit accepted for figure dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "pt")]
    Points,
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "in")]
    Inches,
}

impl LengthUnit {
    /// Multiplier that converts a length in this unit to inches.
    pub const fn inches_per_unit(self) -> f64 {
        match self {
            LengthUnit::Points => POINT_TO_INCHES,
            LengthUnit::Centimeters => CM_TO_INCHES,
            LengthUnit::Inches => 1.0,
        }
    }

    pub fn to_inches(self, v: f64) -> f64 {
        match self {
            LengthUnit::Inches => v,
            _ => v * self.inches_per_unit(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LengthUnit::Points => "pt",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Inches => "in",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pt" => Ok(LengthUnit::Points),
            "cm" => Ok(LengthUnit::Centimeters),
            "in" => Ok(LengthUnit::Inches),
            other => Err(FigureError::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical figure dimensions in inches.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    pub const fn from_inches(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Complete a (width, height) request and convert it to inches.
    ///
    /// Returns `None` when neither dimension is given (zero counts as not
    /// given), meaning the caller keeps its default size. A missing height is
    /// `width * GOLDEN_MEAN`, a missing width is `height / GOLDEN_MEAN`.
    pub fn compute(width: Option<f64>, height: Option<f64>, unit: LengthUnit) -> Option<Self> {
        let width = width.filter(|v| *v != 0.0);
        let height = height.filter(|v| *v != 0.0);
        let (w, h) = match (width, height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w * GOLDEN_MEAN),
            (None, Some(h)) => (h / GOLDEN_MEAN, h),
            (None, None) => return None,
        };
        let size = Self { width: unit.to_inches(w), height: unit.to_inches(h) };
        log::debug!("figure size {w}x{h}{unit} -> {:.4}x{:.4}in", size.width, size.height);
        Some(size)
    }

    /// Like [`FigureSize::compute`] but with the unit given as text.
    ///
    /// The unit is only validated when a size is requested; an unknown or
    /// missing unit then fails with [`FigureError::InvalidUnit`].
    pub fn compute_str(width: Option<f64>, height: Option<f64>, unit: Option<&str>) -> Result<Option<Self>> {
        let given = |v: Option<f64>| v.map_or(false, |v| v != 0.0);
        if !given(width) && !given(height) {
            return Ok(None);
        }
        let unit: LengthUnit = unit.unwrap_or("").parse()?;
        Ok(Self::compute(width, height, unit))
    }

    /// Pixel dimensions of a raster at `dpi`, at least 1x1.
    pub fn to_pixels(&self, dpi: f64) -> (i32, i32) {
        let w = (self.width * dpi).round().max(1.0) as i32;
        let h = (self.height * dpi).round().max(1.0) as i32;
        (w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_parse_roundtrip_names() {
        for u in [LengthUnit::Points, LengthUnit::Centimeters, LengthUnit::Inches] {
            assert_eq!(u.as_str().parse::<LengthUnit>().unwrap(), u);
        }
        assert!(matches!("mm".parse::<LengthUnit>(), Err(FigureError::InvalidUnit(u)) if u == "mm"));
    }

    #[test]
    fn pixels_round_and_clamp() {
        assert_eq!(FigureSize::from_inches(6.4, 4.8).to_pixels(100.0), (640, 480));
        assert_eq!(FigureSize::from_inches(0.001, 0.001).to_pixels(100.0), (1, 1));
    }
}
