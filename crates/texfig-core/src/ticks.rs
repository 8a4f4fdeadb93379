// File: crates/texfig-core/src/ticks.rs
// Summary: Tick labels for index-addressed axes (image/contour grids) backed by a table of real values.

use std::fmt;

use crate::error::{FigureError, Result};

/// Values below this magnitude are printed in scientific notation.
pub const SCI_LOWER: f64 = 1e-3;
/// Values at or above this magnitude are printed in scientific notation.
pub const SCI_UPPER: f64 = 1e3;

/// A rendered tick label.
///
/// `Zero` is kept apart from text so that an exact zero reading shows as a bare
/// `0` instead of `0.00`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickLabel {
    Zero,
    Text(String),
}

impl TickLabel {
    pub fn is_zero(&self) -> bool {
        matches!(self, TickLabel::Zero)
    }
}

impl fmt::Display for TickLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickLabel::Zero => f.write_str("0"),
            TickLabel::Text(s) => f.write_str(s),
        }
    }
}

/// Real coordinate for each integer position along an index-addressed axis.
///
/// Borrowed from whoever built the axis; never empty.
#[derive(Clone, Copy, Debug)]
pub struct AxisValueTable<'a> {
    values: &'a [f64],
}

impl<'a> AxisValueTable<'a> {
    pub fn new(values: &'a [f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(FigureError::EmptyAxisTable);
        }
        Ok(Self { values })
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { false }

    pub fn values(&self) -> &'a [f64] { self.values }

    /// Value at the truncated `position`.
    ///
    /// Positions outside `[0, len)` (and NaN) fall back to the first entry, not
    /// to the nearest edge; existing figures depend on this.
    pub fn value_at(&self, position: f64) -> f64 {
        let idx = position.trunc();
        if idx >= 0.0 && idx < self.values.len() as f64 {
            self.values[idx as usize]
        } else {
            self.values[0]
        }
    }
}

/// Formatter registered on one axis of an image plot.
#[derive(Clone, Copy, Debug)]
pub struct IndexTickFormatter<'a> {
    table: AxisValueTable<'a>,
    decimals: usize,
}

impl<'a> IndexTickFormatter<'a> {
    pub fn new(table: AxisValueTable<'a>, decimals: usize) -> Self {
        Self { table, decimals }
    }

    pub fn table(&self) -> AxisValueTable<'a> { self.table }

    pub fn format(&self, position: f64) -> TickLabel {
        format_tick(&self.table, position, self.decimals)
    }
}

/// Label for `position` on an axis whose integer positions map to `table`.
pub fn format_tick(table: &AxisValueTable<'_>, position: f64, decimals: usize) -> TickLabel {
    format_value(table.value_at(position), decimals)
}

/// Zero, scientific (`|v| < 1e-3` or `|v| >= 1e3`) or fixed-point label with `decimals` digits.
pub fn format_value(v: f64, decimals: usize) -> TickLabel {
    if v == 0.0 {
        return TickLabel::Zero;
    }
    let a = v.abs();
    if a < SCI_LOWER || a >= SCI_UPPER {
        TickLabel::Text(format_exp(v, decimals))
    } else {
        TickLabel::Text(format_fixed(v, decimals))
    }
}

/// Fixed-point with exactly `decimals` fractional digits (printf `%.Nf`).
pub fn format_fixed(v: f64, decimals: usize) -> String {
    match non_finite(v) {
        Some(s) => s.to_string(),
        None => format!("{v:.decimals$}"),
    }
}

/// printf-style `%.Ne`: mantissa with `decimals` digits, signed exponent of at least two digits.
pub fn format_exp(v: f64, decimals: usize) -> String {
    if let Some(s) = non_finite(v) {
        return s.to_string();
    }
    // Rust renders `1.23e4` / `1.00e-5`; rewrite the exponent as `e+04` / `e-05`.
    let raw = format!("{v:.decimals$e}");
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

fn non_finite(v: f64) -> Option<&'static str> {
    if v.is_nan() {
        Some("nan")
    } else if v == f64::INFINITY {
        Some("inf")
    } else if v == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_is_signed_and_padded() {
        assert_eq!(format_exp(12345.0, 2), "1.23e+04");
        assert_eq!(format_exp(0.00012, 1), "1.2e-04");
        assert_eq!(format_exp(-5e-120, 0), "-5e-120");
        assert_eq!(format_exp(1.0, 3), "1.000e+00");
    }

    #[test]
    fn non_finite_values_use_lowercase_names() {
        assert_eq!(format_exp(f64::INFINITY, 2), "inf");
        assert_eq!(format_fixed(f64::NAN, 2), "nan");
        assert_eq!(format_value(f64::NEG_INFINITY, 2).to_string(), "-inf");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert!(format_value(-0.0, 2).is_zero());
    }
}
