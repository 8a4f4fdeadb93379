// File: crates/texfig-core/src/axes.rs
// Summary: Axis model, tick parameters and the scalar tick formatter with scientific limits.

use crate::grid::{major_ticks, minor_ticks};
use crate::locale::NumberLocale;
use crate::ticks::{AxisValueTable, IndexTickFormatter};

/// Scientific-notation limits of the y axis, as powers of ten.
pub const Y_SCILIMITS: (i32, i32) = (-3, 3);
/// Scientific-notation limits of the x axis, as powers of ten.
pub const X_SCILIMITS: (i32, i32) = (-4, 4);
/// Padding between the y label and its tick labels, in points.
pub const Y_LABEL_PAD: f64 = 5.0;
/// Relative margin added around autoscaled (non-tight) data.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickDirection {
    In,
    Out,
}

/// Tick marks drawn on every axes. Lengths and width are in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickParams {
    pub major_size: f64,
    pub minor_size: f64,
    pub width: f64,
    pub direction: TickDirection,
    /// Repeat ticks on the top and right spines.
    pub mirror: bool,
    pub minor_ticks: bool,
}

impl Default for TickParams {
    fn default() -> Self {
        Self { major_size: 5.0, minor_size: 1.5, width: 0.5, direction: TickDirection::In, mirror: true, minor_ticks: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

/// How tick values turn into label text.
#[derive(Clone, Debug, PartialEq)]
pub enum TickLabelMode {
    /// Positions are data values; see [`ScalarFormatter`].
    Scalar,
    /// Positions are cell indices looked up in `values` (image/contour axes).
    Index { values: Vec<f64>, decimals: usize },
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: Option<String>,
    pub label_mode: TickLabelMode,
    /// Explicit limits; `None` autoscales from the data.
    pub limits: Option<(f64, f64)>,
    pub kind: AxisKind,
    pub scilimits: (i32, i32),
    /// Autoscale exactly to the data range, without margin.
    pub tight: bool,
    pub show_tick_labels: bool,
}

impl Axis {
    pub fn new(kind: AxisKind) -> Self {
        match kind {
            AxisKind::X => Self { label: None, label_mode: TickLabelMode::Scalar, limits: None, kind, scilimits: X_SCILIMITS, tight: true, show_tick_labels: true },
            AxisKind::Y => Self { label: None, label_mode: TickLabelMode::Scalar, limits: None, kind, scilimits: Y_SCILIMITS, tight: false, show_tick_labels: true },
        }
    }

    pub fn x() -> Self { Self::new(AxisKind::X) }

    pub fn y() -> Self { Self::new(AxisKind::Y) }

    /// View limits for data spanning `[lo, hi]`.
    pub fn view_limits(&self, data: Option<(f64, f64)>) -> (f64, f64) {
        if let Some(l) = self.limits {
            return l;
        }
        let Some((mut lo, mut hi)) = data else {
            return (0.0, 1.0);
        };
        if (hi - lo).abs() < 1e-12 {
            let pad = if lo.abs() > 0.0 { lo.abs() * 0.05 } else { 0.5 };
            lo -= pad;
            hi += pad;
        } else if !self.tight {
            let m = (hi - lo) * AUTOSCALE_MARGIN;
            lo -= m;
            hi += m;
        }
        (lo, hi)
    }
}

impl Axis {
    /// Label text for the major ticks at `locs`.
    pub fn tick_labels(&self, locs: &[f64], locale: NumberLocale) -> ScalarLabels {
        match &self.label_mode {
            TickLabelMode::Scalar => ScalarFormatter::new(self.scilimits, locale).format_ticks(locs),
            TickLabelMode::Index { values, decimals } => {
                let labels = match AxisValueTable::new(values) {
                    Ok(table) => {
                        let f = IndexTickFormatter::new(table, *decimals);
                        locs.iter().map(|p| f.format(*p).to_string()).collect()
                    }
                    Err(_) => vec![String::new(); locs.len()],
                };
                ScalarLabels { labels, order_of_magnitude: 0 }
            }
        }
    }
}

/// Major/minor tick locations for a view range.
pub fn tick_locations(lo: f64, hi: f64, minor: bool) -> (Vec<f64>, Vec<f64>) {
    let majors = major_ticks(lo, hi, 6);
    let minors = if minor { minor_ticks(&majors, lo, hi) } else { Vec::new() };
    (majors, minors)
}

/// Formatted labels of one axis plus the shared power of ten, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarLabels {
    pub labels: Vec<String>,
    /// Labels are multiplied by `10^order_of_magnitude`; 0 means no offset text.
    pub order_of_magnitude: i32,
}

impl ScalarLabels {
    /// Mantissa and exponent of the offset text (`×10^n`), if shown.
    pub fn offset_text(&self) -> Option<(&'static str, String)> {
        (self.order_of_magnitude != 0).then(|| ("\u{00d7}10", unicode_minus(&self.order_of_magnitude.to_string())))
    }
}

/// Tick label formatter for value axes: plain decimals inside the scientific
/// limits, otherwise a common power of ten is factored out.
#[derive(Clone, Copy, Debug)]
pub struct ScalarFormatter {
    pub scilimits: (i32, i32),
    pub locale: NumberLocale,
}

impl ScalarFormatter {
    pub fn new(scilimits: (i32, i32), locale: NumberLocale) -> Self {
        Self { scilimits, locale }
    }

    /// Power of ten factored out of `locs`.
    pub fn order_of_magnitude(&self, locs: &[f64]) -> i32 {
        let max_abs = locs.iter().filter(|v| v.is_finite()).map(|v| v.abs()).fold(0.0, f64::max);
        if max_abs == 0.0 {
            return 0;
        }
        let oom = max_abs.log10().floor() as i32;
        if oom <= self.scilimits.0 || oom >= self.scilimits.1 { oom } else { 0 }
    }

    pub fn format_ticks(&self, locs: &[f64]) -> ScalarLabels {
        let oom = self.order_of_magnitude(locs);
        let scale = 10f64.powi(oom);
        let scaled: Vec<f64> = locs.iter().map(|v| v / scale).collect();
        let decimals = decimals_needed(&scaled);
        let labels = scaled
            .iter()
            .map(|v| {
                // avoid "-0.0"
                let v = if v.abs() < 10f64.powi(-(decimals as i32) - 1) { 0.0 } else { *v };
                unicode_minus(&self.locale.localize(&format!("{v:.decimals$}")))
            })
            .collect();
        ScalarLabels { labels, order_of_magnitude: oom }
    }
}

/// Fewest decimals (up to 10) that print every value exactly enough.
fn decimals_needed(values: &[f64]) -> usize {
    let step = values.windows(2).map(|w| (w[1] - w[0]).abs()).fold(f64::INFINITY, f64::min);
    let tol = if step.is_finite() && step > 0.0 { step * 1e-6 } else { 1e-9 };
    (0..=10)
        .find(|&d| {
            let p = 10f64.powi(d as i32);
            values.iter().all(|v| ((v * p).round() / p - v).abs() <= tol)
        })
        .unwrap_or(10)
}

/// Typographic minus for a leading `-`.
pub fn unicode_minus(s: &str) -> String {
    match s.strip_prefix('-') {
        Some(rest) => format!("\u{2212}{rest}"),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_follow_step() {
        assert_eq!(decimals_needed(&[0.0, 0.5, 1.0]), 1);
        assert_eq!(decimals_needed(&[0.0, 0.25, 0.5]), 2);
        assert_eq!(decimals_needed(&[0.0, 5.0, 10.0]), 0);
    }

    #[test]
    fn tight_x_has_no_margin() {
        assert_eq!(Axis::x().view_limits(Some((0.0, 20.0))), (0.0, 20.0));
        let (lo, hi) = Axis::y().view_limits(Some((-1.0, 1.0)));
        assert!((lo + 1.1).abs() < 1e-12 && (hi - 1.1).abs() < 1e-12);
    }
}
