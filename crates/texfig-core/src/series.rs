// File: crates/texfig-core/src/series.rs
// Summary: Line series model; colour and dash come from the figure's property cycle.

use crate::cycle::{LineStyle, Rgb};

#[derive(Clone, Debug)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    pub label: Option<String>,
    pub color: Rgb,
    pub line_style: LineStyle,
    /// Line width in points.
    pub line_width: f64,
}

impl Series {
    pub fn new(data_xy: Vec<(f64, f64)>, color: Rgb, line_style: LineStyle) -> Self {
        Self { data_xy, label: None, color, line_style, line_width: 1.5 }
    }

    /// Pair up `x` and `y`; extra values in the longer slice are dropped.
    pub fn from_xy(x: &[f64], y: &[f64], color: Rgb, line_style: LineStyle) -> Self {
        Self::new(x.iter().copied().zip(y.iter().copied()).collect(), color, line_style)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    /// Finite (x, y) bounds, `None` if no point is finite.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut it = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = it.next()?;
        let init = ((x0, x0), (y0, y0));
        Some(it.fold(init, |((xl, xh), (yl, yh)), &(x, y)| ((xl.min(x), xh.max(x)), (yl.min(y), yh.max(y)))))
    }
}
