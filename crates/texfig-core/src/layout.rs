// File: crates/texfig-core/src/layout.rs
// Summary: Axes placement in figure-fraction coordinates: default rect, explicit rect, subplot grids.

use crate::config::FigureOptions;
use crate::error::{FigureError, Result};
use crate::types::FracRect;

/// Subplot margins of the plain backend (left, right, bottom, top) and gaps.
const SUBPLOT_LEFT: f64 = 0.125;
const SUBPLOT_RIGHT: f64 = 0.9;
const SUBPLOT_BOTTOM: f64 = 0.11;
const SUBPLOT_TOP: f64 = 0.88;
const SUBPLOT_WSPACE: f64 = 0.2;
const SUBPLOT_HSPACE: f64 = 0.2;

/// Rect the backend gives a lone axes.
pub fn backend_axes_rect() -> FracRect {
    FracRect::new(SUBPLOT_LEFT, SUBPLOT_BOTTOM, SUBPLOT_RIGHT - SUBPLOT_LEFT, SUBPLOT_TOP - SUBPLOT_BOTTOM)
}

/// Single-axes rect that leaves room for labels on small figures.
///
/// `off = 0.207 - 0.014 * width_in`; rect `[off, off, 1 - 1.5 off, 1 - 1.5 off]`.
pub fn default_axes_rect(fig_width_in: f64) -> FracRect {
    let xoff = 0.207 - 0.014 * fig_width_in;
    let yoff = xoff;
    FracRect::new(xoff, yoff, 1.0 - 1.5 * xoff, 1.0 - 1.5 * yoff)
}

/// Grid of `rows x cols` rects, row-major from the top-left cell.
pub fn subplot_grid(
    rows: usize,
    cols: usize,
    width_ratios: Option<&[f64]>,
    height_ratios: Option<&[f64]>,
    tight: bool,
) -> Result<Vec<FracRect>> {
    if rows == 0 || cols == 0 {
        return Err(FigureError::InvalidLayout(format!("{rows}x{cols} subplots")));
    }
    let (left, right, bottom, top, wspace, hspace) = if tight {
        (0.08, 0.98, 0.08, 0.97, 0.12, 0.12)
    } else {
        (SUBPLOT_LEFT, SUBPLOT_RIGHT, SUBPLOT_BOTTOM, SUBPLOT_TOP, SUBPLOT_WSPACE, SUBPLOT_HSPACE)
    };
    let widths = split(right - left, cols, wspace, width_ratios, "width_ratios")?;
    let heights = split(top - bottom, rows, hspace, height_ratios, "height_ratios")?;
    let w_gap = gap(right - left, cols, wspace);
    let h_gap = gap(top - bottom, rows, hspace);

    let mut rects = Vec::with_capacity(rows * cols);
    let mut y_top = top;
    for h in &heights {
        let mut x = left;
        for w in &widths {
            rects.push(FracRect::new(x, y_top - h, *w, *h));
            x += w + w_gap;
        }
        y_top -= h + h_gap;
    }
    Ok(rects)
}

/// Axes rects for a figure built from `opts`, given its width in inches.
pub fn axes_rects(opts: &FigureOptions, fig_width_in: f64) -> Result<Vec<FracRect>> {
    if opts.is_single_axes() {
        let rect = match (opts.default_axes, opts.other_axes) {
            (true, _) => backend_axes_rect(),
            (false, Some(r)) => r,
            (false, None) => default_axes_rect(fig_width_in),
        };
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Err(FigureError::InvalidLayout(format!("degenerate axes rect {rect:?}")));
        }
        log::debug!("single axes at {rect:?}");
        return Ok(vec![rect]);
    }
    subplot_grid(
        opts.num_subplots_y,
        opts.num_subplots_x,
        opts.width_ratios.as_deref(),
        opts.height_ratios.as_deref(),
        opts.tight_layout,
    )
}

fn gap(total: f64, n: usize, space: f64) -> f64 {
    let cell = total / (n as f64 + space * (n as f64 - 1.0));
    space * cell
}

fn split(total: f64, n: usize, space: f64, ratios: Option<&[f64]>, what: &str) -> Result<Vec<f64>> {
    let cell = total / (n as f64 + space * (n as f64 - 1.0));
    let avail = cell * n as f64;
    match ratios {
        None => Ok(vec![cell; n]),
        Some(r) if r.len() != n => Err(FigureError::InvalidLayout(format!("{what} has {} entries for {n} cells", r.len()))),
        Some(r) => {
            let sum: f64 = r.iter().sum();
            if !(sum > 0.0) || r.iter().any(|v| *v < 0.0) {
                return Err(FigureError::InvalidLayout(format!("{what} must be non-negative with a positive sum")));
            }
            Ok(r.iter().map(|v| avail * v / sum).collect())
        }
    }
}
