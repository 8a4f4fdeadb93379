// File: crates/texfig-core/src/field.rs
// Summary: Dense 2D scalar field z[i][j] (i along x, j along y) for image/contour plots.

use crate::error::{FigureError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    nx: usize,
    ny: usize,
    /// Row-major over x: `data[i * ny + j]`.
    data: Vec<f64>,
}

impl ScalarField {
    /// Build from `nx * ny` values laid out as `z[i][j]` row-major.
    pub fn new(nx: usize, ny: usize, data: Vec<f64>) -> Result<Self> {
        if nx == 0 || ny == 0 {
            return Err(FigureError::EmptyGrid);
        }
        if data.len() != nx * ny {
            return Err(FigureError::GridShape { expected: (nx, ny), actual: (data.len(), 1) });
        }
        Ok(Self { nx, ny, data })
    }

    /// Build from nested rows, one row per x value.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let nx = rows.len();
        let ny = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != ny) {
            return Err(FigureError::GridShape { expected: (nx, ny), actual: (nx, bad.len()) });
        }
        Self::new(nx, ny, rows.concat())
    }

    /// Evaluate `f(x[i], y[j])` on the tensor grid of the two axes.
    pub fn from_fn(x: &[f64], y: &[f64], f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        let data = x.iter().flat_map(|&xi| y.iter().map(move |&yj| (xi, yj))).map(|(a, b)| f(a, b)).collect();
        Self::new(x.len(), y.len(), data)
    }

    pub fn shape(&self) -> (usize, usize) { (self.nx, self.ny) }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 { self.data[i * self.ny + j] }

    pub fn values(&self) -> &[f64] { &self.data }

    /// (min, max) over finite cells, `None` if no cell is finite.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in self.data.iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo.is_finite() { Some((lo, hi)) } else { None }
    }

    /// max |z| over finite cells.
    pub fn abs_max(&self) -> Option<f64> {
        self.data.iter().filter(|v| v.is_finite()).map(|v| v.abs()).reduce(f64::max)
    }
}
