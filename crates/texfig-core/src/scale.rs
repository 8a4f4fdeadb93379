// File: crates/texfig-core/src/scale.rs
// Summary: Linear data-to-pixel transform for one axis.

/// Maps data values in `[d0, d1]` onto pixels `[p0, p1]` (p1 < p0 for a y axis).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f32, p1: f32) -> Self {
        let d1 = if (d1 - d0).abs() < 1e-12 { d0 + 1.0 } else { d1 };
        Self { d0, d1, p0, p1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.p0 + ((v - self.d0) / (self.d1 - self.d0)) as f32 * (self.p1 - self.p0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        self.d0 + ((px - self.p0) / (self.p1 - self.p0)) as f64 * (self.d1 - self.d0)
    }

    pub fn contains(&self, v: f64) -> bool {
        let (lo, hi) = if self.d0 <= self.d1 { (self.d0, self.d1) } else { (self.d1, self.d0) };
        let eps = (hi - lo) * 1e-9;
        v >= lo - eps && v <= hi + eps
    }
}
