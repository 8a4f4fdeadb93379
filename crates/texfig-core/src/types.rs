// File: crates/texfig-core/src/types.rs
// Summary: Shared constants (unit conversions, golden mean, defaults) and small layout types.

/// Inches per TeX point (1 in = 72.27 pt).
pub const POINT_TO_INCHES: f64 = 1.0 / 72.27;
/// Inches per centimetre.
pub const CM_TO_INCHES: f64 = 1.0 / 2.54;
/// (sqrt(5) - 1) / 2, used to derive a missing figure dimension.
pub const GOLDEN_MEAN: f64 = 0.618_033_988_749_894_8;

/// Figure size used when no override is requested, in inches.
pub const DEFAULT_FIGSIZE: (f64, f64) = (6.4, 4.8);
/// Raster resolution when none is configured.
pub const DEFAULT_DPI: f64 = 100.0;
/// Base font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;
/// Tick, legend and tick-label fonts are scaled by this factor.
pub const SMALL_FONT_FACTOR: f64 = 0.7;
/// Typographic points per inch used by the renderer.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Rectangle in figure-fraction coordinates: origin bottom-left, 0..1 on both axes.
/// Same convention as `[left, bottom, width, height]` axes rects.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FracRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl FracRect {
    pub const fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self { left, bottom, width, height }
    }
    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn top(&self) -> f64 { self.bottom + self.height }
}

impl From<[f64; 4]> for FracRect {
    fn from(r: [f64; 4]) -> Self {
        Self::new(r[0], r[1], r[2], r[3])
    }
}
