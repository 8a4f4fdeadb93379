// File: crates/texfig-core/src/colormap.rs
// Summary: Colour-scale bounds for image plots and linear-segmented colormaps.

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::field::ScalarField;

/// Value range mapped onto the full colormap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRange {
    pub min: f64,
    pub max: f64,
}

impl ColorRange {
    /// Pick colour bounds for `field`.
    ///
    /// An explicit `zmin`/`zmax` always wins for its side. A missing side is
    /// `-M`/`M` with `M = max|z|` when `center_around_zero` is set, otherwise the
    /// field's own minimum/maximum.
    pub fn select(field: &ScalarField, zmin: Option<f64>, zmax: Option<f64>, center_around_zero: bool) -> Self {
        let (data_min, data_max) = if center_around_zero {
            let m = field.abs_max().unwrap_or_else(|| {
                log::warn!("field has no finite values; colour range defaults to [-1, 1]");
                1.0
            });
            (-m, m)
        } else {
            field.min_max().unwrap_or_else(|| {
                log::warn!("field has no finite values; colour range defaults to [0, 1]");
                (0.0, 1.0)
            })
        };
        let range = Self { min: zmin.unwrap_or(data_min), max: zmax.unwrap_or(data_max) };
        log::debug!("color range [{}, {}] (center_around_zero={center_around_zero})", range.min, range.max);
        range
    }

    /// Position of `v` in the range, clamped to [0, 1]. Degenerate ranges map to 0.5.
    pub fn normalize(&self, v: f64) -> f64 {
        let span = self.max - self.min;
        if !span.is_finite() || span.abs() < f64::EPSILON {
            return 0.5;
        }
        ((v - self.min) / span).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    /// Diverging dark blue - blue - white - red - dark red.
    #[default]
    Seismic,
    Coolwarm,
    Viridis,
    Gray,
}

type Stop = (f32, [f32; 3]);

const SEISMIC: &[Stop] = &[
    (0.0, [0.0, 0.0, 0.3]),
    (0.25, [0.0, 0.0, 1.0]),
    (0.5, [1.0, 1.0, 1.0]),
    (0.75, [1.0, 0.0, 0.0]),
    (1.0, [0.5, 0.0, 0.0]),
];

const COOLWARM: &[Stop] = &[
    (0.0, [0.230, 0.299, 0.754]),
    (0.25, [0.552, 0.690, 0.996]),
    (0.5, [0.865, 0.865, 0.865]),
    (0.75, [0.958, 0.604, 0.482]),
    (1.0, [0.706, 0.016, 0.150]),
];

const VIRIDIS: &[Stop] = &[
    (0.0, [0.267, 0.005, 0.329]),
    (0.25, [0.229, 0.322, 0.546]),
    (0.5, [0.128, 0.567, 0.551]),
    (0.75, [0.369, 0.789, 0.383]),
    (1.0, [0.993, 0.906, 0.144]),
];

const GRAY: &[Stop] = &[(0.0, [0.0, 0.0, 0.0]), (1.0, [1.0, 1.0, 1.0])];

impl Colormap {
    fn stops(self) -> &'static [Stop] {
        match self {
            Colormap::Seismic => SEISMIC,
            Colormap::Coolwarm => COOLWARM,
            Colormap::Viridis => VIRIDIS,
            Colormap::Gray => GRAY,
        }
    }

    /// RGB in [0, 1] at position `t` (clamped), linearly interpolated between stops.
    pub fn rgb(self, t: f64) -> [f32; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) as f32 };
        let stops = self.stops();
        for w in stops.windows(2) {
            let (t0, c0) = w[0];
            let (t1, c1) = w[1];
            if t <= t1 {
                let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
                return [
                    c0[0] + (c1[0] - c0[0]) * f,
                    c0[1] + (c1[1] - c0[1]) * f,
                    c0[2] + (c1[2] - c0[2]) * f,
                ];
            }
        }
        stops[stops.len() - 1].1
    }

    pub fn color(self, t: f64) -> skia::Color {
        let [r, g, b] = self.rgb(t);
        let u = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        skia::Color::from_argb(255, u(r), u(g), u(b))
    }

    /// Colour for value `v` under `range`.
    pub fn map(self, range: &ColorRange, v: f64) -> skia::Color {
        self.color(range.normalize(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seismic_center_is_white() {
        assert_eq!(Colormap::Seismic.rgb(0.5), [1.0, 1.0, 1.0]);
        assert_eq!(Colormap::Seismic.rgb(-3.0), [0.0, 0.0, 0.3]);
        assert_eq!(Colormap::Seismic.rgb(7.0), [0.5, 0.0, 0.0]);
    }

    #[test]
    fn non_finite_field_falls_back() {
        let z = ScalarField::new(1, 2, vec![f64::NAN, f64::INFINITY]).unwrap();
        assert_eq!(ColorRange::select(&z, None, None, false), ColorRange { min: 0.0, max: 1.0 });
        assert_eq!(ColorRange::select(&z, None, None, true), ColorRange { min: -1.0, max: 1.0 });
    }

    #[test]
    fn degenerate_range_maps_to_middle() {
        let r = ColorRange { min: 2.0, max: 2.0 };
        assert_eq!(r.normalize(2.0), 0.5);
    }
}
