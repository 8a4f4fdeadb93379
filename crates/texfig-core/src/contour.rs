// File: crates/texfig-core/src/contour.rs
// Summary: Contour/heatmap plot of a 2D field on index axes, with colorbar.

use skia_safe as skia;

use crate::axes::{tick_locations, ScalarFormatter, TickLabelMode};
use crate::colormap::{ColorRange, Colormap};
use crate::error::{FigureError, Result};
use crate::field::ScalarField;
use crate::figure::Axes;
use crate::render::{draw_frame, draw_ticks, fill_paint, tick_outset, DrawCtx, Side, TICK_LABEL_PAD_PT, AXIS_LABEL_PAD_PT};
use crate::scale::LinearScale;
use crate::text::HAlign;

/// Colorbar height relative to its axes.
pub const COLORBAR_SHRINK: f32 = 0.7;
/// Colorbar long-to-short side ratio.
pub const COLORBAR_ASPECT: f32 = 10.0;
/// Share of the parent axes width given to the colorbar, and the gap before it.
const COLORBAR_FRACTION: f32 = 0.15;
const COLORBAR_PAD: f32 = 0.05;
/// Colorbar labels use the backend's wider scientific limits.
const COLORBAR_SCILIMITS: (i32, i32) = (-5, 6);
const COLORBAR_STEPS: usize = 256;

#[derive(Clone, Debug)]
pub struct ContourOptions {
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Colorbar label.
    pub z_label: Option<String>,
    pub zmin: Option<f64>,
    pub zmax: Option<f64>,
    pub x_decimals: usize,
    pub y_decimals: usize,
    pub colormap: Colormap,
    pub center_around_zero: bool,
}

impl Default for ContourOptions {
    fn default() -> Self {
        Self {
            x_label: None,
            y_label: None,
            z_label: None,
            zmin: None,
            zmax: None,
            x_decimals: 2,
            y_decimals: 2,
            colormap: Colormap::Seismic,
            center_around_zero: false,
        }
    }
}

/// Image layer owned by an [`Axes`] once a contour plot has been added.
#[derive(Clone, Debug)]
pub struct ImageLayer {
    pub field: ScalarField,
    pub colormap: Colormap,
    pub range: ColorRange,
    pub z_label: Option<String>,
}

/// Draw `z` (shape `[x.len(), y.len()]`) on `ax` as an image addressed by cell index,
/// with tick labels taken from `x` and `y` and a colorbar.
pub fn contourplot(ax: &mut Axes, x: &[f64], y: &[f64], z: &ScalarField, opts: &ContourOptions) -> Result<ColorRange> {
    if x.is_empty() || y.is_empty() {
        return Err(FigureError::EmptyAxisTable);
    }
    if z.shape() != (x.len(), y.len()) {
        return Err(FigureError::GridShape { expected: (x.len(), y.len()), actual: z.shape() });
    }
    let range = ColorRange::select(z, opts.zmin, opts.zmax, opts.center_around_zero);

    ax.x_axis.label_mode = TickLabelMode::Index { values: x.to_vec(), decimals: opts.x_decimals };
    ax.y_axis.label_mode = TickLabelMode::Index { values: y.to_vec(), decimals: opts.y_decimals };
    ax.x_axis.limits = Some((0.0, (x.len() - 1) as f64));
    ax.y_axis.limits = Some((0.0, (y.len() - 1) as f64));
    if let Some(l) = &opts.x_label {
        ax.set_xlabel(l.clone());
    }
    if let Some(l) = &opts.y_label {
        ax.set_ylabel(l.clone());
    }
    ax.image = Some(ImageLayer { field: z.clone(), colormap: opts.colormap, range, z_label: opts.z_label.clone() });
    Ok(range)
}

/// Split an axes rect into the shrunken plot area and the colorbar rect.
pub(crate) fn colorbar_layout(parent: skia::Rect) -> (skia::Rect, skia::Rect) {
    let w = parent.width();
    let plot = skia::Rect::from_ltrb(parent.left, parent.top, parent.left + w * (1.0 - COLORBAR_FRACTION - COLORBAR_PAD), parent.bottom);
    let bar_h = parent.height() * COLORBAR_SHRINK;
    let bar_w = bar_h / COLORBAR_ASPECT;
    let left = plot.right + w * COLORBAR_PAD;
    let top = parent.top + (parent.height() - bar_h) * 0.5;
    (plot, skia::Rect::from_ltrb(left, top, left + bar_w, top + bar_h))
}

/// Cells of the image, one rect per cell centred on its index (origin lower-left).
pub(crate) fn draw_image(ctx: &DrawCtx<'_>, img: &ImageLayer, sx: &LinearScale, sy: &LinearScale) {
    let (nx, ny) = img.field.shape();
    for i in 0..nx {
        let x0 = sx.to_px(i as f64 - 0.5);
        let x1 = sx.to_px(i as f64 + 0.5);
        for j in 0..ny {
            let v = img.field.get(i, j);
            if !v.is_finite() {
                continue;
            }
            let y0 = sy.to_px(j as f64 - 0.5);
            let y1 = sy.to_px(j as f64 + 0.5);
            let rect = skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1));
            ctx.canvas.draw_rect(rect, &fill_paint(img.colormap.map(&img.range, v)));
        }
    }
}

pub(crate) fn draw_colorbar(ctx: &DrawCtx<'_>, img: &ImageLayer, bar: skia::Rect) {
    let h = bar.height();
    for k in 0..COLORBAR_STEPS {
        let t0 = k as f32 / COLORBAR_STEPS as f32;
        let t1 = (k + 1) as f32 / COLORBAR_STEPS as f32;
        let band = skia::Rect::from_ltrb(bar.left, bar.bottom - h * t1, bar.right, bar.bottom - h * t0 + 0.5);
        let t = (k as f64 + 0.5) / COLORBAR_STEPS as f64;
        ctx.canvas.draw_rect(band, &fill_paint(img.colormap.color(t)));
    }
    draw_frame(ctx, bar);

    let (lo, hi) = (img.range.min, img.range.max);
    let scale = LinearScale::new(lo, hi, bar.bottom, bar.top);
    let (majors, _) = tick_locations(lo.min(hi), lo.max(hi), false);
    let majors: Vec<f64> = majors.into_iter().filter(|v| scale.contains(*v)).collect();
    let px: Vec<f32> = majors.iter().map(|v| scale.to_px(*v)).collect();
    let mut params = ctx.style.tick_params;
    params.direction = crate::axes::TickDirection::Out;
    draw_ticks(ctx, bar, Side::Right, &px, params.major_size, &params);

    let font = ctx.tick_font_px();
    let labels = ScalarFormatter::new(COLORBAR_SCILIMITS, ctx.locale()).format_ticks(&majors);
    let x = bar.right + tick_outset(ctx, &params) + ctx.pt(TICK_LABEL_PAD_PT as f64);
    let mut widest = 0.0f32;
    for (label, y) in labels.labels.iter().zip(&px) {
        ctx.text(label, x, *y + font * 0.35, font, HAlign::Left);
        widest = widest.max(ctx.text_width(label, font));
    }
    if let (Some(shaper), Some((base, exp))) = (ctx.shaper, labels.offset_text()) {
        shaper.draw_power(ctx.canvas, base, &exp, bar.left, bar.top - font * 0.5, font, ctx.text_color, HAlign::Left);
    }
    if let (Some(shaper), Some(label)) = (ctx.shaper, &img.z_label) {
        let size = ctx.label_font_px();
        let cx = x + widest + ctx.pt(AXIS_LABEL_PAD_PT as f64) + size * 0.5;
        shaper.draw_vertical(ctx.canvas, label, cx, bar.center_y(), size, ctx.text_color);
    }
}
