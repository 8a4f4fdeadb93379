// File: crates/texfig-core/src/render.rs
// Summary: Skia drawing helpers shared by axes, legend and colorbar rendering.

use skia_safe as skia;

use crate::axes::{TickDirection, TickParams};
use crate::cycle::{LineStyle, Rgb};
use crate::locale::NumberLocale;
use crate::style::FigureStyle;
use crate::text::{HAlign, TextShaper};
use crate::types::{FracRect, POINTS_PER_INCH};

/// Spine line width in points.
pub(crate) const SPINE_WIDTH_PT: f32 = 0.8;
/// Gap between tick marks and tick labels in points.
pub(crate) const TICK_LABEL_PAD_PT: f32 = 3.5;
/// Gap between tick labels and axis labels in points.
pub(crate) const AXIS_LABEL_PAD_PT: f32 = 4.0;

/// Everything a drawing helper needs besides the element itself.
pub(crate) struct DrawCtx<'a> {
    pub canvas: &'a skia::Canvas,
    pub width: f32,
    pub height: f32,
    /// Pixels per typographic point at the figure's dpi.
    pub px_per_pt: f32,
    pub style: &'a FigureStyle,
    /// `None` when labels are disabled.
    pub shaper: Option<&'a TextShaper>,
    pub text_color: skia::Color,
}

impl<'a> DrawCtx<'a> {
    pub fn new(canvas: &'a skia::Canvas, width: i32, height: i32, dpi: f64, style: &'a FigureStyle, shaper: Option<&'a TextShaper>) -> Self {
        Self {
            canvas,
            width: width as f32,
            height: height as f32,
            px_per_pt: (dpi / POINTS_PER_INCH) as f32,
            style,
            shaper,
            text_color: Rgb::BLACK.to_skia(),
        }
    }

    #[inline]
    pub fn pt(&self, v: f64) -> f32 {
        v as f32 * self.px_per_pt
    }

    pub fn locale(&self) -> NumberLocale {
        self.style.locale
    }

    pub fn tick_font_px(&self) -> f32 {
        self.pt(self.style.tick_font_size())
    }

    pub fn label_font_px(&self) -> f32 {
        self.pt(self.style.label_font_size())
    }

    /// Pixel rect of a figure-fraction rect (y flipped).
    pub fn px_rect(&self, r: &FracRect) -> skia::Rect {
        skia::Rect::from_ltrb(
            (r.left * self.width as f64) as f32,
            ((1.0 - r.top()) * self.height as f64) as f32,
            (r.right() * self.width as f64) as f32,
            ((1.0 - r.bottom) * self.height as f64) as f32,
        )
    }

    pub fn text(&self, text: &str, x: f32, y: f32, size: f32, align: HAlign) {
        if let Some(shaper) = self.shaper {
            shaper.draw(self.canvas, text, x, y, size, self.text_color, align);
        }
    }

    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        self.shaper.map_or(0.0, |s| s.measure_width(text, size))
    }
}

pub(crate) fn stroke_paint(color: skia::Color, width_px: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width_px);
    paint.set_color(color);
    paint
}

pub(crate) fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(false);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Stroke paint for a data line of `width_pt` in `style`.
pub(crate) fn line_paint(ctx: &DrawCtx<'_>, color: Rgb, style: &LineStyle, width_pt: f64) -> skia::Paint {
    let w = ctx.pt(width_pt);
    let mut paint = stroke_paint(color.to_skia(), w);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_stroke_cap(skia::paint::Cap::Butt);
    paint.set_path_effect(style.path_effect(w));
    paint
}

/// Polyline through `points`, split wherever a point is not finite.
pub(crate) fn polyline(points: impl IntoIterator<Item = Option<(f32, f32)>>) -> skia::Path {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for p in points {
        match p {
            Some((x, y)) if pen_down => {
                path.line_to((x, y));
            }
            Some((x, y)) => {
                path.move_to((x, y));
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    path
}

pub(crate) fn draw_frame(ctx: &DrawCtx<'_>, rect: skia::Rect) {
    let paint = stroke_paint(ctx.text_color, ctx.pt(SPINE_WIDTH_PT as f64));
    ctx.canvas.draw_rect(rect, &paint);
}

/// Which spine a set of ticks belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Bottom,
    Top,
    Left,
    Right,
}

/// Tick marks at pixel positions `at` along `side` of `rect`.
pub(crate) fn draw_ticks(ctx: &DrawCtx<'_>, rect: skia::Rect, side: Side, at: &[f32], length_pt: f64, params: &TickParams) {
    let len = ctx.pt(length_pt);
    let inward = if params.direction == TickDirection::In { 1.0 } else { -1.0 };
    let paint = stroke_paint(ctx.text_color, ctx.pt(params.width));
    for &p in at {
        let (a, b) = match side {
            Side::Bottom => ((p, rect.bottom), (p, rect.bottom - inward * len)),
            Side::Top => ((p, rect.top), (p, rect.top + inward * len)),
            Side::Left => ((rect.left, p), (rect.left + inward * len, p)),
            Side::Right => ((rect.right, p), (rect.right - inward * len, p)),
        };
        ctx.canvas.draw_line(a, b, &paint);
    }
}

/// Distance from the spine to the outer edge of outward ticks, in pixels.
pub(crate) fn tick_outset(ctx: &DrawCtx<'_>, params: &TickParams) -> f32 {
    match params.direction {
        TickDirection::In => 0.0,
        TickDirection::Out => ctx.pt(params.major_size),
    }
}
