// File: crates/texfig-core/src/figure.rs
// Summary: Figure and Axes models, figure construction from options, and the headless PNG pipeline.

use std::path::Path;

use skia_safe as skia;

use crate::axes::{tick_locations, Axis, TickParams, Y_LABEL_PAD};
use crate::config::FigureOptions;
use crate::contour::{colorbar_layout, draw_colorbar, draw_image, ImageLayer};
use crate::cycle::{PropCycle, Rgb};
use crate::error::{FigureError, Result};
use crate::layout::{axes_rects, backend_axes_rect};
use crate::render::{draw_frame, draw_ticks, line_paint, polyline, stroke_paint, tick_outset, DrawCtx, Side, AXIS_LABEL_PAD_PT, TICK_LABEL_PAD_PT};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::size::FigureSize;
use crate::style::FigureStyle;
use crate::text::{HAlign, TextShaper};
use crate::types::{FracRect, DEFAULT_DPI};

pub struct RenderOptions {
    pub background: skia::Color,
    /// Text is skipped entirely when false (deterministic output across font setups).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { background: Rgb::WHITE.to_skia(), draw_labels: true }
    }
}

/// Legend placement options; the legend sits in the upper-right corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Legend {
    /// Right-align the entry labels against the frame.
    pub align_right: bool,
}

pub struct Axes {
    /// Placement in figure fractions.
    pub rect: FracRect,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
    pub image: Option<ImageLayer>,
    pub legend: Option<Legend>,
    pub tick_params: TickParams,
    prop_cycle: PropCycle,
    next_line: usize,
}

impl Axes {
    pub fn new(rect: FracRect, style: &FigureStyle) -> Self {
        Self {
            rect,
            x_axis: Axis::x(),
            y_axis: Axis::y(),
            series: Vec::new(),
            image: None,
            legend: None,
            tick_params: style.tick_params,
            prop_cycle: style.prop_cycle.clone(),
            next_line: 0,
        }
    }

    /// Add a line through (x, y) styled by the next entry of the property cycle.
    pub fn plot(&mut self, x: &[f64], y: &[f64]) -> &mut Series {
        let (color, line_style) = self.prop_cycle.nth(self.next_line);
        self.next_line += 1;
        let idx = self.series.len();
        self.series.push(Series::from_xy(x, y, color, line_style));
        &mut self.series[idx]
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.x_axis.label = Some(label.into());
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.y_axis.label = Some(label.into());
    }

    pub fn set_xlim(&mut self, lo: f64, hi: f64) {
        self.x_axis.limits = Some((lo, hi));
    }

    pub fn set_ylim(&mut self, lo: f64, hi: f64) {
        self.y_axis.limits = Some((lo, hi));
    }

    pub fn legend(&mut self) {
        self.legend = Some(Legend::default());
    }

    /// Legend with labels right-aligned to the widest one.
    pub fn legend_align_right(&mut self) {
        self.legend = Some(Legend { align_right: true });
    }

    /// Finite data bounds over all line series.
    pub fn data_bounds(&self) -> (Option<(f64, f64)>, Option<(f64, f64)>) {
        let union = |a: Option<(f64, f64)>, b: (f64, f64)| Some(a.map_or(b, |a| (a.0.min(b.0), a.1.max(b.1))));
        self.series.iter().filter_map(Series::bounds).fold((None, None), |(xs, ys), (bx, by)| (union(xs, bx), union(ys, by)))
    }

    fn view_limits(&self) -> ((f64, f64), (f64, f64)) {
        let (bx, by) = self.data_bounds();
        (self.x_axis.view_limits(bx), self.y_axis.view_limits(by))
    }
}

pub struct Figure {
    pub style: FigureStyle,
    pub dpi: f64,
    /// Row-major from the top-left subplot.
    pub axes: Vec<Axes>,
    pub rows: usize,
    pub cols: usize,
    pub sharex: bool,
    pub sharey: bool,
}

impl Figure {
    /// Figure with one axes at the backend's default position.
    pub fn new(style: FigureStyle) -> Self {
        let ax = Axes::new(backend_axes_rect(), &style);
        Self { style, dpi: DEFAULT_DPI, axes: vec![ax], rows: 1, cols: 1, sharex: false, sharey: false }
    }

    /// Style the figure and lay out its axes from `opts`.
    pub fn make(opts: &FigureOptions) -> Result<Self> {
        let style = FigureStyle::setup(opts)?;
        let size = style.figure_size();
        let rects = axes_rects(opts, size.width)?;
        let axes = rects.into_iter().map(|r| Axes::new(r, &style)).collect::<Vec<_>>();
        log::debug!(
            "figure {:.3}x{:.3}in, {} axes ({}x{}), locale {:?}",
            size.width,
            size.height,
            axes.len(),
            opts.num_subplots_y,
            opts.num_subplots_x,
            style.locale
        );
        Ok(Self {
            style,
            dpi: if opts.dpi > 0.0 { opts.dpi } else { DEFAULT_DPI },
            axes,
            rows: opts.num_subplots_y,
            cols: opts.num_subplots_x,
            sharex: opts.sharex,
            sharey: opts.sharey,
        })
    }

    /// First (or only) axes.
    pub fn ax(&mut self) -> &mut Axes {
        &mut self.axes[0]
    }

    pub fn size_inches(&self) -> FigureSize {
        self.style.figure_size()
    }

    pub fn pixel_size(&self) -> (i32, i32) {
        self.size_inches().to_pixels(self.dpi)
    }

    /// Per-axes (x, y) view limits, unified across axes where shared.
    pub fn resolve_limits(&self) -> Vec<((f64, f64), (f64, f64))> {
        let mut limits: Vec<_> = self.axes.iter().map(Axes::view_limits).collect();
        let union = |v: &mut Vec<((f64, f64), (f64, f64))>, pick_x: bool| {
            let part = |l: &((f64, f64), (f64, f64))| if pick_x { l.0 } else { l.1 };
            let lo = v.iter().map(|l| part(l).0).fold(f64::INFINITY, f64::min);
            let hi = v.iter().map(|l| part(l).1).fold(f64::NEG_INFINITY, f64::max);
            for l in v.iter_mut() {
                if pick_x { l.0 = (lo, hi) } else { l.1 = (lo, hi) }
            }
        };
        if self.sharex && limits.len() > 1 {
            union(&mut limits, true);
        }
        if self.sharey && limits.len() > 1 {
            union(&mut limits, false);
        }
        limits
    }

    pub fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = self.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((w, h)).ok_or(FigureError::Surface)?;
        let canvas = surface.canvas();
        canvas.clear(opts.background);

        let shaper = opts.draw_labels.then(|| TextShaper::new(self.style.font_families()));
        let ctx = DrawCtx::new(canvas, w, h, self.dpi, &self.style, shaper.as_ref());
        for (i, (ax, (xlim, ylim))) in self.axes.iter().zip(self.resolve_limits()).enumerate() {
            let (row, col) = (i / self.cols.max(1), i % self.cols.max(1));
            let show_x = !self.sharex || row + 1 == self.rows;
            let show_y = !self.sharey || col == 0;
            draw_axes(&ctx, ax, xlim, ylim, show_x, show_y);
        }
        Ok(surface)
    }

    /// Render the figure to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        log::info!("wrote {}", path.display());
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image.encode_to_data(skia::EncodedImageFormat::PNG).ok_or(FigureError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels: (buffer, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = self.pixel_size();
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(FigureError::Surface);
        }
        Ok((px, w, h, stride))
    }

    /// Save to `path`; the format follows the extension and only `png` is rendered.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "png" => self.render_to_png(&RenderOptions::default(), path),
            _ => Err(FigureError::UnsupportedFormat(ext)),
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axes(ctx: &DrawCtx<'_>, ax: &Axes, xlim: (f64, f64), ylim: (f64, f64), show_x: bool, show_y: bool) {
    let outer = ctx.px_rect(&ax.rect);
    let (plot, bar) = match &ax.image {
        Some(_) => {
            let (p, b) = colorbar_layout(outer);
            (p, Some(b))
        }
        None => (outer, None),
    };
    let sx = LinearScale::new(xlim.0, xlim.1, plot.left, plot.right);
    let sy = LinearScale::new(ylim.0, ylim.1, plot.bottom, plot.top);

    ctx.canvas.save();
    ctx.canvas.clip_rect(plot, skia::ClipOp::Intersect, true);
    if let Some(img) = &ax.image {
        draw_image(ctx, img, &sx, &sy);
    }
    for s in &ax.series {
        let path = polyline(s.data_xy.iter().map(|&(x, y)| (x.is_finite() && y.is_finite()).then(|| (sx.to_px(x), sy.to_px(y)))));
        ctx.canvas.draw_path(&path, &line_paint(ctx, s.color, &s.line_style, s.line_width));
    }
    ctx.canvas.restore();

    draw_frame(ctx, plot);
    draw_axis_decorations(ctx, ax, plot, &sx, &sy, show_x, show_y);
    if let Some(legend) = &ax.legend {
        draw_legend(ctx, ax, plot, legend);
    }
    if let (Some(img), Some(bar)) = (&ax.image, bar) {
        draw_colorbar(ctx, img, bar);
    }
}

fn draw_axis_decorations(ctx: &DrawCtx<'_>, ax: &Axes, plot: skia::Rect, sx: &LinearScale, sy: &LinearScale, show_x: bool, show_y: bool) {
    let params = &ax.tick_params;
    let (xmaj, xmin) = tick_locations(sx.d0, sx.d1, params.minor_ticks);
    let (ymaj, ymin) = tick_locations(sy.d0, sy.d1, params.minor_ticks);
    let xmaj: Vec<f64> = xmaj.into_iter().filter(|v| sx.contains(*v)).collect();
    let ymaj: Vec<f64> = ymaj.into_iter().filter(|v| sy.contains(*v)).collect();
    let px = |s: &LinearScale, v: &[f64]| v.iter().map(|x| s.to_px(*x)).collect::<Vec<f32>>();
    let (xmaj_px, xmin_px, ymaj_px, ymin_px) = (px(sx, &xmaj), px(sx, &xmin), px(sy, &ymaj), px(sy, &ymin));

    draw_ticks(ctx, plot, Side::Bottom, &xmaj_px, params.major_size, params);
    draw_ticks(ctx, plot, Side::Bottom, &xmin_px, params.minor_size, params);
    draw_ticks(ctx, plot, Side::Left, &ymaj_px, params.major_size, params);
    draw_ticks(ctx, plot, Side::Left, &ymin_px, params.minor_size, params);
    if params.mirror {
        draw_ticks(ctx, plot, Side::Top, &xmaj_px, params.major_size, params);
        draw_ticks(ctx, plot, Side::Top, &xmin_px, params.minor_size, params);
        draw_ticks(ctx, plot, Side::Right, &ymaj_px, params.major_size, params);
        draw_ticks(ctx, plot, Side::Right, &ymin_px, params.minor_size, params);
    }

    let Some(shaper) = ctx.shaper else { return };
    let font = ctx.tick_font_px();
    let label_font = ctx.label_font_px();
    let pad = tick_outset(ctx, params) + ctx.pt(TICK_LABEL_PAD_PT as f64);

    // x tick labels, offset text and axis label
    let mut x_extent = pad;
    if show_x && ax.x_axis.show_tick_labels {
        let labels = ax.x_axis.tick_labels(&xmaj, ctx.locale());
        let base = plot.bottom + pad + font;
        for (label, x) in labels.labels.iter().zip(&xmaj_px) {
            ctx.text(label, *x, base, font, HAlign::Center);
        }
        x_extent = pad + font * 1.2;
        if let Some((b, e)) = labels.offset_text() {
            shaper.draw_power(ctx.canvas, b, &e, plot.right, base + font * 1.3, font, ctx.text_color, HAlign::Right);
            x_extent += font * 1.3;
        }
    }
    if let (true, Some(label)) = (show_x, &ax.x_axis.label) {
        let y = plot.bottom + x_extent + ctx.pt(AXIS_LABEL_PAD_PT as f64) + label_font * 0.8;
        ctx.text(label, plot.center_x(), y, label_font, HAlign::Center);
    }

    // y tick labels, offset text and axis label
    let mut widest = 0.0f32;
    if show_y && ax.y_axis.show_tick_labels {
        let labels = ax.y_axis.tick_labels(&ymaj, ctx.locale());
        let x = plot.left - pad;
        for (label, y) in labels.labels.iter().zip(&ymaj_px) {
            ctx.text(label, x, *y + font * 0.35, font, HAlign::Right);
            widest = widest.max(ctx.text_width(label, font));
        }
        if let Some((b, e)) = labels.offset_text() {
            shaper.draw_power(ctx.canvas, b, &e, plot.left, plot.top - font * 0.6, font, ctx.text_color, HAlign::Left);
        }
    }
    if let (true, Some(label)) = (show_y, &ax.y_axis.label) {
        let cx = plot.left - pad - widest - ctx.pt(Y_LABEL_PAD) - label_font * 0.5;
        shaper.draw_vertical(ctx.canvas, label, cx, plot.center_y(), label_font, ctx.text_color);
    }
}

fn draw_legend(ctx: &DrawCtx<'_>, ax: &Axes, plot: skia::Rect, legend: &Legend) {
    let entries: Vec<&Series> = ax.series.iter().filter(|s| s.label.is_some()).collect();
    if entries.is_empty() {
        return;
    }
    let font = ctx.pt(ctx.style.legend_font_size());
    let row_h = font * 1.4;
    let pad = font * 0.4;
    let handle = font * 2.0;
    let gap = font * 0.8;
    let label_w = entries.iter().filter_map(|s| s.label.as_deref()).map(|l| ctx.text_width(l, font)).fold(0.0f32, f32::max);

    let width = pad + handle + gap + label_w + pad;
    let height = pad * 2.0 + row_h * entries.len() as f32;
    let inset = font * 0.5;
    let frame = skia::Rect::from_ltrb(plot.right - inset - width, plot.top + inset, plot.right - inset, plot.top + inset + height);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(Rgb::WHITE.with_alpha(204));
    ctx.canvas.draw_round_rect(frame, font * 0.2, font * 0.2, &fill);
    let edge = stroke_paint(skia::Color::from_argb(204, 204, 204, 204), ctx.pt(0.8));
    ctx.canvas.draw_round_rect(frame, font * 0.2, font * 0.2, &edge);

    for (k, s) in entries.iter().enumerate() {
        let cy = frame.top + pad + row_h * (k as f32 + 0.5);
        let x0 = frame.left + pad;
        let path = polyline([Some((x0, cy)), Some((x0 + handle, cy))]);
        ctx.canvas.draw_path(&path, &line_paint(ctx, s.color, &s.line_style, s.line_width));
        let label = s.label.as_deref().unwrap_or_default();
        let baseline = cy + font * 0.35;
        if legend.align_right {
            ctx.text(label, frame.right - pad, baseline, font, HAlign::Right);
        } else {
            ctx.text(label, x0 + handle + gap, baseline, font, HAlign::Left);
        }
    }
}
