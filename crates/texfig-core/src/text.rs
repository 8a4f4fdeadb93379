// File: crates/texfig-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with the figure's serif or sans font stack.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor of a text run relative to its reference x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
    families: Vec<String>,
}

impl TextShaper {
    pub fn new(families: &[&str]) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, families: families.iter().map(|f| f.to_string()).collect() }
    }

    fn make_style(&self, size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&self.families);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = self.make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` with its baseline at `y`, anchored at `x` per `align`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, align: HAlign) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match align {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - size * 0.8));
    }

    /// Draw `text` rotated 90 degrees counter-clockwise, centred on (`x`, `y`).
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        canvas.save();
        canvas.rotate(-90.0, Some(skia::Point::new(x, y)));
        self.draw(canvas, text, x, y + size * 0.35, size, color, HAlign::Center);
        canvas.restore();
    }

    /// Draw `base` followed by a raised, smaller `exponent` (e.g. `×10` and `4`).
    pub fn draw_power(&self, canvas: &skia::Canvas, base: &str, exponent: &str, x: f32, y: f32, size: f32, color: skia::Color, align: HAlign) {
        let sup = size * 0.7;
        let wb = self.measure_width(base, size);
        let we = self.measure_width(exponent, sup);
        let left = match align {
            HAlign::Left => x,
            HAlign::Center => x - (wb + we) * 0.5,
            HAlign::Right => x - wb - we,
        };
        self.draw(canvas, base, left, y, size, color, HAlign::Left);
        self.draw(canvas, exponent, left + wb, y - size * 0.45, sup, color, HAlign::Left);
    }
}
