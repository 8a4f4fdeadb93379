// File: crates/texfig-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use texfig_core::{make_figure, FigureOptions, RenderOptions};

#[test]
fn render_rgba8_buffer() {
    let mut fig = make_figure(&FigureOptions::sized(2.0, 1.5, "in")).expect("figure");
    fig.ax().plot(&[0.0, 4.0], &[0.0, 4.0]);

    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = fig.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (200, 150));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is outside the axes: opaque white background.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn dpi_scales_pixels() {
    let opts = FigureOptions { dpi: 200.0, ..FigureOptions::sized(2.0, 1.0, "in") };
    let fig = make_figure(&opts).expect("figure");
    assert_eq!(fig.pixel_size(), (400, 200));
}
