// File: crates/texfig-core/tests/smoke.rs
// Purpose: End-to-end renders writing PNGs for a line figure, subplots and a contour plot.

use texfig_core::grid::linspace;
use texfig_core::{contourplot, make_figure, ContourOptions, FigureOptions, RenderOptions, ScalarField};

#[test]
fn render_line_figure_png() {
    let mut fig = make_figure(&FigureOptions::sized(345.0, 0.0, "pt")).expect("figure");
    let (w, h) = fig.pixel_size();
    assert!(w > 1 && h > 1, "degenerate pixel size {w}x{h}");
    let x = linspace(0.0, 6.0, 50);
    let ax = fig.ax();
    for k in 0..3 {
        let y: Vec<f64> = x.iter().map(|v| (v + k as f64).sin()).collect();
        ax.plot(&x, &y).set_label(format!("line {k}"));
    }
    ax.set_xlabel("$x$");
    ax.set_ylabel("$y$");
    ax.legend();

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    fig.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = fig.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_shared_subplots() {
    let opts = FigureOptions {
        num_subplots_x: 2,
        num_subplots_y: 2,
        sharex: true,
        sharey: true,
        de: true,
        ..FigureOptions::sized(12.0, 9.0, "cm")
    };
    let mut fig = make_figure(&opts).expect("figure");
    let x = linspace(0.0, 1.0, 20);
    for (i, ax) in fig.axes.iter_mut().enumerate() {
        let y: Vec<f64> = x.iter().map(|v| v * (i + 1) as f64 * 1e4).collect();
        ax.plot(&x, &y);
    }
    let limits = fig.resolve_limits();
    assert!(limits.windows(2).all(|w| w[0] == w[1]));
    fig.save("target/test_out/subplots.png").expect("save");
}

#[test]
fn render_contour_with_colorbar() {
    let mut fig = make_figure(&FigureOptions::sized(10.0, 8.0, "cm")).expect("figure");
    let x = linspace(-1.0, 1.0, 30);
    let y = linspace(0.0, 2000.0, 20);
    let z = ScalarField::from_fn(&x, &y, |a, b| a * (b / 500.0).cos()).expect("field");
    let opts = ContourOptions {
        x_label: Some("x".into()),
        y_label: Some("y".into()),
        z_label: Some("z".into()),
        center_around_zero: true,
        ..ContourOptions::default()
    };
    let range = contourplot(fig.ax(), &x, &y, &z, &opts).expect("contour");
    assert_eq!(range.min, -range.max);
    fig.render_to_png(&RenderOptions::default(), "target/test_out/contour.png").expect("render");
}

#[test]
fn contour_rejects_mismatched_grid() {
    let mut fig = make_figure(&FigureOptions::default()).expect("figure");
    let z = ScalarField::new(2, 2, vec![0.0; 4]).expect("field");
    assert!(contourplot(fig.ax(), &[0.0, 1.0, 2.0], &[0.0, 1.0], &z, &ContourOptions::default()).is_err());
    assert!(contourplot(fig.ax(), &[], &[0.0, 1.0], &z, &ContourOptions::default()).is_err());
}

#[test]
fn unsupported_extension() {
    let fig = make_figure(&FigureOptions::default()).expect("figure");
    assert!(fig.save("target/test_out/figure.pdf").is_err());
}
