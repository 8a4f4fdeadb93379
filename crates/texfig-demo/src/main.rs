// File: crates/texfig-demo/src/main.rs
// Summary: Demo renders a line figure and a contour figure to PNGs, optionally styled by a JSON options file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use texfig_core::grid::linspace;
use texfig_core::{contourplot, make_figure, ContourOptions, FigureOptions, RenderOptions, ScalarField};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Accept an options file from CLI, else a column-width figure in points
    let opts = match std::env::args().nth(1) {
        Some(raw) => load_options(Path::new(&raw))?,
        None => FigureOptions::sized(345.0, 0.0, "pt"),
    };
    let size = texfig_core::FigureStyle::setup(&opts)
        .context("invalid figure options")?
        .figure_size();
    log::info!("figure size {:.3} x {:.3} in at {} dpi", size.width, size.height, opts.dpi);

    let render = RenderOptions::default();

    // 1) Two scaled lines with legend; y labels get a x10^4 offset
    let mut fig = make_figure(&opts).context("building line figure")?;
    let x = linspace(0.0, 20.0, 300);
    let sin: Vec<f64> = x.iter().map(|v| 1e4 * v.sin()).collect();
    let cos: Vec<f64> = x.iter().map(|v| 1e4 * v.cos()).collect();
    for ax in fig.axes.iter_mut() {
        ax.plot(&x, &sin).set_label("sin");
        ax.plot(&x, &cos).set_label("cos");
        ax.legend();
        ax.set_xlabel("x values");
        ax.set_ylabel("y values");
    }
    let out_lines = out_name("lines");
    fig.render_to_png(&render, &out_lines)
        .with_context(|| format!("writing {}", out_lines.display()))?;

    // 2) Contour of z = x * y^2 indexed by its tables
    let mut fig = make_figure(&FigureOptions { num_subplots_x: 1, num_subplots_y: 1, ..opts.clone() })
        .context("building contour figure")?;
    let x = linspace(0.0, 20.0, 300);
    let y: Vec<f64> = (0..100).map(|i| (i * i) as f64).collect();
    let z = ScalarField::from_fn(&x, &y, |a, b| a * b)?;
    let contour = ContourOptions {
        x_label: Some("x".into()),
        y_label: Some("y".into()),
        z_label: Some("z".into()),
        ..ContourOptions::default()
    };
    let range = contourplot(fig.ax(), &x, &y, &z, &contour)?;
    log::info!("contour colour range [{}, {}]", range.min, range.max);
    let out_contour = out_name("contour");
    fig.render_to_png(&render, &out_contour)
        .with_context(|| format!("writing {}", out_contour.display()))?;

    Ok(())
}

fn load_options(path: &Path) -> Result<FigureOptions> {
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    let opts = FigureOptions::from_json_file(path)
        .with_context(|| format!("failed to load options '{}'", path.display()))?;
    log::info!("using options from {}", path.display());
    Ok(opts)
}

/// Produce output file name like target/out/texfig_<suffix>.png
fn out_name(suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!("texfig_{suffix}.png"));
    out
}
