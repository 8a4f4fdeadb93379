// File: crates/texfig-examples/src/bin/custom_figure.rs
// Summary: Sans-serif 10x7 cm figure with German number format and the backend's axes placement.

use anyhow::Result;
use texfig_core::grid::linspace;
use texfig_core::{make_figure, Figure, FigureOptions};

/// Project-wide figure defaults, so each plot does not repeat them.
fn my_make_figure() -> Result<Figure> {
    let opts = FigureOptions {
        serif: false,
        de: true,
        default_axes: true,
        ..FigureOptions::sized(10.0, 7.0, "cm")
    };
    Ok(make_figure(&opts)?)
}

fn main() -> Result<()> {
    env_logger::init();

    let x = linspace(0.0, 20.0, 300);
    let y1: Vec<f64> = x.iter().map(|v| 1e4 * v.sin()).collect();
    let y2: Vec<f64> = x.iter().map(|v| 1e4 * v.cos()).collect();

    let mut fig = my_make_figure()?;
    let ax = fig.ax();
    ax.plot(&x, &y1).set_label("sin");
    ax.plot(&x, &y2).set_label("cos");
    ax.legend_align_right();
    ax.set_xlabel("x values");
    ax.set_ylabel("y values");

    let out = std::path::PathBuf::from("target/out/example_custom_figure.png");
    fig.save(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
