// File: crates/texfig-examples/src/bin/other_axes.rs
// Summary: Explicit axes rect, plotted through a callback and saved in one go.

use anyhow::Result;
use texfig_core::grid::linspace;
use texfig_core::{make_figure, Axes, FigureOptions, FracRect};

fn plots(ax: &mut Axes, x: &[f64]) {
    let y1: Vec<f64> = x.iter().map(|v| 1e4 * v.sin()).collect();
    let y2: Vec<f64> = x.iter().map(|v| 1e4 * v.cos()).collect();
    ax.plot(x, &y1).set_label("sin");
    ax.plot(x, &y2).set_label("cos");
    ax.legend();
    ax.set_xlabel("x values");
    ax.set_ylabel("y values");
}

fn main() -> Result<()> {
    env_logger::init();

    let opts = FigureOptions {
        other_axes: Some(FracRect::new(0.17, 0.15, 0.95 - 0.15, 0.9 - 0.15)),
        ..FigureOptions::sized(10.0, 7.0, "cm")
    };
    let mut fig = make_figure(&opts)?;
    plots(fig.ax(), &linspace(0.0, 20.0, 300));

    let out = std::path::PathBuf::from("target/out/example_other_axes.png");
    fig.save(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
