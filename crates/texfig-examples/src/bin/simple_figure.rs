// File: crates/texfig-examples/src/bin/simple_figure.rs
// Summary: Default figure with two scaled lines, legend and axis labels.

use anyhow::Result;
use texfig_core::grid::linspace;
use texfig_core::{make_figure, FigureOptions};

fn main() -> Result<()> {
    env_logger::init();

    let x = linspace(0.0, 2000.0, 300);
    let y1: Vec<f64> = x.iter().map(|v| 1e5 * (v / 100.0).sin()).collect();
    let y2: Vec<f64> = x.iter().map(|v| 0.5e5 * (v / 100.0).cos()).collect();

    let mut fig = make_figure(&FigureOptions::default())?;
    let ax = fig.ax();
    ax.plot(&x, &y1).set_label("sin");
    ax.plot(&x, &y2).set_label("cos");
    ax.legend();
    ax.set_xlabel("x values");
    ax.set_ylabel("y values");

    let out = std::path::PathBuf::from("target/out/example_simple_figure.png");
    fig.save(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
