// File: crates/texfig-examples/src/bin/subplots.rs
// Summary: Two stacked subplots sharing the x axis.

use anyhow::Result;
use texfig_core::grid::linspace;
use texfig_core::{make_figure, FigureOptions};

fn main() -> Result<()> {
    env_logger::init();

    let x1 = linspace(0.0, 20.0, 300);
    let y1: Vec<f64> = x1.iter().map(|v| v.sin()).collect();
    let x2: Vec<f64> = x1.iter().map(|v| 2.0 * v).collect();
    let y2: Vec<f64> = x2.iter().map(|v| v.cos()).collect();

    let opts = FigureOptions { num_subplots_x: 1, num_subplots_y: 2, sharex: true, ..FigureOptions::default() };
    let mut fig = make_figure(&opts)?;
    fig.axes[0].plot(&x1, &y1).set_label("sin");
    fig.axes[1].plot(&x2, &y2).set_label("cos");
    for ax in fig.axes.iter_mut() {
        ax.legend();
        ax.set_ylabel("y values");
    }
    fig.axes[1].set_xlabel("x values");

    let out = std::path::PathBuf::from("target/out/example_subplots.png");
    fig.save(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
