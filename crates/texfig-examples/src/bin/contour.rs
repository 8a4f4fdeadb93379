// File: crates/texfig-examples/src/bin/contour.rs
// Summary: Contour plot of z = x * y with a non-uniform y table, centred colour scale and colorbar.

use anyhow::Result;
use texfig_core::grid::linspace;
use texfig_core::{contourplot, make_figure, ContourOptions, FigureOptions, ScalarField};

fn main() -> Result<()> {
    env_logger::init();

    let x = linspace(-10.0, 10.0, 300);
    let y: Vec<f64> = (0..100).map(|i| (i * i) as f64).collect();
    let z = ScalarField::from_fn(&x, &y, |a, b| a * b)?;

    let mut fig = make_figure(&FigureOptions::sized(12.0, 0.0, "cm"))?;
    let opts = ContourOptions {
        x_label: Some("x values".into()),
        y_label: Some("y values".into()),
        z_label: Some("z values".into()),
        y_decimals: 0,
        center_around_zero: true,
        ..ContourOptions::default()
    };
    contourplot(fig.ax(), &x, &y, &z, &opts)?;

    let out = std::path::PathBuf::from("target/out/example_contour.png");
    fig.save(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
