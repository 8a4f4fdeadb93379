// File: crates/texfig-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small figure to PNG bytes (no text).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use texfig_core::{contourplot, make_figure, ContourOptions, Figure, FigureOptions, RenderOptions, ScalarField};

fn line_figure() -> Figure {
    let mut fig = make_figure(&FigureOptions::sized(3.0, 2.0, "in")).expect("figure");
    let ax = fig.ax();
    ax.plot(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 0.0, 1.5, 1.0]);
    ax.plot(&[0.0, 1.0, 2.0, 3.0, 4.0], &[1.0, 0.5, 0.8, 0.2, 0.0]);
    fig
}

fn contour_figure() -> Figure {
    let mut fig = make_figure(&FigureOptions::sized(3.0, 2.0, "in")).expect("figure");
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 0.5, 1.0];
    let z = ScalarField::from_fn(&x, &y, |a, b| a - 2.0 * b).expect("field");
    contourplot(fig.ax(), &x, &y, &z, &ContourOptions::default()).expect("contour");
    fig
}

fn check_snapshot(name: &str, fig: &Figure) {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let bytes = fig.render_to_png_bytes(&opts).expect("render bytes");
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(name);

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn golden_line_figure() {
    check_snapshot("line_figure.png", &line_figure());
}

#[test]
fn golden_contour_figure() {
    check_snapshot("contour_figure.png", &contour_figure());
}
