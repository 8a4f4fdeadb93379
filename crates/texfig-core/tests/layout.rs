// File: crates/texfig-core/tests/layout.rs
// Purpose: Axes placement for single axes and subplot grids.

use texfig_core::layout::{axes_rects, default_axes_rect, subplot_grid};
use texfig_core::{FigureError, FigureOptions, FracRect};

#[test]
fn default_rect_depends_on_width() {
    let r = default_axes_rect(5.0);
    let off = 0.207 - 0.014 * 5.0;
    assert!((r.left - off).abs() < 1e-12);
    assert!((r.width - (1.0 - 1.5 * off)).abs() < 1e-12);
}

#[test]
fn explicit_rect_wins_unless_default_axes() {
    let mut opts = FigureOptions::default();
    opts.other_axes = Some(FracRect::from([0.2, 0.2, 0.7, 0.7]));
    assert_eq!(axes_rects(&opts, 4.0).unwrap(), vec![FracRect::new(0.2, 0.2, 0.7, 0.7)]);
    opts.default_axes = true;
    assert_eq!(axes_rects(&opts, 4.0).unwrap()[0].left, 0.125);
}

#[test]
fn grid_is_row_major_from_top_left() {
    let rects = subplot_grid(2, 3, None, None, false).unwrap();
    assert_eq!(rects.len(), 6);
    assert!(rects[0].bottom > rects[3].bottom);
    assert!(rects[0].left < rects[1].left && rects[1].left < rects[2].left);
    assert!(rects.iter().all(|r| r.right() <= 0.9 + 1e-12 && r.top() <= 0.88 + 1e-12));
}

#[test]
fn ratios_scale_cells() {
    let rects = subplot_grid(1, 2, Some(&[2.0, 1.0]), None, false).unwrap();
    assert!((rects[0].width / rects[1].width - 2.0).abs() < 1e-9);
}

#[test]
fn bad_grids_are_errors() {
    assert!(matches!(subplot_grid(0, 2, None, None, false), Err(FigureError::InvalidLayout(_))));
    assert!(matches!(subplot_grid(1, 2, Some(&[1.0]), None, false), Err(FigureError::InvalidLayout(_))));
}
