// File: crates/texfig-core/tests/size.rs
// Purpose: Figure size completion and unit conversion.

use texfig_core::size::{FigureSize, LengthUnit};
use texfig_core::types::{CM_TO_INCHES, GOLDEN_MEAN, POINT_TO_INCHES};
use texfig_core::FigureError;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(1.0)
}

#[test]
fn both_dimensions_convert_with_unit_constants() {
    let s = FigureSize::compute(Some(345.0), Some(200.0), LengthUnit::Points).expect("size");
    assert!(close(s.width, 345.0 * POINT_TO_INCHES));
    assert!(close(s.height, 200.0 * POINT_TO_INCHES));

    let s = FigureSize::compute(Some(12.0), Some(8.0), LengthUnit::Centimeters).expect("size");
    assert!(close(s.width, 12.0 / 2.54));
    assert!(close(s.height, 8.0 * CM_TO_INCHES));

    let s = FigureSize::compute(Some(4.0), Some(3.0), LengthUnit::Inches).expect("size");
    assert_eq!((s.width, s.height), (4.0, 3.0));
}

#[test]
fn missing_height_uses_golden_mean() {
    for unit in [LengthUnit::Points, LengthUnit::Centimeters, LengthUnit::Inches] {
        let s = FigureSize::compute(Some(10.0), None, unit).expect("size");
        assert!(close(s.height, s.width * GOLDEN_MEAN), "{unit}");
    }
}

#[test]
fn missing_width_divides_by_golden_mean() {
    let s = FigureSize::compute(None, Some(3.0), LengthUnit::Inches).expect("size");
    assert!(close(s.width, 3.0 / GOLDEN_MEAN));
    assert_eq!(s.height, 3.0);
}

#[test]
fn zero_counts_as_missing() {
    let s = FigureSize::compute(Some(5.0), Some(0.0), LengthUnit::Inches).expect("size");
    assert!(close(s.height, 5.0 * GOLDEN_MEAN));

    let s = FigureSize::compute(Some(0.0), Some(3.0), LengthUnit::Inches).expect("size");
    assert!(close(s.width, 3.0 / GOLDEN_MEAN));
    assert_eq!(s.height, 3.0);

    assert_eq!(FigureSize::compute(Some(0.0), Some(0.0), LengthUnit::Inches), None);
}

#[test]
fn column_width_in_points_renders_with_height() {
    let s = FigureSize::compute_str(Some(345.0), Some(0.0), Some("pt")).expect("unit").expect("size");
    assert!(close(s.height, 345.0 * GOLDEN_MEAN * POINT_TO_INCHES));
    let (w, h) = s.to_pixels(100.0);
    assert_eq!(w, 477);
    assert!(h > 1, "height {h}");
}

#[test]
fn nothing_requested_keeps_default() {
    assert_eq!(FigureSize::compute(None, None, LengthUnit::Inches), None);
    assert!(FigureSize::compute_str(None, None, Some("in")).expect("no error").is_none());
    // The unit is not looked at when there is nothing to convert.
    assert!(FigureSize::compute_str(None, None, Some("bogus")).expect("no error").is_none());
}

#[test]
fn unknown_unit_is_rejected() {
    let err = FigureSize::compute_str(Some(1.0), Some(1.0), Some("bogus")).unwrap_err();
    assert!(matches!(err, FigureError::InvalidUnit(ref u) if u == "bogus"));
    let err = FigureSize::compute_str(Some(1.0), None, None).unwrap_err();
    assert!(matches!(err, FigureError::InvalidUnit(_)));
}
