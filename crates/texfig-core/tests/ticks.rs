// File: crates/texfig-core/tests/ticks.rs
// Purpose: Index-axis tick labels: zero, fixed-point, scientific and out-of-range positions.

use texfig_core::ticks::{format_tick, format_value};
use texfig_core::{AxisValueTable, IndexTickFormatter, TickLabel};

#[test]
fn exact_zero_is_bare_zero() {
    let values = [0.0, 10.0, 1000.0];
    let table = AxisValueTable::new(&values).unwrap();
    let label = format_tick(&table, 0.0, 2);
    assert_eq!(label, TickLabel::Zero);
    assert_eq!(label.to_string(), "0");
}

#[test]
fn large_values_use_scientific_notation() {
    let values = [0.0, 10.0, 1000.0];
    let table = AxisValueTable::new(&values).unwrap();
    assert_eq!(format_tick(&table, 2.0, 2).to_string(), "1.00e+03");
    assert_eq!(format_tick(&table, 1.0, 2).to_string(), "10.00");
    assert_eq!(format_value(12346.0, 2).to_string(), "1.23e+04");
    assert_eq!(format_value(-0.00025, 1).to_string(), "-2.5e-04");
}

#[test]
fn boundaries_of_fixed_range() {
    assert_eq!(format_value(0.001, 3).to_string(), "0.001");
    assert_eq!(format_value(999.5, 1).to_string(), "999.5");
    assert_eq!(format_value(0.000999, 2).to_string(), "9.99e-04");
}

#[test]
fn fractional_positions_truncate() {
    let values = [1.5, 2.5, 3.5];
    let f = IndexTickFormatter::new(AxisValueTable::new(&values).unwrap(), 1);
    assert_eq!(f.format(1.9).to_string(), "2.5");
    assert_eq!(f.format(-0.4).to_string(), "1.5");
}

#[test]
fn out_of_range_falls_back_to_first_value() {
    let values = [5.0];
    let table = AxisValueTable::new(&values).unwrap();
    assert_eq!(format_tick(&table, 7.0, 2), format_tick(&table, 0.0, 2));
    assert_eq!(format_tick(&table, -3.0, 2).to_string(), "5.00");
    assert_eq!(format_tick(&table, f64::NAN, 2).to_string(), "5.00");
}

#[test]
fn empty_table_is_an_error() {
    assert!(AxisValueTable::new(&[]).is_err());
}
