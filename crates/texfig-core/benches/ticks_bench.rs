// File: crates/texfig-core/benches/ticks_bench.rs
// Summary: Tick label formatting throughput for index and value axes.

use texfig_core::axes::ScalarFormatter;
use texfig_core::grid::linspace;
use texfig_core::{AxisValueTable, IndexTickFormatter, NumberLocale};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn bench_index_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_labels");
    for &n in &[1_000usize, 100_000usize] {
        let values = linspace(-2.0e-4, 5.0e3, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            let f = IndexTickFormatter::new(AxisValueTable::new(values).expect("table"), 2);
            b.iter(|| {
                for i in 0..values.len() {
                    black_box(f.format(i as f64));
                }
            });
        });
    }
    group.finish();
}

fn bench_scalar_labels(c: &mut Criterion) {
    let locs = [0.0, 2.0e4, 4.0e4, 6.0e4, 8.0e4, 1.0e5];
    c.bench_function("scalar_labels_de", |b| {
        let f = ScalarFormatter::new((-3, 3), NumberLocale::German);
        b.iter(|| black_box(f.format_ticks(black_box(&locs))));
    });
}

criterion_group!(benches, bench_index_labels, bench_scalar_labels);
criterion_main!(benches);
