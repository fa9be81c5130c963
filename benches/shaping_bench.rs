use criterion::{criterion_group, criterion_main, Criterion};
use esm_input::transformations::shaping::{apply_factor, apply_mode};
use esm_input::ParseMode;
use polars::prelude::*;
use std::hint::black_box;

fn labels(rows: usize) -> Vec<String> {
    (0..rows).map(|i| format!("cluster_{i}")).collect()
}

fn table_frame(rows: usize) -> DataFrame {
    let values: Vec<f64> = (0..rows).map(|i| i as f64 * 0.5).collect();
    df!(
        "region" => labels(rows),
        "cluster_0" => &values,
        "cluster_1" => &values,
        "cluster_2" => &values,
    )
    .unwrap()
}

fn series_frame(rows: usize) -> DataFrame {
    let values: Vec<f64> = (0..rows).map(|i| i as f64 * 0.5).collect();
    df!(
        "region" => labels(rows),
        "capacity" => &values,
    )
    .unwrap()
}

fn bench_shaping(c: &mut Criterion) {
    let table = table_frame(10_000);
    c.bench_function("shape_table_10k", |b| {
        b.iter(|| apply_mode(black_box(table.clone()), ParseMode::Table).unwrap())
    });

    let series = series_frame(10_000);
    c.bench_function("scale_series_10k", |b| {
        b.iter(|| apply_factor(black_box(series.clone()), ParseMode::Series, 0.3).unwrap())
    });
}

criterion_group!(benches, bench_shaping);
criterion_main!(benches);
