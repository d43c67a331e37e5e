//! Properties parse/render benchmarks for craftctl_core.
//!
//! Run with: `cargo bench -p craftctl_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use craftctl_core::defaults::DEFAULT_PROPERTIES;
use craftctl_core::properties::{parse, render, Properties};

fn sample_text() -> String {
    let mut props: Properties = DEFAULT_PROPERTIES
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    for i in 0..200 {
        props.insert(format!("plugin-setting-{i}"), format!("value {i}"));
    }
    format!("#Minecraft server properties\n{}", render(&props))
}

/// Runs properties benchmarks for the craftctl_core crate.
pub fn properties_benchmark(c: &mut Criterion) {
    let text = sample_text();
    let parsed = parse(&text);

    c.bench_function("parse_properties", |b| b.iter(|| parse(black_box(&text))));
    c.bench_function("render_properties", |b| b.iter(|| render(black_box(&parsed))));
}

criterion_group!(benches, properties_benchmark);
criterion_main!(benches);
