//! Benchmarks for themedit core operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fs;
use tempfile::TempDir;
use themedit::core::{load, named_colors, resolve, to_json_bytes, ColorSpec, ThemeDocument};

/// Generate a theme with N controls, alternating named and RGB colors.
fn generate_theme(n: usize) -> ThemeDocument {
    let names = named_colors();
    (0..n).fold(ThemeDocument::new("Bench"), |doc, i| {
        let spec = if i % 2 == 0 {
            ColorSpec::named(names[i % names.len()].0)
        } else {
            ColorSpec::rgb((i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8)
        };
        doc.with_entry(format!("Control{}", i), spec)
    })
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    let dir = TempDir::new().expect("tempdir");

    for size in [10, 100, 1_000, 10_000] {
        let bytes = to_json_bytes(&generate_theme(size)).expect("serialize");
        let path = dir.path().join(format!("theme-{}.json", size));
        fs::write(&path, &bytes).expect("write");

        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &path, |b, path| {
            b.iter(|| load(black_box(path)).expect("load"));
        });
    }

    group.finish();
}

fn bench_resolve_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_all");

    for size in [100, 1_000, 10_000] {
        let doc = generate_theme(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| {
                doc.entries
                    .values()
                    .map(|spec| resolve(black_box(spec)).luma_milli())
                    .sum::<u32>()
            });
        });
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let doc = generate_theme(1_000);
    c.bench_function("serialize_1000", |b| {
        b.iter(|| to_json_bytes(black_box(&doc)).expect("serialize"));
    });
}

criterion_group!(benches, bench_load, bench_resolve_all, bench_serialize);
criterion_main!(benches);
