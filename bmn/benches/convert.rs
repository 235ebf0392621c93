//! Benchmarks des conversions BMN ⇄ WGS84

use bmn::{to_geodetic, to_grid, BmnCoord, GeodeticPoint, Wgs84};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_to_grid(c: &mut Criterion) {
    let vienna = GeodeticPoint::<Wgs84>::new(48.208333, 16.372778, 171.0);

    c.bench_function("to_grid", |b| {
        b.iter(|| to_grid(black_box(&vienna), None).unwrap())
    });
}

fn bench_to_geodetic(c: &mut Criterion) {
    let coord = BmnCoord::parse("M34 753020.835 341104.125").unwrap();

    c.bench_function("to_geodetic", |b| {
        b.iter(|| to_geodetic(black_box(&coord)).unwrap())
    });
}

fn bench_parse_format(c: &mut Criterion) {
    let lines: Vec<String> = (0..1000)
        .map(|i| format!("M31 {} {}", 400000 + i * 37, 280000.5 + i as f64 * 11.25))
        .collect();

    let mut group = c.benchmark_group("text");
    group.throughput(Throughput::Elements(lines.len() as u64));

    group.bench_function("parse", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(BmnCoord::parse(black_box(line)).unwrap());
            }
        })
    });

    let coords: Vec<BmnCoord> = lines.iter().map(|l| BmnCoord::parse(l).unwrap()).collect();
    group.bench_function("format", |b| {
        b.iter(|| {
            for coord in &coords {
                black_box(coord.to_string());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_to_grid, bench_to_geodetic, bench_parse_format);
criterion_main!(benches);
