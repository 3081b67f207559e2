use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use itertools::Itertools;
use sheetnest::entities::{Part, RotationMode, SheetSpec};
use sheetnest::geometry::primitives::{Point, Rect, SPolygon};
use sheetnest::nest;
use sheetnest::packing::ShelfPacker;
use sheetnest::util::{NestConfig, PackConfig};

criterion_main!(benches);
criterion_group!(benches, pack_bench, nest_bench);

const N_PARTS: [usize; 3] = [100, 1_000, 10_000];

/// Irregular quadrilaterals of varying size, each at its own position
fn synthetic_parts(n: usize) -> Vec<Part<SPolygon>> {
    (0..n)
        .map(|i| {
            let s = 1.0 + (i % 17) as f64 * 0.5;
            let (ox, oy) = ((i % 100) as f64 * 50.0, (i / 100) as f64 * 50.0);
            Part::new(SPolygon::new(vec![
                Point(ox, oy),
                Point(ox + 3.0 * s, oy + 0.2 * s),
                Point(ox + 2.0 * s, oy + s),
                Point(ox + 0.3 * s, oy + 2.0 * s),
            ]))
        })
        .collect_vec()
}

/// Benchmark of the sequential packing stage alone on pre-oriented footprints.
fn pack_bench(c: &mut Criterion) {
    let sheet = SheetSpec::try_new(1000.0, 500.0, 2.0).unwrap();
    let packer = ShelfPacker::new(sheet, PackConfig::default()).unwrap();

    let mut group = c.benchmark_group("shelf_pack");
    for n in N_PARTS {
        let rects = (0..n)
            .map(|i| {
                let (w, h) = (1.0 + (i % 37) as f64, 1.0 + (i % 23) as f64);
                Rect::from_origin(i as f64 * 100.0, 0.0, w, h).unwrap()
            })
            .collect_vec();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &rects, |b, rects| {
            b.iter(|| black_box(packer.pack::<SPolygon>(rects, &[], None).unwrap()))
        });
    }
    group.finish();
}

/// Benchmark of the complete pipeline: rotation search followed by packing.
fn nest_bench(c: &mut Criterion) {
    let sheet = SheetSpec::try_new(1000.0, 500.0, 2.0).unwrap();
    let config = NestConfig::default();

    let mut group = c.benchmark_group("nest");
    group.sample_size(10);
    for n in N_PARTS {
        let parts = synthetic_parts(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &parts, |b, parts| {
            b.iter(|| black_box(nest(parts, &[], sheet, RotationMode::Optimize, &config, None).unwrap()))
        });
    }
    group.finish();
}
