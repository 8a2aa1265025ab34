// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadmap_tree::{Point, Region, SpatialTree};

use rstar::RTree;

const CANVAS: f64 = 800.0;

fn gen_grid_points(n: usize) -> Vec<[f64; 2]> {
    let cell = CANVAS / n as f64;
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push([(x as f64 + 0.5) * cell, (y as f64 + 0.5) * cell]);
        }
    }
    out
}

fn bench_rstar_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare");
    for &n in &[32usize, 64] {
        let coords = gen_grid_points(n);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadmap_build_locate_n{n}"), |b| {
            b.iter_batched(
                || coords.clone(),
                |coords| {
                    let mut tree = SpatialTree::new(
                        Region::new(0.5 * CANVAS, 0.5 * CANVAS, 0.5 * CANVAS, 0.5 * CANVAS),
                        1,
                    );
                    let handles: Vec<_> = coords
                        .iter()
                        .filter_map(|[x, y]| tree.insert(Point::new(*x, *y, "")).ok())
                        .collect();
                    let found = handles
                        .iter()
                        .filter(|h| tree.get(**h).is_some())
                        .count();
                    black_box(found);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_locate_n{n}"), |b| {
            b.iter_batched(
                || coords.clone(),
                |coords| {
                    let tree = RTree::bulk_load(coords.clone());
                    let found = coords
                        .iter()
                        .filter(|p| tree.locate_at_point(p).is_some())
                        .count();
                    black_box(found);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_compare);
criterion_main!(benches);
