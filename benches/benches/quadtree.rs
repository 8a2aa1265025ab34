// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use quadmap_render::{Layers, Scene, Style, to_svg_string};
use quadmap_tree::{Point, PointHandle, Region, SpatialTree, TreeConfig};

const CANVAS: f64 = 800.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn canvas() -> Region {
    Region::new(0.5 * CANVAS, 0.5 * CANVAS, 0.5 * CANVAS, 0.5 * CANVAS)
}

fn gen_random_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| Point::new(rng.next_f64() * CANVAS, rng.next_f64() * CANVAS, format!("p{i}")))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for c in 0..n_clusters {
        let cx = spread + rng.next_f64() * (CANVAS - 2.0 * spread);
        let cy = spread + rng.next_f64() * (CANVAS - 2.0 * spread);
        for i in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy, format!("c{c}-{i}")));
        }
    }
    out
}

fn build(points: &[Point], config: TreeConfig) -> (SpatialTree, Vec<PointHandle>) {
    let mut tree = SpatialTree::with_config(canvas(), config);
    let handles = points
        .iter()
        .cloned()
        .filter_map(|p| tree.insert(p).ok())
        .collect();
    (tree, handles)
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[256usize, 1024, 4096] {
        let points = gen_random_points(n);
        group.throughput(Throughput::Elements(n as u64));
        for capacity in [1usize, 8] {
            group.bench_function(format!("random_n{n}_cap{capacity}"), |b| {
                b.iter_batched(
                    || points.clone(),
                    |points| {
                        let mut tree = SpatialTree::new(canvas(), capacity);
                        for p in points {
                            let _ = tree.insert(p);
                        }
                        black_box(tree.len());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    let points = gen_clustered_points(16, 256, 20.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("clustered_16x256_cap1", |b| {
        b.iter_batched(
            || points.clone(),
            |points| {
                let mut tree = SpatialTree::new(canvas(), 1);
                for p in points {
                    let _ = tree.insert(p);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    // Coincident points stop at the depth limit.
    let duplicates: Vec<_> = (0..64).map(|_| Point::new(400.0, 400.0, "dup")).collect();
    group.throughput(Throughput::Elements(duplicates.len() as u64));
    group.bench_function("coincident_64", |b| {
        b.iter_batched(
            || duplicates.clone(),
            |points| {
                let mut tree = SpatialTree::new(canvas(), 1);
                for p in points {
                    let _ = tree.insert(p);
                }
                black_box(tree.root().deepest());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    for &n in &[1024usize, 4096] {
        let (tree, handles) = build(&gen_random_points(n), TreeConfig::new(1));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("all_points_n{n}"), |b| {
            b.iter(|| black_box(tree.all_points().len()));
        });
        group.bench_function(format!("quadrant_center_all_n{n}"), |b| {
            b.iter(|| {
                let found = handles
                    .iter()
                    .filter_map(|h| tree.quadrant_center(*h))
                    .count();
                black_box(found);
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let style = Style::default();
    for &n in &[256usize, 1024] {
        let (tree, handles) = build(&gen_random_points(n), TreeConfig::new(1));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("scene_n{n}"), |b| {
            b.iter(|| {
                let scene = Scene::build(&tree, &handles, &style, Layers::all());
                black_box(scene.primitives.len());
            });
        });
        let scene = Scene::build(&tree, &handles, &style, Layers::all());
        group.bench_function(format!("svg_n{n}"), |b| {
            b.iter(|| {
                let svg = to_svg_string(&scene, Size::new(CANVAS, CANVAS), &style, Layers::all());
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_queries, bench_render);
criterion_main!(benches);
