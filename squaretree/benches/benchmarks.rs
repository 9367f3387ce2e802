use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use squaretree::{Config, PointRef, SquareTree};

fn filled_tree(rng: &mut StdRng, count: usize) -> (SquareTree<u32>, Vec<PointRef<u32>>) {
    let mut tree = SquareTree::new(Config {
        size: Some(1024.0),
        ..Config::default()
    })
    .unwrap();
    let points = (0..count as u32)
        .map(|i| {
            tree.add(rng.gen_range(0.0..1024.0), rng.gen_range(0.0..1024.0), i)
                .unwrap()
        })
        .collect();
    (tree, points)
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut tree = SquareTree::new(Config {
        size: Some(1024.0),
        ..Config::default()
    })
    .unwrap();

    c.bench_function("squaretree_insert", |b| {
        b.iter(|| {
            let x = rng.gen_range(0.0..1024.0);
            let y = rng.gen_range(0.0..1024.0);
            black_box(tree.add(x, y, 0u32).unwrap());
        })
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let (mut tree, points) = filled_tree(&mut rng, 10_000);

    c.bench_function("squaretree_remove_add", |b| {
        b.iter(|| {
            let point = &points[rng.gen_range(0..points.len())];
            black_box(tree.remove_point(point));
            tree.add_point(point.clone()).unwrap();
        })
    });
}

fn relocate_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let (mut tree, mut points) = filled_tree(&mut rng, 10_000);

    c.bench_function("squaretree_relocate", |b| {
        b.iter(|| {
            let index = rng.gen_range(0..points.len());
            let point = &points[index];
            let x = (point.x() + rng.gen_range(-4.0..4.0)).clamp(0.0, 1023.0);
            let y = (point.y() + rng.gen_range(-4.0..4.0)).clamp(0.0, 1023.0);
            let moved = tree.relocate(point, x, y).unwrap();
            points[index] = moved;
        })
    });
}

fn locate_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let (tree, _points) = filled_tree(&mut rng, 10_000);

    c.bench_function("squaretree_locate", |b| {
        b.iter(|| {
            let x = rng.gen_range(0.0..1024.0);
            let y = rng.gen_range(0.0..1024.0);
            black_box(tree.locate_xy(x, y));
        })
    });
}

criterion_group!(
    benches,
    insert_benchmark,
    remove_benchmark,
    relocate_benchmark,
    locate_benchmark
);
criterion_main!(benches);
