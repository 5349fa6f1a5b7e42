use crate::common::{generate_ball, generate_sphere_surface};
use quickhull3d::transformation::{self, QuickHull, QuickHullSettings};
use rand::SeedableRng;
use rand_isaac::IsaacRng;
use test::Bencher;

#[bench]
fn bench_convex_hull_ball_1000(bh: &mut Bencher) {
    let mut rng = IsaacRng::seed_from_u64(0);
    let points = generate_ball(&mut rng, 1000);

    bh.iter(|| test::black_box(transformation::convex_hull(&points)))
}

#[bench]
fn bench_convex_hull_ball_100000_reused_engine(bh: &mut Bencher) {
    let mut rng = IsaacRng::seed_from_u64(0);
    let points = generate_ball(&mut rng, 100_000);
    let settings = QuickHullSettings::default();
    let mut engine = QuickHull::new();

    bh.iter(|| test::black_box(engine.convex_hull(&points, &settings).num_triangles()))
}

#[bench]
fn bench_convex_hull_sphere_surface_10000(bh: &mut Bencher) {
    let mut rng = IsaacRng::seed_from_u64(0);
    let points = generate_sphere_surface(&mut rng, 10_000);
    let settings = QuickHullSettings::default().with_original_indices(true);
    let mut engine = QuickHull::new();

    bh.iter(|| test::black_box(engine.convex_hull(&points, &settings).num_triangles()))
}
