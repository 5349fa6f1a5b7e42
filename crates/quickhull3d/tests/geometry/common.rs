use quickhull3d::math::{Point, Real};
use rand::{Rng, SeedableRng};
use rand_isaac::IsaacRng;

/// The corners of the unit cube.
pub fn unit_cube() -> Vec<Point<Real>> {
    (0..8)
        .map(|i| Point::new((i & 1) as Real, ((i >> 1) & 1) as Real, ((i >> 2) & 1) as Real))
        .collect()
}

/// `n` random points inside the unit sphere, followed by its six axis-extreme points.
pub fn random_ball(seed: u64, n: usize) -> Vec<Point<Real>> {
    let mut rng = IsaacRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(n + 6);

    while points.len() < n {
        let pt = Point::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );

        if pt.coords.norm_squared() < 1.0 {
            points.push(pt);
        }
    }

    points.extend_from_slice(&[
        Point::new(1.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
    ]);
    points
}

/// The triangles of a hull as coordinate bit patterns, independently from vertex numbering.
///
/// Each triangle is rotated (keeping its orientation) so that its smallest vertex comes
/// first, and the triangles are sorted.
pub fn canonical_triangles(vertices: &[Point<Real>], indices: &[[u32; 3]]) -> Vec<[[u64; 3]; 3]> {
    let key = |p: &Point<Real>| [p.x, p.y, p.z].map(|c| c.to_bits() as u64);

    let mut triangles: Vec<_> = indices
        .iter()
        .map(|tri| {
            let mut tri = tri.map(|i| key(&vertices[i as usize]));
            let first = (0..3).min_by_key(|&i| tri[i]).unwrap();
            tri.rotate_left(first);
            tri
        })
        .collect();
    triangles.sort_unstable();
    triangles
}
