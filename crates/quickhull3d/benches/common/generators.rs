use na::Point3;
use rand::Rng;

/// Random points uniformly distributed inside the unit ball.
pub fn generate_ball<R: Rng>(rng: &mut R, n: usize) -> Vec<Point3<f32>> {
    let mut pts = Vec::with_capacity(n);

    while pts.len() < n {
        let pt = rng.gen::<Point3<f32>>() * 2.0 - Point3::new(1.0, 1.0, 1.0).coords;
        if pt.coords.norm_squared() <= 1.0 {
            pts.push(pt);
        }
    }

    pts
}

/// Random points on the unit sphere: every point is a hull vertex.
pub fn generate_sphere_surface<R: Rng>(rng: &mut R, n: usize) -> Vec<Point3<f32>> {
    generate_ball(rng, n)
        .into_iter()
        .filter(|pt| pt.coords.norm_squared() > 1.0e-6)
        .map(|pt| Point3::from(pt.coords.normalize()))
        .collect()
}
