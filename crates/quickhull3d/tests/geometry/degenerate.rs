use quickhull3d::math::{Point, Real};
use quickhull3d::transformation::{self, ConvexHull, QuickHull, QuickHullSettings};

#[test]
fn empty_cloud() {
    let (vertices, indices) = transformation::convex_hull(&[]);
    assert!(vertices.is_empty());
    assert!(indices.is_empty());

    let hull = QuickHull::new().convex_hull(&[], &QuickHullSettings::default());
    assert!(hull.is_empty());
}

#[test]
fn identical_points() {
    let points = vec![Point::new(2.0, 2.0, 2.0); 10];

    let mut engine = QuickHull::new();
    let hull = engine.convex_hull(&points, &QuickHullSettings::default());

    assert!(hull.vertices().len() <= 4);
    assert_eq!(hull.num_triangles(), 4);
    assert!(hull.vertices().iter().all(|v| *v == points[0]));
    assert_eq!(engine.diagnostics().failed_horizon_edges, 0);
}

#[test]
fn fewer_than_four_points() {
    let points = [
        Point::new(1.0, 2.0, 3.0),
        Point::new(-1.0, 0.5, 2.0),
        Point::new(0.0, 0.0, -4.0),
    ];

    for n in 1..=3 {
        let settings = QuickHullSettings::default().with_original_indices(true);
        let hull = QuickHull::new().convex_hull(&points[..n], &settings);

        assert_eq!(hull.num_triangles(), 4);
        assert!(hull.flat_indices().iter().all(|i| (*i as usize) < n));

        let (vertices, _) = transformation::convex_hull(&points[..n]);
        assert_eq!(vertices.len(), n);
    }
}

#[test]
fn collinear_points() {
    let points: Vec<_> = (0..9)
        .map(|i| Point::new(i as Real * 0.5, 0.0, 0.0))
        .collect();

    let mut engine = QuickHull::new();
    let hull = engine.convex_hull(&points, &QuickHullSettings::default());

    assert_eq!(hull.num_triangles(), 4);
    assert!(hull.vertices().len() <= 4);
    assert!(hull.vertices().iter().all(|v| v.y == 0.0 && v.z == 0.0));
    // Both ends of the segment are part of the hull.
    assert!(hull.vertices().contains(&points[0]));
    assert!(hull.vertices().contains(&points[8]));
}

#[test]
fn coplanar_points() {
    let points: Vec<_> = (0..25)
        .map(|i| Point::new((i % 5) as Real, (i / 5) as Real, 0.0))
        .collect();

    let mut engine = QuickHull::new();
    let hull = engine.convex_hull(&points, &QuickHullSettings::default());

    assert!(hull.num_triangles() > 0);
    // The synthetic point lifted off the plane never shows up in the output.
    assert!(hull.vertices().iter().all(|v| v.z == 0.0));
    assert!(hull.vertices().iter().all(|v| points.contains(v)));

    for corner in [0, 4, 20, 24] {
        assert!(hull.vertices().contains(&points[corner]));
    }

    let settings = QuickHullSettings::default().with_original_indices(true);
    let hull = engine.convex_hull(&points, &settings);
    assert!(hull.flat_indices().iter().all(|i| (*i as usize) < points.len()));
}

#[test]
fn tilted_coplanar_points() {
    let (u, v) = (
        Point::new(1.0, 0.0, -1.0).coords,
        Point::new(0.0, 1.0, -1.0).coords,
    );
    let points: Vec<_> = (0..30)
        .map(|i| {
            let (s, t) = ((i % 6) as Real * 0.25, (i / 6) as Real * 0.25);
            Point::new(0.0, 0.0, 1.0) + u * s + v * t
        })
        .collect();

    let hull = QuickHull::new().convex_hull(&points, &QuickHullSettings::default());

    assert!(hull.num_triangles() > 0);
    for vertex in hull.vertices() {
        assert!(points.contains(vertex));
    }
}

/// Checks that no point of `points` is in front of a non-degenerate triangle of `hull`.
fn assert_contains_all(points: &[Point<Real>], hull: &ConvexHull<'_>, tolerance: Real) {
    let vertices = hull.vertices();

    for tri in hull.indices() {
        let [a, b, c] = tri.map(|i| vertices[i as usize]);
        let normal = (b - a).cross(&(c - a));
        if normal.norm_squared() == 0.0 {
            continue;
        }

        for pt in points {
            assert!(normal.dot(&(pt - a)) <= tolerance * normal.norm());
        }
    }
}

#[test]
fn coplanar_points_at_any_scale() {
    // The 8 first points are the vertices of the octagon, the others are inside.
    let plane_coords = [
        (2.0, 1.0),
        (1.0, 2.0),
        (-1.0, 2.0),
        (-2.0, 1.0),
        (-2.0, -1.0),
        (-1.0, -2.0),
        (1.0, -2.0),
        (2.0, -1.0),
        (0.0, 0.0),
        (1.0, 0.0),
        (0.0, -1.0),
        (1.0, 1.0),
        (-1.0, -1.0),
    ];

    for exponent in [-10, -7, -3, 0, 3, 7, 10] {
        let scale = (2.0 as Real).powi(exponent);
        let points: Vec<_> = plane_coords
            .iter()
            .map(|&(a, b): &(Real, Real)| {
                Point::new(a, b, 0.5 * a - 0.25 * b + 0.75) * scale
            })
            .collect();

        let settings = QuickHullSettings::default().with_original_indices(true);
        let mut engine = QuickHull::new();
        let hull = engine.convex_hull(&points, &settings);

        assert!(hull.num_triangles() >= 6);
        for vertex in 0..8 {
            assert!(
                hull.flat_indices().contains(&vertex),
                "octagon vertex {} is missing at scale {}",
                vertex,
                scale
            );
        }
        assert_contains_all(&points, &hull, 1.0e-4 * scale);
        assert_eq!(engine.diagnostics().failed_horizon_edges, 0);
    }
}

#[test]
fn collinear_points_at_any_scale() {
    for exponent in [-10, -3, 0, 3, 10] {
        let scale = (2.0 as Real).powi(exponent);
        let points: Vec<_> = (0..9)
            .map(|i| Point::new(1.0, 2.0, -1.0) * (i as Real * scale))
            .collect();

        let hull = QuickHull::new().convex_hull(&points, &QuickHullSettings::default());

        assert_eq!(hull.num_triangles(), 4);
        assert!(hull.vertices().contains(&points[0]));
        assert!(hull.vertices().contains(&points[8]));
    }
}
