use crate::common::{random_ball, unit_cube};
use quickhull3d::math::{Point, Real};
use quickhull3d::transformation::{self, ConvexHullError, QuickHull, QuickHullSettings};

/// Points on the faces of a cube and on a latitude-longitude sphere: lots of coplanar
/// and nearly coplanar points.
fn hard_cloud() -> Vec<Point<Real>> {
    let mut points = Vec::new();

    for i in 0..=10 {
        for j in 0..=10 {
            let (u, v) = (i as Real / 10.0, j as Real / 10.0);
            points.extend_from_slice(&[
                Point::new(u, v, 0.0),
                Point::new(u, v, 1.0),
                Point::new(u, 0.0, v),
                Point::new(u, 1.0, v),
                Point::new(0.0, u, v),
                Point::new(1.0, u, v),
            ]);
        }
    }

    for i in 0..40 {
        for j in 0..20 {
            let theta = i as Real * core::f64::consts::TAU as Real / 40.0;
            let phi = j as Real * core::f64::consts::PI as Real / 19.0;
            points.push(Point::new(
                0.5 + 0.8 * theta.cos() * phi.sin(),
                0.5 + 0.8 * theta.sin() * phi.sin(),
                0.5 + 0.8 * phi.cos(),
            ));
        }
    }

    points
}

#[test]
fn strict_mode_fails_exactly_when_lenient_mode_drops_points() {
    let points = hard_cloud();

    let mut engine = QuickHull::new();
    let lenient = engine
        .convex_hull(&points, &QuickHullSettings::default())
        .into_owned();
    let failures = engine.diagnostics().failed_horizon_edges;
    assert!(lenient.num_triangles() > 0);

    let strict = engine.try_convex_hull(&points, &QuickHullSettings::default().with_strict(true));

    match strict {
        Ok(hull) => {
            assert_eq!(failures, 0);
            assert_eq!(hull, lenient);
        }
        Err(ConvexHullError::HorizonEdgeLoop { point }) => {
            assert!(failures > 0);
            assert!(point < points.len());
            assert_eq!(engine.diagnostics().failed_horizon_edges, 1);
        }
        Err(err) => panic!("Unexpected error: {}", err),
    }
}

#[test]
fn strict_mode_on_well_behaved_input() {
    let points = random_ball(21, 300);

    let (vertices, indices) = transformation::try_convex_hull(&points).unwrap();
    let expected = transformation::convex_hull(&points);
    assert_eq!((vertices, indices), expected);

    let cube = unit_cube();
    let hull = QuickHull::new()
        .try_convex_hull(&cube, &QuickHullSettings::default().with_strict(true))
        .unwrap();
    assert_eq!(hull.num_triangles(), 12);
}

#[test]
fn lenient_mode_ignores_the_strict_flag() {
    let points = hard_cloud();
    let settings = QuickHullSettings::default().with_strict(true);

    let mut engine = QuickHull::new();
    let hull = engine.convex_hull(&points, &settings);
    assert!(hull.num_triangles() > 0);
}

#[test]
fn custom_epsilon_is_scaled_by_the_cloud_extent() {
    let points: Vec<_> = random_ball(8, 500).into_iter().map(|p| p * 4.0).collect();
    let mut engine = QuickHull::new();

    let hull = engine.convex_hull(&points, &QuickHullSettings::default().with_epsilon(0.01));
    assert_eq!(engine.scaled_epsilon(), 0.04);
    assert!(hull.vertices().len() >= 4);
    assert!(hull.vertices().len() < points.len());
    assert!(hull.vertices().iter().all(|v| points.contains(v)));
}
