use crate::common::{random_ball, unit_cube};
use quickhull3d::math::Point;
use quickhull3d::transformation::{
    check_half_edge_mesh, ConvexHullError, HalfEdgeMesh, QuickHull, QuickHullSettings,
};

#[test]
fn tetrahedron_mesh() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];

    let mesh: HalfEdgeMesh<u16> = QuickHull::new()
        .convex_hull_as_mesh(&points, &QuickHullSettings::default())
        .unwrap();

    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.faces.len(), 4);
    assert_eq!(mesh.half_edges.len(), 12);
    assert_eq!(check_half_edge_mesh(&mesh), Ok(()));
}

#[test]
fn cube_mesh() {
    let mesh: HalfEdgeMesh<u32> = QuickHull::new()
        .convex_hull_as_mesh(&unit_cube(), &QuickHullSettings::default())
        .unwrap();

    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(mesh.faces.len(), 12);
    assert_eq!(mesh.half_edges.len(), 36);
    assert_eq!(check_half_edge_mesh(&mesh), Ok(()));

    // Each vertex is used by 3 to 6 half-edges on a triangulated cube.
    let mut valence = [0; 8];
    for he in &mesh.half_edges {
        valence[he.end_vertex as usize] += 1;
    }
    assert!(valence.iter().all(|v| (3..=6).contains(v)));
}

#[test]
fn random_mesh_is_closed_and_convex() {
    let points = random_ball(3, 1000);
    let mesh: HalfEdgeMesh<usize> = QuickHull::new()
        .convex_hull_as_mesh(&points, &QuickHullSettings::default())
        .unwrap();

    assert_eq!(check_half_edge_mesh(&mesh), Ok(()));
    // Euler characteristic of a closed triangle mesh: V - E + F = 2, with E = 3F / 2.
    assert_eq!(mesh.half_edges.len(), mesh.faces.len() * 3);
    assert_eq!(mesh.vertices.len() + mesh.faces.len() - mesh.half_edges.len() / 2, 2);

    for f in 0..mesh.num_faces() {
        let [a, ..] = mesh.face_vertex_indices(f);
        let normal = mesh.face_normal(f);
        let threshold = 1.0e-4 * normal.norm();

        for pt in &points {
            assert!(normal.dot(&(pt - mesh.vertices[a])) <= threshold);
        }
    }
}

#[test]
fn index_overflow() {
    let points = random_ball(11, 2000);
    let mut engine = QuickHull::new();
    let mesh = engine
        .convex_hull_as_mesh::<u32>(&points, &QuickHullSettings::default())
        .unwrap();
    assert!(mesh.half_edges.len() > u8::MAX as usize);

    assert!(matches!(
        engine.convex_hull_as_mesh::<u8>(&points, &QuickHullSettings::default()),
        Err(ConvexHullError::IndexOverflow { .. })
    ));
}
