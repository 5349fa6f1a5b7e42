use crate::common::unit_cube;
use quickhull3d::transformation::{QuickHull, QuickHullSettings};

#[test]
fn cube_obj_output() {
    let points = unit_cube();
    let hull = QuickHull::new().convex_hull(&points, &QuickHullSettings::default());

    let mut out = Vec::new();
    hull.write_obj(&mut out, "cube").unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 8);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);
}

#[test]
fn obj_file_output() {
    let points = unit_cube();
    let hull = QuickHull::new().convex_hull(&points, &QuickHullSettings::default());

    let path = std::env::temp_dir().join("quickhull3d_cube_obj_file_output.obj");
    hull.to_obj_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);
}
