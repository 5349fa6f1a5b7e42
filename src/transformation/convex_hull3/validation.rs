use super::half_edge_mesh::HalfEdgeMesh;
use super::ConvexHullError;
use crate::math::{Point, Real};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::{HalfEdgeIndex, SortedPair};
use alloc::vec::Vec;

/// Checks if a convex hull is properly formed.
///
/// The triangle mesh made of `vertices` and `triangles` must be closed, without
/// T-junctions nor degenerate triangles, with the topology of a sphere. Every point of
/// `points` (typically the cloud the hull was computed from) must lie behind the plane
/// of every triangle, up to `tolerance`. The triangles must be wound so that
/// `(b - a) × (c - a)` points outward.
pub fn check_convex_hull(
    points: &[Point<Real>],
    vertices: &[Point<Real>],
    triangles: &[[u32; 3]],
    tolerance: Real,
) -> Result<(), ConvexHullError> {
    struct EdgeData {
        adjacent_triangles: [usize; 2],
    }

    let mut edges = HashMap::default();
    let mut used_vertices = Vec::new();

    for (itri, tri) in triangles.iter().enumerate() {
        if tri[0] == tri[1] || tri[0] == tri[2] || tri[1] == tri[2] {
            return Err(ConvexHullError::DegenerateTriangle(itri));
        }

        for i in 0..3 {
            let ivtx1 = tri[i];
            let ivtx2 = tri[(i + 1) % 3];
            used_vertices.push(ivtx1);

            match edges.entry(SortedPair::new(ivtx1, ivtx2)) {
                Entry::Vacant(e) => {
                    let _ = e.insert(EdgeData {
                        adjacent_triangles: [itri, usize::MAX],
                    });
                }
                Entry::Occupied(mut e) => {
                    if e.get().adjacent_triangles[1] != usize::MAX {
                        return Err(ConvexHullError::TJunction(itri, ivtx1, ivtx2));
                    }

                    e.get_mut().adjacent_triangles[1] = itri;
                }
            }
        }
    }

    if edges
        .values()
        .any(|edge| edge.adjacent_triangles[1] == usize::MAX)
    {
        return Err(ConvexHullError::UnfinishedTriangle);
    }

    // Check Euler characteristic.
    used_vertices.sort_unstable();
    used_vertices.dedup();
    let euler = used_vertices.len() as isize + triangles.len() as isize - edges.len() as isize;
    if !triangles.is_empty() && euler != 2 {
        return Err(ConvexHullError::EulerCharacteristic(euler));
    }

    for (itri, tri) in triangles.iter().enumerate() {
        let [a, b, c] = tri.map(|i| vertices[i as usize]);
        let normal = (b - a).cross(&(c - a));
        let threshold = tolerance * normal.norm();

        for (ipt, pt) in points.iter().enumerate() {
            let distance = normal.dot(&(pt - a));
            if distance > threshold {
                return Err(ConvexHullError::PointOutsideHull {
                    point: ipt,
                    triangle: itri,
                    distance: distance / normal.norm(),
                });
            }
        }
    }

    Ok(())
}

/// Checks the connectivity of a half-edge mesh.
///
/// Every half-edge must be the opposite of its opposite, run in the reverse direction,
/// and belong to a cycle of three half-edges of the same face.
pub fn check_half_edge_mesh<I: HalfEdgeIndex>(
    mesh: &HalfEdgeMesh<I>,
) -> Result<(), ConvexHullError> {
    let num_half_edges = mesh.half_edges.len();
    let in_range = |i: I| i.to_index() < num_half_edges;

    for (i, he) in mesh.half_edges.iter().enumerate() {
        let broken = ConvexHullError::BrokenLink { half_edge: i };

        if !in_range(he.opposite)
            || !in_range(he.next)
            || he.face.to_index() >= mesh.faces.len()
        {
            return Err(broken);
        }

        let opposite = &mesh.half_edges[he.opposite.to_index()];
        let next = &mesh.half_edges[he.next.to_index()];

        if !in_range(next.next) {
            return Err(broken);
        }

        let prev = &mesh.half_edges[next.next.to_index()];

        if opposite.opposite.to_index() != i
            || prev.next.to_index() != i
            || next.face != he.face
            || prev.face != he.face
            || opposite.face == he.face
            || opposite.end_vertex != prev.end_vertex
        {
            return Err(broken);
        }
    }

    for (i, face) in mesh.faces.iter().enumerate() {
        let he = face.half_edge.to_index();
        if he >= num_half_edges || mesh.half_edges[he].face.to_index() != i {
            return Err(ConvexHullError::BrokenLink { half_edge: he });
        }
    }

    Ok(())
}
