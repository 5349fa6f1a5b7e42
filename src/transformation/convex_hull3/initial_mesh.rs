use super::quickhull::{add_point_to_face, PlanarApex, QuickHull};
use crate::math::Real;
use crate::shape::{Plane, PointCloud, Ray};
use crate::utils::triangle_normal;

/// The indices of the points with the largest and smallest coordinates along each axis.
///
/// The result is `[max_x, min_x, max_y, min_y, max_z, min_z]`. Ties keep the first point.
pub(super) fn compute_extreme_values(cloud: &PointCloud) -> [usize; 6] {
    let mut out = [0; 6];
    let mut extremes = [
        cloud[0].x, cloud[0].x, cloud[0].y, cloud[0].y, cloud[0].z, cloud[0].z,
    ];

    for (i, pt) in cloud.iter().enumerate().skip(1) {
        for axis in 0..3 {
            let (max, min) = (axis * 2, axis * 2 + 1);

            if pt[axis] > extremes[max] {
                extremes[max] = pt[axis];
                out[max] = i;
            } else if pt[axis] < extremes[min] {
                extremes[min] = pt[axis];
                out[min] = i;
            }
        }
    }

    out
}

/// The largest absolute coordinate among the extreme points, along their own axis.
pub(super) fn compute_scale(cloud: &PointCloud, extreme_values: &[usize; 6]) -> Real {
    extreme_values
        .iter()
        .enumerate()
        .map(|(i, &id)| cloud[id][i / 2].abs())
        .fold(0.0, Real::max)
}

impl QuickHull {
    /// Resets the mesh to a tetrahedron enclosing as much of the cloud as possible,
    /// and assigns each point outside of it to one of its faces.
    ///
    /// Degenerate clouds (at most four points, a single point, a line) give a
    /// degenerate tetrahedron without any assigned point. Planar clouds get an extra
    /// synthetic apex, which is pushed to `cloud` and recorded in `self.planar`.
    pub(super) fn setup_initial_tetrahedron(&mut self, cloud: &mut PointCloud) {
        let num_points = cloud.len();
        let last = num_points - 1;

        if num_points <= 4 {
            let mut v = [0, last.min(1), last.min(2), last.min(3)];
            let n = triangle_normal(&cloud[v[0]], &cloud[v[1]], &cloud[v[2]]);
            let plane = Plane::new(n, &cloud[v[0]]);

            if plane.is_point_on_positive_side(&cloud[v[3]]) {
                v.swap(0, 1);
            }

            log::debug!("Building the hull of {} points as a tetrahedron {:?}.", num_points, v);
            self.setup_tetrahedron(cloud, v);
            return;
        }

        // The two extreme points farthest from each other.
        let mut max_dist = self.epsilon_squared;
        let mut selected = None;

        for i in 0..6 {
            for j in i + 1..6 {
                let (a, b) = (self.extreme_values[i], self.extreme_values[j]);
                let dist = (cloud[a] - cloud[b]).norm_squared();

                if dist > max_dist {
                    max_dist = dist;
                    selected = Some((a, b));
                }
            }
        }

        let Some((first, second)) = selected else {
            log::debug!("The point cloud is reduced to a single point.");
            self.setup_tetrahedron(cloud, [0, 1, 2, 3]);
            return;
        };

        // The point farthest from the line joining them.
        let line = Ray::new(cloud[first], cloud[second] - cloud[first]);
        let mut max_dist = self.epsilon_squared;
        let mut third = None;

        for (i, pt) in cloud.iter().enumerate() {
            let dist = line.squared_distance_to_point(pt);
            if dist > max_dist {
                max_dist = dist;
                third = Some(i);
            }
        }

        let Some(third) = third else {
            log::debug!("The point cloud is collinear.");
            self.setup_collinear_tetrahedron(cloud, first, second);
            return;
        };

        let mut base = [first, second, third];
        let n = triangle_normal(&cloud[base[0]], &cloud[base[1]], &cloud[base[2]]);
        let base_plane = Plane::new(n, &cloud[base[0]]);

        // The point farthest from the base triangle.
        let mut max_dist = self.epsilon;
        let mut apex = None;

        for (i, pt) in cloud.iter().enumerate() {
            let dist = base_plane.signed_distance(pt).abs();
            if dist > max_dist {
                max_dist = dist;
                apex = Some(i);
            }
        }

        let apex = match apex {
            Some(apex) => apex,
            None => {
                // `third` is farther than epsilon from a segment longer than epsilon, so
                // the base normal only vanishes through underflow.
                let min_normal_norm_squared = self.epsilon_squared * self.epsilon_squared;
                if abs_diff_eq!(
                    base_plane.normal_norm_squared,
                    0.0,
                    epsilon = min_normal_norm_squared
                ) {
                    log::debug!("The base triangle is degenerate, treating the cloud as collinear.");
                    self.setup_collinear_tetrahedron(cloud, first, second);
                    return;
                }

                // Lift a synthetic point above the plane so the hull has some volume.
                let lift = n * (self.scale / base_plane.normal_norm_squared.sqrt());
                let lifted = cloud[base[0]] + lift;
                let synthetic = cloud.push_synthetic_point(lifted);
                log::debug!(
                    "The point cloud is planar, lifting a synthetic apex {} above point {}.",
                    synthetic,
                    base[0]
                );
                self.planar = Some(PlanarApex {
                    synthetic,
                    target: base[0],
                });
                synthetic
            }
        };

        // The apex must end up behind the base triangle.
        if base_plane.is_point_on_positive_side(&cloud[apex]) {
            base.swap(0, 1);
        }

        log::debug!("Initial tetrahedron: {:?}, apex {}.", base, apex);
        self.setup_tetrahedron(cloud, [base[0], base[1], base[2], apex]);

        // Points inside the tetrahedron are inside the hull and play no further role.
        for i in 0..num_points {
            for face in &mut self.mesh.faces {
                if add_point_to_face(
                    face,
                    i,
                    &cloud[i],
                    self.epsilon_squared,
                    &mut self.index_pool,
                ) {
                    break;
                }
            }
        }
    }

    /// A thin tetrahedron for a cloud lying on the line `first`-`second`.
    fn setup_collinear_tetrahedron(&mut self, cloud: &PointCloud, first: usize, second: usize) {
        let (a, b) = (cloud[first], cloud[second]);
        let third = cloud
            .iter()
            .position(|pt| *pt != a && *pt != b)
            .unwrap_or(first);
        let c = cloud[third];
        let fourth = cloud
            .iter()
            .position(|pt| *pt != a && *pt != b && *pt != c)
            .unwrap_or(first);

        self.setup_tetrahedron(cloud, [first, second, third, fourth]);
    }

    /// Calls [`MeshBuilder::setup`](super::MeshBuilder::setup) and computes the plane of each face.
    ///
    /// Indices past the end of the cloud are clamped to its last point.
    fn setup_tetrahedron(&mut self, cloud: &PointCloud, v: [usize; 4]) {
        let last = cloud.len() - 1;
        let [a, b, c, d] = v.map(|i| i.min(last));
        self.mesh.setup(a, b, c, d);

        for face in &mut self.mesh.faces {
            let he0 = &self.mesh.half_edges[face.half_edge];
            let he1 = &self.mesh.half_edges[he0.next];
            let he2 = &self.mesh.half_edges[he1.next];
            let [va, vb, vc] = [he0.end_vertex, he1.end_vertex, he2.end_vertex].map(|i| &cloud[i]);
            face.plane = Plane::new(triangle_normal(va, vb, vc), va);
        }
    }
}
