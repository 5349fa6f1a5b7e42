use super::convex_hull::ConvexHull;
use super::half_edge_mesh::HalfEdgeMesh;
use super::horizon::{reorder_horizon_edges, FaceData};
use super::index_pool::IndexVecPool;
use super::initial_mesh::{compute_extreme_values, compute_scale};
use super::mesh_builder::{BuilderFace, FaceFlags, MeshBuilder};
use super::settings::QuickHullSettings;
use super::ConvexHullError;
use crate::math::{Point, Real};
use crate::shape::{Plane, PointCloud};
use crate::utils::{triangle_normal, HalfEdgeIndex};
use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// Statistics about the last convex hull computation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DiagnosticData {
    /// The number of points for which the horizon edges could not be ordered into a loop.
    ///
    /// Each of these points has been ignored. The hull may be slightly flattened near them.
    pub failed_horizon_edges: usize,
}

/// The synthetic apex added to planar point clouds, and the real point it stands for.
#[derive(Copy, Clone, Debug)]
pub(super) struct PlanarApex {
    pub synthetic: usize,
    pub target: usize,
}

/// A reusable QuickHull engine.
///
/// The engine owns the half-edge mesh and every scratch buffer of the computation so
/// that computing many hulls in a row does not reallocate them. It never stores the
/// input point cloud: each call borrows it for its own duration.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use quickhull3d::math::Point;
/// use quickhull3d::transformation::{QuickHull, QuickHullSettings};
///
/// let cube: Vec<_> = (0..8)
///     .map(|i| Point::new((i & 1) as f32, ((i >> 1) & 1) as f32, ((i >> 2) & 1) as f32))
///     .collect();
///
/// let mut engine = QuickHull::new();
/// let hull = engine.convex_hull(&cube, &QuickHullSettings::default());
/// assert_eq!(hull.vertices().len(), 8);
/// assert_eq!(hull.num_triangles(), 12);
/// assert_eq!(engine.diagnostics().failed_horizon_edges, 0);
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuickHull {
    pub(super) epsilon: Real,
    pub(super) epsilon_squared: Real,
    pub(super) scale: Real,
    pub(super) planar: Option<PlanarApex>,
    pub(super) mesh: MeshBuilder,
    pub(super) extreme_values: [usize; 6],
    pub(super) diagnostics: DiagnosticData,
    pub(super) index_pool: IndexVecPool,

    // Scratch buffers, reused from one iteration to the next.
    pub(super) new_face_indices: Vec<usize>,
    pub(super) new_half_edge_indices: Vec<usize>,
    pub(super) disabled_face_point_vectors: Vec<Vec<usize>>,
    pub(super) visible_faces: Vec<usize>,
    pub(super) horizon_edges: Vec<usize>,
    pub(super) possibly_visible_faces: Vec<FaceData>,
    pub(super) face_list: VecDeque<usize>,
}

impl QuickHull {
    /// Creates a new engine with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics about the last computation.
    pub fn diagnostics(&self) -> &DiagnosticData {
        &self.diagnostics
    }

    /// The half-edge mesh built by the last computation.
    ///
    /// It contains disabled faces and half-edges. Use [`QuickHull::convex_hull_as_mesh`]
    /// to obtain a compact mesh instead.
    pub fn mesh_builder(&self) -> &MeshBuilder {
        &self.mesh
    }

    /// The tolerance used by the last computation, i.e., the base epsilon multiplied by the
    /// extent of the point cloud.
    pub fn scaled_epsilon(&self) -> Real {
        self.epsilon
    }

    /// Computes the convex hull of `points`.
    ///
    /// This never fails. Degenerate clouds produce a degenerate hull (possibly with
    /// zero-area triangles) and points for which the horizon could not be computed are
    /// ignored and counted in [`QuickHull::diagnostics`], even if `settings.strict` is set.
    pub fn convex_hull<'a>(
        &mut self,
        points: &'a [Point<Real>],
        settings: &QuickHullSettings,
    ) -> ConvexHull<'a> {
        let result = self.build_mesh(points, settings.epsilon, false);
        debug_assert!(result.is_ok(), "lenient hull computation failed: {:?}", result);
        ConvexHull::from_mesh(&self.mesh, points, settings)
    }

    /// Computes the convex hull of `points`, failing on the first horizon error if
    /// `settings.strict` is set.
    pub fn try_convex_hull<'a>(
        &mut self,
        points: &'a [Point<Real>],
        settings: &QuickHullSettings,
    ) -> Result<ConvexHull<'a>, ConvexHullError> {
        self.build_mesh(points, settings.epsilon, settings.strict)?;
        Ok(ConvexHull::from_mesh(&self.mesh, points, settings))
    }

    /// Computes the convex hull of `points` as a compact half-edge mesh.
    ///
    /// Only `settings.epsilon` and `settings.strict` are taken into account: the mesh
    /// always has a compact vertex buffer and its faces are oriented with outward normals.
    pub fn convex_hull_as_mesh<I: HalfEdgeIndex>(
        &mut self,
        points: &[Point<Real>],
        settings: &QuickHullSettings,
    ) -> Result<HalfEdgeMesh<I>, ConvexHullError> {
        self.build_mesh(points, settings.epsilon, settings.strict)?;
        HalfEdgeMesh::from_builder(&self.mesh, points)
    }

    fn build_mesh(
        &mut self,
        points: &[Point<Real>],
        epsilon: Real,
        strict: bool,
    ) -> Result<(), ConvexHullError> {
        self.diagnostics = DiagnosticData::default();
        self.planar = None;

        if points.is_empty() {
            self.mesh.clear();
            return Ok(());
        }

        let mut cloud = PointCloud::new(points);

        // The tolerance depends on the extent of the cloud.
        self.extreme_values = compute_extreme_values(&cloud);
        self.scale = compute_scale(&cloud, &self.extreme_values);
        self.epsilon = epsilon * self.scale;
        self.epsilon_squared = self.epsilon * self.epsilon;

        self.setup_initial_tetrahedron(&mut cloud);
        let result = self.create_convex_half_edge_mesh(&cloud, strict);

        if let Some(apex) = self.planar.take() {
            for he in &mut self.mesh.half_edges {
                if he.end_vertex == apex.synthetic {
                    he.end_vertex = apex.target;
                }
            }
        }

        self.face_list.clear();
        self.index_pool.clear();
        result
    }

    fn create_convex_half_edge_mesh(
        &mut self,
        cloud: &PointCloud,
        strict: bool,
    ) -> Result<(), ConvexHullError> {
        self.visible_faces.clear();
        self.horizon_edges.clear();
        self.possibly_visible_faces.clear();
        self.face_list.clear();

        for (i, face) in self.mesh.faces.iter_mut().enumerate() {
            if face
                .points_on_positive_side
                .as_ref()
                .is_some_and(|pts| !pts.is_empty())
            {
                self.face_list.push_back(i);
                face.flags.insert(FaceFlags::IN_FACE_QUEUE);
            }
        }

        let mut iter = 0;

        while let Some(top_face_index) = self.face_list.pop_front() {
            iter += 1;
            if iter == usize::MAX {
                // Restart the visit stamps instead of wrapping around.
                iter = 1;
                for face in &mut self.mesh.faces {
                    face.visibility_checked_on_iteration = 0;
                }
            }

            let top_face = &mut self.mesh.faces[top_face_index];
            top_face.flags.remove(FaceFlags::IN_FACE_QUEUE);

            if top_face.is_disabled() {
                continue;
            }

            match &top_face.points_on_positive_side {
                None => continue,
                Some(pts) if pts.is_empty() => {
                    log::error!(
                        "Queued face {} has an empty list of points on its positive side.",
                        top_face_index
                    );
                    continue;
                }
                Some(_) => {}
            }

            // Extrude toward the point farthest from the face.
            let active_point_index = top_face.most_distant_point;
            let active_point = cloud[active_point_index];

            self.find_horizon(top_face_index, &active_point, iter);

            if !reorder_horizon_edges(&self.mesh, &mut self.horizon_edges) {
                self.diagnostics.failed_horizon_edges += 1;
                log::warn!(
                    "Failed to order the {} horizon edges around point {}; ignoring that point.",
                    self.horizon_edges.len(),
                    active_point_index
                );
                self.drop_point(top_face_index, active_point_index, cloud);

                if strict {
                    return Err(ConvexHullError::HorizonEdgeLoop {
                        point: active_point_index,
                    });
                }

                continue;
            }

            self.extrude(active_point_index, cloud);
        }

        Ok(())
    }

    /// Removes `point` from the list of `face` and re-queues the face if it still has points.
    fn drop_point(&mut self, face_index: usize, point: usize, cloud: &PointCloud) {
        let face = &mut self.mesh.faces[face_index];
        let Some(mut pts) = face.points_on_positive_side.take() else {
            return;
        };

        pts.retain(|&i| i != point);

        if pts.is_empty() {
            self.index_pool.reclaim(pts);
            return;
        }

        face.most_distant_point_dist = 0.0;
        for &i in &pts {
            let dist = face.plane.signed_distance(&cloud[i]);
            if dist > face.most_distant_point_dist {
                face.most_distant_point_dist = dist;
                face.most_distant_point = i;
            }
        }

        face.points_on_positive_side = Some(pts);
        face.flags.insert(FaceFlags::IN_FACE_QUEUE);
        self.face_list.push_back(face_index);
    }

    /// Replaces the visible faces by a cone of new faces joining the horizon to the active point.
    fn extrude(&mut self, active_point_index: usize, cloud: &PointCloud) {
        let horizon_edge_count = self.horizon_edges.len();
        let new_half_edge_count = horizon_edge_count * 2;
        let active_point = &cloud[active_point_index];

        self.new_face_indices.clear();
        self.new_half_edge_indices.clear();
        self.disabled_face_point_vectors.clear();

        // Everything but the horizon edges goes away. The freed half-edges are reused
        // right away for the new faces, the surplus is recycled later.
        for &face_index in &self.visible_faces {
            let face = &self.mesh.faces[face_index];
            let flags = face.flags;
            let half_edges = self.mesh.half_edge_indices_of_face(face);

            for (j, he) in half_edges.into_iter().enumerate() {
                if !flags.contains(FaceFlags::horizon_edge(j)) {
                    if self.new_half_edge_indices.len() < new_half_edge_count {
                        self.new_half_edge_indices.push(he);
                    } else {
                        self.mesh.disable_half_edge(he);
                    }
                }
            }

            if let Some(pts) = self.mesh.disable_face(face_index) {
                debug_assert!(!pts.is_empty());
                self.disabled_face_point_vectors.push(pts);
            }
        }

        while self.new_half_edge_indices.len() < new_half_edge_count {
            let he = self.mesh.add_half_edge();
            self.new_half_edge_indices.push(he);
        }

        for i in 0..horizon_edge_count {
            let ab = self.horizon_edges[i];
            let [a, b] = self
                .mesh
                .vertex_indices_of_half_edge(&self.mesh.half_edges[ab]);
            let c = active_point_index;

            let new_face_index = self.mesh.add_face();
            self.new_face_indices.push(new_face_index);

            let ca = self.new_half_edge_indices[2 * i];
            let bc = self.new_half_edge_indices[2 * i + 1];
            let prev_bc = if i > 0 {
                self.new_half_edge_indices[2 * i - 1]
            } else {
                self.new_half_edge_indices[new_half_edge_count - 1]
            };
            let next_ca = self.new_half_edge_indices[(2 * (i + 1)) % new_half_edge_count];

            let half_edges = &mut self.mesh.half_edges;
            half_edges[ab].next = bc;
            half_edges[ab].face = new_face_index;

            half_edges[bc].next = ca;
            half_edges[bc].face = new_face_index;
            half_edges[bc].end_vertex = c;
            half_edges[bc].opposite = next_ca;

            half_edges[ca].next = ab;
            half_edges[ca].face = new_face_index;
            half_edges[ca].end_vertex = a;
            half_edges[ca].opposite = prev_bc;

            let new_face = &mut self.mesh.faces[new_face_index];
            new_face.plane = Plane::new(
                triangle_normal(&cloud[a], &cloud[b], active_point),
                active_point,
            );
            new_face.half_edge = ab;
        }

        // Points outside of the removed faces are either outside of a new face, or inside the hull.
        for pts in self.disabled_face_point_vectors.drain(..) {
            for &point in &pts {
                if point == active_point_index {
                    continue;
                }

                for &new_face_index in &self.new_face_indices {
                    if add_point_to_face(
                        &mut self.mesh.faces[new_face_index],
                        point,
                        &cloud[point],
                        self.epsilon_squared,
                        &mut self.index_pool,
                    ) {
                        break;
                    }
                }
            }

            self.index_pool.reclaim(pts);
        }

        for &new_face_index in &self.new_face_indices {
            let new_face = &mut self.mesh.faces[new_face_index];
            if new_face.points_on_positive_side.is_some()
                && !new_face.flags.contains(FaceFlags::IN_FACE_QUEUE)
            {
                self.face_list.push_back(new_face_index);
                new_face.flags.insert(FaceFlags::IN_FACE_QUEUE);
            }
        }
    }
}

/// Assigns `point` to `face` if it lies strictly on its positive side, further than the tolerance.
pub(super) fn add_point_to_face(
    face: &mut BuilderFace,
    point_index: usize,
    point: &Point<Real>,
    epsilon_squared: Real,
    pool: &mut IndexVecPool,
) -> bool {
    let dist = face.plane.signed_distance(point);

    if dist > 0.0 && dist * dist > epsilon_squared * face.plane.normal_norm_squared {
        face.points_on_positive_side
            .get_or_insert_with(|| pool.get())
            .push(point_index);

        if dist > face.most_distant_point_dist {
            face.most_distant_point_dist = dist;
            face.most_distant_point = point_index;
        }

        true
    } else {
        false
    }
}
