use super::mesh_builder::{FaceFlags, MeshBuilder};
use super::quickhull::QuickHull;
use crate::math::{Point, Real};

/// A face waiting to be tested for visibility, with the half-edge the exploration came from.
#[derive(Copy, Clone, Debug)]
pub(super) struct FaceData {
    pub face_index: usize,
    pub entered_from_half_edge: usize,
}

impl QuickHull {
    /// Collects every face that has `active_point` on its positive side, starting from
    /// `top_face_index`, and the half-edges bounding that region.
    ///
    /// The visible faces are stored in `self.visible_faces` and the (unordered) horizon
    /// edges in `self.horizon_edges`. The horizon edges are half-edges of visible faces;
    /// their positions within their face are recorded in the face's [`FaceFlags`].
    pub(super) fn find_horizon(
        &mut self,
        top_face_index: usize,
        active_point: &Point<Real>,
        iter: usize,
    ) {
        self.horizon_edges.clear();
        self.possibly_visible_faces.clear();
        self.visible_faces.clear();
        self.possibly_visible_faces.push(FaceData {
            face_index: top_face_index,
            entered_from_half_edge: usize::MAX,
        });

        while let Some(data) = self.possibly_visible_faces.pop() {
            let face = &mut self.mesh.faces[data.face_index];
            debug_assert!(!face.is_disabled());

            if face.visibility_checked_on_iteration == iter {
                if face.flags.contains(FaceFlags::VISIBLE) {
                    continue;
                }
            } else {
                face.visibility_checked_on_iteration = iter;

                if face.plane.signed_distance(active_point) > 0.0 {
                    face.flags.insert(FaceFlags::VISIBLE);
                    face.flags.remove(FaceFlags::HORIZON_EDGES);
                    self.visible_faces.push(data.face_index);

                    let half_edges = self
                        .mesh
                        .half_edge_indices_of_face(&self.mesh.faces[data.face_index]);
                    for he in half_edges {
                        let opposite = self.mesh.half_edges[he].opposite;
                        if opposite != data.entered_from_half_edge {
                            self.possibly_visible_faces.push(FaceData {
                                face_index: self.mesh.half_edges[opposite].face,
                                entered_from_half_edge: he,
                            });
                        }
                    }

                    continue;
                }
            }

            // Not visible: the edge we came through is on the horizon.
            face.flags.remove(FaceFlags::VISIBLE);

            if data.entered_from_half_edge == usize::MAX {
                log::error!("Face {} is not visible from its own most distant point.", top_face_index);
                continue;
            }

            self.horizon_edges.push(data.entered_from_half_edge);

            let source_face = self.mesh.half_edges[data.entered_from_half_edge].face;
            let half_edges = self
                .mesh
                .half_edge_indices_of_face(&self.mesh.faces[source_face]);
            if let Some(j) = half_edges
                .iter()
                .position(|he| *he == data.entered_from_half_edge)
            {
                self.mesh.faces[source_face]
                    .flags
                    .insert(FaceFlags::horizon_edge(j));
            }
        }
    }
}

/// Reorders `horizon_edges` so that each edge ends where the next one starts, the last
/// one ending where the first one starts.
///
/// Returns `false` if the edges do not form a single loop of at least three edges. The
/// order of `horizon_edges` is then unspecified.
pub(super) fn reorder_horizon_edges(mesh: &MeshBuilder, horizon_edges: &mut [usize]) -> bool {
    let half_edges = mesh.half_edges();
    let start_vertex = |he: usize| half_edges[half_edges[he].opposite].end_vertex;
    let num_edges = horizon_edges.len();

    if num_edges < 3 {
        return false;
    }

    for i in 0..num_edges - 1 {
        let end_vertex = half_edges[horizon_edges[i]].end_vertex;

        match (i + 1..num_edges).find(|&j| start_vertex(horizon_edges[j]) == end_vertex) {
            Some(j) => horizon_edges.swap(i + 1, j),
            None => return false,
        }
    }

    half_edges[horizon_edges[num_edges - 1]].end_vertex == start_vertex(horizon_edges[0])
}
