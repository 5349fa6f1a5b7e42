use super::mesh_builder::MeshBuilder;
use super::quickhull::QuickHull;
use super::settings::QuickHullSettings;
use super::ConvexHullError;
use crate::math::{Point, Real};
use alloc::borrow::Cow;
use alloc::vec::Vec;

/// Computes the convex hull of a set of 3d points.
///
/// The hull vertices are copied to a compact vertex buffer. The triangles are wound
/// so that `(b - a) × (c - a)` points outward. Degenerate inputs give degenerate hulls
/// and an empty input gives an empty hull.
pub fn convex_hull(points: &[Point<Real>]) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    QuickHull::new()
        .convex_hull(points, &QuickHullSettings::default())
        .into_buffers()
}

/// Computes the convex hull of a set of 3d points, failing if a point could not be
/// added to the hull because of rounding errors.
///
/// See [`convex_hull`] for the output format.
pub fn try_convex_hull(
    points: &[Point<Real>],
) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), ConvexHullError> {
    let settings = QuickHullSettings::default().with_strict(true);
    QuickHull::new()
        .try_convex_hull(points, &settings)
        .map(ConvexHull::into_buffers)
}

/// A convex hull as an indexed triangle mesh.
///
/// If the hull was computed with [`QuickHullSettings::use_original_indices`], the vertex
/// buffer borrows the input point cloud and the indices refer to it. Otherwise it owns a
/// compact copy of the hull vertices only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvexHull<'a> {
    vertices: Cow<'a, [Point<Real>]>,
    indices: Vec<[u32; 3]>,
}

impl<'a> ConvexHull<'a> {
    /// Extracts the hull from the faces of `mesh` that are still enabled.
    ///
    /// The faces are visited in depth-first order across their edges, starting from the
    /// first enabled face.
    pub(super) fn from_mesh(
        mesh: &MeshBuilder,
        points: &'a [Point<Real>],
        settings: &QuickHullSettings,
    ) -> Self {
        let faces = mesh.faces();
        let half_edges = mesh.half_edges();

        let mut indices = Vec::with_capacity(mesh.num_enabled_faces());
        let mut compact_vertices = Vec::new();
        let mut vertex_map = Vec::new();

        if !settings.use_original_indices {
            vertex_map.resize(points.len(), u32::MAX);
        }

        let mut face_processed = vec![false; faces.len()];
        let mut stack = Vec::new();

        if let Some(first) = mesh.enabled_faces().next() {
            stack.push(first);
            face_processed[first] = true;
        }

        while let Some(face_index) = stack.pop() {
            let face = &faces[face_index];

            for he in mesh.half_edge_indices_of_face(face) {
                let adjacent = half_edges[half_edges[he].opposite].face;
                if !face_processed[adjacent] && !faces[adjacent].is_disabled() {
                    face_processed[adjacent] = true;
                    stack.push(adjacent);
                }
            }

            let vertices = mesh.vertex_indices_of_face(face).map(|i| {
                if settings.use_original_indices {
                    return i as u32;
                }

                if vertex_map[i] == u32::MAX {
                    vertex_map[i] = compact_vertices.len() as u32;
                    compact_vertices.push(points[i]);
                }
                vertex_map[i]
            });

            indices.push(settings.winding.apply(vertices));
        }

        let vertices = if settings.use_original_indices {
            Cow::Borrowed(points)
        } else {
            Cow::Owned(compact_vertices)
        };

        ConvexHull { vertices, indices }
    }

    /// The vertex buffer of this hull.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The triangles of this hull, as indices into [`ConvexHull::vertices`].
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The triangles of this hull as a flat index buffer, three indices per triangle.
    pub fn flat_indices(&self) -> &[u32] {
        self.indices.as_flattened()
    }

    /// The number of triangles of this hull.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Is this hull empty, i.e., was it computed from an empty point cloud?
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Consumes this hull and returns its vertex and index buffers.
    pub fn into_buffers(self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        (self.vertices.into_owned(), self.indices)
    }

    /// Copies the borrowed vertex buffer, if any, so the hull no longer borrows the input.
    pub fn into_owned(self) -> ConvexHull<'static> {
        ConvexHull {
            vertices: Cow::Owned(self.vertices.into_owned()),
            indices: self.indices,
        }
    }
}
