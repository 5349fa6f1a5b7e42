use super::mesh_builder::MeshBuilder;
use super::ConvexHullError;
use crate::math::{Point, Real, Vector};
use crate::utils::{triangle_normal, HalfEdgeIndex};
use alloc::vec::Vec;

/// A face of a [`HalfEdgeMesh`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TopoFace<I> {
    /// One of the three half-edges of this face.
    pub half_edge: I,
}

/// A half-edge of a [`HalfEdgeMesh`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TopoHalfEdge<I> {
    /// The vertex this half-edge points to.
    pub end_vertex: I,
    /// This half-edge twin on the adjacent face.
    pub opposite: I,
    /// The face this half-edge belongs to.
    pub face: I,
    /// The next half-edge of the same face.
    pub next: I,
}

/// A convex hull with explicit half-edge connectivity.
///
/// Every index is stored with the integer type `I`. All the faces are triangles whose
/// half-edges are linked counter-clockwise around their outward normal, and every
/// half-edge has an opposite: the mesh is closed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HalfEdgeMesh<I> {
    /// The hull vertices. Unlike the input cloud, it contains no interior point.
    pub vertices: Vec<Point<Real>>,
    /// The faces of the hull.
    pub faces: Vec<TopoFace<I>>,
    /// The half-edges of the hull.
    pub half_edges: Vec<TopoHalfEdge<I>>,
}

impl<I: HalfEdgeIndex> HalfEdgeMesh<I> {
    /// Builds a compact mesh from the enabled faces and half-edges of `builder`.
    ///
    /// Faces, half-edges, and vertices are renumbered in order of appearance.
    pub(super) fn from_builder(
        builder: &MeshBuilder,
        points: &[Point<Real>],
    ) -> Result<Self, ConvexHullError> {
        let convert = |i: usize| I::from_usize(i).ok_or(ConvexHullError::IndexOverflow { index: i });

        let mut face_map = vec![usize::MAX; builder.faces().len()];
        let mut half_edge_map = vec![usize::MAX; builder.half_edges().len()];
        let mut vertex_map = vec![usize::MAX; points.len()];

        let mut vertices = Vec::new();
        let mut num_faces = 0;

        for (i, face) in builder.faces().iter().enumerate() {
            if face.is_disabled() {
                continue;
            }

            face_map[i] = num_faces;
            num_faces += 1;

            for v in builder.vertex_indices_of_face(face) {
                if vertex_map[v] == usize::MAX {
                    vertex_map[v] = vertices.len();
                    vertices.push(points[v]);
                }
            }
        }

        let mut num_half_edges = 0;
        for (i, he) in builder.half_edges().iter().enumerate() {
            if !he.is_disabled() {
                half_edge_map[i] = num_half_edges;
                num_half_edges += 1;
            }
        }

        let mut faces = Vec::with_capacity(num_faces);
        for face in builder.faces().iter().filter(|f| !f.is_disabled()) {
            faces.push(TopoFace {
                half_edge: convert(half_edge_map[face.half_edge()])?,
            });
        }

        let mut half_edges = Vec::with_capacity(num_half_edges);
        for he in builder.half_edges().iter().filter(|he| !he.is_disabled()) {
            half_edges.push(TopoHalfEdge {
                end_vertex: convert(vertex_map[he.end_vertex])?,
                opposite: convert(half_edge_map[he.opposite])?,
                face: convert(face_map[he.face])?,
                next: convert(half_edge_map[he.next])?,
            });
        }

        Ok(HalfEdgeMesh {
            vertices,
            faces,
            half_edges,
        })
    }

    /// The number of faces of this mesh.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The indices of the three vertices of the `face`-th face, in the order of its half-edges.
    pub fn face_vertex_indices(&self, face: usize) -> [usize; 3] {
        let he0 = &self.half_edges[self.faces[face].half_edge.to_index()];
        let he1 = &self.half_edges[he0.next.to_index()];
        let he2 = &self.half_edges[he1.next.to_index()];
        [
            he0.end_vertex.to_index(),
            he1.end_vertex.to_index(),
            he2.end_vertex.to_index(),
        ]
    }

    /// The outward normal of the `face`-th face, with a norm equal to twice its area.
    pub fn face_normal(&self, face: usize) -> Vector<Real> {
        let [a, b, c] = self.face_vertex_indices(face);
        triangle_normal(&self.vertices[a], &self.vertices[b], &self.vertices[c])
    }
}
