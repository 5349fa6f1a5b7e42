use crate::math::Real;
use crate::shape::Plane;
use alloc::vec::Vec;

/// Index used to mark disabled faces and half-edges.
const DISABLED: usize = usize::MAX;

bitflags::bitflags! {
    /// Per-iteration state of a face of the hull under construction.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FaceFlags: u8 {
        /// The face is visible from the point being added on the current iteration.
        const VISIBLE = 1;
        /// The face is currently in the queue of faces with outstanding points.
        const IN_FACE_QUEUE = 1 << 1;
        /// The first half-edge of the face is a horizon edge on the current iteration.
        const HORIZON_EDGE_0 = 1 << 2;
        /// The second half-edge of the face is a horizon edge on the current iteration.
        const HORIZON_EDGE_1 = 1 << 3;
        /// The third half-edge of the face is a horizon edge on the current iteration.
        const HORIZON_EDGE_2 = 1 << 4;
        /// All the horizon-edge bits.
        const HORIZON_EDGES = Self::HORIZON_EDGE_0.bits() | Self::HORIZON_EDGE_1.bits() | Self::HORIZON_EDGE_2.bits();
    }
}

impl FaceFlags {
    /// The flag marking the `i`-th half-edge of a face (`i < 3`) as a horizon edge.
    #[inline]
    pub fn horizon_edge(i: usize) -> Self {
        debug_assert!(i < 3);
        Self::from_bits_retain(Self::HORIZON_EDGE_0.bits() << i)
    }
}

/// A half-edge of the mesh under construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuilderHalfEdge {
    /// The vertex this half-edge points to. Equal to `usize::MAX` if the half-edge is disabled.
    pub end_vertex: usize,
    /// The half-edge going in the opposite direction, on the adjacent face.
    pub opposite: usize,
    /// The face this half-edge belongs to.
    pub face: usize,
    /// The next half-edge of the same face.
    pub next: usize,
}

impl Default for BuilderHalfEdge {
    fn default() -> Self {
        BuilderHalfEdge {
            end_vertex: DISABLED,
            opposite: DISABLED,
            face: DISABLED,
            next: DISABLED,
        }
    }
}

impl BuilderHalfEdge {
    fn new(end_vertex: usize, opposite: usize, face: usize, next: usize) -> Self {
        BuilderHalfEdge {
            end_vertex,
            opposite,
            face,
            next,
        }
    }

    /// Marks this half-edge as disabled.
    #[inline]
    pub fn disable(&mut self) {
        self.end_vertex = DISABLED;
    }

    /// Is this half-edge disabled?
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.end_vertex == DISABLED
    }
}

/// A triangular face of the mesh under construction.
#[derive(Clone, Debug)]
pub struct BuilderFace {
    pub(crate) half_edge: usize,
    pub(crate) plane: Plane,
    pub(crate) most_distant_point_dist: Real,
    pub(crate) most_distant_point: usize,
    pub(crate) visibility_checked_on_iteration: usize,
    pub(crate) flags: FaceFlags,
    pub(crate) points_on_positive_side: Option<Vec<usize>>,
}

impl Default for BuilderFace {
    fn default() -> Self {
        BuilderFace {
            half_edge: DISABLED,
            plane: Plane::default(),
            most_distant_point_dist: 0.0,
            most_distant_point: 0,
            visibility_checked_on_iteration: 0,
            flags: FaceFlags::empty(),
            points_on_positive_side: None,
        }
    }
}

impl BuilderFace {
    fn with_half_edge(half_edge: usize) -> Self {
        BuilderFace {
            half_edge,
            ..Default::default()
        }
    }

    /// One of the three half-edges of this face.
    #[inline]
    pub fn half_edge(&self) -> usize {
        self.half_edge
    }

    /// The supporting plane of this face, with an outward normal.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// The points assigned to the positive side of this face, if any.
    #[inline]
    pub fn points_on_positive_side(&self) -> Option<&[usize]> {
        self.points_on_positive_side.as_deref()
    }

    /// The point of [`Self::points_on_positive_side`] farthest from this face’s plane.
    #[inline]
    pub fn most_distant_point(&self) -> usize {
        self.most_distant_point
    }

    /// The flags of this face for the current iteration.
    #[inline]
    pub fn flags(&self) -> FaceFlags {
        self.flags
    }

    /// Marks this face as disabled.
    #[inline]
    pub fn disable(&mut self) {
        self.half_edge = DISABLED;
    }

    /// Is this face disabled?
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.half_edge == DISABLED
    }
}

/// A triangle mesh with half-edge connectivity, modified in place by the QuickHull iterations.
///
/// Faces and half-edges are never removed from their arrays: they are disabled and their
/// slot index is pushed to a free-list so it can be reused by the next `add_*` call.
/// Indices thus remain stable until the next call to [`MeshBuilder::setup`].
#[derive(Clone, Debug, Default)]
pub struct MeshBuilder {
    pub(crate) faces: Vec<BuilderFace>,
    pub(crate) half_edges: Vec<BuilderHalfEdge>,
    pub(crate) disabled_faces: Vec<usize>,
    pub(crate) disabled_half_edges: Vec<usize>,
}

impl MeshBuilder {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every face and half-edge from this mesh.
    pub fn clear(&mut self) {
        self.faces.clear();
        self.half_edges.clear();
        self.disabled_faces.clear();
        self.disabled_half_edges.clear();
    }

    /// All the face slots of this mesh, including the disabled ones.
    pub fn faces(&self) -> &[BuilderFace] {
        &self.faces
    }

    /// All the half-edge slots of this mesh, including the disabled ones.
    pub fn half_edges(&self) -> &[BuilderHalfEdge] {
        &self.half_edges
    }

    /// The number of faces that are not disabled.
    pub fn num_enabled_faces(&self) -> usize {
        self.faces.len() - self.disabled_faces.len()
    }

    /// The number of half-edges that are not disabled.
    pub fn num_enabled_half_edges(&self) -> usize {
        self.half_edges.len() - self.disabled_half_edges.len()
    }

    /// Iterates through the indices of all the faces that are not disabled.
    pub fn enabled_faces(&self) -> impl Iterator<Item = usize> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.is_disabled())
            .map(|(i, _)| i)
    }

    /// Adds a face, reusing the slot of a disabled face if there is one.
    ///
    /// The returned face must be fully initialized by the caller.
    pub fn add_face(&mut self) -> usize {
        if let Some(index) = self.disabled_faces.pop() {
            let face = &mut self.faces[index];
            debug_assert!(face.is_disabled());
            debug_assert!(face.points_on_positive_side.is_none());
            face.most_distant_point_dist = 0.0;
            return index;
        }

        self.faces.push(BuilderFace::default());
        self.faces.len() - 1
    }

    /// Adds a half-edge, reusing the slot of a disabled half-edge if there is one.
    ///
    /// The returned half-edge must be fully initialized by the caller.
    pub fn add_half_edge(&mut self) -> usize {
        if let Some(index) = self.disabled_half_edges.pop() {
            return index;
        }

        self.half_edges.push(BuilderHalfEdge::default());
        self.half_edges.len() - 1
    }

    /// Disables a face and hands the points that were on its positive side over to the caller.
    ///
    /// The caller is responsible for reassigning these points or for giving the
    /// list back to the [`IndexVecPool`](super::IndexVecPool).
    pub fn disable_face(&mut self, face_index: usize) -> Option<Vec<usize>> {
        let face = &mut self.faces[face_index];
        face.disable();
        self.disabled_faces.push(face_index);
        face.points_on_positive_side.take()
    }

    /// Disables a half-edge so its slot can be reused.
    pub fn disable_half_edge(&mut self, half_edge_index: usize) {
        self.half_edges[half_edge_index].disable();
        self.disabled_half_edges.push(half_edge_index);
    }

    /// Resets this mesh to the tetrahedron `abcd`.
    ///
    /// The faces are `abc`, `acd`, `bad`, and `cbd`, with indices 0 to 3. The orientation
    /// must have been chosen by the caller so that `d` lies on the negative side of `abc`;
    /// every face normal then points outward.
    pub fn setup(&mut self, a: usize, b: usize, c: usize, d: usize) {
        self.clear();
        self.faces.reserve(4);
        self.half_edges.reserve(12);

        // Each row: end vertex, opposite, face, next.
        self.half_edges.extend_from_slice(&[
            // Face abc.
            BuilderHalfEdge::new(b, 6, 0, 1),  // ab
            BuilderHalfEdge::new(c, 9, 0, 2),  // bc
            BuilderHalfEdge::new(a, 3, 0, 0),  // ca
            // Face acd.
            BuilderHalfEdge::new(c, 2, 1, 4),  // ac
            BuilderHalfEdge::new(d, 11, 1, 5), // cd
            BuilderHalfEdge::new(a, 7, 1, 3),  // da
            // Face bad.
            BuilderHalfEdge::new(a, 0, 2, 7),  // ba
            BuilderHalfEdge::new(d, 5, 2, 8),  // ad
            BuilderHalfEdge::new(b, 10, 2, 6), // db
            // Face cbd.
            BuilderHalfEdge::new(b, 1, 3, 10), // cb
            BuilderHalfEdge::new(d, 8, 3, 11), // bd
            BuilderHalfEdge::new(c, 4, 3, 9),  // dc
        ]);

        self.faces.extend([
            BuilderFace::with_half_edge(0),
            BuilderFace::with_half_edge(3),
            BuilderFace::with_half_edge(6),
            BuilderFace::with_half_edge(9),
        ]);
    }

    /// The three vertices of `face`, in the order they are traversed by its half-edges.
    pub fn vertex_indices_of_face(&self, face: &BuilderFace) -> [usize; 3] {
        let he0 = &self.half_edges[face.half_edge];
        let he1 = &self.half_edges[he0.next];
        let he2 = &self.half_edges[he1.next];
        [he0.end_vertex, he1.end_vertex, he2.end_vertex]
    }

    /// The start and end vertices of `half_edge`.
    pub fn vertex_indices_of_half_edge(&self, half_edge: &BuilderHalfEdge) -> [usize; 2] {
        [
            self.half_edges[half_edge.opposite].end_vertex,
            half_edge.end_vertex,
        ]
    }

    /// The three half-edges of `face`, starting with its representative half-edge.
    pub fn half_edge_indices_of_face(&self, face: &BuilderFace) -> [usize; 3] {
        let he1 = self.half_edges[face.half_edge].next;
        [face.half_edge, he1, self.half_edges[he1].next]
    }
}
