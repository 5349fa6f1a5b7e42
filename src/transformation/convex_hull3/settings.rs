use crate::math::{Real, DEFAULT_EPSILON};

/// The winding order of the triangles output by the convex hull computation.
///
/// The half-edge mesh built by QuickHull stores every face as a triangle `(a, b, c)`
/// whose outward normal is `(a - c) × (b - c)`: seen from outside the hull, its vertices
/// are wound clockwise in a left-handed (screen-space) frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Winding {
    /// Triangles are output in the order they are stored in the half-edge mesh: `(v0, v1, v2)`.
    ///
    /// With this winding, `(v1 - v0) × (v2 - v0)` is the outward normal of every triangle.
    #[default]
    Clockwise,
    /// The last two vertices of each triangle are swapped: `(v0, v2, v1)`.
    CounterClockwise,
}

impl Winding {
    /// Reorders the vertices of a face of the half-edge mesh to follow this winding.
    #[inline]
    pub fn apply<T: Copy>(self, face: [T; 3]) -> [T; 3] {
        match self {
            Winding::Clockwise => face,
            Winding::CounterClockwise => [face[0], face[2], face[1]],
        }
    }
}

/// Parameters of a convex hull computation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct QuickHullSettings {
    /// The winding of the output triangles.
    pub winding: Winding,
    /// If `true`, the output index buffer refers to the input point cloud directly
    /// (and the output vertex buffer is that cloud). Otherwise, the hull vertices are
    /// copied to a compact vertex buffer.
    pub use_original_indices: bool,
    /// The base tolerance of the geometric tests.
    ///
    /// It is multiplied by the largest absolute coordinate of the extreme points of
    /// the cloud before being used.
    pub epsilon: Real,
    /// If `true`, failing to build the horizon of a point is reported as an error by the
    /// `try_*` entry points instead of only being counted in the [`DiagnosticData`](super::DiagnosticData).
    pub strict: bool,
}

impl Default for QuickHullSettings {
    fn default() -> Self {
        Self {
            winding: Winding::default(),
            use_original_indices: false,
            epsilon: DEFAULT_EPSILON,
            strict: false,
        }
    }
}

impl QuickHullSettings {
    /// Sets the winding of the output triangles.
    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    /// Sets whether the output should index the input point cloud directly.
    pub fn with_original_indices(mut self, use_original_indices: bool) -> Self {
        self.use_original_indices = use_original_indices;
        self
    }

    /// Sets the base tolerance of the geometric tests.
    pub fn with_epsilon(mut self, epsilon: Real) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets whether horizon failures are reported as errors.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
