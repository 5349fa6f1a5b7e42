use crate::math::Real;

/// Errors that can occur during or after a convex hull computation.
///
/// The lenient entry points ([`convex_hull`], [`QuickHull::convex_hull`]) never fail:
/// degenerate inputs produce a degenerate hull and numerical failures are only counted
/// in the [`DiagnosticData`]. Errors are reported by:
///
/// - the `try_*` entry points, when strict mode is enabled ([`ConvexHullError::HorizonEdgeLoop`]),
/// - the export to a [`HalfEdgeMesh`] with a narrow index type ([`ConvexHullError::IndexOverflow`]),
/// - the validation functions [`check_convex_hull`] and [`check_half_edge_mesh`] (every other variant).
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use quickhull3d::math::Point;
/// use quickhull3d::transformation::{try_convex_hull, ConvexHullError};
///
/// let points = vec![
///     Point::origin(),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(0.0, 0.0, 1.0),
/// ];
///
/// match try_convex_hull(&points) {
///     Ok((vertices, indices)) => {
///         println!("Computed hull with {} faces", indices.len());
///     }
///     Err(ConvexHullError::HorizonEdgeLoop { point }) => {
///         println!("The hull could not be extruded toward point {}", point);
///     }
///     Err(err) => {
///         println!("Unexpected error: {}", err);
///     }
/// }
/// # }
/// ```
///
/// [`convex_hull`]: crate::transformation::convex_hull
/// [`QuickHull::convex_hull`]: crate::transformation::QuickHull::convex_hull
/// [`DiagnosticData`]: crate::transformation::DiagnosticData
/// [`HalfEdgeMesh`]: crate::transformation::HalfEdgeMesh
/// [`check_convex_hull`]: crate::transformation::check_convex_hull
/// [`check_half_edge_mesh`]: crate::transformation::check_half_edge_mesh
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConvexHullError {
    /// The horizon edges around a point could not be ordered into a single loop.
    ///
    /// This happens with nearly coplanar faces around the point, because of rounding
    /// errors. It is only reported in strict mode; otherwise the point is ignored.
    #[error("Failed to order the horizon edges around point {point} into a loop.")]
    HorizonEdgeLoop {
        /// The index of the point the hull was being extruded toward.
        point: usize,
    },

    /// An index of the hull cannot be represented by the requested index type.
    #[error("Index {index} does not fit into the requested index type.")]
    IndexOverflow {
        /// The index that does not fit.
        index: usize,
    },

    /// A triangle has at least two identical vertices.
    #[error("Detected degenerate triangle {0}")]
    DegenerateTriangle(usize),

    /// An edge is shared by more than two triangles.
    ///
    /// The error reports the triangle where it was detected and the vertices of the edge.
    #[error("Detected t-junction for triangle {0}, edge: ({1}, {2})")]
    TJunction(usize, u32, u32),

    /// An edge belongs to a single triangle: the mesh is not closed.
    #[error("Detected unfinished triangle")]
    UnfinishedTriangle,

    /// The mesh is closed but does not have the topology of a sphere.
    #[error("Invalid Euler characteristic: expected 2, found {0}")]
    EulerCharacteristic(isize),

    /// A point lies strictly outside of the plane of one of the hull triangles.
    #[error("Point {point} lies outside of triangle {triangle} (distance: {distance})")]
    PointOutsideHull {
        /// The index of the offending point.
        point: usize,
        /// The index of the triangle.
        triangle: usize,
        /// The distance from the point to the triangle's plane.
        distance: Real,
    },

    /// The connectivity of a half-edge is inconsistent (its opposite, next or face link is wrong).
    #[error("Inconsistent links for half-edge {half_edge}")]
    BrokenLink {
        /// The index of the offending half-edge.
        half_edge: usize,
    },
}
