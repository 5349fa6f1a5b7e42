//! Convex hull computation and export of the resulting meshes.

pub use self::convex_hull3::{
    check_convex_hull, check_half_edge_mesh, convex_hull, try_convex_hull, BuilderFace,
    BuilderHalfEdge, ConvexHull, ConvexHullError, DiagnosticData, FaceFlags, HalfEdgeMesh,
    IndexVecPool, MeshBuilder, QuickHull, QuickHullSettings, TopoFace, TopoHalfEdge, Winding,
};
#[cfg(feature = "parallel")]
pub use self::convex_hull3::par_convex_hulls;

mod convex_hull3;

#[cfg(feature = "wavefront")]
pub mod wavefront;
