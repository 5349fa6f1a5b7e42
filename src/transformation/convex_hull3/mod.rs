pub use self::convex_hull::{convex_hull, try_convex_hull, ConvexHull};
pub use self::error::ConvexHullError;
pub use self::half_edge_mesh::{HalfEdgeMesh, TopoFace, TopoHalfEdge};
pub use self::index_pool::IndexVecPool;
pub use self::mesh_builder::{BuilderFace, BuilderHalfEdge, FaceFlags, MeshBuilder};
#[cfg(feature = "parallel")]
pub use self::parallel::par_convex_hulls;
pub use self::quickhull::{DiagnosticData, QuickHull};
pub use self::settings::{QuickHullSettings, Winding};
pub use self::validation::{check_convex_hull, check_half_edge_mesh};

mod convex_hull;
mod error;
mod half_edge_mesh;
mod horizon;
mod index_pool;
mod initial_mesh;
mod mesh_builder;
#[cfg(feature = "parallel")]
mod parallel;
mod quickhull;
mod settings;
mod validation;
