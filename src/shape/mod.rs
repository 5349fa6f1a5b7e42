//! Geometric primitives used by the convex hull computation.

pub use self::plane::Plane;
pub use self::point_cloud::PointCloud;
pub use self::ray::Ray;

mod plane;
mod point_cloud;
mod ray;
