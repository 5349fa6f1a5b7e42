/*!
quickhull3d
===========

**quickhull3d** computes the convex hull of a 3-dimensional point cloud with an
incremental QuickHull algorithm operating on an explicit half-edge mesh.

The result is available either as an indexed triangle mesh ([`transformation::ConvexHull`])
or as a half-edge mesh with explicit connectivity ([`transformation::HalfEdgeMesh`]).

```
# #[cfg(feature = "f32")] {
use quickhull3d::math::Point;
use quickhull3d::transformation;

let points = [
    Point::new(0.0, 0.0, 0.0),
    Point::new(1.0, 0.0, 0.0),
    Point::new(0.0, 1.0, 0.0),
    Point::new(0.0, 0.0, 1.0),
    Point::new(0.1, 0.1, 0.1), // Inside the tetrahedron.
];

let (vertices, indices) = transformation::convex_hull(&points);
assert_eq!(vertices.len(), 4);
assert_eq!(indices.len(), 4);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The default tolerance used for geometric operations.
    ///
    /// This is the base epsilon of the convex hull computation. It is multiplied by
    /// the extent of the point cloud before being used.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
