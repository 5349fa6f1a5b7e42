use crate::math::{Point, Real, Vector};

/// An infinite line defined by an origin and a (non-normalized) direction.
///
/// The inverse of the squared direction length is cached so that distance queries
/// against many points do not repeat the division.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Ray {
    /// A point of the line.
    pub origin: Point<Real>,
    /// The direction of the line. Must not be zero.
    pub dir: Vector<Real>,
    /// The cached value of `1.0 / dir.norm_squared()`.
    pub inv_dir_norm_squared: Real,
}

impl Ray {
    /// Creates a new ray starting at `origin` and pointing toward `dir`.
    #[inline]
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Self {
        Ray {
            origin,
            dir,
            inv_dir_norm_squared: 1.0 / dir.norm_squared(),
        }
    }

    /// The squared distance between `point` and the infinite line supporting this ray.
    ///
    /// This is `|s|² - (s·dir)² / |dir|²` with `s = point - origin`, evaluated as
    /// `|s × dir|² / |dir|²` so that exactly collinear points yield exactly zero.
    #[inline]
    pub fn squared_distance_to_point(&self, point: &Point<Real>) -> Real {
        let s = point - self.origin;
        s.cross(&self.dir).norm_squared() * self.inv_dir_norm_squared
    }
}
