use crate::math::{Point, Real, Vector};

/// Computes the (non-normalized) normal of the triangle `abc`.
///
/// This is the cross product `(a - c) × (b - c)`, which equals `(b - a) × (c - a)`.
/// The normal points toward a viewer who sees `a`, `b`, `c` wound clockwise in a
/// left-handed (screen-space) frame. Its norm is twice the area of the triangle, which
/// is why it is not normalized: the convex hull tolerances rely on that magnitude.
#[inline]
pub fn triangle_normal(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Vector<Real> {
    (a - c).cross(&(b - c))
}
