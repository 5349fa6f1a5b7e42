use crate::math::{Point, Real};
use alloc::borrow::Cow;
use core::ops::Index;

/// A read-only view over a point cloud.
///
/// The view borrows the caller's buffer. The only way to modify it is
/// [`PointCloud::push_synthetic_point`] which copies the borrowed points into an owned
/// buffer first, leaving the caller's buffer untouched.
#[derive(Clone, Debug, Default)]
pub struct PointCloud<'a> {
    points: Cow<'a, [Point<Real>]>,
}

impl<'a> PointCloud<'a> {
    /// Creates a view over `points` without copying them.
    #[inline]
    pub fn new(points: &'a [Point<Real>]) -> Self {
        PointCloud {
            points: Cow::Borrowed(points),
        }
    }

    /// The number of points in this cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this cloud empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points of this cloud.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Does this view own a copy of the points (i.e. was a synthetic point added)?
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self.points, Cow::Owned(_))
    }

    /// Appends a point that is not part of the caller's cloud and returns its index.
    ///
    /// This copies the whole cloud the first time it is called.
    pub fn push_synthetic_point(&mut self, point: Point<Real>) -> usize {
        let points = self.points.to_mut();
        points.push(point);
        points.len() - 1
    }

    /// Iterates through the points of this cloud.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Point<Real>> {
        self.points.iter()
    }
}

impl Index<usize> for PointCloud<'_> {
    type Output = Point<Real>;

    #[inline]
    fn index(&self, i: usize) -> &Point<Real> {
        &self.points[i]
    }
}

impl<'a> From<&'a [Point<Real>]> for PointCloud<'a> {
    fn from(points: &'a [Point<Real>]) -> Self {
        PointCloud::new(points)
    }
}
