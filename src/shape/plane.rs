use crate::math::{Point, Real, Vector};

/// An infinite plane with a non-normalized normal.
///
/// The plane is the set of points `p` such that `normal.dot(p) + bias == 0`. Because
/// the normal is not normalized, the values returned by [`Plane::signed_distance`]
/// are expressed in units of `normal.norm()`. Callers comparing them against a
/// tolerance `eps` should compare their square against `eps * eps * normal_norm_squared`
/// instead of taking a square root.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The (non-normalized) normal of the plane. Points on its positive side are "in front" of it.
    pub normal: Vector<Real>,
    /// The plane offset, i.e., `-normal.dot(p)` for any point `p` on the plane.
    pub bias: Real,
    /// The cached value of `normal.norm_squared()`.
    pub normal_norm_squared: Real,
}

impl Default for Plane {
    fn default() -> Self {
        Plane {
            normal: Vector::zeros(),
            bias: 0.0,
            normal_norm_squared: 0.0,
        }
    }
}

impl Plane {
    /// Builds the plane with the given normal passing through `point`.
    #[inline]
    pub fn new(normal: Vector<Real>, point: &Point<Real>) -> Self {
        Plane {
            normal,
            bias: -normal.dot(&point.coords),
            normal_norm_squared: normal.norm_squared(),
        }
    }

    /// The signed distance of `point` to this plane, relative to the length of `self.normal`.
    #[inline]
    pub fn signed_distance(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) + self.bias
    }

    /// Is `point` on the positive side of this plane, or on the plane itself?
    #[inline]
    pub fn is_point_on_positive_side(&self, point: &Point<Real>) -> bool {
        self.signed_distance(point) >= 0.0
    }
}
