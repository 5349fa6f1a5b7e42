use core::fmt::Debug;
use core::hash::Hash;
use num::{PrimInt, Unsigned};

/// An unsigned integer type usable as the index type of a [`HalfEdgeMesh`](crate::transformation::HalfEdgeMesh).
///
/// This is automatically implemented for `u8`, `u16`, `u32`, `u64`, and `usize`.
pub trait HalfEdgeIndex: PrimInt + Unsigned + Hash + Debug + Send + Sync + 'static {
    /// Converts `i` to this index type, returning `None` if it does not fit.
    #[inline]
    fn from_usize(i: usize) -> Option<Self> {
        <Self as num::NumCast>::from(i)
    }

    /// Converts this index to a `usize`.
    ///
    /// Saturates to `usize::MAX` if the value does not fit, which cannot happen for
    /// indices created by [`HalfEdgeIndex::from_usize`].
    #[inline]
    fn to_index(self) -> usize {
        self.to_usize().unwrap_or(usize::MAX)
    }
}

impl<T: PrimInt + Unsigned + Hash + Debug + Send + Sync + 'static> HalfEdgeIndex for T {}
