//! Various unsorted geometrical and logical operators.

pub use self::index_type::HalfEdgeIndex;
pub use self::sorted_pair::SortedPair;
pub use self::triangle_normal::triangle_normal;

pub mod hashmap;
mod index_type;
mod sorted_pair;
mod triangle_normal;
