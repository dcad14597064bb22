//! Node identifier trait.

use std::fmt::Debug;
use std::hash::Hash;

/// An opaque, totally ordered, hashable node identifier.
///
/// Identity is exact equality of the value; nothing is coerced to strings.
/// `Ord` canonicalizes endpoint order of undirected edges.
pub trait NodeId: Clone + Eq + Hash + Ord + Debug {
    /// Whether this value may name a node. Checked on every node creation.
    fn is_valid_id(&self) -> bool {
        true
    }
}

impl NodeId for String {
    fn is_valid_id(&self) -> bool {
        !self.is_empty()
    }
}

impl NodeId for &str {
    fn is_valid_id(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! impl_node_id_for_ints {
    ($($t:ty),*) => {
        $(impl NodeId for $t {})*
    };
}

impl_node_id_for_ints!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char);

/// Render an identifier for error messages.
pub(crate) fn describe<K: Debug>(id: &K) -> String {
    format!("{:?}", id)
}
