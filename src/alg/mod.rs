//! Graph algorithms operating through the Graph query interface.
//!
//! Every walk uses an explicit work stack, so deep graphs do not exhaust the
//! call stack. Neighbors are visited in the order the adjacency queries
//! return them.

pub mod components;
pub mod dfs;
pub mod dijkstra;
pub mod find_cycles;
pub mod floyd_warshall;
pub mod prim;
pub mod tarjan;
pub mod topsort;

pub use components::components;
pub use dfs::{dfs, postorder, preorder, DfsOrder};
pub use dijkstra::{dijkstra, dijkstra_all, dijkstra_all_with, dijkstra_with};
pub use find_cycles::find_cycles;
pub use floyd_warshall::{floyd_warshall, floyd_warshall_with};
pub use prim::prim;
pub use tarjan::tarjan;
pub use topsort::{is_acyclic, topsort};

use crate::graph::Graph;
use crate::types::{Edge, NodeId};

/// Shortest-path entry for one target node.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<K> {
    /// Total weight from the source; `f64::INFINITY` when unreachable.
    pub distance: f64,
    /// Node preceding the target on the shortest path.
    pub predecessor: Option<K>,
}

/// Weight function giving every edge weight 1.
pub fn unit_weight<K>(_: &Edge<K>) -> f64 {
    1.0
}

/// Incidence function following edges out of `v`.
pub fn outgoing<K: NodeId, N, E, G>(g: &Graph<K, N, E, G>, v: &K) -> Vec<Edge<K>> {
    g.out_edges(v, None)
        .unwrap_or_default()
        .into_iter()
        .cloned()
        .collect()
}

/// Incidence function following every edge touching `v`, regardless of
/// direction. The usual choice for undirected graphs.
pub fn incident<K: NodeId, N, E, G>(g: &Graph<K, N, E, G>, v: &K) -> Vec<Edge<K>> {
    g.node_edges(v, None)
        .unwrap_or_default()
        .into_iter()
        .cloned()
        .collect()
}
