//! Cycle enumeration on top of Tarjan's SCCs.

use crate::graph::Graph;
use crate::types::NodeId;

use super::tarjan;

/// Strongly connected components that contain a cycle: every component with
/// more than one node, plus singletons with a self-loop.
pub fn find_cycles<K: NodeId, N, E, G>(g: &Graph<K, N, E, G>) -> Vec<Vec<K>> {
    tarjan(g)
        .into_iter()
        .filter(|component| match component.as_slice() {
            [v] => g.out_edges(v, Some(v)).is_some_and(|loops| !loops.is_empty()),
            _ => component.len() > 1,
        })
        .collect()
}
