//! Connected components, ignoring edge direction.

use std::collections::HashSet;

use crate::graph::Graph;
use crate::types::NodeId;

/// Partition the nodes into weakly connected components.
///
/// Isolated nodes form singleton components.
pub fn components<K: NodeId, N, E, G>(g: &Graph<K, N, E, G>) -> Vec<Vec<K>> {
    let adjacent = |v: &K| {
        let mut out = g.successors(v).unwrap_or_default();
        out.extend(g.predecessors(v).unwrap_or_default());
        out
    };

    let mut visited: HashSet<&K> = HashSet::with_capacity(g.node_count());
    let mut result: Vec<Vec<K>> = Vec::new();
    let mut stack = Vec::new();

    for start in g.nodes() {
        if !visited.insert(start) {
            continue;
        }
        let mut component = vec![start.clone()];
        stack.push(adjacent(start).into_iter());

        loop {
            let step = match stack.last_mut() {
                Some(pending) => pending.next(),
                None => break,
            };
            match step {
                Some(w) => {
                    if visited.insert(w) {
                        component.push(w.clone());
                        stack.push(adjacent(w).into_iter());
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
        result.push(component);
    }
    result
}
