//! Topological ordering and acyclicity check.

use std::collections::HashSet;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, NodeId};

/// Order the nodes so that for every edge u -> v, u comes before v.
///
/// Walks predecessors starting from every sink and emits a node once all
/// of its predecessors are emitted. Fails with [`GraphError::Cycle`] when a
/// back edge is found, or when some nodes are unreachable from any sink.
pub fn topsort<K: NodeId, N, E, G>(g: &Graph<K, N, E, G>) -> GraphResult<Vec<K>> {
    let mut visited: HashSet<&K> = HashSet::with_capacity(g.node_count());
    let mut on_path: HashSet<&K> = HashSet::new();
    let mut results: Vec<K> = Vec::with_capacity(g.node_count());
    let mut stack = Vec::new();

    for sink in g.sinks() {
        if !visited.insert(sink) {
            continue;
        }
        on_path.insert(sink);
        stack.push((sink, g.predecessors(sink).unwrap_or_default().into_iter()));

        loop {
            let step = match stack.last_mut() {
                Some((_, pending)) => pending.next(),
                None => break,
            };
            match step {
                Some(w) => {
                    if on_path.contains(w) {
                        log::debug!("topsort: back edge into {:?}", w);
                        return Err(GraphError::Cycle);
                    }
                    if visited.insert(w) {
                        on_path.insert(w);
                        stack.push((w, g.predecessors(w).unwrap_or_default().into_iter()));
                    }
                }
                None => {
                    if let Some((v, _)) = stack.pop() {
                        on_path.remove(v);
                        results.push(v.clone());
                    }
                }
            }
        }
    }

    if visited.len() != g.node_count() {
        log::debug!(
            "topsort: {} of {} nodes unreachable from sinks",
            g.node_count() - visited.len(),
            g.node_count()
        );
        return Err(GraphError::Cycle);
    }
    Ok(results)
}

/// Whether the graph has no cycles. Errors other than the cycle signal are
/// propagated.
pub fn is_acyclic<K: NodeId, N, E, G>(g: &Graph<K, N, E, G>) -> GraphResult<bool> {
    match topsort(g) {
        Ok(_) => Ok(true),
        Err(GraphError::Cycle) => Ok(false),
        Err(e) => Err(e),
    }
}
