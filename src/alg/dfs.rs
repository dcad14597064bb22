//! Depth-first traversal in pre- or post-order.

use std::collections::HashSet;

use crate::graph::Graph;
use crate::types::node_id::describe;
use crate::types::{GraphError, GraphResult, NodeId};

/// When a node is emitted relative to its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsOrder {
    /// Before its unvisited neighbors.
    Pre,
    /// After its unvisited neighbors.
    Post,
}

/// Depth-first walk from each of `roots` in turn.
///
/// Follows successors in directed graphs and neighbors in undirected ones.
/// The visited set is shared across roots, so each node appears once.
pub fn dfs<K: NodeId, N, E, G>(
    g: &Graph<K, N, E, G>,
    roots: &[K],
    order: DfsOrder,
) -> GraphResult<Vec<K>> {
    if let Some(missing) = roots.iter().find(|r| !g.has_node(r)) {
        return Err(GraphError::NodeNotFound(describe(missing)));
    }

    let navigate = |v: &K| {
        let adjacent = if g.is_directed() {
            g.successors(v)
        } else {
            g.neighbors(v)
        };
        adjacent.unwrap_or_default()
    };

    let mut visited: HashSet<K> = HashSet::with_capacity(g.node_count());
    let mut out: Vec<K> = Vec::with_capacity(g.node_count());
    let mut stack = Vec::new();

    for root in roots {
        if !visited.insert(root.clone()) {
            continue;
        }
        if order == DfsOrder::Pre {
            out.push(root.clone());
        }
        stack.push((root.clone(), navigate(root).into_iter()));

        loop {
            let step = match stack.last_mut() {
                Some((_, pending)) => pending.next(),
                None => break,
            };
            match step {
                Some(w) => {
                    if visited.insert(w.clone()) {
                        if order == DfsOrder::Pre {
                            out.push(w.clone());
                        }
                        stack.push((w.clone(), navigate(w).into_iter()));
                    }
                }
                None => {
                    if let Some((v, _)) = stack.pop() {
                        if order == DfsOrder::Post {
                            out.push(v);
                        }
                    }
                }
            }
        }
    }
    Ok(out)
}

/// Nodes in depth-first preorder from `roots`.
pub fn preorder<K: NodeId, N, E, G>(g: &Graph<K, N, E, G>, roots: &[K]) -> GraphResult<Vec<K>> {
    dfs(g, roots, DfsOrder::Pre)
}

/// Nodes in depth-first postorder from `roots`.
pub fn postorder<K: NodeId, N, E, G>(g: &Graph<K, N, E, G>, roots: &[K]) -> GraphResult<Vec<K>> {
    dfs(g, roots, DfsOrder::Post)
}
