//! Minimum spanning tree with Prim's algorithm.

use std::collections::HashMap;

use crate::graph::Graph;
use crate::queue::PriorityQueue;
use crate::types::{Edge, GraphError, GraphOptions, GraphResult, NodeId};

/// Minimum spanning tree of a connected graph, as a new undirected graph
/// over the same nodes.
///
/// Edge direction is ignored. Fails with [`GraphError::Disconnected`] when
/// some node cannot be reached from the first node.
pub fn prim<K, N, E, G, W>(g: &Graph<K, N, E, G>, weight: W) -> GraphResult<Graph<K>>
where
    K: NodeId,
    W: Fn(&Edge<K>) -> f64,
{
    let mut tree: Graph<K> = Graph::new(GraphOptions::undirected());
    let nodes = g.nodes();
    let Some(&start) = nodes.first() else {
        return Ok(tree);
    };

    let mut parents: HashMap<K, K> = HashMap::new();
    let mut queue = PriorityQueue::with_capacity(nodes.len());
    for v in &nodes {
        queue.add((*v).clone(), f64::INFINITY);
        tree.ensure_node((*v).clone())?;
    }
    queue.decrease(start, 0.0)?;

    let mut started = false;
    while !queue.is_empty() {
        let v = queue.remove_min()?;
        if let Some(parent) = parents.get(&v) {
            tree.set_edge(v.clone(), parent.clone())?;
        } else if started {
            log::debug!("prim: {:?} is unreachable from {:?}", v, start);
            return Err(GraphError::Disconnected);
        } else {
            started = true;
        }

        for edge in g.node_edges(&v, None).unwrap_or_default() {
            let w = edge.other(&v);
            let Some(priority) = queue.priority(w) else {
                continue;
            };
            let edge_weight = weight(edge);
            if edge_weight < priority {
                parents.insert(w.clone(), v.clone());
                queue.decrease(w, edge_weight)?;
            }
        }
    }
    Ok(tree)
}
