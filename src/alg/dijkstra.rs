//! Single-source and all-pairs shortest paths with Dijkstra's algorithm.

use std::collections::HashMap;

use crate::graph::Graph;
use crate::queue::PriorityQueue;
use crate::types::node_id::describe;
use crate::types::{Edge, GraphError, GraphResult, NodeId};

use super::{outgoing, Path};

/// Shortest paths from `source` along outgoing edges.
pub fn dijkstra<K, N, E, G, W>(
    g: &Graph<K, N, E, G>,
    source: &K,
    weight: W,
) -> GraphResult<HashMap<K, Path<K>>>
where
    K: NodeId,
    W: Fn(&Edge<K>) -> f64,
{
    shortest_paths(g, source, &weight, &|v: &K| outgoing(g, v))
}

/// Shortest paths from `source`, following the edges `edges(v)` returns for
/// each settled node `v`.
///
/// Fails on the first negative edge weight it encounters. Unreachable nodes
/// keep distance `f64::INFINITY` and no predecessor.
pub fn dijkstra_with<K, N, E, G, W, I>(
    g: &Graph<K, N, E, G>,
    source: &K,
    weight: W,
    edges: I,
) -> GraphResult<HashMap<K, Path<K>>>
where
    K: NodeId,
    W: Fn(&Edge<K>) -> f64,
    I: Fn(&K) -> Vec<Edge<K>>,
{
    shortest_paths(g, source, &weight, &edges)
}

/// Dijkstra from every node along outgoing edges.
pub fn dijkstra_all<K, N, E, G, W>(
    g: &Graph<K, N, E, G>,
    weight: W,
) -> GraphResult<HashMap<K, HashMap<K, Path<K>>>>
where
    K: NodeId,
    W: Fn(&Edge<K>) -> f64,
{
    dijkstra_all_with(g, weight, |v: &K| outgoing(g, v))
}

/// Dijkstra from every node with a custom incidence function.
pub fn dijkstra_all_with<K, N, E, G, W, I>(
    g: &Graph<K, N, E, G>,
    weight: W,
    edges: I,
) -> GraphResult<HashMap<K, HashMap<K, Path<K>>>>
where
    K: NodeId,
    W: Fn(&Edge<K>) -> f64,
    I: Fn(&K) -> Vec<Edge<K>>,
{
    let mut all = HashMap::with_capacity(g.node_count());
    for source in g.nodes() {
        all.insert(source.clone(), shortest_paths(g, source, &weight, &edges)?);
    }
    Ok(all)
}

fn shortest_paths<K: NodeId, N, E, G>(
    g: &Graph<K, N, E, G>,
    source: &K,
    weight: &dyn Fn(&Edge<K>) -> f64,
    edges: &dyn Fn(&K) -> Vec<Edge<K>>,
) -> GraphResult<HashMap<K, Path<K>>> {
    if !g.has_node(source) {
        return Err(GraphError::NodeNotFound(describe(source)));
    }

    let mut results: HashMap<K, Path<K>> = HashMap::with_capacity(g.node_count());
    let mut queue = PriorityQueue::with_capacity(g.node_count());
    for v in g.nodes() {
        let distance = if v == source { 0.0 } else { f64::INFINITY };
        results.insert(
            v.clone(),
            Path {
                distance,
                predecessor: None,
            },
        );
        queue.add(v.clone(), distance);
    }

    while !queue.is_empty() {
        let v = queue.remove_min()?;
        let settled = results.get(&v).map_or(f64::INFINITY, |p| p.distance);
        if settled == f64::INFINITY {
            break;
        }

        for edge in edges(&v) {
            let w = edge.other(&v);
            let edge_weight = weight(&edge);
            if edge_weight < 0.0 {
                log::debug!("dijkstra: negative weight {} on {}", edge_weight, edge);
                return Err(GraphError::NegativeWeight {
                    edge: edge.to_string(),
                    weight: edge_weight,
                });
            }
            let distance = settled + edge_weight;
            let Some(entry) = results.get_mut(w) else {
                continue;
            };
            if distance < entry.distance {
                entry.distance = distance;
                entry.predecessor = Some(v.clone());
                queue.decrease(w, distance)?;
            }
        }
    }
    Ok(results)
}
