//! All-pairs shortest paths with the Floyd-Warshall algorithm.

use std::collections::HashMap;

use crate::graph::Graph;
use crate::types::{Edge, NodeId};

use super::{outgoing, Path};

/// All-pairs shortest paths along outgoing edges.
pub fn floyd_warshall<K, N, E, G, W>(
    g: &Graph<K, N, E, G>,
    weight: W,
) -> HashMap<K, HashMap<K, Path<K>>>
where
    K: NodeId,
    W: Fn(&Edge<K>) -> f64,
{
    floyd_warshall_with(g, weight, |v: &K| outgoing(g, v))
}

/// All-pairs shortest paths following the edges `edges(v)` returns.
///
/// Negative weights are allowed. Parallel edges contribute their minimum
/// weight. A negative cycle is not reported: the distances along it,
/// including the diagonal, simply come out negative.
pub fn floyd_warshall_with<K, N, E, G, W, I>(
    g: &Graph<K, N, E, G>,
    weight: W,
    edges: I,
) -> HashMap<K, HashMap<K, Path<K>>>
where
    K: NodeId,
    W: Fn(&Edge<K>) -> f64,
    I: Fn(&K) -> Vec<Edge<K>>,
{
    let nodes = g.nodes();
    let n = nodes.len();
    let position: HashMap<&K, usize> = nodes.iter().enumerate().map(|(i, v)| (*v, i)).collect();

    let mut dist = vec![vec![f64::INFINITY; n]; n];
    let mut pred: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for (i, v) in nodes.iter().enumerate() {
        dist[i][i] = 0.0;
        for edge in edges(*v) {
            let Some(&j) = position.get(edge.other(*v)) else {
                continue;
            };
            let d = weight(&edge);
            if d < dist[i][j] {
                dist[i][j] = d;
                pred[i][j] = Some(i);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let ik = dist[i][k];
            if ik == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let alt = ik + dist[k][j];
                if alt < dist[i][j] {
                    dist[i][j] = alt;
                    pred[i][j] = pred[k][j];
                }
            }
        }
    }

    let mut results = HashMap::with_capacity(n);
    for (i, v) in nodes.iter().enumerate() {
        let row: HashMap<K, Path<K>> = nodes
            .iter()
            .enumerate()
            .map(|(j, w)| {
                (
                    (*w).clone(),
                    Path {
                        distance: dist[i][j],
                        predecessor: pred[i][j].map(|p| nodes[p].clone()),
                    },
                )
            })
            .collect();
        results.insert((*v).clone(), row);
    }
    results
}
