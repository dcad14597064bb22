//! Tarjan's strongly connected components.

use std::collections::HashMap;

use crate::graph::Graph;
use crate::types::NodeId;

struct Visit {
    index: usize,
    lowlink: usize,
    on_stack: bool,
}

/// Partition the nodes into strongly connected components.
///
/// Every node lands in exactly one component. A singleton component may or
/// may not carry a self-loop; see [`find_cycles`](super::find_cycles).
pub fn tarjan<K: NodeId, N, E, G>(g: &Graph<K, N, E, G>) -> Vec<Vec<K>> {
    let mut visits: HashMap<&K, Visit> = HashMap::with_capacity(g.node_count());
    let mut scc_stack: Vec<&K> = Vec::new();
    let mut frames = Vec::new();
    let mut next_index = 0;
    let mut result: Vec<Vec<K>> = Vec::new();

    let successors = |v: &K| g.successors(v).unwrap_or_default().into_iter();

    for root in g.nodes() {
        if visits.contains_key(root) {
            continue;
        }
        visits.insert(
            root,
            Visit {
                index: next_index,
                lowlink: next_index,
                on_stack: true,
            },
        );
        next_index += 1;
        scc_stack.push(root);
        frames.push((root, successors(root)));

        loop {
            let (v, step) = match frames.last_mut() {
                Some((v, pending)) => (*v, pending.next()),
                None => break,
            };
            match step {
                Some(w) => match visits.get(w) {
                    None => {
                        visits.insert(
                            w,
                            Visit {
                                index: next_index,
                                lowlink: next_index,
                                on_stack: true,
                            },
                        );
                        next_index += 1;
                        scc_stack.push(w);
                        frames.push((w, successors(w)));
                    }
                    Some(seen) if seen.on_stack => {
                        let w_index = seen.index;
                        if let Some(entry) = visits.get_mut(v) {
                            entry.lowlink = entry.lowlink.min(w_index);
                        }
                    }
                    Some(_) => {}
                },
                None => {
                    frames.pop();
                    let Some((index, lowlink)) = visits.get(v).map(|e| (e.index, e.lowlink)) else {
                        continue;
                    };
                    if let Some((parent, _)) = frames.last() {
                        if let Some(entry) = visits.get_mut(*parent) {
                            entry.lowlink = entry.lowlink.min(lowlink);
                        }
                    }
                    if lowlink == index {
                        let mut component = Vec::new();
                        while let Some(w) = scc_stack.pop() {
                            if let Some(entry) = visits.get_mut(w) {
                                entry.on_stack = false;
                            }
                            component.push(w.clone());
                            if w == v {
                                break;
                            }
                        }
                        result.push(component);
                    }
                }
            }
        }
    }
    result
}
