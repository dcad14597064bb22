//! Randomized cross-checks between algorithms on seeded random graphs.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graphlib::alg;
use graphlib::graph::Graph;
use graphlib::types::{Edge, GraphOptions};

type Weighted = Graph<u32, (), f64>;

const SEEDS: u64 = 40;

fn random_graph(rng: &mut StdRng, options: GraphOptions, max_nodes: u32) -> Weighted {
    let n = rng.gen_range(1..=max_nodes);
    let m = rng.gen_range(0..=n * 2);
    let mut g: Weighted = Graph::new(options);
    for v in 0..n {
        g.ensure_node(v).unwrap();
    }
    for _ in 0..m {
        let v = rng.gen_range(0..n);
        let w = rng.gen_range(0..n);
        let weight = f64::from(rng.gen_range(0u32..10));
        g.set_edge_value(v, w, weight).unwrap();
    }
    g
}

fn random_dag(rng: &mut StdRng, max_nodes: u32) -> Weighted {
    let n = rng.gen_range(2..=max_nodes);
    let mut g: Weighted = Graph::default();
    for v in 0..n {
        g.ensure_node(v).unwrap();
    }
    for _ in 0..n * 2 {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a < b {
            g.set_edge(a, b).unwrap();
        }
    }
    g
}

fn weight_of(g: &Weighted) -> impl Fn(&Edge<u32>) -> f64 + '_ {
    move |e: &Edge<u32>| g.edge_for(e).copied().unwrap_or(1.0)
}

fn assert_partition(g: &Weighted, groups: &[Vec<u32>]) {
    let mut seen: HashSet<u32> = HashSet::new();
    for group in groups {
        assert!(!group.is_empty());
        for v in group {
            assert!(seen.insert(*v), "node {} appears twice", v);
        }
    }
    assert_eq!(seen.len(), g.node_count());
}

// ==================== Cycles & ordering ====================

#[test]
fn test_acyclic_iff_no_cycles_found() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SEEDS {
        let g = random_graph(&mut rng, GraphOptions::directed(), 12);
        let acyclic = alg::is_acyclic(&g).unwrap();
        assert_eq!(acyclic, alg::find_cycles(&g).is_empty());
        assert_eq!(acyclic, alg::topsort(&g).is_ok());
    }
}

#[test]
fn test_random_dags_topsort_respects_edges() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SEEDS {
        let g = random_dag(&mut rng, 20);
        let order = alg::topsort(&g).unwrap();
        assert_eq!(order.len(), g.node_count());
        let position: HashMap<u32, usize> =
            order.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        for e in g.edges() {
            assert!(position[&e.v] < position[&e.w]);
        }
    }
}

// ==================== Partitions ====================

#[test]
fn test_tarjan_partitions_nodes() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..SEEDS {
        let g = random_graph(&mut rng, GraphOptions::directed(), 15);
        let sccs = alg::tarjan(&g);
        assert_partition(&g, &sccs);

        // Nodes in one component reach each other.
        for scc in &sccs {
            let reach: HashSet<u32> = alg::preorder(&g, &scc[..1]).unwrap().into_iter().collect();
            assert!(scc.iter().all(|v| reach.contains(v)));
        }
    }
}

#[test]
fn test_components_partition_and_contain_edges() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..SEEDS {
        let g = random_graph(&mut rng, GraphOptions::directed(), 15);
        let groups = alg::components(&g);
        assert_partition(&g, &groups);

        let owner: HashMap<u32, usize> = groups
            .iter()
            .enumerate()
            .flat_map(|(i, group)| group.iter().map(move |v| (*v, i)))
            .collect();
        for e in g.edges() {
            assert_eq!(owner[&e.v], owner[&e.w]);
        }
    }
}

#[test]
fn test_dfs_from_every_node_visits_each_once() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..SEEDS {
        let g = random_graph(&mut rng, GraphOptions::undirected(), 15);
        let roots: Vec<u32> = g.nodes().into_iter().copied().collect();
        let pre = alg::preorder(&g, &roots).unwrap();
        let post = alg::postorder(&g, &roots).unwrap();
        assert_eq!(pre.len(), g.node_count());
        assert_eq!(post.len(), g.node_count());
        assert_eq!(pre.iter().collect::<HashSet<_>>().len(), g.node_count());
    }
}

// ==================== Shortest paths ====================

#[test]
fn test_dijkstra_matches_floyd_warshall() {
    let mut rng = StdRng::seed_from_u64(23);
    for round in 0..SEEDS {
        let options = if round % 2 == 0 {
            GraphOptions::directed()
        } else {
            GraphOptions::undirected()
        };
        let g = random_graph(&mut rng, options, 10);
        let edges = |v: &u32| {
            if g.is_directed() {
                alg::outgoing(&g, v)
            } else {
                alg::incident(&g, v)
            }
        };

        let dijkstra = alg::dijkstra_all_with(&g, weight_of(&g), edges).unwrap();
        let floyd = alg::floyd_warshall_with(&g, weight_of(&g), edges);
        for (source, row) in &dijkstra {
            for (target, path) in row {
                assert_eq!(
                    path.distance, floyd[source][target].distance,
                    "distance {} -> {} differs",
                    source, target
                );
            }
        }
    }
}

#[test]
fn test_dijkstra_predecessors_form_shortest_paths() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..SEEDS {
        let g = random_graph(&mut rng, GraphOptions::directed(), 12);
        let weight = weight_of(&g);
        let source = 0u32;
        let paths = alg::dijkstra(&g, &source, &weight).unwrap();

        for (v, p) in &paths {
            match &p.predecessor {
                Some(u) => {
                    let cheapest = g
                        .out_edges(u, Some(v))
                        .unwrap()
                        .into_iter()
                        .map(&weight)
                        .fold(f64::INFINITY, f64::min);
                    assert_eq!(p.distance, paths[u].distance + cheapest);
                }
                None if *v == source => assert_eq!(p.distance, 0.0),
                None => assert_eq!(p.distance, f64::INFINITY),
            }
        }
    }
}

// ==================== Spanning trees ====================

fn kruskal_weight(g: &Weighted) -> f64 {
    let mut edges: Vec<(f64, u32, u32)> = g
        .edges()
        .into_iter()
        .map(|e| (g.edge_for(e).copied().unwrap_or(1.0), e.v, e.w))
        .collect();
    edges.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut root: HashMap<u32, u32> = g.nodes().into_iter().map(|v| (*v, *v)).collect();
    fn find(root: &HashMap<u32, u32>, mut v: u32) -> u32 {
        while root[&v] != v {
            v = root[&v];
        }
        v
    }

    let mut total = 0.0;
    for (w, a, b) in edges {
        let (ra, rb) = (find(&root, a), find(&root, b));
        if ra != rb {
            root.insert(ra, rb);
            total += w;
        }
    }
    total
}

#[test]
fn test_prim_matches_kruskal_on_connected_graphs() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..SEEDS {
        let mut g = random_graph(&mut rng, GraphOptions::undirected(), 12);
        // Thread a path through every node so the graph is connected.
        let n = g.node_count() as u32;
        for v in 1..n {
            if !g.has_edge(&(v - 1), &v, None) {
                g.set_edge_value(v - 1, v, 9.0).unwrap();
            }
        }

        let tree = alg::prim(&g, weight_of(&g)).unwrap();
        assert_eq!(tree.node_count(), g.node_count());
        assert_eq!(tree.edge_count(), g.node_count() - 1);
        assert_eq!(alg::components(&tree).len(), 1);

        let weight = weight_of(&g);
        let total: f64 = tree.edges().into_iter().map(&weight).sum();
        assert_eq!(total, kruskal_weight(&g));
    }
}
