//! CLI command implementations.

use std::collections::HashMap;
use std::path::Path;

use serde_json::{json, Value};

use crate::alg::{self, DfsOrder, Path as ShortestPath};
use crate::format::{JsonReader, JsonWriter};
use crate::graph::Graph;
use crate::types::{Edge, GraphResult};

/// Graph shape handled by the CLI: string ids, arbitrary JSON values.
pub type JsonGraph = Graph<String, Value, Value, Value>;

/// Where edge weights come from.
#[derive(Debug, Clone, Default)]
pub struct WeightOptions {
    /// Read the weight from this field of an object-valued edge. Without it
    /// the edge value itself must be a number.
    pub key: Option<String>,
    /// Follow every incident edge instead of only outgoing ones.
    pub all_edges: bool,
}

impl WeightOptions {
    /// Weight of `edge`. Edges without a value count as 1; so do edges whose
    /// value carries no usable number, with a warning.
    pub fn weight(&self, graph: &JsonGraph, edge: &Edge<String>) -> f64 {
        let value = match graph.edge_for(edge) {
            Some(value) if !value.is_null() => value,
            _ => return 1.0,
        };
        let number = match self.key.as_deref() {
            Some(key) => value.get(key).and_then(Value::as_f64),
            None => value.as_f64(),
        };
        number.unwrap_or_else(|| {
            match self.key.as_deref() {
                Some(key) => {
                    log::warn!("edge {} has no numeric {:?} field, using weight 1", edge, key)
                }
                None => {
                    log::warn!("edge {} has non-numeric value {}, using weight 1", edge, value)
                }
            }
            1.0
        })
    }

    fn edges(&self, graph: &JsonGraph, v: &String) -> Vec<Edge<String>> {
        if self.all_edges {
            alg::incident(graph, v)
        } else {
            alg::outgoing(graph, v)
        }
    }
}

/// Load a JSON graph file.
pub fn load(path: &Path) -> GraphResult<JsonGraph> {
    JsonReader::read_from_file(path)
}

/// Display information about a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let sources = sorted(graph.sources());
    let sinks = sorted(graph.sinks());

    if json {
        let info = json!({
            "file": path.display().to_string(),
            "directed": graph.is_directed(),
            "multigraph": graph.is_multigraph(),
            "compound": graph.is_compound(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "sources": sources,
            "sinks": sinks,
        });
        print_json(&info);
    } else {
        println!("File: {}", path.display());
        println!("Directed: {}", graph.is_directed());
        println!("Multigraph: {}", graph.is_multigraph());
        println!("Compound: {}", graph.is_compound());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Sources: {}", sources.join(", "));
        println!("Sinks: {}", sinks.join(", "));
    }
    Ok(())
}

/// Depth-first order from the given roots.
pub fn cmd_order(path: &Path, roots: &[String], order: DfsOrder, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let visited = alg::dfs(&graph, roots, order)?;
    print_list(&visited, json);
    Ok(())
}

/// Topological order of the nodes.
pub fn cmd_topsort(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let order = alg::topsort(&graph)?;
    print_list(&order, json);
    Ok(())
}

/// Whether the graph is acyclic.
pub fn cmd_acyclic(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let acyclic = alg::is_acyclic(&graph)?;
    if json {
        print_json(&json!({ "acyclic": acyclic }));
    } else {
        println!("{}", acyclic);
    }
    Ok(())
}

/// Weakly connected components.
pub fn cmd_components(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    print_groups(alg::components(&graph), json);
    Ok(())
}

/// Strongly connected components.
pub fn cmd_scc(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    print_groups(alg::tarjan(&graph), json);
    Ok(())
}

/// Components that contain a cycle.
pub fn cmd_cycles(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    print_groups(alg::find_cycles(&graph), json);
    Ok(())
}

/// Shortest paths from one source.
pub fn cmd_dijkstra(
    path: &Path,
    source: &str,
    weights: &WeightOptions,
    json: bool,
) -> GraphResult<()> {
    let graph = load(path)?;
    let paths = alg::dijkstra_with(
        &graph,
        &source.to_string(),
        |e| weights.weight(&graph, e),
        |v| weights.edges(&graph, v),
    )?;
    print_paths(source, &paths, json);
    Ok(())
}

/// Shortest paths between every pair of nodes.
pub fn cmd_floyd(path: &Path, weights: &WeightOptions, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let all = alg::floyd_warshall_with(
        &graph,
        |e| weights.weight(&graph, e),
        |v| weights.edges(&graph, v),
    );

    let mut sources: Vec<&String> = all.keys().collect();
    sources.sort();
    if json {
        let rows: serde_json::Map<String, Value> = sources
            .iter()
            .map(|s| ((*s).clone(), paths_json(&all[*s])))
            .collect();
        print_json(&Value::Object(rows));
    } else {
        for source in sources {
            print_paths(source, &all[source], false);
        }
    }
    Ok(())
}

/// Minimum spanning tree, written as a JSON graph.
pub fn cmd_prim(path: &Path, weights: &WeightOptions) -> GraphResult<()> {
    let graph = load(path)?;
    let tree = alg::prim(&graph, |e| weights.weight(&graph, e))?;
    println!("{}", JsonWriter::write_string_pretty(&tree)?);
    Ok(())
}

/// Subgraph induced by the listed nodes, written as a JSON graph.
pub fn cmd_filter(path: &Path, keep: &[String]) -> GraphResult<()> {
    let graph = load(path)?;
    let subgraph = graph.filter_nodes(|v| keep.contains(v));
    println!("{}", JsonWriter::write_string_pretty(&subgraph)?);
    Ok(())
}

fn sorted(ids: Vec<&String>) -> Vec<String> {
    let mut out: Vec<String> = ids.into_iter().cloned().collect();
    out.sort();
    out
}

fn print_json(value: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn print_list(ids: &[String], json: bool) {
    if json {
        print_json(&json!(ids));
    } else {
        println!("{}", ids.join(" "));
    }
}

/// Print node groups with members and groups sorted, for stable output.
fn print_groups(groups: Vec<Vec<String>>, json: bool) {
    let mut groups: Vec<Vec<String>> = groups
        .into_iter()
        .map(|mut g| {
            g.sort();
            g
        })
        .collect();
    groups.sort();

    if json {
        print_json(&json!(groups));
    } else {
        for group in &groups {
            println!("{}", group.join(" "));
        }
    }
}

fn paths_json(paths: &HashMap<String, ShortestPath<String>>) -> Value {
    let rows: serde_json::Map<String, Value> = paths
        .iter()
        .map(|(target, p)| {
            let distance = if p.distance.is_finite() {
                json!(p.distance)
            } else {
                Value::Null
            };
            (
                target.clone(),
                json!({ "distance": distance, "predecessor": p.predecessor }),
            )
        })
        .collect();
    Value::Object(rows)
}

fn print_paths(source: &str, paths: &HashMap<String, ShortestPath<String>>, json: bool) {
    if json {
        print_json(&paths_json(paths));
        return;
    }
    let mut targets: Vec<&String> = paths.keys().collect();
    targets.sort();
    for target in targets {
        let p = &paths[target];
        let via = p.predecessor.as_deref().unwrap_or("-");
        if p.distance.is_finite() {
            println!("{} -> {}: {} (via {})", source, target, p.distance, via);
        } else {
            println!("{} -> {}: unreachable", source, target);
        }
    }
}
