//! JSON format tests: records, string and file round trips, rejection.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tempfile::TempDir;

use graphlib::format::{GraphRecord, JsonReader, JsonWriter};
use graphlib::graph::Graph;
use graphlib::types::{GraphError, GraphOptions, NodeId};

type JsonGraph = Graph<String, Value, Value, Value>;

fn s(v: &str) -> String {
    v.to_string()
}

fn sample() -> JsonGraph {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut g: JsonGraph = Graph::new(GraphOptions::directed().multigraph(true).compound(true));
    g.set_graph(json!({ "rankdir": "LR" }));
    g.set_node("a", json!({ "label": "A" })).unwrap();
    g.set_node("b", json!(42)).unwrap();
    g.ensure_node("c").unwrap();
    g.set_parent("a", Some(s("cluster"))).unwrap();
    g.set_parent("b", Some(s("cluster"))).unwrap();
    g.set_edge_value("a", "b", json!({ "weight": 2 })).unwrap();
    g.set_named_edge("a", "b", "alt", Some(json!(5))).unwrap();
    g.set_edge("b", "c").unwrap();
    g
}

fn assert_same(left: &JsonGraph, right: &JsonGraph) {
    assert_eq!(left.options(), right.options());
    assert_eq!(left.graph(), right.graph());
    assert_eq!(left.node_count(), right.node_count());
    assert_eq!(left.edge_count(), right.edge_count());
    for v in left.nodes() {
        assert!(right.has_node(v), "missing node {}", v);
        assert_eq!(left.node(v), right.node(v));
        assert_eq!(left.parent(v), right.parent(v));
    }
    for e in left.edges() {
        assert!(right.has_edge_for(e), "missing edge {}", e);
        assert_eq!(left.edge_for(e), right.edge_for(e));
    }
}

// ==================== Records ====================

#[test]
fn test_to_record_captures_everything() {
    let g = sample();
    let record = JsonWriter::to_record(&g);
    assert_eq!(record.options, g.options());
    assert_eq!(record.nodes.len(), 4);
    assert_eq!(record.edges.len(), 3);
    assert_eq!(record.value, Some(json!({ "rankdir": "LR" })));

    let a = record.nodes.iter().find(|n| n.v == "a").unwrap();
    assert_eq!(a.parent.as_deref(), Some("cluster"));
    assert_eq!(a.value, Some(json!({ "label": "A" })));

    let c = record.nodes.iter().find(|n| n.v == "c").unwrap();
    assert_eq!(c.value, None);
    assert_eq!(c.parent, None);

    let alt = record
        .edges
        .iter()
        .find(|e| e.name.as_deref() == Some("alt"))
        .unwrap();
    assert_eq!(alt.value, Some(json!(5)));
}

#[test]
fn test_written_json_omits_empty_fields() {
    let mut g: JsonGraph = Graph::default();
    g.set_edge("a", "b").unwrap();
    let text = JsonWriter::write_string(&g).unwrap();
    let parsed: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed["options"]["directed"], json!(true));
    assert!(parsed.get("value").is_none());
    assert_eq!(parsed["edges"][0], json!({ "v": "a", "w": "b" }));
    for node in parsed["nodes"].as_array().unwrap() {
        assert!(node.get("value").is_none());
        assert!(node.get("parent").is_none());
    }
}

// ==================== Round trips ====================

#[test]
fn test_string_round_trip() {
    let g = sample();
    let text = JsonWriter::write_string(&g).unwrap();
    let back: JsonGraph = JsonReader::read_str(&text).unwrap();
    assert_same(&g, &back);

    let pretty = JsonWriter::write_string_pretty(&g).unwrap();
    let back: JsonGraph = JsonReader::read_str(&pretty).unwrap();
    assert_same(&g, &back);
}

#[test]
fn test_undirected_round_trip_keeps_canonical_edges() {
    let mut g: JsonGraph = Graph::new(GraphOptions::undirected());
    g.set_edge_value("z", "a", json!("za")).unwrap();
    let back: JsonGraph = JsonReader::read_str(&JsonWriter::write_string(&g).unwrap()).unwrap();
    assert!(!back.is_directed());
    assert_eq!(back.edge(&s("a"), &s("z"), None), Some(&json!("za")));
    assert_eq!(back.edge(&s("z"), &s("a"), None), Some(&json!("za")));
}

#[test]
fn test_integer_ids_round_trip() {
    let mut g: Graph<u32, String, f64> = Graph::default();
    g.set_node(1u32, s("one")).unwrap();
    g.set_edge_value(1u32, 2u32, 0.5).unwrap();

    let text = JsonWriter::write_string(&g).unwrap();
    let back: Graph<u32, String, f64> = JsonReader::read_str(&text).unwrap();
    assert_eq!(back.node(&1), Some(&s("one")));
    assert_eq!(back.edge(&1, &2, None), Some(&0.5));
}

#[test]
fn test_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.json");

    let g = sample();
    JsonWriter::write_to_file(&g, &path).unwrap();
    let back: JsonGraph = JsonReader::read_from_file(&path).unwrap();
    assert_same(&g, &back);
}

#[test]
fn test_writer_and_reader_streams() {
    let g = sample();
    let mut buffer: Vec<u8> = Vec::new();
    JsonWriter::write_to(&g, &mut buffer).unwrap();
    let back: JsonGraph = JsonReader::read_from(buffer.as_slice()).unwrap();
    assert_same(&g, &back);
}

/// Id and value types with no `Default`, to pin the record bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
struct Ticket(u32);

impl NodeId for Ticket {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Cost {
    amount: u32,
}

#[test]
fn test_record_types_without_default() {
    let text = r#"{
        "options": { "compound": true },
        "nodes": [{ "v": 1, "value": { "amount": 3 } }, { "v": 2, "parent": 1 }],
        "edges": [{ "v": 1, "w": 2, "value": { "amount": 7 } }],
        "value": { "amount": 9 }
    }"#;
    let record: GraphRecord<Ticket, Cost, Cost, Cost> = serde_json::from_str(text).unwrap();
    assert_eq!(record.nodes.len(), 2);
    assert_eq!(record.nodes[1].parent, Some(Ticket(1)));
    assert_eq!(record.edges[0].value, Some(Cost { amount: 7 }));

    let g: Graph<Ticket, Cost, Cost, Cost> = JsonReader::read_str(text).unwrap();
    assert_eq!(g.graph(), Some(&Cost { amount: 9 }));
    assert_eq!(g.node(&Ticket(1)), Some(&Cost { amount: 3 }));
    assert_eq!(g.parent(&Ticket(2)), Some(&Ticket(1)));
    assert_eq!(g.edge(&Ticket(1), &Ticket(2), None), Some(&Cost { amount: 7 }));

    let back: Graph<Ticket, Cost, Cost, Cost> =
        JsonReader::read_from(JsonWriter::write_string(&g).unwrap().as_bytes()).unwrap();
    assert_eq!(back.edge_count(), 1);
    assert_eq!(back.node(&Ticket(1)), Some(&Cost { amount: 3 }));
}

// ==================== Hand-written input ====================

#[test]
fn test_read_minimal_document() {
    let text = r#"{
        "nodes": [{ "id": "a", "value": 1 }, { "v": "lonely" }],
        "edges": [{ "v": "a", "w": "b", "value": 3 }]
    }"#;
    let g: JsonGraph = JsonReader::read_str(text).unwrap();

    assert!(g.is_directed());
    assert!(!g.is_multigraph());
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.node(&s("a")), Some(&json!(1)));
    assert!(g.has_node(&s("lonely")));
    assert!(g.has_node(&s("b")));
    assert_eq!(g.edge(&s("a"), &s("b"), None), Some(&json!(3)));
}

#[test]
fn test_parent_listed_before_its_node() {
    let text = r#"{
        "options": { "compound": true },
        "nodes": [{ "v": "child", "parent": "box" }, { "v": "box", "value": "B" }]
    }"#;
    let g: JsonGraph = JsonReader::read_str(text).unwrap();
    assert_eq!(g.parent(&s("child")), Some(&s("box")));
    assert_eq!(g.node(&s("box")), Some(&json!("B")));
}

#[test]
fn test_reject_named_edge_on_simple_graph() {
    let text = r#"{ "edges": [{ "v": "a", "w": "b", "name": "x" }] }"#;
    let result: Result<JsonGraph, _> = JsonReader::read_str(text);
    assert!(matches!(result, Err(GraphError::NamedEdgeOnSimpleGraph)));
}

#[test]
fn test_reject_parent_on_flat_graph() {
    let text = r#"{ "nodes": [{ "v": "a", "parent": "b" }] }"#;
    let result: Result<JsonGraph, _> = JsonReader::read_str(text);
    assert!(matches!(result, Err(GraphError::NotCompound)));
}

#[test]
fn test_reject_nesting_cycle() {
    let text = r#"{
        "options": { "compound": true },
        "nodes": [{ "v": "a", "parent": "b" }, { "v": "b", "parent": "a" }]
    }"#;
    let result: Result<JsonGraph, _> = JsonReader::read_str(text);
    assert!(matches!(result, Err(GraphError::ParentCycle { .. })));
}

#[test]
fn test_reject_empty_id() {
    let text = r#"{ "nodes": [{ "v": "" }] }"#;
    let result: Result<JsonGraph, _> = JsonReader::read_str(text);
    assert!(matches!(result, Err(GraphError::InvalidNodeId(_))));
}

#[test]
fn test_malformed_json() {
    let result: Result<JsonGraph, _> = JsonReader::read_str("{ not json");
    assert!(matches!(result, Err(GraphError::Json(_))));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let result: Result<JsonGraph, _> = JsonReader::read_from_file(&dir.path().join("nope.json"));
    assert!(matches!(result, Err(GraphError::Io(_))));
}
