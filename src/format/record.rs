//! Structural record of a graph, as written to and read from JSON.
//!
//! Bounds are spelled out so defaulted fields don't demand `Default` of the
//! id or value types.

use serde::{Deserialize, Serialize};

use crate::types::GraphOptions;

/// A whole graph: its flags, nodes, edges and graph-level value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize, N: Serialize, E: Serialize, G: Serialize",
    deserialize = "K: Deserialize<'de>, N: Deserialize<'de>, E: Deserialize<'de>, G: Deserialize<'de>"
))]
pub struct GraphRecord<K, N, E, G> {
    #[serde(default)]
    pub options: GraphOptions,
    #[serde(default)]
    pub nodes: Vec<NodeRecord<K, N>>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord<K, E>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<G>,
}

/// One node. `parent` is only meaningful for compound graphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize, N: Serialize",
    deserialize = "K: Deserialize<'de>, N: Deserialize<'de>"
))]
pub struct NodeRecord<K, N> {
    #[serde(alias = "id")]
    pub v: K,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<N>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<K>,
}

/// One edge. `name` is only meaningful for multigraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize, E: Serialize",
    deserialize = "K: Deserialize<'de>, E: Deserialize<'de>"
))]
pub struct EdgeRecord<K, E> {
    pub v: K,
    pub w: K,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<E>,
}
