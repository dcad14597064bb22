//! Reads JSON records back into graphs.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::graph::Graph;
use crate::types::{Edge, GraphResult, NodeId};

use super::record::GraphRecord;

/// Reader for JSON graph records.
pub struct JsonReader;

impl JsonReader {
    /// Rebuild a graph from its record.
    ///
    /// Everything goes through the graph's mutation API, so a record that
    /// breaks the graph's rules (named edges on a simple graph, parents on a
    /// flat graph, nesting cycles) is rejected with the matching error.
    pub fn from_record<K: NodeId, N, E, G>(
        record: GraphRecord<K, N, E, G>,
    ) -> GraphResult<Graph<K, N, E, G>> {
        let mut graph = Graph::new(record.options);
        if let Some(label) = record.value {
            graph.set_graph(label);
        }

        let mut nesting = Vec::new();
        for node in record.nodes {
            match node.value {
                Some(value) => graph.set_node(node.v.clone(), value)?,
                None => graph.ensure_node(node.v.clone())?,
            };
            if let Some(parent) = node.parent {
                nesting.push((node.v, parent));
            }
        }
        for (v, parent) in nesting {
            graph.set_parent(v, Some(parent))?;
        }

        for edge in record.edges {
            graph.set_edge_for(
                Edge {
                    v: edge.v,
                    w: edge.w,
                    name: edge.name,
                },
                edge.value,
            )?;
        }

        log::debug!(
            "loaded graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Parse a graph from a JSON string.
    pub fn read_str<K, N, E, G>(json: &str) -> GraphResult<Graph<K, N, E, G>>
    where
        K: NodeId + DeserializeOwned,
        N: DeserializeOwned,
        E: DeserializeOwned,
        G: DeserializeOwned,
    {
        let record: GraphRecord<K, N, E, G> = serde_json::from_str(json)?;
        Self::from_record(record)
    }

    /// Parse a graph from any reader.
    pub fn read_from<K, N, E, G>(reader: impl Read) -> GraphResult<Graph<K, N, E, G>>
    where
        K: NodeId + DeserializeOwned,
        N: DeserializeOwned,
        E: DeserializeOwned,
        G: DeserializeOwned,
    {
        let record: GraphRecord<K, N, E, G> = serde_json::from_reader(reader)?;
        Self::from_record(record)
    }

    /// Parse a graph from a JSON file.
    pub fn read_from_file<K, N, E, G>(path: &Path) -> GraphResult<Graph<K, N, E, G>>
    where
        K: NodeId + DeserializeOwned,
        N: DeserializeOwned,
        E: DeserializeOwned,
        G: DeserializeOwned,
    {
        let file = std::fs::File::open(path)?;
        Self::read_from(std::io::BufReader::new(file))
    }
}
