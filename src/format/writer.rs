//! Writes graphs out as JSON records.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{GraphResult, NodeId};

use super::record::{EdgeRecord, GraphRecord, NodeRecord};

/// Writer for JSON graph records.
pub struct JsonWriter;

impl JsonWriter {
    /// Snapshot a graph into its structural record.
    pub fn to_record<K, N, E, G>(graph: &Graph<K, N, E, G>) -> GraphRecord<K, N, E, G>
    where
        K: NodeId,
        N: Clone,
        E: Clone,
        G: Clone,
    {
        let nodes = graph
            .nodes()
            .into_iter()
            .map(|v| NodeRecord {
                v: v.clone(),
                value: graph.node(v).cloned(),
                parent: graph.parent(v).cloned(),
            })
            .collect();

        let edges = graph
            .edges()
            .into_iter()
            .map(|e| EdgeRecord {
                v: e.v.clone(),
                w: e.w.clone(),
                name: e.name.clone(),
                value: graph.edge_for(e).cloned(),
            })
            .collect();

        GraphRecord {
            options: graph.options(),
            nodes,
            edges,
            value: graph.graph().cloned(),
        }
    }

    /// Serialize a graph to a compact JSON string.
    pub fn write_string<K, N, E, G>(graph: &Graph<K, N, E, G>) -> GraphResult<String>
    where
        K: NodeId + Serialize,
        N: Clone + Serialize,
        E: Clone + Serialize,
        G: Clone + Serialize,
    {
        Ok(serde_json::to_string(&Self::to_record(graph))?)
    }

    /// Serialize a graph to an indented JSON string.
    pub fn write_string_pretty<K, N, E, G>(graph: &Graph<K, N, E, G>) -> GraphResult<String>
    where
        K: NodeId + Serialize,
        N: Clone + Serialize,
        E: Clone + Serialize,
        G: Clone + Serialize,
    {
        Ok(serde_json::to_string_pretty(&Self::to_record(graph))?)
    }

    /// Write a graph as JSON to any writer.
    pub fn write_to<K, N, E, G>(graph: &Graph<K, N, E, G>, writer: impl Write) -> GraphResult<()>
    where
        K: NodeId + Serialize,
        N: Clone + Serialize,
        E: Clone + Serialize,
        G: Clone + Serialize,
    {
        serde_json::to_writer_pretty(writer, &Self::to_record(graph))?;
        Ok(())
    }

    /// Write a graph as JSON to a file.
    pub fn write_to_file<K, N, E, G>(graph: &Graph<K, N, E, G>, path: &Path) -> GraphResult<()>
    where
        K: NodeId + Serialize,
        N: Clone + Serialize,
        E: Clone + Serialize,
        G: Clone + Serialize,
    {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
