//! The edge descriptor: the single identity type for every edge.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Identity of an edge: its endpoints plus an optional multigraph name.
///
/// Edges handed out by a [`Graph`](crate::Graph) are always canonical: in an
/// undirected graph `v <= w`, and `name` is only ever set on multigraphs.
/// Descriptors built by callers need not be canonical; the graph normalizes
/// them before lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(bound(serialize = "K: Serialize", deserialize = "K: Deserialize<'de>"))]
pub struct Edge<K> {
    /// Tail of the edge (the source, for directed graphs).
    pub v: K,
    /// Head of the edge (the target, for directed graphs).
    pub w: K,
    /// Distinguishes parallel edges in a multigraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl<K: NodeId> Edge<K> {
    /// Create an unnamed edge descriptor.
    pub fn new(v: impl Into<K>, w: impl Into<K>) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
            name: None,
        }
    }

    /// Create a named edge descriptor.
    pub fn named(v: impl Into<K>, w: impl Into<K>, name: impl Into<String>) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
            name: Some(name.into()),
        }
    }

    /// Endpoints swapped into `Ord` order when `directed` is false.
    pub(crate) fn canonical(mut self, directed: bool) -> Self {
        if !directed && self.v > self.w {
            std::mem::swap(&mut self.v, &mut self.w);
        }
        self
    }

    /// The endpoint opposite `from`. For a self-loop this is `from` itself.
    pub fn other(&self, from: &K) -> &K {
        if &self.v != from {
            &self.v
        } else {
            &self.w
        }
    }

    /// Whether `node` is one of the endpoints.
    pub fn touches(&self, node: &K) -> bool {
        &self.v == node || &self.w == node
    }
}

impl<K: std::fmt::Debug> std::fmt::Display for Edge<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{:?} -> {:?} ({})", self.v, self.w, name),
            None => write!(f, "{:?} -> {:?}", self.v, self.w),
        }
    }
}
