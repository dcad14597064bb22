//! Core graph structure: labeled nodes and edges with adjacency indexes.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::types::node_id::describe;
use crate::types::{Edge, GraphError, GraphOptions, GraphResult, NodeId};

use super::compound::Hierarchy;

type NodeLabelFn<K, N> = Arc<dyn Fn(&K) -> Option<N> + Send + Sync>;
type EdgeLabelFn<K, E> = Arc<dyn Fn(&K, &K, Option<&str>) -> Option<E> + Send + Sync>;

/// An in-memory labeled multigraph.
///
/// `K` identifies nodes, `N` and `E` are the optional node and edge values,
/// `G` is the optional graph-level value. Whether the graph is directed, a
/// multigraph, or compound is fixed by the [`GraphOptions`] it was built with.
///
/// Algorithms borrow the graph immutably; the graph must not change while an
/// algorithm runs against it.
pub struct Graph<K, N = (), E = (), G = ()> {
    options: GraphOptions,
    /// Graph-level value.
    label: Option<G>,
    default_node_label: NodeLabelFn<K, N>,
    default_edge_label: EdgeLabelFn<K, E>,
    /// All nodes and their values.
    nodes: HashMap<K, Option<N>>,
    /// Edges entering each node, keyed by head.
    in_edges: HashMap<K, HashSet<Edge<K>>>,
    /// Edges leaving each node, keyed by tail.
    out_edges: HashMap<K, HashSet<Edge<K>>>,
    /// head -> tail -> number of parallel edges.
    preds: HashMap<K, HashMap<K, usize>>,
    /// tail -> head -> number of parallel edges.
    succs: HashMap<K, HashMap<K, usize>>,
    /// Canonical edge -> value.
    edge_values: HashMap<Edge<K>, Option<E>>,
    /// Present only for compound graphs.
    hierarchy: Option<Hierarchy<K>>,
    node_count: usize,
    edge_count: usize,
}

impl<K: NodeId, N, E, G> Graph<K, N, E, G> {
    /// Create a new empty graph.
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            label: None,
            default_node_label: Arc::new(|_| None),
            default_edge_label: Arc::new(|_, _, _| None),
            nodes: HashMap::new(),
            in_edges: HashMap::new(),
            out_edges: HashMap::new(),
            preds: HashMap::new(),
            succs: HashMap::new(),
            edge_values: HashMap::new(),
            hierarchy: options.compound.then(Hierarchy::new),
            node_count: 0,
            edge_count: 0,
        }
    }

    /// The flags this graph was created with.
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn is_multigraph(&self) -> bool {
        self.options.multigraph
    }

    pub fn is_compound(&self) -> bool {
        self.options.compound
    }

    // ==================== Graph label & defaults ====================

    /// Set the graph-level value.
    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.label = Some(label);
        self
    }

    /// The graph-level value, if one was set.
    pub fn graph(&self) -> Option<&G> {
        self.label.as_ref()
    }

    pub fn graph_mut(&mut self) -> Option<&mut G> {
        self.label.as_mut()
    }

    /// Compute the value of newly created nodes from their id.
    pub fn set_default_node_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&K) -> N + Send + Sync + 'static,
    {
        self.default_node_label = Arc::new(move |v| Some(f(v)));
        self
    }

    /// Give every newly created node a copy of `value`.
    pub fn set_default_node_value(&mut self, value: N) -> &mut Self
    where
        N: Clone + Send + Sync + 'static,
    {
        self.set_default_node_label(move |_| value.clone())
    }

    /// Compute the value of newly created edges from their canonical
    /// endpoints and name.
    pub fn set_default_edge_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&K, &K, Option<&str>) -> E + Send + Sync + 'static,
    {
        self.default_edge_label = Arc::new(move |v, w, name| Some(f(v, w, name)));
        self
    }

    /// Give every newly created edge a copy of `value`.
    pub fn set_default_edge_value(&mut self, value: E) -> &mut Self
    where
        E: Clone + Send + Sync + 'static,
    {
        self.set_default_edge_label(move |_, _, _| value.clone())
    }

    // ==================== Nodes ====================

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// All node ids.
    pub fn nodes(&self) -> Vec<&K> {
        self.nodes.keys().collect()
    }

    /// Nodes with no incoming edges.
    pub fn sources(&self) -> Vec<&K> {
        self.nodes
            .keys()
            .filter(|v| self.in_edges.get(*v).is_none_or(|e| e.is_empty()))
            .collect()
    }

    /// Nodes with no outgoing edges.
    pub fn sinks(&self) -> Vec<&K> {
        self.nodes
            .keys()
            .filter(|v| self.out_edges.get(*v).is_none_or(|e| e.is_empty()))
            .collect()
    }

    pub fn has_node(&self, v: &K) -> bool {
        self.nodes.contains_key(v)
    }

    /// The value of node `v`. `None` if the node is absent or has no value.
    pub fn node(&self, v: &K) -> Option<&N> {
        self.nodes.get(v).and_then(|value| value.as_ref())
    }

    pub fn node_mut(&mut self, v: &K) -> Option<&mut N> {
        self.nodes.get_mut(v).and_then(|value| value.as_mut())
    }

    /// Create `v` if absent, using the default node label. An existing node
    /// keeps its value.
    pub fn ensure_node(&mut self, v: impl Into<K>) -> GraphResult<&mut Self> {
        self.add_node(v.into(), None)?;
        Ok(self)
    }

    /// Create `v` if absent and set its value.
    pub fn set_node(&mut self, v: impl Into<K>, value: N) -> GraphResult<&mut Self> {
        self.add_node(v.into(), Some(value))?;
        Ok(self)
    }

    /// Create every id in `ids`; with `Some(value)` also set each value.
    pub fn set_nodes<I, T>(&mut self, ids: I, value: Option<N>) -> GraphResult<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<K>,
        N: Clone,
    {
        for v in ids {
            self.add_node(v.into(), value.clone())?;
        }
        Ok(self)
    }

    fn add_node(&mut self, v: K, value: Option<N>) -> GraphResult<()> {
        if let Some(slot) = self.nodes.get_mut(&v) {
            if value.is_some() {
                *slot = value;
            }
            return Ok(());
        }
        if !v.is_valid_id() {
            return Err(GraphError::InvalidNodeId(describe(&v)));
        }
        let value = value.or_else(|| (self.default_node_label)(&v));
        self.create_node(v, value);
        Ok(())
    }

    /// Register a node known to be absent, storing `value` verbatim.
    fn create_node(&mut self, v: K, value: Option<N>) {
        if let Some(hierarchy) = self.hierarchy.as_mut() {
            hierarchy.insert_node(v.clone());
        }
        self.in_edges.insert(v.clone(), HashSet::new());
        self.out_edges.insert(v.clone(), HashSet::new());
        self.preds.insert(v.clone(), HashMap::new());
        self.succs.insert(v.clone(), HashMap::new());
        self.nodes.insert(v, value);
        self.node_count += 1;
    }

    /// Remove `v`, every edge touching it, and (for compound graphs) move
    /// its children up to its parent. No-op if `v` is absent.
    pub fn remove_node(&mut self, v: &K) -> &mut Self {
        if !self.nodes.contains_key(v) {
            return self;
        }

        let mut incident: HashSet<Edge<K>> = HashSet::new();
        if let Some(edges) = self.in_edges.get(v) {
            incident.extend(edges.iter().cloned());
        }
        if let Some(edges) = self.out_edges.get(v) {
            incident.extend(edges.iter().cloned());
        }
        log::trace!("removing node {:?} with {} incident edges", v, incident.len());
        for edge in &incident {
            self.unlink_edge(edge);
        }

        if let Some(hierarchy) = self.hierarchy.as_mut() {
            hierarchy.remove_node(v);
        }

        self.nodes.remove(v);
        self.in_edges.remove(v);
        self.out_edges.remove(v);
        self.preds.remove(v);
        self.succs.remove(v);
        self.node_count -= 1;
        self
    }

    // ==================== Compound ====================

    /// Nest `v` under `parent`, or move it back to the root with `None`.
    /// Missing nodes are created.
    pub fn set_parent(&mut self, v: impl Into<K>, parent: Option<K>) -> GraphResult<&mut Self> {
        let v = v.into();
        let Some(hierarchy) = self.hierarchy.as_ref() else {
            return Err(GraphError::NotCompound);
        };
        if !v.is_valid_id() {
            return Err(GraphError::InvalidNodeId(describe(&v)));
        }
        if let Some(p) = &parent {
            if !p.is_valid_id() {
                return Err(GraphError::InvalidNodeId(describe(p)));
            }
            if hierarchy.would_cycle(&v, p) {
                return Err(GraphError::ParentCycle {
                    node: describe(&v),
                    parent: describe(p),
                });
            }
        }

        self.add_node(v.clone(), None)?;
        if let Some(p) = &parent {
            self.add_node(p.clone(), None)?;
        }
        if let Some(hierarchy) = self.hierarchy.as_mut() {
            hierarchy.set_parent(v, parent);
        }
        Ok(self)
    }

    /// The parent of `v`. `None` for root-level nodes, absent nodes, and on
    /// non-compound graphs.
    pub fn parent(&self, v: &K) -> Option<&K> {
        self.hierarchy.as_ref().and_then(|h| h.parent(v))
    }

    /// Children of `v`, or of the root when `v` is `None`.
    ///
    /// Returns `None` if `v` is not a node. On a non-compound graph the root
    /// holds every node and real nodes have no children.
    pub fn children(&self, v: Option<&K>) -> Option<Vec<&K>> {
        match (&self.hierarchy, v) {
            (Some(h), None) => Some(h.root_children().iter().collect()),
            (Some(h), Some(v)) => h.children(v).map(|c| c.iter().collect()),
            (None, None) => Some(self.nodes()),
            (None, Some(v)) => self.has_node(v).then(Vec::new),
        }
    }

    // ==================== Adjacency ====================

    /// Tails of edges entering `v`. `None` if `v` is absent.
    pub fn predecessors(&self, v: &K) -> Option<Vec<&K>> {
        self.preds.get(v).map(|m| m.keys().collect())
    }

    /// Heads of edges leaving `v`. `None` if `v` is absent.
    pub fn successors(&self, v: &K) -> Option<Vec<&K>> {
        self.succs.get(v).map(|m| m.keys().collect())
    }

    /// Predecessors and successors of `v`, each listed once.
    pub fn neighbors(&self, v: &K) -> Option<Vec<&K>> {
        let preds = self.preds.get(v)?;
        let succs = self.succs.get(v)?;
        let mut out: Vec<&K> = preds.keys().collect();
        out.extend(succs.keys().filter(|w| !preds.contains_key(*w)));
        Some(out)
    }

    /// No successors (directed) or no neighbors (undirected). Absent nodes
    /// are not leaves.
    pub fn is_leaf(&self, v: &K) -> bool {
        let adjacent = if self.options.directed {
            self.successors(v)
        } else {
            self.neighbors(v)
        };
        adjacent.is_some_and(|a| a.is_empty())
    }

    // ==================== Edges ====================

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All edges, in canonical form.
    pub fn edges(&self) -> Vec<&Edge<K>> {
        self.edge_values.keys().collect()
    }

    /// Create the unnamed edge `v -> w` (and any missing endpoint).
    pub fn set_edge(&mut self, v: impl Into<K>, w: impl Into<K>) -> GraphResult<&mut Self> {
        self.put_edge(Edge::new(v, w), None)
    }

    /// Create or update the unnamed edge `v -> w` with `value`.
    pub fn set_edge_value(
        &mut self,
        v: impl Into<K>,
        w: impl Into<K>,
        value: E,
    ) -> GraphResult<&mut Self> {
        self.put_edge(Edge::new(v, w), Some(value))
    }

    /// Create or update a named edge. Only multigraphs accept new named edges.
    pub fn set_named_edge(
        &mut self,
        v: impl Into<K>,
        w: impl Into<K>,
        name: impl Into<String>,
        value: Option<E>,
    ) -> GraphResult<&mut Self> {
        self.put_edge(Edge::named(v, w, name), value)
    }

    /// Create or update the edge described by `edge`.
    pub fn set_edge_for(&mut self, edge: Edge<K>, value: Option<E>) -> GraphResult<&mut Self> {
        self.put_edge(edge, value)
    }

    /// Chain unnamed edges along consecutive pairs of `path`.
    pub fn set_path<T>(&mut self, path: &[T], value: Option<E>) -> GraphResult<&mut Self>
    where
        T: Clone + Into<K>,
        E: Clone,
    {
        for pair in path.windows(2) {
            self.put_edge(
                Edge::new(pair[0].clone(), pair[1].clone()),
                value.clone(),
            )?;
        }
        Ok(self)
    }

    fn put_edge(&mut self, edge: Edge<K>, value: Option<E>) -> GraphResult<&mut Self> {
        for end in [&edge.v, &edge.w] {
            if !end.is_valid_id() {
                return Err(GraphError::InvalidNodeId(describe(end)));
            }
        }
        let edge = edge.canonical(self.options.directed);

        if let Some(slot) = self.edge_values.get_mut(&edge) {
            if value.is_some() {
                *slot = value;
            }
            return Ok(self);
        }
        if edge.name.is_some() && !self.options.multigraph {
            return Err(GraphError::NamedEdgeOnSimpleGraph);
        }

        self.add_node(edge.v.clone(), None)?;
        self.add_node(edge.w.clone(), None)?;
        let value =
            value.or_else(|| (self.default_edge_label)(&edge.v, &edge.w, edge.name.as_deref()));
        self.link_edge(edge, value);
        Ok(self)
    }

    /// Index a canonical edge known to be absent whose endpoints exist.
    fn link_edge(&mut self, edge: Edge<K>, value: Option<E>) {
        *self
            .succs
            .entry(edge.v.clone())
            .or_default()
            .entry(edge.w.clone())
            .or_insert(0) += 1;
        *self
            .preds
            .entry(edge.w.clone())
            .or_default()
            .entry(edge.v.clone())
            .or_insert(0) += 1;
        self.out_edges
            .entry(edge.v.clone())
            .or_default()
            .insert(edge.clone());
        self.in_edges
            .entry(edge.w.clone())
            .or_default()
            .insert(edge.clone());
        self.edge_values.insert(edge, value);
        self.edge_count += 1;
    }

    /// Drop a canonical edge from every index. Returns false if absent.
    fn unlink_edge(&mut self, edge: &Edge<K>) -> bool {
        if self.edge_values.remove(edge).is_none() {
            return false;
        }
        decrement(&mut self.succs, &edge.v, &edge.w);
        decrement(&mut self.preds, &edge.w, &edge.v);
        if let Some(out) = self.out_edges.get_mut(&edge.v) {
            out.remove(edge);
        }
        if let Some(inc) = self.in_edges.get_mut(&edge.w) {
            inc.remove(edge);
        }
        self.edge_count -= 1;
        true
    }

    fn key(&self, v: &K, w: &K, name: Option<&str>) -> Edge<K> {
        Edge {
            v: v.clone(),
            w: w.clone(),
            name: name.map(String::from),
        }
        .canonical(self.options.directed)
    }

    pub fn has_edge(&self, v: &K, w: &K, name: Option<&str>) -> bool {
        self.edge_values.contains_key(&self.key(v, w, name))
    }

    pub fn has_edge_for(&self, edge: &Edge<K>) -> bool {
        self.edge_values
            .contains_key(&edge.clone().canonical(self.options.directed))
    }

    /// The value of edge (v, w, name). `None` if absent or valueless.
    pub fn edge(&self, v: &K, w: &K, name: Option<&str>) -> Option<&E> {
        self.edge_values
            .get(&self.key(v, w, name))
            .and_then(|value| value.as_ref())
    }

    pub fn edge_for(&self, edge: &Edge<K>) -> Option<&E> {
        self.edge_values
            .get(&edge.clone().canonical(self.options.directed))
            .and_then(|value| value.as_ref())
    }

    pub fn edge_mut(&mut self, v: &K, w: &K, name: Option<&str>) -> Option<&mut E> {
        let key = self.key(v, w, name);
        self.edge_values
            .get_mut(&key)
            .and_then(|value| value.as_mut())
    }

    /// Remove edge (v, w, name). No-op if absent.
    pub fn remove_edge(&mut self, v: &K, w: &K, name: Option<&str>) -> &mut Self {
        let key = self.key(v, w, name);
        self.unlink_edge(&key);
        self
    }

    pub fn remove_edge_for(&mut self, edge: &Edge<K>) -> &mut Self {
        let key = edge.clone().canonical(self.options.directed);
        self.unlink_edge(&key);
        self
    }

    /// Edges entering `v`, optionally only those coming from `u`.
    pub fn in_edges(&self, v: &K, u: Option<&K>) -> Option<Vec<&Edge<K>>> {
        self.in_edges
            .get(v)
            .map(|edges| edges.iter().filter(|e| u.is_none_or(|u| &e.v == u)).collect())
    }

    /// Edges leaving `v`, optionally only those going to `w`.
    pub fn out_edges(&self, v: &K, w: Option<&K>) -> Option<Vec<&Edge<K>>> {
        self.out_edges
            .get(v)
            .map(|edges| edges.iter().filter(|e| w.is_none_or(|w| &e.w == w)).collect())
    }

    /// Every edge touching `v`, optionally only those whose other end is `w`.
    /// Self-loops are listed once.
    pub fn node_edges(&self, v: &K, w: Option<&K>) -> Option<Vec<&Edge<K>>> {
        let mut edges = self.in_edges(v, w)?;
        let outgoing = self.out_edges(v, w)?;
        edges.extend(outgoing.into_iter().filter(|e| e.v != e.w));
        Some(edges)
    }

    // ==================== Derived graphs ====================

    /// Copy of this graph keeping only nodes accepted by `keep`.
    ///
    /// Edges survive when both endpoints do. In compound graphs each kept
    /// node is re-parented to its nearest kept ancestor.
    pub fn filter_nodes<F>(&self, keep: F) -> Self
    where
        F: Fn(&K) -> bool,
        N: Clone,
        E: Clone,
        G: Clone,
    {
        let mut copy = Self::new(self.options);
        copy.label = self.label.clone();
        copy.default_node_label = Arc::clone(&self.default_node_label);
        copy.default_edge_label = Arc::clone(&self.default_edge_label);

        for (v, value) in &self.nodes {
            if keep(v) {
                copy.create_node(v.clone(), value.clone());
            }
        }
        for (edge, value) in &self.edge_values {
            if copy.has_node(&edge.v) && copy.has_node(&edge.w) {
                copy.link_edge(edge.clone(), value.clone());
            }
        }

        if self.hierarchy.is_some() {
            let mut memo: HashMap<K, Option<K>> = HashMap::new();
            let kept: Vec<K> = copy.nodes.keys().cloned().collect();
            for v in kept {
                let parent = self.surviving_parent(&v, &copy, &mut memo);
                if let Some(hierarchy) = copy.hierarchy.as_mut() {
                    hierarchy.set_parent(v, parent);
                }
            }
        }
        copy
    }

    /// Nearest ancestor of `v` that is present in `copy`.
    ///
    /// `memo` maps dropped ancestors to their own nearest kept ancestor, so
    /// each chain is walked once.
    fn surviving_parent(
        &self,
        v: &K,
        copy: &Self,
        memo: &mut HashMap<K, Option<K>>,
    ) -> Option<K> {
        let mut dropped: Vec<K> = Vec::new();
        let mut cursor = self.parent(v);
        let found = loop {
            let Some(p) = cursor else {
                break None;
            };
            if copy.has_node(p) {
                break Some(p.clone());
            }
            if let Some(hit) = memo.get(p) {
                break hit.clone();
            }
            dropped.push(p.clone());
            cursor = self.parent(p);
        };
        for p in dropped {
            memo.insert(p, found.clone());
        }
        found
    }
}

fn decrement<K: NodeId>(counts: &mut HashMap<K, HashMap<K, usize>>, outer: &K, inner: &K) {
    let Some(row) = counts.get_mut(outer) else {
        return;
    };
    if let Some(count) = row.get_mut(inner) {
        *count -= 1;
        if *count == 0 {
            row.remove(inner);
        }
    }
}

impl<K: NodeId, N, E, G> Default for Graph<K, N, E, G> {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<K, N, E, G> Clone for Graph<K, N, E, G>
where
    K: NodeId,
    N: Clone,
    E: Clone,
    G: Clone,
{
    fn clone(&self) -> Self {
        Self {
            options: self.options,
            label: self.label.clone(),
            default_node_label: Arc::clone(&self.default_node_label),
            default_edge_label: Arc::clone(&self.default_edge_label),
            nodes: self.nodes.clone(),
            in_edges: self.in_edges.clone(),
            out_edges: self.out_edges.clone(),
            preds: self.preds.clone(),
            succs: self.succs.clone(),
            edge_values: self.edge_values.clone(),
            hierarchy: self.hierarchy.clone(),
            node_count: self.node_count,
            edge_count: self.edge_count,
        }
    }
}

impl<K, N, E, G> std::fmt::Debug for Graph<K, N, E, G>
where
    K: NodeId,
    N: std::fmt::Debug,
    E: std::fmt::Debug,
    G: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("options", &self.options)
            .field("label", &self.label)
            .field("nodes", &self.nodes)
            .field("edges", &self.edge_values)
            .finish_non_exhaustive()
    }
}
