//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphOptions, GraphResult, NodeId};

use super::Graph;

enum Step<K, N, E> {
    Node(K, Option<N>),
    Edge(Edge<K>, Option<E>),
    Parent(K, Option<K>),
}

/// Fluent builder for constructing a Graph.
///
/// Steps are recorded and replayed through the graph's own mutation API in
/// `build`, so the first invalid step surfaces as the build error.
pub struct GraphBuilder<K, N = (), E = (), G = ()> {
    options: GraphOptions,
    label: Option<G>,
    steps: Vec<Step<K, N, E>>,
}

impl<K: NodeId, N, E, G> GraphBuilder<K, N, E, G> {
    /// Create a new builder for a directed, simple, flat graph.
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// Create a new builder with specific options.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            label: None,
            steps: Vec::new(),
        }
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.options.directed = directed;
        self
    }

    pub fn multigraph(mut self, multigraph: bool) -> Self {
        self.options.multigraph = multigraph;
        self
    }

    pub fn compound(mut self, compound: bool) -> Self {
        self.options.compound = compound;
        self
    }

    /// Set the graph-level value.
    pub fn label(mut self, label: G) -> Self {
        self.label = Some(label);
        self
    }

    /// Add a node without a value.
    pub fn node(mut self, v: impl Into<K>) -> Self {
        self.steps.push(Step::Node(v.into(), None));
        self
    }

    /// Add a node with a value.
    pub fn node_with(mut self, v: impl Into<K>, value: N) -> Self {
        self.steps.push(Step::Node(v.into(), Some(value)));
        self
    }

    /// Add an unnamed edge without a value.
    pub fn edge(mut self, v: impl Into<K>, w: impl Into<K>) -> Self {
        self.steps.push(Step::Edge(Edge::new(v, w), None));
        self
    }

    /// Add an unnamed edge with a value.
    pub fn edge_with(mut self, v: impl Into<K>, w: impl Into<K>, value: E) -> Self {
        self.steps.push(Step::Edge(Edge::new(v, w), Some(value)));
        self
    }

    /// Add a named edge (multigraphs only).
    pub fn named_edge(
        mut self,
        v: impl Into<K>,
        w: impl Into<K>,
        name: impl Into<String>,
        value: Option<E>,
    ) -> Self {
        self.steps.push(Step::Edge(Edge::named(v, w, name), value));
        self
    }

    /// Chain unnamed edges through `path`.
    pub fn path<T: Clone + Into<K>>(mut self, path: &[T]) -> Self {
        for pair in path.windows(2) {
            self.steps.push(Step::Edge(
                Edge::new(pair[0].clone(), pair[1].clone()),
                None,
            ));
        }
        self
    }

    /// Nest `v` under `parent` (compound graphs only).
    pub fn parent(mut self, v: impl Into<K>, parent: impl Into<K>) -> Self {
        self.steps.push(Step::Parent(v.into(), Some(parent.into())));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<K, N, E, G>> {
        let mut graph = Graph::new(self.options);
        if let Some(label) = self.label {
            graph.set_graph(label);
        }
        for step in self.steps {
            match step {
                Step::Node(v, Some(value)) => graph.set_node(v, value)?,
                Step::Node(v, None) => graph.ensure_node(v)?,
                Step::Edge(edge, value) => graph.set_edge_for(edge, value)?,
                Step::Parent(v, parent) => graph.set_parent(v, parent)?,
            };
        }
        Ok(graph)
    }
}

impl<K: NodeId, N, E, G> Default for GraphBuilder<K, N, E, G> {
    fn default() -> Self {
        Self::new()
    }
}
