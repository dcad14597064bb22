//! Error types for the graphlib library.

use thiserror::Error;

/// All errors that can occur in the graphlib library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node identifier rejected by its `NodeId::is_valid_id` check.
    #[error("Invalid node identifier: {0}")]
    InvalidNodeId(String),

    /// Node not found by ID.
    #[error("Graph does not have node: {0}")]
    NodeNotFound(String),

    /// A name was supplied for a new edge on a graph that is not a multigraph.
    #[error("Cannot set a named edge when multigraph = false")]
    NamedEdgeOnSimpleGraph,

    /// Parent/child operations on a graph created without `compound`.
    #[error("Cannot set parent in a non-compound graph")]
    NotCompound,

    /// The requested parent is the node itself or one of its descendants.
    #[error("Setting {parent} as parent of {node} would create a cycle")]
    ParentCycle { node: String, parent: String },

    /// Topological ordering hit a cycle.
    #[error("Graph contains a cycle")]
    Cycle,

    /// Dijkstra encountered an edge with negative weight.
    #[error("dijkstra does not allow negative edge weights. Bad edge: {edge} weight: {weight}")]
    NegativeWeight { edge: String, weight: f64 },

    /// Prim found a node unreachable from the start node.
    #[error("Input graph is not connected")]
    Disconnected,

    /// `min` or `remove_min` on an empty priority queue.
    #[error("Queue underflow")]
    EmptyQueue,

    /// `decrease` on a key that is not in the queue.
    #[error("Key not found in queue: {0}")]
    KeyNotInQueue(String),

    /// `decrease` with a priority above the current one.
    #[error("New priority {requested} is greater than current priority {current} for key {key}")]
    PriorityIncrease {
        key: String,
        current: f64,
        requested: f64,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graphlib operations.
pub type GraphResult<T> = Result<T, GraphError>;
