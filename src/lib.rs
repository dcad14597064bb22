//! graphlib: an in-memory labeled multigraph with classical graph algorithms.
//!
//! The [`Graph`] type supports directed and undirected graphs, parallel named
//! edges (multigraphs), and parent/child nesting of nodes (compound graphs).
//! The [`alg`] module implements traversals, topological sort, connected and
//! strongly connected components, shortest paths and minimum spanning trees
//! on top of the graph's public queries.

pub mod alg;
pub mod cli;
pub mod format;
pub mod graph;
pub mod queue;
pub mod types;

// Re-export commonly used types at the crate root
pub use alg::{DfsOrder, Path};
pub use format::{GraphRecord, JsonReader, JsonWriter};
pub use graph::{Graph, GraphBuilder};
pub use queue::PriorityQueue;
pub use types::{Edge, GraphError, GraphOptions, GraphResult, NodeId};
