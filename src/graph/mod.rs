//! In-memory graph: the core data structure.

pub mod builder;
mod compound;
pub mod multigraph;

pub use builder::GraphBuilder;
pub use multigraph::Graph;
