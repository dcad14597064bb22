//! All data types for the graphlib library.

pub mod edge;
pub mod error;
pub mod node_id;
pub mod options;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node_id::NodeId;
pub use options::GraphOptions;
