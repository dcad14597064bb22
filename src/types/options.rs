//! Graph-level configuration flags.

use serde::{Deserialize, Serialize};

/// Flags fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Edges (v, w) and (w, v) are distinct.
    #[serde(default = "default_directed")]
    pub directed: bool,
    /// Parallel edges between the same endpoints, told apart by name.
    #[serde(default)]
    pub multigraph: bool,
    /// Nodes may be nested under other nodes.
    #[serde(default)]
    pub compound: bool,
}

fn default_directed() -> bool {
    true
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            directed: true,
            multigraph: false,
            compound: false,
        }
    }
}

impl GraphOptions {
    /// Directed, simple, flat.
    pub fn directed() -> Self {
        Self::default()
    }

    /// Undirected, simple, flat.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            ..Self::default()
        }
    }

    /// Set the multigraph flag.
    pub fn multigraph(mut self, multigraph: bool) -> Self {
        self.multigraph = multigraph;
        self
    }

    /// Set the compound flag.
    pub fn compound(mut self, compound: bool) -> Self {
        self.compound = compound;
        self
    }
}
