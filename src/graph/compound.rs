//! Parent/child forest for compound graphs.

use std::collections::{HashMap, HashSet};

use crate::types::NodeId;

/// Nesting structure of a compound graph.
///
/// A node without an entry in `parent` hangs off the implicit root, which is
/// never a real node. Every node has a (possibly empty) child set.
#[derive(Debug, Clone)]
pub(crate) struct Hierarchy<K> {
    parent: HashMap<K, K>,
    children: HashMap<K, HashSet<K>>,
    root: HashSet<K>,
}

impl<K: NodeId> Hierarchy<K> {
    pub(crate) fn new() -> Self {
        Self {
            parent: HashMap::new(),
            children: HashMap::new(),
            root: HashSet::new(),
        }
    }

    /// Register a freshly created node under the root.
    pub(crate) fn insert_node(&mut self, v: K) {
        self.children.insert(v.clone(), HashSet::new());
        self.root.insert(v);
    }

    /// Detach `v`, moving its children up to `v`'s own parent.
    pub(crate) fn remove_node(&mut self, v: &K) {
        let grandparent = self.parent.get(v).cloned();
        let orphans: Vec<K> = self
            .children
            .get(v)
            .map(|c| c.iter().cloned().collect())
            .unwrap_or_default();
        for child in orphans {
            self.set_parent(child, grandparent.clone());
        }
        self.detach(v);
        self.children.remove(v);
    }

    pub(crate) fn parent(&self, v: &K) -> Option<&K> {
        self.parent.get(v)
    }

    pub(crate) fn children(&self, v: &K) -> Option<&HashSet<K>> {
        self.children.get(v)
    }

    pub(crate) fn root_children(&self) -> &HashSet<K> {
        &self.root
    }

    /// Whether `candidate` is `v` or one of `v`'s descendants.
    pub(crate) fn would_cycle(&self, v: &K, candidate: &K) -> bool {
        let mut ancestor = Some(candidate);
        while let Some(a) = ancestor {
            if a == v {
                return true;
            }
            ancestor = self.parent.get(a);
        }
        false
    }

    /// Move `v` under `parent` (or the root). Both must already be registered
    /// and the move must have passed `would_cycle`.
    pub(crate) fn set_parent(&mut self, v: K, parent: Option<K>) {
        self.detach(&v);
        match parent {
            Some(p) => {
                self.children.entry(p.clone()).or_default().insert(v.clone());
                self.parent.insert(v, p);
            }
            None => {
                self.root.insert(v);
            }
        }
    }

    fn detach(&mut self, v: &K) {
        match self.parent.remove(v) {
            Some(old) => {
                if let Some(siblings) = self.children.get_mut(&old) {
                    siblings.remove(v);
                }
            }
            None => {
                self.root.remove(v);
            }
        }
    }
}
