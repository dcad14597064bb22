//! Binary min-heap with decrease-key, keyed by node identifiers.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::node_id::describe;
use crate::types::{GraphError, GraphResult};

struct Entry<K> {
    key: K,
    priority: f64,
}

/// A min-priority queue over unique keys.
///
/// The heap lives in a `Vec`; `index` maps each key to its heap slot so that
/// `priority` is O(1) and `decrease` is O(log n).
pub struct PriorityQueue<K> {
    heap: Vec<Entry<K>>,
    index: HashMap<K, usize>,
}

impl<K> PriorityQueue<K>
where
    K: Clone + Eq + Hash + std::fmt::Debug,
{
    /// Create a new, empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty queue with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Number of keys in the queue.
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no keys.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// All keys currently in the queue, in heap order.
    pub fn keys(&self) -> Vec<&K> {
        self.heap.iter().map(|e| &e.key).collect()
    }

    /// Whether `key` is in the queue.
    pub fn has(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Current priority of `key`, or `None` if it is not in the queue.
    pub fn priority(&self, key: &K) -> Option<f64> {
        self.index.get(key).map(|&i| self.heap[i].priority)
    }

    /// The key with the lowest priority, without removing it.
    pub fn min(&self) -> GraphResult<&K> {
        self.heap
            .first()
            .map(|e| &e.key)
            .ok_or(GraphError::EmptyQueue)
    }

    /// Insert `key` with `priority`. Returns false, leaving the queue
    /// untouched, if the key is already present.
    pub fn add(&mut self, key: K, priority: f64) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let slot = self.heap.len();
        self.index.insert(key.clone(), slot);
        self.heap.push(Entry { key, priority });
        self.sift_up(slot);
        true
    }

    /// Remove and return the key with the lowest priority.
    pub fn remove_min(&mut self) -> GraphResult<K> {
        if self.heap.is_empty() {
            return Err(GraphError::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let Some(min) = self.heap.pop() else {
            return Err(GraphError::EmptyQueue);
        };
        self.index.remove(&min.key);
        self.sift_down(0);
        Ok(min.key)
    }

    /// Lower the priority of `key`. Raising it is a contract violation.
    pub fn decrease(&mut self, key: &K, priority: f64) -> GraphResult<()> {
        let Some(&slot) = self.index.get(key) else {
            return Err(GraphError::KeyNotInQueue(describe(key)));
        };
        let current = self.heap[slot].priority;
        if priority > current {
            return Err(GraphError::PriorityIncrease {
                key: describe(key),
                current,
                requested: priority,
            });
        }
        self.heap[slot].priority = priority;
        self.sift_up(slot);
        Ok(())
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].priority < self.heap[i].priority {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.heap.swap(i, j);
        self.index.insert(self.heap[i].key.clone(), i);
        self.index.insert(self.heap[j].key.clone(), j);
    }
}

impl<K> Default for PriorityQueue<K>
where
    K: Clone + Eq + Hash + std::fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
