//! Priority queue used by the weighted algorithms.

pub mod priority_queue;

pub use priority_queue::PriorityQueue;
