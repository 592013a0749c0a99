//! heapgraph - weighted undirected graphs over an indexable binary heap
//!
//! This library provides a small in-memory graph toolkit: vertex and edge
//! insertion, depth-first and breadth-first traversal, and single-source
//! shortest paths computed with Dijkstra's algorithm.
//!
//! Dijkstra runs on [`BinaryHeap`], an array-backed 1-indexed heap that
//! supports changing the priority of an arbitrary slot and looking up the
//! current slot of a stored value.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, Route, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{BinaryHeap, HeapMode, LinkNode, Queue, Stack};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Heap slot {index} is out of range (size {size})")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Heap is empty")]
    EmptyHeap,

    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("No route from {from} to {to}")]
    Unreachable { from: String, to: String },

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(String, String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Edge weight must be finite: {0}")]
    NonFiniteWeight(f64),

    #[error("Vertex {0} has no entry in the priority queue")]
    MissingHeapEntry(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
