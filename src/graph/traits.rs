use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::Result;

/// Trait representing a weighted graph with named vertices
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the vertex names
    fn vertices(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns an iterator over the neighbours of a vertex and the edge weights to them
    fn adjacent_edges(&self, vertex: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &str) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &str, to: &str) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &str, to: &str) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex; returns false if it was already present
    fn add_vertex(&mut self, name: &str) -> bool;

    /// Sets the weight of the edge between two existing vertices
    fn add_edge(&mut self, from: &str, to: &str, weight: W) -> Result<()>;
}
