use std::collections::{BTreeMap, HashSet};
use std::fmt::{self, Debug, Display};

use log::warn;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance from the source to every vertex; unreachable vertices hold +inf
    pub distances: BTreeMap<String, W>,

    /// Predecessor of every vertex in the shortest path tree
    pub predecessors: BTreeMap<String, Option<String>>,

    /// Source vertex
    pub source: String,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance to `target`, or `None` if it is unknown or unreachable
    pub fn distance(&self, target: &str) -> Option<W> {
        self.distances
            .get(target)
            .copied()
            .filter(|distance| distance.is_finite())
    }

    pub fn is_reachable(&self, target: &str) -> bool {
        self.distance(target).is_some()
    }

    /// Walks the predecessors back from `target` and returns the path from
    /// the source to `target`
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        while current != self.source {
            if !visited.insert(current) {
                warn!("Cycle detected in path reconstruction at vertex {}", current);
                return None;
            }

            path.push(current.to_string());
            match self.predecessors.get(current) {
                Some(Some(pred)) => current = pred.as_str(),
                // Reachable vertex without a predecessor that is not the source
                _ => return None,
            }
        }

        path.push(self.source.clone());
        path.reverse();

        Some(path)
    }
}

/// The lightest route between two vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Route<W> {
    /// Total edge weight along the route
    pub weight: W,

    /// Vertices from start to end
    pub vertices: Vec<String>,
}

impl<W> Route<W> {
    /// Renders the vertices joined by `>`, e.g. `A>B>C`
    pub fn path(&self) -> String {
        self.vertices.join(">")
    }
}

impl<W: Display> Display for Route<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (weight {})", self.path(), self.weight)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &str) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
