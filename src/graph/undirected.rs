use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{Route, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A weighted undirected graph stored as a map of neighbour maps
///
/// Every edge is stored in both directions, so `adjacency[u][v]` and
/// `adjacency[v][u]` always hold the same weight. Vertices are kept in name
/// order, which makes every traversal deterministic.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// vertex -> (neighbour -> weight)
    pub(crate) adjacency: BTreeMap<String, BTreeMap<String, W>>,

    /// Vertices reached by the most recent traversal
    pub(crate) discovered: BTreeSet<String>,
}

impl<W> UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            adjacency: BTreeMap::new(),
            discovered: BTreeSet::new(),
        }
    }

    /// Creates a graph containing the given vertices and no edges
    pub fn with_vertices<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = UndirectedGraph::new();
        for name in names {
            graph.add_vertex(name.as_ref());
        }
        graph
    }

    /// Vertices reached by the most recent traversal call
    pub fn discovered(&self) -> &BTreeSet<String> {
        &self.discovered
    }

    pub(crate) fn require_vertex(&self, vertex: &str) -> Result<()> {
        if self.adjacency.contains_key(vertex) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(vertex.to_string()))
        }
    }

    pub(crate) fn neighbours<'a>(&'a self, vertex: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|edges| edges.keys().map(String::as_str))
    }
}

impl<W> UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Runs Dijkstra from `source` over this graph
    pub fn dijkstra(&self, source: &str) -> Result<ShortestPathResult<W>> {
        Dijkstra::new().compute_shortest_paths(self, source)
    }

    /// Finds the lightest route between two vertices
    pub fn shortest_route(&self, from: &str, to: &str) -> Result<Route<W>> {
        self.require_vertex(to)?;
        let result = self.dijkstra(from)?;

        let unreachable = || Error::Unreachable {
            from: from.to_string(),
            to: to.to_string(),
        };
        let weight = result.distance(to).ok_or_else(unreachable)?;
        let vertices = result.path_to(to).ok_or_else(unreachable)?;

        debug!("Route {} -> {} spans {} vertices", from, to, vertices.len());
        Ok(Route { weight, vertices })
    }
}

impl<W> Default for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        UndirectedGraph::new()
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum::<usize>() / 2
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.adjacency.keys().map(String::as_str))
    }

    fn adjacent_edges(&self, vertex: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().map(|(to, weight)| (to.as_str(), *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, from: &str, to: &str) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    fn get_edge_weight(&self, from: &str, to: &str) -> Option<W> {
        self.adjacency.get(from).and_then(|edges| edges.get(to)).copied()
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, name: &str) -> bool {
        if self.adjacency.contains_key(name) {
            return false;
        }
        self.adjacency.insert(name.to_string(), BTreeMap::new());
        true
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: W) -> Result<()> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;
        if from == to {
            return Err(Error::InvalidEdge(from.to_string(), to.to_string()));
        }
        let raw = num_traits::cast::<W, f64>(weight).unwrap_or(f64::NAN);
        if !weight.is_finite() {
            return Err(Error::NonFiniteWeight(raw));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(raw));
        }

        for (a, b) in [(from, to), (to, from)] {
            if let Some(edges) = self.adjacency.get_mut(a) {
                edges.insert(b.to_string(), weight);
            }
        }
        Ok(())
    }
}
