use std::collections::{BTreeMap, HashSet};
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryHeap, HeapMode};
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm over an indexable min-heap
///
/// Every vertex is queued up front at its initial distance (0 for the source,
/// +inf elsewhere). A relaxed vertex keeps its heap entry; the entry's
/// priority is lowered in place.
#[derive(Debug, Default)]
pub struct Dijkstra {
    /// Locate heap entries by scanning slots instead of using the slot index
    linear_lookup: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            linear_lookup: false,
        }
    }

    /// Find relaxed vertices in the heap with a linear scan
    pub fn with_linear_lookup(mut self, enabled: bool) -> Self {
        self.linear_lookup = enabled;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &str) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::VertexNotFound(source.to_string()));
        }

        let mut distances: BTreeMap<String, W> = BTreeMap::new();
        let mut predecessors: BTreeMap<String, Option<String>> = BTreeMap::new();
        let mut visited: HashSet<String> = HashSet::with_capacity(graph.vertex_count());
        let mut queue = BinaryHeap::empty(HeapMode::Min);

        for vertex in graph.vertices() {
            let initial = if vertex == source { W::zero() } else { W::infinity() };
            distances.insert(vertex.to_string(), initial);
            predecessors.insert(vertex.to_string(), None);
            queue.insert(vertex.to_string(), initial);
        }

        debug!(
            "Dijkstra from {} over {} vertices ({} lookup)",
            source,
            queue.len(),
            if self.linear_lookup { "linear" } else { "indexed" }
        );

        while !queue.is_empty() {
            let node = queue.extract_top()?;
            let current = node.into_value();
            let dist_u = distances.get(&current).copied().unwrap_or_else(W::infinity);
            visited.insert(current.clone());

            // Everything left in the queue is unreachable
            if dist_u.is_infinite() {
                continue;
            }

            for (neighbour, weight) in graph.adjacent_edges(&current) {
                if visited.contains(neighbour) {
                    continue;
                }

                let alt = dist_u + weight;
                let known = distances.get(neighbour).copied().unwrap_or_else(W::infinity);
                if alt < known {
                    distances.insert(neighbour.to_string(), alt);
                    predecessors.insert(neighbour.to_string(), Some(current.clone()));

                    let slot = if self.linear_lookup {
                        queue.scan_first_key(neighbour)
                    } else {
                        queue.first_key(neighbour)
                    };
                    let slot =
                        slot.ok_or_else(|| Error::MissingHeapEntry(neighbour.to_string()))?;
                    queue.change_priority(slot, alt)?;
                    trace!("Relaxed {} via {}: {:?} -> {:?}", neighbour, current, known, alt);
                }
            }
        }

        debug!("Dijkstra from {} settled {} vertices", source, visited.len());

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.to_string(),
        })
    }
}
