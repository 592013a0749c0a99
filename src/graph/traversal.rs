//! Depth-first and breadth-first traversals over [`UndirectedGraph`]
//!
//! Each traversal clears the graph's discovered set, walks everything
//! reachable from the start vertex, leaves the reached set in
//! [`UndirectedGraph::discovered`] and returns the order in which vertices
//! were processed.

use std::collections::BTreeSet;
use std::fmt::Debug;

use log::debug;
use num_traits::{Float, Zero};

use crate::data_structures::{Queue, Stack};
use crate::graph::undirected::UndirectedGraph;
use crate::Result;

impl<W> UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Depth-first search using the call stack
    pub fn recursive_dfs(&mut self, start: &str) -> Result<Vec<String>> {
        self.require_vertex(start)?;

        let mut discovered = BTreeSet::new();
        let mut order = Vec::new();
        self.dfs_visit(start, &mut discovered, &mut order);

        debug!("Recursive DFS from {} reached {} vertices", start, order.len());
        self.discovered = discovered;
        Ok(order)
    }

    fn dfs_visit(&self, vertex: &str, discovered: &mut BTreeSet<String>, order: &mut Vec<String>) {
        discovered.insert(vertex.to_string());
        order.push(vertex.to_string());

        for neighbour in self.neighbours(vertex) {
            if !discovered.contains(neighbour) {
                self.dfs_visit(neighbour, discovered, order);
            }
        }
    }

    /// Depth-first search driven by an explicit [`Stack`]
    ///
    /// A vertex may be pushed several times but is marked and processed only
    /// the first time it is popped.
    pub fn iterative_dfs(&mut self, start: &str) -> Result<Vec<String>> {
        self.require_vertex(start)?;

        let mut discovered = BTreeSet::new();
        let mut order = Vec::new();
        let mut stack = Stack::new();
        stack.push(start.to_string());

        while let Some(current) = stack.pop() {
            if discovered.contains(&current) {
                continue;
            }
            for neighbour in self.neighbours(&current) {
                stack.push(neighbour.to_string());
            }
            discovered.insert(current.clone());
            order.push(current);
        }

        debug!("Iterative DFS from {} reached {} vertices", start, order.len());
        self.discovered = discovered;
        Ok(order)
    }

    /// Breadth-first search driven by a [`Queue`]
    ///
    /// Vertices are marked when enqueued, so each one enters the queue at
    /// most once.
    pub fn iterative_bfs(&mut self, start: &str) -> Result<Vec<String>> {
        self.require_vertex(start)?;

        let mut discovered = BTreeSet::new();
        let mut order = Vec::new();
        let mut queue = Queue::new();

        discovered.insert(start.to_string());
        queue.enqueue(start.to_string());

        while let Some(current) = queue.dequeue() {
            for neighbour in self.neighbours(&current) {
                if discovered.insert(neighbour.to_string()) {
                    queue.enqueue(neighbour.to_string());
                }
            }
            order.push(current);
        }

        debug!("BFS from {} reached {} vertices", start, order.len());
        self.discovered = discovered;
        Ok(order)
    }
}
