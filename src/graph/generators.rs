use crate::graph::{MutableGraph, UndirectedGraph};
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Name of the grid vertex at column `x`, row `y`
pub fn grid_vertex(x: usize, y: usize) -> String {
    format!("{},{}", x, y)
}

/// Generates a `width` x `height` grid where every cell is connected to its
/// eight neighbours; straight moves cost 1.0 and diagonal moves 1.4
pub fn generate_grid(width: usize, height: usize) -> Result<UndirectedGraph<OrderedFloat<f64>>> {
    let mut graph = UndirectedGraph::new();

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(&grid_vertex(x, y));
        }
    }

    // Only E, SE, S and SW; the undirected edges cover the other four
    let directions = [(1, 0, 1.0), (1, 1, 1.4), (0, 1, 1.0), (-1, 1, 1.4)];

    for y in 0..height {
        for x in 0..width {
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    graph.add_edge(
                        &grid_vertex(x, y),
                        &grid_vertex(nx as usize, ny as usize),
                        OrderedFloat(cost),
                    )?;
                }
            }
        }
    }

    Ok(graph)
}

/// Generates a random graph with `num_vertices` vertices named `v0`, `v1`, ...
/// and roughly `edge_factor * num_vertices` edges weighted in `1.0..100.0`
pub fn generate_random<R: Rng>(
    num_vertices: usize,
    edge_factor: f64,
    rng: &mut R,
) -> Result<UndirectedGraph<OrderedFloat<f64>>> {
    let mut graph = UndirectedGraph::with_vertices((0..num_vertices).map(|i| format!("v{}", i)));
    if num_vertices < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * num_vertices as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        // Avoid self-loops and ensure positive weights
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(&format!("v{}", u), &format!("v{}", v), weight)?;
        }
    }

    Ok(graph)
}
