use std::env;

use heapgraph::graph::generators::{generate_grid, generate_random, grid_vertex};
use heapgraph::graph::Graph;
use heapgraph::{BinaryHeap, HeapMode, UndirectedGraph};
use log::info;
use num_traits::Float;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Configuration for a route query
#[derive(Debug, Clone)]
pub struct RouteConfig {
    pub width: usize,
    pub height: usize,
    pub from: String,
    pub to: String,
    pub heap_mode: HeapMode,
    /// When set, a random graph of `width * height` vertices is used instead of the grid
    pub seed: Option<u64>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            width: 6,
            height: 6,
            from: grid_vertex(0, 0),
            to: grid_vertex(5, 5),
            heap_mode: HeapMode::Min,
            seed: None,
        }
    }
}

impl RouteConfig {
    /// Reads `[from] [to] [heap-mode] [seed]` from the command line
    fn from_args(args: &[String]) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = RouteConfig::default();
        if let Some(from) = args.get(1) {
            config.from = from.clone();
        }
        if let Some(to) = args.get(2) {
            config.to = to.clone();
        }
        if let Some(mode) = args.get(3) {
            config.heap_mode = mode.parse()?;
        }
        if let Some(seed) = args.get(4) {
            config.seed = Some(seed.parse()?);
        }
        Ok(config)
    }

    fn build_graph(&self) -> heapgraph::Result<UndirectedGraph<OrderedFloat<f64>>> {
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                generate_random(self.width * self.height, 2.0, &mut rng)
            }
            None => generate_grid(self.width, self.height),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = RouteConfig::from_args(&args)?;
    info!("Configuration: {:?}", config);

    let graph = config.build_graph()?;
    println!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let route = graph.shortest_route(&config.from, &config.to)?;
    println!("Shortest route: {}", route);

    // Order every reachable distance through the configured heap
    let result = graph.dijkstra(&config.from)?;
    let mut heap = BinaryHeap::new(
        config.heap_mode,
        result
            .distances
            .iter()
            .filter(|(_, distance)| distance.is_finite())
            .map(|(vertex, distance)| (vertex.clone(), *distance)),
    );
    heap.heap_sort();

    println!("Distances from {} ({} order):", config.from, config.heap_mode);
    for node in heap.storage() {
        if let Some(distance) = node.priority() {
            println!("  {:<8} {:.1}", node.value(), distance.into_inner());
        }
    }

    Ok(())
}
