use heapgraph::graph::generators::{generate_grid, generate_random, grid_vertex};
use heapgraph::graph::{Graph, MutableGraph};
use heapgraph::{Dijkstra, Error, ShortestPathAlgorithm, UndirectedGraph};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::iter;

type Weight = OrderedFloat<f64>;

fn scenario_graph() -> UndirectedGraph<Weight> {
    let mut graph = UndirectedGraph::with_vertices(["A", "B", "C", "D"]);
    graph.add_edge("A", "B", OrderedFloat(1.0)).unwrap();
    graph.add_edge("B", "C", OrderedFloat(2.0)).unwrap();
    graph.add_edge("A", "C", OrderedFloat(4.0)).unwrap();
    graph.add_edge("C", "D", OrderedFloat(1.0)).unwrap();
    graph
}

// Random graph with integer weights so every path sum is exact
fn integer_weighted_graph(n: usize, edges: usize, rng: &mut StdRng) -> UndirectedGraph<Weight> {
    let names: Vec<String> = (0..n).map(|i| format!("v{}", i)).collect();
    let mut graph = UndirectedGraph::with_vertices(&names);
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1..50) as f64);
            graph.add_edge(&names[u], &names[v], weight).unwrap();
        }
    }
    graph
}

// Reference all-pairs distances
fn floyd_warshall(graph: &UndirectedGraph<Weight>) -> (Vec<String>, Vec<Vec<f64>>) {
    let names: Vec<String> = graph.vertices().map(str::to_string).collect();
    let n = names.len();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for i in 0..n {
        dist[i][i] = 0.0;
        for j in 0..n {
            if let Some(w) = graph.get_edge_weight(&names[i], &names[j]) {
                dist[i][j] = w.into_inner();
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if dist[i][k] + dist[k][j] < dist[i][j] {
                    dist[i][j] = dist[i][k] + dist[k][j];
                }
            }
        }
    }
    (names, dist)
}

#[test]
fn test_dijkstra_scenario_distances() {
    let graph = scenario_graph();
    let result = graph.dijkstra("A").unwrap();

    let distances: Vec<(String, f64)> = result
        .distances
        .iter()
        .map(|(v, d)| (v.clone(), d.into_inner()))
        .collect();
    assert_eq!(
        distances,
        vec![
            ("A".to_string(), 0.0),
            ("B".to_string(), 1.0),
            ("C".to_string(), 3.0),
            ("D".to_string(), 4.0),
        ]
    );
    assert_eq!(result.predecessors["A"], None);
    assert_eq!(result.predecessors["C"].as_deref(), Some("B"));
    assert_eq!(result.predecessors["D"].as_deref(), Some("C"));
}

#[test]
fn test_shortest_route_scenario() {
    let graph = scenario_graph();
    let route = graph.shortest_route("A", "D").unwrap();
    assert_eq!(route.weight, OrderedFloat(4.0));
    assert_eq!(route.path(), "A>B>C>D");
    assert_eq!(route.to_string(), "A>B>C>D (weight 4)");
}

#[test]
fn test_route_to_self() {
    let graph = scenario_graph();
    let route = graph.shortest_route("C", "C").unwrap();
    assert_eq!(route.weight, OrderedFloat(0.0));
    assert_eq!(route.path(), "C");
}

#[test]
fn test_missing_and_unreachable_vertices() {
    let mut graph = scenario_graph();
    graph.add_vertex("island");

    assert_eq!(
        graph.dijkstra("nowhere").unwrap_err(),
        Error::VertexNotFound("nowhere".to_string())
    );
    assert_eq!(
        graph.shortest_route("A", "nowhere").unwrap_err(),
        Error::VertexNotFound("nowhere".to_string())
    );
    assert_eq!(
        graph.shortest_route("A", "island").unwrap_err(),
        Error::Unreachable {
            from: "A".to_string(),
            to: "island".to_string()
        }
    );

    let result = graph.dijkstra("A").unwrap();
    assert!(result.distances["island"].into_inner().is_infinite());
    assert_eq!(result.distance("island"), None);
    assert_eq!(result.path_to("island"), None);
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10).unwrap();
    let source = grid_vertex(0, 0);
    let target = grid_vertex(9, 9);

    let result = graph.dijkstra(&source).unwrap();
    let distance = result.distance(&target).expect("corner should be reachable");
    assert!((distance.into_inner() - 9.0 * 1.4).abs() < 1e-9);

    let path = result.path_to(&target).unwrap();
    assert_eq!(path.first(), Some(&source));
    assert_eq!(path.last(), Some(&target));
    assert_eq!(path.len(), 10);
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let full = generate_grid(10, 10).unwrap();

    // Rebuild the grid without a wall in column 5 (rows 0..8)
    let wall: Vec<String> = (0..8).map(|y| grid_vertex(5, y)).collect();
    let mut graph: UndirectedGraph<Weight> =
        UndirectedGraph::with_vertices(full.vertices().filter(|v| !wall.iter().any(|w| w == v)));
    for from in full.vertices() {
        for (to, weight) in full.adjacent_edges(from) {
            if graph.has_vertex(from) && graph.has_vertex(to) {
                graph.add_edge(from, to, weight).unwrap();
            }
        }
    }

    let source = grid_vertex(0, 0);
    let target = grid_vertex(9, 0);
    let route = graph.shortest_route(&source, &target).unwrap();

    // The route has to dip below the wall
    assert!(route.vertices.iter().any(|v| v.ends_with(",8") || v.ends_with(",9")));
    for step in route.vertices.windows(2) {
        assert!(graph.has_edge(&step[0], &step[1]), "Path should only use existing edges");
    }
}

#[test]
fn test_dijkstra_matches_floyd_warshall() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10 {
        let graph = integer_weighted_graph(25, 40, &mut rng);
        let (names, reference) = floyd_warshall(&graph);

        for (i, source) in names.iter().enumerate() {
            let result = graph.dijkstra(source).unwrap();
            assert_eq!(result.distances[source], OrderedFloat(0.0));

            for (j, target) in names.iter().enumerate() {
                assert_eq!(result.distances[target].into_inner(), reference[i][j]);

                if let Some(path) = result.path_to(target) {
                    let total: f64 = path
                        .windows(2)
                        .map(|step| graph.get_edge_weight(&step[0], &step[1]).unwrap().into_inner())
                        .sum();
                    assert_eq!(total, reference[i][j]);
                }
            }
        }
    }
}

#[test]
fn test_linear_lookup_gives_same_distances() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = generate_random(60, 3.0, &mut rng).unwrap();

    let indexed = Dijkstra::new();
    let linear = Dijkstra::new().with_linear_lookup(true);
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<Weight, UndirectedGraph<Weight>>>::name(&indexed),
        "Dijkstra"
    );

    for source in ["v0", "v17", "v42"] {
        let a = indexed.compute_shortest_paths(&graph, source).unwrap();
        let b = linear.compute_shortest_paths(&graph, source).unwrap();
        assert_eq!(a.distances, b.distances);
        assert_eq!(a.predecessors, b.predecessors);
    }
}

// Lists "a" as its only vertex but reports an edge from it to "ghost"
#[derive(Debug)]
struct DanglingEdgeGraph;

impl Graph<Weight> for DanglingEdgeGraph {
    fn vertex_count(&self) -> usize {
        1
    }

    fn edge_count(&self) -> usize {
        1
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(iter::once("a"))
    }

    fn adjacent_edges(&self, vertex: &str) -> Box<dyn Iterator<Item = (&str, Weight)> + '_> {
        if vertex == "a" {
            Box::new(iter::once(("ghost", OrderedFloat(1.0))))
        } else {
            Box::new(iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &str) -> bool {
        vertex == "a"
    }

    fn has_edge(&self, from: &str, to: &str) -> bool {
        from == "a" && to == "ghost"
    }

    fn get_edge_weight(&self, from: &str, to: &str) -> Option<Weight> {
        self.has_edge(from, to).then_some(OrderedFloat(1.0))
    }
}

#[test]
fn test_dijkstra_fails_on_neighbour_outside_vertex_list() {
    for dijkstra in [Dijkstra::new(), Dijkstra::new().with_linear_lookup(true)] {
        let result = dijkstra.compute_shortest_paths(&DanglingEdgeGraph, "a");
        assert_eq!(
            result.unwrap_err(),
            Error::MissingHeapEntry("ghost".to_string())
        );
    }
}
