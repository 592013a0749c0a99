use colored::*;
use heapgraph::graph::{Graph, MutableGraph};
use heapgraph::{Route, UndirectedGraph};
use ordered_float::OrderedFloat;
use std::collections::{BTreeMap, HashSet};

/// Represents a city grid with buildings and streets
struct CityGrid {
    width: usize,
    height: usize,
    buildings: HashSet<(usize, usize)>,
    locations: BTreeMap<&'static str, (usize, usize)>,
}

fn cell(x: usize, y: usize) -> String {
    format!("{},{}", x, y)
}

impl CityGrid {
    fn is_walkable(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && !self.buildings.contains(&(x, y))
    }

    fn to_graph(&self) -> heapgraph::Result<UndirectedGraph<OrderedFloat<f64>>> {
        let mut graph = UndirectedGraph::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_walkable(x, y) {
                    graph.add_vertex(&cell(x, y));
                }
            }
        }

        // E, SE, S and SW cover all eight directions once edges are undirected
        let directions = [(1, 0, 1.0), (1, 1, 1.4), (0, 1, 1.0), (-1, 1, 1.4)];
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.is_walkable(x, y) {
                    continue;
                }
                for (dx, dy, cost) in directions {
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx >= 0 && ny >= 0 && self.is_walkable(nx as usize, ny as usize) {
                        graph.add_edge(&cell(x, y), &cell(nx as usize, ny as usize), OrderedFloat(cost))?;
                    }
                }
            }
        }
        Ok(graph)
    }
}

fn sample_city() -> CityGrid {
    let mut buildings = HashSet::new();
    // Office district, shopping center and a school
    for (xs, ys) in [(3..7, 2..8), (10..15, 4..9), (8..11, 12..16)] {
        for x in xs {
            for y in ys.clone() {
                buildings.insert((x, y));
            }
        }
    }

    let locations = BTreeMap::from([
        ("home", (0, 0)),
        ("work", (19, 15)),
        ("cafe", (8, 1)),
        ("park", (12, 10)),
    ]);

    CityGrid {
        width: 20,
        height: 16,
        buildings,
        locations,
    }
}

fn draw(city: &CityGrid, route: &Route<OrderedFloat<f64>>) {
    let on_route: HashSet<&str> = route.vertices.iter().map(String::as_str).collect();

    println!("{}", format!("┌{}┐", "─".repeat(city.width)).bright_white());
    for y in 0..city.height {
        print!("{}", "│".bright_white());
        for x in 0..city.width {
            let name = city.locations.iter().find(|(_, &pos)| pos == (x, y)).map(|(n, _)| n);
            let glyph = match name {
                Some(name) => name[..1].to_uppercase().bright_green().bold(),
                None if !city.is_walkable(x, y) => "█".on_bright_black().white(),
                None if on_route.contains(cell(x, y).as_str()) => "*".bright_yellow().bold(),
                None => "·".bright_black(),
            };
            print!("{}", glyph);
        }
        println!("{}", "│".bright_white());
    }
    println!("{}", format!("└{}┘", "─".repeat(city.width)).bright_white());
}

fn main() -> heapgraph::Result<()> {
    let city = sample_city();
    let graph = city.to_graph()?;
    println!(
        "{} {} vertices, {} edges",
        "City graph:".bright_cyan().bold(),
        graph.vertex_count(),
        graph.edge_count()
    );

    for (from, to) in [("home", "work"), ("cafe", "park")] {
        let (fx, fy) = city.locations[from];
        let (tx, ty) = city.locations[to];
        let route = graph.shortest_route(&cell(fx, fy), &cell(tx, ty))?;

        println!(
            "\n{} {} → {}  ({:.1})",
            "🚶".bright_yellow(),
            from.bright_white().bold(),
            to.bright_white().bold(),
            route.weight.into_inner()
        );
        draw(&city, &route);
    }

    Ok(())
}
