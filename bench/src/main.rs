use std::time::Instant;

use route_graph_core::{
    bfs, shortest_path, shortest_routes, transposed, AdjacencyList, GraphLike, Result, VertexId,
    WeightPolicy,
};

type Generator = fn(usize) -> Result<AdjacencyList>;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: route-graph-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  chain       Single directed path 1 -> 2 -> ... -> n");
        println!("  tree        Ternary tree (deep, exponentially wide)");
        println!("  smallworld  Ring lattice + random shortcuts (Watts-Strogatz)");
        println!("  random      Erdos-Renyi uniform random edges");
        println!();
        println!("Default vertex_count: 1000000");
        return Ok(());
    }

    if vertex_count < 2 {
        eprintln!("vertex_count must be at least 2");
        return Ok(());
    }

    println!("route-graph-bench");
    println!("=================");
    println!();

    let generators: Vec<(&str, Generator)> = match mode {
        "chain" => vec![("Chain", gen_chain)],
        "tree" => vec![("Ternary tree", gen_tree)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "all" => vec![
            ("Chain", gen_chain as Generator),
            ("Ternary tree", gen_tree),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return Ok(());
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, vertex_count)?;
    }
    Ok(())
}

fn ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

fn run_benchmark(name: &str, generator: Generator, vertex_count: usize) -> Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let t = Instant::now();
    let graph = generator(vertex_count)?;
    println!(
        "Generated in {:.2}s — {} vertices, {} edges",
        t.elapsed().as_secs_f64(),
        graph.len(),
        graph.edge_count()
    );

    let far = graph.len() as VertexId;

    let t = Instant::now();
    let result = bfs(&graph, 1)?;
    let max_depth = result.distances().iter().flatten().max().copied().unwrap_or(0);
    println!(
        "BFS from 1: reached {} vertices, max depth {} in {:.1}ms",
        result.reached_count(),
        max_depth,
        ms(t)
    );

    let t = Instant::now();
    match shortest_path(&graph, 1, far)? {
        Some(p) => println!("Shortest path 1 → {}: {} hops in {:.1}ms", far, p.len() - 1, ms(t)),
        None => println!("Shortest path 1 → {}: no path ({:.1}ms)", far, ms(t)),
    }

    let t = Instant::now();
    let reversed = transposed(&graph, WeightPolicy::Zeroed)?;
    println!("Transpose: {} edges in {:.1}ms", reversed.edge_count(), ms(t));

    let t = Instant::now();
    let routes = shortest_routes(&graph, 1, far, WeightPolicy::Zeroed)?;
    println!(
        "Shortest routes 1 → {}: {} edges in {:.1}ms",
        far,
        routes.edge_count(),
        ms(t)
    );
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators — deterministic, single-threaded, vertices 1..=n
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform vertex id in `1..=n`.
    fn vertex(&mut self, n: usize) -> VertexId {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % n as u64) as VertexId + 1
    }

    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn weight(&mut self) -> f32 {
        (self.next_f64() * 10.0) as f32
    }
}

/// Worst case for BFS depth: every vertex one hop further than the last.
fn gen_chain(n: usize) -> Result<AdjacencyList> {
    let mut graph = AdjacencyList::new(n);
    for v in 1..n as VertexId {
        graph.add_edge(v, v + 1, 1.0)?;
    }
    Ok(graph)
}

/// Ternary tree rooted at 1: children of `v` are `3v - 1 ..= 3v + 1`.
fn gen_tree(n: usize) -> Result<AdjacencyList> {
    let mut graph = AdjacencyList::new(n);
    let mut rng = FastRng::new(42);
    for child in 2..=n as VertexId {
        let parent = (child + 1) / 3;
        graph.add_edge(parent, child, rng.weight())?;
    }
    Ok(graph)
}

/// Ring lattice with K forward neighbors, each edge rewired with
/// probability p. High clustering, short paths.
fn gen_small_world(n: usize) -> Result<AdjacencyList> {
    let k = 10usize;
    let p = 0.05f64;
    let mut graph = AdjacencyList::new(n);
    let mut rng = FastRng::new(67890);

    for i in 0..n {
        let from = (i + 1) as VertexId;
        for j in 1..=k {
            let neighbor = ((i + j) % n + 1) as VertexId;
            let to = if rng.next_f64() < p {
                rng.vertex(n)
            } else {
                neighbor
            };
            if to != from {
                graph.add_edge(from, to, rng.weight())?;
            }
        }
    }
    Ok(graph)
}

/// Uniform random edges, ~10 per vertex on average. No structure.
fn gen_random(n: usize) -> Result<AdjacencyList> {
    let mut graph = AdjacencyList::new(n);
    let mut rng = FastRng::new(54321);

    for _ in 0..n * 10 {
        let from = rng.vertex(n);
        let to = rng.vertex(n);
        if from != to {
            graph.add_edge(from, to, rng.weight())?;
        }
    }
    Ok(graph)
}
