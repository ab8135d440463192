use std::time::Instant;

use graph_walk_core::{bfs, bft, dfs, dft, earliest_ancestor, DirectedGraph, VertexId};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-walk-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all      Run all generators and benchmark each (default)");
        println!("  chain    Single path 0→1→...→n-1 (worst-case depth)");
        println!("  tree     Random 3-ary tree (branching, no cycles)");
        println!("  random   Erdos-Renyi uniform random edges");
        println!("  dag      Layered DAG with forward-only edges");
        println!();
        println!("Default vertex_count: 10000");
        return;
    }

    println!("graph-walk-bench");
    println!("================");
    println!();

    let generators: Vec<(&str, fn(u64) -> DirectedGraph)> = match mode {
        "chain" => vec![("Chain", gen_chain)],
        "tree" => vec![("Random tree", gen_tree)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "dag" => vec![("Layered DAG", gen_dag)],
        "all" => vec![
            ("Chain", gen_chain as fn(u64) -> DirectedGraph),
            ("Random tree", gen_tree),
            ("Erdos-Renyi random", gen_random),
            ("Layered DAG", gen_dag),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, vertex_count);
    }

    run_ancestor_benchmark(vertex_count);
}

fn run_benchmark(name: &str, generator: fn(u64) -> DirectedGraph, vertex_count: u64) {
    println!("--- {} ---", name);

    let t = Instant::now();
    let graph = generator(vertex_count);
    println!(
        "Generated in {:.2}s — {} vertices, {} edges",
        t.elapsed().as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let far = vertex_count - 1;

    println!();
    println!("{:>10} {:>12} {:>10}", "op", "result", "time");
    println!("{:->10} {:->12} {:->10}", "", "", "");

    let t = Instant::now();
    let order = bft(&graph, 0).expect("generated graphs have no dangling vertices");
    print_row("bft", &format!("{} seen", order.len()), t.elapsed());

    let t = Instant::now();
    let order = dft(&graph, 0).expect("generated graphs have no dangling vertices");
    print_row("dft", &format!("{} seen", order.len()), t.elapsed());

    let t = Instant::now();
    let path = bfs(&graph, 0, far).expect("generated graphs have no dangling vertices");
    let summary = match &path {
        Some(p) => format!("{} hops", p.len() - 1),
        None => "no path".to_string(),
    };
    print_row("bfs", &summary, t.elapsed());

    let t = Instant::now();
    let path = dfs(&graph, 0, far).expect("generated graphs have no dangling vertices");
    let summary = match &path {
        Some(p) => format!("{} hops", p.len() - 1),
        None => "no path".to_string(),
    };
    print_row("dfs", &summary, t.elapsed());

    println!();
}

fn run_ancestor_benchmark(vertex_count: u64) {
    println!("--- Earliest ancestor ---");

    // Parent/child pairs forming a random forest: each vertex after the
    // first picks one earlier vertex as its parent.
    let mut rng = FastRng::new(42);
    let pairs: Vec<(VertexId, VertexId)> = (1..vertex_count)
        .map(|child| (rng.next(child), child))
        .collect();

    let t = Instant::now();
    let result = earliest_ancestor(&pairs, vertex_count - 1);
    // -1 is the conventional display for "no ancestors".
    let display = result.map(|v| v as i64).unwrap_or(-1);
    println!(
        "{} pairs, ancestor of {} = {} ({:.1}ms)",
        pairs.len(),
        vertex_count - 1,
        display,
        t.elapsed().as_secs_f64() * 1000.0
    );
    println!();
}

fn print_row(op: &str, result: &str, elapsed: std::time::Duration) {
    println!(
        "{:>10} {:>12} {:>8.1}ms",
        op,
        result,
        elapsed.as_secs_f64() * 1000.0
    );
}

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

/// Single chain 0→1→...→n-1: deepest possible BFS/DFS, exercises long paths.
fn gen_chain(vertex_count: u64) -> DirectedGraph {
    let mut graph = DirectedGraph::with_capacity(vertex_count as usize);
    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for v in 0..vertex_count - 1 {
        graph
            .add_edge(v, v + 1)
            .expect("all vertices added up front");
    }
    graph
}

/// Random tree: each vertex after the root attaches to a random earlier
/// vertex. No cycles, average depth O(log n).
fn gen_tree(vertex_count: u64) -> DirectedGraph {
    let mut graph = DirectedGraph::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(12345);

    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for v in 1..vertex_count {
        let parent = rng.next(v);
        graph
            .add_edge(parent, v)
            .expect("all vertices added up front");
    }
    graph
}

/// Erdos-Renyi: ~4 uniform random out-edges per vertex.
fn gen_random(vertex_count: u64) -> DirectedGraph {
    let edges_per_vertex = 4u64;
    let mut graph = DirectedGraph::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(67890);

    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for v in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.next(vertex_count);
            if target != v {
                graph
                    .add_edge(v, target)
                    .expect("all vertices added up front");
            }
        }
    }
    graph
}

/// Layered DAG: edges only point at higher ids, 3 per vertex.
fn gen_dag(vertex_count: u64) -> DirectedGraph {
    let mut graph = DirectedGraph::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(24680);

    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for v in 0..vertex_count - 1 {
        for _ in 0..3 {
            let target = v + 1 + rng.next(vertex_count - v - 1).min(vertex_count - v - 2);
            graph
                .add_edge(v, target)
                .expect("all vertices added up front");
        }
    }
    graph
}
