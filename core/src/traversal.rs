//! Breadth-first and depth-first traversal and path search.
//!
//! Traversals (`bft`, `dft`, `dft_recursive`) walk every vertex reachable
//! from a start vertex exactly once and report the discovery order. Searches
//! (`bfs`, `dfs`, `dfs_recursive`) look for a path between two vertices by
//! driving a frontier of whole partial paths rather than bare vertices;
//! each frontier entry owns its path, and extending a path always clones it,
//! so sibling branches never alias a shared sequence.
//!
//! Neighbor sets iterate in no fixed order. The only guarantees are the ones
//! stated per function: exactly-once visitation, breadth-first level order,
//! and minimum edge count for `bfs`.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::Result;
use crate::frontier::{Queue, Stack};
use crate::graph::{DirectedGraph, VertexId};

/// Visit every vertex reachable from `start` in breadth-first order.
///
/// Returns the vertices in discovery order: all vertices at graph distance
/// `k` from `start` appear before any vertex at distance `k + 1`. Order
/// within one distance level is unspecified.
pub fn bft(graph: &DirectedGraph, start: VertexId) -> Result<Vec<VertexId>> {
    let mut to_visit = Queue::new();
    to_visit.enqueue(start);

    let mut visited = HashSet::new();
    let mut order = Vec::new();

    while let Some(current) = to_visit.dequeue() {
        if visited.insert(current) {
            order.push(current);
            for &neighbor in graph.get_neighbors(current)? {
                to_visit.enqueue(neighbor);
            }
        }
    }

    Ok(order)
}

/// Visit every vertex reachable from `start` in depth-first order.
///
/// Same loop as [`bft`] with a stack in place of the queue. Guarantees only
/// that each reachable vertex appears exactly once.
pub fn dft(graph: &DirectedGraph, start: VertexId) -> Result<Vec<VertexId>> {
    let mut to_visit = Stack::new();
    to_visit.push(start);

    let mut visited = HashSet::new();
    let mut order = Vec::new();

    while let Some(current) = to_visit.pop() {
        if visited.insert(current) {
            order.push(current);
            for &neighbor in graph.get_neighbors(current)? {
                to_visit.push(neighbor);
            }
        }
    }

    Ok(order)
}

/// Recursive depth-first traversal.
///
/// Every top-level call starts from a fresh visited set; the recursion
/// threads it through `&mut`, so repeated calls on the same graph are
/// independent.
pub fn dft_recursive(graph: &DirectedGraph, start: VertexId) -> Result<Vec<VertexId>> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    dft_visit(graph, start, &mut visited, &mut order)?;
    Ok(order)
}

fn dft_visit(
    graph: &DirectedGraph,
    vertex: VertexId,
    visited: &mut HashSet<VertexId>,
    order: &mut Vec<VertexId>,
) -> Result<()> {
    visited.insert(vertex);
    order.push(vertex);

    for &neighbor in graph.get_neighbors(vertex)? {
        if !visited.contains(&neighbor) {
            dft_visit(graph, neighbor, visited, order)?;
        }
    }
    Ok(())
}

/// Shortest path from `start` to `destination` by edge count (unweighted).
///
/// The frontier holds whole paths. A dequeued path whose tail is the
/// destination is returned immediately — the first path *dequeued* at the
/// destination wins, which under FIFO order is one of minimum edge count.
/// Once a vertex has been expanded, later paths through it are dropped
/// rather than re-expanded.
///
/// Returns `Ok(None)` when the destination is unreachable; that is an
/// expected outcome, not an error.
pub fn bfs(
    graph: &DirectedGraph,
    start: VertexId,
    destination: VertexId,
) -> Result<Option<Vec<VertexId>>> {
    trace!(start, destination, "bfs");

    let mut to_visit = Queue::new();
    to_visit.enqueue(vec![start]);

    let mut visited = HashSet::new();

    while let Some(path) = to_visit.dequeue() {
        let tail = path[path.len() - 1];

        if tail == destination {
            return Ok(Some(path));
        }

        if visited.insert(tail) {
            for &neighbor in graph.get_neighbors(tail)? {
                let mut extended = path.clone();
                extended.push(neighbor);
                to_visit.enqueue(extended);
            }
        }
    }

    debug!(start, destination, "bfs exhausted frontier, no path");
    Ok(None)
}

/// Some path from `start` to `destination`, found depth-first.
///
/// Identical mechanics to [`bfs`] on a stack. If any path exists one is
/// returned, but its length is not guaranteed minimal.
pub fn dfs(
    graph: &DirectedGraph,
    start: VertexId,
    destination: VertexId,
) -> Result<Option<Vec<VertexId>>> {
    trace!(start, destination, "dfs");

    let mut to_visit = Stack::new();
    to_visit.push(vec![start]);

    let mut visited = HashSet::new();

    while let Some(path) = to_visit.pop() {
        let tail = path[path.len() - 1];

        if tail == destination {
            return Ok(Some(path));
        }

        if visited.insert(tail) {
            for &neighbor in graph.get_neighbors(tail)? {
                let mut extended = path.clone();
                extended.push(neighbor);
                to_visit.push(extended);
            }
        }
    }

    debug!(start, destination, "dfs exhausted frontier, no path");
    Ok(None)
}

/// Recursive variant of [`dfs`].
///
/// Fresh visited set per top-level call; the growing path is cloned at each
/// branch point so backtracking never corrupts a sibling's path.
pub fn dfs_recursive(
    graph: &DirectedGraph,
    start: VertexId,
    destination: VertexId,
) -> Result<Option<Vec<VertexId>>> {
    let mut visited = HashSet::new();
    dfs_visit(graph, start, destination, Vec::new(), &mut visited)
}

fn dfs_visit(
    graph: &DirectedGraph,
    vertex: VertexId,
    destination: VertexId,
    mut path: Vec<VertexId>,
    visited: &mut HashSet<VertexId>,
) -> Result<Option<Vec<VertexId>>> {
    path.push(vertex);
    visited.insert(vertex);

    if vertex == destination {
        return Ok(Some(path));
    }

    for &neighbor in graph.get_neighbors(vertex)? {
        if !visited.contains(&neighbor) {
            if let Some(found) = dfs_visit(graph, neighbor, destination, path.clone(), visited)? {
                return Ok(Some(found));
            }
        }
    }
    Ok(None)
}
