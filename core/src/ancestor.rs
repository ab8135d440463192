//! Earliest-ancestor query over a parent/child relation.
//!
//! Given a list of `(parent, child)` pairs, find the ancestor of a vertex
//! that sits at the end of the longest upward path. The relation is viewed
//! in reverse — child to parents — and explored depth-first with the same
//! path-frontier mechanics as [`crate::traversal::dfs`], except there is no
//! destination: the walk exhausts every reachable ancestor.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::frontier::Stack;
use crate::graph::VertexId;

/// Reversed adjacency view: child → parents, in input order.
///
/// A child appearing in several pairs accumulates its parents in the order
/// the pairs were given. Parent order affects which equally-long paths get
/// explored, never the final answer — the tie-break in
/// [`earliest_ancestor`] fixes that.
pub fn build_parents(pairs: &[(VertexId, VertexId)]) -> HashMap<VertexId, Vec<VertexId>> {
    let mut parents: HashMap<VertexId, Vec<VertexId>> = HashMap::new();
    for &(parent, child) in pairs {
        parents.entry(child).or_default().push(parent);
    }
    parents
}

/// The most distant ancestor of `start` under the given relation.
///
/// "Most distant" means the terminal vertex of the longest child-to-parent
/// path. When several longest paths exist, the one ending at the smallest
/// vertex id wins — the comparison is on the terminal id alone, which is
/// what makes the answer deterministic despite unordered parent expansion.
///
/// Returns `None` when `start` has no recorded parents.
pub fn earliest_ancestor(pairs: &[(VertexId, VertexId)], start: VertexId) -> Option<VertexId> {
    let parents = build_parents(pairs);

    let mut best = vec![start];
    let mut to_visit = Stack::new();
    to_visit.push(vec![start]);

    let mut visited = HashSet::new();

    while let Some(path) = to_visit.pop() {
        let tail = path[path.len() - 1];

        // Longest path wins; on a length tie, the smaller terminal id.
        if path.len() > best.len() || (path.len() == best.len() && tail < best[best.len() - 1]) {
            best = path.clone();
        }

        if visited.insert(tail) {
            if let Some(tail_parents) = parents.get(&tail) {
                for &parent in tail_parents {
                    let mut extended = path.clone();
                    extended.push(parent);
                    to_visit.push(extended);
                }
            }
        }
    }

    if best.len() > 1 {
        debug!(start, ancestor = best[best.len() - 1], depth = best.len() - 1, "earliest ancestor");
        Some(best[best.len() - 1])
    } else {
        None
    }
}
