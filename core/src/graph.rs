use std::collections::{HashMap, HashSet};

use crate::error::{GraphError, Result};

/// Vertex identifier. Vertices carry no payload beyond their identity.
pub type VertexId = u64;

/// In-memory directed graph: each vertex maps to the set of vertices its
/// outgoing edges point at.
///
/// Edges are stored in one direction only — `add_edge(a, b)` makes `b` a
/// neighbor of `a` and nothing else. Neighbor sets have no defined iteration
/// order, so traversal order among siblings is unspecified; callers may rely
/// only on the order properties each traversal documents.
///
/// Edge targets are validated lazily: `add_edge` checks that the source
/// vertex exists but deliberately not the target. A dangling target only
/// fails when a traversal reaches it and asks for *its* neighbors. Callers
/// should add every vertex before adding edges.
#[derive(Debug)]
pub struct DirectedGraph {
    vertices: HashMap<VertexId, HashSet<VertexId>>,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(vertex_count),
        }
    }

    /// Register a vertex with an empty neighbor set.
    ///
    /// Re-adding an existing vertex resets its neighbor set, discarding any
    /// edges previously added from it. Destructive on purpose — callers that
    /// want idempotent registration must check [`contains`](Self::contains)
    /// first.
    pub fn add_vertex(&mut self, id: VertexId) {
        self.vertices.insert(id, HashSet::new());
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// Fails if `from` was never added. `to` is not checked (see the type
    /// docs for the lazy-validation contract).
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        match self.vertices.get_mut(&from) {
            Some(neighbors) => {
                neighbors.insert(to);
                Ok(())
            }
            None => Err(GraphError::MissingVertex(from)),
        }
    }

    /// The set of vertices reachable from `id` over a single edge.
    pub fn get_neighbors(&self, id: VertexId) -> Result<&HashSet<VertexId>> {
        self.vertices
            .get(&id)
            .ok_or(GraphError::MissingVertex(id))
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|n| n.len()).sum()
    }

    /// Iterate over all registered vertex ids (arbitrary order).
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }
}

impl Default for DirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_and_neighbors() {
        let mut g = DirectedGraph::new();
        g.add_vertex(1);
        g.add_vertex(2);
        g.add_edge(1, 2).unwrap();

        let neighbors = g.get_neighbors(1).unwrap();
        assert!(neighbors.contains(&2));
        assert_eq!(neighbors.len(), 1);
        // Directed: no reverse edge
        assert!(g.get_neighbors(2).unwrap().is_empty());
    }

    #[test]
    fn test_add_edge_missing_source() {
        let mut g = DirectedGraph::new();
        g.add_vertex(2);
        assert_eq!(g.add_edge(1, 2), Err(GraphError::MissingVertex(1)));
    }

    #[test]
    fn test_add_edge_dangling_target_allowed() {
        // Target validation is lazy: the edge itself succeeds.
        let mut g = DirectedGraph::new();
        g.add_vertex(1);
        assert!(g.add_edge(1, 99).is_ok());
        assert!(g.get_neighbors(1).unwrap().contains(&99));
        // But asking for the dangling target's own neighbors fails.
        assert_eq!(g.get_neighbors(99), Err(GraphError::MissingVertex(99)));
    }

    #[test]
    fn test_get_neighbors_missing_vertex() {
        let g = DirectedGraph::new();
        assert_eq!(g.get_neighbors(5), Err(GraphError::MissingVertex(5)));
    }

    #[test]
    fn test_readd_vertex_is_idempotent_when_edgeless() {
        let mut g = DirectedGraph::new();
        g.add_vertex(1);
        g.add_vertex(1);
        assert!(g.get_neighbors(1).unwrap().is_empty());
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_readd_vertex_clears_edges() {
        // Documented quirk: re-adding a vertex resets its neighbor set.
        let mut g = DirectedGraph::new();
        g.add_vertex(1);
        g.add_vertex(2);
        g.add_edge(1, 2).unwrap();
        assert_eq!(g.get_neighbors(1).unwrap().len(), 1);

        g.add_vertex(1);
        assert!(g.get_neighbors(1).unwrap().is_empty());
    }

    #[test]
    fn test_parallel_edges_collapse() {
        let mut g = DirectedGraph::new();
        g.add_vertex(1);
        g.add_vertex(2);
        g.add_edge(1, 2).unwrap();
        g.add_edge(1, 2).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_counts() {
        let mut g = DirectedGraph::new();
        for v in 0..5 {
            g.add_vertex(v);
        }
        for v in 0..4 {
            g.add_edge(v, v + 1).unwrap();
        }
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 4);

        let mut ids: Vec<VertexId> = g.vertex_ids().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }
}
