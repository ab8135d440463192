//! graph-walk-core: in-memory directed-graph engine.
//!
//! A pure Rust library providing adjacency-set vertex/edge storage and four
//! traversal families: breadth-first traversal and search, depth-first
//! traversal and search (iterative and recursive), and a longest-path
//! earliest-ancestor query over a parent/child relation.
//!
//! Everything is synchronous and single-threaded; callers needing concurrent
//! access must wrap the graph in their own synchronization.

mod ancestor;
mod error;
mod frontier;
mod graph;
mod traversal;

pub use ancestor::{build_parents, earliest_ancestor};
pub use error::{GraphError, Result};
pub use frontier::{Queue, Stack};
pub use graph::{DirectedGraph, VertexId};
pub use traversal::{bfs, bft, dfs, dfs_recursive, dft, dft_recursive};
