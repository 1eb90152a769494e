//! route-graph-core: directed weighted graph over a fixed vertex set.
//!
//! Adjacency-list storage with bounds-checked 1-based vertex ids, unweighted
//! BFS (distances + predecessors), transposition, and extraction of the
//! subgraph formed by all shortest routes between two vertices.
//! Edge lists can be ingested from whitespace-separated text.

mod error;
mod graph;
mod ingest;
mod routes;
mod transpose;
mod traversal;

pub use error::{GraphError, Result};
pub use graph::{AdjacencyEntry, AdjacencyList, GraphLike, VertexId, VertexRecord, Weight};
pub use ingest::read_graph;
pub use routes::shortest_routes;
pub use transpose::{transpose_into, transpose_into_with, transposed, WeightPolicy};
pub use traversal::{bfs, shortest_path, BfsResult};
