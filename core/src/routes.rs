use tracing::debug;

use crate::error::Result;
use crate::graph::{AdjacencyList, GraphLike, VertexId};
use crate::transpose::{transposed, WeightPolicy};
use crate::traversal::bfs;

/// Subgraph of `graph` made of every edge on some shortest `source -> target`
/// path (by hop count).
///
/// Phase 1: BFS from `source`, keep edges `u -> v` with `d(v) == d(u) + 1`.
/// Phase 2: transpose that layered graph and BFS from `target`; keep the
/// reversed edges whose endpoints both reach `target`, then transpose back.
///
/// The result has the same vertex count as `graph`. It is edgeless when
/// `target` is unreachable or equals `source`. Weights go through two
/// transposes under `policy`, so `Zeroed` yields all-zero weights.
pub fn shortest_routes(
    graph: &AdjacencyList,
    source: VertexId,
    target: VertexId,
    policy: WeightPolicy,
) -> Result<AdjacencyList> {
    graph.check_bounds(target)?;
    let n = graph.len();

    let from_source = bfs(graph, source)?;
    let mut layered = AdjacencyList::new(n);
    for (u, v, weight) in graph.edges() {
        if let (Some(du), Some(dv)) = (from_source.distance(u), from_source.distance(v)) {
            if dv == du + 1 {
                layered.add_edge(u, v, weight)?;
            }
        }
    }

    let reversed = transposed(&layered, policy)?;
    let to_target = bfs(&reversed, target)?;
    let mut kept = AdjacencyList::new(n);
    for (v, u, weight) in reversed.edges() {
        if to_target.is_reachable(v) && to_target.is_reachable(u) {
            kept.add_edge(v, u, weight)?;
        }
    }

    let routes = transposed(&kept, policy)?;
    debug!(
        source,
        target,
        layered_edges = layered.edge_count(),
        route_edges = routes.edge_count(),
        "extracted shortest routes"
    );
    Ok(routes)
}
