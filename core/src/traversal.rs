use std::collections::VecDeque;

use serde::Serialize;
use tracing::trace;

use crate::error::Result;
use crate::graph::{AdjacencyList, GraphLike, VertexId};

/// Output of a breadth-first search.
///
/// Both arrays have one slot per vertex, addressed by `id - 1`. `None`
/// marks an unvisited vertex (and, for predecessors, the source too).
/// Edge weights play no part: distances are directed hop counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BfsResult {
    source: VertexId,
    distances: Vec<Option<u32>>,
    predecessors: Vec<Option<VertexId>>,
}

impl BfsResult {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn distances(&self) -> &[Option<u32>] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    /// Hop count from the source to `v`; `None` if unreachable or `v` is
    /// not a vertex of the searched graph.
    pub fn distance(&self, v: VertexId) -> Option<u32> {
        self.slot(v).and_then(|i| self.distances[i])
    }

    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.slot(v).and_then(|i| self.predecessors[i])
    }

    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance(v).is_some()
    }

    /// Number of discovered vertices, the source included.
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Walk predecessor pointers back from `target`. Returns the vertices
    /// of one shortest path, source first; `None` if `target` was not reached.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.predecessor(current) {
            path.push(parent);
            current = parent;
        }

        path.reverse();
        Some(path)
    }

    fn slot(&self, v: VertexId) -> Option<usize> {
        (v >= 1 && (v as usize) <= self.distances.len()).then(|| v as usize - 1)
    }
}

/// Breadth-first search from `source` over outgoing edges.
///
/// Frontier is a FIFO queue; a vertex is assigned its distance and parent
/// the first time it is discovered, which is at its minimum hop count.
/// Neighbors are expanded in adjacency insertion order, so among equal-length
/// paths the recorded parent is the first one discovered.
pub fn bfs(graph: &AdjacencyList, source: VertexId) -> Result<BfsResult> {
    graph.check_bounds(source)?;

    let n = graph.len();
    let mut distances: Vec<Option<u32>> = vec![None; n];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    distances[source as usize - 1] = Some(0);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let next = distances[u as usize - 1].map(|d| d + 1);
        for entry in graph.adjacency_of(u)? {
            let slot = entry.neighbor as usize - 1;
            if distances[slot].is_none() {
                distances[slot] = next;
                predecessors[slot] = Some(u);
                queue.push_back(entry.neighbor);
            }
        }
    }

    let result = BfsResult {
        source,
        distances,
        predecessors,
    };
    trace!(source, reached = result.reached_count(), "bfs complete");
    Ok(result)
}

/// Shortest directed path from `source` to `target` by hop count.
///
/// Stops as soon as `target` is discovered. Returns the path including both
/// endpoints, or `None` when `target` is unreachable. `source == target`
/// yields the single-vertex path.
pub fn shortest_path(
    graph: &AdjacencyList,
    source: VertexId,
    target: VertexId,
) -> Result<Option<Vec<VertexId>>> {
    graph.check_bounds(source)?;
    graph.check_bounds(target)?;

    if source == target {
        return Ok(Some(vec![source]));
    }

    // Sentinel: the source is its own parent.
    let mut parents: Vec<Option<VertexId>> = vec![None; graph.len()];
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    parents[source as usize - 1] = Some(source);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for entry in graph.adjacency_of(u)? {
            let v = entry.neighbor;
            if parents[v as usize - 1].is_some() {
                continue;
            }
            parents[v as usize - 1] = Some(u);
            if v == target {
                return Ok(Some(reconstruct_path(&parents, source, target)));
            }
            queue.push_back(v);
        }
    }

    Ok(None)
}

fn reconstruct_path(parents: &[Option<VertexId>], source: VertexId, target: VertexId) -> Vec<VertexId> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match parents[current as usize - 1] {
            Some(parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
