use std::fmt;

use serde::Serialize;

use crate::error::{GraphError, Result};

/// Vertex identifier. Vertices of a graph with `n` vertices are `1..=n`.
pub type VertexId = u32;

/// Edge weight. Any value is accepted, including zero and negatives.
pub type Weight = f32;

/// Shared vertex-set capability: a fixed count and bounds checking.
///
/// Each concrete graph owns its own count; nothing is shared between graphs.
pub trait GraphLike {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True iff `id` lies in `[1, len]`.
    fn is_in_bounds(&self, id: VertexId) -> bool {
        id >= 1 && (id as usize) <= self.len()
    }

    fn check_bounds(&self, id: VertexId) -> Result<()> {
        if self.is_in_bounds(id) {
            Ok(())
        } else {
            Err(GraphError::out_of_bounds(id, self.len()))
        }
    }
}

/// One outgoing edge in an adjacency sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjacencyEntry {
    pub neighbor: VertexId,
    pub weight: Weight,
}

/// A vertex and its outgoing edges, in insertion order.
///
/// `id` always equals the record's array position plus one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexRecord {
    id: VertexId,
    adjacency: Vec<AdjacencyEntry>,
}

impl VertexRecord {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn adjacency(&self) -> &[AdjacencyEntry] {
        &self.adjacency
    }
}

/// Directed weighted graph over a fixed vertex set `1..=n`.
///
/// Within one vertex's adjacency sequence neighbors are unique; `add_edge`
/// enforces this by checking adjacency before appending. Every public
/// operation that takes a vertex id validates it and fails with
/// [`GraphError::OutOfBounds`] instead of panicking.
///
/// `Clone` is a deep copy: graphs never share adjacency storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    vertices: Vec<VertexRecord>,
}

impl GraphLike for AdjacencyList {
    fn len(&self) -> usize {
        self.vertices.len()
    }
}

impl AdjacencyList {
    /// Graph with `vertex_count` vertices and no edges. Zero is allowed.
    pub fn new(vertex_count: usize) -> Self {
        let vertices = (1..=vertex_count)
            .map(|i| VertexRecord {
                id: i as VertexId,
                adjacency: Vec::new(),
            })
            .collect();
        Self { vertices }
    }

    /// Bulk load from `(from, to, weight)` triples through [`add_edge`].
    ///
    /// Duplicate pairs keep the first weight seen.
    ///
    /// [`add_edge`]: AdjacencyList::add_edge
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        let mut graph = Self::new(vertex_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    fn slot(&self, u: VertexId) -> Result<usize> {
        self.check_bounds(u)?;
        Ok(u as usize - 1)
    }

    /// Outgoing edges of `u` in insertion order.
    pub fn adjacency_of(&self, u: VertexId) -> Result<&[AdjacencyEntry]> {
        let i = self.slot(u)?;
        Ok(&self.vertices[i].adjacency)
    }

    /// Mutable access stays inside the crate so neighbor uniqueness can't be
    /// broken from outside.
    pub(crate) fn adjacency_of_mut(&mut self, u: VertexId) -> Result<&mut Vec<AdjacencyEntry>> {
        let i = self.slot(u)?;
        Ok(&mut self.vertices[i].adjacency)
    }

    /// True iff the edge `u -> v` exists.
    pub fn is_adjacent(&self, u: VertexId, v: VertexId) -> Result<bool> {
        self.check_bounds(v)?;
        Ok(self.adjacency_of(u)?.iter().any(|e| e.neighbor == v))
    }

    /// Weight of `u -> v`, if the edge exists.
    pub fn weight(&self, u: VertexId, v: VertexId) -> Result<Option<Weight>> {
        self.check_bounds(v)?;
        Ok(self
            .adjacency_of(u)?
            .iter()
            .find(|e| e.neighbor == v)
            .map(|e| e.weight))
    }

    /// Append `u -> v` unless it already exists. Re-adding an edge never
    /// updates its weight. Returns whether the edge was inserted.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<bool> {
        if self.is_adjacent(u, v)? {
            return Ok(false);
        }
        self.adjacency_of_mut(u)?.push(AdjacencyEntry {
            neighbor: v,
            weight,
        });
        Ok(true)
    }

    /// Delete `u -> v` if present. Returns whether an edge was removed.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<bool> {
        self.check_bounds(v)?;
        let adjacency = self.adjacency_of_mut(u)?;
        match adjacency.iter().position(|e| e.neighbor == v) {
            Some(pos) => {
                adjacency.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drop every edge. The vertex count is unchanged.
    pub fn clear(&mut self) {
        for record in &mut self.vertices {
            record.adjacency.clear();
        }
    }

    pub fn out_degree(&self, u: VertexId) -> Result<usize> {
        Ok(self.adjacency_of(u)?.len())
    }

    /// In-degree of every vertex, indexed by `id - 1`.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.len()];
        for (_, v, _) in self.edges() {
            degrees[v as usize - 1] += 1;
        }
        degrees
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|r| r.adjacency.len()).sum()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &VertexRecord> {
        self.vertices.iter()
    }

    /// All edges as `(from, to, weight)`, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.vertices
            .iter()
            .flat_map(|r| r.adjacency.iter().map(move |e| (r.id, e.neighbor, e.weight)))
    }
}

/// Diagnostic dump: one line per vertex that has outgoing edges.
impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.vertices.iter().filter(|r| !r.adjacency.is_empty()) {
            write!(f, "{}:", record.id)?;
            for entry in &record.adjacency {
                write!(f, " ({}, {})", entry.neighbor, entry.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
