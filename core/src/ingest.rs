//! Text ingestion: whitespace-separated vertex pairs.
//!
//! Each pair `v u` becomes the edge `v -> u` with weight `0`. Pairs may be
//! split across lines. The first bad token stops ingestion with
//! [`GraphError::MalformedInput`]; edges read before it are kept.

use std::collections::VecDeque;
use std::io::BufRead;

use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyList, GraphLike, VertexId};

/// Line-numbered whitespace tokenizer over a buffered reader.
struct Tokens<R> {
    reader: R,
    line: usize,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<(usize, String)>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some((self.line, token)));
            }
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending.extend(buf.split_whitespace().map(str::to_owned));
        }
    }
}

fn parse_vertex(graph: &AdjacencyList, line: usize, token: &str) -> Result<VertexId> {
    let value: i64 = token.parse().map_err(|_| {
        GraphError::malformed(line, format!("expected a vertex id, found `{token}`"))
    })?;
    match VertexId::try_from(value) {
        Ok(id) if graph.is_in_bounds(id) => Ok(id),
        _ => Err(GraphError::malformed(
            line,
            format!("vertex {value} out of bounds [1, {}]", graph.len()),
        )),
    }
}

impl AdjacencyList {
    /// Read vertex pairs until end of input, adding each as a zero-weight
    /// edge. Returns the number of pairs consumed (duplicates included).
    pub fn read_edges<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut tokens = Tokens::new(reader);
        self.read_pairs(&mut tokens)
    }

    fn read_pairs<R: BufRead>(&mut self, tokens: &mut Tokens<R>) -> Result<usize> {
        let mut pairs = 0;
        let outcome = loop {
            let (line, token) = match tokens.next_token()? {
                Some(t) => t,
                None => break Ok(pairs),
            };
            let from = match parse_vertex(self, line, &token) {
                Ok(v) => v,
                Err(e) => break Err(e),
            };
            let to = match tokens.next_token()? {
                Some((line, token)) => match parse_vertex(self, line, &token) {
                    Ok(v) => v,
                    Err(e) => break Err(e),
                },
                None => {
                    break Err(GraphError::malformed(
                        line,
                        format!("vertex {from} has no pair partner"),
                    ))
                }
            };
            self.add_edge(from, to, 0.0)?;
            pairs += 1;
        };

        match &outcome {
            Ok(n) => debug!(pairs = n, edges = self.edge_count(), "read edge list"),
            Err(e) => warn!(pairs_accepted = pairs, error = %e, "rejected edge list"),
        }
        outcome
    }
}

/// Read a graph whose input begins with the vertex count, followed by edge
/// pairs. A count above `max_vertices` is rejected before allocating.
pub fn read_graph<R: BufRead>(reader: R, max_vertices: usize) -> Result<AdjacencyList> {
    let mut tokens = Tokens::new(reader);
    let (line, token) = tokens
        .next_token()?
        .ok_or_else(|| GraphError::malformed(0, "missing vertex count"))?;
    let n: usize = token.parse().map_err(|_| {
        GraphError::malformed(line, format!("expected a vertex count, found `{token}`"))
    })?;
    if n > max_vertices {
        return Err(GraphError::malformed(
            line,
            format!("vertex count {n} exceeds limit {max_vertices}"),
        ));
    }

    let mut graph = AdjacencyList::new(n);
    graph.read_pairs(&mut tokens)?;
    Ok(graph)
}
