use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyList, GraphLike, Weight};

/// How reversed edges are weighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPolicy {
    /// Every reversed edge gets weight `0`. This is the historical behavior:
    /// the transpose records structure only.
    #[default]
    Zeroed,
    /// Reversed edges carry the weight of the edge they came from.
    Preserve,
}

impl WeightPolicy {
    fn apply(self, weight: Weight) -> Weight {
        match self {
            WeightPolicy::Zeroed => 0.0,
            WeightPolicy::Preserve => weight,
        }
    }
}

/// Insert the reverse of every edge of `source` into `target`, with zero
/// weights. See [`transpose_into_with`].
pub fn transpose_into(source: &AdjacencyList, target: &mut AdjacencyList) -> Result<()> {
    transpose_into_with(source, target, WeightPolicy::Zeroed)
}

/// For every edge `u -> v` of `source`, add `v -> u` to `target`.
///
/// `target` is normally empty. Edges it already has are left alone, since
/// `add_edge` never overwrites. Fails before touching `target` if the two
/// graphs differ in vertex count.
pub fn transpose_into_with(
    source: &AdjacencyList,
    target: &mut AdjacencyList,
    policy: WeightPolicy,
) -> Result<()> {
    if target.len() != source.len() {
        return Err(GraphError::VertexCountMismatch {
            expected: source.len(),
            found: target.len(),
        });
    }

    for (u, v, weight) in source.edges() {
        target.add_edge(v, u, policy.apply(weight))?;
    }

    debug!(
        vertices = source.len(),
        edges = source.edges().count(),
        ?policy,
        "transposed graph"
    );
    Ok(())
}

/// Fresh transpose of `source`.
pub fn transposed(source: &AdjacencyList, policy: WeightPolicy) -> Result<AdjacencyList> {
    let mut target = AdjacencyList::new(source.len());
    transpose_into_with(source, &mut target, policy)?;
    Ok(target)
}
