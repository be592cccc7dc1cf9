//! Weighted conductance of a node subset

use crate::graph::WeightedGraph;
use std::collections::HashSet;

/// Compute the weighted conductance of a community:
/// `cut_weight(S) / min(volume(S), volume(V \ S))`, where a node's volume
/// contribution is its weighted degree.
///
/// Returns `None` when the denominator is zero, which happens exactly when
/// the community covers the whole graph (no complement volume) or carries no
/// incident weight at all. Those cases are structurally undefined rather than
/// errors, and callers skip them when averaging.
pub fn conductance(graph: &WeightedGraph, members: &[u32]) -> Option<f64> {
    let member_set: HashSet<u32> = members.iter().copied().collect();

    let mut cut_weight = 0.0;
    let mut community_volume = 0.0;
    for &node in members {
        for &(neighbor, weight) in graph.neighbors(node) {
            community_volume += weight;
            if !member_set.contains(&neighbor) {
                cut_weight += weight;
            }
        }
    }

    let complement_volume = graph.total_volume() - community_volume;
    let denominator = community_volume.min(complement_volume);
    if denominator <= 0.0 {
        return None;
    }

    Some(cut_weight / denominator)
}
