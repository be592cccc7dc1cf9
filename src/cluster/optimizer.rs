//! Conductance-minimizing threshold search

use crate::cluster::detection::find_strong_communities;
use crate::cluster::metrics::conductance;
use crate::cluster::ThresholdResult;
use crate::config::Config;
use crate::error::AnalysisError;
use crate::graph::WeightedGraph;
use rayon::prelude::*;

/// Materialize the sweep grid: `min_threshold` to `max_threshold` inclusive,
/// stepping by `threshold_step`. Grid points are derived multiplicatively
/// from the index so accumulated float error cannot drop the endpoint.
fn threshold_grid(config: &Config) -> Vec<f64> {
    let mut grid = Vec::new();
    let mut index = 0u32;
    loop {
        let threshold = config.min_threshold + f64::from(index) * config.threshold_step;
        if threshold > config.max_threshold + config.threshold_step * 1e-6 {
            break;
        }
        grid.push(threshold);
        index += 1;
    }
    grid
}

/// Evaluate a single threshold: detect communities, then average conductance
/// over the multi-node ones. Singletons carry no separation information and
/// structurally-undefined conductances are skipped rather than aborting the
/// threshold. Returns `None` when nothing computable remains, which removes
/// the threshold from candidacy.
fn evaluate_threshold(graph: &WeightedGraph, threshold: f64) -> Option<ThresholdResult> {
    let communities = find_strong_communities(graph, threshold);

    let conductances: Vec<f64> = communities
        .iter()
        .filter(|c| c.size > 1)
        .filter_map(|c| conductance(graph, &c.members))
        .collect();

    if conductances.is_empty() {
        return None;
    }

    let average_conductance = conductances.iter().sum::<f64>() / conductances.len() as f64;
    Some(ThresholdResult {
        threshold,
        average_conductance,
        communities,
    })
}

/// Sweep the threshold grid and keep the partition with the lowest average
/// conductance.
///
/// Each grid point is independent of every other, so the sweep fans out over
/// the rayon pool. Candidates are reduced in ascending threshold order with a
/// strict `<` comparison, so ties keep the lowest threshold no matter how the
/// evaluations were scheduled.
pub fn find_best_threshold(
    graph: &WeightedGraph,
    config: &Config,
) -> Result<ThresholdResult, AnalysisError> {
    let grid = threshold_grid(config);
    if grid.is_empty() {
        return Err(AnalysisError::EmptyThresholdGrid);
    }

    log::debug!(
        "Sweeping {} thresholds in [{}, {}]",
        grid.len(),
        config.min_threshold,
        config.max_threshold
    );

    let mut candidates: Vec<ThresholdResult> = grid
        .par_iter()
        .filter_map(|&threshold| evaluate_threshold(graph, threshold))
        .collect();

    // Reduce in ascending threshold order to keep the tie-break reproducible
    candidates.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));

    let mut best: Option<ThresholdResult> = None;
    for candidate in candidates {
        let improves = best
            .as_ref()
            .map_or(true, |b| candidate.average_conductance < b.average_conductance);
        if improves {
            best = Some(candidate);
        }
    }

    best.ok_or(AnalysisError::NoQualifyingThreshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn graph_from_edges(edges: &[(&str, &str, f64)]) -> WeightedGraph {
        let mut builder = GraphBuilder::new();
        for &(a, b, w) in edges {
            builder.add_edge(a, b, w, w, w);
        }
        builder.build()
    }

    #[test]
    fn default_grid_has_99_points() {
        let grid = threshold_grid(&Config::default());
        assert_eq!(grid.len(), 99);
        assert!((grid[0] - 0.01).abs() < 1e-12);
        assert!((grid[98] - 0.99).abs() < 1e-9);
    }

    #[test]
    fn separates_two_strong_pairs_across_a_weak_bridge() {
        let graph = graph_from_edges(&[("A", "B", 0.9), ("C", "D", 0.9), ("B", "C", 0.1)]);
        let best = find_best_threshold(&graph, &Config::default()).unwrap();

        // Below ~0.11 the bridge qualifies and the only community is the
        // whole graph (undefined conductance); everywhere above, the
        // partition is {A,B} | {C,D} with identical average conductance,
        // so the tie-break keeps the first such grid point.
        assert!((best.threshold - 0.12).abs() < 1e-9);
        assert!((best.average_conductance - 0.1 / 1.9).abs() < 1e-12);

        let sizes: Vec<usize> = best.communities.iter().map(|c| c.size).collect();
        assert_eq!(sizes, vec![2, 2]);
    }

    #[test]
    fn ties_keep_the_lowest_threshold() {
        // Two disconnected components: every threshold yields the same
        // partition with average conductance 0, so the sweep must return
        // the very first grid point.
        let graph = graph_from_edges(&[("A", "B", 0.8), ("C", "D", 0.5)]);
        let config = Config::default();
        let best = find_best_threshold(&graph, &config).unwrap();

        assert!((best.threshold - config.min_threshold).abs() < 1e-12);
        assert_eq!(best.average_conductance, 0.0);
    }

    #[test]
    fn whole_graph_community_at_every_threshold_is_not_a_candidate() {
        // A single edge always forms one community covering the entire
        // graph, so no threshold ever produces a computable conductance.
        let graph = graph_from_edges(&[("A", "B", 0.7)]);
        let err = find_best_threshold(&graph, &Config::default()).unwrap_err();
        assert_eq!(err, AnalysisError::NoQualifyingThreshold);
    }

    #[test]
    fn empty_graph_reports_no_qualifying_threshold() {
        let graph = GraphBuilder::new().build();
        let err = find_best_threshold(&graph, &Config::default()).unwrap_err();
        assert_eq!(err, AnalysisError::NoQualifyingThreshold);
    }
}
