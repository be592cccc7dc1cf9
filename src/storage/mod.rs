//! Results persistence module

use anyhow::Result;
use crate::cluster::metrics::conductance;
use crate::cluster::ThresholdResult;
use crate::graph::WeightedGraph;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use serde_json::{json, to_string_pretty};

/// Save the full analysis results to the specified directory
pub fn save_results(
    graph: &WeightedGraph,
    result: &ThresholdResult,
    output_dir: &str,
) -> Result<()> {
    log::info!(
        "Saving {} communities to {}",
        result.communities.len(),
        output_dir
    );

    fs::create_dir_all(output_dir)?;

    save_edge_table(graph, output_dir)?;
    save_partition_report(graph, result, output_dir)?;
    save_summary(graph, result, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save the combined edge table as CSV, one row per retained edge
pub fn save_edge_table(graph: &WeightedGraph, output_dir: &str) -> Result<()> {
    log::info!("Saving edge table with {} edges", graph.edge_count());

    fs::create_dir_all(output_dir)?;

    let path = Path::new(output_dir).join("edge_table.csv");
    let mut file = File::create(path)?;

    writeln!(file, "type1,type2,norm_relation,norm_event_relation,weight")?;
    for edge in &graph.edges {
        writeln!(
            file,
            "{},{},{:.6},{:.6},{:.6}",
            graph.label(edge.source),
            graph.label(edge.target),
            edge.norm_relation,
            edge.norm_event_relation,
            edge.weight
        )?;
    }

    Ok(())
}

/// Save the winning partition with per-community details
fn save_partition_report(
    graph: &WeightedGraph,
    result: &ThresholdResult,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving partition report");

    let path = Path::new(output_dir).join("communities.json");
    let mut file = File::create(path)?;

    let communities_json: Vec<_> = result
        .communities
        .iter()
        .map(|community| {
            let members: Vec<&str> = community
                .members
                .iter()
                .map(|&node| graph.label(node))
                .collect();
            json!({
                "id": community.id,
                "size": community.size,
                "members": members,
                "conductance": conductance(graph, &community.members),
            })
        })
        .collect();

    let report = json!({
        "threshold": result.threshold,
        "average_conductance": result.average_conductance,
        "communities": communities_json,
    });

    file.write_all(to_string_pretty(&report)?.as_bytes())?;

    Ok(())
}

/// Save graph and partition statistics
fn save_summary(
    graph: &WeightedGraph,
    result: &ThresholdResult,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let multi_node = result
        .communities
        .iter()
        .filter(|c| c.size > 1)
        .count();
    let total_weight: f64 = graph.edges.iter().map(|e| e.weight).sum();

    let summary = json!({
        "graph_stats": {
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
            "total_edge_weight": total_weight,
            "avg_edge_weight": if graph.edge_count() == 0 {
                0.0
            } else {
                total_weight / graph.edge_count() as f64
            },
        },
        "partition_stats": {
            "threshold": result.threshold,
            "average_conductance": result.average_conductance,
            "community_count": result.communities.len(),
            "multi_node_community_count": multi_node,
            "largest_community_size": result.communities.iter().map(|c| c.size).max().unwrap_or(0),
        }
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}
