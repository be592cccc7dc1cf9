//! Visualization handoff module
//!
//! Emits the winning partition in formats an external renderer can lay out:
//! GraphML with community membership and edge weights, a node table with
//! community assignments, and a static HTML report.

use anyhow::Result;
use crate::cluster::ThresholdResult;
use crate::graph::WeightedGraph;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Generate visualization artifacts from analysis results
pub fn generate_visualizations(
    graph: &WeightedGraph,
    result: &ThresholdResult,
    output_dir: &str,
) -> Result<()> {
    log::info!(
        "Generating visualizations for {} communities",
        result.communities.len()
    );

    let viz_dir = Path::new(output_dir).join("visualizations");
    fs::create_dir_all(&viz_dir)?;

    generate_graphml(graph, result, &viz_dir)?;
    generate_node_table(graph, result, &viz_dir)?;
    generate_html_report(graph, result, &viz_dir)?;

    log::info!("Visualizations generated successfully");

    Ok(())
}

/// Map each node index to the id of the community containing it
fn community_of_nodes(graph: &WeightedGraph, result: &ThresholdResult) -> Vec<u32> {
    let mut assignment = vec![0u32; graph.node_count()];
    for community in &result.communities {
        for &node in &community.members {
            assignment[node as usize] = community.id;
        }
    }
    assignment
}

/// Write the whole weighted graph as GraphML with community attributes
fn generate_graphml(
    graph: &WeightedGraph,
    result: &ThresholdResult,
    viz_dir: &Path,
) -> Result<()> {
    log::info!("Generating GraphML network file");

    let file_path = viz_dir.join("type_graph.graphml");
    let mut file = File::create(file_path)?;

    let assignment = community_of_nodes(graph, result);

    writeln!(file, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(file, "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">")?;
    writeln!(file, "  <key id=\"label\" for=\"node\" attr.name=\"label\" attr.type=\"string\"/>")?;
    writeln!(file, "  <key id=\"community\" for=\"node\" attr.name=\"community\" attr.type=\"int\"/>")?;
    writeln!(file, "  <key id=\"weight\" for=\"edge\" attr.name=\"weight\" attr.type=\"double\"/>")?;
    writeln!(file, "  <graph id=\"G\" edgedefault=\"undirected\">")?;

    for node in 0..graph.node_count() as u32 {
        writeln!(file, "    <node id=\"n{}\">", node)?;
        writeln!(file, "      <data key=\"label\">{}</data>", graph.label(node))?;
        writeln!(
            file,
            "      <data key=\"community\">{}</data>",
            assignment[node as usize]
        )?;
        writeln!(file, "    </node>")?;
    }

    for (edge_id, edge) in graph.edges.iter().enumerate() {
        writeln!(
            file,
            "    <edge id=\"e{}\" source=\"n{}\" target=\"n{}\">",
            edge_id, edge.source, edge.target
        )?;
        writeln!(file, "      <data key=\"weight\">{:.6}</data>", edge.weight)?;
        writeln!(file, "    </edge>")?;
    }

    writeln!(file, "  </graph>")?;
    writeln!(file, "</graphml>")?;

    Ok(())
}

/// Write a CSV of nodes with their community assignments
fn generate_node_table(
    graph: &WeightedGraph,
    result: &ThresholdResult,
    viz_dir: &Path,
) -> Result<()> {
    log::info!("Generating node table");

    let nodes_file_path = viz_dir.join("nodes.csv");
    let mut nodes_file = File::create(nodes_file_path)?;

    writeln!(nodes_file, "id,label,community_id")?;
    let assignment = community_of_nodes(graph, result);
    for node in 0..graph.node_count() as u32 {
        writeln!(
            nodes_file,
            "{},{},{}",
            node,
            graph.label(node),
            assignment[node as usize]
        )?;
    }

    Ok(())
}

/// Write a static HTML report summarizing the partition
fn generate_html_report(
    graph: &WeightedGraph,
    result: &ThresholdResult,
    viz_dir: &Path,
) -> Result<()> {
    log::info!("Generating HTML report");

    let index_path = viz_dir.join("index.html");
    let mut index_file = File::create(index_path)?;

    writeln!(index_file, "<!DOCTYPE html>")?;
    writeln!(index_file, "<html lang=\"en\">")?;
    writeln!(index_file, "<head>")?;
    writeln!(index_file, "  <meta charset=\"UTF-8\">")?;
    writeln!(index_file, "  <title>Object Type Community Analysis</title>")?;
    writeln!(index_file, "  <style>")?;
    writeln!(index_file, "    body {{ font-family: Arial, sans-serif; margin: 20px; }}")?;
    writeln!(index_file, "    h1, h2 {{ color: #333; }}")?;
    writeln!(index_file, "    .community-list {{ display: flex; flex-wrap: wrap; }}")?;
    writeln!(index_file, "    .community-card {{ border: 1px solid #ddd; margin: 10px; padding: 15px; border-radius: 5px; width: 300px; }}")?;
    writeln!(index_file, "    .community-card h3 {{ margin-top: 0; }}")?;
    writeln!(index_file, "    .stats {{ margin-top: 20px; background-color: #f9f9f9; padding: 15px; border-radius: 5px; }}")?;
    writeln!(index_file, "  </style>")?;
    writeln!(index_file, "</head>")?;
    writeln!(index_file, "<body>")?;
    writeln!(index_file, "  <h1>Object Type Community Analysis</h1>")?;

    writeln!(index_file, "  <div class=\"stats\">")?;
    writeln!(index_file, "    <h2>Summary</h2>")?;
    writeln!(index_file, "    <p>Object Types: {}</p>", graph.node_count())?;
    writeln!(index_file, "    <p>Edges: {}</p>", graph.edge_count())?;
    writeln!(index_file, "    <p>Selected Threshold: {:.2}</p>", result.threshold)?;
    writeln!(
        index_file,
        "    <p>Average Conductance: {:.4}</p>",
        result.average_conductance
    )?;
    writeln!(index_file, "    <p>Communities: {}</p>", result.communities.len())?;
    writeln!(index_file, "  </div>")?;

    writeln!(index_file, "  <h2>Communities</h2>")?;
    writeln!(index_file, "  <div class=\"community-list\">")?;

    for community in &result.communities {
        let members: Vec<&str> = community
            .members
            .iter()
            .map(|&node| graph.label(node))
            .collect();

        writeln!(index_file, "    <div class=\"community-card\">")?;
        writeln!(index_file, "      <h3>Group {}</h3>", community.id + 1)?;
        writeln!(index_file, "      <p>Size: {} types</p>", community.size)?;
        writeln!(index_file, "      <p>Members: {}</p>", members.join(", "))?;
        writeln!(index_file, "    </div>")?;
    }

    writeln!(index_file, "  </div>")?;
    writeln!(index_file, "</body>")?;
    writeln!(index_file, "</html>")?;

    Ok(())
}
