//! Weighted object-type graph representation

use serde::{Deserialize, Serialize};

/// An undirected edge between two object types, carrying the normalized
/// metrics it was combined from alongside the combined weight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeEdge {
    /// Node index of the first endpoint
    pub source: u32,

    /// Node index of the second endpoint
    pub target: u32,

    /// Normalized structural relationship metric
    pub norm_relation: f64,

    /// Normalized event co-participation metric
    pub norm_event_relation: f64,

    /// Combined edge weight, `alpha * norm_relation + (1 - alpha) * norm_event_relation`
    pub weight: f64,
}

/// Undirected weighted graph over object types.
///
/// Nodes are the object types that ended up with at least one retained edge;
/// types whose every pair combined to weight 0 never appear. The adjacency
/// lists mirror the edge table in both directions, so every graph node has at
/// least one neighbor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedGraph {
    /// Object type names, indexed by node id
    pub node_labels: Vec<String>,

    /// Adjacency lists: node index -> (neighbor index, edge weight)
    pub adjacency: Vec<Vec<(u32, f64)>>,

    /// Flat edge table, one entry per undirected edge
    pub edges: Vec<TypeEdge>,
}

impl WeightedGraph {
    /// Number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.node_labels.len()
    }

    /// Number of undirected edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Object type name for a node index
    pub fn label(&self, node: u32) -> &str {
        &self.node_labels[node as usize]
    }

    /// Incident edges of a node as (neighbor, weight) pairs
    pub fn neighbors(&self, node: u32) -> &[(u32, f64)] {
        &self.adjacency[node as usize]
    }

    /// Strongest incident edge weight of a node.
    ///
    /// Every node carries at least one edge, so the maximum exists; an
    /// empty adjacency list would be a construction bug and yields 0.
    pub fn local_cap(&self, node: u32) -> f64 {
        self.adjacency[node as usize]
            .iter()
            .map(|&(_, w)| w)
            .fold(0.0, f64::max)
    }

    /// Weighted degree of a node (sum of incident edge weights)
    pub fn weighted_degree(&self, node: u32) -> f64 {
        self.adjacency[node as usize].iter().map(|&(_, w)| w).sum()
    }

    /// Total volume of the graph: the sum of all weighted degrees, i.e.
    /// twice the total edge weight
    pub fn total_volume(&self) -> f64 {
        self.edges.iter().map(|e| 2.0 * e.weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn sample_graph() -> WeightedGraph {
        let mut builder = GraphBuilder::new();
        builder.add_edge("Order", "Item", 1.0, 0.5, 0.75);
        builder.add_edge("Item", "Package", 0.2, 0.2, 0.2);
        builder.build()
    }

    #[test]
    fn adjacency_mirrors_edges() {
        let graph = sample_graph();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        let item = 1u32;
        assert_eq!(graph.label(item), "Item");
        assert_eq!(graph.neighbors(item).len(), 2);
    }

    #[test]
    fn local_cap_is_strongest_incident_edge() {
        let graph = sample_graph();
        assert_eq!(graph.local_cap(0), 0.75);
        assert_eq!(graph.local_cap(1), 0.75);
        assert_eq!(graph.local_cap(2), 0.2);
    }

    #[test]
    fn total_volume_is_twice_edge_weight() {
        let graph = sample_graph();
        assert!((graph.total_volume() - 2.0 * 0.95).abs() < 1e-12);
        assert!((graph.weighted_degree(1) - 0.95).abs() < 1e-12);
    }
}
