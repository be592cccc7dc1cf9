//! Graph construction from normalized pair metrics

use crate::graph::normalize::min_max_normalize;
use crate::graph::weighted::{TypeEdge, WeightedGraph};
use std::collections::HashMap;

/// Builder for incrementally constructing a WeightedGraph
pub struct GraphBuilder {
    /// Mapping from object type names to node indices
    id_to_index: HashMap<String, u32>,

    /// Object type names in node-index order
    node_labels: Vec<String>,

    /// Adjacency lists for each node
    adjacency: Vec<Vec<(u32, f64)>>,

    /// Flat edge table
    edges: Vec<TypeEdge>,
}

impl GraphBuilder {
    /// Create an empty graph builder
    pub fn new() -> Self {
        Self {
            id_to_index: HashMap::new(),
            node_labels: Vec::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Get or create the node index for the given object type
    pub fn get_or_create_node(&mut self, label: &str) -> u32 {
        if let Some(&idx) = self.id_to_index.get(label) {
            return idx;
        }

        let idx = self.node_labels.len() as u32;
        self.id_to_index.insert(label.to_string(), idx);
        self.node_labels.push(label.to_string());
        self.adjacency.push(Vec::new());

        idx
    }

    /// Add an undirected edge between two object types
    pub fn add_edge(
        &mut self,
        type_a: &str,
        type_b: &str,
        norm_relation: f64,
        norm_event_relation: f64,
        weight: f64,
    ) {
        let src = self.get_or_create_node(type_a);
        let dst = self.get_or_create_node(type_b);

        self.adjacency[src as usize].push((dst, weight));
        self.adjacency[dst as usize].push((src, weight));

        self.edges.push(TypeEdge {
            source: src,
            target: dst,
            norm_relation,
            norm_event_relation,
            weight,
        });
    }

    /// Finalize the graph
    pub fn build(self) -> WeightedGraph {
        WeightedGraph {
            node_labels: self.node_labels,
            adjacency: self.adjacency,
            edges: self.edges,
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Combine the structural and event co-participation metrics into a single
/// weighted graph over object types.
///
/// Both metric slices must be index-aligned with `pairs`. Each metric is
/// min-max normalized independently, then combined per pair as
/// `alpha * norm_structural + (1 - alpha) * norm_coparticipation`. Pairs
/// whose combined weight is 0 contribute no edge, and types without any
/// retained edge are absent from the graph.
///
/// `alpha` is expected in [0, 1]; callers validate it up front (the formula
/// itself is well-defined for any real alpha).
pub fn build_weighted_graph(
    pairs: &[(String, String)],
    structural: &[u64],
    coparticipation: &[u64],
    alpha: f64,
) -> WeightedGraph {
    let norm_structural = min_max_normalize(structural);
    let norm_coparticipation = min_max_normalize(coparticipation);

    let mut builder = GraphBuilder::new();
    for (i, (type_a, type_b)) in pairs.iter().enumerate() {
        let w1 = norm_structural[i];
        let w2 = norm_coparticipation[i];
        let combined = alpha * w1 + (1.0 - alpha) * w2;
        if combined > 0.0 {
            builder.add_edge(type_a, type_b, w1, w2, combined);
        }
    }

    let graph = builder.build();
    log::debug!(
        "Built weighted graph with {} nodes and {} edges from {} pairs",
        graph.node_count(),
        graph.edge_count(),
        pairs.len()
    );

    graph
}
