//! Community detection over the weighted object-type graph

pub mod detection;
pub mod metrics;
pub mod optimizer;

use serde::{Deserialize, Serialize};

/// A group of object types that are pairwise reachable through qualifying
/// edges at some threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    /// Position of this community in the partition's reported order
    pub id: u32,

    /// Members of this community (node indices, ascending)
    pub members: Vec<u32>,

    /// Size of the community
    pub size: usize,
}

/// Outcome of evaluating one threshold: the partition it induces and the
/// average conductance over its multi-node communities
#[derive(Debug, Clone)]
pub struct ThresholdResult {
    /// The threshold that produced this partition
    pub threshold: f64,

    /// Mean conductance over communities with more than one member
    pub average_conductance: f64,

    /// The full partition of the graph's nodes
    pub communities: Vec<Community>,
}
