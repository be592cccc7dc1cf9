//! Weighted object-type graph representation and construction

pub mod builder;
pub mod normalize;
pub mod weighted;

pub use builder::build_weighted_graph;
pub use weighted::WeightedGraph;
