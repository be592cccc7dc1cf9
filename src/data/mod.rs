//! Event log access and pairwise relation extraction

pub mod ocel;
pub mod pairs;
pub mod relations;
