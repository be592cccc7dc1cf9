//! Core library functions for the object community analyzer

pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod cluster;
pub mod storage;
pub mod viz;

pub use anyhow::{Result, anyhow};
