//! The immutable dataset and its query layer.

pub mod dataset;
pub mod stats;

pub use dataset::{GraphDataset, ValidationMode};
pub use stats::GraphStats;
