//! ticker-graph — curated company knowledge graphs with a typed query layer.
//!
//! Each company (Amazon, Apple, Google, Meta, Microsoft, NVIDIA, Tesla) is
//! described by an immutable dataset of typed nodes and edges plus a
//! display-metadata record. Datasets are validated once at construction;
//! every query afterwards is a pure, infallible linear scan.

pub mod builtin;
pub mod cli;
pub mod format;
pub mod graph;
pub mod registry;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::DatasetDocument;
pub use graph::{GraphDataset, GraphStats, ValidationMode};
pub use registry::{CompanyEntry, CompanyRegistry, RegistryBuilder};
pub use types::{
    CompanyMetadata, EdgeData, GraphElement, GraphError, GraphResult, KeyMetric, NodeData,
    NodeKind, SectionDescriptor, SegmentSummary, SwotFactor, SWOT_PREFIX,
};
