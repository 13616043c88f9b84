//! All data types for the ticker-graph library.

pub mod element;
pub mod error;
pub mod metadata;

pub use element::{EdgeData, GraphElement, NodeData, NodeKind, SwotFactor, SWOT_PREFIX};
pub use error::{GraphError, GraphResult};
pub use metadata::{CompanyMetadata, KeyMetric, SectionDescriptor, SegmentSummary};
