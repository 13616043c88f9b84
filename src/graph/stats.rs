//! Aggregate counts over one dataset.

use serde::Serialize;

/// Counts of elements and of the recognized node categories.
///
/// Field names serialize in camelCase to match the shape the dashboard
/// consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    /// All node elements, regardless of type tag.
    pub total_nodes: usize,
    /// All edge elements.
    pub total_edges: usize,
    /// Nodes tagged `main_category`.
    pub main_sections: usize,
    /// Nodes tagged `segment`.
    pub business_segments: usize,
    /// Nodes tagged `competitor`.
    pub competitors: usize,
    /// Nodes whose tag carries the `swot_` prefix.
    pub swot_elements: usize,
}
