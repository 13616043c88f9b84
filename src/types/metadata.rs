//! Per-company display metadata — headline figures for the dashboard.
//!
//! This record is display-only. Nothing here is derived from the graph and
//! no invariant links it to one, although `segments[].id` conventionally
//! matches a `segment` node id in the company's dataset.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One headline metric: a value, its change, and the direction of the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetric {
    /// Formatted value, e.g. `"$155.7B"`.
    pub value: String,
    /// Formatted change, e.g. `"+9% YoY"`.
    pub change: String,
    /// Whether the change is good news (drives green/red styling).
    pub is_positive: bool,
}

/// Revenue summary for one reporting segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSummary {
    /// Conventionally matches a `segment` node id in the dataset.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Share of total revenue, in percent.
    pub percentage: f64,
    /// Formatted revenue figure.
    pub revenue: String,
}

/// Descriptor for one UI section of the company view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// Conventionally matches a `main_category` node id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Emoji or icon identifier.
    pub icon: String,
    /// Ordering priority, lower renders first.
    pub priority: u32,
}

/// Headline financial and display metadata for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMetadata {
    /// Full legal name, e.g. `"Amazon.com, Inc."`.
    pub company_name: String,
    /// Exchange ticker symbol, e.g. `"AMZN"`. Registry key.
    pub ticker: String,
    /// Listing exchange, e.g. `"NASDAQ"`.
    pub exchange: String,
    /// Formatted market capitalization.
    pub market_cap: String,
    /// Latest reported quarter, e.g. `"Q1 2025"`.
    pub latest_quarter: String,
    /// Headline metrics keyed by metric name. The key set varies per
    /// company; insertion order is the curated display order.
    pub key_metrics: IndexMap<String, KeyMetric>,
    /// Revenue split across reporting segments.
    pub segments: Vec<SegmentSummary>,
    /// UI sections in display order.
    pub sections: Vec<SectionDescriptor>,
}
