//! The immutable dataset — validated element sequence plus the query API.

use std::collections::{HashMap, HashSet};

use crate::graph::GraphStats;
use crate::types::{EdgeData, GraphElement, GraphError, GraphResult, NodeData, NodeKind};

/// How thoroughly to validate a dataset at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Structural checks only. An edge endpoint that does not resolve to a
    /// node id is logged as a warning, not rejected — the curated source
    /// data was never verified against this and a viewer can render around
    /// a dangling edge.
    #[default]
    Lenient,
    /// Structural checks plus referential integrity: every edge endpoint
    /// must resolve, and explicit edge ids must be unique.
    Strict,
}

/// An immutable, ordered collection of graph elements for one company,
/// validated once at construction and read-only thereafter. Safe to share
/// across threads; every query is a pure linear scan.
#[derive(Debug, Clone)]
pub struct GraphDataset {
    elements: Vec<GraphElement>,
    /// node id -> position in `elements`.
    node_lookup: HashMap<String, usize>,
    node_count: usize,
    edge_count: usize,
}

impl GraphDataset {
    /// Construct with lenient validation (see [`ValidationMode::Lenient`]).
    pub fn load(elements: Vec<GraphElement>) -> GraphResult<Self> {
        Self::load_with(elements, ValidationMode::Lenient)
    }

    /// Construct with strict validation (see [`ValidationMode::Strict`]).
    pub fn load_strict(elements: Vec<GraphElement>) -> GraphResult<Self> {
        Self::load_with(elements, ValidationMode::Strict)
    }

    /// Construct with an explicit validation mode. Validation failures are
    /// fatal for the whole dataset; queries never fail afterwards.
    pub fn load_with(elements: Vec<GraphElement>, mode: ValidationMode) -> GraphResult<Self> {
        let mut node_lookup = HashMap::new();
        let mut node_count = 0;
        let mut edge_count = 0;

        for (pos, element) in elements.iter().enumerate() {
            match element {
                GraphElement::Node(node) => {
                    if node.id.is_empty() {
                        return Err(GraphError::EmptyNodeId(pos));
                    }
                    if node.label.is_empty() {
                        return Err(GraphError::EmptyLabel(node.id.clone()));
                    }
                    if node_lookup.insert(node.id.clone(), pos).is_some() {
                        return Err(GraphError::DuplicateNodeId(node.id.clone()));
                    }
                    node_count += 1;
                }
                GraphElement::Edge(edge) => {
                    if edge.source.is_empty() {
                        return Err(GraphError::EmptyEndpoint(pos, "source"));
                    }
                    if edge.target.is_empty() {
                        return Err(GraphError::EmptyEndpoint(pos, "target"));
                    }
                    edge_count += 1;
                }
            }
        }

        let mut seen_edge_ids = HashSet::new();
        for edge in elements.iter().filter_map(GraphElement::as_edge) {
            for endpoint in [&edge.source, &edge.target] {
                if !node_lookup.contains_key(endpoint) {
                    match mode {
                        ValidationMode::Strict => {
                            return Err(GraphError::DanglingEdge {
                                edge: edge.describe(),
                                missing: endpoint.clone(),
                            });
                        }
                        ValidationMode::Lenient => {
                            log::warn!(
                                "edge `{}` references unknown node `{}`",
                                edge.describe(),
                                endpoint
                            );
                        }
                    }
                }
            }
            if mode == ValidationMode::Strict {
                if let Some(id) = &edge.id {
                    if !seen_edge_ids.insert(id.as_str()) {
                        return Err(GraphError::DuplicateEdgeId(id.clone()));
                    }
                }
            }
        }

        Ok(Self {
            elements,
            node_lookup,
            node_count,
            edge_count,
        })
    }

    /// The full element sequence, in insertion order.
    pub fn elements(&self) -> &[GraphElement] {
        &self.elements
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeData> {
        self.elements.iter().filter_map(GraphElement::as_node)
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeData> {
        self.elements.iter().filter_map(GraphElement::as_edge)
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&NodeData> {
        self.node_lookup
            .get(id)
            .and_then(|&pos| self.elements[pos].as_node())
    }

    /// Number of node elements.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edge elements.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All nodes whose type tag equals `tag` exactly (case-sensitive), in
    /// insertion order. An unknown tag is a legitimate empty result, not an
    /// error. Untyped nodes never match.
    pub fn nodes_by_type(&self, tag: &str) -> Vec<&NodeData> {
        self.nodes_by_kind(&NodeKind::from_tag(tag))
    }

    /// All nodes of the given kind, in insertion order.
    pub fn nodes_by_kind(&self, kind: &NodeKind) -> Vec<&NodeData> {
        self.nodes()
            .filter(|node| node.kind.as_ref() == Some(kind))
            .collect()
    }

    /// Nodes tagged `main_category`.
    pub fn main_sections(&self) -> Vec<&NodeData> {
        self.nodes_by_kind(&NodeKind::MainCategory)
    }

    /// Nodes tagged `segment`.
    pub fn business_segments(&self) -> Vec<&NodeData> {
        self.nodes_by_kind(&NodeKind::Segment)
    }

    /// Nodes tagged `competitor`.
    pub fn competitors(&self) -> Vec<&NodeData> {
        self.nodes_by_kind(&NodeKind::Competitor)
    }

    /// Nodes whose tag carries the literal `swot_` prefix. Covers all four
    /// factors (and any future `swot_*` tag) uniformly; untyped nodes are
    /// excluded without error.
    pub fn swot_elements(&self) -> Vec<&NodeData> {
        self.nodes()
            .filter(|node| node.kind.as_ref().is_some_and(NodeKind::is_swot))
            .collect()
    }

    /// Aggregate counts over the whole dataset. One linear scan, no side
    /// effects, stable across repeated calls.
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            total_edges: self.edge_count,
            ..GraphStats::default()
        };
        for node in self.nodes() {
            stats.total_nodes += 1;
            match &node.kind {
                Some(NodeKind::MainCategory) => stats.main_sections += 1,
                Some(NodeKind::Segment) => stats.business_segments += 1,
                Some(NodeKind::Competitor) => stats.competitors += 1,
                Some(NodeKind::Swot(_)) => stats.swot_elements += 1,
                _ => {}
            }
        }
        stats
    }
}
