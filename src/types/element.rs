//! Graph elements — the tagged node/edge union every dataset is made of.

use serde::{Deserialize, Serialize};

/// Literal prefix that marks a type tag as a SWOT factor.
pub const SWOT_PREFIX: &str = "swot_";

/// The type tag of a node. Core curation conventions get their own variant;
/// anything else stays representable through `Other` so new ad hoc tags can
/// appear in data without code changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    /// The central company node.
    Company,
    /// A top-level section of the graph.
    MainCategory,
    /// A mid-level grouping under a main category.
    Category,
    /// A leaf-level grouping under a category.
    Subcategory,
    /// A reporting business segment (e.g. AWS, iPhone).
    Segment,
    /// A competitor company.
    Competitor,
    /// Any tag with the literal `swot_` prefix; holds the suffix after it.
    Swot(String),
    /// Any other tag, preserved verbatim.
    Other(String),
}

impl NodeKind {
    /// Parse a string tag. Matching is exact and case-sensitive; unknown
    /// tags land in `Other`, and anything prefixed `swot_` in `Swot`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "company" => Self::Company,
            "main_category" => Self::MainCategory,
            "category" => Self::Category,
            "subcategory" => Self::Subcategory,
            "segment" => Self::Segment,
            "competitor" => Self::Competitor,
            _ => match tag.strip_prefix(SWOT_PREFIX) {
                Some(suffix) => Self::Swot(suffix.to_string()),
                None => Self::Other(tag.to_string()),
            },
        }
    }

    /// The string tag this kind round-trips to.
    pub fn tag(&self) -> String {
        match self {
            Self::Company => "company".to_string(),
            Self::MainCategory => "main_category".to_string(),
            Self::Category => "category".to_string(),
            Self::Subcategory => "subcategory".to_string(),
            Self::Segment => "segment".to_string(),
            Self::Competitor => "competitor".to_string(),
            Self::Swot(suffix) => format!("{SWOT_PREFIX}{suffix}"),
            Self::Other(tag) => tag.clone(),
        }
    }

    /// Whether this tag carries the literal `swot_` prefix.
    pub fn is_swot(&self) -> bool {
        matches!(self, Self::Swot(_))
    }

    /// Classify a `swot_*` tag into one of the four conventional factors.
    /// Returns `None` for non-SWOT tags and unconventional suffixes.
    pub fn swot_factor(&self) -> Option<SwotFactor> {
        match self {
            Self::Swot(suffix) => SwotFactor::from_suffix(suffix),
            _ => None,
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.tag()
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// The four conventional SWOT factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SwotFactor {
    /// `swot_strength`
    Strength,
    /// `swot_weakness`
    Weakness,
    /// `swot_opportunity`
    Opportunity,
    /// `swot_threat`
    Threat,
}

impl SwotFactor {
    /// Parse the suffix after `swot_`.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "strength" => Some(Self::Strength),
            "weakness" => Some(Self::Weakness),
            "opportunity" => Some(Self::Opportunity),
            "threat" => Some(Self::Threat),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Weakness => "weakness",
            Self::Opportunity => "opportunity",
            Self::Threat => "threat",
        }
    }
}

/// Payload of a node element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    /// Unique within one dataset. Datasets are independent namespaces, so
    /// the same id may reappear in another company's graph.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Open-ended type tag. Nodes without a tag are legal and are simply
    /// never matched by type filters.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    /// Free-form descriptive prose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl NodeData {
    /// Create a node with a type tag.
    pub fn new(id: impl Into<String>, label: impl Into<String>, tag: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: Some(NodeKind::from_tag(tag)),
            text: None,
        }
    }

    /// Create a node without a type tag.
    pub fn untyped(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: None,
            text: None,
        }
    }

    /// Attach descriptive prose.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Payload of an edge element. Directed `source -> target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    /// Optional identifier. Some curated datasets assign one per edge,
    /// others omit it entirely; nothing depends on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Id of the node this edge leaves from.
    pub source: String,
    /// Id of the node this edge points to.
    pub target: String,
    /// Optional relationship label (e.g. "drives growth").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl EdgeData {
    /// Create an unlabeled edge without an id.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: None,
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }

    /// Set the edge id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the relationship label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// `source -> target` description for error messages.
    pub fn describe(&self) -> String {
        format!("{} -> {}", self.source, self.target)
    }
}

/// One element of a dataset, discriminated by the `group` field in the
/// serialized form: `{"group":"nodes","data":{...}}`. Any other `group`
/// value fails deserialization outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "group", content = "data")]
pub enum GraphElement {
    /// A graph vertex.
    #[serde(rename = "nodes")]
    Node(NodeData),
    /// A directed relationship between two node ids.
    #[serde(rename = "edges")]
    Edge(EdgeData),
}

impl GraphElement {
    /// Shorthand for a typed node element.
    pub fn node(id: impl Into<String>, label: impl Into<String>, tag: &str) -> Self {
        Self::Node(NodeData::new(id, label, tag))
    }

    /// Shorthand for an unlabeled edge element.
    pub fn edge(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Edge(EdgeData::new(source, target))
    }

    /// The node payload, if this is a node.
    pub fn as_node(&self) -> Option<&NodeData> {
        match self {
            Self::Node(data) => Some(data),
            Self::Edge(_) => None,
        }
    }

    /// The edge payload, if this is an edge.
    pub fn as_edge(&self) -> Option<&EdgeData> {
        match self {
            Self::Edge(data) => Some(data),
            Self::Node(_) => None,
        }
    }
}

impl From<NodeData> for GraphElement {
    fn from(data: NodeData) -> Self {
        Self::Node(data)
    }
}

impl From<EdgeData> for GraphElement {
    fn from(data: EdgeData) -> Self {
        Self::Edge(data)
    }
}
