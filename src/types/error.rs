//! Error types for the ticker-graph library.

use thiserror::Error;

/// All errors that can occur in the ticker-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node was declared with an empty id.
    #[error("node at element position {0} has an empty id")]
    EmptyNodeId(usize),

    /// A node was declared with an empty label.
    #[error("node `{0}` has an empty label")]
    EmptyLabel(String),

    /// Two nodes in the same dataset share an id.
    #[error("duplicate node id `{0}`")]
    DuplicateNodeId(String),

    /// An edge was declared with an empty source or target.
    #[error("edge at element position {0} has an empty {1}")]
    EmptyEndpoint(usize, &'static str),

    /// An edge references a node id that does not exist in the dataset.
    #[error("edge `{edge}` references unknown node `{missing}`")]
    DanglingEdge {
        /// `source -> target` description of the offending edge.
        edge: String,
        /// The id that failed to resolve.
        missing: String,
    },

    /// Two edges in the same dataset share an explicit id (strict mode only).
    #[error("duplicate edge id `{0}`")]
    DuplicateEdgeId(String),

    /// Registry lookup for a ticker that was never registered.
    #[error("unknown company ticker `{0}`")]
    UnknownTicker(String),

    /// Two companies registered under the same ticker.
    #[error("duplicate company ticker `{0}`")]
    DuplicateTicker(String),

    /// A company was registered with an empty ticker.
    #[error("company `{0}` has an empty ticker")]
    EmptyTicker(String),

    /// Malformed dataset document (bad `group`, missing field, invalid JSON).
    #[error("malformed dataset document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for ticker-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
