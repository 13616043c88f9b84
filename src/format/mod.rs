//! JSON interchange format for one company's dataset document.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{GraphDataset, ValidationMode};
use crate::registry::CompanyEntry;
use crate::types::{CompanyMetadata, GraphElement, GraphResult};

/// One company's dataset as it travels on disk: the metadata record plus
/// the flat element sequence. Deserializing rejects malformed elements
/// (missing fields, unknown `group`) before any dataset is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDocument {
    /// Display metadata.
    pub metadata: CompanyMetadata,
    /// Nodes and edges in curation order.
    pub elements: Vec<GraphElement>,
}

impl DatasetDocument {
    /// Parse a document from a JSON string.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from a file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to a file as pretty-printed JSON.
    pub fn write_to_file(&self, path: &Path) -> GraphResult<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    /// Validate the elements and produce a registry entry.
    pub fn into_entry(self, mode: ValidationMode) -> GraphResult<CompanyEntry> {
        let dataset = GraphDataset::load_with(self.elements, mode)?;
        Ok(CompanyEntry {
            metadata: self.metadata,
            dataset,
        })
    }
}
