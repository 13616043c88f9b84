//! The seven curated company datasets, embedded as JSON.
//!
//! Built-in data goes through the same validated path as external
//! documents. The registry is constructed explicitly and handed to the
//! caller rather than held in a mutable global; construct it once at
//! startup and share it.

use crate::format::DatasetDocument;
use crate::graph::ValidationMode;
use crate::registry::{CompanyRegistry, RegistryBuilder};
use crate::types::GraphResult;

/// (name, embedded JSON) for every curated company, alphabetical.
const DOCUMENTS: &[(&str, &str)] = &[
    ("amazon", include_str!("../data/amazon.json")),
    ("apple", include_str!("../data/apple.json")),
    ("google", include_str!("../data/google.json")),
    ("meta", include_str!("../data/meta.json")),
    ("microsoft", include_str!("../data/microsoft.json")),
    ("nvidia", include_str!("../data/nvidia.json")),
    ("tesla", include_str!("../data/tesla.json")),
];

/// Parse one embedded document by its lowercase company name.
pub fn document(name: &str) -> Option<GraphResult<DatasetDocument>> {
    DOCUMENTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, json)| DatasetDocument::from_json_str(json))
}

/// Names of all embedded documents.
pub fn names() -> impl Iterator<Item = &'static str> {
    DOCUMENTS.iter().map(|(name, _)| *name)
}

/// Load every curated dataset into a registry, strictly validated. The
/// curated data is known to be referentially intact, so strict mode costs
/// nothing and catches regressions when datasets are edited.
pub fn load_registry() -> GraphResult<CompanyRegistry> {
    let mut builder = RegistryBuilder::default();
    for (_, json) in DOCUMENTS {
        let entry = DatasetDocument::from_json_str(json)?.into_entry(ValidationMode::Strict)?;
        builder = builder.register(entry.metadata, entry.dataset)?;
    }
    Ok(builder.build())
}
