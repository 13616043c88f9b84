//! Process-wide company registry — populated once, read-only afterwards.

use std::collections::BTreeMap;

use crate::graph::GraphDataset;
use crate::types::{CompanyMetadata, GraphError, GraphResult};

/// One registered company: display metadata plus its validated dataset.
#[derive(Debug, Clone)]
pub struct CompanyEntry {
    /// Headline display metadata.
    pub metadata: CompanyMetadata,
    /// The company's knowledge graph.
    pub dataset: GraphDataset,
}

/// Immutable mapping from ticker symbol to [`CompanyEntry`]. Built once
/// through [`RegistryBuilder`], then shared freely — there is no writer at
/// runtime. Iteration order is sorted by ticker, so output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct CompanyRegistry {
    companies: BTreeMap<String, CompanyEntry>,
}

impl CompanyRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up a company by ticker. Exact, case-sensitive match.
    pub fn get(&self, ticker: &str) -> Option<&CompanyEntry> {
        self.companies.get(ticker)
    }

    /// Like [`get`](Self::get) but surfaces the miss as an error.
    pub fn require(&self, ticker: &str) -> GraphResult<&CompanyEntry> {
        self.get(ticker)
            .ok_or_else(|| GraphError::UnknownTicker(ticker.to_string()))
    }

    /// All tickers, sorted.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.companies.keys().map(String::as_str)
    }

    /// All entries, sorted by ticker.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompanyEntry)> {
        self.companies
            .iter()
            .map(|(ticker, entry)| (ticker.as_str(), entry))
    }

    /// Number of registered companies.
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

/// Builder for [`CompanyRegistry`]. The ticker key comes from each entry's
/// metadata; registering the same ticker twice is an error.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    companies: BTreeMap<String, CompanyEntry>,
}

impl RegistryBuilder {
    /// Register a company under its metadata ticker.
    pub fn register(
        mut self,
        metadata: CompanyMetadata,
        dataset: GraphDataset,
    ) -> GraphResult<Self> {
        let ticker = metadata.ticker.clone();
        if ticker.is_empty() {
            return Err(GraphError::EmptyTicker(metadata.company_name.clone()));
        }
        if self.companies.contains_key(&ticker) {
            return Err(GraphError::DuplicateTicker(ticker));
        }
        self.companies.insert(ticker, CompanyEntry { metadata, dataset });
        Ok(self)
    }

    /// Finish building.
    pub fn build(self) -> CompanyRegistry {
        CompanyRegistry {
            companies: self.companies,
        }
    }
}
