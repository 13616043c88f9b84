//! Registry construction and lookup.

use indexmap::IndexMap;
use ticker_graph::{
    CompanyMetadata, CompanyRegistry, GraphDataset, GraphElement, GraphError,
};

fn metadata(name: &str, ticker: &str) -> CompanyMetadata {
    CompanyMetadata {
        company_name: name.to_string(),
        ticker: ticker.to_string(),
        exchange: "NYSE".to_string(),
        market_cap: "$1.0B".to_string(),
        latest_quarter: "Q2 2025".to_string(),
        key_metrics: IndexMap::new(),
        segments: Vec::new(),
        sections: Vec::new(),
    }
}

fn dataset(company_id: &str) -> GraphDataset {
    GraphDataset::load(vec![GraphElement::node(company_id, company_id, "company")]).unwrap()
}

#[test]
fn lookup_by_ticker() {
    let registry = CompanyRegistry::builder()
        .register(metadata("Acme Corp", "ACME"), dataset("acme"))
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
    assert_eq!(registry.get("ACME").unwrap().metadata.company_name, "Acme Corp");
    assert!(registry.get("acme").is_none()); // case-sensitive
    assert!(registry.get("ZZZZ").is_none());
}

#[test]
fn require_surfaces_unknown_ticker() {
    let registry = CompanyRegistry::builder().build();
    match registry.require("ZZZZ").unwrap_err() {
        GraphError::UnknownTicker(t) => assert_eq!(t, "ZZZZ"),
        e => panic!("expected UnknownTicker, got {:?}", e),
    }
}

#[test]
fn duplicate_ticker_rejected() {
    let result = CompanyRegistry::builder()
        .register(metadata("Acme Corp", "ACME"), dataset("acme"))
        .unwrap()
        .register(metadata("Acme Clone", "ACME"), dataset("clone"));
    match result.unwrap_err() {
        GraphError::DuplicateTicker(t) => assert_eq!(t, "ACME"),
        e => panic!("expected DuplicateTicker, got {:?}", e),
    }
}

#[test]
fn empty_ticker_rejected() {
    let result = CompanyRegistry::builder().register(metadata("Acme Corp", ""), dataset("acme"));
    match result.unwrap_err() {
        GraphError::EmptyTicker(name) => assert_eq!(name, "Acme Corp"),
        e => panic!("expected EmptyTicker, got {:?}", e),
    }
}

#[test]
fn iteration_is_sorted_by_ticker() {
    let registry = CompanyRegistry::builder()
        .register(metadata("Zeta", "ZETA"), dataset("zeta"))
        .unwrap()
        .register(metadata("Alpha", "ALPH"), dataset("alpha"))
        .unwrap()
        .register(metadata("Mid", "MIDC"), dataset("mid"))
        .unwrap()
        .build();

    let tickers: Vec<_> = registry.tickers().collect();
    assert_eq!(tickers, ["ALPH", "MIDC", "ZETA"]);
    let names: Vec<_> = registry
        .iter()
        .map(|(_, e)| e.metadata.company_name.as_str())
        .collect();
    assert_eq!(names, ["Alpha", "Mid", "Zeta"]);
}
