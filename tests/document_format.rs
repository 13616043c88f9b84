//! Dataset document JSON round-trips and file IO.

use ticker_graph::{builtin, DatasetDocument, GraphElement, GraphError, ValidationMode};

fn sample_document() -> DatasetDocument {
    let json = r#"{
        "metadata": {
            "companyName": "Acme Corp",
            "ticker": "ACME",
            "exchange": "NYSE",
            "marketCap": "$1.0B",
            "latestQuarter": "Q2 2025",
            "keyMetrics": {
                "revenue": { "value": "$100M", "change": "+5% YoY", "isPositive": true },
                "eps": { "value": "$0.10", "change": "-2% YoY", "isPositive": false }
            },
            "segments": [
                { "id": "widgets_segment", "name": "Widgets", "percentage": 80, "revenue": "$80M" },
                { "id": "gadgets_segment", "name": "Gadgets", "percentage": 20, "revenue": "$20M" }
            ],
            "sections": [
                { "id": "company_info", "name": "Business Model", "icon": "chart", "priority": 1 }
            ]
        },
        "elements": [
            { "group": "nodes", "data": { "id": "acme", "label": "Acme Corp", "type": "company" } },
            { "group": "nodes", "data": { "id": "widgets_segment", "label": "Widgets", "type": "segment" } },
            { "group": "edges", "data": { "source": "acme", "target": "widgets_segment", "label": "" } }
        ]
    }"#;
    DatasetDocument::from_json_str(json).unwrap()
}

#[test]
fn parse_sample_document() {
    let doc = sample_document();
    assert_eq!(doc.metadata.ticker, "ACME");
    assert_eq!(doc.metadata.key_metrics.len(), 2);
    assert_eq!(doc.elements.len(), 3);
}

#[test]
fn key_metrics_preserve_curation_order() {
    let doc = sample_document();
    let names: Vec<_> = doc.metadata.key_metrics.keys().cloned().collect();
    assert_eq!(names, ["revenue", "eps"]);
}

#[test]
fn round_trip_preserves_document() {
    let doc = sample_document();
    let json = doc.to_json_pretty().unwrap();
    let back = DatasetDocument::from_json_str(&json).unwrap();
    assert_eq!(doc, back);
}

#[test]
fn file_round_trip() {
    let doc = sample_document();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("acme.json");
    doc.write_to_file(&path).unwrap();
    let back = DatasetDocument::read_from_file(&path).unwrap();
    assert_eq!(doc, back);
}

#[test]
fn missing_file_is_io_error() {
    let result = DatasetDocument::read_from_file(std::path::Path::new("/no/such/file.json"));
    assert!(matches!(result.unwrap_err(), GraphError::Io(_)));
}

#[test]
fn invalid_json_is_malformed() {
    let result = DatasetDocument::from_json_str("not json");
    assert!(matches!(result.unwrap_err(), GraphError::Malformed(_)));
}

#[test]
fn into_entry_validates() {
    let doc = sample_document();
    let entry = doc.into_entry(ValidationMode::Strict).unwrap();
    assert_eq!(entry.dataset.node_count(), 2);
    assert_eq!(entry.dataset.edge_count(), 1);

    let mut doc = sample_document();
    doc.elements.push(GraphElement::edge("acme", "ghost"));
    let result = doc.into_entry(ValidationMode::Strict);
    assert!(matches!(result.unwrap_err(), GraphError::DanglingEdge { .. }));
}

#[test]
fn embedded_documents_round_trip() {
    let doc = builtin::document("nvidia").unwrap().unwrap();
    let json = doc.to_json_pretty().unwrap();
    let back = DatasetDocument::from_json_str(&json).unwrap();
    assert_eq!(doc, back);
    assert_eq!(doc.metadata.ticker, "NVDA");
}
