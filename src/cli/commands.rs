//! CLI command implementations.

use std::path::Path;

use crate::format::DatasetDocument;
use crate::graph::ValidationMode;
use crate::registry::{CompanyEntry, CompanyRegistry};
use crate::types::{GraphResult, NodeData};

/// List every company in the registry.
pub fn cmd_list(registry: &CompanyRegistry, json: bool) -> GraphResult<()> {
    if json {
        let companies: Vec<_> = registry
            .iter()
            .map(|(ticker, entry)| {
                serde_json::json!({
                    "ticker": ticker,
                    "name": entry.metadata.company_name,
                    "exchange": entry.metadata.exchange,
                    "marketCap": entry.metadata.market_cap,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&companies)?);
    } else {
        for (ticker, entry) in registry.iter() {
            println!(
                "{:<6} {:<28} {:<8} {}",
                ticker,
                entry.metadata.company_name,
                entry.metadata.exchange,
                entry.metadata.market_cap
            );
        }
    }
    Ok(())
}

/// Display metadata headline plus graph stats for one company.
pub fn cmd_info(registry: &CompanyRegistry, ticker: &str, json: bool) -> GraphResult<()> {
    let entry = registry.require(ticker)?;
    let meta = &entry.metadata;
    let stats = entry.dataset.stats();

    if json {
        let info = serde_json::json!({
            "ticker": meta.ticker,
            "name": meta.company_name,
            "exchange": meta.exchange,
            "marketCap": meta.market_cap,
            "latestQuarter": meta.latest_quarter,
            "keyMetrics": meta.key_metrics,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{} ({}, {})", meta.company_name, meta.ticker, meta.exchange);
        println!("Market cap: {}", meta.market_cap);
        println!("Latest quarter: {}", meta.latest_quarter);
        println!("Key metrics:");
        for (name, metric) in &meta.key_metrics {
            println!("  {}: {} ({})", name, metric.value, metric.change);
        }
        print_stats_text(&stats);
    }
    Ok(())
}

/// Graph stats only.
pub fn cmd_stats(registry: &CompanyRegistry, ticker: &str, json: bool) -> GraphResult<()> {
    let entry = registry.require(ticker)?;
    let stats = entry.dataset.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats_text(&stats);
    }
    Ok(())
}

/// Nodes matching an exact type tag.
pub fn cmd_nodes(registry: &CompanyRegistry, ticker: &str, tag: &str, json: bool) -> GraphResult<()> {
    let entry = registry.require(ticker)?;
    print_nodes(&entry.dataset.nodes_by_type(tag), json)
}

/// Nodes tagged `main_category`.
pub fn cmd_sections(registry: &CompanyRegistry, ticker: &str, json: bool) -> GraphResult<()> {
    let entry = registry.require(ticker)?;
    print_nodes(&entry.dataset.main_sections(), json)
}

/// Nodes tagged `segment`, alongside the metadata revenue split.
pub fn cmd_segments(registry: &CompanyRegistry, ticker: &str, json: bool) -> GraphResult<()> {
    let entry = registry.require(ticker)?;
    if json {
        let info = serde_json::json!({
            "nodes": entry.dataset.business_segments(),
            "revenueSplit": entry.metadata.segments,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_nodes(&entry.dataset.business_segments(), false)?;
        println!("Revenue split:");
        for segment in &entry.metadata.segments {
            println!("  {:<24} {:>3}%  {}", segment.name, segment.percentage, segment.revenue);
        }
    }
    Ok(())
}

/// Nodes tagged `competitor`.
pub fn cmd_competitors(registry: &CompanyRegistry, ticker: &str, json: bool) -> GraphResult<()> {
    let entry = registry.require(ticker)?;
    print_nodes(&entry.dataset.competitors(), json)
}

/// All `swot_*` nodes, grouped by factor in text mode.
pub fn cmd_swot(registry: &CompanyRegistry, ticker: &str, json: bool) -> GraphResult<()> {
    let entry = registry.require(ticker)?;
    let nodes = entry.dataset.swot_elements();
    if json {
        return print_nodes(&nodes, true);
    }
    for node in nodes {
        let factor = node
            .kind
            .as_ref()
            .and_then(|k| k.swot_factor())
            .map(|f| f.name())
            .unwrap_or("other");
        println!("[{:<11}] {}  {}", factor, node.id, node.label);
    }
    Ok(())
}

/// Validate an external dataset document.
pub fn cmd_check(path: &Path, strict: bool, json: bool) -> GraphResult<()> {
    let document = DatasetDocument::read_from_file(path)?;
    let ticker = document.metadata.ticker.clone();
    let mode = if strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Lenient
    };
    let CompanyEntry { dataset, .. } = document.into_entry(mode)?;
    let stats = dataset.stats();

    if json {
        let report = serde_json::json!({
            "file": path.display().to_string(),
            "ticker": ticker,
            "strict": strict,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}: ok ({}, {} nodes, {} edges)",
            path.display(),
            ticker,
            stats.total_nodes,
            stats.total_edges
        );
    }
    Ok(())
}

fn print_stats_text(stats: &crate::graph::GraphStats) {
    println!("Nodes: {}", stats.total_nodes);
    println!("Edges: {}", stats.total_edges);
    println!("Main sections: {}", stats.main_sections);
    println!("Business segments: {}", stats.business_segments);
    println!("Competitors: {}", stats.competitors);
    println!("SWOT elements: {}", stats.swot_elements);
}

fn print_nodes(nodes: &[&NodeData], json: bool) -> GraphResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(nodes)?);
    } else if nodes.is_empty() {
        println!("(no matching nodes)");
    } else {
        for node in nodes {
            println!("{:<28} {}", node.id, node.label);
        }
    }
    Ok(())
}
