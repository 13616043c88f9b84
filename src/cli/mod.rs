//! Command-line interface helpers for the `tgraph` binary.

pub mod commands;
