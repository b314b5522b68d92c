//! `reach show` — render the demonstration graph.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use reach_core::Edge;
use reach_core::fixture::demo_graph;

use crate::output::{OutputMode, render};

/// Arguments for `reach show`.
#[derive(Args, Debug, Default)]
pub struct ShowArgs {}

/// Report payload for `reach show`.
#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
}

/// Execute `reach show`.
pub fn run_show(_args: &ShowArgs, mode: OutputMode) -> anyhow::Result<()> {
    let graph = demo_graph();
    let payload = GraphReport {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        nodes: graph.node_names().to_vec(),
        edges: graph.edges().collect(),
    };

    render(mode, &payload, |payload, w| {
        for edge in &payload.edges {
            writeln!(w, "{edge}")?;
        }
        Ok(())
    })
}
