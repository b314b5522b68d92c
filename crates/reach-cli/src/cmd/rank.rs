//! `reach rank` — simple-path count per node, most-reachable first.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use reach_core::fixture::demo_graph;
use reach_core::graph::augment::MostReachable;
use reach_core::find_paths;

use crate::cmd::require_node;
use crate::output::{OutputMode, render};

/// Arguments for `reach rank`.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Source node to measure reachability from.
    #[arg(default_value = "0")]
    pub source: String,
}

/// Report payload for `reach rank`.
#[derive(Debug, Serialize)]
pub struct RankReport {
    pub source: String,
    /// Every node with its path count, most-reachable first; ties keep
    /// node insertion order.
    pub ranking: Vec<MostReachable>,
}

/// Execute `reach rank`.
pub fn run_rank(args: &RankArgs, mode: OutputMode) -> anyhow::Result<()> {
    let graph = demo_graph();
    require_node(&graph, &args.source, mode)?;

    let mut ranking: Vec<MostReachable> = graph
        .node_names()
        .iter()
        .map(|name| MostReachable {
            name: name.clone(),
            path_count: find_paths(&graph, &args.source, name).len(),
        })
        .collect();
    // Stable: ties keep insertion order, matching most_reachable().
    ranking.sort_by(|a, b| b.path_count.cmp(&a.path_count));

    let payload = RankReport {
        source: args.source.clone(),
        ranking,
    };

    render(mode, &payload, |payload, w| {
        writeln!(w, "simple-path count from '{}':", payload.source)?;
        for entry in &payload.ranking {
            writeln!(w, "  {:<4} {:>4} paths", entry.name, entry.path_count)?;
        }
        Ok(())
    })
}
