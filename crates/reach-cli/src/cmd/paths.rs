//! `reach paths` — enumerate every simple path between two nodes.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use reach_core::fixture::demo_graph;
use reach_core::{EnumerationLimits, WeightedPath, find_paths_bounded};

use crate::cmd::{require_node, write_path_line};
use crate::output::{OutputMode, render};

/// Arguments for `reach paths`.
#[derive(Args, Debug)]
pub struct PathsArgs {
    /// Source node name.
    pub source: String,

    /// Target node name.
    pub target: String,

    /// Cap the number of nodes on any enumerated path (default: unlimited).
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Stop after collecting this many paths (default: unlimited).
    #[arg(long)]
    pub max_paths: Option<usize>,
}

/// Report payload for `reach paths`.
#[derive(Debug, Serialize)]
pub struct PathsReport {
    pub source: String,
    pub target: String,
    pub path_count: usize,
    pub paths: Vec<WeightedPath>,
}

/// Execute `reach paths`.
pub fn run_paths(args: &PathsArgs, mode: OutputMode) -> anyhow::Result<()> {
    let graph = demo_graph();
    require_node(&graph, &args.source, mode)?;
    require_node(&graph, &args.target, mode)?;

    let limits = EnumerationLimits {
        max_depth: args.max_depth,
        max_paths: args.max_paths,
    };
    let paths = find_paths_bounded(&graph, &args.source, &args.target, limits);
    let payload = PathsReport {
        source: args.source.clone(),
        target: args.target.clone(),
        path_count: paths.len(),
        paths,
    };

    render(mode, &payload, |payload, w| {
        if payload.paths.is_empty() {
            return writeln!(
                w,
                "no simple paths from '{}' to '{}'",
                payload.source, payload.target
            );
        }
        writeln!(
            w,
            "{} simple paths from '{}' to '{}', heaviest first:",
            payload.path_count, payload.source, payload.target
        )?;
        for (i, path) in payload.paths.iter().enumerate() {
            write_path_line(w, i + 1, path)?;
        }
        Ok(())
    })
}
