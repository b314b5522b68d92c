//! `reach demo` — the full demonstration in one run.
//!
//! Finds the most-reachable node from the source, enumerates every path to
//! it, then attempts the hub insertion. All four augmentation outcomes are
//! part of the demonstration, so the command reports them and exits zero
//! either way.

use std::io::Write;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use reach_core::fixture::demo_graph;
use reach_core::graph::augment::insert_hub;
use reach_core::{AugmentOutcome, Edge, GraphError, MostReachable, WeightedPath, find_paths, most_reachable};

use crate::cmd::{require_node, write_path_line};
use crate::output::{OutputMode, render};

/// Arguments for `reach demo`.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Source node to measure reachability from.
    #[arg(default_value = "0")]
    pub source: String,
}

/// How the augmentation step ended.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum AugmentationSummary {
    Inserted {
        path_count: usize,
        added_edges: Vec<Edge>,
    },
    AlreadyPresent,
    Infeasible {
        most_reachable: String,
    },
    GoalUnmet {
        achieved: usize,
        required: usize,
    },
}

/// Report payload for `reach demo`.
#[derive(Debug, Serialize)]
struct DemoReport {
    source: String,
    most_reachable: MostReachable,
    paths: Vec<WeightedPath>,
    augmentation: AugmentationSummary,
}

/// Execute `reach demo`.
pub fn run_demo(args: &DemoArgs, mode: OutputMode) -> anyhow::Result<()> {
    let mut graph = demo_graph();
    require_node(&graph, &args.source, mode)?;

    let top = most_reachable(&graph, &args.source).context("demonstration graph is empty")?;
    let paths = find_paths(&graph, &args.source, &top.name);

    let augmentation = match insert_hub(&mut graph, &args.source) {
        Ok(AugmentOutcome::Inserted(report)) => AugmentationSummary::Inserted {
            path_count: report.path_count,
            added_edges: report.added_edges,
        },
        Ok(AugmentOutcome::AlreadyPresent) => AugmentationSummary::AlreadyPresent,
        Err(GraphError::InfeasibleInsertion { most_reachable }) => {
            AugmentationSummary::Infeasible { most_reachable }
        }
        Err(GraphError::ReachabilityGoalUnmet { achieved, required }) => {
            AugmentationSummary::GoalUnmet { achieved, required }
        }
        Err(err) => return Err(err.into()),
    };

    let payload = DemoReport {
        source: args.source.clone(),
        most_reachable: top,
        paths,
        augmentation,
    };

    render(mode, &payload, render_demo_human)
}

fn render_demo_human(report: &DemoReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "the node reachable by the most simple paths from '{}' is '{}', with {} paths",
        report.source, report.most_reachable.name, report.most_reachable.path_count
    )?;
    writeln!(w)?;
    for (i, path) in report.paths.iter().enumerate() {
        write_path_line(w, i + 1, path)?;
    }
    writeln!(w)?;

    match &report.augmentation {
        AugmentationSummary::Inserted {
            path_count,
            added_edges,
        } => {
            writeln!(w, "augmentation: hub inserted, reached by {path_count} paths")?;
            for edge in added_edges {
                writeln!(w, "  {edge}")?;
            }
        }
        AugmentationSummary::AlreadyPresent => {
            writeln!(w, "augmentation: hub already present; nothing to do")?;
        }
        AugmentationSummary::Infeasible { most_reachable } => {
            writeln!(
                w,
                "augmentation: infeasible, no donor nodes available: every node neighbours '{most_reachable}'"
            )?;
        }
        AugmentationSummary::GoalUnmet { achieved, required } => {
            writeln!(
                w,
                "augmentation: goal not met, hub reached by {achieved} paths but needed more than {required}"
            )?;
        }
    }
    Ok(())
}
