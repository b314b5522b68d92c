//! `reach augment` — run the hub-insertion heuristic and report the outcome.
//!
//! Exit status: zero on success or on the already-present no-op; nonzero
//! for the two failure kinds, each with a distinct machine-readable code
//! (`infeasible_insertion`, `goal_unmet`) so scripts can tell them apart.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use reach_core::fixture::demo_graph;
use reach_core::graph::augment::{HUB_NAME, insert_hub};
use reach_core::{AugmentOutcome, AugmentReport, GraphError};

use crate::cmd::require_node;
use crate::output::{CliError, OutputMode, render, render_error};

/// Arguments for `reach augment`.
#[derive(Args, Debug)]
pub struct AugmentArgs {
    /// Source node to measure reachability from.
    #[arg(default_value = "0")]
    pub source: String,
}

/// Payload for the already-present no-op.
#[derive(Debug, Serialize)]
struct NoopReport {
    outcome: &'static str,
    hub: &'static str,
}

/// Execute `reach augment`.
pub fn run_augment(args: &AugmentArgs, mode: OutputMode) -> anyhow::Result<()> {
    let mut graph = demo_graph();
    require_node(&graph, &args.source, mode)?;

    match insert_hub(&mut graph, &args.source) {
        Ok(AugmentOutcome::Inserted(report)) => render(mode, &report, render_report_human),
        Ok(AugmentOutcome::AlreadyPresent) => {
            let payload = NoopReport {
                outcome: "already_present",
                hub: HUB_NAME,
            };
            render(mode, &payload, |payload, w| {
                writeln!(w, "hub {} already present; nothing to do", payload.hub)
            })
        }
        Err(
            err @ (GraphError::InfeasibleInsertion { .. }
            | GraphError::ReachabilityGoalUnmet { .. }),
        ) => {
            render_error(mode, &CliError::from(&err))?;
            anyhow::bail!("augmentation failed")
        }
        Err(err) => Err(err.into()),
    }
}

fn render_report_human(report: &AugmentReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "hub {} inserted: reached by {} paths (displaced '{}' at {})",
        report.hub, report.path_count, report.displaced.name, report.displaced.path_count
    )?;
    writeln!(w, "added edges:")?;
    for edge in &report.added_edges {
        writeln!(w, "  {edge}")?;
    }
    Ok(())
}
