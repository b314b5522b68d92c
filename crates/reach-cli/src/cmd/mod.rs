//! One handler per subcommand. Every handler builds the demonstration
//! graph, runs core queries against it, and renders a `Serialize` payload
//! through the shared output layer.

pub mod augment;
pub mod demo;
pub mod paths;
pub mod rank;
pub mod show;

use std::io::{self, Write};

use reach_core::{DirectedGraph, WeightedPath};

use crate::output::{CliError, OutputMode, render_error};

/// Fail fast when a node named on the command line is not in the graph.
///
/// The core treats unknown lookups as soft (empty results); at the CLI
/// boundary a typo should be an error, not a silent empty report.
pub(crate) fn require_node(
    graph: &DirectedGraph,
    name: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if graph.has_node(name) {
        return Ok(());
    }
    render_error(
        mode,
        &CliError::with_details(
            format!("node {name:?} is not in the graph"),
            format!("valid nodes: {}", graph.node_names().join(", ")),
            "unknown_node",
        ),
    )?;
    anyhow::bail!("unknown node {name:?}")
}

/// Write one numbered path line: ` 3 - 0 -> 2 -> 3 -> 8  (weight 3)`.
pub(crate) fn write_path_line(
    w: &mut dyn Write,
    index: usize,
    path: &WeightedPath,
) -> io::Result<()> {
    writeln!(
        w,
        "{:>3} - {}  (weight {})",
        index,
        path.nodes.join(" -> "),
        path.total_weight
    )
}
