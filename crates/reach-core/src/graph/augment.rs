//! Reachability ranking and the hub-insertion heuristic.
//!
//! # The experiment
//!
//! [`most_reachable`] ranks nodes by how many distinct simple paths reach
//! them from a fixed source. [`insert_hub`] then adds one synthetic node —
//! the *hub*, named [`HUB_NAME`] — and wires every node outside the current
//! winner's neighbourhood into it with weight-1 edges, betting that the
//! paths funnelled into the hub outnumber the paths reaching the winner.
//!
//! The bet is not guaranteed to pay off in general graphs, so both
//! outcomes are surfaced: a structured [`AugmentReport`] on success, a
//! [`GraphError`] naming the concrete failure otherwise. Printing is left
//! entirely to the caller.
//!
//! # Mutation
//!
//! This is the only module that mutates a graph after construction, and
//! nothing is ever removed: an infeasible insertion leaves the orphan hub
//! node behind, an unmet goal leaves the wired edges behind.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::GraphError;
use crate::graph::paths::find_paths;
use crate::graph::store::{DirectedGraph, Edge};

/// Name of the synthetic hub node.
pub const HUB_NAME: &str = "V'";

// ---------------------------------------------------------------------------
// most_reachable
// ---------------------------------------------------------------------------

/// A node and the number of distinct simple paths reaching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostReachable {
    /// Node name.
    pub name: String,
    /// Simple-path count from the ranking source.
    pub path_count: usize,
}

/// Find the node reachable from `source` by the most distinct simple paths.
///
/// Every node is ranked, `source` included (its trivial path counts as 1).
/// Ties go to the earliest-inserted node. `None` only for an empty graph.
///
/// Cost: one full path enumeration per node — exponential in the worst
/// case, like everything built on [`find_paths`].
#[must_use]
pub fn most_reachable(graph: &DirectedGraph, source: &str) -> Option<MostReachable> {
    let mut best: Option<MostReachable> = None;
    for name in graph.node_names() {
        let path_count = find_paths(graph, source, name).len();
        debug!(node = %name, path_count, "ranked node");
        if best.as_ref().is_none_or(|b| path_count > b.path_count) {
            best = Some(MostReachable {
                name: name.clone(),
                path_count,
            });
        }
    }
    best
}

// ---------------------------------------------------------------------------
// insert_hub
// ---------------------------------------------------------------------------

/// What a successful hub insertion changed, and by how much.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AugmentReport {
    /// Name of the inserted hub node.
    pub hub: String,
    /// Simple-path count from the source to the hub after wiring.
    pub path_count: usize,
    /// The node the hub displaced, with its (now second-best) count.
    pub displaced: MostReachable,
    /// Every edge added, in the order it was inserted.
    pub added_edges: Vec<Edge>,
}

/// Outcome of [`insert_hub`] short of a hard failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AugmentOutcome {
    /// The hub was inserted and is now the most-reachable node.
    Inserted(AugmentReport),
    /// A node named [`HUB_NAME`] already exists; nothing was done.
    AlreadyPresent,
}

/// Insert the hub node and wire it to out-rank the most-reachable node.
///
/// 1. Find the most-reachable node `V` from `source`.
/// 2. Collect `V`'s outgoing neighbours; if it is a sink, its incoming
///    neighbours instead. These are off-limits for wiring — connecting
///    them would be a trivial shortcut through `V`'s own neighbourhood.
/// 3. If [`HUB_NAME`] already exists, stop: [`AugmentOutcome::AlreadyPresent`].
/// 4. Add the hub, then wire every other node — except `V` and its
///    neighbourhood — into it with a weight-1 edge.
/// 5. Re-count. The hub must be reached by strictly more paths than `V`.
///
/// # Errors
///
/// - [`GraphError::EmptyGraph`] when there is no node to displace.
/// - [`GraphError::InfeasibleInsertion`] when no donor nodes remain.
/// - [`GraphError::ReachabilityGoalUnmet`] when the wired hub still does
///   not out-rank `V`.
pub fn insert_hub(graph: &mut DirectedGraph, source: &str) -> Result<AugmentOutcome, GraphError> {
    let displaced = most_reachable(graph, source).ok_or(GraphError::EmptyGraph)?;
    info!(
        node = %displaced.name,
        path_count = displaced.path_count,
        "attempting to out-rank most-reachable node"
    );

    // The blocked neighbourhood: outgoing neighbours, or incoming when V
    // is a sink.
    let mut blocked: HashSet<String> = graph
        .outgoing(&displaced.name)
        .iter()
        .map(|(dest, _)| dest.clone())
        .collect();
    if blocked.is_empty() {
        blocked = graph
            .incoming(&displaced.name)
            .into_iter()
            .map(|(origin, _)| origin)
            .collect();
    }

    if graph.has_node(HUB_NAME) {
        info!(hub = HUB_NAME, "hub already present; nothing to do");
        return Ok(AugmentOutcome::AlreadyPresent);
    }

    // Donor snapshot is taken before the hub exists, so the hub cannot
    // donate to itself.
    let donors: Vec<String> = graph
        .node_names()
        .iter()
        .filter(|name| **name != displaced.name && !blocked.contains(name.as_str()))
        .cloned()
        .collect();

    graph.add_node(HUB_NAME);

    if donors.is_empty() {
        return Err(GraphError::InfeasibleInsertion {
            most_reachable: displaced.name,
        });
    }

    let mut added_edges = Vec::with_capacity(donors.len());
    for donor in donors {
        let edge = Edge::new(donor, HUB_NAME);
        graph.add_edge(edge.clone())?;
        added_edges.push(edge);
    }

    let path_count = find_paths(graph, source, HUB_NAME).len();
    if path_count > displaced.path_count {
        info!(path_count, "hub inserted and out-ranks the displaced node");
        Ok(AugmentOutcome::Inserted(AugmentReport {
            hub: HUB_NAME.to_string(),
            path_count,
            displaced,
            added_edges,
        }))
    } else {
        Err(GraphError::ReachabilityGoalUnmet {
            achieved: path_count,
            required: displaced.path_count,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
