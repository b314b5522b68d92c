//! Exhaustive simple-path enumeration.
//!
//! # Algorithm
//!
//! Depth-first traversal with the in-progress path doubling as the visited
//! set: a neighbour already on the path is skipped, which is what keeps the
//! walk terminating on cyclic graphs. Results are collected in discovery
//! order and sorted by total weight, heaviest first, once at the end.
//!
//! The number of simple paths is exponential in node count, and the
//! enumeration is exhaustive on purpose. Memoizing by node would be wrong —
//! the admissible continuations depend on everything already on the path —
//! so there is no cache to reach for. [`EnumerationLimits`] exists for
//! callers that want to cap the blast radius; the default is unbounded.
//!
//! Uses an explicit frame stack rather than recursion, preserving the
//! recursive traversal order exactly while keeping deep graphs off the call
//! stack.

use serde::Serialize;
use tracing::debug;

use crate::graph::store::DirectedGraph;

// ---------------------------------------------------------------------------
// WeightedPath
// ---------------------------------------------------------------------------

/// A simple path with its accumulated weight.
///
/// Derived, transient value — never stored on the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath {
    /// Node names visited, source first, target last.
    pub nodes: Vec<String>,
    /// Sum of the weights of the traversed edges.
    pub total_weight: f64,
}

// ---------------------------------------------------------------------------
// EnumerationLimits
// ---------------------------------------------------------------------------

/// Opt-in bounds for [`find_paths_bounded`].
///
/// The defaults are unbounded and match [`find_paths`]. These exist as a
/// guard for callers feeding the enumerator graphs large enough for the
/// exponential blowup to matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumerationLimits {
    /// Cap on the number of nodes on any enumerated path (source included).
    /// Exploration is pruned, not failed, past the cap.
    pub max_depth: Option<usize>,
    /// Stop after this many paths have been collected.
    pub max_paths: Option<usize>,
}

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

/// Enumerate every simple path from `source` to `target`.
///
/// Each result starts at `source`, ends at `target`, and repeats no node.
/// Sorted by total weight descending; ties keep discovery order (stable
/// sort — only the descending order is contractual).
///
/// - `source == target` short-circuits to the singleton path `[source]`
///   with weight 0, regardless of any edges on that node.
/// - A `source` not in the graph, a source with no outgoing edges, or an
///   unreachable `target` all yield an empty result, not an error.
#[must_use]
pub fn find_paths(graph: &DirectedGraph, source: &str, target: &str) -> Vec<WeightedPath> {
    find_paths_bounded(graph, source, target, EnumerationLimits::default())
}

/// [`find_paths`] with explicit [`EnumerationLimits`].
///
/// The `source == target` short-circuit ignores the limits: the trivial
/// path involves no exploration.
#[must_use]
pub fn find_paths_bounded(
    graph: &DirectedGraph,
    source: &str,
    target: &str,
    limits: EnumerationLimits,
) -> Vec<WeightedPath> {
    if source == target {
        return vec![WeightedPath {
            nodes: vec![source.to_string()],
            total_weight: 0.0,
        }];
    }
    if !graph.has_node(source) {
        debug!(%source, "path enumeration from node not in graph");
        return Vec::new();
    }

    let mut found: Vec<WeightedPath> = Vec::new();

    // One frame per node on the in-progress path. `cursor[d]` is the next
    // unexplored neighbour of `path[d]`; `cost[d]` the weight accumulated
    // to reach it.
    let mut path: Vec<String> = vec![source.to_string()];
    let mut cursor: Vec<usize> = vec![0];
    let mut cost: Vec<f64> = vec![0.0];

    while let Some(depth) = path.len().checked_sub(1) {
        let (dest, weight) = {
            let neighbours = graph.outgoing(&path[depth]);
            match neighbours.get(cursor[depth]) {
                Some((dest, weight)) => (dest.clone(), *weight),
                None => {
                    // Frame exhausted; backtrack.
                    path.pop();
                    cursor.pop();
                    cost.pop();
                    continue;
                }
            }
        };
        cursor[depth] += 1;

        // Simple-path constraint: never revisit a node already on the path.
        if path.iter().any(|n| *n == dest) {
            continue;
        }
        if limits.max_depth.is_some_and(|cap| path.len() >= cap) {
            continue;
        }

        let reached = cost[depth] + weight;
        if dest == target {
            let mut nodes = path.clone();
            nodes.push(dest);
            found.push(WeightedPath {
                nodes,
                total_weight: reached,
            });
            if limits.max_paths.is_some_and(|cap| found.len() >= cap) {
                break;
            }
            // The target terminates a path; continuations past it would
            // repeat it.
            continue;
        }

        path.push(dest);
        cursor.push(0);
        cost.push(reached);
    }

    found.sort_by(|a, b| b.total_weight.total_cmp(&a.total_weight));
    found
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
