//! In-memory directed weighted graph keyed by node name.
//!
//! # Canonical naming
//!
//! A node *is* its name. The store keys adjacency by `String`, so "same
//! name, different identity" cannot arise and every lookup site agrees on
//! what a node is.
//!
//! # Ordering
//!
//! Node enumeration follows insertion order, and so does each node's
//! adjacency list. Downstream ranking ties are broken by this order, so it
//! is part of the contract, not an accident of the backing map.
//!
//! # Parallel edges
//!
//! Multiple edges between the same ordered pair are permitted and kept.
//! The store never deduplicates.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::GraphError;

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// A directed weighted edge `origin --(weight)--> dest`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Name of the origin node.
    pub origin: String,
    /// Name of the destination node.
    pub dest: String,
    /// Edge weight. May be negative; parallel edges may differ in weight.
    pub weight: f64,
}

impl Edge {
    /// Create an edge with the default weight of 1.
    #[must_use]
    pub fn new(origin: impl Into<String>, dest: impl Into<String>) -> Self {
        Self::weighted(origin, dest, 1.0)
    }

    /// Create an edge with an explicit weight.
    #[must_use]
    pub fn weighted(origin: impl Into<String>, dest: impl Into<String>, weight: f64) -> Self {
        Self {
            origin: origin.into(),
            dest: dest.into(),
            weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --({})--> {}", self.origin, self.weight, self.dest)
    }
}

// ---------------------------------------------------------------------------
// NodeStatus
// ---------------------------------------------------------------------------

/// Result of [`DirectedGraph::add_node`].
///
/// Re-adding an existing node is benign; callers that care can branch on
/// the status, everyone else can ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    /// The node was not present and has been inserted.
    Inserted,
    /// The node was already in the store; nothing changed.
    AlreadyPresent,
}

// ---------------------------------------------------------------------------
// DirectedGraph
// ---------------------------------------------------------------------------

/// An in-memory directed weighted graph.
///
/// Owns a name → adjacency mapping plus the node names in insertion order.
/// Invariant: every added node appears exactly once in both.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// Outgoing `(dest, weight)` pairs per node, insertion order preserved.
    adjacency: HashMap<String, Vec<(String, f64)>>,
    /// Node names in insertion order.
    order: Vec<String>,
}

impl DirectedGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node if absent.
    ///
    /// Returns [`NodeStatus::AlreadyPresent`] without touching the graph
    /// when the name is already stored.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeStatus {
        let name = name.into();
        if self.adjacency.contains_key(&name) {
            debug!(node = %name, "node already in graph");
            return NodeStatus::AlreadyPresent;
        }
        self.order.push(name.clone());
        self.adjacency.insert(name, Vec::new());
        NodeStatus::Inserted
    }

    /// Append a directed edge to its origin's adjacency list.
    ///
    /// Parallel edges are allowed. Both endpoints must already be nodes.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if either endpoint is absent; the graph
    /// is left unchanged.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        for endpoint in [&edge.origin, &edge.dest] {
            if !self.adjacency.contains_key(endpoint) {
                return Err(GraphError::UnknownNode {
                    name: endpoint.clone(),
                    origin: edge.origin.clone(),
                    dest: edge.dest.clone(),
                    weight: edge.weight,
                });
            }
        }
        if let Some(out) = self.adjacency.get_mut(&edge.origin) {
            out.push((edge.dest, edge.weight));
        }
        Ok(())
    }

    /// Whether a node with this name is in the store.
    #[must_use]
    pub fn has_node(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// All node names in insertion order.
    #[must_use]
    pub fn node_names(&self) -> &[String] {
        &self.order
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of edges (parallel edges counted individually).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Outgoing `(dest, weight)` pairs of a node, in insertion order.
    ///
    /// An absent node yields an empty slice with a diagnostic — callers
    /// probe speculatively, so this is not an error.
    #[must_use]
    pub fn outgoing(&self, name: &str) -> &[(String, f64)] {
        self.adjacency.get(name).map_or_else(
            || {
                debug!(node = %name, "outgoing query for node not in graph");
                &[][..]
            },
            Vec::as_slice,
        )
    }

    /// Incoming `(origin, weight)` pairs of a node.
    ///
    /// Computed by scanning every adjacency list — O(V+E) per call, never
    /// cached. Origins appear in node insertion order.
    #[must_use]
    pub fn incoming(&self, name: &str) -> Vec<(String, f64)> {
        if !self.adjacency.contains_key(name) {
            debug!(node = %name, "incoming query for node not in graph");
            return Vec::new();
        }
        let mut result = Vec::new();
        for origin in &self.order {
            let Some(out) = self.adjacency.get(origin) else {
                continue;
            };
            for (dest, weight) in out {
                if dest == name {
                    result.push((origin.clone(), *weight));
                }
            }
        }
        result
    }

    /// Iterate every edge in node-insertion then adjacency order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.order.iter().flat_map(move |origin| {
            self.adjacency
                .get(origin)
                .into_iter()
                .flatten()
                .map(move |(dest, weight)| Edge::weighted(origin.clone(), dest.clone(), *weight))
        })
    }
}

/// One line per edge: `origin --(weight)--> dest`.
impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.edges() {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
