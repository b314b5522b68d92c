//! Error taxonomy for graph mutation and augmentation.
//!
//! Only *hard* failures live here. Soft conditions — re-adding an existing
//! node, probing for a name that is not there, running the augmenter when
//! the hub node already exists — are expressed as status values
//! ([`crate::graph::store::NodeStatus`], [`crate::graph::augment::AugmentOutcome`])
//! so callers can branch on them without unwinding.

/// Hard failures surfaced by the graph store and the augmenter.
///
/// These always propagate to the caller; the core never swallows them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// An edge referenced a node that is not in the store. The graph is
    /// left unchanged.
    #[error("edge {origin} --({weight})--> {dest} references unknown node {name}")]
    UnknownNode {
        /// The missing endpoint name.
        name: String,
        /// Origin of the rejected edge.
        origin: String,
        /// Destination of the rejected edge.
        dest: String,
        /// Weight of the rejected edge.
        weight: f64,
    },

    /// Augmentation was asked to run on a graph with no nodes, so there is
    /// no most-reachable node to displace.
    #[error("cannot augment an empty graph")]
    EmptyGraph,

    /// Every node is either the most-reachable node or one of its
    /// neighbours, so the hub cannot be wired in without touching them.
    #[error("no donor nodes available: every node neighbours {most_reachable}")]
    InfeasibleInsertion {
        /// The most-reachable node the insertion tried to displace.
        most_reachable: String,
    },

    /// The hub was inserted and wired, but is reached by no more paths
    /// than the node it was meant to displace.
    #[error("hub reached by {achieved} paths, needed more than {required}")]
    ReachabilityGoalUnmet {
        /// Simple-path count to the hub after wiring.
        achieved: usize,
        /// Path count of the displaced node; success means exceeding it.
        required: usize,
    },
}
