//! Directed-graph store and the algorithms layered on it.
//!
//! # Overview
//!
//! Three layers, leaves first, data flowing one direction:
//!
//! ```text
//! store::DirectedGraph        in-memory nodes + weighted adjacency
//!        ↓  paths::find_paths()
//! Vec<WeightedPath>           every simple path source → target, heaviest first
//!        ↓  augment::most_reachable() / augment::insert_hub()
//! AugmentOutcome              hub inserted (with edge report) or a reason why not
//! ```
//!
//! The store is mutated only during construction and by [`augment::insert_hub`];
//! everything else is a read-only query. Enumeration is exhaustive and
//! exponential in the worst case — this is a demonstration of the
//! combinatorics, meant for small graphs. [`paths::EnumerationLimits`]
//! offers opt-in bounds for callers that feed it anything larger.

pub mod augment;
pub mod paths;
pub mod store;

// Re-export primary types at module level for convenience.
pub use augment::{AugmentOutcome, AugmentReport, MostReachable};
pub use paths::{EnumerationLimits, WeightedPath};
pub use store::{DirectedGraph, Edge, NodeStatus};
