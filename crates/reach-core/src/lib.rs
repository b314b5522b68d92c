#![forbid(unsafe_code)]
//! reach-core library.
//!
//! In-memory directed weighted graphs, exhaustive simple-path enumeration,
//! and the hub-insertion heuristic built on top of it.
//!
//! # Conventions
//!
//! - **Errors**: hard failures are [`error::GraphError`]; soft conditions
//!   (duplicate node, speculative lookup miss) are statuses, not errors.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod error;
pub mod fixture;
pub mod graph;

pub use error::GraphError;
pub use graph::augment::{AugmentOutcome, AugmentReport, MostReachable, insert_hub, most_reachable};
pub use graph::paths::{EnumerationLimits, WeightedPath, find_paths, find_paths_bounded};
pub use graph::store::{DirectedGraph, Edge, NodeStatus};
