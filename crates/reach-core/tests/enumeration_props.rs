//! Property tests for the enumerator and ranking over random small graphs.
//!
//! Generated graphs may contain cycles, self-loops, and negative weights;
//! the simple-path constraint must keep enumeration finite regardless.
//! Parallel edges are real but excluded here so a path's weight can be
//! checked against a unique edge map.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use reach_core::graph::augment::most_reachable;
use reach_core::graph::paths::find_paths;
use reach_core::{DirectedGraph, Edge, GraphError};

/// A graph with `n` nodes `n0..n{n-1}` and deduplicated random edges.
fn arb_graph() -> impl Strategy<Value = DirectedGraph> {
    (2_usize..=6).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n, -5_i32..=5), 0..=12).prop_map(move |edges| {
            let mut g = DirectedGraph::new();
            for i in 0..n {
                g.add_node(format!("n{i}"));
            }
            let mut seen = HashSet::new();
            for (origin, dest, weight) in edges {
                if seen.insert((origin, dest)) {
                    g.add_edge(Edge::weighted(
                        format!("n{origin}"),
                        format!("n{dest}"),
                        f64::from(weight),
                    ))
                    .expect("nodes were just added");
                }
            }
            g
        })
    })
}

fn last_node(g: &DirectedGraph) -> String {
    g.node_names().last().expect("generator adds >= 2 nodes").clone()
}

fn edge_weights(g: &DirectedGraph) -> HashMap<(String, String), f64> {
    g.edges()
        .map(|e| ((e.origin, e.dest), e.weight))
        .collect()
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(512))]

    #[test]
    fn paths_are_simple_and_anchored(g in arb_graph()) {
        let target = last_node(&g);
        for path in find_paths(&g, "n0", &target) {
            prop_assert_eq!(path.nodes.first().map(String::as_str), Some("n0"));
            prop_assert_eq!(path.nodes.last().map(String::as_str), Some(target.as_str()));

            let distinct: HashSet<&String> = path.nodes.iter().collect();
            prop_assert_eq!(distinct.len(), path.nodes.len(), "repeated node in path");
        }
    }

    #[test]
    fn paths_follow_real_edges_and_sum_their_weights(g in arb_graph()) {
        let target = last_node(&g);
        let weights = edge_weights(&g);

        for path in find_paths(&g, "n0", &target) {
            let mut total = 0.0_f64;
            for hop in path.nodes.windows(2) {
                let key = (hop[0].clone(), hop[1].clone());
                let weight = weights.get(&key);
                prop_assert!(weight.is_some(), "no edge {} -> {}", hop[0], hop[1]);
                total += weight.copied().unwrap_or_default();
            }
            prop_assert!(
                (total - path.total_weight).abs() < 1e-9,
                "claimed {} but edges sum to {}",
                path.total_weight,
                total
            );
        }
    }

    #[test]
    fn results_are_sorted_non_increasing(g in arb_graph()) {
        let target = last_node(&g);
        let paths = find_paths(&g, "n0", &target);
        for pair in paths.windows(2) {
            prop_assert!(pair[0].total_weight >= pair[1].total_weight);
        }
    }

    #[test]
    fn ranking_matches_independent_recount(g in arb_graph()) {
        let top = most_reachable(&g, "n0").expect("generator adds >= 2 nodes");
        prop_assert_eq!(top.path_count, find_paths(&g, "n0", &top.name).len());
    }

    #[test]
    fn ranking_is_idempotent(g in arb_graph()) {
        let first = most_reachable(&g, "n0");
        let second = most_reachable(&g, "n0");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rejected_edge_never_mutates(g in arb_graph()) {
        let mut g = g;
        let rendered = g.to_string();
        let nodes = g.node_count();
        let edges = g.edge_count();

        let err = g
            .add_edge(Edge::new("n0", "not-a-node"))
            .expect_err("endpoint does not exist");
        prop_assert!(
            matches!(err, GraphError::UnknownNode { .. }),
            "unexpected error: {err:?}"
        );

        prop_assert_eq!(g.node_count(), nodes);
        prop_assert_eq!(g.edge_count(), edges);
        prop_assert_eq!(g.to_string(), rendered);
    }
}
