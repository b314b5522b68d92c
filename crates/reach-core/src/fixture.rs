//! The built-in demonstration graph.
//!
//! Nine nodes `"0"`–`"8"` and fifteen weighted edges, small enough to
//! enumerate exhaustively and rich enough to exercise every code path:
//! converging paths, negative weights, a dead-end node (`"1"` has no
//! outgoing edges), and a dominant sink (`"8"`).

use crate::graph::store::{DirectedGraph, Edge};

/// Build the demonstration graph used by the CLI and the regression tests.
#[must_use]
pub fn demo_graph() -> DirectedGraph {
    let mut g = DirectedGraph::new();

    for i in 0..9 {
        g.add_node(i.to_string());
    }

    let edges = [
        (0, 1, 2.0),
        (0, 2, 4.0),
        (0, 4, -2.0),
        (0, 5, 1.0),
        (0, 6, 5.0),
        (2, 3, 3.0),
        (2, 4, 2.0),
        (3, 8, -4.0),
        (4, 3, 5.0),
        (4, 8, 1.0),
        (4, 7, 2.0),
        (5, 7, -1.0),
        (5, 8, -3.0),
        (6, 7, 6.0),
        (7, 8, 2.0),
    ];

    for (origin, dest, weight) in edges {
        g.add_edge(Edge::weighted(origin.to_string(), dest.to_string(), weight))
            .expect("fixture endpoints were just added");
    }

    g
}
