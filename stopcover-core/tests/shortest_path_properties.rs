//! Property-based tests for the shortest-path engine and coverage builder.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `dist[i][j] == dist[j][i]`.
//! - **Identity:** `dist[i][i] == 0`.
//! - **Triangle inequality:** `dist[i][j] <= dist[i][k] + dist[k][j]`.
//! - **Reachability:** a pair is finite exactly when the graph connects it.
//! - **Coverage monotonicity:** raising the threshold never shrinks a cover.

use std::collections::BTreeSet;

use geo::Coord;
use proptest::prelude::*;
use stopcover_core::{
    CoverageSets, DistanceMatrix, Edge, FloydWarshall, Graph, Node, NodeId, ShortestPathProvider,
    WalkDistance,
};

const TOLERANCE: f64 = 1e-9;

/// Random graph with up to `max_nodes` nodes and integral edge weights.
fn graph_strategy(max_nodes: usize) -> impl Strategy<Value = Graph> {
    (1..=max_nodes).prop_flat_map(|count| {
        let pairs = proptest::collection::vec((0..count, 0..count, 0_u32..500), 0..count * 2);
        pairs.prop_map(move |pairs| {
            let nodes: Vec<Node> = (1..=count as u64)
                .map(|id| Node::hostel(id, id.to_string(), Coord { x: 0.0, y: 0.0 }))
                .collect();
            let mut seen = BTreeSet::new();
            let edges: Vec<Edge> = pairs
                .into_iter()
                .filter(|(a, b, _)| a != b && seen.insert((*a.min(b), *a.max(b))))
                .zip(1_u64..)
                .map(|((a, b, w), id)| Edge::new(id, a as u64 + 1, b as u64 + 1, f64::from(w)))
                .collect();
            Graph::new(&nodes, &edges).expect("generated graph is valid")
        })
    })
}

fn connected_components(graph: &Graph) -> Vec<BTreeSet<usize>> {
    let mut components: Vec<BTreeSet<usize>> =
        (0..graph.len()).map(|idx| BTreeSet::from([idx])).collect();
    for edge in graph.edges() {
        let a = components.iter().position(|c| c.contains(&edge.from));
        let b = components.iter().position(|c| c.contains(&edge.to));
        if let (Some(a), Some(b)) = (a, b)
            && a != b
        {
            let merged = components.remove(a.max(b));
            components[a.min(b)].extend(merged);
        }
    }
    components
}

fn ids(matrix: &DistanceMatrix) -> Vec<NodeId> {
    matrix.node_ids().to_vec()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal(graph in graph_strategy(12)) {
        let matrix = FloydWarshall.distance_matrix(&graph);
        prop_assert_eq!(matrix.len(), graph.len());
        for i in ids(&matrix) {
            prop_assert_eq!(matrix.distance(i, i), Some(0.0));
            for j in ids(&matrix) {
                prop_assert_eq!(matrix.distance(i, j), matrix.distance(j, i));
            }
        }
    }

    #[test]
    fn matrix_satisfies_triangle_inequality(graph in graph_strategy(10)) {
        let matrix = FloydWarshall.distance_matrix(&graph);
        let n = matrix.len();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let direct = matrix.at(i, j).expect("cell");
                    let detour = matrix.at(i, k).expect("cell") + matrix.at(k, j).expect("cell");
                    prop_assert!(
                        direct <= detour + TOLERANCE,
                        "dist[{i}][{j}] = {direct} exceeds detour via {k} = {detour}"
                    );
                }
            }
        }
    }

    #[test]
    fn finite_exactly_within_components(graph in graph_strategy(12)) {
        let matrix = FloydWarshall.distance_matrix(&graph);
        let components = connected_components(&graph);
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                let together = components.iter().any(|c| c.contains(&i) && c.contains(&j));
                prop_assert_eq!(matrix.at(i, j).expect("cell").is_finite(), together);
            }
        }
    }

    #[test]
    fn direct_edges_bound_distances(graph in graph_strategy(12)) {
        let matrix = FloydWarshall.distance_matrix(&graph);
        for edge in graph.edges() {
            prop_assert!(matrix.at(edge.from, edge.to).expect("cell") <= edge.distance);
        }
    }

    #[test]
    fn covers_grow_with_threshold(
        graph in graph_strategy(12),
        low in 0.0_f64..600.0,
        extra in 0.0_f64..600.0,
    ) {
        let matrix = FloydWarshall.distance_matrix(&graph);
        let demand: Vec<NodeId> = graph.node_ids().filter(|id| id % 2 == 1).collect();
        let narrow = CoverageSets::build(&matrix, &demand, WalkDistance::new(low).expect("valid"));
        let wide = CoverageSets::build(
            &matrix,
            &demand,
            WalkDistance::new(low + extra).expect("valid"),
        );
        for (small, large) in narrow.candidates().iter().zip(wide.candidates()) {
            prop_assert_eq!(small.stop, large.stop);
            prop_assert!(small.covers.iter().all(|id| large.covers.contains(id)));
            for hostel in &small.covers {
                let distance = matrix.distance(small.stop, *hostel).expect("known ids");
                prop_assert!(distance <= low);
            }
        }
    }
}
