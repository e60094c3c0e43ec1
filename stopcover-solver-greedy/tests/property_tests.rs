//! Property-based tests for the greedy solver.
//!
//! # Invariants tested
//!
//! - **Soundness:** every hostel named for a stop is within the threshold.
//! - **Completeness flag:** `all_covered` holds exactly when the named
//!   hostels are the whole demand set.
//! - **Disjoint credit:** each hostel is credited to at most one stop.
//! - **Idempotence:** identical requests give identical solutions.
//! - **Order independence:** the node listing order does not matter.
//!
//! The stop count is not checked against growing thresholds here. Greedy set
//! cover can pick more stops for a larger threshold on some graphs, so that
//! trend is only asserted on the campus fixture in `golden_campus.rs`.


use std::collections::BTreeSet;

use proptest::prelude::*;
use stopcover_core::{FloydWarshall, NodeId, ShortestPathProvider, Solver};
use stopcover_solver_greedy::GreedySolver;

use proptest_support::{hostel_ids, name_of, request_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn named_hostels_are_within_reach(request in request_strategy(1, 12)) {
        let graph = request.validate().expect("generated request is valid");
        let matrix = FloydWarshall.distance_matrix(&graph);
        let solution = GreedySolver::default().solve(&request).expect("solve").solution;

        for (stop, names) in &solution.coverage {
            for name in names {
                let hostel = request
                    .nodes
                    .iter()
                    .find(|node| node.is_hostel() && &node.name == name)
                    .map(|node| node.id)
                    .expect("named hostel exists");
                let distance = matrix.distance(*stop, hostel).expect("known ids");
                prop_assert!(
                    distance <= request.max_walk_distance,
                    "stop {stop} credited with {name} at {distance}"
                );
            }
        }
    }

    #[test]
    fn all_covered_matches_union(request in request_strategy(0, 12)) {
        let solution = GreedySolver::default().solve(&request).expect("solve").solution;
        let hostels = hostel_ids(&request);
        let named: BTreeSet<&str> = solution.coverage.values().flatten().map(String::as_str).collect();
        let expected: BTreeSet<&str> = hostels
            .iter()
            .filter_map(|id| name_of(&request, *id))
            .collect();

        prop_assert_eq!(solution.all_covered, named == expected);
        prop_assert_eq!(solution.all_covered, solution.uncovered.is_empty());
        // Every hostel covers itself, so a complete cover always exists.
        prop_assert!(solution.all_covered);
    }

    #[test]
    fn each_hostel_is_credited_once(request in request_strategy(1, 12)) {
        let solution = GreedySolver::default().solve(&request).expect("solve").solution;
        let credited: Vec<&String> = solution.coverage.values().flatten().collect();
        let unique: BTreeSet<&String> = credited.iter().copied().collect();
        prop_assert_eq!(credited.len(), unique.len());
        prop_assert!(solution.num_stops() <= hostel_ids(&request).len());
        prop_assert!(solution.coverage.values().all(|names| !names.is_empty()));
    }

    #[test]
    fn solving_twice_is_identical(request in request_strategy(1, 12)) {
        let solver = GreedySolver::default();
        let first = solver.solve(&request).expect("first solve").solution;
        let second = solver.solve(&request).expect("second solve").solution;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn node_order_is_irrelevant(request in request_strategy(1, 12)) {
        let mut shuffled = request.clone();
        shuffled.nodes.reverse();
        shuffled.edges.reverse();
        let solver = GreedySolver::default();
        let forward = solver.solve(&request).expect("solve").solution;
        let backward = solver.solve(&shuffled).expect("solve").solution;
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn selected_stops_are_distinct(request in request_strategy(1, 12)) {
        let solution = GreedySolver::default().solve(&request).expect("solve").solution;
        let distinct: BTreeSet<NodeId> = solution.selected_stops.iter().copied().collect();
        prop_assert_eq!(distinct.len(), solution.num_stops());
    }
}
