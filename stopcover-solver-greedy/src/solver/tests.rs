//! Tests for the `GreedySolver`.

use super::*;
use rstest::rstest;
use stopcover_core::test_support::{edges, hostel, junction, line_request};
use stopcover_core::{
    Category, DistanceMatrix, Edge, GraphError, Node, SolveRequestValidationError,
    WalkDistanceError,
};

fn solve(request: &SolveRequest) -> Solution {
    GreedySolver::default()
        .solve(request)
        .expect("solve should succeed")
        .solution
}

#[rstest]
fn middle_junction_covers_both_ends() {
    let solution = solve(&line_request(15.0));
    assert_eq!(solution.selected_stops, vec![2]);
    assert_eq!(
        solution.coverage.get(&2),
        Some(&vec!["A".to_owned(), "C".to_owned()])
    );
    assert!(solution.all_covered);
    assert_eq!(solution.algorithm, DEFAULT_ALGORITHM_LABEL);
}

#[rstest]
fn short_threshold_needs_both_ends() {
    let solution = solve(&line_request(5.0));
    assert_eq!(solution.selected_stops, vec![1, 3]);
    assert_eq!(solution.num_stops(), 2);
    assert!(solution.all_covered);
    assert!(solution.uncovered.is_empty());
}

#[rstest]
fn isolated_hostel_covers_itself() {
    let mut request = line_request(15.0);
    request.nodes.push(hostel(4, "D"));
    let solution = solve(&request);
    assert_eq!(solution.selected_stops, vec![2, 4]);
    assert_eq!(solution.coverage.get(&4), Some(&vec!["D".to_owned()]));
    assert!(solution.all_covered);
}

#[rstest]
fn zero_demand_selects_nothing() {
    let request = SolveRequest {
        nodes: vec![junction(1, "Gate"), junction(2, "Library")],
        edges: edges(&[(1, 2, 40.0)]),
        max_walk_distance: 100.0,
        demand_category: Category::Hostel,
    };
    let solution = solve(&request);
    assert!(solution.selected_stops.is_empty());
    assert!(solution.coverage.is_empty());
    assert!(solution.all_covered);
}

#[rstest]
fn empty_graph_is_vacuously_covered() {
    let request = SolveRequest {
        nodes: Vec::new(),
        edges: Vec::new(),
        max_walk_distance: 0.0,
        demand_category: Category::Hostel,
    };
    let response = GreedySolver::default()
        .solve(&request)
        .expect("solve should succeed");
    assert!(response.solution.selected_stops.is_empty());
    assert!(response.solution.all_covered);
    assert_eq!(response.diagnostics.rounds, 0);
}

#[rstest]
fn demand_category_is_configurable() {
    let mut request = line_request(5.0);
    request.demand_category = Category::Other("junction".to_owned());
    let solution = solve(&request);
    assert_eq!(solution.selected_stops, vec![2]);
    assert_eq!(solution.coverage.get(&2), Some(&vec!["B".to_owned()]));
}

#[rstest]
fn node_listing_order_does_not_change_the_answer() {
    let mut request = SolveRequest {
        nodes: vec![hostel(1, "A"), hostel(2, "B"), hostel(3, "C"), hostel(4, "D")],
        edges: edges(&[(1, 2, 5.0), (3, 4, 5.0)]),
        max_walk_distance: 5.0,
        demand_category: Category::Hostel,
    };
    let forward = solve(&request);
    request.nodes.reverse();
    request.edges.reverse();
    let backward = solve(&request);
    assert_eq!(forward.selected_stops, vec![1, 3]);
    assert_eq!(forward, backward);
}

#[rstest]
fn repeated_solves_are_identical() {
    let request = line_request(12.0);
    let solver = GreedySolver::default();
    let first = solver.solve(&request).expect("first solve");
    let second = solver.solve(&request).expect("second solve");
    assert_eq!(first.solution, second.solution);
}

#[rstest]
fn custom_label_is_reported() {
    let config = GreedySolverConfig {
        algorithm_label: "campus greedy".to_owned(),
    };
    let solver = GreedySolver::with_config(FloydWarshall, config.clone());
    assert_eq!(solver.config(), &config);
    let response = solver.solve(&line_request(15.0)).expect("solve");
    assert_eq!(response.solution.algorithm, "campus greedy");
}

#[rstest]
fn diagnostics_count_candidates_and_rounds() {
    let response = GreedySolver::default()
        .solve(&line_request(5.0))
        .expect("solve");
    assert_eq!(response.diagnostics.candidates_evaluated, 3);
    assert_eq!(response.diagnostics.rounds, 2);
}

#[rstest]
fn negative_threshold_is_rejected() {
    let err = GreedySolver::default()
        .solve(&line_request(-1.0))
        .expect_err("expected invalid request error");
    assert_eq!(
        err,
        SolveError::InvalidRequest(SolveRequestValidationError::MaxWalkDistance(
            WalkDistanceError::Negative(-1.0)
        ))
    );
}

#[rstest]
#[case::duplicate_id(vec![hostel(1, "A"), hostel(1, "A again")], Vec::new())]
#[case::unknown_endpoint(vec![hostel(1, "A")], edges(&[(1, 2, 3.0)]))]
fn structural_errors_are_rejected(#[case] nodes: Vec<Node>, #[case] edge_list: Vec<Edge>) {
    let request = SolveRequest {
        nodes,
        edges: edge_list,
        max_walk_distance: 10.0,
        demand_category: Category::Hostel,
    };
    let err = GreedySolver::default()
        .solve(&request)
        .expect_err("expected invalid request error");
    assert!(matches!(
        err,
        SolveError::InvalidRequest(SolveRequestValidationError::Graph(
            GraphError::DuplicateNodeId { .. } | GraphError::UnknownEdgeEndpoint { .. }
        ))
    ));
}

#[derive(Debug)]
struct Disconnected;

impl ShortestPathProvider for Disconnected {
    fn distance_matrix(&self, graph: &Graph) -> DistanceMatrix {
        DistanceMatrix::unconnected(graph)
    }
}

#[rstest]
fn provider_is_pluggable() {
    let solver = GreedySolver::new(Disconnected);
    let response = solver.solve(&line_request(15.0)).expect("solve");
    assert_eq!(response.solution.selected_stops, vec![1, 3]);
}
