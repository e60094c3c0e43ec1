//! The solve contract between the editor and stop-placement solvers.

use std::collections::BTreeMap;
use std::time::Duration;

use thiserror::Error;

use crate::{Category, Edge, Graph, GraphError, Node, NodeId, WalkDistance, WalkDistanceError};

/// Parameters for a solve request.
///
/// The request is an immutable snapshot of the editor's graph together with
/// the walking-distance threshold and the category that marks demand.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use stopcover_core::{Category, Edge, Node, SolveRequest};
///
/// let request = SolveRequest {
///     nodes: vec![
///         Node::hostel(1, "A", Coord { x: 0.0, y: 0.0 }),
///         Node::hostel(2, "B", Coord { x: 10.0, y: 0.0 }),
///     ],
///     edges: vec![Edge::new(1, 1, 2, 10.0)],
///     max_walk_distance: 200.0,
///     demand_category: Category::Hostel,
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SolveRequest {
    /// Nodes of the graph; every node is a candidate stop.
    pub nodes: Vec<Node>,
    /// Undirected edges with non-negative distances.
    pub edges: Vec<Edge>,
    /// Maximum walking distance between a stop and a hostel it serves.
    pub max_walk_distance: f64,
    /// Nodes tagged with this category must be covered.
    #[cfg_attr(feature = "serde", serde(default))]
    pub demand_category: Category,
}

/// Reasons a [`SolveRequest`] fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveRequestValidationError {
    /// The walking-distance threshold was negative or NaN.
    #[error(transparent)]
    MaxWalkDistance(#[from] WalkDistanceError),
    /// The graph snapshot violated a structural invariant.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl SolveRequest {
    /// Validate the request and build its graph snapshot.
    ///
    /// The threshold is checked before the graph.
    pub fn validate_detailed(&self) -> Result<Graph, SolveRequestValidationError> {
        WalkDistance::new(self.max_walk_distance)?;
        Ok(Graph::new(&self.nodes, &self.edges)?)
    }

    /// Validate the request, mapping failures into [`SolveError`].
    pub fn validate(&self) -> Result<Graph, SolveError> {
        self.validate_detailed().map_err(SolveError::from)
    }

    /// The validated threshold.
    pub fn walk_distance(&self) -> Result<WalkDistance, SolveError> {
        WalkDistance::new(self.max_walk_distance)
            .map_err(|err| SolveError::InvalidRequest(err.into()))
    }

    /// Identifiers of demand nodes in `graph`, ascending.
    pub fn demand_ids(&self, graph: &Graph) -> Vec<NodeId> {
        graph
            .nodes()
            .iter()
            .filter(|node| node.is_in(&self.demand_category))
            .map(|node| node.id)
            .collect()
    }
}

/// Stops chosen for one solve.
///
/// `coverage` maps each selected stop to the names of the hostels it newly
/// covered when it was selected, so every hostel is named at most once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Solution {
    /// Selected stops in selection order.
    pub selected_stops: Vec<NodeId>,
    /// Hostel names newly covered by each selected stop.
    pub coverage: BTreeMap<NodeId, Vec<String>>,
    /// Whether every hostel ended up within reach of a stop.
    pub all_covered: bool,
    /// Label of the algorithm that produced the solution.
    pub algorithm: String,
    /// Hostels no candidate could reach, ascending.
    #[cfg_attr(feature = "serde", serde(default))]
    pub uncovered: Vec<NodeId>,
}

impl Solution {
    /// Solution for a request with nothing to cover.
    pub fn empty(algorithm: impl Into<String>) -> Self {
        Self {
            all_covered: true,
            algorithm: algorithm.into(),
            ..Self::default()
        }
    }

    /// Number of selected stops.
    pub fn num_stops(&self) -> usize {
        self.selected_stops.len()
    }
}

/// Solver runtime diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Diagnostics {
    /// Wall-clock time spent solving.
    pub solve_time: Duration,
    /// Candidate stops considered.
    pub candidates_evaluated: u64,
    /// Greedy rounds that selected a stop.
    pub rounds: u64,
}

/// Response from a successful solve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SolveResponse {
    /// The chosen stops and their coverage.
    pub solution: Solution,
    /// Runtime details of the solve.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Request parameters were invalid, e.g. a negative threshold.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] SolveRequestValidationError),
}

/// Alias for the solver error type.
pub type Error = SolveError;

/// Place stops so that hostels lie within walking distance.
///
/// Implementations should return [`Error::InvalidRequest`] for invalid
/// parameters rather than panicking. An incomplete cover is a normal result
/// reported through [`Solution::all_covered`], not an error.
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait Solver: Send + Sync {
    /// Solve a request, producing a solution or an error.
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, Error>;
}
