//! Facade crate for the stopcover stop-placement engine.
//!
//! This crate re-exports the core domain types and exposes the default greedy
//! solver behind a feature flag.

#![forbid(unsafe_code)]

pub use stopcover_core::{
    Category, CoverageSets, Diagnostics, DistanceMatrix, Edge, FloydWarshall, Graph, GraphError,
    Node, NodeId, ShortestPathProvider, Solution, SolveError, SolveRequest,
    SolveRequestValidationError, SolveResponse, Solver, WalkDistance, WalkDistanceError,
};

#[cfg(feature = "serde")]
pub use stopcover_core::{DocumentError, ProjectDocument, SolutionRecord};

#[cfg(feature = "solver-greedy")]
pub use stopcover_solver_greedy::{GreedySolver, GreedySolverConfig};
