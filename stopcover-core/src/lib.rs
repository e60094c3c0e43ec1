//! Core domain types for the stopcover engine.
//!
//! The crate models a campus graph of hostels and other locations, computes
//! all-pairs shortest walking distances, and derives which hostels each
//! candidate stop can serve. Solvers implement [`Solver`] on top of these
//! pieces. Constructors return `Result` to surface invalid input early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod coverage;
#[cfg(feature = "serde")]
pub mod document;
pub mod edge;
pub mod graph;
pub mod node;
pub mod shortest_path;
pub mod solver;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use category::Category;
pub use coverage::{Candidate, CoverageSets, WalkDistance, WalkDistanceError};
#[cfg(feature = "serde")]
pub use document::{DocumentError, ProjectDocument, SolutionRecord};
pub use edge::{Edge, EdgeId};
pub use graph::{Graph, GraphError, IndexedEdge};
pub use node::{Node, NodeId};
pub use shortest_path::{DistanceMatrix, FloydWarshall, ShortestPathProvider, UNREACHABLE};
pub use solver::{
    Diagnostics, Solution, SolveError, SolveRequest, SolveRequestValidationError, SolveResponse,
    Solver,
};
