//! Greedy set-cover solver for stopcover.
//!
//! This crate provides [`GreedySolver`], the default implementation of the
//! [`Solver`](stopcover_core::Solver) trait. It computes all-pairs walking
//! distances through a [`ShortestPathProvider`](stopcover_core::ShortestPathProvider),
//! derives each candidate's coverage for the requested threshold, and then
//! picks stops with the classical greedy heuristic: each round takes the
//! candidate covering the most hostels still uncovered.
//!
//! Greedy set cover is within a factor of `H(n) ≈ ln n + 1` of the smallest
//! possible cover. It is not exact, and its output never claims to be.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod greedy;
mod solver;

pub use greedy::{Pick, Selection, select_stops};
pub use solver::{DEFAULT_ALGORITHM_LABEL, GreedySolver, GreedySolverConfig};
