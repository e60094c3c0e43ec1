//! All-pairs shortest walking distances over a [`Graph`](crate::Graph).
//!
//! The [`ShortestPathProvider`] trait abstracts how the distance matrix is
//! produced. [`FloydWarshall`] is the default, exact provider; the campus
//! graphs handled here are small enough for its cubic cost.
//!
//! Unreachable pairs hold [`UNREACHABLE`] rather than an error.

mod floyd_warshall;
mod matrix;
mod provider;

pub use floyd_warshall::FloydWarshall;
pub use matrix::{DistanceMatrix, UNREACHABLE};
pub use provider::ShortestPathProvider;
