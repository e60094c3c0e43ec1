//! Coverage sets: which demand nodes each candidate stop can serve.
//!
//! Every node of the graph is a candidate stop, hostels included. A candidate
//! covers a demand node when a path joins them and its length is within the
//! walking-distance threshold.

use thiserror::Error;

use crate::{DistanceMatrix, NodeId};

/// Errors returned by [`WalkDistance::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WalkDistanceError {
    /// The threshold was negative.
    #[error("maximum walking distance must be >= 0, got {0}")]
    Negative(f64),
    /// The threshold was NaN.
    #[error("maximum walking distance must be a number")]
    NotANumber,
}

/// Maximum walking distance between a stop and a hostel it serves.
///
/// # Examples
/// ```
/// use stopcover_core::WalkDistance;
///
/// assert!(WalkDistance::new(200.0).is_ok());
/// assert!(WalkDistance::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WalkDistance(f64);

impl WalkDistance {
    /// Validate and wrap a threshold. Positive infinity is accepted.
    pub fn new(metres: f64) -> Result<Self, WalkDistanceError> {
        if metres.is_nan() {
            return Err(WalkDistanceError::NotANumber);
        }
        if metres < 0.0 {
            return Err(WalkDistanceError::Negative(metres));
        }
        Ok(Self(metres))
    }

    /// The wrapped threshold.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Return `true` when a path of length `distance` is walkable.
    ///
    /// Unreachable pairs never qualify, even for an infinite threshold.
    pub fn admits(self, distance: f64) -> bool {
        distance.is_finite() && distance <= self.0
    }
}

impl TryFrom<f64> for WalkDistance {
    type Error = WalkDistanceError;

    fn try_from(metres: f64) -> Result<Self, Self::Error> {
        Self::new(metres)
    }
}

/// Cover of a single candidate stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The candidate stop.
    pub stop: NodeId,
    /// Demand nodes within reach, ascending.
    pub covers: Vec<NodeId>,
}

/// Coverage of every candidate stop for one threshold.
///
/// Candidates appear in ascending identifier order, and so does each cover.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use stopcover_core::{CoverageSets, Edge, FloydWarshall, Graph, Node};
/// use stopcover_core::{ShortestPathProvider, WalkDistance};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let nodes = [
///     Node::hostel(1, "A", Coord { x: 0.0, y: 0.0 }),
///     Node::new(2, "B", Coord { x: 0.0, y: 0.0 }, "junction".parse()?),
///     Node::hostel(3, "C", Coord { x: 0.0, y: 0.0 }),
/// ];
/// let edges = [Edge::new(1, 1, 2, 10.0), Edge::new(2, 2, 3, 10.0)];
/// let matrix = FloydWarshall.distance_matrix(&Graph::new(&nodes, &edges)?);
/// let sets = CoverageSets::build(&matrix, &[1, 3], WalkDistance::new(15.0)?);
///
/// assert_eq!(sets.cover(2), Some(&[1, 3][..]));
/// assert_eq!(sets.cover(1), Some(&[1][..]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageSets {
    candidates: Vec<Candidate>,
    demand: Vec<NodeId>,
    threshold: WalkDistance,
}

impl CoverageSets {
    /// Derive coverage for every node in `matrix`.
    ///
    /// Demand identifiers missing from the matrix are kept in the demand set
    /// but no candidate covers them. Repeated identifiers are collapsed.
    pub fn build(matrix: &DistanceMatrix, demand: &[NodeId], threshold: WalkDistance) -> Self {
        let mut demand = demand.to_vec();
        demand.sort_unstable();
        demand.dedup();

        let demand_columns: Vec<(NodeId, Option<usize>)> = demand
            .iter()
            .map(|id| (*id, matrix.index_of(*id)))
            .collect();

        let candidates = matrix
            .node_ids()
            .iter()
            .zip(matrix.rows())
            .map(|(stop, row)| Candidate {
                stop: *stop,
                covers: demand_columns
                    .iter()
                    .filter(|(_, column)| {
                        column
                            .and_then(|idx| row.get(idx))
                            .is_some_and(|distance| threshold.admits(*distance))
                    })
                    .map(|(id, _)| *id)
                    .collect(),
            })
            .collect();

        Self {
            candidates,
            demand,
            threshold,
        }
    }

    /// Candidate covers in ascending stop order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Cover of `stop`, if it is a candidate.
    pub fn cover(&self, stop: NodeId) -> Option<&[NodeId]> {
        self.candidates
            .iter()
            .find(|candidate| candidate.stop == stop)
            .map(|candidate| candidate.covers.as_slice())
    }

    /// The demand set, ascending and without repeats.
    pub fn demand(&self) -> &[NodeId] {
        &self.demand
    }

    /// The threshold the sets were built for.
    pub const fn threshold(&self) -> WalkDistance {
        self.threshold
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Return `true` when there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
