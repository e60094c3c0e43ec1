//! Shortest-path provider trait.

use crate::Graph;

use super::DistanceMatrix;

/// Produce the all-pairs distance matrix for a graph.
///
/// Implementations must return a matrix covering every node of `graph`,
/// in the graph's identifier order, with zero on the diagonal and
/// [`UNREACHABLE`](super::UNREACHABLE) for disconnected pairs. Providers
/// never fail: every validated graph has a well-defined matrix.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use stopcover_core::{DistanceMatrix, FloydWarshall, Graph, Node, ShortestPathProvider};
///
/// struct Disconnected;
///
/// impl ShortestPathProvider for Disconnected {
///     fn distance_matrix(&self, graph: &Graph) -> DistanceMatrix {
///         DistanceMatrix::unconnected(graph)
///     }
/// }
///
/// # fn main() -> Result<(), stopcover_core::GraphError> {
/// let graph = Graph::new(&[Node::hostel(1, "A", Coord { x: 0.0, y: 0.0 })], &[])?;
/// let matrix = Disconnected.distance_matrix(&graph);
/// assert_eq!(matrix, FloydWarshall.distance_matrix(&graph));
/// # Ok(())
/// # }
/// ```
pub trait ShortestPathProvider {
    /// Return shortest walking distances between every pair of nodes.
    fn distance_matrix(&self, graph: &Graph) -> DistanceMatrix;
}

impl<P: ShortestPathProvider + ?Sized> ShortestPathProvider for &P {
    fn distance_matrix(&self, graph: &Graph) -> DistanceMatrix {
        (**self).distance_matrix(graph)
    }
}
