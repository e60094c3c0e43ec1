//! Exact all-pairs shortest paths by dynamic relaxation.

use log::debug;

use crate::Graph;

use super::{DistanceMatrix, ShortestPathProvider};

/// Floyd–Warshall shortest-path provider.
///
/// Runs in `O(n³)` time and `O(n²)` space. Intermediate node `k` only ever
/// sees the matrix fully relaxed over every `k' < k`.
///
/// Behaviour on negative edge weights is unspecified. [`Graph`] rejects them
/// at construction, so they never reach this provider.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use stopcover_core::{Edge, FloydWarshall, Graph, Node, ShortestPathProvider};
///
/// # fn main() -> Result<(), stopcover_core::GraphError> {
/// let nodes = [
///     Node::hostel(1, "A", Coord { x: 0.0, y: 0.0 }),
///     Node::hostel(2, "B", Coord { x: 0.0, y: 0.0 }),
///     Node::hostel(3, "C", Coord { x: 0.0, y: 0.0 }),
/// ];
/// let edges = [Edge::new(1, 1, 2, 10.0), Edge::new(2, 2, 3, 10.0)];
/// let matrix = FloydWarshall.distance_matrix(&Graph::new(&nodes, &edges)?);
///
/// assert_eq!(matrix.distance(1, 3), Some(20.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FloydWarshall;

impl ShortestPathProvider for FloydWarshall {
    fn distance_matrix(&self, graph: &Graph) -> DistanceMatrix {
        let mut matrix = DistanceMatrix::with_direct_edges(graph);
        debug!(
            "relaxing {n}x{n} distance matrix over {edges} edges",
            n = matrix.len(),
            edges = graph.edges().len()
        );
        for k in 0..matrix.len() {
            // Row k is stable during its own sweep because dist[k][k] == 0.
            let Some(via) = matrix.row(k).map(<[f64]>::to_vec) else {
                continue;
            };
            for row in matrix.rows_mut() {
                let Some(to_k) = row.get(k).copied() else {
                    continue;
                };
                if to_k.is_infinite() {
                    continue;
                }
                for (cell, from_k) in row.iter_mut().zip(&via) {
                    let candidate = to_k + from_k;
                    if candidate < *cell {
                        *cell = candidate;
                    }
                }
            }
        }
        matrix
    }
}
