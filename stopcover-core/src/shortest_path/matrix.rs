//! Dense all-pairs distance storage.

use std::collections::HashMap;

use crate::{Graph, NodeId};

/// Sentinel distance for node pairs with no connecting path.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Square, row-major matrix of shortest walking distances.
///
/// Rows and columns follow the graph's ascending identifier order. Every
/// cell is filled at construction, so lookups by index never miss; lookups
/// by identifier only fail for identifiers outside the snapshot.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use stopcover_core::{DistanceMatrix, Edge, Graph, Node};
///
/// # fn main() -> Result<(), stopcover_core::GraphError> {
/// let nodes = [
///     Node::hostel(1, "A", Coord { x: 0.0, y: 0.0 }),
///     Node::hostel(2, "B", Coord { x: 0.0, y: 0.0 }),
/// ];
/// let graph = Graph::new(&nodes, &[Edge::new(1, 1, 2, 4.0)])?;
/// let matrix = DistanceMatrix::with_direct_edges(&graph);
///
/// assert_eq!(matrix.distance(2, 1), Some(4.0));
/// assert_eq!(matrix.distance(1, 1), Some(0.0));
/// assert_eq!(matrix.distance(1, 3), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Matrix for `graph` with zero on the diagonal and every other pair
    /// unreachable.
    pub fn unconnected(graph: &Graph) -> Self {
        let ids: Vec<NodeId> = graph.node_ids().collect();
        let n = ids.len();
        let index = ids.iter().enumerate().map(|(idx, id)| (*id, idx)).collect();
        let mut cells = vec![UNREACHABLE; n * n];
        for (idx, row) in cells.chunks_mut(n.max(1)).enumerate() {
            if let Some(cell) = row.get_mut(idx) {
                *cell = 0.0;
            }
        }
        Self { ids, index, cells }
    }

    /// Matrix seeded with the direct edge weights of `graph`.
    ///
    /// When two edges join the same pair the shorter weight is kept.
    pub fn with_direct_edges(graph: &Graph) -> Self {
        let mut matrix = Self::unconnected(graph);
        for edge in graph.edges() {
            matrix.relax(edge.from, edge.to, edge.distance);
            matrix.relax(edge.to, edge.from, edge.distance);
        }
        matrix
    }

    fn relax(&mut self, from: usize, to: usize, distance: f64) {
        let n = self.len();
        if from >= n || to >= n {
            return;
        }
        if let Some(cell) = self.cells.get_mut(from * n + to)
            && distance < *cell
        {
            *cell = distance;
        }
    }

    /// Number of nodes along each side.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Return `true` for the matrix of an empty graph.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Node identifiers in row order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Dense index of `id`, if present.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Shortest distance between two nodes by identifier.
    ///
    /// Returns `None` only when either identifier is unknown. Disconnected
    /// pairs yield `Some(UNREACHABLE)`.
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<f64> {
        let row = self.index_of(from)?;
        let column = self.index_of(to)?;
        self.at(row, column)
    }

    /// Return `true` when a path joins the two nodes.
    pub fn is_reachable(&self, from: NodeId, to: NodeId) -> bool {
        self.distance(from, to).is_some_and(f64::is_finite)
    }

    /// Shortest distance by dense index.
    pub fn at(&self, row: usize, column: usize) -> Option<f64> {
        self.row(row).and_then(|cells| cells.get(column)).copied()
    }

    /// One row of the matrix by dense index.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.rows().nth(row)
    }

    /// Rows in identifier order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.cells.chunks(self.len().max(1))
    }

    pub(super) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [f64]> + '_ {
        let n = self.len().max(1);
        self.cells.chunks_mut(n)
    }
}
