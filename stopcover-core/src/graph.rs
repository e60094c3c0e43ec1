//! Validated, read-only graph snapshots.
//!
//! A [`Graph`] is what the shortest-path engine consumes. Construction checks
//! the structural invariants the editor is meant to uphold, so downstream
//! stages can index densely without runtime lookups failing.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use thiserror::Error;

use crate::{Edge, EdgeId, Node, NodeId};

/// Structural problems detected while building a [`Graph`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Two nodes share an identifier.
    #[error("node id {id} appears more than once")]
    DuplicateNodeId {
        /// The repeated identifier.
        id: NodeId,
    },
    /// An edge references a node that is not part of the snapshot.
    #[error("edge {edge} references unknown node {node}")]
    UnknownEdgeEndpoint {
        /// Offending edge.
        edge: EdgeId,
        /// Identifier that matched no node.
        node: NodeId,
    },
    /// An edge connects a node to itself.
    #[error("edge {edge} connects node {node} to itself")]
    SelfLoop {
        /// Offending edge.
        edge: EdgeId,
        /// The node at both ends.
        node: NodeId,
    },
    /// An edge distance was negative, NaN or infinite.
    #[error("edge {edge} has invalid distance {distance}; expected a finite value >= 0")]
    InvalidEdgeDistance {
        /// Offending edge.
        edge: EdgeId,
        /// The rejected distance.
        distance: f64,
    },
}

/// A weighted edge expressed in dense node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedEdge {
    /// Index of the first endpoint.
    pub from: usize,
    /// Index of the second endpoint.
    pub to: usize,
    /// Walking distance.
    pub distance: f64,
}

/// Immutable snapshot of nodes and edges with a dense identifier index.
///
/// Nodes are held in ascending identifier order. That order is the candidate
/// order used everywhere downstream, which keeps solves reproducible no
/// matter how the caller listed its nodes.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use stopcover_core::{Edge, Graph, Node};
///
/// # fn main() -> Result<(), stopcover_core::GraphError> {
/// let nodes = vec![
///     Node::hostel(2, "B", Coord { x: 10.0, y: 0.0 }),
///     Node::hostel(1, "A", Coord { x: 0.0, y: 0.0 }),
/// ];
/// let edges = vec![Edge::new(1, 1, 2, 10.0)];
/// let graph = Graph::new(&nodes, &edges)?;
///
/// assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(graph.index_of(2), Some(1));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    edges: Vec<IndexedEdge>,
}

impl Graph {
    /// Validate `nodes` and `edges` and build a snapshot.
    ///
    /// Inputs are cloned; the caller's slices are never modified.
    pub fn new(nodes: &[Node], edges: &[Edge]) -> Result<Self, GraphError> {
        let mut ordered = nodes.to_vec();
        ordered.sort_by_key(|node| node.id);

        let mut index = HashMap::with_capacity(ordered.len());
        for (position, node) in ordered.iter().enumerate() {
            match index.entry(node.id) {
                Entry::Occupied(_) => return Err(GraphError::DuplicateNodeId { id: node.id }),
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        let edges = edges
            .iter()
            .map(|edge| index_edge(&index, edge))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            nodes: ordered,
            index,
            edges,
        })
    }

    /// Construct an empty graph.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return `true` when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in ascending identifier order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node identifiers in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|node| node.id)
    }

    /// Look up a node by identifier.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index_of(id).and_then(|idx| self.nodes.get(idx))
    }

    /// Dense index of `id`, if present.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Edges expressed in dense indices.
    pub fn edges(&self) -> &[IndexedEdge] {
        &self.edges
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::empty()
    }
}

fn index_edge(index: &HashMap<NodeId, usize>, edge: &Edge) -> Result<IndexedEdge, GraphError> {
    let lookup = |node: NodeId| {
        index
            .get(&node)
            .copied()
            .ok_or(GraphError::UnknownEdgeEndpoint {
                edge: edge.id,
                node,
            })
    };
    let from = lookup(edge.from)?;
    let to = lookup(edge.to)?;
    if from == to {
        return Err(GraphError::SelfLoop {
            edge: edge.id,
            node: edge.from,
        });
    }
    if !edge.distance.is_finite() || edge.distance < 0.0 {
        return Err(GraphError::InvalidEdgeDistance {
            edge: edge.id,
            distance: edge.distance,
        });
    }
    Ok(IndexedEdge {
        from,
        to,
        distance: edge.distance,
    })
}
