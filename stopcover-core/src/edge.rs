//! Undirected, weighted connections between nodes.

use geo::{Distance, Euclidean, Point};

use crate::{Node, NodeId};

/// Identifier of an edge within a graph snapshot.
pub type EdgeId = u64;

/// An undirected connection carrying a walking distance.
///
/// `from` and `to` are interchangeable; the direction only reflects the
/// order in which the editor drew the edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Unique identifier.
    pub id: EdgeId,
    /// First endpoint.
    pub from: NodeId,
    /// Second endpoint.
    pub to: NodeId,
    /// Non-negative walking distance.
    pub distance: f64,
}

impl Edge {
    /// Construct an edge with an explicit distance.
    pub const fn new(id: EdgeId, from: NodeId, to: NodeId, distance: f64) -> Self {
        Self {
            id,
            from,
            to,
            distance,
        }
    }

    /// Connect two nodes using their planar separation, rounded to the
    /// nearest whole unit, as the default distance.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use stopcover_core::{Edge, Node};
    ///
    /// let a = Node::hostel(1, "A", Coord { x: 0.0, y: 0.0 });
    /// let b = Node::hostel(2, "B", Coord { x: 3.0, y: 4.0 });
    /// let edge = Edge::between(1, &a, &b);
    ///
    /// assert_eq!(edge.distance, 5.0);
    /// ```
    pub fn between(id: EdgeId, from: &Node, to: &Node) -> Self {
        let separation = Euclidean.distance(Point::from(from.position), Point::from(to.position));
        Self::new(id, from.id, to.id, separation.round())
    }

    /// Return `true` when the edge joins `a` and `b` in either direction.
    pub const fn joins(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Return `true` when `node` is one of the endpoints.
    pub const fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }
}
