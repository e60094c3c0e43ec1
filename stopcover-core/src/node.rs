//! Graph nodes: hostels and the other places a stop may go.

use geo::Coord;

use crate::Category;

/// Identifier of a node within a graph snapshot.
pub type NodeId = u64;

/// A location on the campus graph.
///
/// The planar `position` only seeds default edge weights when the editor
/// draws an edge; the solver never reads it.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use stopcover_core::{Category, Node};
///
/// let node = Node::new(1, "RP", Coord { x: 514.0, y: 506.0 }, Category::Hostel);
///
/// assert!(node.is_hostel());
/// assert_eq!(node.name, "RP");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Display name. Not necessarily unique.
    pub name: String,
    /// Canvas position.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub position: Coord<f64>,
    /// Category tag; `hostel` marks demand.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub category: Category,
    /// Display colour kept for the editor.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub color: Option<String>,
}

impl Node {
    /// Construct a node without a display colour.
    pub fn new(
        id: NodeId,
        name: impl Into<String>,
        position: Coord<f64>,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            category,
            color: None,
        }
    }

    /// Construct a hostel node.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use stopcover_core::Node;
    ///
    /// assert!(Node::hostel(3, "MS", Coord { x: 0.0, y: 0.0 }).is_hostel());
    /// ```
    pub fn hostel(id: NodeId, name: impl Into<String>, position: Coord<f64>) -> Self {
        Self::new(id, name, position, Category::Hostel)
    }

    /// Return `true` when the node carries the hostel tag.
    pub fn is_hostel(&self) -> bool {
        self.category == Category::Hostel
    }

    /// Return `true` when the node's tag equals `category`.
    pub fn is_in(&self, category: &Category) -> bool {
        &self.category == category
    }
}
