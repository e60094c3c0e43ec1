//! The project document exchanged with the graph editor.
//!
//! A document carries the graph, the walking-distance threshold and the last
//! solution. Editing operations live here because they own the invalidation
//! rule: any change that could alter the answer clears the stored solution.
//! Cosmetic edits (names, colours, positions) keep it.

use std::collections::BTreeMap;

use geo::Coord;
use thiserror::Error;

use crate::{
    Category, Edge, EdgeId, Node, NodeId, Solution, SolveRequest, WalkDistance,
    WalkDistanceError,
};

/// Threshold used when a document does not specify one.
pub const DEFAULT_MAX_WALK_DISTANCE: f64 = 200.0;

/// Colour given to nodes added through [`ProjectDocument::add_node`].
pub const DEFAULT_NODE_COLOR: &str = "#06b6d4";

/// Errors raised while editing or decoding a [`ProjectDocument`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// No node has the given identifier.
    #[error("no node with id {0}")]
    UnknownNode(NodeId),
    /// No edge has the given identifier.
    #[error("no edge with id {0}")]
    UnknownEdge(EdgeId),
    /// A node name was blank.
    #[error("node name must not be blank")]
    BlankName,
    /// An edge would connect a node to itself.
    #[error("cannot connect node {0} to itself")]
    SelfLoop(NodeId),
    /// The two nodes are already connected.
    #[error("nodes {from} and {to} are already connected")]
    DuplicateEdge {
        /// First endpoint.
        from: NodeId,
        /// Second endpoint.
        to: NodeId,
    },
    /// An edge distance was negative or not finite.
    #[error("edge distance must be a finite value >= 0, got {0}")]
    InvalidDistance(f64),
    /// The walking-distance threshold was rejected.
    #[error(transparent)]
    MaxWalkDistance(#[from] WalkDistanceError),
    /// The JSON payload could not be decoded or encoded.
    #[error("invalid project document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Snapshot of a solution as stored in the document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionRecord {
    /// Number of selected stops.
    pub num_stops: usize,
    /// Selected stops in selection order.
    #[serde(default)]
    pub selected_stops: Vec<NodeId>,
    /// Hostel names newly covered by each stop.
    pub coverage: BTreeMap<NodeId, Vec<String>>,
    /// Whether every hostel was covered.
    pub all_covered: bool,
    /// Algorithm label.
    pub algorithm: String,
}

impl From<&Solution> for SolutionRecord {
    fn from(solution: &Solution) -> Self {
        Self {
            num_stops: solution.num_stops(),
            selected_stops: solution.selected_stops.clone(),
            coverage: solution.coverage.clone(),
            all_covered: solution.all_covered,
            algorithm: solution.algorithm.clone(),
        }
    }
}

/// Nodes, edges, threshold and last solution of an editing session.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use stopcover_core::{Category, ProjectDocument};
///
/// # fn main() -> Result<(), stopcover_core::DocumentError> {
/// let mut doc = ProjectDocument::default();
/// let a = doc.add_node("RP", Coord { x: 0.0, y: 0.0 }, Category::Hostel)?;
/// let b = doc.add_node("RK", Coord { x: 0.0, y: 100.0 }, Category::Hostel)?;
/// doc.connect(a, b)?;
///
/// assert_eq!(doc.edges[0].distance, 100.0);
/// assert_eq!(doc.to_request(Category::Hostel).nodes.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    /// Graph nodes.
    pub nodes: Vec<Node>,
    /// Graph edges.
    pub edges: Vec<Edge>,
    /// Walking-distance threshold.
    #[serde(default = "default_max_walk_distance")]
    pub max_walk_distance: f64,
    /// Last solution, cleared by any edit that could change it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<SolutionRecord>,
}

const fn default_max_walk_distance() -> f64 {
    DEFAULT_MAX_WALK_DISTANCE
}

impl Default for ProjectDocument {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            max_walk_distance: DEFAULT_MAX_WALK_DISTANCE,
            solution: None,
        }
    }
}

impl ProjectDocument {
    /// Decode a document from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the document as pretty-printed JSON.
    pub fn to_json_string_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a solve request from the current graph and threshold.
    pub fn to_request(&self, demand_category: Category) -> SolveRequest {
        SolveRequest {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            max_walk_distance: self.max_walk_distance,
            demand_category,
        }
    }

    /// Store `solution` as the document's current result.
    pub fn record(&mut self, solution: &Solution) {
        self.solution = Some(SolutionRecord::from(solution));
    }

    /// Forget the stored solution.
    pub fn clear_solution(&mut self) {
        self.solution = None;
    }

    /// Look up a node by identifier.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Add a node and return its identifier (`max id + 1`).
    pub fn add_node(
        &mut self,
        name: &str,
        position: Coord<f64>,
        category: Category,
    ) -> Result<NodeId, DocumentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DocumentError::BlankName);
        }
        let id = next_id(self.nodes.iter().map(|node| node.id));
        let mut node = Node::new(id, name, position, category);
        node.color = Some(DEFAULT_NODE_COLOR.to_owned());
        self.nodes.push(node);
        self.clear_solution();
        Ok(id)
    }

    /// Remove a node together with every edge touching it.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, DocumentError> {
        let position = self
            .nodes
            .iter()
            .position(|node| node.id == id)
            .ok_or(DocumentError::UnknownNode(id))?;
        let removed = self.nodes.remove(position);
        self.edges.retain(|edge| !edge.touches(id));
        self.clear_solution();
        Ok(removed)
    }

    /// Connect two nodes, deriving the distance from their positions.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<EdgeId, DocumentError> {
        if from == to {
            return Err(DocumentError::SelfLoop(from));
        }
        if self.edges.iter().any(|edge| edge.joins(from, to)) {
            return Err(DocumentError::DuplicateEdge { from, to });
        }
        let start = self.node(from).ok_or(DocumentError::UnknownNode(from))?;
        let end = self.node(to).ok_or(DocumentError::UnknownNode(to))?;
        let id = next_id(self.edges.iter().map(|edge| edge.id));
        let edge = Edge::between(id, start, end);
        self.edges.push(edge);
        self.clear_solution();
        Ok(id)
    }

    /// Remove an edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge, DocumentError> {
        let position = self
            .edges
            .iter()
            .position(|edge| edge.id == id)
            .ok_or(DocumentError::UnknownEdge(id))?;
        let removed = self.edges.remove(position);
        self.clear_solution();
        Ok(removed)
    }

    /// Override the distance of an edge.
    pub fn set_edge_distance(&mut self, id: EdgeId, distance: f64) -> Result<(), DocumentError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(DocumentError::InvalidDistance(distance));
        }
        let edge = self
            .edges
            .iter_mut()
            .find(|edge| edge.id == id)
            .ok_or(DocumentError::UnknownEdge(id))?;
        edge.distance = distance;
        self.clear_solution();
        Ok(())
    }

    /// Change the walking-distance threshold.
    pub fn set_max_walk_distance(&mut self, metres: f64) -> Result<(), DocumentError> {
        self.max_walk_distance = WalkDistance::new(metres)?.get();
        self.clear_solution();
        Ok(())
    }

    /// Rename a node. The stored solution is kept.
    pub fn rename_node(&mut self, id: NodeId, name: &str) -> Result<(), DocumentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DocumentError::BlankName);
        }
        self.node_mut(id)?.name = name.to_owned();
        Ok(())
    }

    /// Move a node on the canvas. Edge distances and the solution are kept.
    pub fn move_node(&mut self, id: NodeId, position: Coord<f64>) -> Result<(), DocumentError> {
        self.node_mut(id)?.position = position;
        Ok(())
    }

    /// Recolour a node. The stored solution is kept.
    pub fn recolor_node(&mut self, id: NodeId, color: &str) -> Result<(), DocumentError> {
        self.node_mut(id)?.color = Some(color.to_owned());
        Ok(())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DocumentError> {
        self.nodes
            .iter_mut()
            .find(|node| node.id == id)
            .ok_or(DocumentError::UnknownNode(id))
    }
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0).saturating_add(1)
}
