//! Test-only graph builders shared by unit and behaviour tests.

use geo::Coord;

use crate::{Category, Edge, Node, NodeId, SolveRequest};

/// Hostel node at the origin.
pub fn hostel(id: NodeId, name: &str) -> Node {
    Node::hostel(id, name, Coord { x: 0.0, y: 0.0 })
}

/// Non-demand node at the origin.
pub fn junction(id: NodeId, name: &str) -> Node {
    Node::new(
        id,
        name,
        Coord { x: 0.0, y: 0.0 },
        Category::Other("junction".to_owned()),
    )
}

/// Edges from `(from, to, distance)` triples, numbered from one.
pub fn edges(triples: &[(NodeId, NodeId, f64)]) -> Vec<Edge> {
    triples
        .iter()
        .zip(1_u64..)
        .map(|((from, to, distance), id)| Edge::new(id, *from, *to, *distance))
        .collect()
}

/// Three nodes in a line, `A –10– B –10– C`, with `A` and `C` as hostels.
pub fn line_request(max_walk_distance: f64) -> SolveRequest {
    SolveRequest {
        nodes: vec![hostel(1, "A"), junction(2, "B"), hostel(3, "C")],
        edges: edges(&[(1, 2, 10.0), (2, 3, 10.0)]),
        max_walk_distance,
        demand_category: Category::Hostel,
    }
}
