//! The greedy set-cover loop.

use std::collections::BTreeSet;

use log::debug;
use stopcover_core::{CoverageSets, NodeId};

/// A stop chosen in one greedy round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    /// The selected candidate.
    pub stop: NodeId,
    /// Hostels this stop covered that no earlier pick did, ascending.
    pub newly_covered: Vec<NodeId>,
}

/// Outcome of [`select_stops`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Picks in selection order.
    pub picks: Vec<Pick>,
    /// Hostels no candidate could reach, ascending.
    pub uncovered: Vec<NodeId>,
}

impl Selection {
    /// Return `true` when every hostel ended up covered.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// Pick stops until every hostel is covered or no candidate helps.
///
/// Each round scans candidates in ascending identifier order and keeps the
/// first one with the strictly largest number of still-uncovered hostels, so
/// ties go to the lowest identifier. A round whose best gain is zero ends the
/// loop; the remaining hostels are reported in [`Selection::uncovered`].
///
/// # Examples
/// ```
/// use stopcover_core::test_support::line_request;
/// use stopcover_core::{CoverageSets, FloydWarshall, ShortestPathProvider};
/// use stopcover_solver_greedy::select_stops;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let request = line_request(15.0);
/// let graph = request.validate()?;
/// let matrix = FloydWarshall.distance_matrix(&graph);
/// let sets = CoverageSets::build(&matrix, &request.demand_ids(&graph), request.walk_distance()?);
/// let selection = select_stops(&sets);
///
/// assert_eq!(selection.picks.len(), 1);
/// assert_eq!(selection.picks[0].stop, 2);
/// assert!(selection.is_complete());
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn select_stops(sets: &CoverageSets) -> Selection {
    let mut uncovered: BTreeSet<NodeId> = sets.demand().iter().copied().collect();
    let mut picks = Vec::new();

    while !uncovered.is_empty() {
        let Some(pick) = best_candidate(sets, &uncovered) else {
            break;
        };
        for hostel in &pick.newly_covered {
            uncovered.remove(hostel);
        }
        debug!(
            "selected stop {} covering {} new hostels; {} remain",
            pick.stop,
            pick.newly_covered.len(),
            uncovered.len()
        );
        picks.push(pick);
    }

    Selection {
        picks,
        uncovered: uncovered.into_iter().collect(),
    }
}

fn best_candidate(sets: &CoverageSets, uncovered: &BTreeSet<NodeId>) -> Option<Pick> {
    let mut best: Option<Pick> = None;
    for candidate in sets.candidates() {
        let newly_covered: Vec<NodeId> = candidate
            .covers
            .iter()
            .copied()
            .filter(|hostel| uncovered.contains(hostel))
            .collect();
        let best_gain = best.as_ref().map_or(0, |pick| pick.newly_covered.len());
        if newly_covered.len() > best_gain {
            best = Some(Pick {
                stop: candidate.stop,
                newly_covered,
            });
        }
    }
    best
}
