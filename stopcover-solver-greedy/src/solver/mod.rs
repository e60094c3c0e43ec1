//! `GreedySolver` implementation of the [`Solver`] contract.

use std::collections::BTreeMap;
use std::time::Instant;

use log::{info, warn};
use stopcover_core::{
    CoverageSets, Diagnostics, FloydWarshall, Graph, ShortestPathProvider, Solution, SolveError,
    SolveRequest, SolveResponse, Solver,
};

use crate::greedy::{Selection, select_stops};

/// Label reported in [`Solution::algorithm`] by default.
pub const DEFAULT_ALGORITHM_LABEL: &str = "Greedy Set Cover (ln n + 1 approximation)";

/// Configuration for [`GreedySolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedySolverConfig {
    /// Label written into every solution.
    pub algorithm_label: String,
}

impl Default for GreedySolverConfig {
    fn default() -> Self {
        Self {
            algorithm_label: DEFAULT_ALGORITHM_LABEL.to_owned(),
        }
    }
}

/// Greedy set-cover solver.
///
/// The solver is generic over the shortest-path engine so tests and callers
/// can swap in another [`ShortestPathProvider`]. Each call is computed from
/// scratch; nothing is cached between solves.
///
/// # Examples
/// ```
/// use stopcover_core::Solver;
/// use stopcover_core::test_support::line_request;
/// use stopcover_solver_greedy::GreedySolver;
///
/// # fn main() -> Result<(), stopcover_core::SolveError> {
/// let response = GreedySolver::default().solve(&line_request(5.0))?;
///
/// assert_eq!(response.solution.selected_stops, vec![1, 3]);
/// assert!(response.solution.all_covered);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GreedySolver<P = FloydWarshall>
where
    P: ShortestPathProvider,
{
    provider: P,
    config: GreedySolverConfig,
}

impl<P> GreedySolver<P>
where
    P: ShortestPathProvider,
{
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, GreedySolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(provider: P, config: GreedySolverConfig) -> Self {
        Self { provider, config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &GreedySolverConfig {
        &self.config
    }
}

impl Default for GreedySolver<FloydWarshall> {
    fn default() -> Self {
        Self::new(FloydWarshall)
    }
}

impl<P> Solver for GreedySolver<P>
where
    P: ShortestPathProvider + Send + Sync,
{
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        let graph = request.validate()?;
        let threshold = request.walk_distance()?;
        let started_at = Instant::now();

        let demand = request.demand_ids(&graph);
        if demand.is_empty() {
            info!("no hostels to cover among {} nodes", graph.len());
            return Ok(SolveResponse {
                solution: Solution::empty(self.config.algorithm_label.clone()),
                diagnostics: Diagnostics {
                    solve_time: started_at.elapsed(),
                    ..Diagnostics::default()
                },
            });
        }

        let matrix = self.provider.distance_matrix(&graph);
        let sets = CoverageSets::build(&matrix, &demand, threshold);
        let selection = select_stops(&sets);

        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            candidates_evaluated: count(sets.len()),
            rounds: count(selection.picks.len()),
        };
        let solution = self.solution(&graph, selection);

        info!(
            "placed {} stops for {} hostels within {} in {:?}",
            solution.num_stops(),
            demand.len(),
            threshold.get(),
            diagnostics.solve_time
        );
        if !solution.all_covered {
            warn!(
                "{} hostels cannot be reached within {}: {:?}",
                solution.uncovered.len(),
                threshold.get(),
                solution.uncovered
            );
        }

        Ok(SolveResponse {
            solution,
            diagnostics,
        })
    }
}

impl<P> GreedySolver<P>
where
    P: ShortestPathProvider,
{
    fn solution(&self, graph: &Graph, selection: Selection) -> Solution {
        let all_covered = selection.is_complete();
        let mut selected_stops = Vec::with_capacity(selection.picks.len());
        let mut coverage = BTreeMap::new();
        for pick in selection.picks {
            let names = pick
                .newly_covered
                .iter()
                .filter_map(|hostel| graph.node(*hostel))
                .map(|node| node.name.clone())
                .collect();
            selected_stops.push(pick.stop);
            coverage.insert(pick.stop, names);
        }
        Solution {
            selected_stops,
            coverage,
            all_covered,
            algorithm: self.config.algorithm_label.clone(),
            uncovered: selection.uncovered,
        }
    }
}

fn count(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests;
