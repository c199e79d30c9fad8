//! Best-first search over a dense graph with linear-scan selection.
//!
//! Every iteration scans the whole frontier for the cell with the lowest
//! `cost_from_start + heuristic` and relaxes every remaining frontier cell against the chosen
//! one, so a search is `O(n²)` in the number of cells. With an all-zero heuristic this is
//! Dijkstra's algorithm, otherwise (weighted) A*.
use crate::cost::Cost;
use crate::cost_table::TransitionCosts;
use crate::error::{PathError, Result};
use crate::heuristic::HeuristicTable;
use log::debug;
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NO_PARENT: usize = usize::MAX;

/// Outcome of a single search. An unreachable goal is reported with a cost of
/// [Cost::UNREACHABLE] and an empty path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult<C: Cost = f32> {
    pub best_cost: C,
    /// Number of cells settled, the goal included when it was reached.
    pub explored: usize,
    /// Cell ids from start to goal inclusive.
    pub path: Vec<usize>,
}

impl<C: Cost> SearchResult<C> {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Frontier buffers of a search. A context can be reused for any number of sequential searches
/// to avoid reallocating; concurrent searches each need their own.
#[derive(Clone, Debug, Default)]
pub struct SearchContext<C: Cost = f32> {
    frontier_ids: Vec<usize>,
    frontier_costs: Vec<C>,
    parents: Vec<usize>,
}

impl<C: Cost> SearchContext<C> {
    pub fn new() -> SearchContext<C> {
        SearchContext {
            frontier_ids: Vec::new(),
            frontier_costs: Vec::new(),
            parents: Vec::new(),
        }
    }

    fn reset(&mut self, node_count: usize, start: usize) {
        self.frontier_ids.clear();
        self.frontier_ids.extend(0..node_count);
        self.frontier_costs.clear();
        self.frontier_costs.resize(node_count, C::UNREACHABLE);
        self.frontier_costs[start] = C::zero();
        self.parents.clear();
        self.parents.resize(node_count, NO_PARENT);
    }

    /// Frontier position of the cell to settle next, or [None] if no frontier cell has been
    /// reached. Among scores closer than [Cost::TIE_EPSILON], the cell with the larger cost
    /// from start wins; remaining ties go to the cell scanned first.
    fn select(&self, heuristic: &HeuristicTable<C>) -> Option<usize> {
        let mut chosen = None;
        let mut chosen_cost = C::UNREACHABLE;
        let mut chosen_score = C::UNREACHABLE;
        for (ix, (&id, &cost)) in self
            .frontier_ids
            .iter()
            .zip(self.frontier_costs.iter())
            .enumerate()
        {
            if cost.is_unreachable() {
                continue;
            }
            let score = cost + heuristic[id];
            if chosen.is_none()
                || score < chosen_score
                || ((score - chosen_score).abs() < C::TIE_EPSILON && cost > chosen_cost)
            {
                chosen = Some(ix);
                chosen_cost = cost;
                chosen_score = score;
            }
        }
        chosen
    }

    fn reconstruct_path(&self, start: usize, goal: usize) -> Vec<usize> {
        let mut path: Vec<usize> = std::iter::successors(Some(goal), |&node| {
            if node == start {
                None
            } else {
                Some(self.parents[node])
            }
        })
        .collect();
        path.reverse();
        path
    }

    /// Runs a search reusing this context's buffers. See [search] for the contract.
    pub fn search<T: TransitionCosts<C>>(
        &mut self,
        costs: &T,
        heuristic: &HeuristicTable<C>,
        node_count: usize,
        start: usize,
        goal: usize,
    ) -> Result<SearchResult<C>> {
        validate(costs, heuristic, node_count, start, goal)?;
        let started = Instant::now();
        self.reset(node_count, start);
        let mut explored = 0;

        while let Some(chosen_ix) = self.select(heuristic) {
            let chosen_id = self.frontier_ids.swap_remove(chosen_ix);
            let chosen_cost = self.frontier_costs.swap_remove(chosen_ix);
            explored += 1;

            if chosen_id == goal {
                let path = self.reconstruct_path(start, goal);
                debug!(
                    "Reached {goal} from {start} at cost {chosen_cost} after settling {explored} of {node_count} cells in {:?}",
                    started.elapsed()
                );
                return Ok(SearchResult {
                    best_cost: chosen_cost,
                    explored,
                    path,
                });
            }

            for (&target, target_cost) in self
                .frontier_ids
                .iter()
                .zip(self.frontier_costs.iter_mut())
            {
                let transition = costs.transition_cost(chosen_id, target);
                if transition.is_unreachable() {
                    continue;
                }
                let candidate = transition + chosen_cost;
                if candidate < *target_cost {
                    *target_cost = candidate;
                    self.parents[target] = chosen_id;
                }
            }
        }

        debug!(
            "{goal} is unreachable from {start}, settled {explored} of {node_count} cells in {:?}",
            started.elapsed()
        );
        Ok(SearchResult {
            best_cost: C::UNREACHABLE,
            explored,
            path: Vec::new(),
        })
    }
}

fn validate<C: Cost, T: TransitionCosts<C>>(
    costs: &T,
    heuristic: &HeuristicTable<C>,
    node_count: usize,
    start: usize,
    goal: usize,
) -> Result<()> {
    if costs.node_count() != node_count {
        return Err(PathError::TableSizeMismatch {
            expected: node_count,
            actual: costs.node_count(),
        });
    }
    if heuristic.len() != node_count {
        return Err(PathError::TableSizeMismatch {
            expected: node_count,
            actual: heuristic.len(),
        });
    }
    for cell in [start, goal] {
        if cell >= node_count {
            return Err(PathError::CellOutOfRange { cell, node_count });
        }
    }
    Ok(())
}

/// Searches for a lowest-cost path from `start` to `goal` over `node_count` cells.
///
/// `costs` and `heuristic` must both describe exactly `node_count` cells and both endpoints
/// must be smaller than `node_count`; violations are reported before any work is done. An
/// unreachable goal is a regular result, see [SearchResult]. The search settles at most
/// `node_count` cells and always terminates.
pub fn search<C: Cost, T: TransitionCosts<C>>(
    costs: &T,
    heuristic: &HeuristicTable<C>,
    node_count: usize,
    start: usize,
    goal: usize,
) -> Result<SearchResult<C>> {
    SearchContext::new().search(costs, heuristic, node_count, start, goal)
}
