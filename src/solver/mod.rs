use crate::cost::Cost;
use crate::cost_table::TransitionCosts;
use crate::error::Result;
use crate::heuristic::HeuristicTable;
use crate::pathing_grid::PathingGrid;
use crate::search::{SearchContext, SearchResult};
use grid_util::point::Point;
use log::warn;

pub mod astar;
pub mod dijkstra;

/// A search strategy, defined by the heuristic table it hands to the search kernel.
pub trait GridSolver {
    /// Estimated remaining cost from every cell of `grid` to `goal`.
    fn heuristic<C: Cost>(&self, grid: &PathingGrid, goal: usize) -> Result<HeuristicTable<C>>;

    /// Computes a path between two cell ids with a fresh heuristic table for `goal`.
    fn get_path<C: Cost, T: TransitionCosts<C>>(
        &self,
        grid: &PathingGrid,
        costs: &T,
        context: &mut SearchContext<C>,
        start: usize,
        goal: usize,
    ) -> Result<SearchResult<C>> {
        grid.check_cell(start)?;
        let heuristic = self.heuristic(grid, goal)?;
        if grid.is_blocked(start) || grid.is_blocked(goal) {
            warn!("Searching from {start} to {goal} but an endpoint is blocked");
        }
        context.search(costs, &heuristic, grid.node_count(), start, goal)
    }

    /// Same as [get_path](Self::get_path) with endpoints given as grid points.
    fn get_path_between_points<C: Cost, T: TransitionCosts<C>>(
        &self,
        grid: &PathingGrid,
        costs: &T,
        context: &mut SearchContext<C>,
        start: Point,
        goal: Point,
    ) -> Result<SearchResult<C>> {
        let start = grid.cell_id(&start)?;
        let goal = grid.cell_id(&goal)?;
        self.get_path(grid, costs, context, start, goal)
    }
}
