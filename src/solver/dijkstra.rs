use crate::cost::Cost;
use crate::error::Result;
use crate::heuristic::HeuristicTable;
use crate::pathing_grid::PathingGrid;
use crate::solver::GridSolver;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    /// No estimate at all, every cell scores its cost from the start.
    fn heuristic<C: Cost>(&self, grid: &PathingGrid, goal: usize) -> Result<HeuristicTable<C>> {
        grid.check_cell(goal)?;
        Ok(HeuristicTable::zero(grid.node_count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost_table::{build_cost_table, DenseCostTable};
    use crate::search::SearchContext;
    use crate::solver::astar::AstarSolver;
    use grid_util::grid::ValueGrid;

    #[test]
    fn agrees_with_astar_on_cost() {
        let mut pathing_grid = PathingGrid::square(6, false).unwrap();
        for y in 0..5 {
            pathing_grid.set(3, y, true);
        }
        let costs: DenseCostTable = build_cost_table(&pathing_grid);
        let mut context = SearchContext::new();
        let dijkstra = DijkstraSolver
            .get_path(&pathing_grid, &costs, &mut context, 0, 5)
            .unwrap();
        let astar = AstarSolver::new()
            .get_path(&pathing_grid, &costs, &mut context, 0, 5)
            .unwrap();
        assert_eq!(dijkstra.best_cost, astar.best_cost);
        assert!(dijkstra.explored >= astar.explored);
    }
}
