use crate::cost::Cost;
use crate::error::Result;
use crate::heuristic::{build_heuristic_table, HeuristicTable};
use crate::pathing_grid::PathingGrid;
use crate::solver::GridSolver;
use crate::HEURISTIC_FACTOR;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A* with a Manhattan heuristic scaled by `heuristic_factor`. Factors above 1 make the search
/// greedier (weighted A*), a factor of 0 degenerates to Dijkstra.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AstarSolver {
    pub heuristic_factor: f64,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: HEURISTIC_FACTOR,
        }
    }

    /// The factor must be a non-negative number, otherwise the heuristic table would hold
    /// negative or NaN estimates.
    pub fn weighted(heuristic_factor: f64) -> AstarSolver {
        debug_assert!(
            heuristic_factor >= 0.0,
            "heuristic factor must be non-negative, got {heuristic_factor}"
        );
        AstarSolver { heuristic_factor }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    /// The Manhattan distance times the heuristic factor.
    fn heuristic<C: Cost>(&self, grid: &PathingGrid, goal: usize) -> Result<HeuristicTable<C>> {
        debug_assert!(self.heuristic_factor >= 0.0);
        let table = build_heuristic_table(grid, goal)?;
        if self.heuristic_factor == 1.0 {
            Ok(table)
        } else {
            Ok(table.scaled(self.heuristic_factor))
        }
    }
}
