use crate::cost::Cost;
use crate::error::{PathError, Result};
use crate::pathing_grid::PathingGrid;
use std::ops::Index;

/// Estimated remaining cost from every cell to one goal cell, indexed by cell id.
#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicTable<C: Cost = f32> {
    estimates: Vec<C>,
}

impl<C: Cost> HeuristicTable<C> {
    /// All-zero table, which turns the search into Dijkstra's algorithm.
    pub fn zero(node_count: usize) -> HeuristicTable<C> {
        HeuristicTable {
            estimates: vec![C::zero(); node_count],
        }
    }

    pub fn from_vec(estimates: Vec<C>) -> HeuristicTable<C> {
        HeuristicTable { estimates }
    }

    /// Multiplies every estimate by `factor`. Factors above 1 give weighted A*.
    pub fn scaled(mut self, factor: f64) -> HeuristicTable<C> {
        let factor = C::from_f64(factor);
        for estimate in self.estimates.iter_mut() {
            *estimate = *estimate * factor;
        }
        self
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    pub fn as_slice(&self) -> &[C] {
        &self.estimates
    }
}

impl<C: Cost> Index<usize> for HeuristicTable<C> {
    type Output = C;

    #[inline]
    fn index(&self, cell: usize) -> &C {
        &self.estimates[cell]
    }
}

/// Manhattan distance from every cell to `goal`.
///
/// Obstacles are ignored. On a 4-connected grid of unit costs they can only lengthen the
/// remaining path, so the estimate stays a lower bound until it is [scaled](HeuristicTable::scaled)
/// by a factor above 1.
pub fn build_heuristic_table<C: Cost>(
    grid: &PathingGrid,
    goal: usize,
) -> Result<HeuristicTable<C>> {
    let node_count = grid.node_count();
    if goal >= node_count {
        return Err(PathError::CellOutOfRange {
            cell: goal,
            node_count,
        });
    }
    let goal_point = grid.cell_point(goal);
    let estimates = (0..node_count)
        .map(|ix| C::from_steps(grid.cell_point(ix).manhattan_distance(&goal_point) as usize))
        .collect();
    Ok(HeuristicTable { estimates })
}
