use crate::cost::Cost;
use crate::error::{PathError, Result};
use crate::pathing_grid::PathingGrid;
use itertools::Itertools;
use log::info;

/// Source of transition costs between cells for the search kernel.
///
/// A cost of [Cost::UNREACHABLE] means there is no direct transition. The kernel trusts the
/// values it is given: symmetry and positivity are not checked.
pub trait TransitionCosts<C: Cost> {
    fn node_count(&self) -> usize;
    fn transition_cost(&self, from: usize, to: usize) -> C;
}

/// Dense `N x N` table of transition costs, row `from`, column `to`.
///
/// Immutable once built. Changing the obstacle mask requires a full rebuild with
/// [build_cost_table].
#[derive(Clone, Debug, PartialEq)]
pub struct DenseCostTable<C: Cost = f32> {
    node_count: usize,
    costs: Vec<C>,
}

impl<C: Cost> DenseCostTable<C> {
    /// Wraps a caller-supplied row-major table. Only the length is validated.
    pub fn from_raw(node_count: usize, costs: Vec<C>) -> Result<DenseCostTable<C>> {
        let expected = node_count * node_count;
        if costs.len() != expected {
            return Err(PathError::TableSizeMismatch {
                expected,
                actual: costs.len(),
            });
        }
        Ok(DenseCostTable { node_count, costs })
    }

    /// The outgoing costs of a single cell.
    pub fn row(&self, from: usize) -> &[C] {
        &self.costs[from * self.node_count..(from + 1) * self.node_count]
    }

    pub fn as_slice(&self) -> &[C] {
        &self.costs
    }
}

impl<C: Cost> TransitionCosts<C> for DenseCostTable<C> {
    fn node_count(&self) -> usize {
        self.node_count
    }
    #[inline]
    fn transition_cost(&self, from: usize, to: usize) -> C {
        self.costs[from * self.node_count + to]
    }
}

/// Computes the same costs as [build_cost_table] on demand from a borrowed grid, using memory
/// linear in the number of cells instead of quadratic.
#[derive(Clone, Copy, Debug)]
pub struct NeighbourCosts<'a> {
    grid: &'a PathingGrid,
}

impl<'a> NeighbourCosts<'a> {
    pub fn new(grid: &'a PathingGrid) -> NeighbourCosts<'a> {
        NeighbourCosts { grid }
    }
}

impl<C: Cost> TransitionCosts<C> for NeighbourCosts<'_> {
    fn node_count(&self) -> usize {
        self.grid.node_count()
    }
    fn transition_cost(&self, from: usize, to: usize) -> C {
        cell_transition(self.grid, from, to)
    }
}

#[inline]
fn cell_transition<C: Cost>(grid: &PathingGrid, from: usize, to: usize) -> C {
    if from != to && !grid.is_blocked(from) && !grid.is_blocked(to) && grid.adjacent(from, to) {
        C::UNIT
    } else {
        C::UNREACHABLE
    }
}

/// Builds the dense transition-cost table of a grid: [Cost::UNIT] between distinct open
/// 4-adjacent cells, [Cost::UNREACHABLE] for every other ordered pair.
pub fn build_cost_table<C: Cost>(grid: &PathingGrid) -> DenseCostTable<C> {
    let n = grid.node_count();
    info!("Building {n}x{n} cost table");
    let mut costs = vec![C::UNREACHABLE; n * n];
    // Every finite entry is an open neighbour pair, so filling those is equivalent to the full
    // pairwise comparison.
    for from in 0..n {
        for to in grid.open_neighbour_ids(from) {
            costs[from * n + to] = C::UNIT;
        }
    }
    DenseCostTable {
        node_count: n,
        costs,
    }
}

/// Sums the transition costs along a path. Paths with fewer than two cells cost nothing; a
/// path containing an unreachable hop costs [Cost::UNREACHABLE].
pub fn path_cost<C: Cost, T: TransitionCosts<C>>(costs: &T, path: &[usize]) -> C {
    let mut total = C::zero();
    for (from, to) in path.iter().tuple_windows() {
        let step = costs.transition_cost(*from, *to);
        if step.is_unreachable() {
            return C::UNREACHABLE;
        }
        total = total + step;
    }
    total
}
