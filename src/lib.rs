//! # dense_pathfinding
//!
//! Lowest-cost paths on a uniform 4-connected grid with impassable cells. The grid is turned
//! into a dense transition-cost table once per obstacle configuration, after which every path
//! request runs a best-first search over that table with a heuristic table computed for the
//! requested goal. An all-zero heuristic gives
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm), the Manhattan
//! distance gives [A*](https://en.wikipedia.org/wiki/A*_search_algorithm).
//!
//! Selection scans the whole frontier instead of using a heap. This keeps the tie-breaking
//! exact: among cells whose scores differ by less than [Cost::TIE_EPSILON], the one furthest
//! from the start is settled first, which decides which of several optimal paths is returned.
//!
//! The lower-level pieces ([build_cost_table], [build_heuristic_table], [search]) can be used
//! directly. [Pathfinder] bundles them with caller-owned state that rebuilds the cost table
//! only when obstacles change.
pub mod cost;
pub mod cost_table;
pub mod error;
pub mod heuristic;
pub mod pathing_grid;
pub mod search;
pub mod solver;

pub use crate::cost::Cost;
pub use crate::cost_table::{
    build_cost_table, path_cost, DenseCostTable, NeighbourCosts, TransitionCosts,
};
pub use crate::error::{PathError, Result};
pub use crate::heuristic::{build_heuristic_table, HeuristicTable};
pub use crate::pathing_grid::PathingGrid;
pub use crate::search::{search, SearchContext, SearchResult};
pub use crate::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};

use core::fmt;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use log::info;
use std::sync::Arc;

/// Default scale of the A* heuristic. Values above 1 trade optimality for fewer settled cells.
pub const HEURISTIC_FACTOR: f64 = 1.0;

/// Caller-owned pathfinding state: the obstacle grid, a shared snapshot of its cost table, the
/// solver deciding the heuristic and a reusable search context.
///
/// Changing a cell only marks the cost table as dirty; it is rebuilt in full before the next
/// search (or explicitly through [update](Self::update)). Snapshots handed out by
/// [cost_snapshot](Self::cost_snapshot) are never mutated, so searches on other threads can keep
/// using them while the grid changes.
#[derive(Debug)]
pub struct Pathfinder<S: GridSolver = AstarSolver> {
    grid: PathingGrid,
    pub solver: S,
    costs: Arc<DenseCostTable>,
    costs_dirty: bool,
    context: SearchContext,
}

impl Pathfinder<AstarSolver> {
    /// A `width` by `height` grid with every cell set to `blocked`, searched with A*.
    pub fn new(width: usize, height: usize, blocked: bool) -> Pathfinder<AstarSolver> {
        let mut grid = PathingGrid::new(width, height, blocked);
        grid.generate_components();
        Pathfinder::with_solver(grid, AstarSolver::new())
    }

    /// Like [new](Self::new) but rejects grids without cells.
    pub fn try_new(width: usize, height: usize, blocked: bool) -> Result<Pathfinder<AstarSolver>> {
        let grid = PathingGrid::try_new(width, height, blocked)?;
        Ok(Pathfinder::with_solver(grid, AstarSolver::new()))
    }
}

impl<S: GridSolver> Pathfinder<S> {
    pub fn with_solver(grid: PathingGrid, solver: S) -> Pathfinder<S> {
        let costs = Arc::new(build_cost_table(&grid));
        Pathfinder {
            grid,
            solver,
            costs,
            costs_dirty: false,
            context: SearchContext::new(),
        }
    }

    /// The obstacle grid. Cells are changed through [set](Self::set) so the cost table follows.
    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }

    /// Blocks or opens a cell. The coordinates must lie inside the grid.
    pub fn set(&mut self, x: i32, y: i32, blocked: bool) {
        if self.grid.get(x, y) != blocked {
            self.costs_dirty = true;
        }
        self.grid.set(x, y, blocked);
    }

    /// Bounds-checked [set](Self::set).
    pub fn set_point(&mut self, point: Point, blocked: bool) -> Result<()> {
        self.grid.cell_id(&point)?;
        self.set(point.x, point.y, blocked);
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.costs_dirty || self.grid.components_dirty
    }

    /// Rebuilds the cost table and the connected components if obstacles changed since the
    /// last rebuild.
    pub fn update(&mut self) {
        self.grid.update();
        if self.costs_dirty {
            info!("Obstacles changed: rebuilding cost table");
            self.costs = Arc::new(build_cost_table(&self.grid));
            self.costs_dirty = false;
        }
    }

    /// The current cost table, rebuilt first if needed.
    pub fn cost_snapshot(&mut self) -> Arc<DenseCostTable> {
        self.update();
        Arc::clone(&self.costs)
    }

    /// Checks whether start and goal are on the same connected component without searching.
    pub fn reachable(&mut self, start: &Point, goal: &Point) -> bool {
        self.grid.update();
        self.grid.reachable(start, goal)
    }

    /// Computes a path between two grid points.
    pub fn get_path(&mut self, start: Point, goal: Point) -> Result<SearchResult> {
        self.update();
        self.solver.get_path_between_points(
            &self.grid,
            self.costs.as_ref(),
            &mut self.context,
            start,
            goal,
        )
    }

    /// Computes a path between two cell ids.
    pub fn get_path_ids(&mut self, start: usize, goal: usize) -> Result<SearchResult> {
        self.update();
        self.solver
            .get_path(&self.grid, self.costs.as_ref(), &mut self.context, start, goal)
    }

    /// Grid points along a path, start first.
    pub fn path_points(&self, result: &SearchResult) -> Vec<Point> {
        result
            .path
            .iter()
            .map(|&id| self.grid.cell_point(id))
            .collect()
    }
}

impl<S: GridSolver> fmt::Display for Pathfinder<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
