use crate::error::{PathError, Result};
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Offsets of the 4-neighbourhood as (dx, dy), in the order up, right, down, left.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Obstacle mask of a uniform 4-connected grid. A [true] value in the [BoolGrid] marks a
/// blocked cell. Cells are identified by row-major ids, `id = y * width + x`, so the `y`
/// coordinate of a [Point] is the row and `x` the column.
///
/// Connected components are maintained in a [UnionFind] structure so reachability can be
/// answered without a search. Blocking a cell may split a component, in which case the
/// components are flagged as dirty until [generate_components](Self::generate_components) runs.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl PathingGrid {
    /// Like [ValueGrid::new] but rejects grids without cells.
    pub fn try_new(width: usize, height: usize, blocked: bool) -> Result<PathingGrid> {
        if width == 0 || height == 0 {
            return Err(PathError::EmptyGrid { width, height });
        }
        let mut grid = PathingGrid::new(width, height, blocked);
        grid.generate_components();
        Ok(grid)
    }

    /// A `side` by `side` grid.
    pub fn square(side: usize, blocked: bool) -> Result<PathingGrid> {
        PathingGrid::try_new(side, side, blocked)
    }

    /// Number of cells, which is also the number of nodes of the search graph.
    pub fn node_count(&self) -> usize {
        self.width() * self.height()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    pub fn point_in_bounds(&self, point: &Point) -> bool {
        self.in_bounds(point.x, point.y)
    }

    /// Row-major id of a point.
    pub fn cell_id(&self, point: &Point) -> Result<usize> {
        if self.point_in_bounds(point) {
            Ok(point.y as usize * self.width() + point.x as usize)
        } else {
            Err(PathError::PointOutOfBounds(*point))
        }
    }

    /// Inverse of [cell_id](Self::cell_id). The id must be smaller than [node_count](Self::node_count).
    pub fn cell_point(&self, id: usize) -> Point {
        debug_assert!(id < self.node_count());
        let w = self.width();
        Point::new((id % w) as i32, (id / w) as i32)
    }

    pub fn check_cell(&self, id: usize) -> Result<usize> {
        let node_count = self.node_count();
        if id < node_count {
            Ok(id)
        } else {
            Err(PathError::CellOutOfRange {
                cell: id,
                node_count,
            })
        }
    }

    pub fn is_blocked(&self, id: usize) -> bool {
        let p = self.cell_point(id);
        self.grid.get(p.x, p.y)
    }

    /// In-bounds 4-neighbours of a cell, blocked or not.
    pub fn neighbour_ids(&self, id: usize) -> SmallVec<[usize; 4]> {
        let p = self.cell_point(id);
        let w = self.width();
        NEUMANN_OFFSETS
            .iter()
            .map(|(dx, dy)| (p.x + dx, p.y + dy))
            .filter(|&(x, y)| self.in_bounds(x, y))
            .map(|(x, y)| y as usize * w + x as usize)
            .collect()
    }

    /// 4-neighbours reachable in a single move. Empty if the cell itself is blocked.
    pub fn open_neighbour_ids(&self, id: usize) -> SmallVec<[usize; 4]> {
        if self.is_blocked(id) {
            return SmallVec::new();
        }
        let mut neighbours = self.neighbour_ids(id);
        neighbours.retain(|n| !self.is_blocked(*n));
        neighbours
    }

    /// Two distinct cells are adjacent if they differ by one in exactly one coordinate.
    pub fn adjacent(&self, from: usize, to: usize) -> bool {
        let a = self.cell_point(from);
        let b = self.cell_point(to);
        a.manhattan_distance(&b) == 1
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.cell_id(start), self.cell_id(goal)) {
            (Ok(start_ix), Ok(goal_ix)) => !self.components.equiv(start_ix, goal_ix),
            _ => true,
        }
    }

    /// Number of cells sharing a component with the given cell.
    pub fn component_size(&self, id: usize) -> usize {
        let root = self.components.find(id);
        (0..self.node_count())
            .filter(|&ix| self.components.find(ix) == root)
            .count()
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open 4-neighbours into the same components.
    pub fn generate_components(&mut self) {
        let n = self.node_count();
        self.components = UnionFind::new(n);
        self.components_dirty = false;
        for ix in 0..n {
            // Linking right and down neighbours covers every edge once.
            for neighbour in self.open_neighbour_ids(ix) {
                if neighbour > ix {
                    self.components.union(ix, neighbour);
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.height() as i32 {
            let values = (0..self.width() as i32)
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", values)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        PathingGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }
    fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        let was_blocked = self.grid.get(x, y);
        self.grid.set(x, y, blocked);
        if blocked {
            if !was_blocked {
                self.components_dirty = true;
            }
        } else {
            let ix = y as usize * self.width() + x as usize;
            for n in self.open_neighbour_ids(ix) {
                self.components.union(ix, n);
            }
        }
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
