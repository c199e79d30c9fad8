use dense_pathfinding::{AstarSolver, DijkstraSolver, GridSolver, Pathfinder, PathingGrid};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;

// The heuristic_factor scales the heuristic, causing cells that are closer to the goal (ignoring
// obstacles) to be settled sooner than in normal operation. This is called Weighted A* and it
// settles fewer cells at the price of possibly longer paths. A factor of 0 is Dijkstra.

fn build_grid() -> PathingGrid {
    const N: i32 = 20;
    let mut grid = PathingGrid::square(N as usize, false).unwrap();
    for i in 3..N - 3 {
        grid.set(i, N / 2, true);
        grid.set(N / 2, i, true);
    }
    grid.set(N / 2, N / 2 + 2, false);
    grid.generate_components();
    grid
}

fn run<S: GridSolver>(name: &str, solver: S) {
    let mut pathfinder = Pathfinder::with_solver(build_grid(), solver);
    let start = Point::new(1, 1);
    let end = Point::new(17, 16);
    let result = pathfinder.get_path(start, end).unwrap();
    println!(
        "{name}: cost {}, {} cells settled, {} cells on path",
        result.best_cost,
        result.explored,
        result.path.len()
    );
}

fn main() {
    println!("{}", build_grid());
    run("Dijkstra", DijkstraSolver);
    for factor in [1.0, 1.5, 3.0] {
        run(&format!("A* x{factor}"), AstarSolver::weighted(factor));
    }
}
