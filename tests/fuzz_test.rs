/// Fuzzes the search by checking on many random grids that a path is found exactly when start and
/// goal share a connected component, that every returned path is valid and that A* and Dijkstra
/// agree on the optimal cost.
use dense_pathfinding::*;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> PathingGrid {
    let mut pathing_grid = PathingGrid::try_new(w, h, false).unwrap();
    for x in 0..pathing_grid.width() as i32 {
        for y in 0..pathing_grid.height() as i32 {
            pathing_grid.set(x, y, rng.gen_bool(0.3))
        }
    }
    pathing_grid.generate_components();
    pathing_grid
}

fn visualize_grid(grid: &PathingGrid, start: &Point, end: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.get(x, y) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 8;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(0);
    let astar = AstarSolver::new();
    let mut context = SearchContext::new();
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        let start = Point::new(0, 0);
        let end = Point::new(N as i32 - 1, N as i32 - 1);
        grid.set(start.x, start.y, false);
        grid.set(end.x, end.y, false);
        grid.update();

        let costs: DenseCostTable = build_cost_table(&grid);
        let result = astar
            .get_path_between_points(&grid, &costs, &mut context, start, end)
            .unwrap();
        let reachable = grid.reachable(&start, &end);
        // Show the grid if the search disagrees with the components
        if result.is_reachable() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(result.is_reachable(), reachable);
        assert!(result.explored <= grid.node_count());

        if reachable {
            assert_eq!(result.path.first(), Some(&0));
            assert_eq!(result.path.last(), Some(&(N * N - 1)));
            assert_eq!(path_cost(&costs, &result.path), result.best_cost);
            assert_eq!(result.best_cost as usize + 1, result.path.len());
        } else {
            assert!(result.best_cost.is_unreachable());
            assert_eq!(result.explored, grid.component_size(0));
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 6;
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(1);
    let mut context = SearchContext::<f64>::new();

    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let costs: DenseCostTable<f64> = build_cost_table(&grid);
        let start = rng.gen_range(0..grid.node_count());
        let goal = rng.gen_range(0..grid.node_count());

        let astar = AstarSolver::new()
            .get_path(&grid, &costs, &mut context, start, goal)
            .unwrap();
        let dijkstra = DijkstraSolver
            .get_path(&grid, &costs, &mut context, start, goal)
            .unwrap();
        assert_eq!(astar.best_cost, dijkstra.best_cost);
        assert_eq!(astar.is_reachable(), dijkstra.is_reachable());
        assert!(astar.explored <= dijkstra.explored);
    }
}

#[test]
fn dense_and_neighbour_costs_agree() {
    const N: usize = 7;
    let mut rng = StdRng::seed_from_u64(2);
    let astar = AstarSolver::new();
    let mut context = SearchContext::new();
    for _ in 0..200 {
        let grid = random_grid(N, N + 2, &mut rng);
        let start = rng.gen_range(0..grid.node_count());
        let goal = rng.gen_range(0..grid.node_count());
        let dense: DenseCostTable = build_cost_table(&grid);
        let from_table = astar
            .get_path(&grid, &dense, &mut context, start, goal)
            .unwrap();
        let on_the_fly = astar
            .get_path(&grid, &NeighbourCosts::new(&grid), &mut context, start, goal)
            .unwrap();
        assert_eq!(from_table, on_the_fly);
    }
}
