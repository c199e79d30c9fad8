use dense_pathfinding::{
    build_cost_table, build_heuristic_table, path_cost, search, Cost, DenseCostTable,
    HeuristicTable, PathError, PathingGrid, Pathfinder, SearchContext,
};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use std::sync::Arc;
use std::thread;

fn open_3x3() -> (PathingGrid, DenseCostTable) {
    let grid = PathingGrid::square(3, false).unwrap();
    let costs = build_cost_table(&grid);
    (grid, costs)
}

#[test]
fn corner_to_corner_on_open_grid() {
    let (grid, costs) = open_3x3();
    let heuristic = build_heuristic_table(&grid, 8).unwrap();
    let result = search(&costs, &heuristic, 9, 0, 8).unwrap();
    assert_eq!(result.best_cost, 4.0);
    assert_eq!(result.path.len(), 5);
    assert_eq!(path_cost(&costs, &result.path), 4.0);
}

#[test]
fn corner_to_corner_around_blocked_centre() {
    let mut grid = PathingGrid::square(3, false).unwrap();
    grid.set(1, 1, true);
    let costs: DenseCostTable = build_cost_table(&grid);
    let heuristic = build_heuristic_table(&grid, 8).unwrap();
    let result = search(&costs, &heuristic, 9, 0, 8).unwrap();
    assert_eq!(result.best_cost, 4.0);
    assert_eq!(result.path.len(), 5);
    assert!(!result.path.contains(&4));
}

#[test]
fn repeated_searches_are_identical() {
    let mut grid = PathingGrid::square(6, false).unwrap();
    for y in 1..6 {
        grid.set(2, y, true);
    }
    let costs: DenseCostTable = build_cost_table(&grid);
    let heuristic = build_heuristic_table(&grid, 35).unwrap();
    let first = search(&costs, &heuristic, 36, 30, 35).unwrap();
    let mut context = SearchContext::new();
    for _ in 0..5 {
        assert_eq!(context.search(&costs, &heuristic, 36, 30, 35).unwrap(), first);
    }
    assert_eq!(first.best_cost, 15.0);
}

#[test]
fn start_equals_goal_is_a_single_cell_path() {
    let (grid, costs) = open_3x3();
    for cell in 0..9 {
        let heuristic = build_heuristic_table(&grid, cell).unwrap();
        let result = search(&costs, &heuristic, 9, cell, cell).unwrap();
        assert_eq!(result.best_cost, 0.0);
        assert_eq!(result.path, vec![cell]);
        assert!(result.explored >= 1);
    }
}

#[test]
fn enclosed_goal_explores_start_component() {
    let mut grid = PathingGrid::square(5, false).unwrap();
    // Ring around (3, 3).
    for (x, y) in [(3, 2), (2, 3), (4, 3), (3, 4)] {
        grid.set(x, y, true);
    }
    grid.update();
    let costs: DenseCostTable = build_cost_table(&grid);
    let goal = grid.cell_id(&Point::new(3, 3)).unwrap();
    let heuristic = build_heuristic_table(&grid, goal).unwrap();
    let result = search(&costs, &heuristic, 25, 0, goal).unwrap();
    assert!(result.best_cost.is_unreachable());
    assert!(result.path.is_empty());
    // (4, 4) is cut off as well.
    assert_eq!(result.explored, 19);
    assert_eq!(result.explored, grid.component_size(0));
}

#[test]
fn caller_supplied_tables_must_match() {
    let (_, costs) = open_3x3();
    let err = search(&costs, &HeuristicTable::zero(9), 10, 0, 1).unwrap_err();
    assert_eq!(
        err,
        PathError::TableSizeMismatch {
            expected: 10,
            actual: 9
        }
    );
    assert!(err.to_string().contains("expected"));
}

#[test]
fn shared_table_across_threads() {
    let mut pathfinder = Pathfinder::try_new(8, 8, false).unwrap();
    for y in 0..7 {
        pathfinder.set(4, y, true);
    }
    let costs = pathfinder.cost_snapshot();
    let grid = Arc::new(pathfinder.grid().clone());
    let goals = [7, 15, 63, 56, 39];

    let sequential = goals
        .iter()
        .map(|&goal| {
            let heuristic = build_heuristic_table(&grid, goal).unwrap();
            search(costs.as_ref(), &heuristic, 64, 0, goal).unwrap()
        })
        .collect::<Vec<_>>();

    let parallel = thread::scope(|s| {
        let handles = goals
            .iter()
            .map(|&goal| {
                let costs = Arc::clone(&costs);
                let grid = Arc::clone(&grid);
                s.spawn(move || {
                    let heuristic = build_heuristic_table(&grid, goal).unwrap();
                    search(costs.as_ref(), &heuristic, 64, 0, goal).unwrap()
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    });
    assert_eq!(sequential, parallel);

    // Rebuilding after a change leaves the snapshot used above untouched.
    pathfinder.set(4, 7, true);
    let rebuilt = pathfinder.cost_snapshot();
    assert!(!Arc::ptr_eq(&costs, &rebuilt));
    assert!(pathfinder.get_path_ids(0, 7).unwrap().best_cost.is_unreachable());
    let heuristic = build_heuristic_table(&grid, 7).unwrap();
    assert_eq!(search(costs.as_ref(), &heuristic, 64, 0, 7).unwrap(), sequential[0]);
}
