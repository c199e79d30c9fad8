use dense_pathfinding::{build_heuristic_table, search, Pathfinder};
use std::sync::Arc;
use std::thread;

// Several searches run on worker threads against one cost table snapshot. Each worker computes
// its own heuristic table; the snapshot itself is read-only.

fn main() {
    let mut pathfinder = Pathfinder::new(16, 16, false);
    for y in 0..14 {
        pathfinder.set(8, y, true);
    }
    let costs = pathfinder.cost_snapshot();
    let grid = Arc::new(pathfinder.grid().clone());
    let n = grid.node_count();

    let handles = (0..4)
        .map(|worker| {
            let costs = Arc::clone(&costs);
            let grid = Arc::clone(&grid);
            thread::spawn(move || {
                let goal = n - 1 - worker * 16;
                let heuristic = build_heuristic_table(&grid, goal)?;
                search(costs.as_ref(), &heuristic, n, 0, goal).map(|result| (goal, result))
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        match handle.join() {
            Ok(Ok((goal, result))) => println!(
                "goal {goal}: cost {}, {} cells settled",
                result.best_cost, result.explored
            ),
            Ok(Err(err)) => println!("search failed: {err}"),
            Err(_) => println!("worker panicked"),
        }
    }
}
