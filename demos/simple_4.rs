use dense_pathfinding::Pathfinder;
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut pathfinder = Pathfinder::new(3, 3, false);
    pathfinder.set(1, 1, true);
    println!("{}", pathfinder);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let result = pathfinder.get_path(start, end).unwrap();
    println!(
        "Cost {} after settling {} cells",
        result.best_cost, result.explored
    );
    println!("Path:");
    for p in pathfinder.path_points(&result) {
        println!("{:?}", p);
    }
}
