use dense_pathfinding::Pathfinder;
use grid_util::point::Point;

// Moves an agent along a computed path at constant speed, the way a presentation layer would.
// Cells are one world unit apart; cell (x, y) sits at world position (x, y).
//
//  _____
// |S #  |
// |  # #|
// |    E|
//  _____

const SPEED: f32 = 2.5;
const DT: f32 = 0.1;

fn main() {
    let mut pathfinder = Pathfinder::new(5, 3, false);
    for (x, y) in [(2, 0), (2, 1), (4, 1)] {
        pathfinder.set(x, y, true);
    }
    let result = pathfinder
        .get_path(Point::new(0, 0), Point::new(4, 2))
        .unwrap();
    let mut waypoints = pathfinder
        .path_points(&result)
        .into_iter()
        .skip(1)
        .map(|p| (p.x as f32, p.y as f32))
        .collect::<Vec<_>>();
    waypoints.reverse();

    let mut position = (0.0f32, 0.0f32);
    let mut time = 0.0;
    while let Some(&(tx, ty)) = waypoints.last() {
        let (dx, dy) = (tx - position.0, ty - position.1);
        let distance = (dx * dx + dy * dy).sqrt();
        if distance <= SPEED * DT {
            position = (tx, ty);
            waypoints.pop();
        } else {
            position.0 += SPEED * DT * dx / distance;
            position.1 += SPEED * DT * dy / distance;
        }
        time += DT;
        println!("t={time:.1} ({:.2}, {:.2})", position.0, position.1);
    }
}
