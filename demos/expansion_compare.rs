use grid_planner::occupancy::OccupancyGrid;
use grid_planner::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};
use grid_planner::WorldPoint;

// Plans the same query with Dijkstra, exact A* and greedy-weighted A* and
// compares how much of the map each of them touches.

fn main() {
    let mut obstacles = Vec::new();
    for i in -1..=20 {
        obstacles.push(WorldPoint::new(i as f64, -1.0));
        obstacles.push(WorldPoint::new(i as f64, 20.0));
        obstacles.push(WorldPoint::new(-1.0, i as f64));
        obstacles.push(WorldPoint::new(20.0, i as f64));
    }
    for y in 0..=14 {
        obstacles.push(WorldPoint::new(8.0, y as f64));
    }
    for y in 5..=19 {
        obstacles.push(WorldPoint::new(14.0, y as f64));
    }
    let grid = OccupancyGrid::from_obstacles(&obstacles, 1.0, 0.5).unwrap();

    let start = WorldPoint::new(1.0, 1.0);
    let goal = WorldPoint::new(18.0, 18.0);
    let solvers: [(&str, Box<dyn GridSolver>); 3] = [
        ("dijkstra", Box::new(DijkstraSolver::new())),
        ("astar 1.0", Box::new(AstarSolver::new())),
        ("astar 2.5", Box::new(AstarSolver::with_weight(2.5))),
    ];
    for (name, solver) in solvers {
        match solver.plan(&grid, start, goal) {
            Ok(plan) => println!(
                "{name:>9}: cost {:.3}, {} waypoints, {} cells expanded",
                plan.cost,
                plan.waypoints.len(),
                plan.expansions.len()
            ),
            Err(e) => println!("{name:>9}: {e}"),
        }
    }
}
