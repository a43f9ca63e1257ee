use std::collections::HashSet;

use grid_planner::occupancy::OccupancyGrid;
use grid_planner::solver::{astar::AstarSolver, GridSolver};
use grid_planner::WorldPoint;

// In this example a path is planned across a 10x10 field with a wall on
// column 5 that leaves a single gap:
//
// ..........
// .....#...G
// .....#....
// .....#....
// .....#....
// ..........
// .....#....
// .....#....
// .S...#....
// ..........
//
// - # marks an inflated obstacle cell
// - S marks the start
// - G marks the goal

fn main() {
    let mut obstacles = Vec::new();
    for i in -1..=10 {
        obstacles.push(WorldPoint::new(i as f64, -1.0));
        obstacles.push(WorldPoint::new(i as f64, 10.0));
        obstacles.push(WorldPoint::new(-1.0, i as f64));
        obstacles.push(WorldPoint::new(10.0, i as f64));
    }
    for y in 1..=8 {
        if y != 4 {
            obstacles.push(WorldPoint::new(5.0, y as f64));
        }
    }
    let grid = OccupancyGrid::from_obstacles(&obstacles, 1.0, 0.5).unwrap();

    let start = WorldPoint::new(1.0, 1.0);
    let goal = WorldPoint::new(9.0, 8.0);
    let solver = AstarSolver::new();
    let plan = solver.plan(&grid, start, goal).unwrap();

    println!(
        "Found a path of cost {:.3} after expanding {} cells:",
        plan.cost,
        plan.expansions.len()
    );
    let on_path: HashSet<(i32, i32)> = plan
        .waypoints
        .iter()
        .map(|p| {
            let cell = grid.to_grid(p);
            (cell.x, cell.y)
        })
        .collect();
    let start_cell = grid.to_grid(&start);
    let goal_cell = grid.to_grid(&goal);
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let cell = grid_util::point::Point::new(x, y);
            if cell == start_cell {
                print!("S");
            } else if cell == goal_cell {
                print!("G");
            } else if on_path.contains(&(x, y)) {
                print!("*");
            } else if grid.is_occupied(&cell) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
    for p in plan.waypoints {
        println!("{}", p);
    }
}
