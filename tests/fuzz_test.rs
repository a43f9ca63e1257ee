//! Fuzzes the planner by checking for many random obstacle fields that a
//! path is found exactly when the goal shares the start's connected
//! component, that returned paths are valid under the motion model, and that
//! Dijkstra, unit-weight A* and an exhaustive relaxation reference agree on
//! the optimal cost.

use grid_planner::error::PlanError;
use grid_planner::occupancy::OccupancyGrid;
use grid_planner::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver, Plan};
use grid_planner::{WorldPoint, CARDINAL_COST, DIAGONAL_COST};
use grid_util::point::Point;
use rand::prelude::*;

const N: i32 = 8;

fn random_obstacles(rng: &mut StdRng) -> Vec<WorldPoint> {
    let mut obstacles = Vec::new();
    for i in -1..=N {
        obstacles.push(WorldPoint::new(i as f64, -1.0));
        obstacles.push(WorldPoint::new(i as f64, N as f64));
        obstacles.push(WorldPoint::new(-1.0, i as f64));
        obstacles.push(WorldPoint::new(N as f64, i as f64));
    }
    for x in 0..N - 1 {
        for y in 0..N - 1 {
            if (x, y) != (0, 0) && (x, y) != (N - 2, N - 2) && rng.gen_bool(0.35) {
                obstacles.push(WorldPoint::new(x as f64, y as f64));
            }
        }
    }
    obstacles
}

fn visualize_grid(grid: &OccupancyGrid, start: &Point, end: &Point) {
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_occupied(&p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Exhaustive edge relaxation until fixpoint; the reference optimum.
fn brute_force_cost(grid: &OccupancyGrid, start: Point, goal: Point) -> Option<f64> {
    let w = grid.width() as i32;
    let h = grid.height() as i32;
    let idx = |p: &Point| (p.y * w + p.x) as usize;
    let mut dist = vec![f64::INFINITY; (w * h) as usize];
    dist[idx(&start)] = 0.0;
    loop {
        let mut changed = false;
        for x in 0..w {
            for y in 0..h {
                let p = Point::new(x, y);
                if !grid.can_move_to(p) {
                    continue;
                }
                let d = dist[idx(&p)];
                if !d.is_finite() {
                    continue;
                }
                for (n, c) in grid.neighbor_cells_and_cost(&p) {
                    if d + c < dist[idx(&n)] - 1e-12 {
                        dist[idx(&n)] = d + c;
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }
    let d = dist[idx(&goal)];
    d.is_finite().then_some(d)
}

fn assert_valid_path(grid: &OccupancyGrid, plan: &Plan, start: WorldPoint, goal: WorldPoint) {
    assert_eq!(plan.waypoints[0], start);
    assert_eq!(*plan.waypoints.last().unwrap(), goal);
    let mut walked = 0.0;
    for pair in plan.waypoints.windows(2) {
        let a = grid.to_grid(&pair[0]);
        let b = grid.to_grid(&pair[1]);
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        assert!(dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0));
        walked += if dx.abs() + dy.abs() == 2 {
            DIAGONAL_COST
        } else {
            CARDINAL_COST
        };
        assert!(grid.can_move_to(b));
    }
    assert!((walked - plan.cost).abs() < 1e-9);
}

#[test]
fn fuzz() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(0);
    let dijkstra = DijkstraSolver::new();
    let mut blind = DijkstraSolver::new();
    blind.component_precheck = false;
    let astar = AstarSolver::new();
    let start = WorldPoint::new(0.0, 0.0);
    let goal = WorldPoint::new((N - 2) as f64, (N - 2) as f64);

    for _ in 0..N_GRIDS {
        let grid = OccupancyGrid::from_obstacles(&random_obstacles(&mut rng), 1.0, 0.5).unwrap();
        let start_cell = grid.to_grid(&start);
        let goal_cell = grid.to_grid(&goal);
        let reachable = grid.reachable(&start_cell, &goal_cell);

        let result = dijkstra.plan(&grid, start, goal);
        if result.is_ok() != reachable {
            visualize_grid(&grid, &start_cell, &goal_cell);
        }
        assert_eq!(result.is_ok(), reachable);
        // Frontier exhaustion and the component pre-check must agree.
        assert_eq!(blind.plan(&grid, start, goal).is_ok(), reachable);

        match result {
            Ok(plan) => {
                let reference = brute_force_cost(&grid, start_cell, goal_cell).unwrap();
                assert!((plan.cost - reference).abs() < 1e-6);
                assert_valid_path(&grid, &plan, start, goal);

                let astar_plan = astar.plan(&grid, start, goal).unwrap();
                assert!((astar_plan.cost - reference).abs() < 1e-6);
                assert_valid_path(&grid, &astar_plan, start, goal);

                // Determinism: the same query replays byte for byte.
                assert_eq!(dijkstra.plan(&grid, start, goal).unwrap(), plan);
            }
            Err(e) => assert!(matches!(e, PlanError::Unreachable { .. })),
        }
    }
}
