use criterion::{criterion_group, criterion_main, Criterion};
use grid_planner::occupancy::OccupancyGrid;
use grid_planner::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};
use grid_planner::WorldPoint;
use rand::prelude::*;
use std::hint::black_box;

fn random_field(n: i32, rng: &mut StdRng) -> OccupancyGrid {
    let mut obstacles = Vec::new();
    for i in -1..=n {
        obstacles.push(WorldPoint::new(i as f64, -1.0));
        obstacles.push(WorldPoint::new(i as f64, n as f64));
        obstacles.push(WorldPoint::new(-1.0, i as f64));
        obstacles.push(WorldPoint::new(n as f64, i as f64));
    }
    for x in 0..n - 1 {
        for y in 0..n - 1 {
            if (x, y) != (0, 0) && (x, y) != (n - 2, n - 2) && rng.gen_bool(0.2) {
                obstacles.push(WorldPoint::new(x as f64, y as f64));
            }
        }
    }
    OccupancyGrid::from_obstacles(&obstacles, 1.0, 0.5).unwrap()
}

fn solver_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let n = 64;
    let grid = random_field(n, &mut rng);
    let start = WorldPoint::new(0.0, 0.0);
    let goal = WorldPoint::new((n - 2) as f64, (n - 2) as f64);
    let astar = AstarSolver::new();
    let dijkstra = DijkstraSolver::new();

    c.bench_function("64x64 random field, astar", |b| {
        b.iter(|| black_box(astar.plan(&grid, start, goal)))
    });
    c.bench_function("64x64 random field, dijkstra", |b| {
        b.iter(|| black_box(dijkstra.plan(&grid, start, goal)))
    });
}

criterion_group!(benches, solver_bench);
criterion_main!(benches);
