//! Planning drivers on top of the search context.

pub mod astar;
pub mod dijkstra;

use grid_util::point::Point;

use crate::error::{Endpoint, PlanError, PlanResult};
use crate::occupancy::OccupancyGrid;
use crate::search::{SearchContext, SearchState};
use crate::WorldPoint;

/// A successful planning query.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    /// Waypoints from start to goal inclusive, at cell centers.
    pub waypoints: Vec<WorldPoint>,
    /// Total path cost in index units (a cardinal move costs 1).
    pub cost: f64,
    /// Cell centers in the order the search expanded them. Diagnostic
    /// output for visualization; not needed to follow the path.
    pub expansions: Vec<WorldPoint>,
}

/// A planning strategy over an [OccupancyGrid]. Implementations supply the
/// cost-to-go estimate; the default [plan](Self::plan) method owns query
/// validation and the frontier loop.
pub trait GridSolver {
    /// Estimated remaining cost between two cells, in index units.
    fn heuristic(&self, cell: &Point, goal: &Point) -> f64;

    /// Skip the search entirely when start and goal are on different
    /// connected components.
    fn component_precheck(&self) -> bool {
        true
    }

    /// Upper bound on frontier pops before the search gives up.
    fn expansion_limit(&self) -> Option<usize> {
        None
    }

    /// Plans a path between two continuous positions. Queries mapping to
    /// out-of-bounds or occupied cells are rejected before any search runs;
    /// a walled-off goal reports [PlanError::Unreachable] rather than a
    /// partial path.
    fn plan(&self, grid: &OccupancyGrid, start: WorldPoint, goal: WorldPoint) -> PlanResult<Plan> {
        let start_cell = query_cell(grid, start, Endpoint::Start)?;
        let goal_cell = query_cell(grid, goal, Endpoint::Goal)?;
        if self.component_precheck() && grid.unreachable(&start_cell, &goal_cell) {
            return Err(PlanError::Unreachable { expanded: 0 });
        }
        let mut ctx = SearchContext::new();
        let found = ctx.best_first(
            start_cell,
            |node| grid.neighbor_cells_and_cost(node),
            |cell| self.heuristic(cell, &goal_cell),
            |cell| *cell == goal_cell,
            self.expansion_limit(),
        );
        match found {
            Some((cells, cost)) => Ok(Plan {
                waypoints: cells.iter().map(|c| grid.to_world(c)).collect(),
                cost,
                expansions: ctx.expansions().iter().map(|c| grid.to_world(c)).collect(),
            }),
            None => match ctx.state() {
                SearchState::LimitReached => Err(PlanError::ExpansionLimit {
                    limit: self.expansion_limit().unwrap_or_default(),
                }),
                _ => Err(PlanError::Unreachable {
                    expanded: ctx.expansions().len(),
                }),
            },
        }
    }
}

fn query_cell(grid: &OccupancyGrid, point: WorldPoint, endpoint: Endpoint) -> PlanResult<Point> {
    let cell = grid.to_grid(&point);
    if !grid.in_bounds(&cell) {
        return Err(PlanError::OutOfBounds { endpoint, point });
    }
    if grid.is_occupied(&cell) {
        return Err(PlanError::Occupied { endpoint, point });
    }
    Ok(cell)
}
