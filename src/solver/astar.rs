use grid_util::point::Point;

use crate::solver::GridSolver;

/// A* solver: weighted Euclidean distance between cell indices as the
/// cost-to-go estimate. With the default weight of 1.0 the estimate never
/// exceeds the true remaining cost under the {1, √2} move costs, so returned
/// paths are optimal; larger weights trade optimality for fewer expansions.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_weight: f64,
    pub component_precheck: bool,
    pub max_expansions: Option<usize>,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_weight: 1.0,
            component_precheck: true,
            max_expansions: None,
        }
    }

    /// Same solver with an inflated heuristic weight.
    pub fn with_weight(heuristic_weight: f64) -> AstarSolver {
        AstarSolver {
            heuristic_weight,
            ..AstarSolver::new()
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, cell: &Point, goal: &Point) -> f64 {
        let dx = (cell.x - goal.x) as f64;
        let dy = (cell.y - goal.y) as f64;
        self.heuristic_weight * dx.hypot(dy)
    }

    fn component_precheck(&self) -> bool {
        self.component_precheck
    }

    fn expansion_limit(&self) -> Option<usize> {
        self.max_expansions
    }
}
