use grid_util::point::Point;

use crate::solver::GridSolver;

/// Dijkstra solver: no cost-to-go estimate, the frontier orders on
/// accumulated cost alone.
#[derive(Clone, Debug)]
pub struct DijkstraSolver {
    pub component_precheck: bool,
    pub max_expansions: Option<usize>,
}

impl DijkstraSolver {
    pub fn new() -> DijkstraSolver {
        DijkstraSolver {
            component_precheck: true,
            max_expansions: None,
        }
    }
}

impl Default for DijkstraSolver {
    fn default() -> DijkstraSolver {
        DijkstraSolver::new()
    }
}

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Point, _: &Point) -> f64 {
        0.0
    }

    fn component_precheck(&self) -> bool {
        self.component_precheck
    }

    fn expansion_limit(&self) -> Option<usize> {
        self.max_expansions
    }
}
