//! Occupancy grid built from a continuous obstacle point set.

use core::fmt;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::GridError;
use crate::{WorldPoint, CARDINAL_COST, DIAGONAL_COST, N_SMALLVEC_SIZE};

/// [OccupancyGrid] discretizes an obstacle point set into [bool] occupancy
/// values in a [BoolGrid] covering the obstacle bounding box, where a cell is
/// occupied ([true]) when its center lies within the robot radius of any
/// obstacle point. It owns the world-to-grid coordinate mapping and maintains
/// information about connected components of free cells using a [UnionFind]
/// structure, so callers can rule out unreachable queries without
/// flood-filling.
///
/// Immutable once built.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    resolution: f64,
}

impl OccupancyGrid {
    /// Builds the grid from obstacle points, a cell resolution and a robot
    /// radius. The bounding box is snapped to whole units with [f64::round]
    /// so cell alignment does not depend on sub-unit obstacle jitter, and
    /// `width = round((max - min) / resolution)` per axis.
    ///
    /// Marking runs a brute-force distance scan over every cell and obstacle
    /// pair; exact membership semantics, sized for maps of this kind.
    pub fn from_obstacles(
        obstacles: &[WorldPoint],
        resolution: f64,
        robot_radius: f64,
    ) -> Result<OccupancyGrid, GridError> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(GridError::NonPositiveResolution(resolution));
        }
        if !robot_radius.is_finite() || robot_radius < 0.0 {
            return Err(GridError::NegativeRadius(robot_radius));
        }
        if obstacles.is_empty() {
            return Err(GridError::EmptyObstacleSet);
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in obstacles {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        let (min_x, min_y) = (min_x.round(), min_y.round());
        let (max_x, max_y) = (max_x.round(), max_y.round());
        let width = ((max_x - min_x) / resolution).round() as usize;
        let height = ((max_y - min_y) / resolution).round() as usize;

        let mut grid = BoolGrid::new(width, height, false);
        for ix in 0..width {
            for iy in 0..height {
                let center = WorldPoint::new(
                    ix as f64 * resolution + min_x,
                    iy as f64 * resolution + min_y,
                );
                if obstacles.iter().any(|o| o.distance(&center) <= robot_radius) {
                    grid.set(ix, iy, true);
                }
            }
        }
        info!(
            "built {}x{} occupancy grid over [{}, {})x[{}, {}) at resolution {}",
            width, height, min_x, max_x, min_y, max_y, resolution
        );

        let mut built = OccupancyGrid {
            grid,
            components: UnionFind::new(width * height),
            min_x,
            min_y,
            max_x,
            max_y,
            resolution,
        };
        built.generate_components();
        Ok(built)
    }

    pub fn width(&self) -> usize {
        self.grid.width
    }

    pub fn height(&self) -> usize {
        self.grid.height
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Lower-left and upper-right corner of the snapped bounding box.
    pub fn bounds(&self) -> (WorldPoint, WorldPoint) {
        (
            WorldPoint::new(self.min_x, self.min_y),
            WorldPoint::new(self.max_x, self.max_y),
        )
    }

    /// Continuous center of a cell, the canonical representative of every
    /// position that [to_grid](Self::to_grid) rounds into it.
    pub fn to_world(&self, cell: &Point) -> WorldPoint {
        WorldPoint::new(
            cell.x as f64 * self.resolution + self.min_x,
            cell.y as f64 * self.resolution + self.min_y,
        )
    }

    /// Nearest cell to a continuous position. The result may lie outside the
    /// grid; check with [in_bounds](Self::in_bounds).
    pub fn to_grid(&self, point: &WorldPoint) -> Point {
        Point::new(
            ((point.x - self.min_x) / self.resolution).round() as i32,
            ((point.y - self.min_y) / self.resolution).round() as i32,
        )
    }

    /// A cell is in bounds when its center lies inside the half-open world
    /// box. The backing array bound is checked as well: the width is a
    /// rounded quotient, so the two can disagree on the last cell.
    pub fn in_bounds(&self, cell: &Point) -> bool {
        if cell.x < 0
            || cell.y < 0
            || !self.grid.index_in_bounds(cell.x as usize, cell.y as usize)
        {
            return false;
        }
        let pos = self.to_world(cell);
        pos.x >= self.min_x && pos.x < self.max_x && pos.y >= self.min_y && pos.y < self.max_y
    }

    /// Whether the cell is blocked by an inflated obstacle. Cells outside the
    /// backing array are not occupied; they fail [in_bounds](Self::in_bounds)
    /// instead.
    pub fn is_occupied(&self, cell: &Point) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && self.grid.index_in_bounds(cell.x as usize, cell.y as usize)
            && self.grid.get(cell.x as usize, cell.y as usize)
    }

    pub fn can_move_to(&self, cell: Point) -> bool {
        self.in_bounds(&cell) && !self.grid.get(cell.x as usize, cell.y as usize)
    }

    /// The reachable 8-neighbourhood of a cell with move costs: cardinal
    /// moves cost [CARDINAL_COST], diagonal moves [DIAGONAL_COST]. Only the
    /// destination cell is checked, so cutting past a blocked corner is
    /// allowed.
    pub fn neighbor_cells_and_cost(&self, cell: &Point) -> SmallVec<[(Point, f64); N_SMALLVEC_SIZE]> {
        cell.moore_neighborhood()
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .map(|p| {
                let cost = if cell.dir_obj(&p).diagonal() {
                    DIAGONAL_COST
                } else {
                    CARDINAL_COST
                };
                (p, cost)
            })
            .collect()
    }

    fn get_ix_point(&self, point: &Point) -> usize {
        self.grid.get_ix(point.x as usize, point.y as usize)
    }

    /// Retrieves the component id a given cell belongs to.
    pub fn get_component(&self, cell: &Point) -> usize {
        self.components.find(self.get_ix_point(cell))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            !self
                .components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
        } else {
            true
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid
    /// neighbours to the same components. Adjacency mirrors the motion
    /// model: diagonal steps join components even across blocked corners.
    fn generate_components(&mut self) {
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                if self.grid.get(x as usize, y as usize) {
                    continue;
                }
                let point = Point::new(x, y);
                if !self.in_bounds(&point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                let forward = [
                    Point::new(point.x + 1, point.y),
                    Point::new(point.x, point.y + 1),
                    Point::new(point.x + 1, point.y + 1),
                    Point::new(point.x + 1, point.y - 1),
                ];
                let neighbours: Vec<Point> = forward
                    .into_iter()
                    .filter(|p| self.can_move_to(*p))
                    .collect();
                for p in neighbours {
                    self.components.union(parent_ix, self.get_ix_point(&p));
                }
            }
        }
        info!("generated connected components for {} cells", w * h);
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height {
            let values = (0..self.grid.width)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
