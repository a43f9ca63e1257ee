//! Typed failures for grid construction and planning queries.

use core::fmt;
use thiserror::Error;

use crate::WorldPoint;

/// Result type alias for planning queries.
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors detected while building an
/// [OccupancyGrid](crate::occupancy::OccupancyGrid).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// The cell resolution must be a positive, finite length.
    #[error("resolution must be positive and finite, got {0}")]
    NonPositiveResolution(f64),

    /// The robot radius must be a non-negative, finite length.
    #[error("robot radius must be non-negative and finite, got {0}")]
    NegativeRadius(f64),

    /// Without obstacle points the bounding box is undefined.
    #[error("obstacle set is empty, bounding box is undefined")]
    EmptyObstacleSet,
}

/// Which end of a planning query a rejection refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Failures of a single plan query. All of them are detected before any
/// partial path is handed out.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    /// The query point maps to a cell outside the grid bounds.
    #[error("{endpoint} {point} lies outside the grid bounds")]
    OutOfBounds { endpoint: Endpoint, point: WorldPoint },

    /// The query point maps to a cell blocked by an inflated obstacle.
    #[error("{endpoint} {point} maps to an occupied cell")]
    Occupied { endpoint: Endpoint, point: WorldPoint },

    /// The goal is walled off from the start. An expected outcome, reported
    /// after `expanded` frontier pops (zero when the component pre-check
    /// rules the query out without searching).
    #[error("goal is unreachable from start after expanding {expanded} cells")]
    Unreachable { expanded: usize },

    /// The expansion budget ran out before the goal was reached.
    #[error("expansion limit of {limit} cells reached before the goal")]
    ExpansionLimit { limit: usize },
}
