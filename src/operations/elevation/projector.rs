use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::span_ops::{subtract_spans, union_spans, SPAN_EPSILON};
use crate::error::{ConfigError, PlanError};
use crate::geometry::{polygon_edges, Span};
use crate::math::polygon_2d::{edge_tangent, outward_normal, signed_area_2d};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Cardinal view direction in model space (+Y is north).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit vector pointing toward this direction.
    #[must_use]
    pub fn unit(self) -> Vector2 {
        match self {
            Direction::North => Vector2::new(0.0, 1.0),
            Direction::South => Vector2::new(0.0, -1.0),
            Direction::East => Vector2::new(1.0, 0.0),
            Direction::West => Vector2::new(-1.0, 0.0),
        }
    }

    /// Coordinate of `p` on the axis perpendicular to this direction.
    #[must_use]
    pub fn axis_coord(self, p: &Point2) -> f64 {
        match self {
            Direction::North | Direction::South => p.x,
            Direction::East | Direction::West => p.y,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            _ => Err(ConfigError::UnknownDirection(s.to_owned()).into()),
        }
    }
}

/// Projects every edge of `polygon` that faces `direction` onto the
/// perpendicular axis.
///
/// An edge faces the direction when its outward normal has a positive dot
/// product with it. Spans come back in edge order, unmerged. Polygons with
/// fewer than 3 vertices or zero area have no facing edges.
#[must_use]
pub fn facing_spans(polygon: &[Point2], direction: Direction) -> Vec<Span> {
    let area = signed_area_2d(polygon);
    if polygon.len() < 3 || area.abs() < TOLERANCE {
        return Vec::new();
    }
    let toward = direction.unit();

    polygon_edges(polygon)
        .filter_map(|seg| {
            let tangent = edge_tangent(&seg.start, &seg.end)?;
            let normal = outward_normal(&tangent, area);
            (normal.dot(&toward) > TOLERANCE).then(|| {
                Span::new(
                    direction.axis_coord(&seg.start),
                    direction.axis_coord(&seg.end),
                )
            })
        })
        .collect()
}

/// Derives elevation outlines for one view direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationProjector {
    direction: Direction,
    epsilon: f64,
}

impl ElevationProjector {
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            epsilon: SPAN_EPSILON,
        }
    }

    /// Sets the merge/trim tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Merged extent of the edges of `polygon` facing the view direction.
    #[must_use]
    pub fn facing(&self, polygon: &[Point2]) -> Vec<Span> {
        union_spans(&facing_spans(polygon, self.direction), self.epsilon)
    }

    /// Wall sections of `wall` seen from the view direction that are not
    /// shadowed by any of the `occluders` (e.g. roof outlines of higher floors).
    #[must_use]
    pub fn visible_spans<'a, I>(&self, wall: &[Point2], occluders: I) -> Vec<Span>
    where
        I: IntoIterator<Item = &'a [Point2]>,
    {
        let shadow: Vec<Span> = occluders
            .into_iter()
            .flat_map(|outline| facing_spans(outline, self.direction))
            .collect();
        subtract_spans(&self.facing(wall), &shadow, self.epsilon)
    }
}
