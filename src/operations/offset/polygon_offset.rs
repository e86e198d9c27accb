use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::EdgeDistances;
use crate::math::intersect_2d::line_intersection;
use crate::math::polygon_2d::{edge_tangent, is_convex_corner, outward_normal, signed_area_2d};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Bevel points closer than this are emitted once.
const COINCIDENT_TOLERANCE: f64 = 1e-7;

/// Corner policy for [`offset_outer`].
///
/// Limits are multiples of the local offset distance, taken as the larger of
/// the two distances meeting at the corner. A miter point further than the
/// limit from the outgoing edge's offset start is replaced by a bevel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OffsetOptions {
    pub miter_limit: f64,
    /// `f64::INFINITY` means concave corners always miter unless parallel.
    pub concave_miter_limit: f64,
}

impl Default for OffsetOptions {
    fn default() -> Self {
        Self {
            miter_limit: 8.0,
            concave_miter_limit: f64::INFINITY,
        }
    }
}

impl OffsetOptions {
    #[must_use]
    pub fn with_miter_limit(mut self, limit: f64) -> Self {
        self.miter_limit = limit;
        self
    }

    #[must_use]
    pub fn with_concave_miter_limit(mut self, limit: f64) -> Self {
        self.concave_miter_limit = limit;
        self
    }
}

/// One polygon edge displaced along its outward normal.
///
/// Treated as an infinite line through `start` along `tangent` when joining
/// corners; `start`/`end` are the raw parallel-offset endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetLine {
    pub edge: usize,
    pub tangent: Vector2,
    pub normal: Vector2,
    pub distance: f64,
    pub start: Point2,
    pub end: Point2,
}

impl OffsetLine {
    /// Intersection with another offset line, `None` when parallel.
    #[must_use]
    pub fn intersect(&self, other: &OffsetLine) -> Option<Point2> {
        line_intersection(&self.start, &self.tangent, &other.start, &other.tangent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CornerJoin {
    Miter(Point2),
    Bevel(Point2, Point2),
}

/// Offsets a closed polygon outward by a per-edge distance.
///
/// Works for either winding and either coordinate space; the outward side
/// is derived from the signed area.
///
/// # Algorithm
///
/// 1. Build one infinite offset line per edge (see [`offset_lines`])
/// 2. At each vertex, intersect the incoming and outgoing offset lines
/// 3. Parallel lines, or miters longer than the convex/concave limit, are
///    replaced by a bevel: the incoming line's end and the outgoing line's start
///
/// Bevels make the output longer than the input, so vertex `i` of the result
/// does not in general correspond to vertex `i` of the source.
#[derive(Debug)]
pub struct PolygonOffset2D {
    points: Vec<Point2>,
    distances: EdgeDistances,
    options: OffsetOptions,
}

impl PolygonOffset2D {
    /// Creates a new polygon offset operation with default corner options.
    #[must_use]
    pub fn new(points: Vec<Point2>, distances: EdgeDistances) -> Self {
        Self {
            points,
            distances,
            options: OffsetOptions::default(),
        }
    }

    /// Sets custom corner options.
    #[must_use]
    pub fn with_options(mut self, options: OffsetOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the offset, returning the outer polygon.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        offset_outer(&self.points, &self.distances, &self.options)
    }

    /// Returns the per-edge offset lines without joining corners.
    #[must_use]
    pub fn lines(&self) -> Vec<OffsetLine> {
        offset_lines(&self.points, &self.distances)
    }
}

/// Offsets `polygon` outward. See [`PolygonOffset2D`].
///
/// Polygons with fewer than 3 vertices or zero area are returned unchanged.
#[must_use]
pub fn offset_outer(
    polygon: &[Point2],
    distances: &EdgeDistances,
    options: &OffsetOptions,
) -> Vec<Point2> {
    let n = polygon.len();
    if n < 3 {
        debug!(vertices = n, "offset skipped: fewer than 3 vertices");
        return polygon.to_vec();
    }
    let area = signed_area_2d(polygon);
    if area.abs() < TOLERANCE {
        debug!("offset skipped: polygon has zero area");
        return polygon.to_vec();
    }

    let lines = build_lines(polygon, distances, area);
    let mut out = Vec::with_capacity(n * 2);

    for i in 0..n {
        let prev = &lines[(i + n - 1) % n];
        let curr = &lines[i];
        match join_corner(prev, curr, area, options) {
            CornerJoin::Miter(p) => out.push(p),
            CornerJoin::Bevel(a, b) => {
                out.push(a);
                if (b - a).norm() > COINCIDENT_TOLERANCE {
                    out.push(b);
                }
            }
        }
    }

    out
}

/// Computes the outward offset line of every edge.
///
/// A zero-length edge borrows the tangent of the nearest preceding edge that
/// has one, so it joins its neighbours like a straight continuation. Returns
/// an empty list for fewer than 3 vertices or zero area, where no side is
/// outward.
#[must_use]
pub fn offset_lines(polygon: &[Point2], distances: &EdgeDistances) -> Vec<OffsetLine> {
    if polygon.len() < 3 {
        return Vec::new();
    }
    let area = signed_area_2d(polygon);
    if area.abs() < TOLERANCE {
        debug!("offset lines skipped: polygon has zero area");
        return Vec::new();
    }
    build_lines(polygon, distances, area)
}

fn build_lines(polygon: &[Point2], distances: &EdgeDistances, area: f64) -> Vec<OffsetLine> {
    let n = polygon.len();
    let raw: Vec<Option<Vector2>> = (0..n)
        .map(|i| edge_tangent(&polygon[i], &polygon[(i + 1) % n]))
        .collect();

    (0..n)
        .map(|i| {
            let tangent = raw[i]
                .or_else(|| (1..n).find_map(|k| raw[(i + n - k) % n]))
                .unwrap_or_else(Vector2::zeros);
            let normal = outward_normal(&tangent, area);
            let distance = distances.get(i);
            let shift = normal * distance;
            OffsetLine {
                edge: i,
                tangent,
                normal,
                distance,
                start: polygon[i] + shift,
                end: polygon[(i + 1) % n] + shift,
            }
        })
        .collect()
}

fn join_corner(
    prev: &OffsetLine,
    curr: &OffsetLine,
    area: f64,
    options: &OffsetOptions,
) -> CornerJoin {
    let Some(miter) = prev.intersect(curr) else {
        trace!(edge = curr.edge, "parallel offset lines, bevel");
        return CornerJoin::Bevel(prev.end, curr.start);
    };

    let convex = is_convex_corner(&prev.tangent, &curr.tangent, area);
    let factor = if convex {
        options.miter_limit
    } else {
        options.concave_miter_limit
    };
    let local = prev.distance.max(curr.distance);
    let miter_len = (miter - curr.start).norm();

    if exceeds_limit(miter_len, factor, local) {
        trace!(edge = curr.edge, convex, miter_len, "miter over limit, bevel");
        CornerJoin::Bevel(prev.end, curr.start)
    } else {
        CornerJoin::Miter(miter)
    }
}

/// Negative or NaN factors act as 0; an infinite factor never limits.
fn exceeds_limit(miter_len: f64, factor: f64, local_distance: f64) -> bool {
    let factor = if factor.is_nan() { 0.0 } else { factor.max(0.0) };
    if factor.is_infinite() {
        return false;
    }
    miter_len > factor * local_distance + COINCIDENT_TOLERANCE
}
