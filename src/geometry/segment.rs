use serde::{Deserialize, Serialize};

use crate::math::{Point2, Vector2};

/// A finite line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns `samples + 1` evenly spaced points from `start` to `end` inclusive.
    ///
    /// `samples == 0` yields just the start point.
    pub fn sample_points(&self, samples: usize) -> impl Iterator<Item = Point2> + '_ {
        let delta = self.delta();
        (0..=samples).map(move |k| {
            #[allow(clippy::cast_precision_loss)]
            let t = if samples == 0 { 0.0 } else { k as f64 / samples as f64 };
            self.start + delta * t
        })
    }
}

/// Iterates the closing edges of a polygon as segments.
pub fn polygon_edges(points: &[Point2]) -> impl Iterator<Item = Segment2> + '_ {
    let n = points.len();
    let count = if n < 2 { 0 } else { n };
    (0..count).map(move |i| Segment2::new(points[i], points[(i + 1) % n]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sample_points_cover_both_ends() {
        let seg = Segment2::new(Point2::new(0.0, 0.0), Point2::new(16.0, 0.0));
        let pts: Vec<Point2> = seg.sample_points(16).collect();
        assert_eq!(pts.len(), 17);
        assert_abs_diff_eq!(pts[0], seg.start);
        assert_abs_diff_eq!(pts[16], seg.end);
        assert_abs_diff_eq!(pts[3].x, 3.0);
    }

    #[test]
    fn polygon_edges_wrap_around() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
        ];
        let edges: Vec<Segment2> = polygon_edges(&pts).collect();
        assert_eq!(edges.len(), 3);
        assert_abs_diff_eq!(edges[2].end, pts[0]);
        assert_abs_diff_eq!(edges[1].length(), 2.0);
        assert_eq!(polygon_edges(&pts[..1]).count(), 0);
    }
}
