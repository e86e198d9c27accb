use serde::{Deserialize, Serialize};

use super::Segment2;
use crate::math::Point2;

/// An axis-aligned bounding box in 2D.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Creates a box of the given size centred on `center`.
    ///
    /// Negative sizes are clamped to zero.
    #[must_use]
    pub fn from_center(center: Point2, width: f64, height: f64) -> Self {
        let hw = width.max(0.0) * 0.5;
        let hh = height.max(0.0) * 0.5;
        Self {
            min: Point2::new(center.x - hw, center.y - hh),
            max: Point2::new(center.x + hw, center.y + hh),
        }
    }

    /// Inclusive point containment.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if the two boxes share any area or boundary.
    #[must_use]
    pub fn intersects(&self, other: &Aabb2) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Approximate segment test: samples `samples + 1` points along the
    /// segment and reports whether any of them falls inside the box.
    ///
    /// Cheaper than an exact clip and adequate for label-sized boxes, but can
    /// miss a segment that only grazes a corner between two samples.
    #[must_use]
    pub fn hit_by_segment(&self, segment: &Segment2, samples: usize) -> bool {
        segment.sample_points(samples).any(|p| self.contains(&p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_center_is_symmetric() {
        let b = Aabb2::from_center(Point2::new(10.0, 5.0), 4.0, 2.0);
        assert_eq!(b.min, Point2::new(8.0, 4.0));
        assert_eq!(b.max, Point2::new(12.0, 6.0));
    }

    #[test]
    fn intersects_touching_and_disjoint() {
        let a = Aabb2::from_center(Point2::new(0.0, 0.0), 2.0, 2.0);
        let b = Aabb2::from_center(Point2::new(2.0, 0.0), 2.0, 2.0);
        let c = Aabb2::from_center(Point2::new(5.0, 0.0), 2.0, 2.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn sampled_segment_hits() {
        let b = Aabb2::from_center(Point2::new(50.0, 0.0), 10.0, 10.0);
        let through = Segment2::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0));
        let above = Segment2::new(Point2::new(0.0, 20.0), Point2::new(100.0, 20.0));
        assert!(b.hit_by_segment(&through, 16));
        assert!(!b.hit_by_segment(&above, 16));
    }
}
