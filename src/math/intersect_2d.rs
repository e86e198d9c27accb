use super::{Point2, Vector2, PARALLEL_TOLERANCE};

/// Parametric intersection of two infinite lines.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Parallelism is judged on the sine of the angle between the directions, so
/// the threshold does not depend on their lengths. Zero-length directions are
/// treated as parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    let scale = d1.norm() * d2.norm();
    if scale == 0.0 || cross.abs() < PARALLEL_TOLERANCE * scale {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Intersection point of two infinite lines, `None` when parallel.
#[must_use]
pub fn line_intersection(p1: &Point2, d1: &Vector2, p2: &Point2, d2: &Vector2) -> Option<Point2> {
    line_line_intersect_2d(p1, d1, p2, d2).map(|(t, _)| point_at(p1, d1, t))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_abs_diff_eq;

    #[test]
    fn line_line_perpendicular() {
        let p1 = Point2::new(0.0, 0.0);
        let d1 = Vector2::new(1.0, 0.0);
        let p2 = Point2::new(0.5, -1.0);
        let d2 = Vector2::new(0.0, 1.0);
        let (t, u) = line_line_intersect_2d(&p1, &d1, &p2, &d2).unwrap();
        assert_abs_diff_eq!(t, 0.5, epsilon = TOLERANCE);
        assert_abs_diff_eq!(u, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        let d = Vector2::new(1.0, 0.0);
        assert!(line_line_intersect_2d(&Point2::origin(), &d, &Point2::new(0.0, 1.0), &d).is_none());
        // Antiparallel (a 180 degree fold) is parallel too.
        assert!(line_intersection(&Point2::origin(), &d, &Point2::new(5.0, 1.0), &-d).is_none());
    }

    #[test]
    fn long_directions_do_not_change_parallel_test() {
        let d1 = Vector2::new(1.0e6, 0.0);
        let d2 = Vector2::new(1.0e6, 1.0e-6);
        // The angle between them is ~1e-12 rad: parallel regardless of length.
        assert!(line_line_intersect_2d(&Point2::origin(), &d1, &Point2::new(0.0, 1.0), &d2).is_none());
    }

    #[test]
    fn near_parallel_kink_is_parallel() {
        // Sine of the angle is ~5e-9.
        let d1 = Vector2::new(1.0, 0.0);
        let d2 = Vector2::new(1000.0, -5.0e-6);
        assert!(line_line_intersect_2d(&Point2::origin(), &d1, &Point2::new(0.0, -2.0), &d2).is_none());
        let d3 = Vector2::new(1000.0, -1.0e-3);
        assert!(line_line_intersect_2d(&Point2::origin(), &d1, &Point2::new(0.0, -2.0), &d3).is_some());
    }

    #[test]
    fn zero_direction_is_parallel() {
        let zero = Vector2::zeros();
        let d = Vector2::new(0.0, 1.0);
        assert!(line_intersection(&Point2::origin(), &zero, &Point2::new(1.0, 0.0), &d).is_none());
    }

    #[test]
    fn intersection_point_of_diagonals() {
        let pt = line_intersection(
            &Point2::new(0.0, 0.0),
            &Vector2::new(2.0, 2.0),
            &Point2::new(0.0, 2.0),
            &Vector2::new(2.0, -2.0),
        )
        .unwrap();
        assert_abs_diff_eq!(pt, Point2::new(1.0, 1.0), epsilon = TOLERANCE);
    }
}
