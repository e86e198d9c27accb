use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Winding direction of a closed loop, derived from its signed area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    /// Zero area: fewer than 3 vertices or all vertices collinear.
    Degenerate,
}

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise, with +Y up.
/// In screen space (+Y down) the signs are swapped for the same visual loop.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Classifies the winding of a polygon from the sign of its area.
#[must_use]
pub fn winding(points: &[Point2]) -> Winding {
    let area = signed_area_2d(points);
    if area.abs() < TOLERANCE {
        Winding::Degenerate
    } else if area > 0.0 {
        Winding::CounterClockwise
    } else {
        Winding::Clockwise
    }
}

/// Checks that `points` describe a usable closed loop.
///
/// Returns the signed area on success.
///
/// # Errors
///
/// Returns `GeometryError::TooFewVertices` for fewer than 3 points, or
/// `GeometryError::ZeroArea` if the loop encloses no area.
pub fn validate_loop(points: &[Point2]) -> Result<f64> {
    if points.len() < 3 {
        return Err(GeometryError::TooFewVertices {
            count: points.len(),
        }
        .into());
    }
    let area = signed_area_2d(points);
    if area.abs() < TOLERANCE {
        return Err(GeometryError::ZeroArea.into());
    }
    Ok(area)
}

/// Returns the unit tangent from `a` to `b`, or `None` for a zero-length edge.
#[must_use]
pub fn edge_tangent(a: &Point2, b: &Point2) -> Option<Vector2> {
    (b - a).try_normalize(TOLERANCE)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the right-pointing normal of a direction vector.
#[must_use]
pub fn right_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(dir.y, -dir.x)
}

/// Returns the outward normal of an edge with unit `tangent` on a polygon
/// whose signed area is `signed_area`.
///
/// Clockwise loops (negative area) face outward on the left of each edge,
/// counter-clockwise loops on the right. The same rule covers screen space:
/// flipping Y flips both the area sign and the visual side.
#[must_use]
pub fn outward_normal(tangent: &Vector2, signed_area: f64) -> Vector2 {
    if signed_area < 0.0 {
        left_normal(tangent)
    } else {
        right_normal(tangent)
    }
}

/// Z component of `incoming x outgoing`; positive for a left turn.
#[must_use]
pub fn turn_cross(incoming: &Vector2, outgoing: &Vector2) -> f64 {
    incoming.x * outgoing.y - incoming.y * outgoing.x
}

/// Returns `true` if the corner between `incoming` and `outgoing` turns the
/// same way as the polygon winds.
///
/// Straight-through corners count as convex.
#[must_use]
pub fn is_convex_corner(incoming: &Vector2, outgoing: &Vector2, signed_area: f64) -> bool {
    let cross = turn_cross(incoming, outgoing);
    if cross.abs() < TOLERANCE {
        return true;
    }
    cross * signed_area > 0.0
}
