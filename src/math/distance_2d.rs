use super::Point2;

/// Returns the point on segment `a`-`b` closest to `p`.
///
/// The projection is clamped to the segment; a zero-length segment yields `a`.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < 1e-20 {
        return *a;
    }
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    a + d * t
}

/// Returns the minimum distance from `p` to the segment `a`-`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    (p - closest_point_on_segment(p, a, b)).norm()
}
