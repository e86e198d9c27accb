use super::polygon_offset::offset_lines;
use super::EdgeDistances;
use crate::math::Point2;

/// Render-ready eave line for one polygon edge.
///
/// An end is `joined` when it was moved to the intersection with the
/// neighbouring edge's offset line. Unjoined ends sit at the raw parallel
/// offset point, where the renderer draws an elbow back to the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaveSegment {
    pub edge: usize,
    pub distance: f64,
    pub start: Point2,
    pub end: Point2,
    pub start_joined: bool,
    pub end_joined: bool,
}

/// Computes one eave segment per polygon edge.
///
/// Each end of edge `i` is extended or trimmed to meet the previous/next
/// edge's offset line only when that neighbour has a positive distance and
/// the lines are not parallel. Zero-distance edges are still returned, lying
/// on the source edge. Fewer than 3 vertices or zero area yield no segments.
#[must_use]
pub fn eave_segments(polygon: &[Point2], distances: &EdgeDistances) -> Vec<EaveSegment> {
    let lines = offset_lines(polygon, distances);
    let n = lines.len();

    (0..n)
        .map(|i| {
            let line = &lines[i];
            let prev = &lines[(i + n - 1) % n];
            let next = &lines[(i + 1) % n];

            let start_hit = (prev.distance > 0.0).then(|| prev.intersect(line)).flatten();
            let end_hit = (next.distance > 0.0).then(|| line.intersect(next)).flatten();

            EaveSegment {
                edge: i,
                distance: line.distance,
                start: start_hit.unwrap_or(line.start),
                end: end_hit.unwrap_or(line.end),
                start_joined: start_hit.is_some(),
                end_joined: end_hit.is_some(),
            }
        })
        .collect()
}
