use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::DimensionLine;
use crate::geometry::{polygon_edges, Aabb2, Segment2};
use crate::math::distance_2d::closest_point_on_segment;
use crate::math::Point2;

/// Fixed text metrics used to size label boxes without a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelMetrics {
    pub char_width: f64,
    pub line_height: f64,
    pub padding: f64,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 14.0,
            padding: 2.0,
        }
    }
}

impl LabelMetrics {
    /// Width and height of the box around `text`.
    #[must_use]
    pub fn box_size(&self, text: &str) -> (f64, f64) {
        #[allow(clippy::cast_precision_loss)]
        let chars = text.chars().count() as f64;
        (
            chars * self.char_width + 2.0 * self.padding,
            self.line_height + 2.0 * self.padding,
        )
    }
}

/// Options for [`layout_labels`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelLayoutOptions {
    /// Distance a label moves per push.
    pub step: f64,
    /// Maximum number of pushes per label.
    pub max_iterations: usize,
    /// Displacement beyond which a leader line is emitted.
    pub leader_threshold: f64,
    /// Segments are tested at `segment_samples + 1` points.
    pub segment_samples: usize,
    pub metrics: LabelMetrics,
}

impl Default for LabelLayoutOptions {
    fn default() -> Self {
        Self {
            step: 10.0,
            max_iterations: 10,
            leader_threshold: 6.0,
            segment_samples: 16,
            metrics: LabelMetrics::default(),
        }
    }
}

/// Final position of one dimension label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPlacement {
    pub edge_index: usize,
    pub edge_id: String,
    pub position: Point2,
    pub bounds: Aabb2,
    /// From the nearest point on the dimension line to the moved label.
    pub leader: Option<Segment2>,
}

/// Places dimension labels, pushing overlapping ones outward.
///
/// Labels are handled in order. Each starts at its line's text anchor and is
/// tested against earlier labels, the `outline` edges and every other
/// dimension line; on overlap it moves `step` along the line's normal, at
/// most `max_iterations` times. A label that is still blocked after the last
/// push keeps that position.
#[must_use]
pub fn layout_labels(
    lines: &[DimensionLine],
    outline: &[Point2],
    options: &LabelLayoutOptions,
) -> Vec<LabelPlacement> {
    let outline_edges: Vec<Segment2> = polygon_edges(outline).collect();
    let dimension_segments: Vec<Segment2> = lines
        .iter()
        .map(|line| Segment2::new(line.start, line.end))
        .collect();
    let step = if options.step.is_finite() { options.step.max(0.0) } else { 0.0 };

    let obstacles = Obstacles {
        outline: &outline_edges,
        dimensions: &dimension_segments,
        samples: options.segment_samples,
    };

    let mut placed: Vec<Aabb2> = Vec::with_capacity(lines.len());
    let mut result = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        let (width, height) = options.metrics.box_size(&line.label);
        let natural = line.text_anchor;
        let mut position = natural;
        let mut bounds = Aabb2::from_center(position, width, height);
        let mut pushes = 0;

        let mut blocked = obstacles.hit(&bounds, i, &placed);
        while blocked && pushes < options.max_iterations {
            position += line.normal * step;
            bounds = Aabb2::from_center(position, width, height);
            pushes += 1;
            blocked = obstacles.hit(&bounds, i, &placed);
        }
        if blocked {
            debug!(edge = line.edge_index, pushes, "label still overlaps after push budget");
        } else if pushes > 0 {
            trace!(edge = line.edge_index, pushes, "label pushed clear");
        }

        let leader = ((position - natural).norm() > options.leader_threshold).then(|| {
            Segment2::new(closest_point_on_segment(&position, &line.start, &line.end), position)
        });

        placed.push(bounds);
        result.push(LabelPlacement {
            edge_index: line.edge_index,
            edge_id: line.edge_id.clone(),
            position,
            bounds,
            leader,
        });
    }

    result
}

struct Obstacles<'a> {
    outline: &'a [Segment2],
    dimensions: &'a [Segment2],
    samples: usize,
}

impl Obstacles<'_> {
    /// A label's own dimension line is not an obstacle.
    fn hit(&self, bounds: &Aabb2, own: usize, placed: &[Aabb2]) -> bool {
        placed.iter().any(|other| bounds.intersects(other))
            || self
                .outline
                .iter()
                .any(|seg| bounds.hit_by_segment(seg, self.samples))
            || self
                .dimensions
                .iter()
                .enumerate()
                .any(|(j, seg)| j != own && bounds.hit_by_segment(seg, self.samples))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::dimension::{
        compute_for_edges, compute_for_polygon, DimensionEdge, DimensionOptions,
    };
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-9;

    #[test]
    fn lone_label_stays_at_anchor() {
        let edges = [DimensionEdge::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0))];
        let lines = compute_for_edges(&edges, &DimensionOptions::default().with_offset(10.0));
        let labels = layout_labels(&lines, &[], &LabelLayoutOptions::default());
        assert_eq!(labels.len(), 1);
        assert_abs_diff_eq!(labels[0].position, Point2::new(50.0, 10.0), epsilon = TOL);
        assert!(labels[0].leader.is_none());
    }

    #[test]
    fn crowded_labels_are_pushed_apart_with_leaders() {
        // Two parallel edges 4 apart: each label box straddles the other line.
        let edges = [
            DimensionEdge::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)),
            DimensionEdge::new(Point2::new(0.0, 4.0), Point2::new(100.0, 4.0)),
        ];
        let lines = compute_for_edges(&edges, &DimensionOptions::default().with_offset(10.0));
        let labels = layout_labels(&lines, &[], &LabelLayoutOptions::default());

        assert_abs_diff_eq!(labels[0].position, Point2::new(50.0, 30.0), epsilon = TOL);
        assert_abs_diff_eq!(labels[1].position, Point2::new(50.0, 54.0), epsilon = TOL);
        assert!(!labels[0].bounds.intersects(&labels[1].bounds));

        let leader = labels[1].leader.unwrap();
        assert_abs_diff_eq!(leader.start, Point2::new(50.0, 14.0), epsilon = TOL);
        assert_abs_diff_eq!(leader.end, labels[1].position, epsilon = TOL);
    }

    #[test]
    fn labels_clear_the_outline() {
        // A tall narrow box: labels of the vertical sides overlap the walls.
        let poly = vec![
            Point2::new(0.0, 0.0),
            Point2::new(40.0, 0.0),
            Point2::new(40.0, 400.0),
            Point2::new(0.0, 400.0),
        ];
        let lines = compute_for_polygon(&poly, &DimensionOptions::default());
        let labels = layout_labels(&lines, &poly, &LabelLayoutOptions::default());

        let right = &labels[1];
        // "400.0" is 39 wide; from x = 56 it reaches the wall, one push clears it.
        assert_abs_diff_eq!(right.position, Point2::new(66.0, 200.0), epsilon = TOL);
        assert!(right.leader.is_some());
        for label in &labels {
            for seg in polygon_edges(&poly) {
                assert!(!label.bounds.hit_by_segment(&seg, 16));
            }
        }
    }

    #[test]
    fn push_budget_bounds_the_search() {
        let edges = [
            DimensionEdge::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)),
            DimensionEdge::new(Point2::new(0.0, 4.0), Point2::new(100.0, 4.0)),
        ];
        let lines = compute_for_edges(&edges, &DimensionOptions::default().with_offset(10.0));
        let options = LabelLayoutOptions {
            max_iterations: 1,
            ..LabelLayoutOptions::default()
        };
        let labels = layout_labels(&lines, &[], &options);
        // One push only: the first label still straddles the second line.
        assert_abs_diff_eq!(labels[0].position, Point2::new(50.0, 20.0), epsilon = TOL);
        assert!(labels[0].leader.is_some());

        let frozen = LabelLayoutOptions {
            step: -5.0,
            ..LabelLayoutOptions::default()
        };
        let labels = layout_labels(&lines, &[], &frozen);
        assert_abs_diff_eq!(labels[0].position, lines[0].text_anchor, epsilon = TOL);
        assert!(labels[0].leader.is_none());
    }

    #[test]
    fn box_size_from_metrics() {
        let (w, h) = LabelMetrics::default().box_size("3640.0");
        assert_abs_diff_eq!(w, 46.0);
        assert_abs_diff_eq!(h, 18.0);
    }
}
