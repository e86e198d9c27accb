use serde::{Deserialize, Serialize};

use crate::geometry::{polygon_edges, Segment2};
use crate::math::polygon_2d::{edge_tangent, left_normal, outward_normal, right_normal, signed_area_2d};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Largest number of decimals honoured when rounding values.
const MAX_DECIMALS: usize = 12;

/// Which side of its edge a dimension line sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionSide {
    Outside,
}

/// Options for dimension-line generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DimensionOptions {
    /// For [`compute_for_edges`]: the left-hand normal of each edge points outside.
    pub outside_is_left_normal: bool,
    /// Distance between an edge and its dimension line.
    pub offset: f64,
    /// Decimals kept in `value` and shown in `label`.
    pub decimals: usize,
    /// Unit tag copied onto every line for the renderer.
    pub units: String,
}

impl Default for DimensionOptions {
    fn default() -> Self {
        Self {
            outside_is_left_normal: true,
            offset: 16.0,
            decimals: 1,
            units: "px".to_owned(),
        }
    }
}

impl DimensionOptions {
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    #[must_use]
    pub fn with_outside_is_left_normal(mut self, left: bool) -> Self {
        self.outside_is_left_normal = left;
        self
    }
}

/// A measured edge. Without an `id`, its index in the input is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionEdge {
    pub a: Point2,
    pub b: Point2,
    #[serde(default)]
    pub id: Option<String>,
}

impl DimensionEdge {
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b, id: None }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A dimension line parallel to an edge, displaced to the outside.
///
/// `value` is the length of the source edge, not of the displaced line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionLine {
    pub start: Point2,
    pub end: Point2,
    pub text_anchor: Point2,
    pub value: f64,
    pub label: String,
    pub edge_id: String,
    pub edge_index: usize,
    /// Unit normal the line was displaced along; labels are pushed this way too.
    pub normal: Vector2,
    pub offset: f64,
    pub side: DimensionSide,
    pub units: String,
}

/// Builds one dimension line per edge, on the side chosen by
/// `options.outside_is_left_normal`.
///
/// Zero-length edges give a zero-length line with `value == 0`.
#[must_use]
pub fn compute_for_edges(edges: &[DimensionEdge], options: &DimensionOptions) -> Vec<DimensionLine> {
    edges
        .iter()
        .enumerate()
        .map(|(i, edge)| {
            let tangent = edge_tangent(&edge.a, &edge.b).unwrap_or_else(Vector2::zeros);
            let normal = side_normal(&tangent, options.outside_is_left_normal);
            let id = edge.id.clone().unwrap_or_else(|| i.to_string());
            build_line(i, id, &edge.a, &edge.b, normal, options)
        })
        .collect()
}

/// Builds one dimension line per polygon edge, each on the true outside.
///
/// The side is inferred from the polygon's winding, so concave and convex
/// edges are labelled consistently. Zero-area input falls back to
/// `options.outside_is_left_normal`. Edge ids are the edge indices. Fewer
/// than 3 vertices yield no lines.
#[must_use]
pub fn compute_for_polygon(polygon: &[Point2], options: &DimensionOptions) -> Vec<DimensionLine> {
    if polygon.len() < 3 {
        return Vec::new();
    }
    let area = signed_area_2d(polygon);
    polygon_edges(polygon)
        .enumerate()
        .map(|(i, seg)| {
            let tangent = edge_tangent(&seg.start, &seg.end).unwrap_or_else(Vector2::zeros);
            let normal = if area.abs() < TOLERANCE {
                side_normal(&tangent, options.outside_is_left_normal)
            } else {
                outward_normal(&tangent, area)
            };
            build_line(i, i.to_string(), &seg.start, &seg.end, normal, options)
        })
        .collect()
}

/// Looks up the line for `edge_id`, falling back to the first line.
#[must_use]
pub fn find_by_edge_id<'a>(lines: &'a [DimensionLine], edge_id: &str) -> Option<&'a DimensionLine> {
    lines
        .iter()
        .find(|line| line.edge_id == edge_id)
        .or_else(|| lines.first())
}

fn side_normal(tangent: &Vector2, left: bool) -> Vector2 {
    if left {
        left_normal(tangent)
    } else {
        right_normal(tangent)
    }
}

fn build_line(
    index: usize,
    edge_id: String,
    a: &Point2,
    b: &Point2,
    normal: Vector2,
    options: &DimensionOptions,
) -> DimensionLine {
    let shift = normal * options.offset;
    let start = a + shift;
    let end = b + shift;
    let decimals = options.decimals.min(MAX_DECIMALS);
    let value = round_to((b - a).norm(), decimals);

    DimensionLine {
        start,
        end,
        text_anchor: Segment2::new(start, end).midpoint(),
        value,
        label: format!("{value:.decimals$}"),
        edge_id,
        edge_index: index,
        normal,
        offset: options.offset,
        side: DimensionSide::Outside,
        units: options.units.clone(),
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let exp = i32::try_from(decimals).unwrap_or(0);
    let factor = 10f64.powi(exp);
    (value * factor).round() / factor
}
