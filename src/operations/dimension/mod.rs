mod dimension_line;
mod label_layout;

pub use dimension_line::{
    compute_for_edges, compute_for_polygon, find_by_edge_id, DimensionEdge, DimensionLine,
    DimensionOptions, DimensionSide,
};
pub use label_layout::{layout_labels, LabelLayoutOptions, LabelMetrics, LabelPlacement};
