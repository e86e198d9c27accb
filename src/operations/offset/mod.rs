mod eave_segments;
mod edge_distances;
mod polygon_offset;

pub use eave_segments::{eave_segments, EaveSegment};
pub use edge_distances::{EavesSettings, EdgeDistances};
pub use polygon_offset::{offset_lines, offset_outer, OffsetLine, OffsetOptions, PolygonOffset2D};
