pub mod aabb;
pub mod segment;
pub mod span;

pub use aabb::Aabb2;
pub use segment::{polygon_edges, Segment2};
pub use span::Span;
