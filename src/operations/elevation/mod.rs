mod projector;
mod span_ops;

pub use projector::{facing_spans, Direction, ElevationProjector};
pub use span_ops::{subtract_spans, total_length, union_spans, SPAN_EPSILON};
