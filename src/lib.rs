//! Geometry core of a 2D floor-plan editor.
//!
//! Pure functions over polygons given as `&[Point2]`: outward eaves offsets
//! with per-edge distances, dimension lines with label placement, pointer
//! snapping, model/screen mapping and directional elevation spans.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod view;

pub use error::{PlanError, Result};
pub use math::{Point2, Vector2};
