pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type. Units depend on the space (mm in model, px on screen).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Two unit directions whose cross product is below this are treated as parallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-8;
