use thiserror::Error;

/// Top-level error type for the planline geometry core.
///
/// The geometric operations themselves never fail; these errors are only
/// produced by strict constructors and validators.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors describing polygons that cannot be used as a valid outline.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("polygon has zero signed area")]
    ZeroArea,
}

/// Errors related to configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("viewport size {width} x {height} must be positive and finite")]
    InvalidViewport { width: f64, height: f64 },

    #[error("scale {0} px/mm must be positive and finite")]
    InvalidScale(f64),

    #[error("zoom range [{min}, {max}] is invalid")]
    InvalidZoomRange { min: f64, max: f64 },

    #[error("unknown direction: {0}")]
    UnknownDirection(String),
}

/// Convenience type alias for results using [`PlanError`].
pub type Result<T> = std::result::Result<T, PlanError>;
