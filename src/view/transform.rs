//! Mapping between model space and screen space.
//!
//! Model space is in millimetres with the origin at the centre of the view
//! and +Y up. Screen space is in pixels with the origin at the top-left
//! corner and +Y down.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::math::Point2;

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidViewport` if either dimension is not
    /// positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidViewport { width, height }.into());
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Screen position of the model origin.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Maps a model point (mm) to a screen point (px).
///
/// `px_per_mm` must be positive; no clamping happens here.
#[must_use]
pub fn model_to_screen(point_mm: &Point2, viewport: &Viewport, px_per_mm: f64) -> Point2 {
    Point2::new(
        viewport.width * 0.5 + point_mm.x * px_per_mm,
        viewport.height * 0.5 - point_mm.y * px_per_mm,
    )
}

/// Exact inverse of [`model_to_screen`].
#[must_use]
pub fn screen_to_model(point_px: &Point2, viewport: &Viewport, px_per_mm: f64) -> Point2 {
    Point2::new(
        (point_px.x - viewport.width * 0.5) / px_per_mm,
        (viewport.height * 0.5 - point_px.y) / px_per_mm,
    )
}

/// Scales a model length (mm) to pixels. No origin shift or flip.
#[must_use]
pub fn length_to_screen(length_mm: f64, px_per_mm: f64) -> f64 {
    length_mm * px_per_mm
}

/// Scales a screen length (px) back to millimetres.
#[must_use]
pub fn length_to_model(length_px: f64, px_per_mm: f64) -> f64 {
    length_px / px_per_mm
}

/// Allowed zoom interval in px/mm, applied by the caller before transforming.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self { min: 0.05, max: 10.0 }
    }
}

impl ZoomRange {
    /// Creates a zoom range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidZoomRange` unless `0 < min <= max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min > 0.0 && min <= max && max.is_finite()) {
            return Err(ConfigError::InvalidZoomRange { min, max }.into());
        }
        Ok(Self { min, max })
    }

    /// Clamps a requested scale into the range. NaN maps to `min`.
    #[must_use]
    pub fn clamp(&self, px_per_mm: f64) -> f64 {
        if px_per_mm.is_nan() {
            return self.min;
        }
        // Deserialized ranges are unchecked; avoid `f64::clamp` panicking on min > max.
        px_per_mm.max(self.min).min(self.max)
    }
}

/// A viewport and a scale bundled together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    viewport: Viewport,
    px_per_mm: f64,
}

impl ViewTransform {
    /// Creates a transform.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidScale` if `px_per_mm` is not positive and finite.
    pub fn new(viewport: Viewport, px_per_mm: f64) -> Result<Self> {
        if !(px_per_mm.is_finite() && px_per_mm > 0.0) {
            return Err(ConfigError::InvalidScale(px_per_mm).into());
        }
        Ok(Self {
            viewport,
            px_per_mm,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn px_per_mm(&self) -> f64 {
        self.px_per_mm
    }

    /// Returns a copy with the scale replaced by `range.clamp(px_per_mm)`.
    #[must_use]
    pub fn with_zoom(self, px_per_mm: f64, range: &ZoomRange) -> Self {
        Self {
            px_per_mm: range.clamp(px_per_mm),
            ..self
        }
    }

    #[must_use]
    pub fn to_screen(&self, point_mm: &Point2) -> Point2 {
        model_to_screen(point_mm, &self.viewport, self.px_per_mm)
    }

    #[must_use]
    pub fn to_model(&self, point_px: &Point2) -> Point2 {
        screen_to_model(point_px, &self.viewport, self.px_per_mm)
    }

    /// Maps every vertex of a model polygon to screen space.
    ///
    /// The vertical flip reverses the sign of the signed area.
    #[must_use]
    pub fn polygon_to_screen(&self, polygon_mm: &[Point2]) -> Vec<Point2> {
        polygon_mm.iter().map(|p| self.to_screen(p)).collect()
    }

    #[must_use]
    pub fn polygon_to_model(&self, polygon_px: &[Point2]) -> Vec<Point2> {
        polygon_px.iter().map(|p| self.to_model(p)).collect()
    }
}
