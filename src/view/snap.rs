//! Grid and orthogonal snapping for pointer input.
//!
//! Every function is stateless: it takes a point and returns a new one.

use serde::{Deserialize, Serialize};

use crate::math::{Point2, TOLERANCE};

/// Axis an ortho snap locked onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrthoAxis {
    /// Near 0 or 180 degrees: `y` is locked to the anchor.
    Horizontal,
    /// Near 90 or 270 degrees: `x` is locked to the anchor.
    Vertical,
}

/// Snap configuration. Each call is independent of previous ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapOptions {
    pub enable_ortho: bool,
    pub ortho_tolerance_deg: f64,
    pub enable_grid: bool,
    pub grid_mm: f64,
    /// Reference point for ortho snapping, usually the previous vertex.
    /// Ortho snapping is skipped without one.
    pub anchor: Option<Point2>,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            enable_ortho: false,
            ortho_tolerance_deg: 7.5,
            enable_grid: false,
            grid_mm: 50.0,
            anchor: None,
        }
    }
}

impl SnapOptions {
    /// Enables grid snapping with the given spacing.
    #[must_use]
    pub fn with_grid(mut self, grid_mm: f64) -> Self {
        self.enable_grid = true;
        self.grid_mm = grid_mm;
        self
    }

    /// Enables ortho snapping around `anchor`.
    #[must_use]
    pub fn with_ortho(mut self, anchor: Point2, tolerance_deg: f64) -> Self {
        self.enable_ortho = true;
        self.anchor = Some(anchor);
        self.ortho_tolerance_deg = tolerance_deg;
        self
    }
}

/// Result of [`apply_snaps_with_guides`], for drawing snap guides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOutcome {
    pub point: Point2,
    pub ortho: Option<OrthoAxis>,
    pub grid: bool,
}

/// Rounds each coordinate to the nearest multiple of `grid_mm`.
///
/// Returns `p` unchanged when `grid_mm` is not positive.
#[must_use]
pub fn snap_to_grid(p: &Point2, grid_mm: f64) -> Point2 {
    if !(grid_mm > 0.0 && grid_mm.is_finite()) {
        return *p;
    }
    Point2::new(
        (p.x / grid_mm).round() * grid_mm,
        (p.y / grid_mm).round() * grid_mm,
    )
}

/// Decides which axis, if any, `p - anchor` lies within `tolerance_deg` of.
///
/// Negative tolerances act as 0. When both axes qualify (tolerance of 45
/// degrees or more) the nearer one wins, horizontal on a tie.
#[must_use]
pub fn ortho_axis(p: &Point2, anchor: &Point2, tolerance_deg: f64) -> Option<OrthoAxis> {
    let v = p - anchor;
    if v.norm() < TOLERANCE {
        return None;
    }
    let tolerance = if tolerance_deg.is_nan() { 0.0 } else { tolerance_deg.max(0.0) };

    // Fold the direction into [0, 180) so 0/180 and 90/270 collapse.
    let folded = v.y.atan2(v.x).to_degrees().rem_euclid(180.0);
    let off_horizontal = folded.min(180.0 - folded);
    let off_vertical = (folded - 90.0).abs();

    if off_horizontal <= tolerance && off_horizontal <= off_vertical {
        Some(OrthoAxis::Horizontal)
    } else if off_vertical <= tolerance {
        Some(OrthoAxis::Vertical)
    } else {
        None
    }
}

/// Locks `p` onto the horizontal or vertical line through `anchor` when the
/// direction from `anchor` is within `tolerance_deg` of that axis.
#[must_use]
pub fn snap_to_ortho(p: &Point2, anchor: &Point2, tolerance_deg: f64) -> Point2 {
    lock_axis(p, anchor, ortho_axis(p, anchor, tolerance_deg))
}

fn lock_axis(p: &Point2, anchor: &Point2, axis: Option<OrthoAxis>) -> Point2 {
    match axis {
        Some(OrthoAxis::Horizontal) => Point2::new(p.x, anchor.y),
        Some(OrthoAxis::Vertical) => Point2::new(anchor.x, p.y),
        None => *p,
    }
}

/// Applies ortho snapping and then grid snapping, as enabled in `options`.
///
/// Ortho runs first so it sees the raw pointer direction; grid quantizes after.
#[must_use]
pub fn apply_snaps(p: &Point2, options: &SnapOptions) -> Point2 {
    apply_snaps_with_guides(p, options).point
}

/// Like [`apply_snaps`] but also reports which snaps took effect.
#[must_use]
pub fn apply_snaps_with_guides(p: &Point2, options: &SnapOptions) -> SnapOutcome {
    let mut point = *p;
    let mut ortho = None;

    if options.enable_ortho {
        if let Some(anchor) = options.anchor {
            ortho = ortho_axis(&point, &anchor, options.ortho_tolerance_deg);
            point = lock_axis(&point, &anchor, ortho);
        }
    }

    let grid = options.enable_grid && options.grid_mm > 0.0 && options.grid_mm.is_finite();
    if grid {
        point = snap_to_grid(&point, options.grid_mm);
    }

    SnapOutcome { point, ortho, grid }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn grid_rounds_to_nearest_multiple() {
        assert_abs_diff_eq!(snap_to_grid(&Point2::new(123.0, -74.0), 50.0), Point2::new(100.0, -50.0));
        assert_abs_diff_eq!(snap_to_grid(&Point2::new(126.0, -76.0), 50.0), Point2::new(150.0, -100.0));
    }

    #[test]
    fn grid_disabled_for_non_positive_spacing() {
        let p = Point2::new(123.0, -74.0);
        assert_eq!(snap_to_grid(&p, 0.0), p);
        assert_eq!(snap_to_grid(&p, -10.0), p);
    }

    #[test]
    fn ortho_locks_near_horizontal() {
        let p = snap_to_ortho(&Point2::new(100.0, 5.0), &Point2::origin(), 10.0);
        assert_abs_diff_eq!(p.y, 0.0);
        assert_abs_diff_eq!(p.x, 100.0);

        let left = snap_to_ortho(&Point2::new(-100.0, 5.0), &Point2::origin(), 10.0);
        assert_abs_diff_eq!(left, Point2::new(-100.0, 0.0));
    }

    #[test]
    fn ortho_locks_near_vertical() {
        let p = snap_to_ortho(&Point2::new(5.0, 100.0), &Point2::origin(), 10.0);
        assert_abs_diff_eq!(p.x, 0.0);

        let down = snap_to_ortho(&Point2::new(15.0, -100.0), &Point2::new(10.0, 0.0), 10.0);
        assert_abs_diff_eq!(down, Point2::new(10.0, -100.0));
    }

    #[test]
    fn ortho_leaves_diagonals_alone() {
        let p = Point2::new(100.0, 100.0);
        assert_eq!(snap_to_ortho(&p, &Point2::origin(), 10.0), p);
    }

    #[test]
    fn ortho_zero_vector_is_noop() {
        let p = Point2::new(3.0, 4.0);
        assert_eq!(snap_to_ortho(&p, &p, 10.0), p);
    }

    #[test]
    fn ortho_negative_tolerance_only_exact_axes() {
        assert_eq!(ortho_axis(&Point2::new(10.0, 0.1), &Point2::origin(), -5.0), None);
        assert_eq!(
            ortho_axis(&Point2::new(10.0, 0.0), &Point2::origin(), -5.0),
            Some(OrthoAxis::Horizontal)
        );
    }

    #[test]
    fn ortho_wide_tolerance_picks_nearer_axis() {
        assert_eq!(
            ortho_axis(&Point2::new(10.0, 8.0), &Point2::origin(), 60.0),
            Some(OrthoAxis::Horizontal)
        );
        assert_eq!(
            ortho_axis(&Point2::new(8.0, 10.0), &Point2::origin(), 60.0),
            Some(OrthoAxis::Vertical)
        );
    }

    #[test]
    fn apply_snaps_ortho_then_grid() {
        let options = SnapOptions {
            enable_ortho: true,
            ortho_tolerance_deg: 7.5,
            enable_grid: true,
            grid_mm: 50.0,
            anchor: Some(Point2::origin()),
        };
        let outcome = apply_snaps_with_guides(&Point2::new(102.0, 3.0), &options);
        assert_abs_diff_eq!(outcome.point, Point2::new(100.0, 0.0));
        assert_eq!(outcome.ortho, Some(OrthoAxis::Horizontal));
        assert!(outcome.grid);
    }

    #[test]
    fn order_matters_for_coarse_grid() {
        // Grid first would round (140, 30) to (150, 50) and lose the ortho lock.
        let options = SnapOptions::default()
            .with_ortho(Point2::origin(), 15.0)
            .with_grid(50.0);
        assert_abs_diff_eq!(apply_snaps(&Point2::new(140.0, 30.0), &options), Point2::new(150.0, 0.0));
    }

    #[test]
    fn apply_snaps_without_anchor_skips_ortho() {
        let options = SnapOptions {
            enable_ortho: true,
            anchor: None,
            ..SnapOptions::default()
        };
        let p = Point2::new(102.0, 3.0);
        let outcome = apply_snaps_with_guides(&p, &options);
        assert_eq!(outcome.point, p);
        assert_eq!(outcome.ortho, None);
        assert!(!outcome.grid);
    }

    #[test]
    fn options_deserialize_from_camel_case() {
        let options: SnapOptions =
            serde_json::from_str(r#"{"enableGrid": true, "gridMm": 25, "anchor": [10, 20]}"#).unwrap();
        assert!(options.enable_grid);
        assert!(!options.enable_ortho);
        assert_abs_diff_eq!(options.grid_mm, 25.0);
        assert_abs_diff_eq!(options.ortho_tolerance_deg, 7.5);
        assert_eq!(options.anchor, Some(Point2::new(10.0, 20.0)));
    }
}
