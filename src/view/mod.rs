pub mod snap;
pub mod transform;

pub use snap::{
    apply_snaps, apply_snaps_with_guides, ortho_axis, snap_to_grid, snap_to_ortho, OrthoAxis,
    SnapOptions, SnapOutcome,
};
pub use transform::{
    length_to_model, length_to_screen, model_to_screen, screen_to_model, ViewTransform, Viewport,
    ZoomRange,
};
