//! The four Canny stages.
//!
//! Each stage is a pure function from read-only grids to a freshly allocated
//! output grid. Every stage leaves an undefined border of fixed width at 0:
//!
//! | stage | border |
//! |---|---|
//! | [`gaussian_smoothing`] | [`SMOOTHING_MARGIN`] |
//! | [`gradient_operation`] | [`GRADIENT_MARGIN`] |
//! | [`non_maxima_suppression`] | [`SUPPRESSION_MARGIN`] |
//! | [`double_thresholding`] | none, consumes the suppressed border |
pub mod gradient;
pub mod smoothing;
pub mod suppression;
pub mod thresholding;

pub use gradient::{gradient_operation, GradientField, GRADIENT_MARGIN};
pub use smoothing::{gaussian_smoothing, SMOOTHING_MARGIN};
pub use suppression::{non_maxima_suppression, Sector, SUPPRESSION_MARGIN};
pub use thresholding::{double_thresholding, EdgeClass, Thresholds, EDGE, NO_EDGE};

/// Smallest side length accepted by the pipeline: the suppression border on both sides
pub const MIN_DIMENSION: usize = 2 * SUPPRESSION_MARGIN;
