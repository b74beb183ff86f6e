#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from canny_stages for tests
pub use canny_stages::detection::{
    double_thresholding, gaussian_smoothing, gradient_operation, non_maxima_suppression, EDGE,
    GRADIENT_MARGIN, NO_EDGE, SMOOTHING_MARGIN, SUPPRESSION_MARGIN,
};
pub use canny_stages::{
    Artifact, ArtifactWriter, CannyError, CannyOutput, Grid, OutputConfig, Pipeline,
};
