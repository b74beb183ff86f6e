use std::time::Instant;

use tracing::{debug, info};

use crate::detection::{
    double_thresholding, gaussian_smoothing, gradient_operation, non_maxima_suppression,
    GradientField, MIN_DIMENSION,
};
use crate::error::{CannyError, Result};
use crate::grid::Grid;

/// Diagnostic artifacts produced by one run, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    GaussianSmoothing,
    HorizontalGradient,
    VerticalGradient,
    GradientImage,
    NonMaximaSuppressed,
    DoubleThresholding,
}

impl Artifact {
    pub const ALL: [Artifact; 6] = [
        Artifact::GaussianSmoothing,
        Artifact::HorizontalGradient,
        Artifact::VerticalGradient,
        Artifact::GradientImage,
        Artifact::NonMaximaSuppressed,
        Artifact::DoubleThresholding,
    ];

    /// File stem the artifact is persisted under
    pub fn name(self) -> &'static str {
        match self {
            Artifact::GaussianSmoothing => "gaussian_smoothing",
            Artifact::HorizontalGradient => "horizontal_gradient",
            Artifact::VerticalGradient => "vertical_gradient",
            Artifact::GradientImage => "gradient_image",
            Artifact::NonMaximaSuppressed => "non-maxima_suppressed",
            Artifact::DoubleThresholding => "double_thresholding",
        }
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Borrowed view of an artifact grid, whatever its sample type
#[derive(Debug, Clone, Copy)]
pub enum ArtifactGrid<'a> {
    Float(&'a Grid<f64>),
    Int(&'a Grid<i32>),
    Byte(&'a Grid<u8>),
}

/// Every grid produced by one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct CannyOutput {
    pub smoothed: Grid<f64>,
    pub gradient: GradientField,
    pub suppressed: Grid<i32>,
    pub classified: Grid<u8>,
}

impl CannyOutput {
    pub fn artifact(&self, artifact: Artifact) -> ArtifactGrid<'_> {
        match artifact {
            Artifact::GaussianSmoothing => ArtifactGrid::Float(&self.smoothed),
            Artifact::HorizontalGradient => ArtifactGrid::Float(&self.gradient.horizontal),
            Artifact::VerticalGradient => ArtifactGrid::Float(&self.gradient.vertical),
            Artifact::GradientImage => ArtifactGrid::Float(&self.gradient.magnitude),
            Artifact::NonMaximaSuppressed => ArtifactGrid::Int(&self.suppressed),
            Artifact::DoubleThresholding => ArtifactGrid::Byte(&self.classified),
        }
    }

    /// All artifacts paired with their grids, in pipeline order
    pub fn artifacts(&self) -> impl Iterator<Item = (Artifact, ArtifactGrid<'_>)> {
        Artifact::ALL.into_iter().map(|a| (a, self.artifact(a)))
    }
}

/// Runs the four stages in order on a grayscale grid.
///
/// The pipeline never touches the filesystem; persist the returned grids with
/// [`crate::artifacts::ArtifactWriter`].
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    verbose: bool,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Log per-stage statistics at info level instead of debug
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check the image is large enough for the widest undefined border
    pub fn validate(image: &Grid<u8>) -> Result<()> {
        if image.height() < MIN_DIMENSION || image.width() < MIN_DIMENSION {
            return Err(CannyError::Dimension {
                width: image.width(),
                height: image.height(),
                min: MIN_DIMENSION,
            });
        }
        Ok(())
    }

    pub fn run(&self, image: &Grid<u8>) -> Result<CannyOutput> {
        Self::validate(image)?;
        let started = Instant::now();

        let t = Instant::now();
        let smoothed = gaussian_smoothing(image);
        self.report("gaussian smoothing", t, smoothed.max().unwrap_or(0.0));

        let t = Instant::now();
        let gradient = gradient_operation(&smoothed);
        self.report("gradient operation", t, gradient.magnitude.max().unwrap_or(0.0));

        let t = Instant::now();
        let suppressed = non_maxima_suppression(&gradient.magnitude, &gradient.angle);
        self.report(
            "non-maxima suppression",
            t,
            f64::from(suppressed.max().unwrap_or(0)),
        );

        let t = Instant::now();
        let classified = double_thresholding(&suppressed, &gradient.angle);
        let edges = classified.iter().filter(|&v| v != 0).count();
        self.report("double thresholding", t, f64::from(classified.max().unwrap_or(0)));

        info!(
            width = image.width(),
            height = image.height(),
            edges,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "edge detection finished"
        );

        Ok(CannyOutput {
            smoothed,
            gradient,
            suppressed,
            classified,
        })
    }

    fn report(&self, stage: &str, started: Instant, max: f64) {
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        if self.verbose {
            info!(stage, elapsed_ms, max, "stage complete");
        } else {
            debug!(stage, elapsed_ms, max, "stage complete");
        }
    }
}
