pub mod artifacts;
pub mod config;
pub mod detection;
pub mod error;
pub mod grid;
pub mod image_io;
pub mod pipeline;

pub use artifacts::{ArtifactReport, ArtifactWriter};
pub use config::OutputConfig;
pub use detection::GradientField;
pub use error::{CannyError, Result};
pub use grid::Grid;
pub use pipeline::{Artifact, ArtifactGrid, CannyOutput, Pipeline};
