use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::config::OutputConfig;
use crate::error::{CannyError, Result};
use crate::image_io::to_gray_image;
use crate::pipeline::{Artifact, ArtifactGrid, CannyOutput};

/// Outcome of persisting every artifact of one run
#[derive(Debug, Default)]
pub struct ArtifactReport {
    pub written: Vec<(Artifact, PathBuf)>,
    pub failed: Vec<CannyError>,
}

impl ArtifactReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Persists pipeline grids as single-channel images in the configured directory
pub struct ArtifactWriter {
    config: OutputConfig,
    verbose: bool,
}

impl ArtifactWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Create the output directory if it does not exist yet
    pub fn ensure_output_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config.output_dir).map_err(|source| CannyError::Write {
            artifact: "output directory".to_string(),
            path: self.config.output_dir.clone(),
            source,
        })
    }

    /// Write a single artifact atomically, replacing any existing file
    pub fn write(&self, artifact: Artifact, grid: ArtifactGrid<'_>) -> Result<PathBuf> {
        let path = self.config.artifact_path(artifact.name());
        let write_err = |source| CannyError::Write {
            artifact: artifact.name().to_string(),
            path: path.clone(),
            source,
        };

        let image = to_gray_image(grid);
        let mut tmp = NamedTempFile::new_in(&self.config.output_dir).map_err(write_err)?;
        {
            let mut out = BufWriter::new(tmp.as_file_mut());
            image
                .write_to(&mut out, self.config.format)
                .map_err(|e| write_err(io::Error::other(e)))?;
            out.flush().map_err(write_err)?;
        }
        tmp.persist(&path).map_err(|e| write_err(e.error))?;

        if self.verbose {
            println!("  Saved {}", path.display());
        }
        debug!(artifact = artifact.name(), path = %path.display(), "artifact written");
        Ok(path)
    }

    /// Write every artifact of `output`.
    ///
    /// A failure on one artifact is recorded and the remaining ones are still
    /// attempted. If the directory itself cannot be created nothing is written.
    pub fn write_all(&self, output: &CannyOutput) -> ArtifactReport {
        let mut report = ArtifactReport::default();

        if let Err(e) = self.ensure_output_dir() {
            warn!(error = %e, "cannot create output directory");
            report.failed.push(e);
            return report;
        }

        for (artifact, grid) in output.artifacts() {
            match self.write(artifact, grid) {
                Ok(path) => report.written.push((artifact, path)),
                Err(e) => {
                    warn!(error = %e, "artifact not written");
                    report.failed.push(e);
                }
            }
        }

        report
    }
}
