use std::path::{Path, PathBuf};

use image::ImageFormat;

/// Name of the artifact directory created next to the executable
pub const OUTPUT_DIR_NAME: &str = "output";

/// Where and how diagnostic artifacts are persisted
#[derive(Clone, Debug)]
pub struct OutputConfig {
    /// Directory receiving one file per artifact; created if missing
    pub output_dir: PathBuf,
    /// Encoding of the artifact files
    pub format: ImageFormat,
}

impl OutputConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            format: ImageFormat::Bmp,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Full path of the file stored under `stem`
    pub fn artifact_path(&self, stem: &str) -> PathBuf {
        let extension = self.format.extensions_str().first().copied().unwrap_or("img");
        self.output_dir.join(format!("{stem}.{extension}"))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(default_output_dir())
    }
}

/// `output` next to the running executable, falling back to the working directory
pub fn default_output_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(OUTPUT_DIR_NAME)
}
