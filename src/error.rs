use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, CannyError>;

/// Errors raised while loading an image, running the stages or persisting
/// diagnostic artifacts.
#[derive(Error, Debug)]
pub enum CannyError {
    /// The input is missing, unreadable or not an image.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The input is too small for the widest undefined border.
    #[error("image is {width}x{height}, both sides must be at least {min} pixels")]
    Dimension {
        width: usize,
        height: usize,
        min: usize,
    },

    /// A diagnostic artifact (or the directory holding it) could not be written.
    #[error("failed to write {artifact} to {}: {source}", path.display())]
    Write {
        artifact: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
