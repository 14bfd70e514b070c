use image::ImageError;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T, E = ThumbnailError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("file system error at {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("encoding error: {0}")]
    Encoding(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("verification failed: {0}")]
    Verification(String),
}

impl ThumbnailError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Split an `image` error into the file-system and codec halves of the taxonomy
    pub fn from_image(err: ImageError, path: &Path) -> Self {
        match err {
            ImageError::IoError(source) => Self::io(path, source),
            other => Self::Encoding(other.to_string()),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::FileSystem { .. } => "FILE_SYSTEM_ERROR",
            Self::Encoding(_) => "ENCODING_ERROR",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Verification(_) => "VERIFICATION_FAILED",
        }
    }
}
