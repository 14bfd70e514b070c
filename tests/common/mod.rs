mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from thumbgen for tests
pub use thumbgen::{Color, ThumbnailConfig, ThumbnailError};
