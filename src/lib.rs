pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod verify;

use image::RgbImage;
use std::path::Path;
use tracing::info;

pub use config::{ThumbnailConfig, DEFAULT_OUTPUT_PATH, JPEG_QUALITY};
pub use error::{Result, ThumbnailError};
pub use models::{Color, PatchRegion};
pub use pipeline::{DebugConfig, PaintContext, PaintStep, Pipeline};
pub use render::{render_thumbnail, thumbnail_pipeline};
pub use verify::{verify_thumbnail, VerifyReport, DEFAULT_TOLERANCE};

/// Render the thumbnail described by `config` and write it to `path` as JPEG.
/// Returns the un-encoded buffer that was written.
pub fn generate(config: &ThumbnailConfig, path: &Path) -> Result<RgbImage> {
    let image = render_thumbnail(config)?;
    output::write_jpeg(path, &image, JPEG_QUALITY)?;
    info!("Wrote thumbnail to {}", path.display());
    Ok(image)
}
