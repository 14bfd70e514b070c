pub mod steps;

use image::RgbImage;
use tracing::debug;

use crate::config::ThumbnailConfig;
use crate::error::Result;
use crate::pipeline::Pipeline;
use steps::{BackgroundStep, PatchStep};

/// Build the paint pipeline for a thumbnail: background fill, then one step per patch
pub fn thumbnail_pipeline(config: &ThumbnailConfig) -> Result<Pipeline> {
    let [first, second] = config.patch_regions()?;
    debug!(?first, ?second, "patch regions");

    Ok(Pipeline::new(config.width, config.height)
        .add_step_boxed(Box::new(BackgroundStep {
            color: config.background,
        }))
        .add_step_boxed(Box::new(PatchStep::new("Patch 1", first, config.patch_color)))
        .add_step_boxed(Box::new(PatchStep::new("Patch 2", second, config.patch_color))))
}

/// Render the un-encoded thumbnail buffer
pub fn render_thumbnail(config: &ThumbnailConfig) -> Result<RgbImage> {
    thumbnail_pipeline(config)?.run()
}
