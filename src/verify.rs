//! Post-write check of a thumbnail against the config that produced it.
//!
//! JPEG is lossy, so every decoded cell is compared to its expected color
//! within a tolerance band rather than exactly.

use image::{ImageReader, RgbImage};
use std::path::Path;
use tracing::debug;

use crate::config::ThumbnailConfig;
use crate::error::{Result, ThumbnailError};
use crate::models::Color;

pub const DEFAULT_TOLERANCE: u8 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub width: u32,
    pub height: u32,
    pub samples_checked: usize,
    pub max_deviation: u8,
}

/// Decode the file at `path` and verify it. The format is sniffed from the
/// file contents, so paths without a `.jpg` extension are accepted.
pub fn verify_thumbnail(path: &Path, config: &ThumbnailConfig, tolerance: u8) -> Result<VerifyReport> {
    let decoded = ImageReader::open(path)
        .map_err(|e| ThumbnailError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| ThumbnailError::io(path, e))?
        .decode()
        .map_err(|e| ThumbnailError::from_image(e, path))?
        .to_rgb8();

    verify_image(&decoded, config, tolerance)
}

/// Verify an in-memory buffer cell by cell
pub fn verify_image(image: &RgbImage, config: &ThumbnailConfig, tolerance: u8) -> Result<VerifyReport> {
    if image.dimensions() != (config.width, config.height) {
        return Err(ThumbnailError::Verification(format!(
            "expected {}x{}, found {}x{}",
            config.width,
            config.height,
            image.width(),
            image.height()
        )));
    }

    let regions = config.patch_regions()?;
    let mut max_deviation = 0;

    for (col, row, pixel) in image.enumerate_pixels() {
        let expected = if regions.iter().any(|region| region.contains(row, col)) {
            config.patch_color
        } else {
            config.background
        };

        let actual = Color::from(*pixel);
        let deviation = actual.max_channel_diff(expected);
        if deviation > tolerance {
            return Err(ThumbnailError::Verification(format!(
                "cell (row {}, col {}) is {:?}, expected {:?} within {}",
                row, col, actual, expected, tolerance
            )));
        }
        max_deviation = max_deviation.max(deviation);
    }

    let samples_checked = image.width() as usize * image.height() as usize;
    debug!(samples_checked, max_deviation, "thumbnail verified");

    Ok(VerifyReport {
        width: image.width(),
        height: image.height(),
        samples_checked,
        max_deviation,
    })
}
