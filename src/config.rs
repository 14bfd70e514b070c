use crate::error::{Result, ThumbnailError};
use crate::models::{Color, PatchRegion};

pub const DEFAULT_WIDTH: u32 = 52;
pub const DEFAULT_HEIGHT: u32 = 52;
pub const DEFAULT_PATCH_SIZE: u32 = 8;
pub const BACKGROUND_COLOR: Color = Color::new(0, 255, 0);
pub const PATCH_COLOR: Color = Color::new(0, 30, 0);
pub const DEFAULT_OUTPUT_PATH: &str = "resources/thumbnail.jpg";
pub const JPEG_QUALITY: u8 = 100;

/// Geometry and colors of the generated thumbnail.
///
/// The buffer is row-major. Both patches share one row band centred on
/// `height / 3`; their column bands are centred on `width / 3` and
/// `2 * width / 3`. Each band spans `[center - patch_size / 2, center - patch_size / 2 + patch_size)`.
///
/// The row band deliberately follows `height` and the column bands `width`,
/// so the patches stay inside the buffer for non-square sizes. The original
/// square generator derived its outer index from `width`; at equal width and
/// height both readings give the same pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailConfig {
    pub width: u32,
    pub height: u32,
    pub patch_size: u32,
    pub background: Color,
    pub patch_color: Color,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            patch_size: DEFAULT_PATCH_SIZE,
            background: BACKGROUND_COLOR,
            patch_color: PATCH_COLOR,
        }
    }
}

impl ThumbnailConfig {
    pub fn new(width: u32, height: u32, patch_size: u32) -> Self {
        Self {
            width,
            height,
            patch_size,
            ..Self::default()
        }
    }

    pub fn with_colors(mut self, background: Color, patch_color: Color) -> Self {
        self.background = background;
        self.patch_color = patch_color;
        self
    }

    /// Both patch regions, bounds-checked against the buffer
    pub fn patch_regions(&self) -> Result<[PatchRegion; 2]> {
        if self.width == 0 || self.height == 0 {
            return Err(ThumbnailError::InvalidConfig(format!(
                "image dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.patch_size == 0 {
            return Err(ThumbnailError::InvalidConfig(
                "patch size must be non-zero".to_string(),
            ));
        }

        let row = self.band_start(self.height / 3, "row")?;
        let first_col = self.band_start(self.width / 3, "column")?;
        let second_col = self.band_start(2 * self.width / 3, "column")?;

        let regions = [
            PatchRegion { row, col: first_col, size: self.patch_size },
            PatchRegion { row, col: second_col, size: self.patch_size },
        ];

        for region in &regions {
            if !region.fits(self.width, self.height) {
                return Err(ThumbnailError::InvalidConfig(format!(
                    "patch rows {:?} cols {:?} exceed {}x{} buffer",
                    region.rows(),
                    region.cols(),
                    self.width,
                    self.height
                )));
            }
        }

        Ok(regions)
    }

    pub fn validate(&self) -> Result<()> {
        self.patch_regions().map(|_| ())
    }

    fn band_start(&self, center: u32, axis: &str) -> Result<u32> {
        center.checked_sub(self.patch_size / 2).ok_or_else(|| {
            ThumbnailError::InvalidConfig(format!(
                "patch of size {} centred on {} {} starts before the buffer",
                self.patch_size, axis, center
            ))
        })
    }
}
