use crate::error::{Result, ThumbnailError};
use crate::models::{Color, PatchRegion};
use crate::pipeline::{PaintContext, PaintStep};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use tracing::debug;

/// Paint every pixel with a solid color
pub struct BackgroundStep {
    pub color: Color,
}

impl PaintStep for BackgroundStep {
    fn paint(&self, image: &mut RgbImage, _context: &PaintContext) -> Result<()> {
        let fill: Rgb<u8> = self.color.into();
        for pixel in image.pixels_mut() {
            *pixel = fill;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Background Fill"
    }
}

/// Paint one square patch region
pub struct PatchStep {
    pub label: String,
    pub region: PatchRegion,
    pub color: Color,
}

impl PatchStep {
    pub fn new(label: impl Into<String>, region: PatchRegion, color: Color) -> Self {
        Self {
            label: label.into(),
            region,
            color,
        }
    }
}

impl PaintStep for PatchStep {
    fn paint(&self, image: &mut RgbImage, _context: &PaintContext) -> Result<()> {
        let (width, height) = image.dimensions();
        if !self.region.fits(width, height) {
            return Err(ThumbnailError::InvalidConfig(format!(
                "{} rows {:?} cols {:?} exceed {}x{} buffer",
                self.label,
                self.region.rows(),
                self.region.cols(),
                width,
                height
            )));
        }

        draw_filled_rect_mut(image, self.region.to_rect(), self.color.into());

        debug!(
            "{}: rows {:?} cols {:?}",
            self.label,
            self.region.rows(),
            self.region.cols()
        );
        Ok(())
    }

    fn name(&self) -> &str {
        &self.label
    }
}
