use image::codecs::jpeg::JpegEncoder;
use image::{ImageResult, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{Result, ThumbnailError};

/// Encode `image` as baseline JPEG into any writer
pub fn encode_jpeg<W: Write>(image: &RgbImage, writer: W, quality: u8) -> ImageResult<()> {
    let mut encoder = JpegEncoder::new_with_quality(writer, quality);
    encoder.encode_image(image)
}

/// Encode `image` as JPEG and write it to `path`, creating or truncating the file.
/// The parent directory must already exist.
pub fn write_jpeg(path: &Path, image: &RgbImage, quality: u8) -> Result<()> {
    let file = File::create(path).map_err(|e| ThumbnailError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    encode_jpeg(image, &mut writer, quality).map_err(|e| ThumbnailError::from_image(e, path))?;
    writer.flush().map_err(|e| ThumbnailError::io(path, e))?;

    debug!(
        "Wrote {}x{} JPEG to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

/// Wrap a raw interleaved RGB byte buffer, rejecting shapes the encoder cannot take
pub fn image_from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<RgbImage> {
    let len = pixels.len();
    RgbImage::from_raw(width, height, pixels).ok_or_else(|| {
        ThumbnailError::Encoding(format!(
            "buffer of {} bytes does not hold a {}x{} RGB image ({} bytes expected)",
            len,
            width,
            height,
            width as usize * height as usize * 3
        ))
    })
}
