use image::RgbImage;
use std::path::PathBuf;
use tempfile::TempDir;
use thumbgen::Color;

/// JPEG round-trip tolerance for decoded channel values
pub const JPEG_TOLERANCE: u8 = 15;

/// Creates a scratch directory with a `resources/` subdirectory and returns
/// the directory (keep alive) together with the thumbnail path inside it.
pub fn scratch_output() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let resources = dir.path().join("resources");
    std::fs::create_dir(&resources).expect("Failed to create resources directory");
    (dir, resources.join("thumbnail.jpg"))
}

/// Decode a JPEG written by the generator
pub fn decode(path: &std::path::Path) -> RgbImage {
    image::ImageReader::open(path)
        .expect("Failed to open thumbnail")
        .decode()
        .expect("Failed to decode thumbnail")
        .to_rgb8()
}

/// Color of the grid cell at (row, col)
pub fn cell(image: &RgbImage, row: u32, col: u32) -> Color {
    Color::from(*image.get_pixel(col, row))
}

pub fn assert_near(actual: Color, expected: Color, tolerance: u8) {
    assert!(
        actual.max_channel_diff(expected) <= tolerance,
        "{:?} not within {} of {:?}",
        actual,
        tolerance,
        expected
    );
}
