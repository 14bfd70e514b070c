use image::Rgb;
use imageproc::rect::Rect;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Largest absolute per-channel difference between two colors
    pub fn max_channel_diff(&self, other: Color) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Color { r, g, b }
    }
}

/// Square sub-area of the pixel buffer, addressed as (row, col) of its top-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchRegion {
    pub row: u32,
    pub col: u32,
    pub size: u32,
}

impl PatchRegion {
    pub fn rows(&self) -> Range<u32> {
        self.row..self.row + self.size
    }

    pub fn cols(&self) -> Range<u32> {
        self.col..self.col + self.size
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.rows().contains(&row) && self.cols().contains(&col)
    }

    /// Cell at the middle of the region, as (row, col)
    pub fn center(&self) -> (u32, u32) {
        (self.row + self.size / 2, self.col + self.size / 2)
    }

    /// Whether the region lies entirely inside a `width` x `height` buffer
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.size > 0 && self.rows().end <= height && self.cols().end <= width
    }

    /// Rectangle in image (x, y) space: x is the column, y the row
    pub fn to_rect(&self) -> Rect {
        Rect::at(self.col as i32, self.row as i32).of_size(self.size, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_converts_to_and_from_rgb() {
        let color = Color::new(0, 30, 0);
        let pixel: Rgb<u8> = color.into();
        assert_eq!(pixel, Rgb([0, 30, 0]));
        assert_eq!(Color::from(pixel), color);
    }

    #[test]
    fn max_channel_diff_picks_worst_channel() {
        let a = Color::new(0, 255, 0);
        let b = Color::new(3, 240, 1);
        assert_eq!(a.max_channel_diff(b), 15);
        assert_eq!(b.max_channel_diff(a), 15);
        assert_eq!(a.max_channel_diff(a), 0);
    }

    #[test]
    fn region_ranges_are_half_open() {
        let region = PatchRegion { row: 13, col: 30, size: 8 };
        assert_eq!(region.rows(), 13..21);
        assert_eq!(region.cols(), 30..38);
        assert!(region.contains(13, 30));
        assert!(region.contains(20, 37));
        assert!(!region.contains(21, 30));
        assert!(!region.contains(13, 38));
        assert_eq!(region.center(), (17, 34));
    }

    #[test]
    fn rect_uses_column_as_x() {
        let rect = PatchRegion { row: 13, col: 30, size: 8 }.to_rect();
        assert_eq!(rect.left(), 30);
        assert_eq!(rect.top(), 13);
        assert_eq!(rect.width(), 8);
        assert_eq!(rect.height(), 8);
    }

    #[test]
    fn fits_rejects_overhang_and_empty() {
        let region = PatchRegion { row: 44, col: 44, size: 8 };
        assert!(region.fits(52, 52));
        assert!(!region.fits(51, 52));
        assert!(!region.fits(52, 51));
        assert!(!PatchRegion { row: 0, col: 0, size: 0 }.fits(52, 52));
    }
}
