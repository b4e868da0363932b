// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel accessor: format-aware reads and writes of single pixels, plus the
// derived intensity readers used by region statistics.

use image::{Luma, Rgb};
use scanwerk_core::{Pixel, Point};

use super::buffer::{Image, Raster};

impl Image {
    fn index_of(&self, point: Point) -> Option<(u32, u32)> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        (x < self.width() && y < self.height()).then_some((x, y))
    }

    /// Read one pixel. Coordinates outside the image read as white.
    pub fn get_pixel(&self, point: Point) -> Pixel {
        let Some((x, y)) = self.index_of(point) else {
            return Pixel::WHITE;
        };
        match &self.raster {
            Raster::Gray(buf) => Pixel::gray(buf.get_pixel(x, y).0[0]),
            Raster::Rgb(buf) => {
                let Rgb([r, g, b]) = *buf.get_pixel(x, y);
                Pixel::new(r, g, b)
            }
        }
    }

    /// Store `color` at `point` in this buffer's format.
    ///
    /// Gray buffers keep the colour's grayscale; bilevel buffers store black
    /// iff that grayscale is below `abs_black_threshold`. Returns whether the
    /// stored value changed. Writes outside the image are ignored and return
    /// `false`.
    pub fn set_pixel(&mut self, point: Point, color: Pixel, abs_black_threshold: u8) -> bool {
        let Some((x, y)) = self.index_of(point) else {
            return false;
        };
        let format = self.format();
        match &mut self.raster {
            Raster::Gray(buf) => {
                let gray = color.grayscale();
                let value = if !format.is_mono() {
                    gray
                } else if gray < abs_black_threshold {
                    0
                } else {
                    u8::MAX
                };
                let slot = buf.get_pixel_mut(x, y);
                let changed = slot.0[0] != value;
                *slot = Luma([value]);
                changed
            }
            Raster::Rgb(buf) => {
                let value = Rgb([color.r, color.g, color.b]);
                let slot = buf.get_pixel_mut(x, y);
                let changed = *slot != value;
                *slot = value;
                changed
            }
        }
    }

    /// Mean channel value at `point`.
    pub fn grayscale(&self, point: Point) -> u8 {
        self.get_pixel(point).grayscale()
    }

    /// Darkest channel at `point`.
    pub fn lightness(&self, point: Point) -> u8 {
        self.get_pixel(point).lightness()
    }

    /// Brightest channel at `point`.
    pub fn darkness_inverse(&self, point: Point) -> u8 {
        self.get_pixel(point).darkness_inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanwerk_core::{PixelFormat, RectangleSize};

    fn blank(format: PixelFormat) -> Image {
        Image::create(RectangleSize::new(4, 4), format, true, Pixel::WHITE, 128)
    }

    #[test]
    fn out_of_bounds_reads_white_and_ignores_writes() {
        let mut img = blank(PixelFormat::Rgb24);
        assert_eq!(img.get_pixel(Point::new(-1, 0)), Pixel::WHITE);
        assert_eq!(img.get_pixel(Point::new(0, 4)), Pixel::WHITE);
        assert!(!img.set_pixel(Point::new(4, 0), Pixel::BLACK, 128));
        assert!(!img.set_pixel(Point::new(0, -7), Pixel::BLACK, 128));
    }

    #[test]
    fn set_reports_change() {
        let mut img = blank(PixelFormat::Rgb24);
        let p = Point::new(1, 2);
        assert!(img.set_pixel(p, Pixel::new(1, 2, 3), 128));
        assert!(!img.set_pixel(p, Pixel::new(1, 2, 3), 128));
        assert_eq!(img.get_pixel(p), Pixel::new(1, 2, 3));
    }

    #[test]
    fn gray_stores_grayscale() {
        let mut img = blank(PixelFormat::Gray8);
        img.set_pixel(Point::new(0, 0), Pixel::new(30, 60, 90), 128);
        assert_eq!(img.get_pixel(Point::new(0, 0)), Pixel::gray(60));
    }

    #[test]
    fn mono_binarizes_on_threshold() {
        let mut img = blank(PixelFormat::MonoWhite);
        img.set_pixel(Point::new(0, 0), Pixel::gray(100), 128);
        img.set_pixel(Point::new(1, 0), Pixel::gray(200), 128);
        assert_eq!(img.get_pixel(Point::new(0, 0)), Pixel::BLACK);
        assert_eq!(img.get_pixel(Point::new(1, 0)), Pixel::WHITE);
    }

    #[test]
    fn derived_intensities() {
        let mut img = blank(PixelFormat::Rgb24);
        let p = Point::new(3, 3);
        img.set_pixel(p, Pixel::new(10, 20, 60), 128);
        assert_eq!(img.grayscale(p), 30);
        assert_eq!(img.lightness(p), 10);
        assert_eq!(img.darkness_inverse(p), 60);
    }
}
