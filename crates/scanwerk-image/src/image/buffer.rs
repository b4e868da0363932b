// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster buffer lifecycle: allocation, optional background fill, exclusive
// ownership hand-off and release. Storage is provided by the `image` crate.

use image::{DynamicImage, GrayImage, ImageBuffer, RgbImage};
use scanwerk_core::error::{Result, ScanwerkError};
use scanwerk_core::{Pixel, PixelFormat, Point, Rectangle, RectangleSize};
use tracing::{debug, error};

use crate::blit::wipe_rectangle;

/// Backing storage. Bilevel formats keep one luma byte per pixel holding
/// either 0 or 255.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Raster {
    Gray(GrayImage),
    Rgb(RgbImage),
}

/// A mutable raster with fixed size and pixel format.
///
/// An `Image` is owned by exactly one binding. Operations that change the
/// size or orientation build a complete second buffer from the first and
/// then hand it over with [`Image::replace`], which drops the old storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    format: PixelFormat,
    pub(crate) raster: Raster,
}

impl Image {
    // -- Construction ---------------------------------------------------------

    /// Allocate a buffer, reporting failure instead of stopping.
    ///
    /// The new buffer is zeroed (black). Use [`Image::create`] for a filled
    /// buffer.
    pub fn try_new(size: RectangleSize, format: PixelFormat) -> Result<Self> {
        let failed = || ScanwerkError::Allocation {
            width: size.width,
            height: size.height,
            format,
        };
        let channels: usize = match format {
            PixelFormat::Rgb24 => 3,
            PixelFormat::Gray8 | PixelFormat::MonoWhite | PixelFormat::MonoBlack => 1,
        };
        let len = (size.width as usize)
            .checked_mul(size.height as usize)
            .and_then(|pixels| pixels.checked_mul(channels))
            .ok_or_else(failed)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| failed())?;
        data.resize(len, 0u8);

        let raster = match format {
            PixelFormat::Rgb24 => {
                Raster::Rgb(ImageBuffer::from_raw(size.width, size.height, data).ok_or_else(failed)?)
            }
            _ => Raster::Gray(ImageBuffer::from_raw(size.width, size.height, data).ok_or_else(failed)?),
        };
        Ok(Self { format, raster })
    }

    /// Allocate a buffer of exactly `size` and `format`, optionally wiped to
    /// `background`.
    ///
    /// # Panics
    ///
    /// Allocation failure is unrecoverable for the pipeline: it is logged and
    /// the call panics with the allocator's message.
    pub fn create(
        size: RectangleSize,
        format: PixelFormat,
        fill: bool,
        background: Pixel,
        abs_black_threshold: u8,
    ) -> Self {
        let mut image = match Self::try_new(size, format) {
            Ok(image) => image,
            Err(err) => {
                error!(%err, "unable to allocate buffer");
                panic!("{err}");
            }
        };
        if fill {
            let area = image.full_area();
            wipe_rectangle(&mut image, area, background, abs_black_threshold);
        }
        image
    }

    /// Allocate a buffer with this image's pixel format.
    pub fn compatible(
        &self,
        size: RectangleSize,
        fill: bool,
        background: Pixel,
        abs_black_threshold: u8,
    ) -> Self {
        Self::create(size, self.format, fill, background, abs_black_threshold)
    }

    /// Wrap an 8-bit luma buffer.
    pub fn from_gray(buffer: GrayImage) -> Self {
        Self {
            format: PixelFormat::Gray8,
            raster: Raster::Gray(buffer),
        }
    }

    /// Wrap an 8-bit RGB buffer.
    pub fn from_rgb(buffer: RgbImage) -> Self {
        Self {
            format: PixelFormat::Rgb24,
            raster: Raster::Rgb(buffer),
        }
    }

    // -- Ownership ------------------------------------------------------------

    /// Release the buffer this binding owns and take over `new_image`.
    ///
    /// `new_image` is moved in, so nothing else can reach it afterwards, and
    /// the previous storage is dropped before this returns.
    pub fn replace(&mut self, new_image: Image) {
        debug!(
            from_w = self.width(),
            from_h = self.height(),
            to_w = new_image.width(),
            to_h = new_image.height(),
            "Replacing image buffer"
        );
        let old = std::mem::replace(self, new_image);
        old.release();
    }

    /// Release ownership and free the backing storage.
    pub fn release(self) {
        drop(self);
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        match &self.raster {
            Raster::Gray(buf) => buf.width(),
            Raster::Rgb(buf) => buf.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match &self.raster {
            Raster::Gray(buf) => buf.height(),
            Raster::Rgb(buf) => buf.height(),
        }
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn size(&self) -> RectangleSize {
        RectangleSize::new(self.width(), self.height())
    }

    /// Rectangle covering every pixel.
    pub fn full_area(&self) -> Rectangle {
        Rectangle::from_size(Point::ORIGIN, self.size())
    }

    /// Clip `area` to this image's bounds.
    pub fn clip(&self, area: Rectangle) -> Rectangle {
        area.clip(self.size())
    }

    /// Copy out as an `image` crate buffer.
    pub fn to_dynamic(&self) -> DynamicImage {
        match &self.raster {
            Raster::Gray(buf) => DynamicImage::ImageLuma8(buf.clone()),
            Raster::Rgb(buf) => DynamicImage::ImageRgb8(buf.clone()),
        }
    }
}
