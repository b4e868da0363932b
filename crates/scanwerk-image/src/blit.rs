// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Blit engine: wipe, copy, centre, stretch, resize, 90-degree rotation,
// mirroring and translation over `Image` buffers.
//
// Every operation takes the black threshold used by the pixel writer for
// bilevel formats; it is forwarded unchanged and plays no other part here.

use scanwerk_core::{
    Delta, Direction, FloatPoint, Interpolation, Pixel, Point, Rectangle, RectangleSize,
    RotationDirection,
};
use tracing::{debug, info, instrument};

use crate::image::interpolate::interpolate;
use crate::Image;

/// Write `color` over the clipped `area`.
///
/// Returns the number of pixels written, which is the clipped pixel count
/// whether or not a pixel already held `color`.
pub fn wipe_rectangle(image: &mut Image, area: Rectangle, color: Pixel, abs_black_threshold: u8) -> u64 {
    let area = image.clip(area);
    let mut count = 0;
    for p in area.scan() {
        image.set_pixel(p, color, abs_black_threshold);
        count += 1;
    }
    count
}

/// Copy the clipped `source_area` of `source` into `target` with its top-left
/// corner at `target_origin`.
///
/// Only the source side is clipped. Target coordinates outside `target` are
/// dropped by the pixel writer.
pub fn copy_rectangle(
    source: &Image,
    target: &mut Image,
    source_area: Rectangle,
    target_origin: Point,
    abs_black_threshold: u8,
) {
    let area = source.clip(source_area);
    let start = area.vertex[0];
    for p in area.scan() {
        if let Some(dest) = destination(target_origin, start, p) {
            target.set_pixel(dest, source.get_pixel(p), abs_black_threshold);
        }
    }
}

/// Target coordinate of source point `p` when the region starting at `start`
/// is placed at `origin`. `None` when it falls outside the `i32` plane.
fn destination(origin: Point, start: Point, p: Point) -> Option<Point> {
    Some(Point::new(
        origin.x.checked_add(p.x - start.x)?,
        origin.y.checked_add(p.y - start.y)?,
    ))
}

/// Copy a region of `image` onto another position of the same image.
///
/// The clipped source region is read in full before any pixel is written,
/// so overlapping source and destination are handled.
pub fn copy_rectangle_within(
    image: &mut Image,
    source_area: Rectangle,
    target_origin: Point,
    abs_black_threshold: u8,
) {
    let area = image.clip(source_area);
    let start = area.vertex[0];
    let pixels: Vec<(Point, Pixel)> = area
        .scan()
        .filter_map(|p| Some((destination(target_origin, start, p)?, image.get_pixel(p))))
        .collect();
    for (dest, pixel) in pixels {
        image.set_pixel(dest, pixel, abs_black_threshold);
    }
}

/// Per-pixel intensity averaged by [`inverse_average`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionStatistic {
    /// Mean of channels.
    Brightness,
    /// Darkest channel.
    Lightness,
    /// Brightest channel.
    Darkness,
}

/// `255 - mean(intensity)` over the clipped `area`; 0 for an empty area.
pub fn inverse_average(image: &Image, area: Rectangle, statistic: RegionStatistic) -> u8 {
    let area = image.clip(area);
    let count = area.count_pixels();
    if count == 0 {
        return 0;
    }

    let sum: u64 = area
        .scan()
        .map(|p| {
            u64::from(match statistic {
                RegionStatistic::Brightness => image.grayscale(p),
                RegionStatistic::Lightness => image.lightness(p),
                RegionStatistic::Darkness => image.darkness_inverse(p),
            })
        })
        .sum();

    u8::MAX - (sum / count) as u8
}

/// Inverse average grayscale of `area`.
pub fn inverse_brightness_rect(image: &Image, area: Rectangle) -> u8 {
    inverse_average(image, area, RegionStatistic::Brightness)
}

/// Inverse average lightness of `area`.
pub fn inverse_lightness_rect(image: &Image, area: Rectangle) -> u8 {
    inverse_average(image, area, RegionStatistic::Lightness)
}

/// Inverse average darkness of `area`.
pub fn darkness_rect(image: &Image, area: Rectangle) -> u8 {
    inverse_average(image, area, RegionStatistic::Darkness)
}

/// Count pixels of `area` whose grayscale lies in `min..=max`, optionally
/// turning each of them white.
///
/// `area` is scanned as given; the caller clips it.
pub fn count_pixels_within_brightness(
    image: &mut Image,
    area: Rectangle,
    min: u8,
    max: u8,
    clear: bool,
    abs_black_threshold: u8,
) -> u64 {
    let mut count = 0;
    for p in area.scan() {
        let brightness = image.grayscale(p);
        if brightness < min || brightness > max {
            continue;
        }
        if clear {
            image.set_pixel(p, Pixel::WHITE, abs_black_threshold);
        }
        count += 1;
    }
    count
}

/// Place all of `source` centred inside the `target_size` region of
/// `target` at `target_origin`.
///
/// A smaller source is surrounded by `background`; a larger one is cropped
/// equally on both sides. Each axis is handled independently.
pub fn center_image(
    source: &Image,
    target: &mut Image,
    target_origin: Point,
    target_size: RectangleSize,
    background: Pixel,
    abs_black_threshold: u8,
) {
    let mut source_origin = Point::ORIGIN;
    let mut source_size = source.size();
    let mut target_origin = target_origin;

    if source_size.width < target_size.width || source_size.height < target_size.height {
        wipe_rectangle(
            target,
            Rectangle::from_size(target_origin, target_size),
            background,
            abs_black_threshold,
        );
    }

    if source_size.width <= target_size.width {
        target_origin.x = target_origin.x.saturating_add(((target_size.width - source_size.width) / 2) as i32);
    } else {
        source_origin.x += ((source_size.width - target_size.width) / 2) as i32;
        source_size.width = target_size.width;
    }
    if source_size.height <= target_size.height {
        target_origin.y = target_origin.y.saturating_add(((target_size.height - source_size.height) / 2) as i32);
    } else {
        source_origin.y += ((source_size.height - target_size.height) / 2) as i32;
        source_size.height = target_size.height;
    }

    copy_rectangle(
        source,
        target,
        Rectangle::from_size(source_origin, source_size),
        target_origin,
        abs_black_threshold,
    );
}

/// Resample all of `source` into all of `target`.
///
/// Target pixel `(x, y)` samples source position
/// `(x * sw / tw, y * sh / th)`.
pub fn stretch(source: &Image, target: &mut Image, mode: Interpolation, abs_black_threshold: u8) {
    let horizontal_ratio = source.width() as f32 / target.width() as f32;
    let vertical_ratio = source.height() as f32 / target.height() as f32;

    debug!(
        from_w = source.width(),
        from_h = source.height(),
        to_w = target.width(),
        to_h = target.height(),
        "Stretching"
    );

    for p in target.full_area().scan() {
        let coords = FloatPoint {
            x: p.x as f32 * horizontal_ratio,
            y: p.y as f32 * vertical_ratio,
        };
        target.set_pixel(p, interpolate(source, coords, mode), abs_black_threshold);
    }
}

/// Resample `image` to exactly `size`, replacing its buffer. Does nothing
/// when the size already matches.
#[instrument(skip(image), fields(from_w = image.width(), from_h = image.height()))]
pub fn stretch_and_replace(
    image: &mut Image,
    size: RectangleSize,
    mode: Interpolation,
    abs_black_threshold: u8,
) {
    if image.size() == size {
        return;
    }

    let mut target = image.compatible(size, false, Pixel::WHITE, abs_black_threshold);
    stretch(image, &mut target, mode, abs_black_threshold);
    image.replace(target);
}

/// Size that scales `current` by the smaller of the two per-axis ratios
/// towards `size`, exactly filling `size` on the constraining axis.
fn fit_size(current: RectangleSize, size: RectangleSize) -> RectangleSize {
    let horizontal_ratio = size.width as f32 / current.width as f32;
    let vertical_ratio = size.height as f32 / current.height as f32;

    if horizontal_ratio < vertical_ratio {
        RectangleSize::new(size.width, ((current.height as f32 * horizontal_ratio) as u32).max(1))
    } else if vertical_ratio < horizontal_ratio {
        RectangleSize::new(((current.width as f32 * vertical_ratio) as u32).max(1), size.height)
    } else {
        size
    }
}

/// Aspect-preserving resize to exactly `size`.
///
/// The image is stretched until it fills `size` on one axis, then centred
/// on a `background` canvas of `size`.
#[instrument(skip(image), fields(from_w = image.width(), from_h = image.height()))]
pub fn resize_and_replace(
    image: &mut Image,
    size: RectangleSize,
    mode: Interpolation,
    background: Pixel,
    abs_black_threshold: u8,
) {
    if image.size() == size {
        return;
    }

    info!(
        from_w = image.width(),
        from_h = image.height(),
        to_w = size.width,
        to_h = size.height,
        "Resizing image"
    );

    let stretch_size = fit_size(image.size(), size);
    stretch_and_replace(image, stretch_size, mode, abs_black_threshold);

    // Compare sizes rather than ratios: near-equal ratios can still land on
    // the requested size.
    if stretch_size == size {
        return;
    }

    let mut resized = image.compatible(size, true, background, abs_black_threshold);
    center_image(image, &mut resized, Point::ORIGIN, size, background, abs_black_threshold);
    image.replace(resized);
}

/// Rotate by 90 degrees, swapping width and height.
///
/// Source `(x, y)` lands on `(h-1-y, x)` clockwise and `(y, w-1-x)`
/// counter-clockwise.
#[instrument(skip(image), fields(w = image.width(), h = image.height()))]
pub fn flip_rotate_90(image: &mut Image, direction: RotationDirection, abs_black_threshold: u8) {
    let d = direction.sign();
    let width = image.width() as i32;
    let height = image.height() as i32;

    let mut rotated = image.compatible(
        RectangleSize::new(image.height(), image.width()),
        false,
        Pixel::WHITE,
        abs_black_threshold,
    );

    for p in image.full_area().scan() {
        let xx = (if d > 0 { height - 1 } else { 0 }) - p.y * d;
        let yy = (if d < 0 { width - 1 } else { 0 }) + p.x * d;
        rotated.set_pixel(Point::new(xx, yy), image.get_pixel(p), abs_black_threshold);
    }

    debug!(?direction, "Rotated 90 degrees");
    image.replace(rotated);
}

/// Mirror in place along the requested axes.
///
/// Only the half (or quarter) of the image whose pixels swap with their
/// mirrored counterparts is walked, so every pair swaps exactly once.
pub fn mirror(image: &mut Image, direction: Direction, abs_black_threshold: u8) {
    if direction.is_none() {
        return;
    }
    let Direction {
        horizontal,
        vertical,
    } = direction;
    let width = image.width() as i32;
    let height = image.height() as i32;

    let mut region = Rectangle::new(Point::ORIGIN, Point::new(i32::MAX, i32::MAX));
    if horizontal && !vertical {
        region.vertex[1].x = (width - 1) / 2;
    }
    if vertical {
        region.vertex[1].y = (height - 1) / 2;
    }
    let mut region = image.clip(region);

    // Walked by hand: the column bound narrows on the middle row.
    for y in region.vertex[0].y..=region.vertex[1].y {
        let yy = if vertical { height - y - 1 } else { y };
        // Odd height mirrored both ways: the middle row mirrors onto itself,
        // so only its left half swaps.
        if vertical && horizontal && y == yy {
            region.vertex[1].x = (width - 1) / 2;
        }

        for x in 0..=region.vertex[1].x {
            let xx = if horizontal { width - x - 1 } else { x };
            let first = Point::new(x, y);
            let second = Point::new(xx, yy);
            let pixel1 = image.get_pixel(first);
            let pixel2 = image.get_pixel(second);
            image.set_pixel(first, pixel2, abs_black_threshold);
            image.set_pixel(second, pixel1, abs_black_threshold);
        }
    }

    debug!(horizontal, vertical, "Mirrored");
}

/// Translate the image content by `delta` on a `background` canvas of the
/// same size. Content moved past an edge is lost.
#[instrument(skip(image), fields(w = image.width(), h = image.height()))]
pub fn shift_image(image: &mut Image, delta: Delta, background: Pixel, abs_black_threshold: u8) {
    let mut shifted = image.compatible(image.size(), true, background, abs_black_threshold);
    copy_rectangle(
        image,
        &mut shifted,
        image.full_area(),
        Point::ORIGIN.shifted(delta),
        abs_black_threshold,
    );
    image.replace(shifted);
}
