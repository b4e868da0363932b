// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Interpolation kernels: sample a colour at a fractional source position.

use scanwerk_core::{FloatPoint, Interpolation, Pixel, Point};

use super::buffer::Image;

/// Sample `image` at `coords` with the given kernel.
pub fn interpolate(image: &Image, coords: FloatPoint, mode: Interpolation) -> Pixel {
    match mode {
        Interpolation::Nearest => nearest(image, coords),
        Interpolation::Linear => bilinear(image, coords),
        Interpolation::Cubic => bicubic(image, coords),
    }
}

fn nearest(image: &Image, coords: FloatPoint) -> Pixel {
    image.get_pixel(Point::new(coords.x.round() as i32, coords.y.round() as i32))
}

fn map_channels(a: Pixel, b: Pixel, f: impl Fn(u8, u8) -> u8) -> Pixel {
    Pixel::new(f(a.r, b.r), f(a.g, b.g), f(a.b, b.b))
}

fn linear(factor: f32, a: Pixel, b: Pixel) -> Pixel {
    map_channels(a, b, |a, b| ((1.0 - factor) * a as f32 + factor * b as f32) as u8)
}

/// Blend the up to four neighbours around `coords`.
///
/// When only one axis has a neighbour, the blend uses that axis's fraction
/// rather than returning the first corner, so stretch output at
/// integer-aligned source columns or rows is blended, not copied.
fn bilinear(image: &Image, coords: FloatPoint) -> Pixel {
    let low = Point::new(coords.x.floor() as i32, coords.y.floor() as i32);
    let high = Point::new(coords.x.ceil() as i32, coords.y.ceil() as i32);

    // Right/bottom edge: no neighbour to blend with.
    if !image.full_area().contains(high) || low == high {
        return image.get_pixel(low);
    }

    let fx = coords.x - low.x as f32;
    let fy = coords.y - low.y as f32;

    if low.x == high.x {
        return linear(fy, image.get_pixel(low), image.get_pixel(high));
    }
    if low.y == high.y {
        return linear(fx, image.get_pixel(low), image.get_pixel(high));
    }

    let top = linear(
        fx,
        image.get_pixel(low),
        image.get_pixel(Point::new(high.x, low.y)),
    );
    let bottom = linear(
        fx,
        image.get_pixel(Point::new(low.x, high.y)),
        image.get_pixel(high),
    );
    linear(fy, top, bottom)
}

/// 1-D cubic through four samples, clamped to 8 bits.
fn cubic_scale(factor: f32, a: u8, b: u8, c: u8, d: u8) -> u8 {
    let (a, b, c, d) = (a as f32, b as f32, c as f32, d as f32);
    let result = b
        + 0.5
            * factor
            * (c - a
                + factor * (2.0 * a - 5.0 * b + 4.0 * c - d + factor * (3.0 * (b - c) + d - a)));
    (result as i32).clamp(0, u8::MAX as i32) as u8
}

fn cubic(factor: f32, px: [Pixel; 4]) -> Pixel {
    Pixel::new(
        cubic_scale(factor, px[0].r, px[1].r, px[2].r, px[3].r),
        cubic_scale(factor, px[0].g, px[1].g, px[2].g, px[3].g),
        cubic_scale(factor, px[0].b, px[1].b, px[2].b, px[3].b),
    )
}

fn bicubic(image: &Image, coords: FloatPoint) -> Pixel {
    let base = Point::new(coords.x as i32, coords.y as i32);
    let fx = coords.x - base.x as f32;
    let fy = coords.y - base.y as f32;

    let rows: [Pixel; 4] = std::array::from_fn(|i| {
        let y = base.y + i as i32 - 1;
        let quad = std::array::from_fn(|j| image.get_pixel(Point::new(base.x + j as i32 - 1, y)));
        cubic(fx, quad)
    });
    cubic(fy, rows)
}
