// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core value types for Scanwerk: points, sizes, rectangles, deltas, colours
// and the small closed enums used to parameterise blit operations.

use serde::{Deserialize, Serialize};

/// An integer pixel coordinate. Unbounded: may be negative or lie beyond
/// the image until clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate this point by `delta`, saturating at the `i32` range.
    pub fn shifted(self, delta: Delta) -> Self {
        Self {
            x: self.x.saturating_add(delta.horizontal),
            y: self.y.saturating_add(delta.vertical),
        }
    }
}

/// A fractional sampling position in source-image space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatPoint {
    pub x: f32,
    pub y: f32,
}

/// A span in pixels. Carries no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RectangleSize {
    pub width: u32,
    pub height: u32,
}

impl RectangleSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Two opposite corners. Either vertex may hold the greater coordinate on
/// either axis; call [`Rectangle::normalize`] before relying on ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub vertex: [Point; 2],
}

impl Rectangle {
    pub const fn new(first: Point, second: Point) -> Self {
        Self {
            vertex: [first, second],
        }
    }

    /// Rectangle from two corner coordinate pairs.
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }
}

/// A translation vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Delta {
    pub horizontal: i32,
    pub vertical: i32,
}

impl Delta {
    pub const fn new(horizontal: i32, vertical: i32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Widths stripped from each edge of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Border {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Border {
    /// The empty border; applying it changes nothing.
    pub const NULL: Border = Border {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

/// 90-degree rotation sense. Clockwise maps `(x, y)` to `(h-1-y, x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// The signed unit value (+1 or -1) used by the rotation formula.
    pub fn sign(self) -> i32 {
        match self {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Mirror axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Direction {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Direction {
    pub const NONE: Direction = Direction {
        horizontal: false,
        vertical: false,
    };

    pub fn is_none(&self) -> bool {
        !self.horizontal && !self.vertical
    }
}

/// An RGB colour value. How it is stored depends on the buffer's
/// [`PixelFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const WHITE: Pixel = Pixel::gray(u8::MAX);
    pub const BLACK: Pixel = Pixel::gray(0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Unpack a `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_value(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub const fn to_value(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Mean of the three channels.
    pub fn grayscale(self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }

    /// Darkest channel.
    pub fn lightness(self) -> u8 {
        crate::geometry::min3(self.r, self.g, self.b)
    }

    /// Brightest channel.
    pub fn darkness_inverse(self) -> u8 {
        crate::geometry::max3(self.r, self.g, self.b)
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Resampling kernel used when stretching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    Nearest,
    Linear,
    #[default]
    Cubic,
}

/// Storage layout of a raster buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// 8-bit luma.
    Gray8,
    /// 8 bits per channel RGB.
    Rgb24,
    /// Bilevel, stored as 0/255 luma.
    MonoWhite,
    /// Bilevel, stored as 0/255 luma like `MonoWhite`.
    MonoBlack,
}

impl PixelFormat {
    pub fn is_mono(self) -> bool {
        matches!(self, PixelFormat::MonoWhite | PixelFormat::MonoBlack)
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PixelFormat::Gray8 => "gray8",
            PixelFormat::Rgb24 => "rgb24",
            PixelFormat::MonoWhite => "monowhite",
            PixelFormat::MonoBlack => "monoblack",
        };
        f.write_str(name)
    }
}
