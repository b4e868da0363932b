// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanwerk-image: Raster buffers and pixel-exact geometric operations for the
// Scanwerk page cleanup pipeline.
//
// Provides the buffer lifecycle (allocate, fill, hand-off), the pixel accessor
// and interpolation kernels, the blit engine (wipe, copy, centre, stretch,
// resize, rotate, mirror, shift) and wipe/mask/border application.

pub mod blit;
pub mod image;
pub mod masks;

// Re-export the primary types so callers can use `scanwerk_image::Image` etc.
pub use blit::{
    center_image, copy_rectangle, copy_rectangle_within, count_pixels_within_brightness,
    darkness_rect, flip_rotate_90, inverse_average, inverse_brightness_rect,
    inverse_lightness_rect, mirror, resize_and_replace, shift_image, stretch,
    stretch_and_replace, wipe_rectangle, RegionStatistic,
};
pub use crate::image::buffer::Image;
pub use crate::image::interpolate::interpolate;
pub use masks::{apply_border, apply_masks, apply_wipes};
