// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Wipes, masks and borders: applying already-decided areas to a sheet.

use scanwerk_core::geometry::point_in_any;
use scanwerk_core::{Border, Pixel, Rectangle};
use tracing::debug;

use crate::blit::wipe_rectangle;
use crate::Image;

/// Wipe each area in turn with `color`. Returns the total number of pixels
/// written.
pub fn apply_wipes(image: &mut Image, wipes: &[Rectangle], color: Pixel, abs_black_threshold: u8) -> u64 {
    wipes
        .iter()
        .map(|area| {
            let count = wipe_rectangle(image, *area, color, abs_black_threshold);
            debug!(%area, count, "wipe");
            count
        })
        .sum()
}

/// Set every pixel lying outside all of `masks` to `color`. Returns the
/// number of pixels written; an empty mask list leaves the image untouched.
pub fn apply_masks(image: &mut Image, masks: &[Rectangle], color: Pixel, abs_black_threshold: u8) -> u64 {
    if masks.is_empty() {
        return 0;
    }

    let mut count = 0;
    for p in image.full_area().scan() {
        if !point_in_any(p, masks) {
            image.set_pixel(p, color, abs_black_threshold);
            count += 1;
        }
    }
    count
}

/// Clear the `border` strips along each edge of the sheet to `color`.
pub fn apply_border(image: &mut Image, border: Border, color: Pixel, abs_black_threshold: u8) -> u64 {
    if border.is_null() {
        return 0;
    }

    let mask = border.to_mask(image.size());
    debug!(?border, %mask, "applying border");
    apply_masks(image, &[mask], color, abs_black_threshold)
}
