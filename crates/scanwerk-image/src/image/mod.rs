// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module: buffer lifecycle, pixel access and interpolation.

pub mod buffer;
pub mod interpolate;
pub mod pixel;

pub use buffer::Image;
