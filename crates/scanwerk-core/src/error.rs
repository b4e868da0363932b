// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Scanwerk.

use thiserror::Error;

use crate::types::PixelFormat;

/// Top-level error type for all Scanwerk operations.
#[derive(Debug, Error)]
pub enum ScanwerkError {
    // -- Raster errors --
    #[error("unable to allocate {width}x{height} {format} buffer")]
    Allocation {
        width: u32,
        height: u32,
        format: PixelFormat,
    },

    // -- Value parsing --
    #[error("invalid rectangle: {0}")]
    InvalidRectangle(String),

    #[error("invalid size: {0}")]
    InvalidSize(String),

    #[error("invalid delta: {0}")]
    InvalidDelta(String),

    #[error("invalid border: {0}")]
    InvalidBorder(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    #[error("invalid rotation: {0}")]
    InvalidRotation(String),

    #[error("unknown interpolation: {0}")]
    InvalidInterpolation(String),

    // -- Configuration / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ScanwerkError>;
