// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sheet processing configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{
    Border, Delta, Direction, Interpolation, Pixel, Rectangle, RectangleSize, RotationDirection,
};

/// Fraction of full intensity below which a pixel counts as black.
const BLACK_THRESHOLD: f32 = 0.33;
/// Fraction of full intensity above which a pixel counts as white.
const WHITE_THRESHOLD: f32 = 0.9;

/// Per-sheet settings consumed by name by the processing pipeline.
///
/// The blit engine never reads this structure; callers pull out the fields
/// they need and pass them as plain parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Colour used to fill new or uncovered sheet area.
    pub sheet_background: Pixel,
    /// Colour written outside masks and inside borders.
    pub mask_color: Pixel,
    /// Grayscale below which a stored bilevel pixel is black.
    pub abs_black_threshold: u8,
    /// Grayscale above which a pixel counts as white.
    pub abs_white_threshold: u8,
    /// Resampling kernel for stretch and resize.
    pub interpolation: Interpolation,

    pub pre_wipes: Vec<Rectangle>,
    pub wipes: Vec<Rectangle>,
    pub post_wipes: Vec<Rectangle>,

    pub pre_shift: Delta,
    pub post_shift: Delta,

    pub pre_rotate: Option<RotationDirection>,
    pub post_rotate: Option<RotationDirection>,

    pub pre_mirror: Direction,
    pub post_mirror: Direction,

    pub sheet_size: Option<RectangleSize>,
    pub page_size: Option<RectangleSize>,
    pub stretch_size: Option<RectangleSize>,
    pub post_stretch_size: Option<RectangleSize>,

    pub pre_border: Border,
    pub border: Border,
    pub post_border: Border,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            sheet_background: Pixel::WHITE,
            mask_color: Pixel::WHITE,
            abs_black_threshold: (u8::MAX as f32 * (1.0 - BLACK_THRESHOLD)) as u8,
            abs_white_threshold: (u8::MAX as f32 * WHITE_THRESHOLD) as u8,
            interpolation: Interpolation::default(),
            pre_wipes: Vec::new(),
            wipes: Vec::new(),
            post_wipes: Vec::new(),
            pre_shift: Delta::default(),
            post_shift: Delta::default(),
            pre_rotate: None,
            post_rotate: None,
            pre_mirror: Direction::NONE,
            post_mirror: Direction::NONE,
            sheet_size: None,
            page_size: None,
            stretch_size: None,
            post_stretch_size: None,
            pre_border: Border::NULL,
            border: Border::NULL,
            post_border: Border::NULL,
        }
    }
}

impl SheetConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Serialise to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanwerkError;

    #[test]
    fn default_thresholds() {
        let config = SheetConfig::default();
        assert_eq!(config.abs_black_threshold, 170);
        assert_eq!(config.abs_white_threshold, 229);
        assert_eq!(config.interpolation, Interpolation::Cubic);
        assert_eq!(config.sheet_background, Pixel::WHITE);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = SheetConfig::from_json_str(
            r#"{
                "interpolation": "linear",
                "post_shift": { "horizontal": 5, "vertical": -3 },
                "wipes": [ { "vertex": [ { "x": 0, "y": 0 }, { "x": 9, "y": 9 } ] } ],
                "pre_rotate": "Clockwise"
            }"#,
        )
        .unwrap();
        assert_eq!(config.interpolation, Interpolation::Linear);
        assert_eq!(config.post_shift, Delta::new(5, -3));
        assert_eq!(config.wipes, vec![Rectangle::from_coords(0, 0, 9, 9)]);
        assert_eq!(config.pre_rotate, Some(RotationDirection::Clockwise));
        assert_eq!(config.abs_black_threshold, 170);
    }

    #[test]
    fn load_from_file_roundtrip() {
        let mut config = SheetConfig::default();
        config.sheet_size = Some(RectangleSize::new(2480, 3508));
        config.post_mirror = Direction {
            horizontal: true,
            vertical: false,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.json");
        std::fs::write(&path, config.to_json_string().unwrap()).unwrap();

        let loaded = SheetConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SheetConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ScanwerkError::Io(_)));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = SheetConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ScanwerkError::Serialization(_)));
    }
}
