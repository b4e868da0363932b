// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanwerk: core value types, rectangle geometry, region scanning, value
// parsing, configuration and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod geometry;
pub mod parse;
pub mod scan;
pub mod types;

pub use config::SheetConfig;
pub use error::ScanwerkError;
pub use scan::RegionScan;
pub use types::*;
