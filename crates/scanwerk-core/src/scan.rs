// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Region scanner: the row-major coordinate walk shared by every
// pixel-touching operation.

use crate::types::{Point, Rectangle};

/// Iterator over every coordinate of a clipped rectangle, inclusive of both
/// corners: rows by ascending `y`, columns by ascending `x` within a row.
///
/// The rectangle is taken as given. Callers pass the output of
/// [`Rectangle::clip`]; a collapsed rectangle yields nothing. Call
/// [`Rectangle::scan`] again for a fresh walk.
#[derive(Debug, Clone)]
pub struct RegionScan {
    area: Rectangle,
    next: Option<Point>,
}

impl RegionScan {
    pub fn new(area: Rectangle) -> Self {
        let next = if area.is_empty() {
            None
        } else {
            Some(area.vertex[0])
        };
        Self { area, next }
    }

    fn remaining(&self) -> u64 {
        let Some(p) = self.next else {
            return 0;
        };
        let [start, end] = self.area.vertex;
        let width = (end.x as i64 - start.x as i64 + 1) as u64;
        let rows_after = (end.y as i64 - p.y as i64) as u64;
        let in_row = (end.x as i64 - p.x as i64 + 1) as u64;
        rows_after * width + in_row
    }
}

impl Iterator for RegionScan {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next?;
        let [start, end] = self.area.vertex;
        self.next = if current.x < end.x {
            Some(Point::new(current.x + 1, current.y))
        } else if current.y < end.y {
            Some(Point::new(start.x, current.y + 1))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for RegionScan {}
