// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rectangle geometry: normalisation, clipping, sizing, containment and the
// corner-based overlap test. All functions are total; unordered input is
// corrected by normalisation, never rejected.

use crate::scan::RegionScan;
use crate::types::{Border, Point, Rectangle, RectangleSize};

/// Smallest of three values.
pub fn min3<T: Ord>(a: T, b: T, c: T) -> T {
    a.min(b).min(c)
}

/// Largest of three values.
pub fn max3<T: Ord>(a: T, b: T, c: T) -> T {
    a.max(b).max(c)
}

/// Clamp an `i64` span into `u32`.
fn span(len: i64) -> u32 {
    len.clamp(0, u32::MAX as i64) as u32
}

impl Rectangle {
    /// Rectangle of `size` whose top-left corner is `origin`.
    pub fn from_size(origin: Point, size: RectangleSize) -> Self {
        let right = origin.x as i64 + size.width as i64 - 1;
        let bottom = origin.y as i64 + size.height as i64 - 1;
        Self::new(
            origin,
            Point::new(
                right.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
                bottom.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ),
        )
    }

    /// Reorder each axis so that `vertex[0]` holds the minimum.
    pub fn normalize(self) -> Self {
        let [a, b] = self.vertex;
        Self::new(
            Point::new(a.x.min(b.x), a.y.min(b.y)),
            Point::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    /// Normalise, then clamp into `[0, width-1] x [0, height-1]`.
    ///
    /// A rectangle entirely outside the bounds collapses so that
    /// `vertex[1] < vertex[0]` on at least one axis; see
    /// [`Rectangle::is_empty`].
    pub fn clip(self, bounds: RectangleSize) -> Self {
        let normal = self.normalize();
        let max_x = (bounds.width as i64 - 1).min(i32::MAX as i64) as i32;
        let max_y = (bounds.height as i64 - 1).min(i32::MAX as i64) as i32;
        Self::new(
            Point::new(normal.vertex[0].x.max(0), normal.vertex[0].y.max(0)),
            Point::new(normal.vertex[1].x.min(max_x), normal.vertex[1].y.min(max_y)),
        )
    }

    /// Inclusive width and height: `|x1-x0|+1`, `|y1-y0|+1`. Does not clip.
    pub fn size(&self) -> RectangleSize {
        let [a, b] = self.vertex;
        RectangleSize::new(
            span((a.x as i64 - b.x as i64).abs() + 1),
            span((a.y as i64 - b.y as i64).abs() + 1),
        )
    }

    /// True for the collapsed result of clipping an off-image rectangle.
    pub fn is_empty(&self) -> bool {
        self.vertex[1].x < self.vertex[0].x || self.vertex[1].y < self.vertex[0].y
    }

    /// Pixel count of an already clipped rectangle. Collapsed rectangles
    /// count zero.
    pub fn count_pixels(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        let size = self.size();
        size.width as u64 * size.height as u64
    }

    /// Inclusive containment test against the normalised rectangle.
    pub fn contains(&self, point: Point) -> bool {
        let area = self.normalize();
        point.x >= area.vertex[0].x
            && point.x <= area.vertex[1].x
            && point.y >= area.vertex[0].y
            && point.y <= area.vertex[1].y
    }

    /// True iff either stored corner of the normalised `self` lies inside
    /// `other`.
    ///
    /// Only the two defining corners are tested, so a rectangle straddling
    /// `other` without a corner inside it is not reported. Callers depend
    /// on this exact behaviour.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        let first = self.normalize();
        let second = other.normalize();
        second.contains(first.vertex[0]) || second.contains(first.vertex[1])
    }

    /// True iff `self` overlaps any rectangle of `others`, in order.
    pub fn overlaps_any<'a>(&self, others: impl IntoIterator<Item = &'a Rectangle>) -> bool {
        others.into_iter().any(|other| self.overlaps(other))
    }

    /// Row-major walk over every coordinate of this (clipped) rectangle.
    pub fn scan(&self) -> RegionScan {
        RegionScan::new(*self)
    }
}

/// True iff `point` lies inside any of `areas`.
pub fn point_in_any<'a>(point: Point, areas: impl IntoIterator<Item = &'a Rectangle>) -> bool {
    areas.into_iter().any(|area| area.contains(point))
}

impl Border {
    /// The interior left after stripping the border from a sheet of
    /// `size`.
    pub fn to_mask(&self, size: RectangleSize) -> Rectangle {
        Rectangle::from_coords(
            self.left,
            self.top,
            size.width as i32 - self.right - 1,
            size.height as i32 - self.bottom - 1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rectangle {
        Rectangle::from_coords(x0, y0, x1, y1)
    }

    #[test]
    fn min3_max3_generic() {
        assert_eq!(min3(4, -2, 9), -2);
        assert_eq!(max3(4u8, 200, 9), 200);
    }

    #[test]
    fn normalize_orders_each_axis() {
        let r = rect(10, 2, 3, 8).normalize();
        assert_eq!(r, rect(3, 2, 10, 8));
        assert_eq!(r.normalize(), r);
    }

    #[test]
    fn normalize_is_idempotent_on_many_shapes() {
        for &(x0, y0, x1, y1) in &[(0, 0, 0, 0), (5, -5, -5, 5), (-3, 7, 2, -1), (9, 9, 1, 1)] {
            let once = rect(x0, y0, x1, y1).normalize();
            assert_eq!(once.normalize(), once);
            assert!(once.vertex[0].x <= once.vertex[1].x);
            assert!(once.vertex[0].y <= once.vertex[1].y);
        }
    }

    #[test]
    fn clip_clamps_to_bounds() {
        let bounds = RectangleSize::new(10, 8);
        let r = rect(12, -4, -3, 5).clip(bounds);
        assert_eq!(r, rect(0, 0, 9, 5));
        assert_eq!(r.size(), RectangleSize::new(10, 6));
    }

    #[test]
    fn clip_of_inside_rectangle_is_unchanged() {
        let r = rect(2, 3, 4, 5);
        assert_eq!(r.clip(RectangleSize::new(10, 10)), r);
    }

    #[test]
    fn clip_outside_collapses_to_empty() {
        let r = rect(20, 20, 30, 30).clip(RectangleSize::new(10, 10));
        assert!(r.is_empty());
        assert_eq!(r.count_pixels(), 0);
        assert_eq!(r.scan().count(), 0);
    }

    #[test]
    fn size_is_inclusive() {
        assert_eq!(rect(2, 2, 5, 5).size(), RectangleSize::new(4, 4));
        assert_eq!(rect(5, 5, 5, 5).size(), RectangleSize::new(1, 1));
        assert_eq!(rect(5, 0, 2, 0).size(), RectangleSize::new(4, 1));
    }

    #[test]
    fn from_size_roundtrips_size() {
        let r = Rectangle::from_size(Point::new(3, 4), RectangleSize::new(5, 2));
        assert_eq!(r, rect(3, 4, 7, 5));
        assert_eq!(r.size(), RectangleSize::new(5, 2));
    }

    #[test]
    fn count_pixels_of_clipped_area() {
        assert_eq!(rect(0, 0, 3, 1).count_pixels(), 8);
    }

    #[test]
    fn contains_normalizes_first() {
        let r = rect(5, 5, 1, 1);
        assert!(r.contains(Point::new(1, 1)));
        assert!(r.contains(Point::new(5, 3)));
        assert!(!r.contains(Point::new(6, 3)));
        assert!(!r.contains(Point::new(0, 0)));
    }

    #[test]
    fn overlap_detects_corner_inside() {
        let a = rect(0, 0, 4, 4);
        let b = rect(3, 3, 8, 8);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn overlap_is_corner_only() {
        // A wide bar crossing a tall bar: no corner of the bar is inside.
        let bar = rect(0, 4, 10, 5);
        let post = rect(4, 0, 5, 10);
        assert!(!bar.overlaps(&post));
        assert!(!post.overlaps(&bar));
    }

    #[test]
    fn overlap_any_scans_set() {
        let set = [rect(20, 20, 30, 30), rect(0, 0, 2, 2)];
        assert!(rect(1, 1, 5, 5).overlaps_any(&set));
        assert!(!rect(10, 10, 12, 12).overlaps_any(&set));
        let none: [Rectangle; 0] = [];
        assert!(!rect(1, 1, 5, 5).overlaps_any(&none));
    }

    #[test]
    fn point_in_any_set() {
        let set = [rect(0, 0, 1, 1), rect(5, 5, 6, 6)];
        assert!(point_in_any(Point::new(6, 5), &set));
        assert!(!point_in_any(Point::new(3, 3), &set));
    }

    #[test]
    fn border_to_mask_strips_edges() {
        let border = Border {
            left: 1,
            top: 2,
            right: 3,
            bottom: 4,
        };
        let mask = border.to_mask(RectangleSize::new(20, 10));
        assert_eq!(mask, rect(1, 2, 16, 5));
    }
}
