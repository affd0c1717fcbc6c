// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of the dot row inside the indicator bounds.

use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect};

/// Resolved positions of every dot for one set of bounds.
///
/// Dots form a single horizontal row:
/// - each dot is a `diameter × diameter` square with an inscribed circle,
/// - dot bottoms sit on the bottom edge of the bounds,
/// - the first dot starts at the leading edge and the last dot ends at the
///   trailing edge, with equal spacing between centers.
///
/// A single dot is centered horizontally. When the bounds are too narrow to
/// hold every dot, spacing collapses to zero and the row is packed from the
/// leading edge.
#[derive(Clone, Debug, PartialEq)]
pub struct DotLayout {
    bounds: Rect,
    diameter: f64,
    rects: Vec<Rect>,
}

impl DotLayout {
    /// Lays out `pages` dots of `diameter` inside `bounds`.
    ///
    /// `bounds` must be finite.
    #[must_use]
    pub fn compute(bounds: Rect, pages: usize, diameter: f64) -> Self {
        debug_assert!(
            bounds.is_finite(),
            "DotLayout bounds must be finite; got {bounds:?}"
        );
        let bounds = bounds.abs();
        let y1 = bounds.y1;
        let y0 = y1 - diameter;

        let rects = match pages {
            0 => Vec::new(),
            1 => {
                let x0 = bounds.center().x - diameter / 2.0;
                alloc::vec![Rect::new(x0, y0, x0 + diameter, y1)]
            }
            _ => {
                let free = bounds.width() - diameter * pages as f64;
                let gap = (free / (pages - 1) as f64).max(0.0);
                (0..pages)
                    .map(|i| {
                        let x0 = bounds.x0 + i as f64 * (diameter + gap);
                        Rect::new(x0, y0, x0 + diameter, y1)
                    })
                    .collect()
            }
        };

        Self {
            bounds,
            diameter,
            rects,
        }
    }

    /// The bounds this layout was computed for.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Dot diameter.
    #[must_use]
    pub const fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Number of laid-out dots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` if no dots were laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Frame of dot `index`, if it exists.
    #[must_use]
    pub fn rect(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied()
    }

    /// Midpoint of the frame of dot `index`, if it exists.
    #[must_use]
    pub fn center(&self, index: usize) -> Option<Point> {
        self.rect(index).map(|r| r.center())
    }

    /// Circle drawn for dot `index`, if it exists.
    #[must_use]
    pub fn circle(&self, index: usize) -> Option<Circle> {
        self.center(index).map(|c| Circle::new(c, self.diameter / 2.0))
    }

    /// Returns the dot under `pt`, if any.
    ///
    /// Each dot is treated as a filled disk inflated by `tolerance`. When
    /// inflated disks overlap, the dot with the nearest center wins.
    #[must_use]
    pub fn hit_test(&self, pt: Point, tolerance: f64) -> Option<usize> {
        let reach = self.diameter / 2.0 + tolerance.max(0.0);
        let mut best: Option<(usize, f64)> = None;
        for (i, rect) in self.rects.iter().enumerate() {
            let dist = rect.center().distance(pt);
            if dist > reach {
                continue;
            }
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((i, dist));
            }
        }
        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::DotLayout;
    use kurbo::{Point, Rect};

    #[test]
    fn equal_centering_spans_bounds() {
        // 4 dots of 14 in 200 wide: gap = (200 - 56) / 3 = 48.
        let layout = DotLayout::compute(Rect::new(0.0, 0.0, 200.0, 30.0), 4, 14.0);
        assert_eq!(layout.len(), 4);
        assert_eq!(layout.rect(0), Some(Rect::new(0.0, 16.0, 14.0, 30.0)));
        assert_eq!(layout.rect(1), Some(Rect::new(62.0, 16.0, 76.0, 30.0)));
        assert_eq!(layout.rect(3), Some(Rect::new(186.0, 16.0, 200.0, 30.0)));
        assert_eq!(layout.center(1), Some(Point::new(69.0, 23.0)));
        assert_eq!(layout.rect(4), None);
    }

    #[test]
    fn single_dot_is_centered() {
        let layout = DotLayout::compute(Rect::new(0.0, 0.0, 100.0, 20.0), 1, 10.0);
        assert_eq!(layout.center(0), Some(Point::new(50.0, 15.0)));
    }

    #[test]
    fn narrow_bounds_pack_from_leading_edge() {
        let layout = DotLayout::compute(Rect::new(10.0, 0.0, 30.0, 10.0), 3, 10.0);
        assert_eq!(layout.rect(0).map(|r| r.x0), Some(10.0));
        assert_eq!(layout.rect(1).map(|r| r.x0), Some(20.0));
        assert_eq!(layout.rect(2).map(|r| r.x0), Some(30.0));
    }

    #[test]
    #[should_panic(expected = "DotLayout bounds must be finite")]
    fn non_finite_bounds_are_rejected_in_debug() {
        let _ = DotLayout::compute(Rect::new(0.0, 0.0, f64::NAN, 30.0), 3, 14.0);
    }

    #[test]
    fn hit_test_picks_nearest_dot() {
        let layout = DotLayout::compute(Rect::new(0.0, 0.0, 200.0, 30.0), 4, 14.0);
        assert_eq!(layout.hit_test(Point::new(69.0, 23.0), 0.0), Some(1));
        assert_eq!(layout.hit_test(Point::new(78.0, 23.0), 0.0), None);
        assert_eq!(layout.hit_test(Point::new(78.0, 23.0), 4.0), Some(1));
        assert_eq!(layout.hit_test(Point::new(100.0, 23.0), 10.0), None);
    }
}
