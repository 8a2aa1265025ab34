// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned regions and the quadrant vocabulary used to split them.

use kurbo::{Point, Rect};

/// Axis-aligned box defined by a center and half-extents.
///
/// Containment is inclusive on every bound, so a position lying on the edge
/// shared by two sibling quadrants is contained by both. The tree resolves
/// that ambiguity with [`Quadrant::INSERTION_ORDER`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    /// Center of the box.
    pub center: Point,
    /// Half of the box width. Never negative.
    pub half_width: f64,
    /// Half of the box height. Never negative.
    pub half_height: f64,
}

impl Region {
    /// Create a region from its center and half-extents.
    #[inline]
    pub fn new(center_x: f64, center_y: f64, half_width: f64, half_height: f64) -> Self {
        debug_assert!(
            half_width >= 0.0 && half_height >= 0.0,
            "region half-extents must be non-negative"
        );
        Self {
            center: Point::new(center_x, center_y),
            half_width,
            half_height,
        }
    }

    /// Create the region covering `rect`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kurbo::Rect;
    /// use quadmap_tree::Region;
    ///
    /// let canvas = Region::from_rect(Rect::new(0.0, 0.0, 800.0, 600.0));
    /// assert_eq!(canvas, Region::new(400.0, 300.0, 400.0, 300.0));
    /// ```
    #[inline]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(
            0.5 * (rect.x0 + rect.x1),
            0.5 * (rect.y0 + rect.y1),
            0.5 * rect.width(),
            0.5 * rect.height(),
        )
    }

    /// Center of the region.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The region as a Kurbo rectangle (min/max corners).
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.center.x - self.half_width,
            self.center.y - self.half_height,
            self.center.x + self.half_width,
            self.center.y + self.half_height,
        )
    }

    /// Whether `pos` lies inside the region, bounds included.
    ///
    /// NaN coordinates are never contained.
    #[inline]
    pub fn contains(&self, pos: Point) -> bool {
        pos.x >= self.center.x - self.half_width
            && pos.x <= self.center.x + self.half_width
            && pos.y >= self.center.y - self.half_height
            && pos.y <= self.center.y + self.half_height
    }

    /// The quarter of this region covering quadrant `q`.
    ///
    /// The quarter has half of this region's half-extents and its center is
    /// offset by exactly that amount along each axis.
    #[inline]
    pub fn quadrant(&self, q: Quadrant) -> Self {
        let hw = 0.5 * self.half_width;
        let hh = 0.5 * self.half_height;
        let (sx, sy) = q.signs();
        Self::new(
            self.center.x + sx * hw,
            self.center.y + sy * hh,
            hw,
            hh,
        )
    }

    /// All four quarters, in [`Quadrant::ALL`] order (NW, NE, SW, SE).
    #[inline]
    pub fn quarter(&self) -> [Self; 4] {
        Quadrant::ALL.map(|q| self.quadrant(q))
    }
}

/// One of the four quarters of a region.
///
/// The canvas is y-down: north is the half with smaller `y`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Quadrant {
    /// Smaller x, smaller y.
    NorthWest,
    /// Larger x, smaller y.
    NorthEast,
    /// Smaller x, larger y.
    SouthWest,
    /// Larger x, larger y.
    SouthEast,
}

impl Quadrant {
    /// Enumeration order: NW, NE, SW, SE.
    ///
    /// Children are stored in this order, and [`all_points`] and
    /// [`quadrant_center`] visit them in this order.
    ///
    /// [`all_points`]: crate::QuadNode::all_points
    /// [`quadrant_center`]: crate::QuadNode::quadrant_center
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Insertion priority: NE, NW, SE, SW.
    ///
    /// A point on an edge shared by two quarters goes to whichever comes first
    /// here. This differs from [`Quadrant::ALL`] and the two must not be unified:
    /// doing so would change which quarter wins boundary ties.
    pub const INSERTION_ORDER: [Self; 4] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Position of this quadrant in a children array laid out in [`Quadrant::ALL`] order.
    #[inline]
    pub const fn slot(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }

    /// Unit offsets of the quarter center relative to the parent center.
    #[inline]
    const fn signs(self) -> (f64, f64) {
        match self {
            Self::NorthWest => (-1.0, -1.0),
            Self::NorthEast => (1.0, -1.0),
            Self::SouthWest => (-1.0, 1.0),
            Self::SouthEast => (1.0, 1.0),
        }
    }

    /// The quadrant of a region centered at `center` that `pos` falls on,
    /// comparing coordinates only. Ties on the center lines go east and south.
    #[inline]
    pub fn classify(center: Point, pos: Point) -> Self {
        match (pos.x >= center.x, pos.y >= center.y) {
            (false, false) => Self::NorthWest,
            (true, false) => Self::NorthEast,
            (false, true) => Self::SouthWest,
            (true, true) => Self::SouthEast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_inclusive_on_every_bound() {
        let r = Region::new(10.0, 20.0, 5.0, 2.0);
        for (x, y) in [(5.0, 18.0), (15.0, 18.0), (5.0, 22.0), (15.0, 22.0), (10.0, 20.0)] {
            assert!(r.contains(Point::new(x, y)), "({x}, {y}) should be inside");
        }
        for (x, y) in [(4.999, 20.0), (15.001, 20.0), (10.0, 17.999), (10.0, 22.001)] {
            assert!(!r.contains(Point::new(x, y)), "({x}, {y}) should be outside");
        }
        assert!(!r.contains(Point::new(f64::NAN, 20.0)), "NaN is never contained");
    }

    #[test]
    fn zero_extent_region_contains_only_its_center() {
        let r = Region::new(3.0, 3.0, 0.0, 0.0);
        assert!(r.contains(Point::new(3.0, 3.0)), "center must be contained");
        assert!(!r.contains(Point::new(3.0, 3.000_001)), "anything else is outside");
    }

    #[test]
    fn quarters_tile_the_parent() {
        let parent = Region::new(400.0, 400.0, 400.0, 200.0);
        let [nw, ne, sw, se] = parent.quarter();
        assert_eq!(nw, Region::new(200.0, 300.0, 200.0, 100.0));
        assert_eq!(ne, Region::new(600.0, 300.0, 200.0, 100.0));
        assert_eq!(sw, Region::new(200.0, 500.0, 200.0, 100.0));
        assert_eq!(se, Region::new(600.0, 500.0, 200.0, 100.0));

        // The union of the quarters is the parent and they only share edges.
        let union = nw.rect().union(ne.rect()).union(sw.rect()).union(se.rect());
        assert_eq!(union, parent.rect());
        let area: f64 = parent.quarter().iter().map(|q| q.rect().area()).sum();
        assert_eq!(area, parent.rect().area(), "quarters must not overlap");
    }

    #[test]
    fn slots_follow_enumeration_order() {
        for (i, q) in Quadrant::ALL.into_iter().enumerate() {
            assert_eq!(q.slot(), i);
        }
        let slots = Quadrant::INSERTION_ORDER.map(Quadrant::slot);
        assert_eq!(slots, [1, 0, 3, 2]);
    }

    #[test]
    fn classify_sends_center_ties_south_east() {
        let c = Point::new(0.0, 0.0);
        assert_eq!(Quadrant::classify(c, c), Quadrant::SouthEast);
        assert_eq!(Quadrant::classify(c, Point::new(-1.0, 0.0)), Quadrant::SouthWest);
        assert_eq!(Quadrant::classify(c, Point::new(0.0, -1.0)), Quadrant::NorthEast);
        assert_eq!(Quadrant::classify(c, Point::new(-1.0, -1.0)), Quadrant::NorthWest);
    }

    #[test]
    fn from_rect_normalizes_inverted_rects() {
        let r = Region::from_rect(Rect::new(10.0, 10.0, 0.0, 0.0));
        assert_eq!(r, Region::new(5.0, 5.0, 5.0, 5.0));
    }
}
