// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types for the quadtree.

/// Axis-aligned region defined by a center and half-extents.
///
/// Used both for quadtree node boundaries and for query ranges. Containment
/// is half-open on both axes so that a point sitting exactly on a shared
/// edge belongs to exactly one of two adjacent regions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Half-width (non-negative).
    pub hw: f64,
    /// Half-height (non-negative).
    pub hh: f64,
}

impl Region {
    /// Create a region from a center and half-extents.
    #[inline(always)]
    pub const fn new(cx: f64, cy: f64, hw: f64, hh: f64) -> Self {
        Self { cx, cy, hw, hh }
    }

    /// Create a region from min/max corners.
    #[inline]
    pub fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            cx: 0.5 * (min_x + max_x),
            cy: 0.5 * (min_y + max_y),
            hw: 0.5 * (max_x - min_x),
            hh: 0.5 * (max_y - min_y),
        }
    }

    /// Whether the point lies inside this region.
    ///
    /// The test is half-open: `cx - hw <= x < cx + hw` (and likewise for y).
    /// The asymmetry is intentional so that adjacent sibling quadrants never
    /// both claim a point on their shared edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use plexus_quadtree::Region;
    ///
    /// let r = Region::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(r.contains(-10.0, 0.0)); // min edge is inside
    /// assert!(!r.contains(10.0, 0.0)); // max edge is not
    /// ```
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.cx - self.hw <= x && x < self.cx + self.hw && self.cy - self.hh <= y && y < self.cy + self.hh
    }

    /// Whether two regions overlap.
    ///
    /// Regions intersect unless they are separated along either axis by more
    /// than the sum of their half-extents.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        abs(self.cx - other.cx) <= self.hw + other.hw
            && abs(self.cy - other.cy) <= self.hh + other.hh
    }

    /// One quadrant of this region, with half the half-extents.
    #[inline]
    pub(crate) fn quadrant(&self, east: bool, south: bool) -> Self {
        let hw = 0.5 * self.hw;
        let hh = 0.5 * self.hh;
        Self {
            cx: if east { self.cx + hw } else { self.cx - hw },
            cy: if south { self.cy + hh } else { self.cy - hh },
            hw,
            hh,
        }
    }
}

// `f64::abs` is in `std`, not `core`; avoid pulling in `libm` for one call.
#[inline(always)]
fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

#[cfg(test)]
mod tests {
    use super::Region;

    #[test]
    fn contains_is_half_open() {
        let r = Region::new(0.0, 0.0, 50.0, 50.0);
        assert!(r.contains(-50.0, -50.0));
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(49.999, 49.999));
        assert!(!r.contains(50.0, 0.0));
        assert!(!r.contains(0.0, 50.0));
        assert!(!r.contains(-50.001, 0.0));
    }

    #[test]
    fn shared_edge_belongs_to_one_quadrant() {
        let r = Region::new(0.0, 0.0, 50.0, 50.0);
        let ne = r.quadrant(true, false);
        let nw = r.quadrant(false, false);
        // x = 0 is the shared vertical edge: inside NE, outside NW.
        assert!(ne.contains(0.0, -10.0));
        assert!(!nw.contains(0.0, -10.0));
    }

    #[test]
    fn quadrants_halve_extents() {
        let r = Region::new(10.0, 20.0, 40.0, 8.0);
        let se = r.quadrant(true, true);
        assert_eq!(se, Region::new(30.0, 24.0, 20.0, 4.0));
    }

    #[test]
    fn intersects_touching_and_separated() {
        let a = Region::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Region::new(15.0, 0.0, 5.0, 5.0))); // touching edges
        assert!(a.intersects(&Region::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Region::new(20.1, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Region::new(0.0, -30.0, 10.0, 5.0)));
    }
}
