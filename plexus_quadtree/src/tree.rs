// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owning point quadtree: insert, subdivide, range query.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use smallvec::SmallVec;

use crate::region::Region;

/// Default number of points a node holds before it subdivides.
pub const DEFAULT_CAPACITY: usize = 4;

/// A point stored in the tree, with its payload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entry<P> {
    /// Point x.
    pub x: f64,
    /// Point y.
    pub y: f64,
    /// Caller payload (typically an index into the caller's own storage).
    pub payload: P,
}

impl<P> Entry<P> {
    /// Create an entry.
    #[inline(always)]
    pub const fn new(x: f64, y: f64, payload: P) -> Self {
        Self { x, y, payload }
    }
}

/// An owning 2D point quadtree.
///
/// Each node holds up to `capacity` points. Inserting into a full leaf
/// subdivides it into four child quadrants (NE, NW, SE, SW) and routes the
/// new point to whichever child contains it; points already stored in the
/// node stay where they are. Children exclusively belong to their parent and
/// never point back, so the structure is a plain owning tree.
///
/// There is no removal: callers that index moving points discard the tree
/// and rebuild it from current positions. Construction is cheap enough that
/// per-frame (or every-few-frames) rebuilds are the intended usage.
///
/// ## Example
///
/// ```rust
/// use plexus_quadtree::{Quadtree, Region};
///
/// let mut tree: Quadtree<u32> = Quadtree::new(Region::new(0.0, 0.0, 50.0, 50.0));
/// tree.insert(0.0, 0.0, 0);
/// tree.insert(5.0, 5.0, 1);
/// tree.insert(-5.0, -5.0, 2);
/// // Outside the boundary: dropped, signalled by the return value.
/// assert!(!tree.insert(100.0, 100.0, 3));
///
/// let mut hits = tree.query(&Region::new(0.0, 0.0, 10.0, 10.0));
/// hits.sort_by_key(|e| e.payload);
/// let payloads: Vec<u32> = hits.iter().map(|e| e.payload).collect();
/// assert_eq!(payloads, vec![0, 1, 2]);
/// ```
pub struct Quadtree<P> {
    boundary: Region,
    capacity: usize,
    points: SmallVec<[Entry<P>; DEFAULT_CAPACITY]>,
    /// NE, NW, SE, SW. Present iff this node has ever overflowed.
    children: Option<Box<[Quadtree<P>; 4]>>,
}

impl<P: Copy + Debug> Quadtree<P> {
    /// Create an empty tree over `boundary` with [`DEFAULT_CAPACITY`].
    pub fn new(boundary: Region) -> Self {
        Self::with_capacity(boundary, DEFAULT_CAPACITY)
    }

    /// Create an empty tree over `boundary` with an explicit node capacity.
    ///
    /// Lower capacities mean deeper trees and more subdivision overhead, but
    /// tighter pruning per query. A capacity of zero is treated as one.
    pub fn with_capacity(boundary: Region, capacity: usize) -> Self {
        Self {
            boundary,
            capacity: capacity.max(1),
            points: SmallVec::new(),
            children: None,
        }
    }

    /// The region this node covers.
    #[inline]
    pub fn boundary(&self) -> Region {
        self.boundary
    }

    /// The per-node capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether this node has subdivided into four quadrants.
    #[inline]
    pub fn is_subdivided(&self) -> bool {
        self.children.is_some()
    }

    /// Total number of points stored in this node and all descendants.
    pub fn len(&self) -> usize {
        let mut n = self.points.len();
        if let Some(children) = &self.children {
            for child in children.iter() {
                n += child.len();
            }
        }
        n
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.children.is_none()
    }

    /// Insert a point.
    ///
    /// Returns `false` if the point lies outside this node's boundary. At
    /// the root that means the point is outside the whole index and has been
    /// dropped; callers that rebuild from clamped or wrapped positions may
    /// treat this as a normal outcome rather than an error.
    pub fn insert(&mut self, x: f64, y: f64, payload: P) -> bool {
        if !self.boundary.contains(x, y) {
            return false;
        }
        if self.children.is_none() {
            if self.points.len() < self.capacity {
                self.points.push(Entry::new(x, y, payload));
                return true;
            }
            self.subdivide();
        }
        // Children cover the whole boundary between them, and `contains`
        // already passed above, so exactly one child accepts.
        let children = self.children.as_mut().expect("subdivided above");
        for child in children.iter_mut() {
            if child.insert(x, y, payload) {
                return true;
            }
        }
        false
    }

    fn subdivide(&mut self) {
        let b = self.boundary;
        let cap = self.capacity;
        self.children = Some(Box::new([
            Self::with_capacity(b.quadrant(true, false), cap),  // NE
            Self::with_capacity(b.quadrant(false, false), cap), // NW
            Self::with_capacity(b.quadrant(true, true), cap),   // SE
            Self::with_capacity(b.quadrant(false, true), cap),  // SW
        ]));
    }

    /// Collect all points inside `range` into a fresh vector.
    pub fn query(&self, range: &Region) -> Vec<Entry<P>> {
        let mut out = Vec::new();
        self.query_into(range, &mut out);
        out
    }

    /// Collect all points inside `range`, appending to `out`.
    ///
    /// This is the accumulator form of [`query`][Self::query]: callers that
    /// run many queries per frame can clear and reuse one buffer instead of
    /// allocating each time.
    pub fn query_into(&self, range: &Region, out: &mut Vec<Entry<P>>) {
        self.visit(range, |e| out.push(*e));
    }

    /// Visit all points inside `range` without allocating result storage.
    ///
    /// Visit order is unspecified. Subtrees whose boundary does not
    /// intersect `range` are pruned without being descended.
    pub fn visit<F: FnMut(&Entry<P>)>(&self, range: &Region, mut f: F) {
        self.visit_inner(range, &mut f);
    }

    fn visit_inner<F: FnMut(&Entry<P>)>(&self, range: &Region, f: &mut F) {
        if !self.boundary.intersects(range) {
            return;
        }
        for e in &self.points {
            if range.contains(e.x, e.y) {
                f(e);
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.visit_inner(range, f);
            }
        }
    }
}

impl<P: Copy + Debug> Debug for Quadtree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quadtree")
            .field("boundary", &self.boundary)
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("subdivided", &self.is_subdivided())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{vec, vec::Vec};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    impl<P: Copy + Debug> Quadtree<P> {
        /// Check structural invariants on every node.
        fn check_invariants(&self) {
            assert!(
                self.points.len() <= self.capacity,
                "node stores more points than its capacity"
            );
            for e in &self.points {
                assert!(
                    self.boundary.contains(e.x, e.y),
                    "stored point escapes its node boundary"
                );
            }
            if let Some(children) = &self.children {
                // A node subdivides only by overflowing, so its own storage
                // must be full.
                assert_eq!(
                    self.points.len(),
                    self.capacity,
                    "subdivided node that never overflowed"
                );
                for child in children.iter() {
                    child.check_invariants();
                }
            }
        }
    }

    fn tree_50() -> Quadtree<usize> {
        Quadtree::new(Region::new(0.0, 0.0, 50.0, 50.0))
    }

    #[test]
    fn concrete_query_case() {
        let mut tree = tree_50();
        assert!(tree.insert(0.0, 0.0, 0));
        assert!(tree.insert(5.0, 5.0, 1));
        assert!(tree.insert(-5.0, -5.0, 2));
        assert!(!tree.insert(100.0, 100.0, 3));
        assert_eq!(tree.len(), 3);

        let mut hits: Vec<usize> = tree
            .query(&Region::new(0.0, 0.0, 10.0, 10.0))
            .iter()
            .map(|e| e.payload)
            .collect();
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 1, 2]);
    }

    #[test]
    fn out_of_bounds_insert_is_dropped_silently() {
        let mut tree = tree_50();
        assert!(!tree.insert(50.0, 0.0, 0)); // max edge is outside (half-open)
        assert!(tree.insert(-50.0, 0.0, 1)); // min edge is inside
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn overflow_subdivides_and_existing_points_stay_put() {
        let mut tree = tree_50();
        for i in 0..DEFAULT_CAPACITY {
            assert!(tree.insert(i as f64, 0.0, i));
        }
        assert!(!tree.is_subdivided());

        assert!(tree.insert(20.0, 20.0, DEFAULT_CAPACITY));
        assert!(tree.is_subdivided());
        assert_eq!(tree.points.len(), DEFAULT_CAPACITY);
        assert_eq!(tree.len(), DEFAULT_CAPACITY + 1);
        tree.check_invariants();
    }

    #[test]
    fn duplicate_positions_beyond_capacity_do_not_recurse_forever() {
        // All inserts land on one point; children keep subdividing until the
        // recursion bottoms out in ever-smaller quadrants that still accept
        // the point. Capacity 1 makes this the worst case.
        let mut tree: Quadtree<usize> =
            Quadtree::with_capacity(Region::new(0.0, 0.0, 50.0, 50.0), 1);
        for i in 0..16 {
            assert!(tree.insert(1.0, 1.0, i));
        }
        assert_eq!(tree.len(), 16);
        tree.check_invariants();
    }

    #[test]
    fn query_accumulator_appends() {
        let mut tree = tree_50();
        tree.insert(1.0, 1.0, 7);
        let mut out = Vec::new();
        out.push(Entry::new(-1.0, -1.0, 99));
        tree.query_into(&Region::new(0.0, 0.0, 50.0, 50.0), &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].payload, 99);
        assert_eq!(out[1].payload, 7);
    }

    #[test]
    fn query_matches_brute_force_on_random_sets() {
        let mut rng = SmallRng::seed_from_u64(0x51ab);
        for case in 0..20 {
            let n = 100 + case * 120;
            let boundary = Region::new(0.0, 0.0, 500.0, 500.0);
            let mut tree: Quadtree<usize> = Quadtree::new(boundary);
            let mut pts: Vec<(f64, f64)> = Vec::with_capacity(n);
            for i in 0..n {
                let x = rng.gen_range(-500.0..500.0);
                let y = rng.gen_range(-500.0..500.0);
                assert!(tree.insert(x, y, i));
                pts.push((x, y));
            }
            tree.check_invariants();

            for _ in 0..8 {
                let range = Region::new(
                    rng.gen_range(-500.0..500.0),
                    rng.gen_range(-500.0..500.0),
                    rng.gen_range(0.0..300.0),
                    rng.gen_range(0.0..300.0),
                );
                let mut got: Vec<usize> =
                    tree.query(&range).iter().map(|e| e.payload).collect();
                got.sort_unstable();
                let mut want: Vec<usize> = pts
                    .iter()
                    .enumerate()
                    .filter(|&(_, &(x, y))| range.contains(x, y))
                    .map(|(i, _)| i)
                    .collect();
                want.sort_unstable();
                assert_eq!(got, want, "query disagrees with linear scan");
            }
        }
    }

    #[test]
    fn visit_prunes_disjoint_subtrees_but_misses_nothing() {
        let mut rng = SmallRng::seed_from_u64(7);
        let boundary = Region::new(0.0, 0.0, 100.0, 100.0);
        let mut tree: Quadtree<usize> = Quadtree::with_capacity(boundary, 2);
        for i in 0..400 {
            tree.insert(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                i,
            );
        }
        // A range that covers everything must return everything.
        let mut count = 0;
        tree.visit(&boundary, |_| count += 1);
        assert_eq!(count, tree.len());
        // A clearly disjoint range returns nothing.
        let mut far = 0;
        tree.visit(&Region::new(1000.0, 1000.0, 10.0, 10.0), |_| far += 1);
        assert_eq!(far, 0);
    }
}
