// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plexus Quadtree: an owning 2D point quadtree for rebuild-heavy workloads.
//!
//! This crate answers "which points lie within this rectangle?" in
//! sub-linear expected time for clustered point sets. It is the spatial
//! index behind the `plexus_anim` particle animation, but has no dependency
//! on it and no opinion about what the payloads mean.
//!
//! - Insert points with payloads; nodes subdivide into four quadrants on
//!   overflow.
//! - Query by axis-aligned region, with an allocating, an accumulator, and a
//!   closure-visiting form.
//! - No removal or update: trees indexing moving points are discarded and
//!   rebuilt wholesale, which keeps every operation a total function over
//!   well-formed input.
//!
//! It is generic over the payload type and does not depend on any geometry
//! crate; higher layers convert their own point types to plain `f64` pairs.
//!
//! # Example
//!
//! ```rust
//! use plexus_quadtree::{Quadtree, Region};
//!
//! // Index a few points over a 100x100 region centered at the origin.
//! let mut tree: Quadtree<u32> = Quadtree::new(Region::new(0.0, 0.0, 50.0, 50.0));
//! for (i, &(x, y)) in [(0.0, 0.0), (5.0, 5.0), (-5.0, -5.0)].iter().enumerate() {
//!     assert!(tree.insert(x, y, i as u32));
//! }
//!
//! // A point outside the boundary is dropped, not an error.
//! assert!(!tree.insert(100.0, 100.0, 9));
//!
//! // Range query around the origin.
//! let hits = tree.query(&Region::new(0.0, 0.0, 10.0, 10.0));
//! assert_eq!(hits.len(), 3);
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs in coordinates. Containment is half-open
//! (`min <= v < max` per axis) so points on shared quadrant edges are
//! claimed by exactly one node.

#![no_std]

extern crate alloc;

mod region;
mod tree;

pub use region::Region;
pub use tree::{DEFAULT_CAPACITY, Entry, Quadtree};
