// Copyright 2026 the Plexus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direct use of `plexus_quadtree` for range queries over a point cloud.
//!
//! Run:
//! - `cargo run -p plexus_demos --example quadtree_queries`

use plexus_quadtree::{Quadtree, Region};

fn main() {
    // Index a grid of labeled points over a 200x200 region.
    let mut tree: Quadtree<(i32, i32)> = Quadtree::new(Region::new(100.0, 100.0, 100.0, 100.0));
    for gx in 0..20 {
        for gy in 0..20 {
            let (x, y) = (gx as f64 * 10.0 + 5.0, gy as f64 * 10.0 + 5.0);
            assert!(tree.insert(x, y, (gx, gy)));
        }
    }
    println!("indexed {} points, subdivided: {}", tree.len(), tree.is_subdivided());

    // Range query: everything within 25 units of the center, by bounding box.
    let near_center = tree.query(&Region::new(100.0, 100.0, 25.0, 25.0));
    println!("{} points within the 50x50 box around the center", near_center.len());

    // Visiting form: count points in a corner strip without allocating.
    let mut corner = 0usize;
    tree.visit(&Region::from_corners(0.0, 0.0, 200.0, 20.0), |_| corner += 1);
    println!("{corner} points in the bottom strip");

    // Out-of-boundary inserts are dropped, not errors.
    assert!(!tree.insert(500.0, 500.0, (-1, -1)));
}
