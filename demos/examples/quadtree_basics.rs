// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert a few points, watch the root split, enumerate, and resolve handles
//! to the centers of the leaves that hold them.
//!
//! Run:
//! - `cargo run -p quadmap_demos --example quadtree_basics`

use quadmap_tree::{Point, QuadNode, Region, SpatialTree, TreeConfig};

fn main() {
    // An 800x800 canvas, one point per leaf.
    let mut tree = SpatialTree::new(Region::new(400.0, 400.0, 400.0, 400.0), 1);
    let mut handles = Vec::new();
    for (x, y, label) in [
        (100.0, 100.0, "north west"),
        (700.0, 100.0, "north east"),
        (100.0, 700.0, "south west"),
        (700.0, 700.0, "south east"),
        (650.0, 150.0, "crowded"),
    ] {
        match tree.insert(Point::new(x, y, label)) {
            Ok(handle) => handles.push(handle),
            Err(err) => println!("rejected {label}: {err}"),
        }
    }

    // Outside the canvas: rejected, nothing changes.
    let outside = tree.insert(Point::new(900.0, 50.0, "outside"));
    println!("outside insert: {outside:?}");

    println!("{} points, {} leaves", tree.len(), tree.root().leaf_count());
    print_node(tree.root());

    // Enumeration order is NW, NE, SW, SE.
    let labels: Vec<_> = tree
        .all_points()
        .iter()
        .map(|p| p.point().label.as_str())
        .collect();
    println!("all points: {labels:?}");

    for handle in &handles {
        let label = tree.get(*handle).map(|p| p.point().label.as_str());
        println!(
            "#{} {label:?} -> leaf center {:?}",
            handle.id.get(),
            tree.quadrant_center(*handle)
        );
    }

    // Coincident points subdivide down to the depth limit, then share a leaf.
    let mut dups = SpatialTree::with_config(
        Region::new(400.0, 400.0, 400.0, 400.0),
        TreeConfig::new(1).with_max_depth(3),
    );
    let a = dups.insert(Point::new(400.0, 400.0, "a"));
    let b = dups.insert(Point::new(400.0, 400.0, "b"));
    if let (Ok(a), Ok(b)) = (a, b) {
        println!(
            "coincident: depth {}, both at {:?} / {:?}",
            dups.root().deepest(),
            dups.quadrant_center(a),
            dups.quadrant_center(b)
        );
    }
}

fn print_node(node: &QuadNode) {
    let indent = "  ".repeat(node.depth());
    let r = node.region().rect();
    let labels: Vec<_> = node.points().iter().map(|p| p.point().label.as_str()).collect();
    println!(
        "{indent}[{:.0},{:.0} - {:.0},{:.0}] {labels:?}",
        r.x0, r.y0, r.x1, r.y1
    );
    if let Some(children) = node.children() {
        for child in children {
            print_node(child);
        }
    }
}
