// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadmap Tree: a capacity-bounded point quadtree.
//!
//! The tree partitions a fixed rectangular [`Region`] into quarters wherever
//! more than `capacity` points land in one cell. It is the spatial core of
//! Quadmap: the loader feeds it labeled canvas points, and the renderer walks
//! it to draw quadrant boundaries, fit labels into leaf boxes and anchor the
//! connecting path at leaf centers.
//!
//! - Insert points one at a time with [`SpatialTree::insert`]; each accepted
//!   point gets a [`PointHandle`] carrying its identity.
//! - Enumerate every stored point with [`SpatialTree::all_points`].
//! - Resolve a handle to the center of the leaf that holds it with
//!   [`SpatialTree::quadrant_center`].
//! - Walk nodes with [`SpatialTree::visit`] or [`QuadNode::children`].
//!
//! This is not a general spatial index: there is no removal, range query or
//! nearest-neighbour search.
//!
//! ## Ordering
//!
//! Two fixed quadrant orders are used and are intentionally different:
//!
//! - [`Quadrant::INSERTION_ORDER`] (NE, NW, SE, SW) decides which quarter
//!   takes a point lying on an edge shared by two quarters.
//! - [`Quadrant::ALL`] (NW, NE, SW, SE) is the enumeration and lookup order,
//!   and the layout of [`QuadNode::children`].
//!
//! ## Depth limit
//!
//! Coincident points would force endless subdivision. Leaves at
//! [`TreeConfig::max_depth`] keep every point they receive instead, which is
//! the only case where a leaf holds more than `capacity` points.
//!
//! # Example
//!
//! ```rust
//! use quadmap_tree::{Point, Quadrant, Region, SpatialTree};
//!
//! // An 800x800 canvas, one point per leaf.
//! let mut tree = SpatialTree::new(Region::new(400.0, 400.0, 400.0, 400.0), 1);
//! let mut handles = Vec::new();
//! for (x, y, label) in [(100.0, 100.0, "a"), (700.0, 100.0, "b"), (100.0, 700.0, "c")] {
//!     handles.push(tree.insert(Point::new(x, y, label)).unwrap());
//! }
//!
//! let labels: Vec<_> = tree.all_points().iter().map(|p| p.point().label.as_str()).collect();
//! assert_eq!(labels, ["a", "b", "c"]);
//!
//! let sw = tree.root().child(Quadrant::SouthWest).unwrap();
//! assert_eq!(tree.quadrant_center(handles[2]), Some(sw.region().center()));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod point;
mod region;
mod tree;

pub use error::InsertError;
pub use point::{Point, PointHandle, PointId, StoredPoint};
pub use region::{Quadrant, Region};
pub use tree::{DEFAULT_MAX_DEPTH, QuadNode, SpatialTree, TreeConfig};
