// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadmap Render: turn a [`quadmap_tree::SpatialTree`] into a picture.
//!
//! Rendering is split in two steps. [`Scene::build`] walks the tree and
//! produces an ordered display list of Kurbo shapes; [`write_svg`] serializes
//! that list. Keeping the list separate makes it easy to test layout without
//! parsing markup, and to add other outputs later.
//!
//! - Boundaries: one rectangle per node, pre-order, root first.
//! - Path: a polyline through the center of the leaf holding each point, in
//!   the given handle order, with a stroke that tapers from
//!   [`Style::path_max_width`] to [`Style::path_min_width`].
//! - Markers: a dot per stored point.
//! - Labels: each leaf box is shrunk by the label padding and split into one
//!   horizontal band per point; the label is wrapped and sized to fill its
//!   band (see [`fit_label`]).
//! - Status: an optional message in the top-left corner.
//!
//! Select what is drawn with [`Layers`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::Size;
//! use quadmap_render::{Layers, Scene, Style, to_svg_string};
//! use quadmap_tree::{Point, Region, SpatialTree};
//!
//! let mut tree = SpatialTree::new(Region::new(200.0, 200.0, 200.0, 200.0), 1);
//! let a = tree.insert(Point::new(50.0, 50.0, "alpha")).unwrap();
//! let b = tree.insert(Point::new(350.0, 350.0, "beta")).unwrap();
//!
//! let style = Style::default();
//! let scene = Scene::build(&tree, &[a, b], &style, Layers::all());
//! assert_eq!(scene.labels().count(), 2);
//!
//! let svg = to_svg_string(&scene, Size::new(400.0, 400.0), &style, Layers::all());
//! assert!(svg.contains("alpha"));
//! ```

mod label;
mod path;
mod scene;
mod svg;
mod types;

pub use label::{FittedLabel, fit_label, wrap};
pub use path::{Segment, weighted_path};
pub use scene::{Primitive, Scene};
pub use svg::{to_svg_string, write_svg};
pub use types::{Color, LabelStyle, Layers, Style};
