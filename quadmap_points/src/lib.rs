// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadmap Points: the input side of Quadmap.
//!
//! Reads the `points.json` document produced by the embedding step, scales
//! its normalized coordinates onto a [`Canvas`], and inserts every record into
//! a [`quadmap_tree::SpatialTree`] covering that canvas.
//!
//! - [`PointFile::load`] / [`PointFile::parse`]: the document model (serde).
//! - [`Canvas`]: canvas size, root region, coordinate scaling.
//! - [`build_layout`]: tree, connecting path order, and rejected records.
//!
//! # Example
//!
//! ```rust
//! use quadmap_points::{Canvas, PointFile, build_layout};
//! use quadmap_tree::TreeConfig;
//!
//! let file = PointFile::parse(r#"{"points": [
//!     {"index": 1, "label": "second", "x": 0.9, "y": 0.1},
//!     {"index": 0, "label": "first", "x": 0.1, "y": 0.1}
//! ]}"#).unwrap();
//!
//! let layout = build_layout(&file, Canvas::new(800.0, 800.0), TreeConfig::new(1));
//! assert_eq!(layout.tree.len(), 2);
//! let first = layout.tree.get(layout.path[0]).unwrap();
//! assert_eq!(first.point().label, "first");
//! ```

mod canvas;
mod error;
mod layout;
mod record;

pub use canvas::Canvas;
pub use error::LoadError;
pub use layout::{Layout, Rejected, build_layout};
pub use record::{PointFile, PointRecord};
