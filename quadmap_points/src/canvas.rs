// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas size and the mapping from normalized records to canvas points.

use quadmap_tree::{Point, Region};

use crate::record::PointRecord;

/// Pixel dimensions of the drawing surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Canvas {
    /// Create a canvas.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Region covering the whole canvas: centered on it, half-extents of half its size.
    pub fn region(&self) -> Region {
        Region::new(
            0.5 * self.width,
            0.5 * self.height,
            0.5 * self.width,
            0.5 * self.height,
        )
    }

    /// Scale a normalized record into canvas coordinates.
    pub fn to_canvas(&self, record: &PointRecord) -> Point {
        Point {
            x: record.x * self.width,
            y: record.y * self.height,
            label: record.label.clone(),
            index: record.index,
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800.0, 800.0)
    }
}
