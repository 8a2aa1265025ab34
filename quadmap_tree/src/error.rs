// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion errors.

use thiserror::Error;

/// Why [`SpatialTree::insert`](crate::SpatialTree::insert) rejected a point.
///
/// A rejected point is not stored and the tree is left unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum InsertError {
    /// The point lies outside the region covered by the tree.
    #[error("point ({x}, {y}) lies outside the tree region")]
    OutsideRegion {
        /// Rejected x coordinate.
        x: f64,
        /// Rejected y coordinate.
        y: f64,
    },
    /// A coordinate is NaN or infinite.
    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFinite {
        /// Rejected x coordinate.
        x: f64,
        /// Rejected y coordinate.
        y: f64,
    },
}
