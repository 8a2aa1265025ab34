// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labeled points and the identity handles minted for them on insertion.

use alloc::string::String;

/// A labeled point in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// Horizontal canvas coordinate.
    pub x: f64,
    /// Vertical canvas coordinate (y-down).
    pub y: f64,
    /// Display label.
    pub label: String,
    /// Optional external sequence number. Not interpreted by the tree.
    pub index: Option<u32>,
}

impl Point {
    /// Create an unindexed point.
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            index: None,
        }
    }

    /// Set the external sequence number.
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    /// Position as a Kurbo point.
    #[inline]
    pub fn position(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

/// Identity of a point stored in a [`SpatialTree`](crate::SpatialTree).
///
/// Ids are unique within one tree; value-equal points inserted separately
/// receive different ids.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PointId(pub(crate) u64);

impl PointId {
    /// Insertion sequence number of the point (0 for the first accepted point).
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Token returned by [`SpatialTree::insert`](crate::SpatialTree::insert).
///
/// Carries the id used for identity matching and the position used to prune
/// the search in [`SpatialTree::quadrant_center`](crate::SpatialTree::quadrant_center).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointHandle {
    /// Identity of the stored point.
    pub id: PointId,
    /// Position the point was stored at.
    pub position: kurbo::Point,
}

/// A point as held by a tree node.
#[derive(Clone, Debug)]
pub struct StoredPoint {
    id: PointId,
    point: Point,
}

impl StoredPoint {
    pub(crate) fn new(id: PointId, point: Point) -> Self {
        Self { id, point }
    }

    /// Identity of this point.
    #[inline]
    pub fn id(&self) -> PointId {
        self.id
    }

    /// The point data.
    #[inline]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Position as a Kurbo point.
    #[inline]
    pub fn position(&self) -> kurbo::Point {
        self.point.position()
    }

    /// Handle identifying this exact stored point.
    #[inline]
    pub fn handle(&self) -> PointHandle {
        PointHandle {
            id: self.id,
            position: self.position(),
        }
    }
}

