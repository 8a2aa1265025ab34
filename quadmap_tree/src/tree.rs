// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quadtree: root wrapper, nodes, insertion and queries.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::InsertError;
use crate::point::{Point, PointHandle, PointId, StoredPoint};
use crate::region::{Quadrant, Region};

/// Depth at which leaves stop subdividing unless configured otherwise.
///
/// At 24 levels an 800px canvas is split into cells of roughly 5e-5 px.
pub const DEFAULT_MAX_DEPTH: usize = 24;

/// Construction parameters shared by every node of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    /// Points a leaf holds before it subdivides. At least 1.
    pub capacity: usize,
    /// Depth (root = 0) at which leaves accept points beyond `capacity`
    /// instead of subdividing.
    pub max_depth: usize,
}

impl TreeConfig {
    /// Config with the given capacity and [`DEFAULT_MAX_DEPTH`]. A capacity of 0 is raised to 1.
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity: if capacity == 0 { 1 } else { capacity },
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the depth limit.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

#[derive(Clone, Debug)]
enum Cell {
    Leaf(Vec<StoredPoint>),
    /// Children in [`Quadrant::ALL`] order.
    Divided(Box<[QuadNode; 4]>),
}

/// One node of a [`SpatialTree`].
///
/// A node is either a leaf holding points directly or a divided node owning
/// four children that exactly quarter its region. Divided nodes never hold
/// points.
#[derive(Clone, Debug)]
pub struct QuadNode {
    region: Region,
    depth: usize,
    cell: Cell,
}

impl QuadNode {
    fn new(region: Region, depth: usize) -> Self {
        Self {
            region,
            depth,
            cell: Cell::Leaf(Vec::new()),
        }
    }

    /// Region covered by this node.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Distance from the root (the root is at depth 0).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether this node has subdivided.
    #[inline]
    pub fn is_divided(&self) -> bool {
        matches!(self.cell, Cell::Divided(_))
    }

    /// The four children in [`Quadrant::ALL`] order, if divided.
    #[inline]
    pub fn children(&self) -> Option<&[Self; 4]> {
        match &self.cell {
            Cell::Leaf(_) => None,
            Cell::Divided(children) => Some(&**children),
        }
    }

    /// The child covering quadrant `q`, if divided.
    #[inline]
    pub fn child(&self, q: Quadrant) -> Option<&Self> {
        self.children().map(|c| &c[q.slot()])
    }

    /// Points held directly by this node. Always empty for divided nodes.
    #[inline]
    pub fn points(&self) -> &[StoredPoint] {
        match &self.cell {
            Cell::Leaf(points) => points,
            Cell::Divided(_) => &[],
        }
    }

    fn insert(&mut self, entry: StoredPoint, config: TreeConfig) -> Result<(), StoredPoint> {
        if !self.region.contains(entry.position()) {
            return Err(entry);
        }
        self.place(entry, config);
        Ok(())
    }

    /// Store `entry`, already known to belong to this node.
    fn place(&mut self, entry: StoredPoint, config: TreeConfig) {
        if let Cell::Leaf(points) = &mut self.cell {
            if points.len() < config.capacity || self.depth >= config.max_depth {
                points.push(entry);
                return;
            }
            self.subdivide(config);
        }
        match &mut self.cell {
            Cell::Divided(children) => route(children, self.region.center, entry, config),
            Cell::Leaf(points) => points.push(entry),
        }
    }

    /// Turn this leaf into a divided node and push its points down.
    fn subdivide(&mut self, config: TreeConfig) {
        let held = match &mut self.cell {
            Cell::Leaf(points) => core::mem::take(points),
            Cell::Divided(_) => return,
        };
        let depth = self.depth + 1;
        let mut children = Box::new(self.region.quarter().map(|r| Self::new(r, depth)));
        for entry in held {
            route(&mut children, self.region.center, entry, config);
        }
        self.cell = Cell::Divided(children);
    }

    /// All points in this subtree: own points, then children NW, NE, SW, SE.
    ///
    /// Returns a new vector on every call.
    pub fn all_points(&self) -> Vec<&StoredPoint> {
        let mut out = Vec::new();
        self.collect_points(&mut out);
        out
    }

    fn collect_points<'a>(&'a self, out: &mut Vec<&'a StoredPoint>) {
        match &self.cell {
            Cell::Leaf(points) => out.extend(points.iter()),
            Cell::Divided(children) => {
                for child in children.iter() {
                    child.collect_points(out);
                }
            }
        }
    }

    /// Center of the smallest region holding the point identified by `handle`.
    ///
    /// Matching is by identity: a different point with the same coordinates
    /// and label does not match. Returns `None` when the handle's position is
    /// outside this node or no node of this subtree holds the point.
    pub fn quadrant_center(&self, handle: PointHandle) -> Option<kurbo::Point> {
        self.find_holder(handle).map(|node| node.region.center)
    }

    /// The stored point identified by `handle`, if it is in this subtree.
    pub fn get(&self, handle: PointHandle) -> Option<&StoredPoint> {
        self.find_holder(handle)?
            .points()
            .iter()
            .find(|p| p.id() == handle.id)
    }

    fn find_holder(&self, handle: PointHandle) -> Option<&Self> {
        if !self.region.contains(handle.position) {
            return None;
        }
        self.find_within(handle)
    }

    /// Follow the same choices [`route`] made for a point already known to
    /// belong to this node.
    fn find_within(&self, handle: PointHandle) -> Option<&Self> {
        match &self.cell {
            Cell::Leaf(points) => points.iter().any(|p| p.id() == handle.id).then_some(self),
            Cell::Divided(children) => children
                .iter()
                .filter(|c| c.region.contains(handle.position))
                .find_map(|c| c.find_within(handle))
                .or_else(|| {
                    // A point outside its classified quarter was forced there by `route`.
                    let q = Quadrant::classify(self.region.center, handle.position);
                    let forced = &children[q.slot()];
                    if forced.region.contains(handle.position) {
                        None
                    } else {
                        forced.find_within(handle)
                    }
                }),
        }
    }

    /// Pre-order walk: this node first, then each child subtree NW, NE, SW, SE.
    pub fn visit<F: FnMut(&Self)>(&self, f: &mut F) {
        f(self);
        if let Cell::Divided(children) = &self.cell {
            for child in children.iter() {
                child.visit(f);
            }
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match &self.cell {
            Cell::Leaf(_) => 1,
            Cell::Divided(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Depth of the deepest node in this subtree.
    pub fn deepest(&self) -> usize {
        match &self.cell {
            Cell::Leaf(_) => self.depth,
            Cell::Divided(children) => children
                .iter()
                .map(Self::deepest)
                .max()
                .unwrap_or(self.depth),
        }
    }
}

/// Offer `entry` to the children in insertion priority (NE, NW, SE, SW); the
/// first child whose region contains it takes it.
fn route(children: &mut [QuadNode; 4], center: kurbo::Point, mut entry: StoredPoint, config: TreeConfig) {
    for q in Quadrant::INSERTION_ORDER {
        match children[q.slot()].insert(entry, config) {
            Ok(()) => return,
            Err(rejected) => entry = rejected,
        }
    }
    // Quarter edges are rounded independently of the parent's, so a point on
    // the parent's outer edge can miss every quarter.
    let q = Quadrant::classify(center, entry.position());
    children[q.slot()].place(entry, config);
}

/// A capacity-bounded point quadtree over a fixed region.
///
/// Points are inserted one at a time. A leaf that already holds `capacity`
/// points subdivides into four quarters and pushes its points down before
/// taking the new one. Points on an edge shared by two quarters go to the
/// first quarter in [`Quadrant::INSERTION_ORDER`] (NE, NW, SE, SW).
///
/// Leaves at [`TreeConfig::max_depth`] stop subdividing and hold any number
/// of points, so duplicate coordinates cannot recurse without bound.
///
/// ## Example
///
/// ```
/// use quadmap_tree::{Point, Region, SpatialTree};
///
/// let mut tree = SpatialTree::new(Region::new(400.0, 400.0, 400.0, 400.0), 1);
/// let a = tree.insert(Point::new(100.0, 100.0, "a")).unwrap();
/// let b = tree.insert(Point::new(700.0, 100.0, "b")).unwrap();
///
/// // The second point split the root; each point now sits in its own quarter.
/// assert!(tree.root().is_divided());
/// assert_eq!(tree.quadrant_center(a), Some(kurbo::Point::new(200.0, 200.0)));
/// assert_eq!(tree.quadrant_center(b), Some(kurbo::Point::new(600.0, 200.0)));
///
/// // Points outside the region are rejected.
/// assert!(tree.insert(Point::new(-50.0, -50.0, "out")).is_err());
/// assert_eq!(tree.all_points().len(), 2);
/// ```
#[derive(Clone)]
pub struct SpatialTree {
    root: QuadNode,
    config: TreeConfig,
    next_id: u64,
    len: usize,
}

impl core::fmt::Debug for SpatialTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpatialTree")
            .field("region", &self.root.region)
            .field("config", &self.config)
            .field("len", &self.len)
            .field("leaves", &self.root.leaf_count())
            .field("deepest", &self.root.deepest())
            .finish_non_exhaustive()
    }
}

impl SpatialTree {
    /// Create an empty tree over `region` with the given leaf capacity and the
    /// default depth limit.
    pub fn new(region: Region, capacity: usize) -> Self {
        Self::with_config(region, TreeConfig::new(capacity))
    }

    /// Create an empty tree over `region` with an explicit configuration.
    pub fn with_config(region: Region, config: TreeConfig) -> Self {
        Self {
            root: QuadNode::new(region, 0),
            config: TreeConfig::new(config.capacity).with_max_depth(config.max_depth),
            next_id: 0,
            len: 0,
        }
    }

    /// Insert a point.
    ///
    /// On success returns the handle identifying the stored point. Points with
    /// a non-finite coordinate or outside the tree region are rejected and the
    /// tree is left unchanged.
    pub fn insert(&mut self, point: Point) -> Result<PointHandle, InsertError> {
        let (x, y) = (point.x, point.y);
        if !x.is_finite() || !y.is_finite() {
            return Err(InsertError::NonFinite { x, y });
        }
        let id = PointId(self.next_id);
        let entry = StoredPoint::new(id, point);
        let handle = entry.handle();
        self.root
            .insert(entry, self.config)
            .map_err(|_| InsertError::OutsideRegion { x, y })?;
        self.next_id += 1;
        self.len += 1;
        Ok(handle)
    }

    /// Region covered by the tree.
    #[inline]
    pub fn region(&self) -> Region {
        self.root.region
    }

    /// Configuration shared by all nodes.
    #[inline]
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Root node, for walking the structure.
    #[inline]
    pub fn root(&self) -> &QuadNode {
        &self.root
    }

    /// Number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All stored points, leaves visited NW, NE, SW, SE. See [`QuadNode::all_points`].
    pub fn all_points(&self) -> Vec<&StoredPoint> {
        self.root.all_points()
    }

    /// Center of the leaf holding the point. See [`QuadNode::quadrant_center`].
    pub fn quadrant_center(&self, handle: PointHandle) -> Option<kurbo::Point> {
        self.root.quadrant_center(handle)
    }

    /// The stored point identified by `handle`.
    pub fn get(&self, handle: PointHandle) -> Option<&StoredPoint> {
        self.root.get(handle)
    }

    /// Pre-order walk over every node. See [`QuadNode::visit`].
    pub fn visit<F: FnMut(&QuadNode)>(&self, mut f: F) {
        self.root.visit(&mut f);
    }
}
