// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display list built from a tree.

use kurbo::{Point, Rect};
use quadmap_tree::{PointHandle, QuadNode, SpatialTree};

use crate::label::{FittedLabel, fit_label};
use crate::path::{Segment, weighted_path};
use crate::types::{Layers, Style};

/// Top-left anchor of the status text.
const STATUS_ORIGIN: Point = Point::new(20.0, 30.0);

/// One drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Outline of a node region.
    Boundary(Rect),
    /// Dot at a stored point.
    Marker {
        /// Dot center.
        center: Point,
        /// Dot radius.
        radius: f64,
    },
    /// Label fitted into (part of) its leaf box.
    Label(FittedLabel),
    /// Piece of the connecting path.
    Segment(Segment),
    /// Status message, baseline-anchored at `origin`.
    Status {
        /// Baseline start.
        origin: Point,
        /// Message.
        text: String,
        /// Font size.
        size: f64,
    },
}

/// Ordered display list: boundaries, path, markers, labels, status.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Drawing commands in paint order.
    pub primitives: Vec<Primitive>,
    /// Path handles whose quadrant center could not be resolved.
    pub missed_anchors: usize,
    /// Non-blank labels with no room to draw even one line.
    pub hidden_labels: usize,
}

impl Scene {
    /// Build the display list for `tree`.
    ///
    /// `path` lists the handles to connect, in order; each is anchored at the
    /// center of the leaf holding it. Handles that do not resolve are skipped
    /// and counted in [`Scene::missed_anchors`].
    ///
    /// ## Example
    ///
    /// ```
    /// use quadmap_render::{Layers, Primitive, Scene, Style};
    /// use quadmap_tree::{Point, Region, SpatialTree};
    ///
    /// let mut tree = SpatialTree::new(Region::new(100.0, 100.0, 100.0, 100.0), 1);
    /// let a = tree.insert(Point::new(20.0, 20.0, "a")).unwrap();
    /// let b = tree.insert(Point::new(180.0, 180.0, "b")).unwrap();
    ///
    /// let scene = Scene::build(&tree, &[a, b], &Style::default(), Layers::PATH);
    /// assert_eq!(scene.primitives.len(), 1);
    /// let Primitive::Segment(segment) = &scene.primitives[0] else { panic!() };
    /// assert_eq!(segment.line.p0, kurbo::Point::new(50.0, 50.0));
    /// assert_eq!(segment.line.p1, kurbo::Point::new(150.0, 150.0));
    /// ```
    pub fn build(tree: &SpatialTree, path: &[PointHandle], style: &Style, layers: Layers) -> Self {
        let mut scene = Self::default();

        if layers.contains(Layers::BOUNDARIES) {
            tree.visit(|node| {
                scene
                    .primitives
                    .push(Primitive::Boundary(node.region().rect()));
            });
        }

        if layers.contains(Layers::PATH) {
            let mut anchors = Vec::with_capacity(path.len());
            for handle in path {
                match tree.quadrant_center(*handle) {
                    Some(center) => anchors.push(center),
                    None => scene.missed_anchors += 1,
                }
            }
            scene.primitives.extend(
                weighted_path(&anchors, style.path_max_width, style.path_min_width)
                    .into_iter()
                    .map(Primitive::Segment),
            );
        }

        if layers.contains(Layers::POINTS) {
            for p in tree.all_points() {
                scene.primitives.push(Primitive::Marker {
                    center: p.position(),
                    radius: style.marker_radius,
                });
            }
        }

        if layers.contains(Layers::LABELS) {
            tree.visit(|node| scene.push_leaf_labels(node, style));
        }

        scene
    }

    /// Append a status message, drawn in the top-left corner.
    pub fn with_status(mut self, text: impl Into<String>, style: &Style) -> Self {
        self.primitives.push(Primitive::Status {
            origin: STATUS_ORIGIN,
            text: text.into(),
            size: style.status_size,
        });
        self
    }

    /// Labels of a leaf, one horizontal band of the padded leaf box per point.
    fn push_leaf_labels(&mut self, node: &QuadNode, style: &Style) {
        let points = node.points();
        if points.is_empty() {
            return;
        }
        let inner = node.region().rect().inset(-style.label.padding);
        if inner.width() <= 0.0 || inner.height() <= 0.0 {
            self.hidden_labels += points.iter().filter(|p| !p.point().label.trim().is_empty()).count();
            return;
        }
        let band = inner.height() / points.len() as f64;
        for (i, p) in points.iter().enumerate() {
            let label = &p.point().label;
            if label.trim().is_empty() {
                continue;
            }
            let y0 = inner.y0 + band * i as f64;
            let bounds = Rect::new(inner.x0, y0, inner.x1, y0 + band);
            match fit_label(label, bounds, &style.label) {
                Some(fitted) => self.primitives.push(Primitive::Label(fitted)),
                None => self.hidden_labels += 1,
            }
        }
    }

    /// Labels in paint order.
    pub fn labels(&self) -> impl Iterator<Item = &FittedLabel> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Label(label) => Some(label),
            _ => None,
        })
    }

    /// Path segments in paint order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Segment(segment) => Some(segment),
            _ => None,
        })
    }

    /// Union of every boundary, marker and label box. `None` for an empty scene.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.primitives.iter().filter_map(|p| match p {
            Primitive::Boundary(rect) => Some(*rect),
            Primitive::Marker { center, radius } => {
                Some(Rect::from_center_size(*center, (2.0 * radius, 2.0 * radius)))
            }
            Primitive::Label(label) => Some(label.bounds),
            Primitive::Segment(segment) => Some(Rect::from_points(segment.line.p0, segment.line.p1)),
            Primitive::Status { .. } => None,
        });
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadmap_tree::{Point as TreePoint, Region};

    fn corners() -> (SpatialTree, Vec<PointHandle>) {
        let mut tree = SpatialTree::new(Region::new(400.0, 400.0, 400.0, 400.0), 1);
        let handles = [
            (100.0, 100.0, "north west"),
            (700.0, 100.0, "north east"),
            (100.0, 700.0, "south west"),
            (700.0, 700.0, "south east"),
        ]
        .into_iter()
        .map(|(x, y, label)| tree.insert(TreePoint::new(x, y, label)).unwrap())
        .collect();
        (tree, handles)
    }

    #[test]
    fn boundaries_cover_every_node_in_preorder() {
        let (tree, handles) = corners();
        let scene = Scene::build(&tree, &handles, &Style::default(), Layers::BOUNDARIES);
        let rects: Vec<_> = scene
            .primitives
            .iter()
            .map(|p| match p {
                Primitive::Boundary(r) => *r,
                other => panic!("unexpected primitive {other:?}"),
            })
            .collect();
        assert_eq!(rects.len(), 5, "root plus four quarters");
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 800.0, 800.0));
        assert_eq!(rects[1], Rect::new(0.0, 0.0, 400.0, 400.0), "NW comes first");
        assert_eq!(scene.bounds(), Some(Rect::new(0.0, 0.0, 800.0, 800.0)));
    }

    #[test]
    fn path_runs_through_leaf_centers() {
        let (tree, handles) = corners();
        let style = Style {
            path_max_width: 5.0,
            path_min_width: 1.0,
            ..Style::default()
        };
        let scene = Scene::build(&tree, &handles, &style, Layers::PATH);
        let segments: Vec<_> = scene.segments().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].line.p0, Point::new(200.0, 200.0));
        assert_eq!(segments[0].line.p1, Point::new(600.0, 200.0));
        assert_eq!(segments[2].line.p1, Point::new(600.0, 600.0));
        assert_eq!(segments[0].weight, 5.0);
        assert_eq!(segments[2].weight, 1.0);
        assert_eq!(scene.missed_anchors, 0);
    }

    #[test]
    fn unresolved_handles_are_counted() {
        let (tree, handles) = corners();
        let mut path = handles.clone();
        // Off-canvas positions never resolve.
        path.extend(handles.iter().map(|h| PointHandle {
            position: Point::new(-1.0, -1.0),
            ..*h
        }));
        let scene = Scene::build(&tree, &path, &Style::default(), Layers::PATH);
        assert_eq!(scene.missed_anchors, 4);
        assert_eq!(scene.segments().count(), 3);
    }

    #[test]
    fn labels_fill_their_leaf() {
        let (tree, handles) = corners();
        let scene = Scene::build(&tree, &handles, &Style::default(), Layers::LABELS);
        let labels: Vec<_> = scene.labels().collect();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0].lines.join(" "), "north west");
        assert_eq!(labels[0].bounds, Rect::new(4.0, 4.0, 396.0, 396.0));
        assert!(labels.iter().all(|l| !l.truncated));
        assert_eq!(scene.hidden_labels, 0);
    }

    #[test]
    fn overfull_leaf_splits_its_box_into_bands() {
        let config = quadmap_tree::TreeConfig::new(1).with_max_depth(0);
        let mut tree = SpatialTree::with_config(Region::new(50.0, 50.0, 50.0, 50.0), config);
        tree.insert(TreePoint::new(10.0, 10.0, "top")).unwrap();
        tree.insert(TreePoint::new(10.0, 10.0, "bottom")).unwrap();
        let scene = Scene::build(&tree, &[], &Style::default(), Layers::LABELS);
        let labels: Vec<_> = scene.labels().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].bounds, Rect::new(4.0, 4.0, 96.0, 50.0));
        assert_eq!(labels[1].bounds, Rect::new(4.0, 50.0, 96.0, 96.0));
    }

    #[test]
    fn markers_and_status() {
        let (tree, handles) = corners();
        let style = Style::default();
        let scene = Scene::build(&tree, &handles, &style, Layers::POINTS).with_status("hello", &style);
        let markers = scene
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Marker { .. }))
            .count();
        assert_eq!(markers, 4);
        assert!(matches!(
            scene.primitives.last(),
            Some(Primitive::Status { text, .. }) if text == "hello"
        ));
    }
}
