// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building a tree and a connecting path from a point file.

use quadmap_tree::{InsertError, PointHandle, SpatialTree, TreeConfig};
use tracing::{debug, trace, warn};

use crate::canvas::Canvas;
use crate::record::{PointFile, PointRecord};

/// A record the tree refused.
#[derive(Clone, Debug, PartialEq)]
pub struct Rejected {
    /// Position of the record in the file.
    pub position: usize,
    /// The record as read.
    pub record: PointRecord,
    /// Why the tree refused it.
    pub error: InsertError,
}

/// A populated tree plus the order in which its points are connected.
#[derive(Debug)]
pub struct Layout {
    /// Tree over the whole canvas holding every accepted record.
    pub tree: SpatialTree,
    /// Handles in path order. See [`build_layout`].
    pub path: Vec<PointHandle>,
    /// Records that could not be inserted, in file order.
    pub rejected: Vec<Rejected>,
}

impl Layout {
    /// Whether every record made it into the tree.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Scale every record onto `canvas` and insert it into a new tree.
///
/// Records are inserted in file order. The returned path lists accepted
/// points sorted by `index` (ties keep file order), followed by the records
/// without an index in file order.
///
/// Rejected records are not dropped silently: each is logged and returned in
/// [`Layout::rejected`].
pub fn build_layout(file: &PointFile, canvas: Canvas, config: TreeConfig) -> Layout {
    let mut tree = SpatialTree::with_config(canvas.region(), config);
    let mut accepted: Vec<(Option<u32>, PointHandle)> = Vec::with_capacity(file.points.len());
    let mut rejected = Vec::new();

    for (position, record) in file.points.iter().enumerate() {
        match tree.insert(canvas.to_canvas(record)) {
            Ok(handle) => {
                trace!(position, id = handle.id.get(), label = %record.label, "point placed");
                accepted.push((record.index, handle));
            }
            Err(error) => {
                warn!(position, label = %record.label, %error, "point rejected");
                rejected.push(Rejected {
                    position,
                    record: record.clone(),
                    error,
                });
            }
        }
    }

    // Indexed points first, by index; the stable sort keeps file order for ties.
    accepted.sort_by_key(|(index, _)| (index.is_none(), *index));
    let path = accepted.into_iter().map(|(_, handle)| handle).collect();

    debug!(
        points = tree.len(),
        rejected = rejected.len(),
        leaves = tree.root().leaf_count(),
        depth = tree.root().deepest(),
        "built layout"
    );
    Layout {
        tree,
        path,
        rejected,
    }
}
