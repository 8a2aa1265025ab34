// Copyright 2025 the Quadmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connecting polyline with a tapering stroke weight.

use kurbo::{Line, Point};

/// One straight piece of the connecting path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// Start and end anchors.
    pub line: Line,
    /// Stroke width.
    pub weight: f64,
}

/// Join consecutive anchors with segments whose weight falls linearly from
/// `max_weight` on the first segment to `min_weight` on the last.
///
/// Weights are assigned by position along the full path, so dropping a
/// zero-length segment (two consecutive points sharing a leaf) does not shift
/// the gradient of the others.
pub fn weighted_path(anchors: &[Point], max_weight: f64, min_weight: f64) -> Vec<Segment> {
    // Index of the last segment; 1 when there are fewer than two segments.
    let last = anchors.len().saturating_sub(2).max(1) as f64;
    anchors
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .map(|(i, pair)| Segment {
            line: Line::new(pair[0], pair[1]),
            weight: max_weight + (min_weight - max_weight) * i as f64 / last,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_tapers_from_first_to_last() {
        let anchors = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 20.0),
        ];
        let segments = weighted_path(&anchors, 8.0, 2.0);
        let weights: Vec<_> = segments.iter().map(|s| s.weight).collect();
        assert_eq!(weights, [8.0, 6.0, 4.0, 2.0]);
        assert_eq!(segments[1].line, Line::new((10.0, 0.0), (10.0, 10.0)));
    }

    #[test]
    fn short_paths() {
        assert!(weighted_path(&[], 4.0, 1.0).is_empty());
        assert!(weighted_path(&[Point::ORIGIN], 4.0, 1.0).is_empty());
        let one = weighted_path(&[Point::ORIGIN, Point::new(1.0, 1.0)], 4.0, 1.0);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].weight, 4.0, "a single segment gets the full weight");
    }

    #[test]
    fn zero_length_segments_are_dropped_without_shifting_weights() {
        let anchors = [
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
            Point::new(9.0, 9.0),
        ];
        let segments = weighted_path(&anchors, 3.0, 1.0);
        let weights: Vec<_> = segments.iter().map(|s| s.weight).collect();
        assert_eq!(weights, [3.0, 1.0]);
    }
}
