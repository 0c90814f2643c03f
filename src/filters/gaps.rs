use std::sync::Arc;

use geo::{Distance, Euclidean};
use tracing::{debug, trace};

use super::StrokeFilter;
use crate::stroke::{Point, Stroke};

/// Endpoints closer than this many device pixels get pulled together.
pub const DEFAULT_GAP_THRESHOLD: f64 = 60.0;

/// Closes small gaps between strokes by snapping nearby endpoints
/// to their shared midpoint.
///
/// Pairs of strokes are visited in `(i, j)` order with `i < j`, and every
/// snap is written back immediately, so a later pair sees endpoints that an
/// earlier pair already moved. This makes the result depend on stroke
/// order: it is a greedy heuristic, not a matching.
///
/// Within one pair the four endpoints are read once, before any of the
/// four pairings is tested. Pairings are tested tail/head, tail/tail,
/// head/head, head/tail, and each one within `threshold` (strictly) writes
/// the midpoint of those pre-read values to both strokes.
///
/// Empty strokes are skipped. A one point stroke plays head and tail at the
/// same time. Only first and last points are ever changed, and style is
/// left alone. A threshold of zero or less never snaps anything.
pub fn connect_gaps(strokes: &[Stroke], threshold: f64) -> Vec<Stroke> {
    let mut lines: Vec<Vec<Point>> = strokes.iter().map(|s| s.points.0.clone()).collect();
    let mut snaps = 0usize;
    for i in 0..lines.len() {
        if lines[i].is_empty() {
            continue;
        }
        for j in (i + 1)..lines.len() {
            if lines[j].is_empty() {
                continue;
            }
            let (left, right) = lines.split_at_mut(j);
            snaps += snap_pair(&mut left[i], &mut right[0], threshold);
        }
    }
    debug!(
        "connect_gaps: {} strokes, {} endpoint snaps (threshold {})",
        strokes.len(),
        snaps,
        threshold
    );
    strokes
        .iter()
        .zip(lines)
        .map(|(stroke, points)| stroke.with_points(points))
        .collect()
}

/// Test the four endpoint pairings of two non-empty strokes, returning how
/// many were snapped.
fn snap_pair(a: &mut [Point], b: &mut [Point], threshold: f64) -> usize {
    let a_last = a.len() - 1;
    let b_last = b.len() - 1;
    let (head_a, tail_a) = (a[0], a[a_last]);
    let (head_b, tail_b) = (b[0], b[b_last]);

    let pairings = [
        (a_last, tail_a, 0, head_b),
        (a_last, tail_a, b_last, tail_b),
        (0, head_a, 0, head_b),
        (0, head_a, b_last, tail_b),
    ];
    let mut snaps = 0;
    for (ia, pa, ib, pb) in pairings {
        if endpoint_distance(pa, pb) < threshold {
            let mid = midpoint(pa, pb);
            trace!("snapping {:?} and {:?} to {:?}", pa, pb, mid);
            a[ia] = mid;
            b[ib] = mid;
            snaps += 1;
        }
    }
    snaps
}

fn endpoint_distance(a: Point, b: Point) -> f64 {
    Euclidean.distance(geo::Point::from(a), geo::Point::from(b))
}

fn midpoint(a: Point, b: Point) -> Point {
    (a + b) / 2.0
}

/// [`StrokeFilter`] wrapper around [`connect_gaps`].
#[derive(Clone, Debug, PartialEq)]
pub struct GapConnector {
    pub threshold: f64,
}

impl Default for GapConnector {
    fn default() -> Self {
        GapConnector::new(DEFAULT_GAP_THRESHOLD)
    }
}

impl GapConnector {
    pub fn new(threshold: f64) -> GapConnector {
        GapConnector { threshold }
    }

    pub fn threshold(self, val: f64) -> GapConnector {
        GapConnector { threshold: val }
    }

    pub fn finish(self) -> Arc<Box<dyn StrokeFilter>> {
        Arc::new(Box::new(self))
    }
}

impl StrokeFilter for GapConnector {
    fn apply(&self, strokes: &[Stroke]) -> Vec<Stroke> {
        connect_gaps(strokes, self.threshold)
    }
}
