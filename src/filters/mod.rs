//! Stroke filters: transformations from one stroke collection to a new one.
//!
//! Every filter takes its input by reference and hands back a freshly owned
//! collection, so the caller's strokes are never touched.
use std::sync::Arc;

use crate::stroke::Stroke;

/// Endpoint snapping across strokes.
pub mod gaps;

/// Three point averaging along a stroke.
pub mod smooth;

/// Neon recolour and width scaling.
pub mod restyle;

pub use gaps::{connect_gaps, GapConnector, DEFAULT_GAP_THRESHOLD};
pub use restyle::Restyle;
pub use smooth::{smooth, Smoother};

pub trait StrokeFilter: std::fmt::Debug + Send + Sync {
    fn apply(&self, strokes: &[Stroke]) -> Vec<Stroke>;
}

/// Run each filter in order, feeding the output of one into the next.
pub fn apply_all(filters: &[Arc<Box<dyn StrokeFilter>>], strokes: &[Stroke]) -> Vec<Stroke> {
    let mut current = strokes.to_vec();
    for filter in filters {
        current = filter.apply(&current);
    }
    current
}
