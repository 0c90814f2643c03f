use tracing::trace;

use crate::errors::SketchError;
use crate::pen::Pen;
use crate::stroke::{Point, Stroke};

/// Collects the points of the drag gesture in progress and turns them into
/// a [`Stroke`] once the finger lifts.
#[derive(Debug, Clone, Default)]
pub struct StrokeRecorder {
    points: Vec<Point>,
    active: bool,
}

impl StrokeRecorder {
    pub fn new() -> StrokeRecorder {
        StrokeRecorder::default()
    }

    /// Start a gesture. A second start before `finish` keeps appending to
    /// the same buffer.
    pub fn begin(&mut self, point: Point) -> &mut Self {
        self.active = true;
        self.points.push(point);
        self
    }

    pub fn extend(&mut self, point: Point) -> Result<&mut Self, SketchError> {
        if !self.active {
            return Err(SketchError::NoActiveGesture);
        }
        self.points.push(point);
        Ok(self)
    }

    /// End the gesture. Produces a stroke in the pen's style if any points
    /// were collected; the buffer is cleared either way.
    pub fn finish(&mut self, pen: &Pen) -> Option<Stroke> {
        self.active = false;
        if self.points.is_empty() {
            return None;
        }
        let points = std::mem::take(&mut self.points);
        trace!("Recorded stroke with {} points", points.len());
        Some(Stroke::new(points, pen.color.clone(), pen.stroke_width()))
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.points.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Points of the gesture in progress, for drawing the live path.
    pub fn active_points(&self) -> &[Point] {
        &self.points
    }
}
