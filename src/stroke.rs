use csscolorparser::Color;
use geo_types::{Coord, LineString};
use serde::{Deserialize, Serialize};

/// A position on the canvas, in device pixels.
pub type Point = Coord<f64>;

/// One continuous pen gesture: the points in drawing order plus the style
/// it is rendered with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: LineString<f64>,
    pub color: Color,
    pub width: f64,
    /// Set once the stroke has been through the neon pipeline.
    #[serde(default)]
    pub enhanced: bool,
}

impl Stroke {
    pub fn new(points: Vec<Point>, color: Color, width: f64) -> Stroke {
        Stroke {
            points: LineString::new(points),
            color,
            width,
            enhanced: false,
        }
    }

    /// Copy of this stroke with its points swapped out; style is kept.
    pub fn with_points(&self, points: Vec<Point>) -> Stroke {
        Stroke {
            points: LineString::new(points),
            ..self.clone()
        }
    }

    pub fn head(&self) -> Option<Point> {
        self.points.0.first().copied()
    }

    pub fn tail(&self) -> Option<Point> {
        self.points.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.0.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_endpoints() {
        let stroke = Stroke::new(
            vec![coord! {x: 1.0, y: 2.0}, coord! {x: 3.0, y: 4.0}, coord! {x: 5.0, y: 6.0}],
            Color::from_rgba8(255, 255, 255, 255),
            10.0,
        );
        assert_eq!(stroke.head(), Some(coord! {x: 1.0, y: 2.0}));
        assert_eq!(stroke.tail(), Some(coord! {x: 5.0, y: 6.0}));
        assert_eq!(stroke.len(), 3);
        assert!(!stroke.enhanced);
    }

    #[test]
    fn test_single_point_head_is_tail() {
        let stroke = Stroke::new(vec![coord! {x: 7.0, y: 7.0}], Color::from_rgba8(0, 0, 0, 255), 1.0);
        assert_eq!(stroke.head(), stroke.tail());
    }

    #[test]
    fn test_empty_stroke_has_no_endpoints() {
        let stroke = Stroke::new(vec![], Color::from_rgba8(0, 0, 0, 255), 1.0);
        assert!(stroke.is_empty());
        assert_eq!(stroke.head(), None);
        assert_eq!(stroke.tail(), None);
    }

    #[test]
    fn test_with_points_keeps_style() {
        let stroke = Stroke::new(vec![coord! {x: 0.0, y: 0.0}], Color::from_rgba8(255, 0, 0, 255), 4.0);
        let moved = stroke.with_points(vec![coord! {x: 1.0, y: 1.0}, coord! {x: 2.0, y: 2.0}]);
        assert_eq!(moved.color, stroke.color);
        assert_eq!(moved.width, 4.0);
        assert_eq!(moved.len(), 2);
        assert_eq!(stroke.len(), 1);
    }
}
