use std::sync::Arc;

use super::StrokeFilter;
use crate::stroke::{Point, Stroke};

/// Single pass three point moving average.
///
/// Each interior point becomes the centroid of itself and its neighbours,
/// always taken from the input so earlier results never feed into later
/// ones. The first and last points are copied as is, and anything shorter
/// than three points comes back unchanged.
pub fn smooth(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut smoothed = Vec::with_capacity(points.len());
    smoothed.push(points[0]);
    smoothed.extend(points.windows(3).map(|w| (w[0] + w[1] + w[2]) / 3.0));
    smoothed.push(points[points.len() - 1]);
    smoothed
}

/// Applies [`smooth`] to every stroke independently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Smoother {}

impl Smoother {
    pub fn new() -> Smoother {
        Smoother {}
    }

    pub fn finish(self) -> Arc<Box<dyn StrokeFilter>> {
        Arc::new(Box::new(self))
    }
}

impl StrokeFilter for Smoother {
    fn apply(&self, strokes: &[Stroke]) -> Vec<Stroke> {
        strokes
            .iter()
            .map(|stroke| stroke.with_points(smooth(&stroke.points.0)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use csscolorparser::Color;
    use geo_types::coord;

    #[test]
    fn test_short_input_is_identity() {
        let empty: Vec<Point> = vec![];
        assert_eq!(smooth(&empty), empty);
        let one = vec![coord! {x: 4.0, y: 2.0}];
        assert_eq!(smooth(&one), one);
        let two = vec![coord! {x: 4.0, y: 2.0}, coord! {x: -1.0, y: 9.0}];
        assert_eq!(smooth(&two), two);
    }

    #[test]
    fn test_corner_is_averaged() {
        let points = vec![coord! {x: 0.0, y: 0.0}, coord! {x: 0.0, y: 3.0}, coord! {x: 3.0, y: 0.0}];
        assert_eq!(
            smooth(&points),
            vec![coord! {x: 0.0, y: 0.0}, coord! {x: 1.0, y: 1.0}, coord! {x: 3.0, y: 0.0}]
        );
    }

    #[test]
    fn test_collinear_points_are_fixed() {
        let points = vec![
            coord! {x: 0.0, y: 0.0},
            coord! {x: 3.0, y: 0.0},
            coord! {x: 6.0, y: 0.0},
            coord! {x: 9.0, y: 0.0},
        ];
        assert_eq!(smooth(&points), points);
    }

    #[test]
    fn test_uses_original_neighbours() {
        // Feeding output forward would average the third point against the
        // smoothed y of 3 instead of 9 and give 1.
        let points = vec![
            coord! {x: 0.0, y: 0.0},
            coord! {x: 0.0, y: 9.0},
            coord! {x: 0.0, y: 0.0},
            coord! {x: 0.0, y: 0.0},
        ];
        assert_eq!(
            smooth(&points),
            vec![
                coord! {x: 0.0, y: 0.0},
                coord! {x: 0.0, y: 3.0},
                coord! {x: 0.0, y: 3.0},
                coord! {x: 0.0, y: 0.0},
            ]
        );
    }

    #[test]
    fn test_endpoints_survive() {
        let points = vec![
            coord! {x: 1.5, y: -2.0},
            coord! {x: 7.0, y: 3.0},
            coord! {x: -4.0, y: 8.0},
            coord! {x: 11.0, y: 0.25},
            coord! {x: 2.0, y: 2.0},
        ];
        let out = smooth(&points);
        assert_eq!(out.len(), points.len());
        assert_eq!(out.first(), points.first());
        assert_eq!(out.last(), points.last());
    }

    #[test]
    fn test_nan_spreads_to_neighbours() {
        let points = vec![
            coord! {x: 0.0, y: 0.0},
            coord! {x: f64::NAN, y: 0.0},
            coord! {x: 1.0, y: 0.0},
            coord! {x: 2.0, y: 0.0},
            coord! {x: 3.0, y: 0.0},
        ];
        let out = smooth(&points);
        assert!(out[1].x.is_nan());
        assert!(out[2].x.is_nan());
        assert_eq!(out[3], coord! {x: 2.0, y: 0.0});
        assert_eq!(out[4], coord! {x: 3.0, y: 0.0});
    }

    #[test]
    fn test_filter_keeps_strokes_apart() {
        let white = Color::from_rgba8(255, 255, 255, 255);
        let strokes = vec![
            Stroke::new(
                vec![coord! {x: 0.0, y: 0.0}, coord! {x: 0.0, y: 3.0}, coord! {x: 3.0, y: 0.0}],
                white.clone(),
                10.0,
            ),
            Stroke::new(vec![], white, 5.0),
        ];
        let out = Smoother::new().apply(&strokes);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].points.0[1], coord! {x: 1.0, y: 1.0});
        assert!(out[1].is_empty());
        assert_eq!(out[1].width, 5.0);
    }
}
