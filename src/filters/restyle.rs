use std::sync::Arc;

use csscolorparser::Color;

use super::StrokeFilter;
use crate::pen::Palette;
use crate::stroke::Stroke;

/// Recolours every stroke, scales its width and marks it enhanced.
/// Points are not touched.
#[derive(Clone, Debug, PartialEq)]
pub struct Restyle {
    pub color: Color,
    pub width_scale: f64,
}

impl Default for Restyle {
    fn default() -> Self {
        Restyle::new(Palette::neon(), 0.8)
    }
}

impl Restyle {
    pub fn new(color: Color, width_scale: f64) -> Restyle {
        Restyle { color, width_scale }
    }

    pub fn color(self, val: Color) -> Restyle {
        Restyle { color: val, ..self }
    }

    pub fn width_scale(self, val: f64) -> Restyle {
        Restyle {
            width_scale: val,
            ..self
        }
    }

    pub fn finish(self) -> Arc<Box<dyn StrokeFilter>> {
        Arc::new(Box::new(self))
    }
}

impl StrokeFilter for Restyle {
    fn apply(&self, strokes: &[Stroke]) -> Vec<Stroke> {
        strokes
            .iter()
            .map(|stroke| Stroke {
                points: stroke.points.clone(),
                color: self.color.clone(),
                width: stroke.width * self.width_scale,
                enhanced: true,
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_restyle_defaults() {
        let strokes = vec![Stroke::new(
            vec![coord! {x: 0.0, y: 0.0}, coord! {x: 1.0, y: 1.0}],
            Color::from_rgba8(255, 0, 0, 255),
            10.0,
        )];
        let out = Restyle::default().apply(&strokes);
        assert_eq!(out[0].color, Palette::neon());
        assert_eq!(out[0].width, 10.0 * 0.8);
        assert!(out[0].enhanced);
        assert_eq!(out[0].points, strokes[0].points);
    }

    #[test]
    fn test_restyle_custom() {
        let strokes = vec![Stroke::new(vec![], Color::from_rgba8(0, 0, 0, 255), 4.0)];
        let magenta = Color::from_rgba8(255, 0, 255, 255);
        let out = Restyle::default()
            .color(magenta.clone())
            .width_scale(2.0)
            .apply(&strokes);
        assert_eq!(out[0].color, magenta);
        assert_eq!(out[0].width, 8.0);
        assert!(out[0].is_empty());
    }
}
