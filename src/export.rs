//! SVG output for stroke collections, including the glow under enhanced strokes.
use geo::BoundingRect;
use geo_types::{coord, MultiLineString, Rect};
use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

use crate::errors::SketchError;
use crate::pen::CssColor;
use crate::stroke::Stroke;

/// Glow paths are this much wider than the stroke they sit under.
pub const GLOW_WIDTH_SCALE: f64 = 2.5;
/// And this much more transparent.
pub const GLOW_OPACITY: f64 = 0.5;

/// Convert a stroke's points to SVG path data. A single point becomes a
/// zero length segment so a round cap still renders it as a dot.
pub fn to_path_data(stroke: &Stroke) -> Data {
    let mut data = Data::new();
    let points = &stroke.points.0;
    if let Some(first) = points.first() {
        data = data.move_to((first.x, first.y));
        if points.len() == 1 {
            data = data.line_to((first.x, first.y));
        }
    }
    for point in points.iter().skip(1) {
        data = data.line_to((point.x, point.y));
    }
    data
}

fn stroke_path(stroke: &Stroke, width: f64, opacity: f64) -> Path {
    let [r, g, b, _] = stroke.color.to_rgba8();
    Path::new()
        .set("d", to_path_data(stroke))
        .set("fill", "none")
        .set("stroke", format!("rgb({},{},{})", r, g, b))
        .set("stroke-width", width)
        .set("stroke-opacity", opacity)
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round")
}

fn alpha(color: &CssColor) -> f64 {
    f64::from(color.to_rgba8()[3]) / 255.0
}

/// Bounds of every point, grown by the widest stroke so caps and glows fit.
pub fn padded_bounds(strokes: &[Stroke]) -> Option<Rect<f64>> {
    let mls = MultiLineString::new(strokes.iter().map(|s| s.points.clone()).collect());
    let bounds = mls.bounding_rect()?;
    let pad = strokes
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| if s.enhanced { s.width * GLOW_WIDTH_SCALE } else { s.width })
        .fold(0.0f64, f64::max);
    let grow = coord! {x: pad, y: pad};
    Some(Rect::new(bounds.min() - grow, bounds.max() + grow))
}

/// Render strokes in order, later strokes on top. Enhanced strokes get a
/// wide translucent copy of themselves drawn first.
pub fn strokes_to_svg(strokes: &[Stroke]) -> Result<Document, SketchError> {
    let bounds = padded_bounds(strokes).ok_or(SketchError::EmptySketch)?;
    let mut doc = Document::new()
        .set(
            "viewBox",
            (bounds.min().x, bounds.min().y, bounds.width(), bounds.height()),
        )
        .set("width", format!("{}px", bounds.width()))
        .set("height", format!("{}px", bounds.height()));
    for stroke in strokes.iter().filter(|s| !s.is_empty()) {
        let opacity = alpha(&stroke.color);
        if stroke.enhanced {
            doc = doc.add(stroke_path(
                stroke,
                stroke.width * GLOW_WIDTH_SCALE,
                opacity * GLOW_OPACITY,
            ));
        }
        doc = doc.add(stroke_path(stroke, stroke.width, opacity));
    }
    Ok(doc)
}
