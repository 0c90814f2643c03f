pub use csscolorparser::parse as parse_css_color;
pub use csscolorparser::Color as CssColor;
use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_PEN_WIDTH: f64 = 1.0;
pub const MAX_PEN_WIDTH: f64 = 50.0;

/// The colour and width new strokes are recorded with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pen {
    pub color: CssColor,
    #[serde(deserialize_with = "clamped_width")]
    width: f64,
}

fn clamped_width<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(f64::deserialize(deserializer)?.clamp(MIN_PEN_WIDTH, MAX_PEN_WIDTH))
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: CssColor::from_rgba8(255, 255, 255, 255),
            width: 10.0,
        }
    }
}

impl Pen {
    pub fn new(color: CssColor, width: f64) -> Pen {
        Pen::default().color(color).width(width)
    }

    pub fn color(self, color: CssColor) -> Pen {
        Pen { color, ..self }
    }

    /// Set the width, clamped to the slider range.
    pub fn width(self, width: f64) -> Pen {
        Pen {
            width: width.clamp(MIN_PEN_WIDTH, MAX_PEN_WIDTH),
            ..self
        }
    }

    pub fn stroke_width(&self) -> f64 {
        self.width
    }
}

/// Fixed swatches offered next to the colour wheel.
pub struct Palette;

impl Palette {
    pub fn swatches() -> Vec<CssColor> {
        vec![
            CssColor::from_rgba8(255, 255, 255, 255),
            CssColor::from_rgba8(255, 0, 0, 255),
            CssColor::from_rgba8(0, 0, 255, 255),
            CssColor::from_rgba8(0, 255, 0, 255),
            CssColor::from_rgba8(255, 255, 0, 255),
            CssColor::from_rgba8(0xBB, 0x86, 0xFC, 255),
        ]
    }

    /// Cyan, the colour every enhanced stroke is repainted with.
    pub fn neon() -> CssColor {
        CssColor::from_rgba8(0, 255, 255, 255)
    }
}

/// Pick a colour from a hue/saturation wheel.
///
/// `dx`/`dy` is the touch offset from the wheel centre. Angle maps to hue
/// (0 degrees pointing along +x, turning towards +y), distance from the
/// centre maps to saturation, and value is always full. Touches outside
/// the wheel give `None`. Channels are rounded to 8 bits, so the colour
/// saves and loads unchanged.
pub fn color_wheel_pick(dx: f64, dy: f64, radius: f64) -> Option<CssColor> {
    if radius <= 0.0 {
        return None;
    }
    let distance = dx.hypot(dy);
    if !(distance <= radius) {
        return None;
    }
    let hue = (dy.atan2(dx).to_degrees() + 360.0) % 360.0;
    let saturation = (distance / radius).clamp(0.0, 1.0);
    let [r, g, b, a] = CssColor::from_hsva(hue as _, saturation as _, 1.0, 1.0).to_rgba8();
    Some(CssColor::from_rgba8(r, g, b, a))
}

/// Where a colour sits on the wheel, as an offset from the centre. Inverse
/// of [`color_wheel_pick`] for fully bright colours.
pub fn color_wheel_position(color: &CssColor, radius: f64) -> (f64, f64) {
    let [hue, saturation, _, _] = color.to_hsva();
    let angle = f64::from(hue).to_radians();
    let distance = f64::from(saturation) * radius;
    (distance * angle.cos(), distance * angle.sin())
}
