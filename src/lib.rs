//! Touch sketching core: strokes, pens, and the neon "magic" pass.
//!
//! Strokes are recorded from drag gestures as plain point lists. The
//! enhancement pass then snaps nearby stroke endpoints together, smooths
//! every stroke with a three point average, and repaints the lot in
//! glowing cyan. Everything here is plain owned data with no UI attached;
//! a host feeds in strokes, gets new strokes back, and decides how to draw
//! them (or just exports SVG).
//!
//! ```rust
//! use neon_sketch_rs::prelude::*;
//! use geo_types::coord;
//!
//! let mut sketch = Sketch::new();
//! let mut rec = StrokeRecorder::new();
//! rec.begin(coord! {x: 0.0, y: 0.0})
//!     .extend(coord! {x: 0.0, y: 40.0}).unwrap()
//!     .extend(coord! {x: 40.0, y: 40.0}).unwrap();
//! sketch.push(rec.finish(&sketch.pen).unwrap());
//! rec.begin(coord! {x: 45.0, y: 45.0})
//!     .extend(coord! {x: 90.0, y: 0.0}).unwrap();
//! sketch.push(rec.finish(&sketch.pen).unwrap());
//!
//! sketch.enhance();
//! assert!(sketch.strokes().iter().all(|s| s.enhanced));
//! let svg = sketch.to_svg().unwrap().to_string();
//! assert!(svg.contains("<path"));
//! ```

pub mod errors;

/// Points and strokes.
pub mod stroke;

/// Pen state, palette and the colour wheel.
pub mod pen;

/// Turning drag gestures into strokes.
pub mod recorder;

pub mod filters;

pub mod enhance;

pub mod export;

/// The stroke collection a host draws from, with save/load.
pub mod sketch;

/// Everything a host normally needs in one import.
pub mod prelude {
    pub use crate::enhance::{enhance, EnhanceConfig, Enhancer};
    pub use crate::errors::SketchError;
    pub use crate::filters::{
        apply_all, connect_gaps, smooth, GapConnector, Restyle, Smoother, StrokeFilter,
    };
    pub use crate::pen::{color_wheel_pick, color_wheel_position, CssColor, Palette, Pen};
    pub use crate::recorder::StrokeRecorder;
    pub use crate::sketch::Sketch;
    pub use crate::stroke::{Point, Stroke};
}
