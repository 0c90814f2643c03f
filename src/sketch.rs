use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use svg::Document;
use tracing::debug;

use crate::enhance::Enhancer;
use crate::errors::SketchError;
use crate::export::strokes_to_svg;
use crate::filters::StrokeFilter;
use crate::pen::Pen;
use crate::stroke::Stroke;

/// The drawing itself: every finished stroke in drawing order, plus the
/// pen the next one will use.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Sketch {
    strokes: Vec<Stroke>,
    #[serde(default)]
    pub pen: Pen,
}

impl Sketch {
    pub fn new() -> Sketch {
        Sketch::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn push(&mut self, stroke: Stroke) -> &mut Self {
        self.strokes.push(stroke);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.strokes.clear();
        self
    }

    /// Swap in a whole new stroke collection, handing back the old one.
    pub fn replace(&mut self, strokes: Vec<Stroke>) -> Vec<Stroke> {
        std::mem::replace(&mut self.strokes, strokes)
    }

    /// Run the default neon pass over the current strokes.
    pub fn enhance(&mut self) -> &mut Self {
        self.enhance_with(&Enhancer::default())
    }

    pub fn enhance_with(&mut self, filter: &dyn StrokeFilter) -> &mut Self {
        let enhanced = filter.apply(&self.strokes);
        self.replace(enhanced);
        self
    }

    pub fn to_svg(&self) -> Result<Document, SketchError> {
        strokes_to_svg(&self.strokes)
    }

    pub fn to_string(&self) -> String {
        ron::to_string(self).expect("Sketch holds only strokes and a pen, all of which serialize")
    }

    /// Write the sketch as RON next to `path`, with a `.sketch` extension.
    /// The data goes to a temporary file first and is renamed into place.
    pub fn to_file(&self, path: &PathBuf) -> Result<PathBuf> {
        let path = path.with_extension("sketch");
        let tmp_path = path.with_extension(format!("sketch.tmp-{}", rand::random::<usize>()));
        let writer = std::fs::File::create(tmp_path.clone())?;
        if let Err(e) = ron::Options::default().to_io_writer(writer, &self) {
            std::fs::remove_file(&tmp_path).ok();
            return Err(e.into());
        }
        std::fs::rename(&tmp_path, &path)?;
        debug!("Saved {} strokes to {:?}", self.strokes.len(), path);
        Ok(path)
    }

    pub fn from_file(path: &PathBuf) -> Result<Sketch> {
        let mut reader = std::fs::File::open(path)?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        let sketch: Sketch = ron::from_str(data.as_str())?;
        debug!("Loaded {} strokes from {:?}", sketch.strokes.len(), path);
        Ok(sketch)
    }

    /// Compact binary snapshot, for handing a sketch to another process.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(postcard::to_allocvec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Sketch> {
        Ok(postcard::from_bytes(bytes)?)
    }
}
