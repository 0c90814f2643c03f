//! The "AI magic" pass: close gaps, smooth, then repaint as neon.
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filters::{apply_all, GapConnector, Restyle, Smoother, StrokeFilter, DEFAULT_GAP_THRESHOLD};
use crate::pen::{CssColor, Palette};
use crate::stroke::Stroke;

/// Tunables for the enhancement pass. The defaults reproduce the stock
/// neon look.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnhanceConfig {
    #[serde(default = "default_gap_threshold")]
    pub gap_threshold: f64,
    #[serde(default = "default_width_scale")]
    pub width_scale: f64,
    #[serde(default = "Palette::neon")]
    pub neon_color: CssColor,
}

fn default_gap_threshold() -> f64 {
    DEFAULT_GAP_THRESHOLD
}

fn default_width_scale() -> f64 {
    0.8
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            gap_threshold: default_gap_threshold(),
            width_scale: default_width_scale(),
            neon_color: Palette::neon(),
        }
    }
}

impl EnhanceConfig {
    pub fn to_string(&self) -> String {
        ron::ser::to_string_pretty(self, PrettyConfig::default())
            .expect("EnhanceConfig only holds plain numbers and a colour")
    }

    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    pub fn from_file(path: &PathBuf) -> Result<EnhanceConfig> {
        let mut reader = std::fs::File::open(path)?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        let config = ron::from_str(data.as_str())?;
        Ok(config)
    }
}

/// Runs gap connection, smoothing and restyling in that order.
#[derive(Clone, Debug)]
pub struct Enhancer {
    config: EnhanceConfig,
    stages: Vec<Arc<Box<dyn StrokeFilter>>>,
}

impl Default for Enhancer {
    fn default() -> Self {
        Enhancer::new(EnhanceConfig::default())
    }
}

impl Enhancer {
    pub fn new(config: EnhanceConfig) -> Enhancer {
        let stages = vec![
            GapConnector::new(config.gap_threshold).finish(),
            Smoother::new().finish(),
            Restyle::new(config.neon_color.clone(), config.width_scale).finish(),
        ];
        Enhancer { config, stages }
    }

    pub fn config(&self) -> &EnhanceConfig {
        &self.config
    }
}

impl StrokeFilter for Enhancer {
    fn apply(&self, strokes: &[Stroke]) -> Vec<Stroke> {
        debug!("Enhancing {} strokes", strokes.len());
        apply_all(&self.stages, strokes)
    }
}

/// Enhance a stroke collection with the default settings.
///
/// Returns a new collection of the same length and order. Each stroke has
/// its nearby endpoints snapped together (60px), its interior smoothed,
/// its colour set to neon cyan, its width scaled by 0.8, and `enhanced`
/// set. Point counts never change.
///
/// Coordinates are not validated. NaN or infinite values simply flow
/// through the arithmetic: a NaN endpoint is never within range of
/// anything so it never snaps, and a NaN point poisons the smoothed
/// neighbours that average it.
pub fn enhance(strokes: &[Stroke]) -> Vec<Stroke> {
    Enhancer::default().apply(strokes)
}
