use crate::color::Color;
use serde::{Deserialize, Serialize};
use softpipe_core::{Result, SoftpipeError};
use std::path::Path;

/// Renderer settings. Every field has a default, so a partial JSON object
/// (or `{}`) is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Color the surface is cleared to at the start of every frame.
    pub clear_color: Color,
    /// Wireframe stroke width in pixels. Clamped to at least one pixel.
    pub line_width: f64,
}

impl RendererConfig {
    pub const DEFAULT_CLEAR_COLOR: Color = Color::BLACK;
    pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SoftpipeError::Config(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: Self::DEFAULT_CLEAR_COLOR,
            line_width: Self::DEFAULT_LINE_WIDTH,
        }
    }
}
