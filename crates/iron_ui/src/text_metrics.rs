//! Text measurement utilities.
//!
//! Estimates text dimensions from average glyph ratios. There is no font
//! rasterizer behind the headless renderer, so layout works from these
//! approximations.

use crate::constants::{CHAR_WIDTH_FACTOR, DEFAULT_FONT_SIZE, LINE_HEIGHT_FACTOR};

/// Metrics for a specific font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Font size in pixels
    pub size: f32,
    /// Average character width as a ratio of font size
    pub char_width_ratio: f32,
    /// Line height as a ratio of font size
    pub line_height_ratio: f32,
}

impl TextMetrics {
    /// Metrics for a font size using the default ratios.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            char_width_ratio: CHAR_WIDTH_FACTOR,
            line_height_ratio: LINE_HEIGHT_FACTOR,
        }
    }

    /// Estimate the width of a single line.
    pub fn line_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * self.char_width_ratio
    }

    pub fn line_height(&self) -> f32 {
        self.size * self.line_height_ratio
    }

    /// Estimate dimensions for multi-line text. An empty string still occupies one line.
    pub fn measure(&self, text: &str) -> (f32, f32) {
        let line_count = text.lines().count().max(1);
        let width = text
            .lines()
            .map(|line| self.line_width(line))
            .fold(0.0f32, f32::max);
        (width, line_count as f32 * self.line_height())
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE)
    }
}
