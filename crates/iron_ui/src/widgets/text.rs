//! Text widget

use crate::constants::DEFAULT_FONT_SIZE;
use crate::layout::{Bounds, Size};
use crate::renderer::{Color, Renderer};
use crate::text_metrics::TextMetrics;
use crate::widget::Widget;

/// A text display widget
pub struct Text {
    content: String,
    size: f32,
    color: Color,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: DEFAULT_FONT_SIZE,
            color: Color::TEXT_PRIMARY,
        }
    }

    /// Set the font size
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl<M> Widget<M> for Text {
    fn layout(&mut self, available: Size) -> Size {
        let (width, height) = TextMetrics::new(self.size).measure(&self.content);
        Size::new(width.min(available.width.max(0.0)), height)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let line_height = TextMetrics::new(self.size).line_height();
        for (i, line) in self.content.lines().enumerate() {
            renderer.text(
                line,
                bounds.x,
                bounds.y + i as f32 * line_height,
                self.size,
                self.color,
            );
        }
    }
}

/// Create a text widget
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}
