//! Fixed-size empty widget

use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

/// Occupies a fixed amount of space and draws nothing
#[derive(Debug, Clone, Copy)]
pub struct Space {
    size: Size,
}

impl Space {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl<M> Widget<M> for Space {
    fn layout(&mut self, _available: Size) -> Size {
        self.size
    }

    fn draw(&self, _renderer: &mut Renderer, _bounds: Bounds) {}
}

/// Create a fixed-size spacer
pub fn space(width: f32, height: f32) -> Space {
    Space::new(width, height)
}
