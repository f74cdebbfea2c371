//! Type-erased widget wrapper

use std::time::Duration;

use crate::disclosure::DisclosureNode;
use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

/// A type-erased widget that can hold any widget type
pub struct Element<M> {
    widget: Box<dyn Widget<M>>,
}

impl<M> Element<M> {
    /// Create a new element from a widget
    pub fn new<W: Widget<M> + 'static>(widget: W) -> Self {
        Self {
            widget: Box::new(widget),
        }
    }

    pub fn layout(&mut self, available: Size) -> Size {
        self.widget.layout(available)
    }

    pub fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        self.widget.draw(renderer, bounds);
    }

    pub fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        self.widget.on_event(event, bounds)
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        self.widget.tick(dt)
    }

    pub fn disclosures_mut(&mut self) -> Vec<&mut dyn DisclosureNode> {
        self.widget.disclosures_mut()
    }
}

impl<M> std::fmt::Debug for Element<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element").finish_non_exhaustive()
    }
}
