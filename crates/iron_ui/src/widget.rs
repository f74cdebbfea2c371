//! Widget trait and related types

use std::time::Duration;

use crate::disclosure::DisclosureNode;
use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space.
    ///
    /// An unbounded width asks for the widget's natural width.
    fn layout(&mut self, available: Size) -> Size;

    /// Draw the widget to the renderer
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let _ = (event, bounds);
        None
    }

    /// Advance time-based state by `dt`. Returns true while still animating.
    fn tick(&mut self, dt: Duration) -> bool {
        let _ = dt;
        false
    }

    /// Disclosures owned by this widget or its descendants, outermost first
    fn disclosures_mut(&mut self) -> Vec<&mut dyn DisclosureNode> {
        Vec::new()
    }
}
