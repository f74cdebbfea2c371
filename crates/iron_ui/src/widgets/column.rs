//! Column layout widget

use std::time::Duration;

use crate::constants::DEFAULT_SPACING;
use crate::disclosure::DisclosureNode;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

use super::container_helpers;

/// A vertical column layout widget
pub struct Column<M> {
    children: Vec<Element<M>>,
    /// Cached child bounds from layout, relative to the column
    child_bounds: Vec<Bounds>,
}

impl<M> Column<M> {
    /// Create a new column with the given children
    pub fn new(children: Vec<Element<M>>) -> Self {
        Self {
            children,
            child_bounds: Vec::new(),
        }
    }
}

impl<M: 'static> Widget<M> for Column<M> {
    fn layout(&mut self, available: Size) -> Size {
        let mut max_width: f32 = 0.0;
        let mut y = 0.0;
        self.child_bounds.clear();

        for (i, child) in self.children.iter_mut().enumerate() {
            let child_size = child.layout(available);
            log::trace!("  Column child {} layout: {:?}", i, child_size);
            max_width = max_width.max(child_size.width);
            self.child_bounds.push(Bounds::from_size(0.0, y, child_size));
            y += child_size.height + DEFAULT_SPACING;
        }

        let height = if self.children.is_empty() {
            0.0
        } else {
            y - DEFAULT_SPACING
        };

        Size::new(max_width.min(available.width), height)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        container_helpers::draw_children(&self.children, &self.child_bounds, renderer, bounds);
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        container_helpers::dispatch_event_to_children(
            &mut self.children,
            &self.child_bounds,
            event,
            bounds,
        )
    }

    fn tick(&mut self, dt: Duration) -> bool {
        container_helpers::tick_children(&mut self.children, dt)
    }

    fn disclosures_mut(&mut self) -> Vec<&mut dyn DisclosureNode> {
        container_helpers::children_disclosures(&mut self.children)
    }
}
