//! Row layout widget

use std::time::Duration;

use crate::constants::DEFAULT_SPACING;
use crate::disclosure::DisclosureNode;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

use super::container_helpers;

/// A horizontal row layout widget
pub struct Row<M> {
    children: Vec<Element<M>>,
    child_bounds: Vec<Bounds>,
}

impl<M> Row<M> {
    pub fn new(children: Vec<Element<M>>) -> Self {
        Self {
            children,
            child_bounds: Vec::new(),
        }
    }
}

impl<M: 'static> Widget<M> for Row<M> {
    fn layout(&mut self, available: Size) -> Size {
        let mut x = 0.0;
        let mut max_height: f32 = 0.0;
        self.child_bounds.clear();

        for child in self.children.iter_mut() {
            // Each child gets whatever width the previous ones left over
            let remaining = (available.width - x).max(0.0);
            let child_size = child.layout(Size::new(remaining, available.height));
            self.child_bounds.push(Bounds::from_size(x, 0.0, child_size));
            max_height = max_height.max(child_size.height);
            x += child_size.width + DEFAULT_SPACING;
        }

        let width = if self.children.is_empty() {
            0.0
        } else {
            x - DEFAULT_SPACING
        };

        Size::new(width, max_height)
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
