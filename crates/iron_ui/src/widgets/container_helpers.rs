//! Helper functions for container layout widgets (Row, Column)

use std::time::Duration;

use crate::disclosure::DisclosureNode;
use crate::element::Element;
use crate::event::Event;
use crate::layout::Bounds;
use crate::renderer::Renderer;

/// Convert child bounds relative to a container into absolute bounds.
#[inline]
pub fn translate_bounds(child: Bounds, container: Bounds) -> Bounds {
    Bounds::new(
        container.x + child.x,
        container.y + child.y,
        child.width,
        child.height,
    )
}

/// Draw every child at its cached position.
pub fn draw_children<M>(
    children: &[Element<M>],
    child_bounds: &[Bounds],
    renderer: &mut Renderer,
    container: Bounds,
) {
    for (child, bounds) in children.iter().zip(child_bounds.iter()) {
        child.draw(renderer, translate_bounds(*bounds, container));
    }
}

/// Dispatch an event to child elements.
///
/// Presses go to the child under the pointer. Moves, key presses and
/// cursor-left go to every child so hover state can clear; the first message
/// produced wins.
pub fn dispatch_event_to_children<M>(
    children: &mut [Element<M>],
    child_bounds: &[Bounds],
    event: &Event,
    container: Bounds,
) -> Option<M> {
    match event {
        Event::MousePress { position, .. } | Event::MouseRelease { position, .. } => {
            for (child, bounds) in children.iter_mut().zip(child_bounds.iter()) {
                let absolute = translate_bounds(*bounds, container);
                if absolute.contains(position.0, position.1) {
                    return child.on_event(event, absolute);
                }
            }
            None
        }
        Event::MouseMove { .. } | Event::KeyPress { .. } | Event::CursorLeft => {
            let mut result = None;
            for (child, bounds) in children.iter_mut().zip(child_bounds.iter()) {
                let absolute = translate_bounds(*bounds, container);
                let msg = child.on_event(event, absolute);
                if result.is_none() {
                    result = msg;
                }
            }
            result
        }
    }
}

/// Tick every child; true if any is still animating.
pub fn tick_children<M>(children: &mut [Element<M>], dt: Duration) -> bool {
    children
        .iter_mut()
        .fold(false, |animating, child| child.tick(dt) || animating)
}

/// Collect disclosures from every child in order.
pub fn children_disclosures<M>(children: &mut [Element<M>]) -> Vec<&mut dyn DisclosureNode> {
    children
        .iter_mut()
        .flat_map(|child| child.disclosures_mut())
        .collect()
}
