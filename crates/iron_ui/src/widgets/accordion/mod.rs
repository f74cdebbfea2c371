//! Accordion widget: a vertical list of independently collapsible sections.
//!
//! Each section has a clickable header (heading, underline and chevron),
//! optional header extras beside it and a body that animates open and closed.
//! Before the first layout, and again whenever the section count or the
//! `loaded` signal changes, the list's width is stabilized so opening a section
//! never resizes the list.
//!
//! ```ignore
//! use std::time::Duration;
//! use iron_ui::prelude::*;
//!
//! let accordion = Accordion::new(
//!     vec![
//!         Section::new("Week 1", Element::new(text("Heavy singles"))),
//!         Section::new("Week 2", Element::new(text("Deload"))),
//!     ],
//!     Duration::from_millis(200),
//! )
//! .loaded(true);
//! ```

mod controller;
mod section;

#[cfg(test)]
mod tests;

pub use controller::{SectionController, SectionMetrics, SectionPhase};
pub use section::Section;

use std::time::Duration;

use crate::constants::ACCORDION_SECTION_SPACING;
use crate::disclosure::{DisclosureNode, SectionTree};
use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::{Color, Renderer};
use crate::scope::{ScopeId, SectionKey};
use crate::stabilizer::{self, ContainerWidth, WidthPolicy};
use crate::widget::Widget;
use crate::widgets::container_helpers::translate_bounds;

use section::SectionSlot;

/// Signal that content has (re)loaded. Any change triggers a new stabilizer pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LoadSignal(pub u64);

impl From<bool> for LoadSignal {
    fn from(loaded: bool) -> Self {
        Self(u64::from(loaded))
    }
}

impl From<usize> for LoadSignal {
    fn from(count: usize) -> Self {
        Self(count as u64)
    }
}

impl From<u64> for LoadSignal {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A vertical list of collapsible sections.
pub struct Accordion<M> {
    scope: ScopeId,
    slots: Vec<SectionSlot<M>>,
    animation_time: Duration,
    loaded: LoadSignal,
    width_policy: WidthPolicy,
    container_width: Option<ContainerWidth>,
    /// Inputs of the last stabilizer pass
    stabilized_for: Option<(LoadSignal, usize)>,
    /// Cached slot bounds from layout, relative to the accordion
    slot_bounds: Vec<Bounds>,
}

impl<M> Accordion<M> {
    pub fn new(sections: Vec<Section<M>>, animation_time: Duration) -> Self {
        let scope = ScopeId::random();
        log::debug!(
            "accordion #{} created with {} sections",
            scope,
            sections.len()
        );
        let slots = sections
            .into_iter()
            .map(|section| {
                let open = section.is_initially_open();
                SectionSlot::new(section, open, animation_time)
            })
            .collect();
        Self {
            scope,
            slots,
            animation_time,
            loaded: LoadSignal::default(),
            width_policy: WidthPolicy::default(),
            container_width: None,
            stabilized_for: None,
            slot_bounds: Vec::new(),
        }
    }

    /// Set the content-loaded signal.
    pub fn loaded(mut self, loaded: impl Into<LoadSignal>) -> Self {
        self.loaded = loaded.into();
        self
    }

    /// How the stabilized width is applied.
    pub fn width_policy(mut self, policy: WidthPolicy) -> Self {
        self.width_policy = policy;
        self
    }

    /// Replace the sections. Open state is carried over by position; every
    /// section gets a fresh controller.
    pub fn set_sections(&mut self, sections: Vec<Section<M>>) {
        let previous: Vec<bool> = self
            .slots
            .iter()
            .map(|slot| slot.controller.is_open())
            .collect();
        self.slots = sections
            .into_iter()
            .enumerate()
            .map(|(index, section)| {
                let open = previous
                    .get(index)
                    .copied()
                    .unwrap_or_else(|| section.is_initially_open());
                SectionSlot::new(section, open, self.animation_time)
            })
            .collect();
        self.slot_bounds.clear();
        log::debug!(
            "accordion #{} sections replaced ({} -> {})",
            self.scope,
            previous.len(),
            self.slots.len()
        );
    }

    pub fn set_loaded(&mut self, loaded: impl Into<LoadSignal>) {
        self.loaded = loaded.into();
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Width fixed by the last stabilizer pass, if any
    pub fn container_width(&self) -> Option<ContainerWidth> {
        self.container_width
    }

    pub fn section_count(&self) -> usize {
        self.slots.len()
    }

    pub fn controller(&self, index: usize) -> Option<&SectionController> {
        self.slots.get(index).map(|slot| &slot.controller)
    }

    pub fn phase(&self, index: usize) -> Option<SectionPhase> {
        self.controller(index).map(SectionController::phase)
    }

    /// Header rect of a section from the last layout, relative to the accordion
    pub fn header_bounds(&self, index: usize) -> Option<Bounds> {
        let slot = self.slots.get(index)?;
        let bounds = self.slot_bounds.get(index)?;
        Some(translate_bounds(slot.header_rect(), *bounds))
    }

    /// Run the stabilizer if the section count or load signal changed since the last pass.
    fn ensure_stabilized(&mut self) {
        let key = (self.loaded, self.slots.len());
        if self.stabilized_for == Some(key) {
            return;
        }
        self.stabilized_for = Some(key);

        let policy = self.width_policy;
        match stabilizer::stabilize(self, policy) {
            Some(width) => {
                log::debug!(
                    "accordion #{} container width {} ({:?})",
                    self.scope,
                    width.width,
                    width.policy
                );
                self.container_width = Some(width);
            }
            None => log::trace!("accordion #{} width left unchanged", self.scope),
        }
    }

    fn natural_width(&mut self) -> f32 {
        self.slots
            .iter_mut()
            .map(SectionSlot::natural_width)
            .fold(0.0, f32::max)
    }
}

impl<M: 'static> Widget<M> for Accordion<M> {
    fn layout(&mut self, available: Size) -> Size {
        self.ensure_stabilized();

        let width = match (self.container_width, available.is_width_bounded()) {
            (Some(container), true) => container.resolve(available.width),
            (Some(container), false) => match container.policy {
                WidthPolicy::Fixed => container.width,
                WidthPolicy::Minimum => container.width.max(self.natural_width()),
            },
            (None, true) => available.width,
            (None, false) => self.natural_width(),
        };

        self.slot_bounds.clear();
        let mut y = 0.0;
        for slot in &mut self.slots {
            let size = slot.layout(Size::new(width, f32::INFINITY));
            self.slot_bounds.push(Bounds::new(0.0, y, width, size.height));
            y += size.height + ACCORDION_SECTION_SPACING;
        }
        let height = if self.slots.is_empty() {
            0.0
        } else {
            y - ACCORDION_SECTION_SPACING
        };

        Size::new(width, height)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        renderer.begin_group(self.scope);
        for (index, (slot, rel)) in self.slots.iter().zip(&self.slot_bounds).enumerate() {
            let slot_bounds = translate_bounds(*rel, bounds);
            if index > 0 {
                let divider_y = slot_bounds.y - ACCORDION_SECTION_SPACING / 2.0;
                renderer.fill_rect(
                    Bounds::new(slot_bounds.x, divider_y, slot_bounds.width, 1.0),
                    Color::DIVIDER,
                );
            }
            renderer.hit_region(
                SectionKey {
                    scope: self.scope,
                    index,
                },
                translate_bounds(slot.header_rect(), slot_bounds),
            );
            slot.draw(renderer, slot_bounds);
        }
        renderer.end_group();
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let scope = self.scope;
        let mut result = None;
        for (index, (slot, rel)) in self.slots.iter_mut().zip(&self.slot_bounds).enumerate() {
            let slot_bounds = translate_bounds(*rel, bounds);
            if let Some((x, y)) = event.position() {
                let is_press = matches!(
                    event,
                    Event::MousePress { .. } | Event::MouseRelease { .. }
                );
                if is_press && !slot_bounds.contains(x, y) {
                    continue;
                }
            }
            let (message, toggled) = slot.on_event(event, slot_bounds);
            if toggled {
                log::debug!("accordion #{} section {} ('{}') clicked", scope, index, slot.heading());
            }
            if result.is_none() {
                result = message;
            }
        }
        result
    }

    fn tick(&mut self, dt: Duration) -> bool {
        self.slots
            .iter_mut()
            .fold(false, |animating, slot| slot.tick(dt) || animating)
    }

    fn disclosures_mut(&mut self) -> Vec<&mut dyn DisclosureNode> {
        self.slots
            .iter_mut()
            .map(|slot| slot as &mut dyn DisclosureNode)
            .collect()
    }
}

impl<M> SectionTree for Accordion<M> {
    fn section_count(&self) -> usize {
        self.slots.len()
    }

    fn section_mut(&mut self, index: usize) -> Option<&mut dyn DisclosureNode> {
        self.slots
            .get_mut(index)
            .map(|slot| slot as &mut dyn DisclosureNode)
    }

    fn outer_width(&mut self, index: usize) -> f32 {
        self.slots
            .get_mut(index)
            .map_or(0.0, SectionSlot::natural_width)
    }
}

impl<M> std::fmt::Debug for Accordion<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accordion")
            .field("scope", &self.scope)
            .field("sections", &self.slots.len())
            .field("loaded", &self.loaded)
            .field("container_width", &self.container_width)
            .finish_non_exhaustive()
    }
}
