//! One collapsible section: header row, optional header extras and body.

use std::time::Duration;

use crate::callback::Callback;
use crate::constants::{
    ACCORDION_CHEVRON_SIZE, ACCORDION_EXTRAS_MARGIN, ACCORDION_HEADER_HEIGHT,
    ACCORDION_HEADER_PADDING, ACCORDION_HEADING_MARGIN, ACCORDION_UNDERLINE_THICKNESS,
    HEADING_FONT_SIZE,
};
use crate::disclosure::DisclosureNode;
use crate::element::Element;
use crate::event::{Event, KeyCode, MouseButton};
use crate::layout::{Bounds, Size};
use crate::renderer::{Color, Renderer};
use crate::text_metrics::TextMetrics;
use crate::widgets::container_helpers::translate_bounds;

use super::controller::{SectionController, SectionMetrics};

/// A section record handed to an [`Accordion`](super::Accordion).
pub struct Section<M> {
    heading: String,
    body: Element<M>,
    header_extras: Option<Element<M>>,
    conditional_click: Callback<M>,
    open: bool,
}

impl<M> Section<M> {
    pub fn new(heading: impl Into<String>, body: Element<M>) -> Self {
        Self {
            heading: heading.into(),
            body,
            header_extras: None,
            conditional_click: Callback::none(),
            open: false,
        }
    }

    /// Content shown beside the header, outside the collapsible part.
    pub fn header_extras(mut self, extras: Element<M>) -> Self {
        self.header_extras = Some(extras);
        self
    }

    /// Message emitted whenever the header is clicked. The section still toggles.
    pub fn conditional_click<F>(mut self, f: F) -> Self
    where
        F: Fn() -> M + 'static,
    {
        self.conditional_click = Callback::new(f);
        self
    }

    /// Initial open state, used when no earlier state exists for this position.
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn is_initially_open(&self) -> bool {
        self.open
    }
}

impl<M> std::fmt::Debug for Section<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Section")
            .field("heading", &self.heading)
            .field("has_extras", &self.header_extras.is_some())
            .field("conditional_click", &self.conditional_click)
            .field("open", &self.open)
            .finish()
    }
}

/// A section together with its controller and layout cache.
pub(crate) struct SectionSlot<M> {
    section: Section<M>,
    pub(crate) controller: SectionController,
    hover_header: bool,
    /// Layout cache, relative to the slot origin
    header_rect: Bounds,
    extras_rect: Bounds,
    body_rect: Bounds,
}

impl<M> SectionSlot<M> {
    pub(crate) fn new(section: Section<M>, open: bool, duration: Duration) -> Self {
        Self {
            section,
            controller: SectionController::new(open, duration),
            hover_header: false,
            header_rect: Bounds::ZERO,
            extras_rect: Bounds::ZERO,
            body_rect: Bounds::ZERO,
        }
    }

    pub(crate) fn heading(&self) -> &str {
        &self.section.heading
    }

    /// Header rect relative to the slot origin, from the last layout
    pub(crate) fn header_rect(&self) -> Bounds {
        self.header_rect
    }

    pub(crate) fn natural_width(&mut self) -> f32 {
        self.layout(Size::UNBOUNDED).width
    }

    pub(crate) fn layout(&mut self, available: Size) -> Size {
        let extras_size = match &mut self.section.header_extras {
            Some(extras) => extras.layout(Size::new(available.width, ACCORDION_HEADER_HEIGHT)),
            None => Size::ZERO,
        };
        let disclosure_x = if self.section.header_extras.is_some() {
            extras_size.width + ACCORDION_EXTRAS_MARGIN
        } else {
            0.0
        };

        let heading_width = TextMetrics::new(HEADING_FONT_SIZE).line_width(&self.section.heading);
        let header_natural = ACCORDION_HEADER_PADDING.horizontal()
            + heading_width
            + ACCORDION_HEADING_MARGIN
            + ACCORDION_CHEVRON_SIZE;

        // The body is always laid out so its height is known before an expand
        let (disclosure_width, body_size) = if available.is_width_bounded() {
            let width = (available.width - disclosure_x).max(0.0);
            let body = self.section.body.layout(Size::new(width, f32::INFINITY));
            (width, body)
        } else {
            let body = self.section.body.layout(Size::UNBOUNDED);
            let width = if self.controller.is_open() {
                header_natural.max(body.width)
            } else {
                header_natural
            };
            (width, body)
        };

        self.extras_rect = Bounds::new(
            0.0,
            ((ACCORDION_HEADER_HEIGHT - extras_size.height) / 2.0).max(0.0),
            extras_size.width,
            extras_size.height,
        );
        self.header_rect = Bounds::new(
            disclosure_x,
            0.0,
            disclosure_width,
            ACCORDION_HEADER_HEIGHT,
        );
        self.body_rect = Bounds::new(
            disclosure_x,
            ACCORDION_HEADER_HEIGHT,
            disclosure_width,
            body_size.height,
        );

        self.controller
            .set_metrics(SectionMetrics::new(ACCORDION_HEADER_HEIGHT, body_size.height));

        let height = self
            .controller
            .current_height()
            .max(self.extras_rect.bottom());
        Size::new(disclosure_x + disclosure_width, height)
    }

    pub(crate) fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        if let Some(extras) = &self.section.header_extras {
            extras.draw(renderer, translate_bounds(self.extras_rect, bounds));
        }

        let header = translate_bounds(self.header_rect, bounds);
        let clip = self.controller.clips_overflow();
        if clip {
            renderer.push_clip(Bounds::new(
                header.x,
                header.y,
                header.width,
                self.controller.current_height(),
            ));
        }

        let metrics = TextMetrics::new(HEADING_FONT_SIZE);
        let text_x = header.x + ACCORDION_HEADER_PADDING.left;
        let text_y = header.y + (ACCORDION_HEADER_HEIGHT - metrics.line_height()) / 2.0;
        let heading_color = if self.hover_header {
            Color::ACCENT
        } else {
            Color::TEXT_PRIMARY
        };
        renderer.text(
            &self.section.heading,
            text_x,
            text_y,
            HEADING_FONT_SIZE,
            heading_color,
        );

        let reveal = self.controller.underline_progress();
        if reveal > 0.0 {
            renderer.fill_rect(
                Bounds::new(
                    text_x,
                    text_y + metrics.line_height(),
                    metrics.line_width(&self.section.heading) * reveal,
                    ACCORDION_UNDERLINE_THICKNESS,
                ),
                Color::ACCENT,
            );
        }

        let chevron = Bounds::new(
            header.right() - ACCORDION_HEADER_PADDING.right - ACCORDION_CHEVRON_SIZE,
            header.y + (ACCORDION_HEADER_HEIGHT - ACCORDION_CHEVRON_SIZE) / 2.0,
            ACCORDION_CHEVRON_SIZE,
            ACCORDION_CHEVRON_SIZE,
        );
        renderer.chevron(chevron, self.controller.chevron_rotation(), Color::TEXT_PRIMARY);

        if self.controller.is_open() {
            self.section
                .body
                .draw(renderer, translate_bounds(self.body_rect, bounds));
        }

        if clip {
            renderer.pop_clip();
        }
    }

    /// Handle an event. Returns the produced message (if any) and whether the
    /// section was toggled.
    pub(crate) fn on_event(&mut self, event: &Event, bounds: Bounds) -> (Option<M>, bool) {
        let header = translate_bounds(self.header_rect, bounds);
        let extras = translate_bounds(self.extras_rect, bounds);
        let body = translate_bounds(self.body_rect, bounds);
        let visible_bottom = bounds.y + self.controller.current_height();

        match event {
            Event::MousePress {
                button: MouseButton::Left,
                position,
            } if header.contains(position.0, position.1) => (self.toggle(), true),
            Event::MousePress { position, .. } | Event::MouseRelease { position, .. } => {
                let (x, y) = *position;
                if let Some(el) = &mut self.section.header_extras {
                    if extras.contains(x, y) {
                        return (el.on_event(event, extras), false);
                    }
                }
                if self.controller.is_open() && y < visible_bottom && body.contains(x, y) {
                    return (self.section.body.on_event(event, body), false);
                }
                (None, false)
            }
            Event::MouseMove { position } => {
                let hover = header.contains(position.0, position.1);
                if hover != self.hover_header {
                    log::trace!("section '{}' hover: {}", self.section.heading, hover);
                }
                self.hover_header = hover;
                (self.forward(event, extras, body), false)
            }
            Event::KeyPress { key } => {
                // Content gets the key first so it can keep Enter for itself
                if let Some(message) = self.forward(event, extras, body) {
                    return (Some(message), false);
                }
                if self.hover_header && matches!(key, KeyCode::Enter | KeyCode::Space) {
                    (self.toggle(), true)
                } else {
                    (None, false)
                }
            }
            Event::CursorLeft => {
                self.hover_header = false;
                (self.forward(event, extras, body), false)
            }
        }
    }

    pub(crate) fn tick(&mut self, dt: Duration) -> bool {
        let own = self.controller.tick(dt);
        let extras = self
            .section
            .header_extras
            .as_mut()
            .is_some_and(|el| el.tick(dt));
        let body = self.section.body.tick(dt);
        own || extras || body
    }

    fn toggle(&mut self) -> Option<M> {
        let message = self.section.conditional_click.emit();
        self.controller.handle_toggle();
        log::debug!(
            "section '{}' toggled, now {:?}",
            self.section.heading,
            self.controller.phase()
        );
        message
    }

    fn forward(&mut self, event: &Event, extras: Bounds, body: Bounds) -> Option<M> {
        let from_extras = match &mut self.section.header_extras {
            Some(el) => el.on_event(event, extras),
            None => None,
        };
        let from_body = if self.controller.is_open() {
            self.section.body.on_event(event, body)
        } else {
            None
        };
        from_extras.or(from_body)
    }
}

impl<M> DisclosureNode for SectionSlot<M> {
    fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    fn set_open(&mut self, open: bool) {
        self.controller.set_open(open);
    }

    fn nested_mut(&mut self) -> Vec<&mut dyn DisclosureNode> {
        self.section.body.disclosures_mut()
    }
}
