//! Text button widget

use crate::constants::DEFAULT_FONT_SIZE;
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Padding, Size};
use crate::renderer::{Color, Renderer};
use crate::text_metrics::TextMetrics;
use crate::widget::Widget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ButtonState {
    #[default]
    Normal,
    Hovered,
    Pressed,
}

const PADDING: Padding = Padding::all(4.0);

/// A clickable text label
pub struct Button<M> {
    label: String,
    on_click: Option<M>,
    state: ButtonState,
}

impl<M> Button<M> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
            state: ButtonState::Normal,
        }
    }

    /// Message emitted when the button is pressed
    pub fn on_click(mut self, message: M) -> Self {
        self.on_click = Some(message);
        self
    }
}

impl<M: Clone> Widget<M> for Button<M> {
    fn layout(&mut self, _available: Size) -> Size {
        let metrics = TextMetrics::new(DEFAULT_FONT_SIZE);
        Size::new(
            metrics.line_width(&self.label) + PADDING.horizontal(),
            metrics.line_height() + PADDING.vertical(),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let color = match self.state {
            ButtonState::Normal => Color::TEXT_PRIMARY,
            ButtonState::Hovered | ButtonState::Pressed => Color::ACCENT,
        };
        renderer.text(
            &self.label,
            bounds.x + PADDING.left,
            bounds.y + PADDING.top,
            DEFAULT_FONT_SIZE,
            color,
        );
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        match event {
            Event::MouseMove { position } => {
                let inside = bounds.contains(position.0, position.1);
                if inside && self.state != ButtonState::Pressed {
                    self.state = ButtonState::Hovered;
                } else if !inside && self.state == ButtonState::Hovered {
                    self.state = ButtonState::Normal;
                }
                None
            }
            Event::MousePress {
                button: MouseButton::Left,
                position,
            } if bounds.contains(position.0, position.1) => {
                // Fire on press so a rebuild triggered by another widget can't swallow the click
                self.state = ButtonState::Pressed;
                log::debug!("button '{}' pressed", self.label);
                self.on_click.clone()
            }
            Event::MouseRelease {
                button: MouseButton::Left,
                position,
            } => {
                self.state = if bounds.contains(position.0, position.1) {
                    ButtonState::Hovered
                } else {
                    ButtonState::Normal
                };
                None
            }
            Event::CursorLeft => {
                self.state = ButtonState::Normal;
                None
            }
            _ => None,
        }
    }
}

/// Create a button
pub fn button<M>(label: impl Into<String>) -> Button<M> {
    Button::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_inside_emits_message() {
        let mut b = button("−").on_click(7u32);
        let size = Widget::<u32>::layout(&mut b, Size::UNBOUNDED);
        let bounds = Bounds::from_size(10.0, 10.0, size);
        assert_eq!(b.on_event(&Event::click(12.0, 12.0), bounds), Some(7));
        assert_eq!(b.on_event(&Event::click(0.0, 0.0), bounds), None);
    }

    #[test]
    fn test_button_without_handler_is_inert() {
        let mut b: Button<u32> = button("Edit");
        let bounds = Bounds::new(0.0, 0.0, 50.0, 20.0);
        assert_eq!(b.on_event(&Event::click(5.0, 5.0), bounds), None);
    }
}
