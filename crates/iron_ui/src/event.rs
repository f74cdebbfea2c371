//! Input events delivered to widgets

/// Events that widgets can respond to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePress {
        button: MouseButton,
        position: (f32, f32),
    },
    /// Mouse button released.
    MouseRelease {
        button: MouseButton,
        position: (f32, f32),
    },
    /// Mouse moved.
    MouseMove { position: (f32, f32) },
    /// Keyboard key pressed.
    KeyPress { key: KeyCode },
    /// Cursor left the window.
    CursorLeft,
}

impl Event {
    /// Left-button press at a position
    pub fn click(x: f32, y: f32) -> Self {
        Event::MousePress {
            button: MouseButton::Left,
            position: (x, y),
        }
    }

    /// Pointer position carried by the event, if any
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Event::MousePress { position, .. }
            | Event::MouseRelease { position, .. }
            | Event::MouseMove { position } => Some(*position),
            Event::KeyPress { .. } | Event::CursorLeft => None,
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keyboard keys (only those widgets currently react to).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Space,
}
