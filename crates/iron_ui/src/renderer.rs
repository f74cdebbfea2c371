//! Headless renderer that records a display list.
//!
//! Widgets describe what they draw through high-level primitives. The renderer
//! keeps those as [`DrawCommand`]s so a backend (or a test) can replay or inspect
//! them.

use std::fmt::{self, Write as _};

use crate::layout::Bounds;
use crate::scope::{ScopeId, SectionKey};

/// An RGBA color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Primary text color
    pub const TEXT_PRIMARY: Color = Color::rgba(0.1, 0.1, 0.12, 1.0);
    /// Muted text for notes and secondary lines
    pub const TEXT_SECONDARY: Color = Color::rgba(0.35, 0.35, 0.4, 1.0);
    /// Divider between sections
    pub const DIVIDER: Color = Color::rgba(0.0, 0.0, 0.0, 0.4);
    /// Accent used for the heading underline
    pub const ACCENT: Color = Color::rgba(0.45, 0.25, 0.75, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Bounds,
        color: Color,
    },
    StrokeRect {
        rect: Bounds,
        color: Color,
        width: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
    /// Disclosure indicator; 0° points down, -180° points up.
    Chevron {
        rect: Bounds,
        rotation_deg: f32,
        color: Color,
    },
    PushClip(Bounds),
    PopClip,
    /// Start of the commands emitted by one widget instance
    BeginGroup(ScopeId),
    EndGroup,
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::FillRect { rect, .. } => write!(f, "fill {}", Rect(rect)),
            DrawCommand::StrokeRect { rect, width, .. } => {
                write!(f, "stroke {} w={width}", Rect(rect))
            }
            DrawCommand::Text { text, x, y, .. } => write!(f, "text ({x:.1},{y:.1}) {text:?}"),
            DrawCommand::Chevron {
                rect, rotation_deg, ..
            } => write!(f, "chevron {} rot={rotation_deg:.1}", Rect(rect)),
            DrawCommand::PushClip(rect) => write!(f, "clip {}", Rect(rect)),
            DrawCommand::PopClip => write!(f, "unclip"),
            DrawCommand::BeginGroup(scope) => write!(f, "group #{scope}"),
            DrawCommand::EndGroup => write!(f, "end"),
        }
    }
}

struct Rect<'a>(&'a Bounds);

impl fmt::Display for Rect<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;
        write!(
            f,
            "[{:.1},{:.1} {:.1}x{:.1}]",
            b.x, b.y, b.width, b.height
        )
    }
}

/// Records draw commands for one frame.
#[derive(Debug, Default)]
pub struct Renderer {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Bounds>,
    /// Clickable section headers in draw order
    hit_regions: Vec<(SectionKey, Bounds)>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the display list for a new frame.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.hit_regions.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Currently active clip rectangle, if any
    pub fn current_clip(&self) -> Option<Bounds> {
        self.clip_stack.last().copied()
    }

    pub fn fill_rect(&mut self, rect: Bounds, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    pub fn stroke_rect(&mut self, rect: Bounds, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    pub fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        log::trace!("Renderer text: '{}' at ({}, {})", text, x, y);
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    pub fn chevron(&mut self, rect: Bounds, rotation_deg: f32, color: Color) {
        self.commands.push(DrawCommand::Chevron {
            rect,
            rotation_deg,
            color,
        });
    }

    /// Clip subsequent drawing to `rect` (intersected with the current clip).
    pub fn push_clip(&mut self, rect: Bounds) {
        let clip = match self.clip_stack.last() {
            Some(outer) => intersect(outer, &rect),
            None => rect,
        };
        self.clip_stack.push(clip);
        self.commands.push(DrawCommand::PushClip(clip));
    }

    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_some() {
            self.commands.push(DrawCommand::PopClip);
        } else {
            log::warn!("pop_clip called with an empty clip stack");
        }
    }

    pub fn begin_group(&mut self, scope: ScopeId) {
        self.commands.push(DrawCommand::BeginGroup(scope));
    }

    pub fn end_group(&mut self) {
        self.commands.push(DrawCommand::EndGroup);
    }

    /// Record where a section header was drawn this frame.
    pub fn hit_region(&mut self, key: SectionKey, rect: Bounds) {
        self.hit_regions.push((key, rect));
    }

    pub fn hit_regions(&self) -> &[(SectionKey, Bounds)] {
        &self.hit_regions
    }

    /// Render the display list as an indented text outline, one command per line.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let mut depth = 0usize;
        for cmd in &self.commands {
            if matches!(cmd, DrawCommand::EndGroup | DrawCommand::PopClip) {
                depth = depth.saturating_sub(1);
            }
            let _ = writeln!(out, "{:indent$}{cmd}", "", indent = depth * 2);
            if matches!(cmd, DrawCommand::BeginGroup(_) | DrawCommand::PushClip(_)) {
                depth += 1;
            }
        }
        out
    }
}

fn intersect(a: &Bounds, b: &Bounds) -> Bounds {
    let x = a.x.max(b.x);
    let y = a.y.max(b.y);
    let right = a.right().min(b.right());
    let bottom = a.bottom().min(b.bottom());
    Bounds::new(x, y, (right - x).max(0.0), (bottom - y).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_clips_intersect() {
        let mut r = Renderer::new();
        r.push_clip(Bounds::new(0.0, 0.0, 100.0, 100.0));
        r.push_clip(Bounds::new(50.0, 80.0, 100.0, 100.0));
        assert_eq!(r.current_clip(), Some(Bounds::new(50.0, 80.0, 50.0, 20.0)));
        r.pop_clip();
        r.pop_clip();
        assert_eq!(r.current_clip(), None);
    }

    #[test]
    fn test_outline_indents_groups() {
        let mut r = Renderer::new();
        let scope = ScopeId::parse("abcdef").unwrap();
        r.begin_group(scope);
        r.text("Week 1", 0.0, 0.0, 14.0, Color::TEXT_PRIMARY);
        r.end_group();

        let outline = r.outline();
        let lines: Vec<&str> = outline.lines().collect();
        assert_eq!(lines[0], "group #abcdef");
        assert_eq!(lines[1], "  text (0.0,0.0) \"Week 1\"");
        assert_eq!(lines[2], "end");
    }

    #[test]
    fn test_hit_regions_reset_on_clear() {
        let mut r = Renderer::new();
        let key = SectionKey {
            scope: ScopeId::parse("abcdef").unwrap(),
            index: 0,
        };
        r.hit_region(key, Bounds::new(0.0, 0.0, 120.0, 40.0));
        assert_eq!(r.hit_regions().len(), 1);
        r.clear();
        assert!(r.hit_regions().is_empty());
    }
}
