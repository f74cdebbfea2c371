//! iron_ui - a small headless widget toolkit built around collapsible sections
//!
//! Widgets lay themselves out, draw into a recording [`Renderer`] and turn
//! input [`Event`]s into application messages. The [`Accordion`] widget owns
//! per-section open/close animations and a width stabilizer that keeps the
//! list from resizing when sections open.

pub mod animation;
mod callback;
pub mod constants;
mod context;
pub mod disclosure;
mod element;
mod event;
mod layout;
mod renderer;
mod scope;
pub mod stabilizer;
mod text_metrics;
mod widget;
pub mod widgets;

pub use animation::{Easing, Tween};
pub use callback::Callback;
pub use context::{col, row, AccordionBuilder, Context};
pub use disclosure::{DisclosureNode, SectionTree};
pub use element::Element;
pub use event::{Event, KeyCode, MouseButton};
pub use layout::{Bounds, Padding, Size};
pub use renderer::{Color, DrawCommand, Renderer};
pub use scope::{ScopeId, SectionKey};
pub use stabilizer::{ContainerWidth, WidthPolicy};
pub use text_metrics::TextMetrics;
pub use widget::Widget;

// Re-export widgets
pub use widgets::{
    button, space, text, Accordion, Button, Column, LoadSignal, Row, Section, SectionController,
    SectionPhase, Space, Text,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{col, row, Context};
    pub use crate::element::Element;
    pub use crate::event::{Event, KeyCode, MouseButton};
    pub use crate::layout::{Bounds, Padding, Size};
    pub use crate::renderer::{Color, Renderer};
    pub use crate::stabilizer::WidthPolicy;
    pub use crate::widget::Widget;
    pub use crate::widgets::{button, space, text, Accordion, LoadSignal, Section, SectionPhase};
}
