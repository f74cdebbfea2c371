// Widget implementations

pub mod accordion;
mod button;
pub(crate) mod container_helpers;
mod column;
mod row;
mod space;
mod text;

pub use accordion::{
    Accordion, LoadSignal, Section, SectionController, SectionMetrics, SectionPhase,
};
pub use button::{button, Button};
pub use column::Column;
pub use row::Row;
pub use space::{space, Space};
pub use text::{text, Text};

pub use crate::Element;
