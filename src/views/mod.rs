//! View builders for the program viewer.
//!
//! - program: the program header and the nested week → day → exercise sections

mod program;

pub use program::{day_sections, exercise_sections, view_header, week_sections, ViewOptions};
