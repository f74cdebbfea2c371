//! Iron Instruction - training program viewer
//!
//! Renders a program's weeks, days and exercises as nested accordions built on
//! `iron_ui`, for coaches and athletes.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod message;
pub mod model;
pub mod views;

pub use app::ProgramViewer;
pub use error::{AppError, Result};
pub use message::Message;
