//! Data models for training programs, as sent by the backend.

mod program;
mod user;

pub use program::{Day, Exercise, PercentageReference, Program, Progress, Set, Week};
pub use user::{Athlete, UserType, Viewer};
