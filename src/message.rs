//! Application message types for Iron Instruction.
//!
//! Widgets report user actions as messages; [`ProgramViewer::update`](crate::ProgramViewer::update)
//! applies them. Indices are 0-based positions in the program.

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Exercise header clicked while editing; opens the exercise editor
    EditExercise {
        week: usize,
        day: usize,
        exercise: usize,
    },
    /// Delete control beside an exercise header
    DeleteExercise {
        week: usize,
        day: usize,
        exercise: usize,
    },
    /// Delete control beside a day header
    DeleteDay { week: usize, day: usize },
    /// Delete control beside a week header
    DeleteWeek { week: usize },
}
