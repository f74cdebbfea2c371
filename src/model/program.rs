//! Training program hierarchy: program → weeks → days → exercises → sets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{UNSET, WEIGHT_INCREMENT_KG};

use super::user::{Athlete, Viewer};

/// A multi-week training program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub weeks: Vec<Week>,
    #[serde(default)]
    pub athlete_email: String,
    #[serde(default)]
    pub coach_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub id: String,
    #[serde(default)]
    pub coach_notes: String,
    #[serde(default)]
    pub athlete_notes: String,
    #[serde(default)]
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub id: String,
    #[serde(default)]
    pub coach_notes: String,
    #[serde(default)]
    pub athlete_notes: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub video_ref: String,
    #[serde(default)]
    pub sets: Vec<Set>,
}

/// Which competition lift a percentage set is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PercentageReference {
    #[default]
    Squat,
    Bench,
    Deadlift,
}

impl PercentageReference {
    pub fn name(&self) -> &'static str {
        match self {
            PercentageReference::Squat => "Squat",
            PercentageReference::Bench => "Bench",
            PercentageReference::Deadlift => "Deadlift",
        }
    }

    /// The athlete's max for this lift.
    pub fn max_of(&self, athlete: &Athlete) -> f64 {
        match self {
            PercentageReference::Squat => athlete.squat_max,
            PercentageReference::Bench => athlete.bench_max,
            PercentageReference::Deadlift => athlete.deadlift_max,
        }
    }
}

/// One prescribed set.
///
/// A set is either percentage based (`rpe == -1`, load taken from
/// `percentage` of the referenced max) or RPE based (fixed `weight`).
/// `completed_reps == -1` means the athlete has not logged it yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    pub id: String,
    pub reps: u32,
    #[serde(default = "unset")]
    pub completed_reps: i32,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub percentage_reference: PercentageReference,
    #[serde(default)]
    pub weight: f64,
    #[serde(default = "unset_f64")]
    pub rpe: f64,
    #[serde(default)]
    pub video_ref: String,
    #[serde(default)]
    pub video_requested: bool,
}

fn unset() -> i32 {
    UNSET
}

fn unset_f64() -> f64 {
    f64::from(UNSET)
}

impl Set {
    pub fn is_percentage_based(&self) -> bool {
        self.rpe == f64::from(UNSET)
    }

    pub fn is_logged(&self) -> bool {
        self.completed_reps != UNSET
    }

    /// Load for a percentage set, rounded up to the next plate increment.
    /// RPE sets carry their own weight and return `None`.
    pub fn target_weight(&self, athlete: &Athlete) -> Option<f64> {
        if !self.is_percentage_based() {
            return None;
        }
        let raw = self.percentage / 100.0 * self.percentage_reference.max_of(athlete);
        Some(WEIGHT_INCREMENT_KG * (raw / WEIGHT_INCREMENT_KG).ceil())
    }

    /// Main description line, e.g. `5 reps at 75% of squat max (150 kg)`.
    pub fn describe(&self, viewer: Viewer<'_>) -> String {
        if !self.is_percentage_based() {
            return format!(
                "{} reps at {}kg with RPE {}",
                self.reps, self.weight, self.rpe
            );
        }
        let mut line = format!(
            "{} reps at {}% of {} max",
            self.reps,
            self.percentage,
            self.percentage_reference.name().to_lowercase()
        );
        if let Viewer::Athlete(Some(athlete)) = viewer {
            if let Some(kg) = self.target_weight(athlete) {
                line.push_str(&format!(" ({kg} kg)"));
            }
        }
        line
    }

    pub fn completion_line(&self) -> Option<String> {
        self.is_logged()
            .then(|| format!("Completed {} / {} reps", self.completed_reps, self.reps))
    }

    /// Description followed by the status lines shown under it.
    pub fn lines(&self, viewer: Viewer<'_>) -> Vec<String> {
        let mut lines = vec![self.describe(viewer)];
        if self.video_requested {
            lines.push("- Video Requested".to_string());
        }
        if let Some(done) = self.completion_line() {
            lines.push(format!("- {done}"));
        }
        if !self.video_ref.is_empty() {
            lines.push("- View Video".to_string());
        }
        lines
    }
}

/// Logged sets out of all sets in a part of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub logged: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.logged == self.total
    }
}

impl std::ops::Add for Progress {
    type Output = Progress;

    fn add(self, other: Progress) -> Progress {
        Progress {
            logged: self.logged + other.logged,
            total: self.total + other.total,
        }
    }
}

impl std::iter::Sum for Progress {
    fn sum<I: Iterator<Item = Progress>>(iter: I) -> Progress {
        iter.fold(Progress::default(), |acc, p| acc + p)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.logged, self.total)
    }
}

impl Exercise {
    pub fn logged_sets(&self) -> usize {
        self.sets.iter().filter(|s| s.is_logged()).count()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            logged: self.logged_sets(),
            total: self.sets.len(),
        }
    }
}

impl Day {
    pub fn progress(&self) -> Progress {
        self.exercises.iter().map(Exercise::progress).sum()
    }
}

impl Week {
    pub fn progress(&self) -> Progress {
        self.days.iter().map(Day::progress).sum()
    }
}

impl Program {
    pub fn progress(&self) -> Progress {
        self.weeks.iter().map(Week::progress).sum()
    }

    /// Remove an exercise by position. Returns it if all indices resolved.
    pub fn remove_exercise(&mut self, week: usize, day: usize, exercise: usize) -> Option<Exercise> {
        let exercises = &mut self.weeks.get_mut(week)?.days.get_mut(day)?.exercises;
        (exercise < exercises.len()).then(|| exercises.remove(exercise))
    }

    pub fn remove_day(&mut self, week: usize, day: usize) -> Option<Day> {
        let days = &mut self.weeks.get_mut(week)?.days;
        (day < days.len()).then(|| days.remove(day))
    }

    pub fn remove_week(&mut self, week: usize) -> Option<Week> {
        (week < self.weeks.len()).then(|| self.weeks.remove(week))
    }

    pub fn exercise(&self, week: usize, day: usize, exercise: usize) -> Option<&Exercise> {
        self.weeks.get(week)?.days.get(day)?.exercises.get(exercise)
    }
}
