//! Users and who is looking at a program.

use serde::{Deserialize, Serialize};

/// Account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Coach,
    Athlete,
}

/// An athlete's profile. Only the competition maxes feed into the program view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub weight_class: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub dob: String,
    pub squat_max: f64,
    pub bench_max: f64,
    pub deadlift_max: f64,
    #[serde(default)]
    pub height: f64,
}

/// Who a program is rendered for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewer<'a> {
    Coach,
    /// An athlete, with their profile when it is known
    Athlete(Option<&'a Athlete>),
}

impl Viewer<'_> {
    pub fn user_type(&self) -> UserType {
        match self {
            Viewer::Coach => UserType::Coach,
            Viewer::Athlete(_) => UserType::Athlete,
        }
    }
}
