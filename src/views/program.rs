//! Program view: header plus nested week, day and exercise sections.

use std::time::Duration;

use iron_ui::prelude::*;

use crate::constants::{CAPTION_FONT_SIZE, TITLE_FONT_SIZE};
use crate::message::Message;
use crate::model::{Day, Exercise, Program, Progress, Viewer, Week};

/// Settings shared by every accordion in the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    pub animation_time: Duration,
    pub width_policy: WidthPolicy,
    /// Coach editing mode: delete controls and the exercise editor
    pub editing: bool,
}

/// Program name, description and overall progress.
pub fn view_header(program: &Program) -> Element<Message> {
    col(|c| {
        c.text_sized(program.name.clone(), TITLE_FONT_SIZE);
        if !program.description.is_empty() {
            c.add(Element::new(
                text(program.description.clone()).color(Color::TEXT_SECONDARY),
            ));
        }
        c.add(Element::new(
            text(format!("Progress: {} sets logged", program.progress()))
                .color(Color::TEXT_SECONDARY),
        ));
    })
}

/// One section per week, headed "Week N".
pub fn week_sections(
    program: &Program,
    viewer: Viewer<'_>,
    options: &ViewOptions,
) -> Vec<Section<Message>> {
    program
        .weeks
        .iter()
        .enumerate()
        .map(|(w, week)| {
            let extras = header_extras(week.progress(), options, Message::DeleteWeek { week: w });
            Section::new(format!("Week {}", w + 1), week_body(w, week, viewer, options))
                .header_extras(extras)
        })
        .collect()
}

/// One section per day of a week, headed "Day N".
pub fn day_sections(
    week_index: usize,
    days: &[Day],
    viewer: Viewer<'_>,
    options: &ViewOptions,
) -> Vec<Section<Message>> {
    days.iter()
        .enumerate()
        .map(|(d, day)| {
            let extras = header_extras(
                day.progress(),
                options,
                Message::DeleteDay {
                    week: week_index,
                    day: d,
                },
            );
            Section::new(
                format!("Day {}", d + 1),
                day_body(week_index, d, day, viewer, options),
            )
            .header_extras(extras)
        })
        .collect()
}

/// One section per exercise, headed by the exercise name.
///
/// In editing mode each header gets a delete control, and clicking the header
/// also asks for the exercise editor.
pub fn exercise_sections(
    week_index: usize,
    day_index: usize,
    exercises: &[Exercise],
    viewer: Viewer<'_>,
    options: &ViewOptions,
) -> Vec<Section<Message>> {
    exercises
        .iter()
        .enumerate()
        .map(|(e, exercise)| {
            let section = Section::new(exercise.name.clone(), exercise_body(exercise, viewer));
            if !options.editing {
                return section;
            }
            let delete = Message::DeleteExercise {
                week: week_index,
                day: day_index,
                exercise: e,
            };
            section
                .header_extras(Element::new(button("−").on_click(delete)))
                .conditional_click(move || Message::EditExercise {
                    week: week_index,
                    day: day_index,
                    exercise: e,
                })
        })
        .collect()
}

fn week_body(w: usize, week: &Week, viewer: Viewer<'_>, options: &ViewOptions) -> Element<Message> {
    let days = day_sections(w, &week.days, viewer, options);
    col(|c| {
        notes(c, &week.coach_notes, &week.athlete_notes);
        c.text_sized("Days", CAPTION_FONT_SIZE);
        if days.is_empty() {
            c.text("No days");
        } else {
            nested(c, days, options);
        }
    })
}

fn day_body(
    w: usize,
    d: usize,
    day: &Day,
    viewer: Viewer<'_>,
    options: &ViewOptions,
) -> Element<Message> {
    let exercises = exercise_sections(w, d, &day.exercises, viewer, options);
    col(|c| {
        notes(c, &day.coach_notes, &day.athlete_notes);
        c.text_sized("Exercises", CAPTION_FONT_SIZE);
        if exercises.is_empty() {
            c.text("No exercises");
        } else {
            nested(c, exercises, options);
        }
    })
}

fn exercise_body(exercise: &Exercise, viewer: Viewer<'_>) -> Element<Message> {
    col(|c| {
        for set in &exercise.sets {
            c.text(set.lines(viewer).join("\n"));
        }
        if exercise.sets.is_empty() {
            c.text("No sets");
        }
    })
}

fn notes(c: &mut Context<Message>, coach: &str, athlete: &str) {
    for (label, value) in [("Coach Notes", coach), ("Athlete Notes", athlete)] {
        let value = if value.is_empty() { "None" } else { value };
        c.add(Element::new(
            text(format!("{label}: {value}")).color(Color::TEXT_SECONDARY),
        ));
    }
}

fn nested(c: &mut Context<Message>, sections: Vec<Section<Message>>, options: &ViewOptions) {
    c.accordion(sections, options.animation_time)
        .loaded(true)
        .width_policy(options.width_policy)
        .build();
}

/// Progress badge, preceded by a delete control in editing mode.
fn header_extras(progress: Progress, options: &ViewOptions, delete: Message) -> Element<Message> {
    let badge = format!("{progress}");
    row(|r| {
        if options.editing {
            r.add(Element::new(button("−").on_click(delete)));
        }
        r.text(badge);
    })
}
