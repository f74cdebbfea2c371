//! Program viewer state and frame driver.
//!
//! [`ProgramViewer`] owns the program, the widget tree built from it and a
//! recording renderer. Input goes in as events, time as frame deltas, and the
//! display list comes out of [`ProgramViewer::render`].

use std::time::Duration;

use iron_ui::prelude::*;
use iron_ui::{ContainerWidth, DisclosureNode, ScopeId, SectionKey};
use web_time::Instant;

use crate::config::UserPreferences;
use crate::constants::{FRAME_INTERVAL_MS, HEADER_SPACING, MAX_SETTLE_FRAMES};
use crate::error::{AppError, Result};
use crate::message::Message;
use crate::model::{Athlete, Program, UserType, Viewer};
use crate::views::{self, ViewOptions};

/// Open attribute of one disclosure, addressed by its position in the tree.
type OpenState = (Vec<usize>, bool);

pub struct ProgramViewer {
    program: Program,
    athlete: Option<Athlete>,
    user_type: UserType,
    options: ViewOptions,
    viewport_width: f32,

    header: Element<Message>,
    weeks: Accordion<Message>,
    header_bounds: Bounds,
    weeks_bounds: Bounds,
    renderer: Renderer,

    /// Exercise whose editor was requested last
    editing_exercise: Option<(usize, usize, usize)>,
}

impl ProgramViewer {
    pub fn new(
        program: Program,
        athlete: Option<Athlete>,
        user_type: UserType,
        editing: bool,
        preferences: &UserPreferences,
    ) -> Self {
        if editing && user_type != UserType::Coach {
            log::warn!("Editing mode is only available to coaches; ignoring");
        }
        let options = ViewOptions {
            animation_time: preferences.animation_time(),
            width_policy: preferences.width_policy,
            editing: editing && user_type == UserType::Coach,
        };

        let viewer = viewer_for(user_type, athlete.as_ref());
        let header = views::view_header(&program);
        let weeks = Accordion::new(
            views::week_sections(&program, viewer, &options),
            options.animation_time,
        )
        .loaded(true)
        .width_policy(options.width_policy);

        Self {
            program,
            athlete,
            user_type,
            options,
            viewport_width: preferences.viewport_width,
            header,
            weeks,
            header_bounds: Bounds::ZERO,
            weeks_bounds: Bounds::ZERO,
            renderer: Renderer::new(),
            editing_exercise: None,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn viewer(&self) -> Viewer<'_> {
        viewer_for(self.user_type, self.athlete.as_ref())
    }

    /// The top-level week list
    pub fn weeks(&self) -> &Accordion<Message> {
        &self.weeks
    }

    /// Width fixed for the week list by its stabilizer
    pub fn container_width(&self) -> Option<ContainerWidth> {
        self.weeks.container_width()
    }

    pub fn editing_exercise(&self) -> Option<(usize, usize, usize)> {
        self.editing_exercise
    }

    pub fn layout(&mut self) -> Size {
        let available = Size::new(self.viewport_width, f32::INFINITY);
        let header = self.header.layout(available);
        self.header_bounds = Bounds::from_size(0.0, 0.0, header);

        let weeks = self.weeks.layout(available);
        self.weeks_bounds = Bounds::from_size(0.0, header.height + HEADER_SPACING, weeks);

        Size::new(header.width.max(weeks.width), self.weeks_bounds.bottom())
    }

    /// Lay out and draw the current frame.
    pub fn render(&mut self) -> &Renderer {
        self.layout();
        self.renderer.clear();
        self.header.draw(&mut self.renderer, self.header_bounds);
        self.weeks.draw(&mut self.renderer, self.weeks_bounds);
        &self.renderer
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Message> {
        self.layout();
        let from_header = self.header.on_event(event, self.header_bounds);
        let from_weeks = self.weeks.on_event(event, self.weeks_bounds);
        from_header.or(from_weeks)
    }

    /// Left click at a point; any resulting message is applied.
    pub fn click(&mut self, x: f32, y: f32) -> Option<Message> {
        let message = self.handle_event(&Event::click(x, y));
        if let Some(message) = &message {
            self.update(message.clone());
        }
        message
    }

    pub fn update(&mut self, message: Message) {
        log::debug!("update: {:?}", message);
        match message {
            Message::EditExercise {
                week,
                day,
                exercise,
            } => {
                if let Some(ex) = self.program.exercise(week, day, exercise) {
                    log::info!("Editing exercise '{}'", ex.name);
                    self.editing_exercise = Some((week, day, exercise));
                }
            }
            Message::DeleteExercise {
                week,
                day,
                exercise,
            } => {
                if let Some(ex) = self.program.remove_exercise(week, day, exercise) {
                    log::info!("Deleted exercise '{}'", ex.name);
                    self.rebuild();
                }
            }
            Message::DeleteDay { week, day } => {
                if self.program.remove_day(week, day).is_some() {
                    log::info!("Deleted day {} of week {}", day + 1, week + 1);
                    self.rebuild();
                }
            }
            Message::DeleteWeek { week } => {
                if self.program.remove_week(week).is_some() {
                    log::info!("Deleted week {}", week + 1);
                    self.rebuild();
                }
            }
        }
    }

    /// Advance animations by one frame delta. Returns true while anything moves.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let header = self.header.tick(dt);
        let weeks = self.weeks.tick(dt);
        header || weeks
    }

    /// Advance fixed-length frames until nothing animates. Returns the frame count.
    pub fn settle(&mut self) -> usize {
        let started = Instant::now();
        let frame = Duration::from_millis(FRAME_INTERVAL_MS);
        let mut frames = 0;
        while frames < MAX_SETTLE_FRAMES {
            self.layout();
            frames += 1;
            if !self.tick(frame) {
                break;
            }
        }
        if frames == MAX_SETTLE_FRAMES {
            log::warn!("Animations still running after {} frames", frames);
        }
        log::debug!("settled after {} frames in {:?}", frames, started.elapsed());
        frames
    }

    /// Click through a `/`-separated path of 1-based section numbers, e.g.
    /// `1/2` opens week 1 and then day 2 of it. Animations settle between clicks.
    /// Sections that are already open are not clicked again.
    pub fn open_path(&mut self, path: &str) -> Result<()> {
        let indices = parse_open_path(path)?;
        let root = self.weeks.scope();
        let mut trail: Vec<SectionKey> = Vec::new();
        self.settle();

        for (depth, &index) in indices.iter().enumerate() {
            self.render();
            let (key, rect) = find_header(self.renderer.hit_regions(), root, &trail, index)
                .ok_or_else(|| AppError::SectionNotFound {
                    path: path.to_string(),
                    depth: depth + 1,
                    index: index + 1,
                })?;
            if is_open_at_path(self.weeks.disclosures_mut(), &indices[..=depth]) {
                log::debug!("Section {} already open", key);
            } else {
                let (x, y) = rect.center();
                self.click(x, y);
                let frames = self.settle();
                log::info!("Clicked section {} ({} frames)", key, frames);
            }
            trail.push(key);
        }
        Ok(())
    }

    /// Rebuild sections from the program, keeping every open attribute by position.
    fn rebuild(&mut self) {
        let states = collect_open_states(&mut self.weeks);
        let viewer = viewer_for(self.user_type, self.athlete.as_ref());
        self.header = views::view_header(&self.program);
        self.weeks
            .set_sections(views::week_sections(&self.program, viewer, &self.options));
        for (path, open) in &states {
            set_open_at_path(self.weeks.disclosures_mut(), path, *open);
        }
        log::debug!("rebuilt view, restored {} open states", states.len());
    }
}

fn viewer_for(user_type: UserType, athlete: Option<&Athlete>) -> Viewer<'_> {
    match user_type {
        UserType::Coach => Viewer::Coach,
        UserType::Athlete => Viewer::Athlete(athlete),
    }
}

/// Parse `1/2/3` into 0-based indices.
pub fn parse_open_path(path: &str) -> Result<Vec<usize>> {
    let invalid = |reason: &str| AppError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };
    if path.trim().is_empty() {
        return Err(invalid("empty path"));
    }
    path.split('/')
        .map(|segment| match segment.trim().parse::<usize>() {
            Ok(0) => Err(invalid("section numbers start at 1")),
            Ok(n) => Ok(n - 1),
            Err(_) => Err(invalid(&format!("'{segment}' is not a number"))),
        })
        .collect()
}

/// Find the header of section `index` one level below the last key in `trail`.
///
/// Hit regions are recorded in draw order, so a section's nested headers
/// follow it directly. The nested list is the first scope seen after the
/// parent, up to the next header belonging to the parent's list or any of its
/// ancestors.
fn find_header(
    regions: &[(SectionKey, Bounds)],
    root: ScopeId,
    trail: &[SectionKey],
    index: usize,
) -> Option<(SectionKey, Bounds)> {
    let Some(parent) = trail.last() else {
        return regions
            .iter()
            .find(|(key, _)| key.scope == root && key.index == index)
            .copied();
    };

    let start = regions.iter().position(|(key, _)| key == parent)? + 1;
    let below = &regions[start..];
    let end = below
        .iter()
        .position(|(key, _)| trail.iter().any(|t| t.scope == key.scope))
        .unwrap_or(below.len());
    let subtree = &below[..end];

    let child_scope = subtree.first()?.0.scope;
    subtree
        .iter()
        .find(|(key, _)| key.scope == child_scope && key.index == index)
        .copied()
}

fn collect_open_states<M: 'static>(accordion: &mut Accordion<M>) -> Vec<OpenState> {
    let mut states = Vec::new();
    collect_into(accordion.disclosures_mut(), &mut Vec::new(), &mut states);
    states
}

fn collect_into(
    nodes: Vec<&mut dyn DisclosureNode>,
    path: &mut Vec<usize>,
    out: &mut Vec<OpenState>,
) {
    for (i, node) in nodes.into_iter().enumerate() {
        path.push(i);
        out.push((path.clone(), node.is_open()));
        collect_into(node.nested_mut(), path, out);
        path.pop();
    }
}

fn is_open_at_path(nodes: Vec<&mut dyn DisclosureNode>, path: &[usize]) -> bool {
    let Some((&first, rest)) = path.split_first() else {
        return false;
    };
    match nodes.into_iter().nth(first) {
        Some(node) if rest.is_empty() => node.is_open(),
        Some(node) => is_open_at_path(node.nested_mut(), rest),
        None => false,
    }
}

fn set_open_at_path(nodes: Vec<&mut dyn DisclosureNode>, path: &[usize], open: bool) -> bool {
    let Some((&first, rest)) = path.split_first() else {
        return false;
    };
    match nodes.into_iter().nth(first) {
        Some(node) if rest.is_empty() => {
            node.set_open(open);
            true
        }
        Some(node) => set_open_at_path(node.nested_mut(), rest, open),
        None => false,
    }
}
