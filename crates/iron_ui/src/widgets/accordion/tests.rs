//! Behaviour tests for the accordion widget, driven through layout, events and ticks.

use std::time::Duration;

use super::*;
use crate::element::Element;
use crate::event::KeyCode;
use crate::renderer::{DrawCommand, Renderer};
use crate::widget::Widget;
use crate::widgets::space::space;

const MS_200: Duration = Duration::from_millis(200);
const FRAME: Duration = Duration::from_millis(16);
const EPS: f32 = 1e-3;

#[derive(Debug, Clone, PartialEq)]
enum Msg {
    Edit(usize),
}

fn body(width: f32, height: f32) -> Element<Msg> {
    Element::new(space(width, height))
}

/// Three weeks with bodies 100, 60 and 140 high.
fn three_weeks() -> Accordion<Msg> {
    Accordion::new(
        vec![
            Section::new("Week 1", body(200.0, 100.0)),
            Section::new("Week 2", body(200.0, 60.0)),
            Section::new("Week 3", body(200.0, 140.0)),
        ],
        MS_200,
    )
    .loaded(true)
}

fn layout(accordion: &mut Accordion<Msg>) -> Bounds {
    let size = accordion.layout(Size::new(400.0, f32::INFINITY));
    Bounds::from_size(0.0, 0.0, size)
}

fn click_header(accordion: &mut Accordion<Msg>, index: usize) -> Option<Msg> {
    let bounds = layout(accordion);
    let header = accordion
        .header_bounds(index)
        .expect("header laid out");
    let (x, y) = header.center();
    accordion.on_event(&Event::click(x, y), bounds)
}

fn settle(accordion: &mut Accordion<Msg>) {
    for _ in 0..100 {
        layout(accordion);
        if !accordion.tick(FRAME) {
            return;
        }
    }
    panic!("animations did not settle");
}

#[test]
fn test_every_section_gets_a_closed_controller() {
    let accordion = three_weeks();
    assert_eq!(accordion.section_count(), 3);
    for i in 0..3 {
        assert_eq!(accordion.phase(i), Some(SectionPhase::Closed));
    }
    assert_eq!(accordion.phase(3), None);
}

#[test]
fn test_opening_second_section_animates_to_full_height() {
    let mut accordion = three_weeks();
    click_header(&mut accordion, 1);
    assert_eq!(accordion.phase(1), Some(SectionPhase::Opening));

    layout(&mut accordion);
    accordion.tick(Duration::ZERO);
    let c = accordion.controller(1).unwrap();
    assert!(c.is_expanding());
    assert_eq!(c.current_height(), 40.0);

    accordion.tick(Duration::from_millis(100));
    let mid = accordion.controller(1).unwrap().current_height();
    assert!(mid > 40.0 && mid < 100.0);

    accordion.tick(Duration::from_millis(100));
    let c = accordion.controller(1).unwrap();
    assert_eq!(c.phase(), SectionPhase::Open);
    assert_eq!(c.current_height(), 100.0);
    assert_eq!(c.chevron_rotation(), -180.0);
    assert_eq!(c.underline_progress(), 1.0);
    assert!(!c.clips_overflow());
    assert_eq!(c.inline_height(), None);

    // Siblings untouched
    assert_eq!(accordion.phase(0), Some(SectionPhase::Closed));
    assert_eq!(accordion.phase(2), Some(SectionPhase::Closed));
}

#[test]
fn test_section_heights_follow_animation() {
    let mut accordion = three_weeks();
    let before = layout(&mut accordion).height;
    // 3 headers + 2 gaps
    assert!((before - (3.0 * 40.0 + 2.0 * 8.0)).abs() < EPS);

    click_header(&mut accordion, 2);
    settle(&mut accordion);
    let after = layout(&mut accordion).height;
    assert!((after - before - 140.0).abs() < EPS);
}

#[test]
fn test_full_click_cycle() {
    let mut accordion = three_weeks();
    click_header(&mut accordion, 0);
    settle(&mut accordion);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Open));

    click_header(&mut accordion, 0);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Closing));
    settle(&mut accordion);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Closed));
    assert!(!accordion.controller(0).unwrap().is_open());
}

#[test]
fn test_reclick_reverses_direction() {
    let mut accordion = three_weeks();
    click_header(&mut accordion, 0);
    accordion.tick(FRAME);
    accordion.tick(FRAME);

    click_header(&mut accordion, 0);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Closing));
    assert_eq!(accordion.controller(0).unwrap().cancellations(), 1);

    accordion.tick(FRAME);
    click_header(&mut accordion, 0);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Opening));
    assert_eq!(accordion.controller(0).unwrap().cancellations(), 2);

    settle(&mut accordion);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Open));
    assert_eq!(accordion.controller(0).unwrap().cancellations(), 2);
}

#[test]
fn test_stabilized_width_is_widest_open_section_plus_one() {
    let mut accordion = Accordion::new(
        vec![
            Section::new("Week 1", body(200.0, 10.0)),
            Section::new("Week 2", body(350.0, 10.0)),
        ],
        MS_200,
    );
    layout(&mut accordion);
    let width = accordion.container_width().expect("width applied");
    assert!((width.width - 351.0).abs() < EPS);
    assert_eq!(width.policy, WidthPolicy::Minimum);

    // Measuring left everything closed
    assert_eq!(accordion.phase(0), Some(SectionPhase::Closed));
    assert_eq!(accordion.phase(1), Some(SectionPhase::Closed));
}

#[test]
fn test_fixed_policy_overrides_available_width() {
    let mut accordion = three_weeks().width_policy(WidthPolicy::Fixed);
    let bounds = layout(&mut accordion);
    assert!((bounds.width - 201.0).abs() < EPS);

    let mut minimum = three_weeks();
    let bounds = layout(&mut minimum);
    assert!((bounds.width - 400.0).abs() < EPS);
}

#[test]
fn test_empty_list_has_no_width_and_no_controllers() {
    let mut accordion: Accordion<Msg> = Accordion::new(Vec::new(), MS_200);
    let bounds = layout(&mut accordion);
    assert_eq!(accordion.section_count(), 0);
    assert!(accordion.controller(0).is_none());
    assert_eq!(accordion.container_width(), None);
    assert_eq!(bounds.height, 0.0);
    assert!(!accordion.tick(FRAME));
}

#[test]
fn test_nested_open_state_survives_stabilizer() {
    let inner = Accordion::new(
        vec![Section::new("Day 1", body(300.0, 50.0)).open(true)],
        MS_200,
    );
    let mut outer = Accordion::new(
        vec![Section::new("Week 1", Element::new(inner))],
        MS_200,
    );
    layout(&mut outer);

    // Inner stabilizes at 301 and the outer measures that plus its own pixel
    let width = outer.container_width().unwrap();
    assert!((width.width - 302.0).abs() < EPS);

    let mut nodes = outer.disclosures_mut();
    let week = &mut nodes[0];
    assert!(!week.is_open(), "outer section restored to closed");
    let days = week.nested_mut();
    assert!(days[0].is_open(), "inner section restored to open");
}

#[test]
fn test_conditional_click_emits_and_still_toggles() {
    let mut accordion = Accordion::new(
        vec![
            Section::new("Squat", body(100.0, 30.0)).conditional_click(|| Msg::Edit(4)),
            Section::new("Bench", body(100.0, 30.0)),
        ],
        MS_200,
    );
    assert_eq!(click_header(&mut accordion, 0), Some(Msg::Edit(4)));
    assert_eq!(accordion.phase(0), Some(SectionPhase::Opening));

    assert_eq!(click_header(&mut accordion, 1), None);
    assert_eq!(accordion.phase(1), Some(SectionPhase::Opening));
}

#[test]
fn test_header_extras_are_outside_the_disclosure() {
    let mut accordion = Accordion::new(
        vec![Section::new("Squat", body(100.0, 30.0)).header_extras(Element::new(space(24.0, 24.0)))],
        MS_200,
    );
    let bounds = layout(&mut accordion);
    let header = accordion.header_bounds(0).unwrap();
    assert!((header.x - 36.0).abs() < EPS);

    // Clicking the extras does not toggle
    accordion.on_event(&Event::click(10.0, 20.0), bounds);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Closed));

    let mut nodes = accordion.disclosures_mut();
    assert!(nodes[0].nested_mut().is_empty());
}

#[test]
fn test_keyboard_toggles_hovered_header() {
    let mut accordion = three_weeks();
    let bounds = layout(&mut accordion);

    accordion.on_event(&Event::KeyPress { key: KeyCode::Enter }, bounds);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Closed));

    let (x, y) = accordion.header_bounds(0).unwrap().center();
    accordion.on_event(&Event::MouseMove { position: (x, y) }, bounds);
    accordion.on_event(&Event::KeyPress { key: KeyCode::Space }, bounds);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Opening));

    accordion.on_event(&Event::CursorLeft, bounds);
    accordion.on_event(&Event::KeyPress { key: KeyCode::Enter }, bounds);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Opening));
}

/// Body that claims the Enter key for itself.
struct EnterField;

impl Widget<Msg> for EnterField {
    fn layout(&mut self, _available: Size) -> Size {
        Size::new(200.0, 50.0)
    }

    fn draw(&self, _renderer: &mut Renderer, _bounds: Bounds) {}

    fn on_event(&mut self, event: &Event, _bounds: Bounds) -> Option<Msg> {
        match event {
            Event::KeyPress { key: KeyCode::Enter } => Some(Msg::Edit(9)),
            _ => None,
        }
    }
}

#[test]
fn test_body_gets_keys_before_header_toggle() {
    let mut accordion = Accordion::new(
        vec![Section::new("Week 1", Element::new(EnterField))],
        MS_200,
    )
    .loaded(true);
    click_header(&mut accordion, 0);
    settle(&mut accordion);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Open));

    let bounds = layout(&mut accordion);
    let (x, y) = accordion.header_bounds(0).unwrap().center();
    accordion.on_event(&Event::MouseMove { position: (x, y) }, bounds);

    let msg = accordion.on_event(&Event::KeyPress { key: KeyCode::Enter }, bounds);
    assert_eq!(msg, Some(Msg::Edit(9)));
    assert_eq!(accordion.phase(0), Some(SectionPhase::Open), "body consumed Enter");

    let msg = accordion.on_event(&Event::KeyPress { key: KeyCode::Space }, bounds);
    assert_eq!(msg, None);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Closing));
}

#[test]
fn test_set_sections_keeps_open_state_by_position() {
    let mut accordion = three_weeks();
    click_header(&mut accordion, 1);
    settle(&mut accordion);

    accordion.set_sections(vec![
        Section::new("Week 1", body(200.0, 10.0)),
        Section::new("Week 2", body(200.0, 10.0)),
        Section::new("Week 3", body(200.0, 10.0)),
        Section::new("Week 4", body(200.0, 10.0)).open(true),
    ]);
    assert_eq!(accordion.phase(0), Some(SectionPhase::Closed));
    assert_eq!(accordion.phase(1), Some(SectionPhase::Open));
    assert_eq!(accordion.phase(2), Some(SectionPhase::Closed));
    assert_eq!(accordion.phase(3), Some(SectionPhase::Open));
}

#[test]
fn test_stabilizer_reruns_on_load_signal_change() {
    let mut accordion = three_weeks();
    layout(&mut accordion);
    assert!((accordion.container_width().unwrap().width - 201.0).abs() < EPS);

    accordion.set_sections(vec![
        Section::new("Week 1", body(500.0, 10.0)),
        Section::new("Week 2", body(200.0, 10.0)),
        Section::new("Week 3", body(200.0, 10.0)),
    ]);
    layout(&mut accordion);
    assert!(
        (accordion.container_width().unwrap().width - 201.0).abs() < EPS,
        "same count and signal keep the old width"
    );

    accordion.set_loaded(2u64);
    layout(&mut accordion);
    assert!((accordion.container_width().unwrap().width - 501.0).abs() < EPS);
}

#[test]
fn test_draw_records_group_headings_and_hit_regions() {
    let mut accordion = three_weeks();
    let bounds = layout(&mut accordion);
    let mut renderer = Renderer::new();
    accordion.draw(&mut renderer, bounds);

    let commands = renderer.commands();
    assert_eq!(commands.first(), Some(&DrawCommand::BeginGroup(accordion.scope())));
    assert_eq!(commands.last(), Some(&DrawCommand::EndGroup));
    let headings: Vec<&str> = commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(headings, ["Week 1", "Week 2", "Week 3"]);

    let regions = renderer.hit_regions();
    assert_eq!(regions.len(), 3);
    assert!(regions.iter().all(|(key, _)| key.scope == accordion.scope()));
    assert_eq!(regions[2].0.index, 2);
}

#[test]
fn test_overflow_clipped_only_while_transitioning() {
    let mut accordion = three_weeks();
    click_header(&mut accordion, 0);
    let bounds = layout(&mut accordion);
    let mut renderer = Renderer::new();
    accordion.draw(&mut renderer, bounds);
    assert!(renderer
        .commands()
        .iter()
        .any(|cmd| matches!(cmd, DrawCommand::PushClip(_))));

    settle(&mut accordion);
    let bounds = layout(&mut accordion);
    renderer.clear();
    accordion.draw(&mut renderer, bounds);
    assert!(!renderer
        .commands()
        .iter()
        .any(|cmd| matches!(cmd, DrawCommand::PushClip(_))));
}

#[test]
fn test_instances_get_distinct_scopes() {
    let a = three_weeks();
    let b = three_weeks();
    let c = three_weeks();
    // Three random six-letter keys colliding is vanishingly unlikely
    assert!(a.scope() != b.scope() || b.scope() != c.scope());
}

#[test]
fn test_load_signal_conversions() {
    assert_eq!(LoadSignal::from(false), LoadSignal(0));
    assert_eq!(LoadSignal::from(true), LoadSignal(1));
    assert_eq!(LoadSignal::from(7usize), LoadSignal(7));
}
