//! Per-section open/close animation handler.
//!
//! Each section owns one [`SectionController`]. It holds the section's open
//! attribute, the two transient flags (`is_expanding`, `is_closing`) and
//! exclusive handles to the three animations that run together: height,
//! chevron rotation and heading underline.
//!
//! Opening is split over two frames. The click records the current height,
//! sets the open attribute so the body takes part in layout, and defers the
//! expand. The next [`SectionController::tick`] reads the fresh content height
//! and starts the animations.

use std::time::Duration;

use crate::animation::{Easing, Tween};
use crate::constants::{CHEVRON_CLOSED_DEGREES, CHEVRON_OPEN_DEGREES};

/// Observable state of a section, derived from its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Measured heights of a section's two parts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionMetrics {
    header_height: f32,
    content_height: f32,
}

impl SectionMetrics {
    /// # Panics
    ///
    /// Panics if either height is negative or not finite.
    pub fn new(header_height: f32, content_height: f32) -> Self {
        assert!(
            header_height.is_finite() && header_height >= 0.0,
            "section header height must be finite and non-negative, got {header_height}"
        );
        assert!(
            content_height.is_finite() && content_height >= 0.0,
            "section content height must be finite and non-negative, got {content_height}"
        );
        Self {
            header_height,
            content_height,
        }
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Header plus content
    pub fn open_height(&self) -> f32 {
        self.header_height + self.content_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Expand,
    Collapse,
}

#[derive(Debug, Clone, Copy)]
struct HeightAnimation {
    tween: Tween,
    direction: Direction,
}

/// Drives one section's open/close transitions.
#[derive(Debug, Clone)]
pub struct SectionController {
    open: bool,
    is_expanding: bool,
    is_closing: bool,
    /// An expand is waiting for the next frame
    expand_pending: bool,
    duration: Duration,
    metrics: SectionMetrics,
    height: Option<HeightAnimation>,
    chevron: Option<Tween>,
    underline: Option<Tween>,
    chevron_rest: f32,
    underline_rest: f32,
    /// Explicit height held while an expand is pending
    inline_height: Option<f32>,
    clip_overflow: bool,
    cancellations: u32,
}

impl SectionController {
    pub fn new(open: bool, duration: Duration) -> Self {
        Self {
            open,
            is_expanding: false,
            is_closing: false,
            expand_pending: false,
            duration,
            metrics: SectionMetrics::default(),
            height: None,
            chevron: None,
            underline: None,
            chevron_rest: rest_rotation(open),
            underline_rest: rest_underline(open),
            inline_height: None,
            clip_overflow: false,
            cancellations: 0,
        }
    }

    /// The open attribute. Stays true for the whole of a close transition.
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_expanding(&self) -> bool {
        self.is_expanding
    }

    pub fn is_closing(&self) -> bool {
        self.is_closing
    }

    pub fn phase(&self) -> SectionPhase {
        if self.expand_pending || self.is_expanding {
            SectionPhase::Opening
        } else if self.is_closing {
            SectionPhase::Closing
        } else if self.open {
            SectionPhase::Open
        } else {
            SectionPhase::Closed
        }
    }

    pub fn metrics(&self) -> SectionMetrics {
        self.metrics
    }

    /// Update the measured heights. Called from layout every frame.
    pub fn set_metrics(&mut self, metrics: SectionMetrics) {
        self.metrics = metrics;
    }

    /// Set the open attribute directly, leaving any running animation alone.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if !self.is_animating() {
            self.chevron_rest = rest_rotation(open);
            self.underline_rest = rest_underline(open);
        }
    }

    /// React to a header click.
    ///
    /// A section that is closing (or closed) opens; one that is expanding
    /// (or open) closes. Direction follows the target of the running
    /// animation, not where it currently is.
    pub fn handle_toggle(&mut self) {
        if self.is_closing || !self.open {
            self.open();
        } else {
            self.close();
        }
    }

    /// Start opening. The height animation begins on the next tick.
    ///
    /// Does nothing if the section is already open or opening.
    pub fn open(&mut self) {
        if matches!(self.phase(), SectionPhase::Open | SectionPhase::Opening) {
            return;
        }
        let held = self.current_height();
        self.cancel_animations();
        self.clip_overflow = true;
        self.inline_height = Some(held);
        self.open = true;
        self.expand_pending = true;
        log::trace!("section open requested, holding height {}", held);
    }

    /// Start closing from the current height down to the header.
    pub fn close(&mut self) {
        let start = self.current_height();
        let end = self.metrics.header_height;
        self.expand_pending = false;
        self.cancel_animations();
        self.clip_overflow = true;
        self.is_closing = true;

        self.height = Some(HeightAnimation {
            tween: Tween::new(start, end, self.duration).easing(Easing::EaseOut),
            direction: Direction::Collapse,
        });
        self.chevron = Some(Tween::new(
            CHEVRON_OPEN_DEGREES,
            CHEVRON_CLOSED_DEGREES,
            self.duration,
        ));
        self.underline = Some(Tween::new(1.0, 0.0, self.duration));
        log::trace!("section closing {} -> {}", start, end);
    }

    /// Advance running animations, then run a deferred expand.
    ///
    /// Returns true while the section is still transitioning.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if let Some(height) = &mut self.height {
            height.tween.tick(dt);
            let finished = height.tween.is_complete().then_some(height.direction);
            if let Some(t) = &mut self.chevron {
                t.tick(dt);
            }
            if let Some(t) = &mut self.underline {
                t.tick(dt);
            }
            if let Some(direction) = finished {
                self.finish(direction == Direction::Expand);
            }
        }

        if self.expand_pending {
            self.expand_pending = false;
            self.expand();
        }

        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.height.is_some() || self.expand_pending
    }

    /// Height the section occupies right now.
    pub fn current_height(&self) -> f32 {
        if let Some(height) = &self.height {
            return height.tween.value();
        }
        if let Some(held) = self.inline_height {
            return held;
        }
        if self.open {
            self.metrics.open_height()
        } else {
            self.metrics.header_height
        }
    }

    /// Chevron rotation in degrees (0 = closed, -180 = open)
    pub fn chevron_rotation(&self) -> f32 {
        self.chevron.map_or(self.chevron_rest, |t| t.value())
    }

    /// Fraction of the heading underline revealed, 0.0..=1.0
    pub fn underline_progress(&self) -> f32 {
        self.underline.map_or(self.underline_rest, |t| t.value())
    }

    /// Whether content must be clipped to the section's current height
    pub fn clips_overflow(&self) -> bool {
        self.clip_overflow
    }

    /// Explicit height override, if one is held
    pub fn inline_height(&self) -> Option<f32> {
        self.inline_height
    }

    /// How many height animations have been cancelled over this controller's life
    pub fn cancellations(&self) -> u32 {
        self.cancellations
    }

    fn expand(&mut self) {
        let start = self.current_height();
        let end = self.metrics.open_height();
        self.cancel_animations();
        self.is_expanding = true;

        self.height = Some(HeightAnimation {
            tween: Tween::new(start, end, self.duration).easing(Easing::EaseOut),
            direction: Direction::Expand,
        });
        self.chevron = Some(Tween::new(
            CHEVRON_CLOSED_DEGREES,
            CHEVRON_OPEN_DEGREES,
            self.duration,
        ));
        self.underline = Some(Tween::new(0.0, 1.0, self.duration));
        log::trace!("section expanding {} -> {}", start, end);
    }

    /// Drop all three animations. Cancelling the height animation clears the
    /// flag of its own direction; the open attribute is left as it is.
    fn cancel_animations(&mut self) {
        if let Some(height) = self.height.take() {
            match height.direction {
                Direction::Expand => self.is_expanding = false,
                Direction::Collapse => self.is_closing = false,
            }
            self.cancellations += 1;
            log::trace!(
                "section animation cancelled at {} ({:?})",
                height.tween.value(),
                height.direction
            );
        }
        self.chevron = None;
        self.underline = None;
    }

    fn finish(&mut self, open: bool) {
        self.open = open;
        self.height = None;
        self.chevron = None;
        self.underline = None;
        self.is_expanding = false;
        self.is_closing = false;
        self.chevron_rest = rest_rotation(open);
        self.underline_rest = rest_underline(open);
        self.inline_height = None;
        self.clip_overflow = false;
    }
}

fn rest_rotation(open: bool) -> f32 {
    if open {
        CHEVRON_OPEN_DEGREES
    } else {
        CHEVRON_CLOSED_DEGREES
    }
}

fn rest_underline(open: bool) -> f32 {
    if open {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_200: Duration = Duration::from_millis(200);
    const EPS: f32 = 1e-3;

    fn closed() -> SectionController {
        let mut c = SectionController::new(false, MS_200);
        c.set_metrics(SectionMetrics::new(40.0, 60.0));
        c
    }

    fn opened() -> SectionController {
        let mut c = SectionController::new(true, MS_200);
        c.set_metrics(SectionMetrics::new(40.0, 60.0));
        c
    }

    #[test]
    fn test_initial_rest_state() {
        let c = closed();
        assert_eq!(c.phase(), SectionPhase::Closed);
        assert_eq!(c.current_height(), 40.0);
        assert_eq!(c.chevron_rotation(), 0.0);
        assert_eq!(c.underline_progress(), 0.0);

        let o = opened();
        assert_eq!(o.phase(), SectionPhase::Open);
        assert_eq!(o.current_height(), 100.0);
        assert_eq!(o.chevron_rotation(), -180.0);
        assert_eq!(o.underline_progress(), 1.0);
    }

    #[test]
    fn test_open_defers_until_next_frame() {
        let mut c = closed();
        c.handle_toggle();

        assert_eq!(c.phase(), SectionPhase::Opening);
        assert!(c.is_open(), "open attribute is set immediately");
        assert!(!c.is_expanding(), "animation has not started yet");
        assert_eq!(c.inline_height(), Some(40.0));
        assert!(c.clips_overflow());

        c.tick(Duration::ZERO);
        assert!(c.is_expanding());
        assert_eq!(c.current_height(), 40.0);
    }

    #[test]
    fn test_full_open_then_close_cycle() {
        let mut c = closed();
        c.handle_toggle();
        c.tick(Duration::ZERO);

        c.tick(Duration::from_millis(100));
        assert_eq!(c.phase(), SectionPhase::Opening);
        // ease-out at t=0.5 covers 75% of the distance
        assert!((c.current_height() - 85.0).abs() < EPS);
        assert!((c.chevron_rotation() + 90.0).abs() < EPS);
        assert!((c.underline_progress() - 0.5).abs() < EPS);

        let still_animating = c.tick(Duration::from_millis(100));
        assert!(!still_animating);
        assert_eq!(c.phase(), SectionPhase::Open);
        assert_eq!(c.current_height(), 100.0);
        assert_eq!(c.chevron_rotation(), -180.0);
        assert_eq!(c.underline_progress(), 1.0);
        assert_eq!(c.inline_height(), None);
        assert!(!c.clips_overflow());

        c.handle_toggle();
        assert_eq!(c.phase(), SectionPhase::Closing);
        assert!(c.is_open(), "stays open until the close finishes");
        assert!(c.clips_overflow());
        c.tick(MS_200);
        assert_eq!(c.phase(), SectionPhase::Closed);
        assert!(!c.is_open());
        assert_eq!(c.current_height(), 40.0);
        assert_eq!(c.chevron_rotation(), 0.0);
        assert_eq!(c.underline_progress(), 0.0);
        assert!(!c.clips_overflow());
    }

    #[test]
    fn test_click_while_opening_closes() {
        let mut c = closed();
        c.handle_toggle();
        c.tick(Duration::ZERO);
        c.tick(Duration::from_millis(100));

        c.handle_toggle();
        assert_eq!(c.phase(), SectionPhase::Closing);
        assert!(!c.is_expanding());
        assert!(c.is_closing());
        assert_eq!(c.cancellations(), 1);
        // Starts from where the expand had got to
        assert!((c.current_height() - 85.0).abs() < EPS);

        c.tick(MS_200);
        assert_eq!(c.phase(), SectionPhase::Closed);
    }

    #[test]
    fn test_click_while_closing_reopens() {
        let mut c = opened();
        c.handle_toggle();
        c.tick(Duration::from_millis(100));
        let mid = c.current_height();
        assert!(mid < 100.0 && mid > 40.0);

        c.handle_toggle();
        assert_eq!(c.phase(), SectionPhase::Opening);
        assert!(!c.is_closing(), "cancelled close clears its flag");
        assert!(c.is_open());
        assert_eq!(c.cancellations(), 1);
        assert!((c.current_height() - mid).abs() < EPS, "no jump while the expand is pending");

        c.tick(Duration::ZERO);
        assert!(c.is_expanding());
        c.tick(MS_200);
        assert_eq!(c.phase(), SectionPhase::Open);
        assert_eq!(c.current_height(), 100.0);
    }

    #[test]
    fn test_close_before_deferred_expand_runs() {
        let mut c = closed();
        c.handle_toggle();
        // Second click lands before the next frame
        c.handle_toggle();
        assert_eq!(c.phase(), SectionPhase::Closing);

        c.tick(Duration::ZERO);
        assert!(!c.is_expanding(), "pending expand was dropped");
        c.tick(MS_200);
        assert_eq!(c.phase(), SectionPhase::Closed);
    }

    #[test]
    fn test_flags_are_never_both_set() {
        let mut c = closed();
        for step in 0..40 {
            if step % 3 == 0 {
                c.handle_toggle();
            }
            c.tick(Duration::from_millis(35));
            assert!(
                !(c.is_expanding() && c.is_closing()),
                "both flags set at step {step}"
            );
        }
    }

    #[test]
    fn test_each_reversal_cancels_exactly_once() {
        let mut c = closed();
        c.handle_toggle();
        c.tick(Duration::ZERO);
        assert_eq!(c.cancellations(), 0);

        for expected in 1..=5 {
            c.tick(Duration::from_millis(20));
            c.handle_toggle();
            if c.phase() == SectionPhase::Opening {
                c.tick(Duration::ZERO);
            }
            assert_eq!(c.cancellations(), expected);
        }
    }

    #[test]
    fn test_reopen_recomputes_target_from_metrics() {
        let mut c = opened();
        c.handle_toggle();
        c.tick(Duration::from_millis(50));

        // Content grew while closing
        c.set_metrics(SectionMetrics::new(40.0, 160.0));
        c.handle_toggle();
        c.tick(Duration::ZERO);
        c.tick(MS_200);
        assert_eq!(c.current_height(), 200.0);
    }

    #[test]
    fn test_set_open_does_not_animate() {
        let mut c = closed();
        c.set_open(true);
        assert_eq!(c.phase(), SectionPhase::Open);
        assert!(!c.is_animating());
        assert_eq!(c.chevron_rotation(), -180.0);
        c.set_open(false);
        assert_eq!(c.phase(), SectionPhase::Closed);
    }

    #[test]
    fn test_open_on_open_section_keeps_chevron() {
        let mut c = opened();
        c.open();
        assert_eq!(c.phase(), SectionPhase::Open);
        assert!(!c.is_animating());
        assert_eq!(c.chevron_rotation(), -180.0);
        assert_eq!(c.underline_progress(), 1.0);

        let mut c = closed();
        c.open();
        c.tick(Duration::ZERO);
        c.tick(Duration::from_millis(100));
        let height = c.current_height();
        c.open();
        assert_eq!(c.phase(), SectionPhase::Opening);
        assert_eq!(c.cancellations(), 0);
        assert!((c.current_height() - height).abs() < EPS);
    }

    #[test]
    #[should_panic(expected = "header height")]
    fn test_invalid_metrics_fail_fast() {
        let _ = SectionMetrics::new(f32::NAN, 10.0);
    }
}
